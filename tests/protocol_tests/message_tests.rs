//! Message Tests
//!
//! Single-value layouts: function control and single gain, both directions.

use rmdwire::protocol::{
    CommandType, GetSingleControllerGainRequest, GetSingleControllerGainResponse, Message,
    Request, Response, SetFunctionControlRequest, SetFunctionControlResponse,
    SetSingleControllerGainPersistentlyRequest, SetSingleControllerGainPersistentlyResponse,
    SetSingleControllerGainRequest, SetSingleControllerGainResponse, COMMAND_OFFSET,
    INDEX_OFFSET, VALUE_OFFSET,
};
use rmdwire::{Frame, FunctionControlType, GainType, RmdError};

// =============================================================================
// Function Control Tests
// =============================================================================

#[test]
fn test_function_control_request_layout() {
    let request = SetFunctionControlRequest::new(FunctionControlType::SetCanid, 123);
    assert_eq!(
        request.raw_bytes(),
        &[0x20, 0x05, 0x00, 0x00, 0x7B, 0x00, 0x00, 0x00]
    );
}

#[test]
fn test_function_control_request_decodes_back() {
    let request = SetFunctionControlRequest::new(FunctionControlType::SetCanid, 123);
    assert_eq!(request.function_type().unwrap(), FunctionControlType::SetCanid);
    assert_eq!(request.raw_function_type(), 0x05);
    assert_eq!(request.value(), 123);

    let reread = SetFunctionControlRequest::from_frame(*request.frame());
    assert_eq!(reread, request);
}

#[test]
fn test_function_control_value_is_little_endian() {
    let request = SetFunctionControlRequest::new(
        FunctionControlType::SetMaxPositivePositionForPositionMode,
        0xDEAD_BEEF,
    );
    let bytes = request.raw_bytes();
    assert_eq!(bytes[1], 0x06);
    assert_eq!(&bytes[VALUE_OFFSET..], &[0xEF, 0xBE, 0xAD, 0xDE]);
    assert_eq!(request.value(), 0xDEAD_BEEF);
}

#[test]
fn test_function_control_response_decode() {
    let frame = Frame::from_bytes([0x20, 0x02, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00]);
    let response = SetFunctionControlResponse::from_frame(frame);
    assert_eq!(
        response.function_type().unwrap(),
        FunctionControlType::CanidFilterEnable
    );
    assert_eq!(response.value(), 1);
}

#[test]
fn test_function_control_response_any_frame_decodes() {
    let response = SetFunctionControlResponse::from_frame(Frame::from_bytes([0xFF; 8]));
    assert_eq!(response.value(), u32::MAX);
    assert_eq!(response.raw_function_type(), 0xFF);
}

#[test]
fn test_function_control_unknown_type() {
    let frame = Frame::from_bytes([0x20, 0x09, 0x00, 0x00, 0x2A, 0x00, 0x00, 0x00]);
    let response = SetFunctionControlResponse::from_frame(frame);

    match response.function_type() {
        Err(RmdError::UnknownVariant { kind, value }) => {
            assert_eq!(kind, "function control type");
            assert_eq!(value, 0x09);
        }
        other => panic!("Expected UnknownVariant, got {:?}", other),
    }
    // The rest of the frame is still readable
    assert_eq!(response.value(), 42);
}

#[test]
fn test_function_control_response_builder_matches_request() {
    let request = SetFunctionControlRequest::new(FunctionControlType::ClearMultiTurnValue, 7);
    let response = SetFunctionControlResponse::new(FunctionControlType::ClearMultiTurnValue, 7);
    assert_eq!(request.raw_bytes(), response.raw_bytes());
}

// =============================================================================
// Gain Tests
// =============================================================================

#[test]
fn test_get_gain_request_layout() {
    let request = GetSingleControllerGainRequest::new(GainType::PositionLoopKd);
    assert_eq!(
        request.raw_bytes(),
        &[0x30, 0x09, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00]
    );
    assert_eq!(request.gain_type().unwrap(), GainType::PositionLoopKd);
}

#[test]
fn test_set_gain_request_layout() {
    let request = SetSingleControllerGainRequest::new(GainType::CurrentLoopKp, 1.0);
    let bytes = request.raw_bytes();
    assert_eq!(bytes[COMMAND_OFFSET], 0x31);
    assert_eq!(bytes[INDEX_OFFSET], 0x01);
    assert_eq!(&bytes[2..4], &[0x00, 0x00]);
    assert_eq!(&bytes[VALUE_OFFSET..], &1.0f32.to_ne_bytes());
    assert_eq!(request.value(), 1.0);
    assert_eq!(request.gain_type().unwrap(), GainType::CurrentLoopKp);
}

#[test]
fn test_set_gain_persistently_uses_rom_opcode() {
    let ram = SetSingleControllerGainRequest::new(GainType::SpeedLoopKi, 0.3);
    let rom = SetSingleControllerGainPersistentlyRequest::new(GainType::SpeedLoopKi, 0.3);
    assert_eq!(ram.raw_bytes()[0], 0x31);
    assert_eq!(rom.raw_bytes()[0], 0x32);
    assert_eq!(&ram.raw_bytes()[1..], &rom.raw_bytes()[1..]);
}

#[test]
fn test_gain_response_byte_reversed_value() {
    // 1.0f32 = 0x3F800000, MSB at offset 7; bytes 2..4 are ignored
    let frame = Frame::from_bytes([0x30, 0x01, 0xAA, 0xBB, 0x00, 0x00, 0x80, 0x3F]);
    let response = GetSingleControllerGainResponse::from_frame(frame);
    assert_eq!(response.value(), 1.0);
    assert_eq!(response.gain_type().unwrap(), GainType::CurrentLoopKp);
}

#[test]
fn test_gain_response_negative_value() {
    let frame = Frame::from_bytes([0x31, 0x07, 0x00, 0x00, 0x00, 0x00, 0x20, 0xC0]);
    let response = SetSingleControllerGainResponse::from_frame(frame);
    assert_eq!(response.value(), -2.5);
    assert_eq!(response.gain_type().unwrap(), GainType::PositionLoopKp);
}

#[test]
fn test_gain_response_builder_reads_back_exactly() {
    for value in [0.0f32, 0.3, -1.5, 1234.5678] {
        let response = SetSingleControllerGainPersistentlyResponse::new(GainType::SpeedLoopKp, value);
        assert_eq!(response.value().to_bits(), value.to_bits());
        assert_eq!(response.raw_bytes()[0], 0x32);
        assert_eq!(&response.raw_bytes()[2..4], &[0x00, 0x00]);
    }
}

#[test]
fn test_gain_unknown_type() {
    let frame = Frame::from_bytes([0x30, 0x03, 0x00, 0x00, 0x00, 0x00, 0x80, 0x3F]);
    let response = GetSingleControllerGainResponse::from_frame(frame);
    assert!(matches!(
        response.gain_type(),
        Err(RmdError::UnknownVariant {
            kind: "gain type",
            value: 0x03
        })
    ));
    assert_eq!(response.raw_gain_type(), 0x03);
    assert_eq!(response.value(), 1.0);
}

// =============================================================================
// Envelope Tests
// =============================================================================

#[test]
fn test_expected_reply_commands() {
    let function = SetFunctionControlRequest::new(FunctionControlType::SetCanid, 1);
    let get = GetSingleControllerGainRequest::new(GainType::SpeedLoopKp);
    let set = SetSingleControllerGainRequest::new(GainType::SpeedLoopKp, 1.0);
    let rom = SetSingleControllerGainPersistentlyRequest::new(GainType::SpeedLoopKp, 1.0);

    assert_eq!(function.expected_reply_command(), Some(0x20));
    assert_eq!(get.expected_reply_command(), Some(0x30));
    assert_eq!(set.expected_reply_command(), Some(0x31));
    assert_eq!(rom.expected_reply_command(), Some(0x32));
}

#[test]
fn test_command_byte_reads_opcode() {
    let response = SetSingleControllerGainResponse::from_frame(Frame::from_bytes([0x31; 8]));
    assert_eq!(response.command_byte(), 0x31);

    let request = SetFunctionControlRequest::new(FunctionControlType::SetCanid, 1);
    assert_eq!(request.command_byte(), 0x20);
}

#[test]
fn test_command_type_opcodes() {
    for ty in [
        CommandType::FunctionControl,
        CommandType::ReadPidParameters,
        CommandType::WritePidParametersToRam,
        CommandType::WritePidParametersToRom,
    ] {
        assert_eq!(CommandType::from_byte(ty.opcode()), Some(ty));
    }
    assert_eq!(CommandType::from_byte(0x9C), None);
}

#[test]
fn test_unused_bytes_stay_zero() {
    for function in FunctionControlType::ALL {
        let request = SetFunctionControlRequest::new(function, 0);
        assert_eq!(&request.raw_bytes()[2..], &[0u8; 6]);
    }
    for gain in GainType::ALL {
        let request = GetSingleControllerGainRequest::new(gain);
        assert_eq!(&request.raw_bytes()[2..], &[0u8; 6]);
        let request = SetSingleControllerGainRequest::new(gain, 0.0);
        assert_eq!(&request.raw_bytes()[2..], &[0u8; 6]);
    }
}

// =============================================================================
// Index Type Tests
// =============================================================================

#[test]
fn test_gain_type_names() {
    for gain in GainType::ALL {
        assert_eq!(gain.to_string().parse::<GainType>().unwrap(), gain);
        assert_eq!(GainType::try_from(u8::from(gain)).unwrap(), gain);
    }
    assert_eq!("POSITION_LOOP_KP".parse::<GainType>().unwrap(), GainType::PositionLoopKp);
    assert_eq!("0x09".parse::<GainType>().unwrap(), GainType::PositionLoopKd);
    assert_eq!("4".parse::<GainType>().unwrap(), GainType::SpeedLoopKp);
    assert!(matches!(
        "3".parse::<GainType>(),
        Err(RmdError::UnknownVariant { value: 3, .. })
    ));
    assert!(matches!("bogus".parse::<GainType>(), Err(RmdError::Config(_))));
}

#[test]
fn test_function_control_type_names() {
    for function in FunctionControlType::ALL {
        assert_eq!(
            function.to_string().parse::<FunctionControlType>().unwrap(),
            function
        );
    }
    assert_eq!(
        "set-canid".parse::<FunctionControlType>().unwrap(),
        FunctionControlType::SetCanid
    );
    assert_eq!(FunctionControlType::from_byte(0x00), None);
    assert_eq!(FunctionControlType::from_byte(0x08), None);
}

#[test]
fn test_index_types_serialize_kebab_case() {
    assert_eq!(
        serde_json::to_string(&GainType::PositionLoopKd).unwrap(),
        "\"position-loop-kd\""
    );
    assert_eq!(
        serde_json::to_string(&FunctionControlType::SetCanid).unwrap(),
        "\"set-canid\""
    );
}
