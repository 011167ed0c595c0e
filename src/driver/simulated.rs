//! Simulated actuator
//!
//! An in-process [`Driver`] that answers frames the way an RMD actuator does:
//! - function control echoes the request and applies known settings
//! - gain reads/writes keep a RAM and a ROM gain table
//! - motion control tracks the commanded position and velocity exactly and
//!   reports a PD torque on top of the feedforward term
//!
//! Frames addressed to another actuator id, or carrying an opcode the model
//! does not know, get no reply and fail with [`RmdError::Timeout`].

use std::collections::{HashMap, VecDeque};

use parking_lot::Mutex;

use crate::config::Config;
use crate::error::{Result, RmdError};
use crate::frame::Frame;
use crate::protocol::{
    CommandType, GetSingleControllerGainResponse, Message, MotionControlRequest,
    MotionControlResponse, SetFunctionControlRequest,
    SetSingleControllerGainPersistentlyRequest, SetSingleControllerGainPersistentlyResponse,
    SetSingleControllerGainRequest, SetSingleControllerGainResponse, COMMAND_OFFSET,
};
use crate::state::{FunctionControlType, GainType};

use super::{Address, Driver};

/// Reported in [`RmdError::Timeout`] when the model stays silent
const DEFAULT_TIMEOUT_MS: u64 = 10;

/// Received frames kept for inspection; older ones are dropped
const HISTORY_LEN: usize = 256;

/// Mutable actuator model, guarded by one lock
#[derive(Debug, Default)]
struct ActuatorModel {
    can_id: u32,
    ram_gains: HashMap<GainType, f32>,
    rom_gains: HashMap<GainType, f32>,
    functions: HashMap<FunctionControlType, u32>,
    position: f32,
    velocity: f32,
    sent: VecDeque<(Address, Frame)>,
}

/// In-process stand-in for one actuator on the bus
#[derive(Debug)]
pub struct SimulatedActuator {
    config: Config,
    timeout_ms: u64,
    model: Mutex<ActuatorModel>,
}

impl SimulatedActuator {
    /// A simulated actuator answering on `can_id` with default addressing
    pub fn new(can_id: u32) -> Self {
        Self::with_config(can_id, Config::default())
    }

    pub fn with_config(can_id: u32, config: Config) -> Self {
        Self {
            config,
            timeout_ms: DEFAULT_TIMEOUT_MS,
            model: Mutex::new(ActuatorModel {
                can_id,
                ..ActuatorModel::default()
            }),
        }
    }

    /// Preload a gain into both RAM and ROM
    pub fn with_gain(self, gain: GainType, value: f32) -> Self {
        {
            let mut model = self.model.lock();
            model.ram_gains.insert(gain, value);
            model.rom_gains.insert(gain, value);
        }
        self
    }

    /// Timeout reported when a frame gets no reply
    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    // =========================================================================
    // Inspection
    // =========================================================================

    /// CAN id the actuator currently answers on
    pub fn can_id(&self) -> u32 {
        self.model.lock().can_id
    }

    /// Active (RAM) value of a gain
    pub fn gain(&self, gain: GainType) -> f32 {
        self.model.lock().ram_gains.get(&gain).copied().unwrap_or(0.0)
    }

    /// Value of a gain that survives a power cycle
    pub fn persisted_gain(&self, gain: GainType) -> f32 {
        self.model.lock().rom_gains.get(&gain).copied().unwrap_or(0.0)
    }

    /// Last value written for a function, if any
    pub fn function_value(&self, function: FunctionControlType) -> Option<u32> {
        self.model.lock().functions.get(&function).copied()
    }

    /// The most recent received frames, oldest first
    pub fn sent_frames(&self) -> Vec<(Address, Frame)> {
        self.model.lock().sent.iter().copied().collect()
    }

    // =========================================================================
    // Frame Handling
    // =========================================================================

    fn handle(&self, frame: &Frame, address: Address) -> Result<Frame> {
        let mut model = self.model.lock();
        if model.sent.len() == HISTORY_LEN {
            model.sent.pop_front();
        }
        model.sent.push_back((address, *frame));

        if address.actuator_id != model.can_id {
            tracing::trace!(
                actuator_id = address.actuator_id,
                can_id = model.can_id,
                "frame for another actuator, ignoring"
            );
            return Err(self.timeout(address));
        }

        if address.request_offset == self.config.motion_request_offset {
            return match u8::try_from(model.can_id) {
                Ok(can_id) => Ok(Self::motion_control(&mut model, frame, can_id)),
                // The reply echoes the id in one byte
                Err(_) => {
                    tracing::trace!(can_id = model.can_id, "id does not fit a motion reply");
                    Err(self.timeout(address))
                }
            };
        }
        if address.request_offset != self.config.request_offset {
            return Err(self.timeout(address));
        }

        let opcode = frame.byte(COMMAND_OFFSET);
        let reply = match CommandType::from_byte(opcode) {
            Some(CommandType::FunctionControl) => Self::function_control(&mut model, frame),
            Some(CommandType::ReadPidParameters) => Self::read_gain(&model, frame),
            Some(CommandType::WritePidParametersToRam) => {
                let request = SetSingleControllerGainRequest::from_frame(*frame);
                match request.gain_type() {
                    Ok(gain) => {
                        model.ram_gains.insert(gain, request.value());
                        *SetSingleControllerGainResponse::new(gain, request.value()).frame()
                    }
                    Err(_) => *frame,
                }
            }
            Some(CommandType::WritePidParametersToRom) => {
                let request = SetSingleControllerGainPersistentlyRequest::from_frame(*frame);
                match request.gain_type() {
                    Ok(gain) => {
                        model.ram_gains.insert(gain, request.value());
                        model.rom_gains.insert(gain, request.value());
                        *SetSingleControllerGainPersistentlyResponse::new(gain, request.value())
                            .frame()
                    }
                    Err(_) => *frame,
                }
            }
            None => {
                tracing::trace!(opcode, "unsupported opcode, staying silent");
                return Err(self.timeout(address));
            }
        };

        tracing::trace!(request = %frame, reply = %reply, "simulated exchange");
        Ok(reply)
    }

    fn function_control(model: &mut ActuatorModel, frame: &Frame) -> Frame {
        let request = SetFunctionControlRequest::from_frame(*frame);
        if let Ok(function) = request.function_type() {
            model.functions.insert(function, request.value());
            if function == FunctionControlType::SetCanid {
                model.can_id = request.value();
            }
        }
        // The reply echoes index and value verbatim
        *frame
    }

    fn read_gain(model: &ActuatorModel, frame: &Frame) -> Frame {
        let index = frame.byte(1);
        match GainType::from_byte(index) {
            Some(gain) => {
                let value = model.ram_gains.get(&gain).copied().unwrap_or(0.0);
                *GetSingleControllerGainResponse::new(gain, value).frame()
            }
            // Unknown index: echoed back with a zero value
            None => Frame::zeroed()
                .with_byte(COMMAND_OFFSET, frame.byte(COMMAND_OFFSET))
                .with_byte(1, index),
        }
    }

    fn motion_control(model: &mut ActuatorModel, frame: &Frame, can_id: u8) -> Frame {
        let target = MotionControlRequest::from_frame(*frame).target();
        let torque = target.kp * (target.position - model.position)
            + target.kd * (target.velocity - model.velocity)
            + target.torque;

        model.position = target.position;
        model.velocity = target.velocity;

        let reply = MotionControlResponse::new(can_id, model.position, model.velocity, torque);
        *reply.frame()
    }

    fn timeout(&self, address: Address) -> RmdError {
        RmdError::Timeout {
            actuator_id: address.actuator_id,
            timeout_ms: self.timeout_ms,
        }
    }
}

impl Driver for SimulatedActuator {
    fn send(&self, frame: &Frame, address: Address) -> Result<()> {
        match self.handle(frame, address) {
            Ok(_) | Err(RmdError::Timeout { .. }) => Ok(()),
            Err(e) => Err(e),
        }
    }

    fn send_recv(&self, frame: &Frame, address: Address) -> Result<Frame> {
        self.handle(frame, address)
    }
}
