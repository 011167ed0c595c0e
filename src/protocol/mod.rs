//! Protocol Module
//!
//! Typed request/response pairs for the RMD actuator protocol. Every message
//! owns exactly one 8-byte [`Frame`](crate::Frame).
//!
//! ## Single-Value Layout
//! Function control and gain commands share one layout:
//! ```text
//! ┌──────────┬──────────┬──────┬──────┬─────────────────────┐
//! │ Cmd (1)  │ Index(1) │ 0x00 │ 0x00 │      Value (4)      │
//! └──────────┴──────────┴──────┴──────┴─────────────────────┘
//!   b0         b1         b2     b3     b4 .. b7
//! ```
//!
//! ### Commands
//! - 0x20: FUNCTION_CONTROL            - Index: FunctionControlType, Value: u32 LE
//! - 0x30: READ_PID_PARAMETERS         - Index: GainType, Value: zero / f32 reply
//! - 0x31: WRITE_PID_PARAMETERS_TO_RAM - Index: GainType, Value: f32
//! - 0x32: WRITE_PID_PARAMETERS_TO_ROM - Index: GainType, Value: f32
//!
//! ## Motion Control Layout
//! Sent on CAN id `0x400 + id`, no command byte. Five fields packed across
//! nibble boundaries:
//! ```text
//! request : │ p[15:8] │ p[7:0] │ v[11:4] │ v[3:0] kp[11:8] │ kp[7:0] │ kd[11:4] │ kd[3:0] t[11:8] │ t[7:0] │
//! reply   : │ can id  │ p[15:8]│ p[7:0]  │ v[11:4]         │ v[3:0] t[11:8] │ t[7:0] │ 0x00 │ 0x00 │
//! ```
//! Request and reply disagree on byte 0. Both layouts are implemented as
//! observed on the wire.

mod command;
mod function_control;
mod gain;
mod message;
mod motion_control;

pub use command::{
    Channel, Command, CommandType, FunctionControl, ReadPidParameters, WritePidParametersToRam,
    WritePidParametersToRom,
};
pub use function_control::{
    FunctionControlRequest, FunctionControlResponse, SetFunctionControlRequest,
    SetFunctionControlResponse,
};
pub use gain::{
    GetSingleControllerGainRequest, GetSingleControllerGainResponse, GetSingleGainRequest,
    SetSingleControllerGainPersistentlyRequest, SetSingleControllerGainPersistentlyResponse,
    SetSingleControllerGainRequest, SetSingleControllerGainResponse, SetSingleGainRequest,
    SingleGainResponse,
};
pub use message::{Message, Request, Response, COMMAND_OFFSET, INDEX_OFFSET, VALUE_OFFSET};
pub use motion_control::{MotionControlRequest, MotionControlResponse, MotionTarget};
