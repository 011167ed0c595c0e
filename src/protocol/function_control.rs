//! Function control messages
//!
//! Integer-valued actuator settings: `{ FunctionControlType @ b1, u32 LE @ b4..b8 }`.

use std::marker::PhantomData;

use crate::codec::{pack_u32_le, unpack_u32_le};
use crate::error::Result;
use crate::frame::Frame;
use crate::state::FunctionControlType;

use super::command::{Channel, Command, FunctionControl};
use super::message::{index_byte, single_value_frame, value_word, Message, Request, Response};

/// Request to set a function control value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FunctionControlRequest<C: Command> {
    frame: Frame,
    _command: PhantomData<C>,
}

impl<C: Command> FunctionControlRequest<C> {
    pub fn new(function: FunctionControlType, value: u32) -> Self {
        Self::from_frame(single_value_frame::<C>(function.into(), pack_u32_le(value)))
    }

    /// Reinterpret a frame as this request
    pub fn from_frame(frame: Frame) -> Self {
        Self {
            frame,
            _command: PhantomData,
        }
    }

    /// The targeted function; fails for an index the protocol does not define
    pub fn function_type(&self) -> Result<FunctionControlType> {
        FunctionControlType::try_from(self.raw_function_type())
    }

    pub fn raw_function_type(&self) -> u8 {
        index_byte(&self.frame)
    }

    pub fn value(&self) -> u32 {
        unpack_u32_le(value_word(&self.frame))
    }
}

impl<C: Command> Message for FunctionControlRequest<C> {
    fn frame(&self) -> &Frame {
        &self.frame
    }
}

impl<C: Command> Request for FunctionControlRequest<C> {
    type Response = FunctionControlResponse<C>;
    const CHANNEL: Channel = Channel::SingleMotor;

    fn expected_reply_command(&self) -> Option<u8> {
        Some(C::TYPE.opcode())
    }
}

/// Reply to a function control request
///
/// The actuator echoes the function index and the value it applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FunctionControlResponse<C: Command> {
    frame: Frame,
    _command: PhantomData<C>,
}

impl<C: Command> FunctionControlResponse<C> {
    /// Build the reply an actuator would send
    pub fn new(function: FunctionControlType, value: u32) -> Self {
        Self::from_frame(single_value_frame::<C>(function.into(), pack_u32_le(value)))
    }

    pub fn function_type(&self) -> Result<FunctionControlType> {
        FunctionControlType::try_from(self.raw_function_type())
    }

    pub fn raw_function_type(&self) -> u8 {
        index_byte(&self.frame)
    }

    pub fn value(&self) -> u32 {
        unpack_u32_le(value_word(&self.frame))
    }
}

impl<C: Command> Message for FunctionControlResponse<C> {
    fn frame(&self) -> &Frame {
        &self.frame
    }
}

impl<C: Command> Response for FunctionControlResponse<C> {
    fn from_frame(frame: Frame) -> Self {
        Self {
            frame,
            _command: PhantomData,
        }
    }
}

pub type SetFunctionControlRequest = FunctionControlRequest<FunctionControl>;
pub type SetFunctionControlResponse = FunctionControlResponse<FunctionControl>;
