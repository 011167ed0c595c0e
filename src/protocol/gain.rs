//! Single gain messages
//!
//! `{ GainType @ b1, f32 @ b4..b8 }`. Requests write the float in native
//! memory order; replies are read with byte-reversed-integer assembly. Both
//! sides must stay as they are to match the actuator firmware on big-endian
//! hosts.

use std::marker::PhantomData;

use crate::codec::{pack_f32_native, pack_f32_reversed, unpack_f32_native, unpack_f32_reversed};
use crate::error::Result;
use crate::frame::Frame;
use crate::state::GainType;

use super::command::{
    Channel, Command, ReadPidParameters, WritePidParametersToRam, WritePidParametersToRom,
};
use super::message::{
    index_byte, index_frame, single_value_frame, value_word, Message, Request, Response,
};

// =============================================================================
// Get
// =============================================================================

/// Request to read a single gain; value bytes stay zero
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GetSingleGainRequest<C: Command> {
    frame: Frame,
    _command: PhantomData<C>,
}

impl<C: Command> GetSingleGainRequest<C> {
    pub fn new(gain: GainType) -> Self {
        Self::from_frame(index_frame::<C>(gain.into()))
    }

    pub fn from_frame(frame: Frame) -> Self {
        Self {
            frame,
            _command: PhantomData,
        }
    }

    pub fn gain_type(&self) -> Result<GainType> {
        GainType::try_from(self.raw_gain_type())
    }

    pub fn raw_gain_type(&self) -> u8 {
        index_byte(&self.frame)
    }
}

impl<C: Command> Message for GetSingleGainRequest<C> {
    fn frame(&self) -> &Frame {
        &self.frame
    }
}

impl<C: Command> Request for GetSingleGainRequest<C> {
    type Response = SingleGainResponse<C>;
    const CHANNEL: Channel = Channel::SingleMotor;

    fn expected_reply_command(&self) -> Option<u8> {
        Some(C::TYPE.opcode())
    }
}

// =============================================================================
// Set
// =============================================================================

/// Request to write a single gain
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SetSingleGainRequest<C: Command> {
    frame: Frame,
    _command: PhantomData<C>,
}

impl<C: Command> SetSingleGainRequest<C> {
    pub fn new(gain: GainType, value: f32) -> Self {
        Self::from_frame(single_value_frame::<C>(gain.into(), pack_f32_native(value)))
    }

    pub fn from_frame(frame: Frame) -> Self {
        Self {
            frame,
            _command: PhantomData,
        }
    }

    pub fn gain_type(&self) -> Result<GainType> {
        GainType::try_from(self.raw_gain_type())
    }

    pub fn raw_gain_type(&self) -> u8 {
        index_byte(&self.frame)
    }

    /// The gain value, read back in native float order
    pub fn value(&self) -> f32 {
        unpack_f32_native(value_word(&self.frame))
    }
}

impl<C: Command> Message for SetSingleGainRequest<C> {
    fn frame(&self) -> &Frame {
        &self.frame
    }
}

impl<C: Command> Request for SetSingleGainRequest<C> {
    type Response = SingleGainResponse<C>;
    const CHANNEL: Channel = Channel::SingleMotor;

    fn expected_reply_command(&self) -> Option<u8> {
        Some(C::TYPE.opcode())
    }
}

// =============================================================================
// Reply
// =============================================================================

/// Reply carrying a single gain value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SingleGainResponse<C: Command> {
    frame: Frame,
    _command: PhantomData<C>,
}

impl<C: Command> SingleGainResponse<C> {
    /// Build the reply an actuator would send
    pub fn new(gain: GainType, value: f32) -> Self {
        Self::from_frame(single_value_frame::<C>(gain.into(), pack_f32_reversed(value)))
    }

    pub fn gain_type(&self) -> Result<GainType> {
        GainType::try_from(self.raw_gain_type())
    }

    pub fn raw_gain_type(&self) -> u8 {
        index_byte(&self.frame)
    }

    /// The gain value; b7 is the most significant byte of the IEEE-754 word
    pub fn value(&self) -> f32 {
        unpack_f32_reversed(value_word(&self.frame))
    }
}

impl<C: Command> Message for SingleGainResponse<C> {
    fn frame(&self) -> &Frame {
        &self.frame
    }
}

impl<C: Command> Response for SingleGainResponse<C> {
    fn from_frame(frame: Frame) -> Self {
        Self {
            frame,
            _command: PhantomData,
        }
    }
}

pub type GetSingleControllerGainRequest = GetSingleGainRequest<ReadPidParameters>;
pub type SetSingleControllerGainRequest = SetSingleGainRequest<WritePidParametersToRam>;
pub type SetSingleControllerGainPersistentlyRequest = SetSingleGainRequest<WritePidParametersToRom>;

pub type GetSingleControllerGainResponse = SingleGainResponse<ReadPidParameters>;
pub type SetSingleControllerGainResponse = SingleGainResponse<WritePidParametersToRam>;
pub type SetSingleControllerGainPersistentlyResponse = SingleGainResponse<WritePidParametersToRom>;
