//! Message envelope
//!
//! The common surface of every typed message, and the default single-value
//! frame layout.

use crate::frame::{Frame, FRAME_LEN};

use super::command::{Channel, Command};

/// Offset of the opcode in single-value frames
pub const COMMAND_OFFSET: usize = 0;

/// Offset of the function/gain index in single-value frames
pub const INDEX_OFFSET: usize = 1;

/// Offset of the 4-byte value in single-value frames
pub const VALUE_OFFSET: usize = 4;

/// Anything that owns a wire frame
pub trait Message {
    /// The frame this message encodes to
    fn frame(&self) -> &Frame;

    /// Read-only view of the 8 wire bytes
    fn raw_bytes(&self) -> &[u8; FRAME_LEN] {
        self.frame().as_bytes()
    }

    /// Byte 0: the opcode for single-motor layouts
    fn command_byte(&self) -> u8 {
        self.frame().byte(COMMAND_OFFSET)
    }
}

/// A message sent to an actuator, paired with the reply type it expects
pub trait Request: Message {
    /// Typed reply to this request
    type Response: Response;

    /// CAN id offsets the exchange travels on
    const CHANNEL: Channel;

    /// Opcode the reply must carry at byte 0, if the layout has one
    fn expected_reply_command(&self) -> Option<u8>;
}

/// A message received from an actuator
///
/// Any frame is a structurally valid response.
pub trait Response: Message + Sized {
    fn from_frame(frame: Frame) -> Self;
}

/// Zeroed frame with the opcode of `C`, `index` and a 4-byte value
pub(crate) fn single_value_frame<C: Command>(index: u8, value: [u8; 4]) -> Frame {
    index_frame::<C>(index).with_word(VALUE_OFFSET, value)
}

/// Zeroed frame with the opcode of `C` and `index`, value bytes left zero
pub(crate) fn index_frame<C: Command>(index: u8) -> Frame {
    Frame::zeroed()
        .with_byte(COMMAND_OFFSET, C::TYPE.opcode())
        .with_byte(INDEX_OFFSET, index)
}

pub(crate) fn index_byte(frame: &Frame) -> u8 {
    frame.byte(INDEX_OFFSET)
}

pub(crate) fn value_word(frame: &Frame) -> [u8; 4] {
    frame.word(VALUE_OFFSET)
}
