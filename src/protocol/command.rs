//! Command definitions
//!
//! Protocol opcodes, and the zero-sized tags that select a message layout at
//! compile time. `FunctionControlRequest<FunctionControl>` and
//! `SetSingleGainRequest<WritePidParametersToRom>` are distinct types; the
//! opcode is a constant of the tag, never a field to branch on.

use std::fmt::Debug;

/// Single-motor command opcodes (frame byte 0)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum CommandType {
    FunctionControl = 0x20,
    ReadPidParameters = 0x30,
    WritePidParametersToRam = 0x31,
    WritePidParametersToRom = 0x32,
}

impl CommandType {
    pub fn from_byte(byte: u8) -> Option<Self> {
        Some(match byte {
            0x20 => Self::FunctionControl,
            0x30 => Self::ReadPidParameters,
            0x31 => Self::WritePidParametersToRam,
            0x32 => Self::WritePidParametersToRom,
            _ => return None,
        })
    }

    /// Opcode byte on the wire
    pub const fn opcode(self) -> u8 {
        self as u8
    }
}

/// Which pair of CAN id offsets an exchange uses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    /// Opcode-tagged commands (`0x140 + id` / `0x240 + id` by default)
    SingleMotor,

    /// The bit-packed motion-control command (`0x400 + id` / `0x500 + id`)
    MotionControl,
}

mod sealed {
    pub trait Sealed {}
}

/// Type-level command tag
///
/// Sealed: the set of commands is fixed by the protocol.
pub trait Command: sealed::Sealed + Debug + Clone + Copy + PartialEq + Send + Sync + 'static {
    /// Opcode written at byte 0 of every frame of this command
    const TYPE: CommandType;
}

macro_rules! command_tag {
    ($(#[$doc:meta])* $name:ident => $ty:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
        pub struct $name;

        impl sealed::Sealed for $name {}

        impl Command for $name {
            const TYPE: CommandType = CommandType::$ty;
        }
    };
}

command_tag!(
    /// `0x20`: set an integer actuator setting
    FunctionControl => FunctionControl
);
command_tag!(
    /// `0x30`: read one controller gain
    ReadPidParameters => ReadPidParameters
);
command_tag!(
    /// `0x31`: write one controller gain, lost on power cycle
    WritePidParametersToRam => WritePidParametersToRam
);
command_tag!(
    /// `0x32`: write one controller gain to non-volatile memory
    WritePidParametersToRom => WritePidParametersToRom
);
