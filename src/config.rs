//! Configuration for rmdwire
//!
//! Centralized configuration with sensible defaults.

use crate::driver::Address;
use crate::error::{Result, RmdError};
use crate::protocol::Channel;

/// Highest standard (11-bit) CAN identifier
pub const MAX_CAN_ID: u32 = 0x7FF;

/// Main configuration for an actuator interface
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Single-Motor Addressing
    // -------------------------------------------------------------------------
    /// Base CAN id for opcode-tagged requests (request id = base + actuator id)
    pub request_offset: u32,

    /// Base CAN id the actuator replies on
    pub response_offset: u32,

    // -------------------------------------------------------------------------
    // Motion-Control Addressing
    // -------------------------------------------------------------------------
    /// Base CAN id for motion-control requests
    pub motion_request_offset: u32,

    /// Base CAN id for motion-control replies
    pub motion_response_offset: u32,

    // -------------------------------------------------------------------------
    // Reply Handling
    // -------------------------------------------------------------------------
    /// Reject single-motor replies whose byte 0 is not the request opcode
    pub verify_reply_command: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            request_offset: 0x140,
            response_offset: 0x240,
            motion_request_offset: 0x400,
            motion_response_offset: 0x500,
            verify_reply_command: true,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Bus address of `actuator_id` on `channel`
    pub fn address(&self, actuator_id: u32, channel: Channel) -> Address {
        match channel {
            Channel::SingleMotor => {
                Address::new(actuator_id, self.request_offset, self.response_offset)
            }
            Channel::MotionControl => Address::new(
                actuator_id,
                self.motion_request_offset,
                self.motion_response_offset,
            ),
        }
    }

    /// Check that every CAN id derived for `actuator_id` is a valid 11-bit id
    pub fn validate(&self, actuator_id: u32) -> Result<()> {
        if actuator_id == 0 {
            return Err(RmdError::Config("actuator id must be non-zero".to_string()));
        }

        for channel in [Channel::SingleMotor, Channel::MotionControl] {
            let address = self.address(actuator_id, channel);
            for offset in [address.request_offset, address.response_offset] {
                match offset.checked_add(actuator_id) {
                    Some(id) if id <= MAX_CAN_ID => {}
                    _ => {
                        return Err(RmdError::Config(format!(
                            "CAN id offset 0x{:x} + actuator {} on {:?} exceeds 0x{:x}",
                            offset, actuator_id, channel, MAX_CAN_ID
                        )));
                    }
                }
            }
            if address.request_id() == address.response_id() {
                return Err(RmdError::Config(format!(
                    "request and reply ids coincide (0x{:x}) on {:?}",
                    address.request_id(),
                    channel
                )));
            }
        }

        Ok(())
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the single-motor request base id
    pub fn request_offset(mut self, offset: u32) -> Self {
        self.config.request_offset = offset;
        self
    }

    /// Set the single-motor reply base id
    pub fn response_offset(mut self, offset: u32) -> Self {
        self.config.response_offset = offset;
        self
    }

    /// Set the motion-control request base id
    pub fn motion_request_offset(mut self, offset: u32) -> Self {
        self.config.motion_request_offset = offset;
        self
    }

    /// Set the motion-control reply base id
    pub fn motion_response_offset(mut self, offset: u32) -> Self {
        self.config.motion_response_offset = offset;
        self
    }

    /// Enable or disable the reply opcode check
    pub fn verify_reply_command(mut self, verify: bool) -> Self {
        self.config.verify_reply_command = verify;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
