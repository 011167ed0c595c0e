//! Actuator Interface
//!
//! Thin synchronous facade pairing each typed request with its typed reply.
//!
//! ## Responsibilities
//! - Address frames (single-motor vs. motion-control CAN ids)
//! - One blocking round trip per call through the [`Driver`]
//! - Reject replies carrying the wrong opcode (configurable)
//! - Surface unknown enumerated bytes in replies as
//!   [`RmdError::UnknownVariant`]
//!
//! Driver errors are returned unchanged. No retries happen here.

use crate::config::Config;
use crate::driver::Driver;
use crate::error::{Result, RmdError};
use crate::protocol::{
    GetSingleControllerGainRequest, Message, MotionControlRequest, MotionTarget, Request,
    Response, SetFunctionControlRequest, SetSingleControllerGainPersistentlyRequest,
    SetSingleControllerGainRequest,
};
use crate::state::{FunctionControlType, GainType, MotionControlStatus};

/// Talks to one actuator over a driver
///
/// Holds no mutable state; sharing one interface across threads is as safe
/// as the driver it wraps.
#[derive(Debug)]
pub struct ActuatorInterface<D> {
    driver: D,
    actuator_id: u32,
    config: Config,
}

impl<D: Driver> ActuatorInterface<D> {
    /// Interface to `actuator_id` with default addressing
    pub fn new(driver: D, actuator_id: u32) -> Result<Self> {
        Self::with_config(driver, actuator_id, Config::default())
    }

    pub fn with_config(driver: D, actuator_id: u32, config: Config) -> Result<Self> {
        config.validate(actuator_id)?;
        Ok(Self {
            driver,
            actuator_id,
            config,
        })
    }

    pub fn actuator_id(&self) -> u32 {
        self.actuator_id
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn driver(&self) -> &D {
        &self.driver
    }

    /// Consume the interface, returning the driver
    pub fn into_driver(self) -> D {
        self.driver
    }

    // =========================================================================
    // Generic Exchange
    // =========================================================================

    /// Send `request` and decode the reply as its paired response type
    pub fn send_request<R: Request>(&self, request: &R) -> Result<R::Response> {
        let address = self.config.address(self.actuator_id, R::CHANNEL);

        tracing::debug!(
            actuator_id = self.actuator_id,
            can_id = address.request_id(),
            frame = %request.frame(),
            "request"
        );

        let reply = self.driver.send_recv(request.frame(), address)?;

        tracing::debug!(
            actuator_id = self.actuator_id,
            can_id = address.response_id(),
            frame = %reply,
            "reply"
        );

        let response = R::Response::from_frame(reply);
        if self.config.verify_reply_command {
            if let Some(expected) = request.expected_reply_command() {
                let got = response.command_byte();
                if got != expected {
                    tracing::warn!(
                        actuator_id = self.actuator_id,
                        expected,
                        got,
                        "reply opcode mismatch"
                    );
                    return Err(RmdError::UnexpectedReply { expected, got });
                }
            }
        }

        Ok(response)
    }

    /// Send `request` without waiting for a reply
    pub fn send_without_reply<R: Request>(&self, request: &R) -> Result<()> {
        let address = self.config.address(self.actuator_id, R::CHANNEL);
        tracing::debug!(
            actuator_id = self.actuator_id,
            can_id = address.request_id(),
            frame = %request.frame(),
            "request (no reply)"
        );
        self.driver.send(request.frame(), address)
    }

    // =========================================================================
    // Commands
    // =========================================================================

    /// Set an integer actuator setting; returns the value the actuator echoed
    ///
    /// A `SetCanid` change takes effect on the actuator immediately. Build a
    /// new interface with the new id to keep talking to it.
    pub fn function_control(&self, function: FunctionControlType, value: u32) -> Result<u32> {
        let response = self.send_request(&SetFunctionControlRequest::new(function, value))?;
        let echoed = response.function_type()?;
        tracing::debug!(function = %echoed, value = response.value(), "function control applied");
        Ok(response.value())
    }

    /// Read one controller gain
    pub fn get_single_gain(&self, gain: GainType) -> Result<f32> {
        let response = self.send_request(&GetSingleControllerGainRequest::new(gain))?;
        let echoed = response.gain_type()?;
        tracing::debug!(gain = %echoed, value = response.value(), "gain read");
        Ok(response.value())
    }

    /// Write one controller gain to RAM; returns the value the actuator echoed
    pub fn set_single_gain(&self, gain: GainType, value: f32) -> Result<f32> {
        let response = self.send_request(&SetSingleControllerGainRequest::new(gain, value))?;
        response.gain_type()?;
        Ok(response.value())
    }

    /// Write one controller gain to ROM; returns the value the actuator echoed
    pub fn set_single_gain_persistently(&self, gain: GainType, value: f32) -> Result<f32> {
        let request = SetSingleControllerGainPersistentlyRequest::new(gain, value);
        let response = self.send_request(&request)?;
        response.gain_type()?;
        Ok(response.value())
    }

    /// Send one motion-control command and decode the feedback
    pub fn motion_control(&self, target: MotionTarget) -> Result<MotionControlStatus> {
        let response = self.send_request(&MotionControlRequest::new(target))?;
        Ok(response.status())
    }
}
