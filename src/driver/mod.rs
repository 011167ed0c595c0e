//! Driver Module
//!
//! The boundary to the bus. A [`Driver`] moves one 8-byte frame to an actuator
//! and, for [`Driver::send_recv`], blocks until the matching reply arrives.
//!
//! ## Contract
//! - One outstanding request per call, no pipelining
//! - Timeouts, retries and bus errors are the driver's business; they surface
//!   as [`RmdError`](crate::RmdError) and are passed to the caller unchanged
//!
//! No hardware driver ships with this crate. [`SimulatedActuator`] answers
//! frames in-process.

mod simulated;

use std::sync::Arc;

use crate::error::Result;
use crate::frame::Frame;

pub use simulated::SimulatedActuator;

/// Where a frame goes and where its reply comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Address {
    pub actuator_id: u32,
    pub request_offset: u32,
    pub response_offset: u32,
}

impl Address {
    pub const fn new(actuator_id: u32, request_offset: u32, response_offset: u32) -> Self {
        Self {
            actuator_id,
            request_offset,
            response_offset,
        }
    }

    /// CAN id the request is sent on
    ///
    /// Wraps on overflow; [`Config::validate`](crate::Config::validate)
    /// rejects such addresses.
    pub const fn request_id(&self) -> u32 {
        self.request_offset.wrapping_add(self.actuator_id)
    }

    /// CAN id the reply is expected on
    pub const fn response_id(&self) -> u32 {
        self.response_offset.wrapping_add(self.actuator_id)
    }
}

/// Blocking frame transport
pub trait Driver {
    /// Write `frame` without waiting for a reply
    fn send(&self, frame: &Frame, address: Address) -> Result<()>;

    /// Write `frame` and wait for the reply on `address.response_id()`
    fn send_recv(&self, frame: &Frame, address: Address) -> Result<Frame>;
}

impl<D: Driver + ?Sized> Driver for &D {
    fn send(&self, frame: &Frame, address: Address) -> Result<()> {
        (**self).send(frame, address)
    }

    fn send_recv(&self, frame: &Frame, address: Address) -> Result<Frame> {
        (**self).send_recv(frame, address)
    }
}

impl<D: Driver + ?Sized> Driver for Arc<D> {
    fn send(&self, frame: &Frame, address: Address) -> Result<()> {
        (**self).send(frame, address)
    }

    fn send_recv(&self, frame: &Frame, address: Address) -> Result<Frame> {
        (**self).send_recv(frame, address)
    }
}
