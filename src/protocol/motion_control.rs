//! Motion control messages
//!
//! The high-rate command bundling position, velocity, both gains and
//! feedforward torque into one frame. Request and reply use different bit
//! layouts (see the [module docs](super)); each has its own pack/unpack pair
//! below and they are never mixed.

use crate::codec::{KD, KP, POSITION, TORQUE, VELOCITY};
use crate::frame::Frame;
use crate::state::MotionControlStatus;

use super::command::Channel;
use super::message::{Message, Request, Response};

/// The five physical targets of a motion-control request
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MotionTarget {
    /// Desired position, rad, [-12.5, 12.5]
    pub position: f32,
    /// Desired velocity, rad/s, [-45.0, 45.0]
    pub velocity: f32,
    /// Position gain, [0.0, 500.0]
    pub kp: f32,
    /// Velocity gain, [0.0, 5.0]
    pub kd: f32,
    /// Feedforward torque, Nm, [-24.0, 24.0]
    pub torque: f32,
}

impl MotionTarget {
    pub fn new(position: f32, velocity: f32, kp: f32, kd: f32, torque: f32) -> Self {
        Self {
            position,
            velocity,
            kp,
            kd,
            torque,
        }
    }
}

// =============================================================================
// Request
// =============================================================================

/// Motion-control command
///
/// Every field is clamped to its range before quantization, so out-of-range
/// targets are sent as the nearest bound without error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MotionControlRequest {
    frame: Frame,
}

impl MotionControlRequest {
    pub fn new(target: MotionTarget) -> Self {
        let p = POSITION.quantize(target.position);
        let v = VELOCITY.quantize(target.velocity);
        let kp = KP.quantize(target.kp);
        let kd = KD.quantize(target.kd);
        let t = TORQUE.quantize(target.torque);

        Self {
            frame: Frame::from_bytes([
                (p >> 8) as u8,
                (p & 0xFF) as u8,
                (v >> 4) as u8,
                (((v & 0xF) << 4) | ((kp >> 8) & 0xF)) as u8,
                (kp & 0xFF) as u8,
                (kd >> 4) as u8,
                (((kd & 0xF) << 4) | ((t >> 8) & 0xF)) as u8,
                (t & 0xFF) as u8,
            ]),
        }
    }

    /// Reinterpret a frame as a motion-control request
    pub fn from_frame(frame: Frame) -> Self {
        Self { frame }
    }

    /// Read the targets back from the request layout, within one
    /// quantization step of what was encoded
    pub fn target(&self) -> MotionTarget {
        let b = self.frame.as_bytes();
        let p = (u16::from(b[0]) << 8) | u16::from(b[1]);
        let v = (u16::from(b[2]) << 4) | u16::from(b[3] >> 4);
        let kp = (u16::from(b[3] & 0x0F) << 8) | u16::from(b[4]);
        let kd = (u16::from(b[5]) << 4) | u16::from(b[6] >> 4);
        let t = (u16::from(b[6] & 0x0F) << 8) | u16::from(b[7]);

        MotionTarget {
            position: POSITION.dequantize(p),
            velocity: VELOCITY.dequantize(v),
            kp: KP.dequantize(kp),
            kd: KD.dequantize(kd),
            torque: TORQUE.dequantize(t),
        }
    }
}

impl Message for MotionControlRequest {
    fn frame(&self) -> &Frame {
        &self.frame
    }
}

impl Request for MotionControlRequest {
    type Response = MotionControlResponse;
    const CHANNEL: Channel = Channel::MotionControl;

    fn expected_reply_command(&self) -> Option<u8> {
        None
    }
}

// =============================================================================
// Reply
// =============================================================================

/// Motion-control reply: the echoed CAN id followed by measured position,
/// velocity and torque
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MotionControlResponse {
    frame: Frame,
}

impl MotionControlResponse {
    /// Build the reply an actuator would send
    pub fn new(can_id: u8, position: f32, velocity: f32, torque: f32) -> Self {
        let p = POSITION.quantize(position);
        let v = VELOCITY.quantize(velocity);
        let t = TORQUE.quantize(torque);

        Self {
            frame: Frame::from_bytes([
                can_id,
                (p >> 8) as u8,
                (p & 0xFF) as u8,
                (v >> 4) as u8,
                (((v & 0xF) << 4) | ((t >> 8) & 0xF)) as u8,
                (t & 0xFF) as u8,
                0x00,
                0x00,
            ]),
        }
    }

    /// CAN id of the responding actuator (b0)
    pub fn echo_can_id(&self) -> u8 {
        self.frame.byte(0)
    }

    /// Position in rad, from b1 (high) and b2 (low)
    pub fn position(&self) -> f32 {
        let raw = (u16::from(self.frame.byte(1)) << 8) | u16::from(self.frame.byte(2));
        POSITION.dequantize(raw)
    }

    /// Velocity in rad/s, from b3 and the high nibble of b4
    pub fn velocity(&self) -> f32 {
        let raw = (u16::from(self.frame.byte(3)) << 4) | u16::from(self.frame.byte(4) >> 4);
        VELOCITY.dequantize(raw)
    }

    /// Torque in Nm, from the low nibble of b4 and b5
    pub fn torque(&self) -> f32 {
        let raw = (u16::from(self.frame.byte(4) & 0x0F) << 8) | u16::from(self.frame.byte(5));
        TORQUE.dequantize(raw)
    }

    pub fn status(&self) -> MotionControlStatus {
        MotionControlStatus {
            can_id: self.echo_can_id(),
            shaft_angle: self.position(),
            shaft_speed: self.velocity(),
            torque: self.torque(),
        }
    }
}

impl Message for MotionControlResponse {
    fn frame(&self) -> &Frame {
        &self.frame
    }
}

impl Response for MotionControlResponse {
    fn from_frame(frame: Frame) -> Self {
        Self { frame }
    }
}
