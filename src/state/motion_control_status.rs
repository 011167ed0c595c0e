//! Motion control feedback

use std::fmt;

use serde::Serialize;

/// Real-time feedback echoed by the actuator in reply to a motion-control
/// command
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct MotionControlStatus {
    /// CAN id of the responding actuator (reply byte 0)
    pub can_id: u8,
    /// Position in radians, [-12.5, 12.5]
    pub shaft_angle: f32,
    /// Velocity in rad/s, [-45.0, 45.0]
    pub shaft_speed: f32,
    /// Torque in Nm, [-24.0, 24.0]
    pub torque: f32,
}

impl fmt::Display for MotionControlStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "MotionControlStatus(can_id={}, shaft_angle={}, shaft_speed={}, torque={})",
            self.can_id, self.shaft_angle, self.shaft_speed, self.torque
        )
    }
}
