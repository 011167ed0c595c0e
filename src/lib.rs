//! # rmdwire
//!
//! Typed 8-byte frame codec for MyActuator RMD motor actuators:
//! - Strongly-typed request/response pairs, one per command family
//! - Linear quantization of physical quantities into 12/16-bit fields
//! - Sub-byte bit packing for the motion-control command
//! - Per-field endianness, including the protocol's two float conventions
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    Application code                          │
//! │          (physical units: rad, rad/s, Nm, gains)             │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                 ActuatorInterface                            │
//! │        (typed request → Driver round trip → typed reply)     │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!          ┌────────────┴────────────┐
//!          │                         │
//!          ▼                         ▼
//!   ┌─────────────┐          ┌─────────────┐
//!   │  Protocol   │          │   Driver    │
//!   │ (messages)  │          │ (transport) │
//!   └──────┬──────┘          └─────────────┘
//!          │
//!          ▼
//!   ┌─────────────┐
//!   │    Codec    │
//!   │ (quantize,  │
//!   │  pack/bits) │
//!   └─────────────┘
//! ```
//!
//! ## Example
//!
//! ```
//! use rmdwire::protocol::{Message, MotionControlRequest, MotionTarget};
//!
//! let request = MotionControlRequest::new(MotionTarget::new(0.0, 0.0, 0.0, 0.0, 0.0));
//! assert_eq!(request.raw_bytes(), &[0x7F, 0xFF, 0x7F, 0xF0, 0x00, 0x00, 0x07, 0xFF]);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod frame;
pub mod codec;
pub mod state;
pub mod protocol;
pub mod driver;
pub mod actuator;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{RmdError, Result};
pub use config::Config;
pub use frame::{Frame, FRAME_LEN};
pub use actuator::ActuatorInterface;
pub use driver::{Address, Driver, SimulatedActuator};
pub use protocol::{Message, Request, Response};
pub use state::{FunctionControlType, GainType, MotionControlStatus};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of rmdwire
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
