//! rmd-frame CLI
//!
//! Encode typed RMD commands into 8-byte frames, decode captured frames, and
//! run a short session against the simulated actuator.

use clap::{Parser, Subcommand};
use serde_json::json;
use tracing_subscriber::{fmt, EnvFilter};

use rmdwire::protocol::{
    GetSingleControllerGainRequest, Message, MotionControlRequest, MotionControlResponse,
    MotionTarget, Response, SetFunctionControlRequest, SetFunctionControlResponse,
    SetSingleControllerGainPersistentlyRequest, SetSingleControllerGainRequest,
    SingleGainResponse, WritePidParametersToRam,
};
use rmdwire::{
    ActuatorInterface, Config, Frame, FunctionControlType, GainType, Result, SimulatedActuator,
};

/// rmd-frame
#[derive(Parser, Debug)]
#[command(name = "rmd-frame")]
#[command(about = "Encode and decode MyActuator RMD CAN frames")]
#[command(version)]
struct Args {
    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Build a request frame
    #[command(subcommand)]
    Encode(EncodeCommand),

    /// Decode a captured frame
    #[command(subcommand)]
    Decode(DecodeCommand),

    /// Drive a simulated actuator through every command
    Demo {
        /// Actuator id
        #[arg(short, long, default_value = "1")]
        actuator_id: u32,

        /// Motion-control steps to run
        #[arg(short, long, default_value = "20")]
        steps: usize,

        /// Sine amplitude in degrees
        #[arg(long, default_value = "45.0")]
        amplitude_deg: f32,

        /// Sine frequency in Hz
        #[arg(long, default_value = "1.0")]
        frequency_hz: f32,

        /// Control period in seconds
        #[arg(long, default_value = "0.01")]
        period_s: f32,

        /// Single-motor request base id
        #[arg(long, default_value = "0x140", value_parser = parse_can_id)]
        request_offset: u32,

        /// Single-motor reply base id
        #[arg(long, default_value = "0x240", value_parser = parse_can_id)]
        response_offset: u32,

        /// Accept replies whose opcode does not match the request
        #[arg(long)]
        no_verify_reply: bool,
    },
}

/// Parse a decimal or `0x`-prefixed hex CAN id
fn parse_can_id(s: &str) -> std::result::Result<u32, String> {
    let parsed = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => u32::from_str_radix(hex, 16),
        None => s.parse(),
    };
    parsed.map_err(|e| format!("invalid CAN id '{}': {}", s, e))
}

#[derive(Subcommand, Debug)]
enum EncodeCommand {
    /// Function control (0x20)
    FunctionControl {
        /// Function name (e.g. set-canid) or index
        function: FunctionControlType,
        /// Integer value
        value: u32,
    },

    /// Read one gain (0x30)
    GetGain {
        /// Gain name (e.g. position-loop-kp) or index
        gain: GainType,
    },

    /// Write one gain (0x31, or 0x32 with --persistent)
    SetGain {
        /// Gain name (e.g. position-loop-kp) or index
        gain: GainType,
        /// Gain value
        #[arg(allow_negative_numbers = true)]
        value: f32,
        /// Write to ROM instead of RAM
        #[arg(long)]
        persistent: bool,
    },

    /// Motion control (CAN id 0x400 + id)
    Motion {
        /// Desired position, rad
        #[arg(long, default_value = "0.0", allow_negative_numbers = true)]
        position: f32,
        /// Desired velocity, rad/s
        #[arg(long, default_value = "0.0", allow_negative_numbers = true)]
        velocity: f32,
        /// Position gain
        #[arg(long, default_value = "0.0")]
        kp: f32,
        /// Velocity gain
        #[arg(long, default_value = "0.0")]
        kd: f32,
        /// Feedforward torque, Nm
        #[arg(long, default_value = "0.0", allow_negative_numbers = true)]
        torque: f32,
    },
}

#[derive(Subcommand, Debug)]
enum DecodeCommand {
    /// Function control reply
    FunctionControl {
        /// Frame bytes in hex
        #[arg(required = true, num_args = 1..)]
        hex: Vec<String>,
    },

    /// Single gain reply
    Gain {
        #[arg(required = true, num_args = 1..)]
        hex: Vec<String>,
    },

    /// Motion-control request
    MotionRequest {
        #[arg(required = true, num_args = 1..)]
        hex: Vec<String>,
    },

    /// Motion-control reply
    MotionReply {
        #[arg(required = true, num_args = 1..)]
        hex: Vec<String>,
    },
}

fn main() {
    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,rmdwire=debug"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let outcome = match args.command {
        Commands::Encode(command) => encode(command, args.json),
        Commands::Decode(command) => decode(command, args.json),
        Commands::Demo {
            actuator_id,
            steps,
            amplitude_deg,
            frequency_hz,
            period_s,
            request_offset,
            response_offset,
            no_verify_reply,
        } => {
            let config = Config::builder()
                .request_offset(request_offset)
                .response_offset(response_offset)
                .verify_reply_command(!no_verify_reply)
                .build();
            demo(config, actuator_id, steps, amplitude_deg, frequency_hz, period_s)
        }
    };

    if let Err(e) = outcome {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}

// =============================================================================
// Encode
// =============================================================================

fn encode(command: EncodeCommand, as_json: bool) -> Result<()> {
    let frame = match command {
        EncodeCommand::FunctionControl { function, value } => {
            *SetFunctionControlRequest::new(function, value).frame()
        }
        EncodeCommand::GetGain { gain } => *GetSingleControllerGainRequest::new(gain).frame(),
        EncodeCommand::SetGain {
            gain,
            value,
            persistent: false,
        } => *SetSingleControllerGainRequest::new(gain, value).frame(),
        EncodeCommand::SetGain {
            gain,
            value,
            persistent: true,
        } => *SetSingleControllerGainPersistentlyRequest::new(gain, value).frame(),
        EncodeCommand::Motion {
            position,
            velocity,
            kp,
            kd,
            torque,
        } => {
            let target = MotionTarget::new(position, velocity, kp, kd, torque);
            *MotionControlRequest::new(target).frame()
        }
    };

    if as_json {
        println!(
            "{}",
            json!({ "frame": frame.to_string(), "bytes": frame.as_bytes() })
        );
    } else {
        println!("{}", frame);
    }
    Ok(())
}

// =============================================================================
// Decode
// =============================================================================

fn parse_frame(hex: &[String]) -> Result<Frame> {
    hex.join(" ").parse()
}

fn decode(command: DecodeCommand, as_json: bool) -> Result<()> {
    let decoded = match command {
        DecodeCommand::FunctionControl { hex } => {
            let response = SetFunctionControlResponse::from_frame(parse_frame(&hex)?);
            json!({
                "command": response.raw_bytes()[0],
                "function": response.function_type().ok(),
                "raw_function": response.raw_function_type(),
                "value": response.value(),
            })
        }
        DecodeCommand::Gain { hex } => {
            // Every gain opcode shares the reply layout
            let response =
                SingleGainResponse::<WritePidParametersToRam>::from_frame(parse_frame(&hex)?);
            json!({
                "command": response.raw_bytes()[0],
                "gain": response.gain_type().ok(),
                "raw_gain": response.raw_gain_type(),
                "value": response.value(),
            })
        }
        DecodeCommand::MotionRequest { hex } => {
            let target = MotionControlRequest::from_frame(parse_frame(&hex)?).target();
            json!({
                "position": target.position,
                "velocity": target.velocity,
                "kp": target.kp,
                "kd": target.kd,
                "torque": target.torque,
            })
        }
        DecodeCommand::MotionReply { hex } => {
            let status = MotionControlResponse::from_frame(parse_frame(&hex)?).status();
            if !as_json {
                println!("{}", status);
                return Ok(());
            }
            json!(status)
        }
    };

    if as_json {
        println!("{}", decoded);
    } else {
        let fields = decoded.as_object().into_iter().flatten();
        for (name, value) in fields {
            println!("{:>14}: {}", name, value);
        }
    }
    Ok(())
}

// =============================================================================
// Demo
// =============================================================================

fn demo(
    config: Config,
    actuator_id: u32,
    steps: usize,
    amplitude_deg: f32,
    frequency_hz: f32,
    period_s: f32,
) -> Result<()> {
    let driver = SimulatedActuator::with_config(actuator_id, config.clone())
        .with_gain(GainType::PositionLoopKp, 0.1);
    let actuator = ActuatorInterface::with_config(&driver, actuator_id, config)?;

    tracing::info!("rmd-frame v{} demo on actuator {}", rmdwire::VERSION, actuator_id);

    let gain_type = GainType::PositionLoopKp;
    let original = actuator.get_single_gain(gain_type)?;
    let updated = actuator.set_single_gain_persistently(gain_type, 0.3)?;
    println!("Original {} = {}", gain_type, original);
    println!("New {} = {}", gain_type, updated);

    let echoed = actuator.function_control(FunctionControlType::CanidFilterEnable, 1)?;
    println!("{} -> {}", FunctionControlType::CanidFilterEnable, echoed);

    let amplitude = amplitude_deg.to_radians();
    let omega = 2.0 * std::f32::consts::PI * frequency_hz;
    for step in 0..steps {
        let t = step as f32 * period_s;
        let target = MotionTarget::new(
            amplitude * (omega * t).sin(),
            amplitude * omega * (omega * t).cos(),
            15.0,
            1.0,
            0.0,
        );
        let status = actuator.motion_control(target)?;
        println!(
            "Target: {:6.2} deg | Actual: {:6.2} deg | Actual Vel: {:7.2} deg/s | Torque: {:6.2} Nm",
            target.position.to_degrees(),
            status.shaft_angle.to_degrees(),
            status.shaft_speed.to_degrees(),
            status.torque
        );
    }

    Ok(())
}
