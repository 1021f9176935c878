use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use rover_gateway::{Config, Expression, Session, SimRobot};

/// Rover - voice and motion gateway for a desk companion robot
#[derive(Parser)]
#[command(name = "rover", version, about)]
struct Cli {
    /// Path to a configuration file (defaults to the platform config dir)
    #[arg(short, long, env = "ROVER_CONFIG")]
    config: Option<PathBuf>,

    /// Override the default pacing delay, seconds
    #[arg(long, env = "ROVER_DELAY")]
    delay: Option<f32>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Drive forward
    Forward,
    /// Drive backward
    Backward,
    /// Turn left in place
    TurnLeft,
    /// Turn right in place
    TurnRight,
    /// Backpack lights on (green)
    LightsOn,
    /// Backpack lights off
    LightsOff,
    /// Raise the head to the midpoint angle
    HeadUp,
    /// Lower the head fully
    HeadDown,
    /// Raise the lift fully
    LiftUp,
    /// Lower the lift fully
    LiftDown,
    /// Play the greeting animation
    Celebrate,
    /// Speak text on the robot
    Say {
        /// Text to speak
        text: String,
    },
    /// Show a facial expression
    Emote {
        /// Expression name (e.g. "happiness", "surprise")
        expression: String,

        /// Seconds to hold the end poses
        #[arg(long)]
        hold: Option<f32>,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    let filter = match cli.verbose {
        0 => "info,rover_gateway=info",
        1 => "info,rover_gateway=debug",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("fatal: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config = Config::load(cli.config.as_deref())?;
    if let Some(delay) = cli.delay {
        config.robot.action_delay_secs = delay;
    }

    let mut session = Session::new(SimRobot::new(), &config)?;
    session.open().await?;

    match cli.command {
        Command::Forward => session.drive_forward().await?,
        Command::Backward => session.drive_backward().await?,
        Command::TurnLeft => session.turn_left().await?,
        Command::TurnRight => session.turn_right().await?,
        Command::LightsOn => session.lights_on().await?,
        Command::LightsOff => session.lights_off().await?,
        Command::HeadUp => session.head_up().await?,
        Command::HeadDown => session.head_down().await?,
        Command::LiftUp => session.lift_up().await?,
        Command::LiftDown => session.lift_down().await?,
        Command::Celebrate => session.celebrate().await?,
        Command::Say { text } => {
            // A failed speech request is logged, not fatal; the session
            // stays usable and shuts down cleanly
            if let Err(e) = session.say(&text).await {
                tracing::error!(error = %e, "speech request failed");
            }
        }
        Command::Emote { expression, hold } => {
            let expression: Expression = expression.parse()?;
            let hold = hold.map(Duration::from_secs_f32);
            session.express(expression, hold).await?;
        }
    }

    session.close().await?;
    Ok(())
}
