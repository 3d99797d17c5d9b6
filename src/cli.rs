//! Command-line arguments for the headless flight runner.

use std::path::PathBuf;

use clap::Parser;

use crate::config::SimConfig;
use crate::input::{InputEvent, ScriptedInput, TurnSide};
use crate::world::Viewport;

/// Fly a scripted rocket flight without a window.
///
/// CLI values override settings loaded from `--config`.
#[derive(Parser, Debug)]
#[command(name = "rocket-flight", about = "Headless 2D rocket flight")]
pub struct CliArgs {
    /// RON config file; defaults are used when omitted.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Frames to simulate.
    #[arg(long, default_value_t = 600)]
    pub frames: u64,

    /// Throttle percent while the engine burns.
    #[arg(long, default_value_t = 100)]
    pub throttle: i32,

    /// Frames of engine burn from the first frame.
    #[arg(long, default_value_t = 120)]
    pub burn_frames: u64,

    /// Frames of turning from the first frame: positive right, negative left.
    #[arg(long, default_value_t = 0, allow_hyphen_values = true)]
    pub turn_frames: i64,

    /// Write a per-frame telemetry CSV here.
    #[arg(long)]
    pub csv: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace) or a full filter string.
    #[arg(long)]
    pub log_level: Option<String>,

    /// Starfield seed.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Viewport width.
    #[arg(long)]
    pub width: Option<f64>,

    /// Viewport height.
    #[arg(long)]
    pub height: Option<f64>,

    /// Print the effective config as RON and exit.
    #[arg(long)]
    pub dump_config: bool,
}

impl SimConfig {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(seed) = args.seed {
            self.world.star_seed = Some(seed);
        }
        if let Some(ref level) = args.log_level {
            self.log_level = level.clone();
        }
        let width = args.width.unwrap_or(self.viewport.width);
        let height = args.height.unwrap_or(self.viewport.height);
        self.viewport = Viewport::new(width, height);
    }
}

impl CliArgs {
    /// Input script for the requested burn and turn.
    pub fn flight_script(&self) -> ScriptedInput {
        let mut script = ScriptedInput::new().at(0, InputEvent::SetThrottle(self.throttle));

        if self.burn_frames > 0 {
            script = script
                .at(0, InputEvent::SetEngine(true))
                .at(self.burn_frames, InputEvent::SetEngine(false));
        }

        if self.turn_frames != 0 {
            let side = if self.turn_frames > 0 { TurnSide::Right } else { TurnSide::Left };
            script = script
                .at(0, InputEvent::TurnButton { side, pressed: true })
                .at(self.turn_frames.unsigned_abs(), InputEvent::TurnButton { side, pressed: false });
        }

        script
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{Controls, InputSource};

    #[test]
    fn test_cli_override() {
        let args = CliArgs::parse_from([
            "rocket-flight",
            "--seed",
            "9",
            "--width",
            "640",
            "--log-level",
            "debug",
        ]);
        let mut config = SimConfig::default();
        config.apply_cli_overrides(&args);
        assert_eq!(config.world.star_seed, Some(9));
        assert_eq!(config.viewport, Viewport::new(640.0, 720.0));
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn no_overrides_keeps_config() {
        let args = CliArgs::parse_from(["rocket-flight"]);
        let mut config = SimConfig::default();
        config.apply_cli_overrides(&args);
        assert_eq!(config, SimConfig::default());
        assert_eq!(args.frames, 600);
    }

    #[test]
    fn script_burns_then_cuts_engine() {
        let args = CliArgs::parse_from([
            "rocket-flight",
            "--burn-frames",
            "2",
            "--throttle",
            "70",
            "--turn-frames",
            "-1",
        ]);
        let mut script = args.flight_script();
        let mut controls = Controls::new(&Viewport::default());

        script.pump(&mut controls);
        assert!(controls.state().engine_on);
        assert!(controls.state().turn_left);
        assert_eq!(controls.state().throttle(), 70);

        script.pump(&mut controls);
        assert!(!controls.state().turn_left);
        assert!(controls.state().engine_on);

        script.pump(&mut controls);
        assert!(!controls.state().engine_on);
    }
}
