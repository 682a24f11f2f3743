use std::path::PathBuf;

use asciimate_core::AnimationSpeed;
use clap::{Parser, ValueEnum};

/// Animated ASCII art collection.
#[derive(Debug, Parser)]
#[command(name = "asciimate", version, about)]
pub struct Cli {
    /// Animation number (e.g. 1 or -1; -N is a shortcut for N)
    #[arg(allow_negative_numbers = true)]
    pub key: Option<String>,

    /// List all available animations in order
    #[arg(short, long)]
    pub list: bool,

    /// Print art whose name contains NAME (case-insensitive)
    #[arg(short, long, value_name = "NAME")]
    pub view: Option<String>,

    /// Run the animation in a loop until interrupted
    #[arg(short = 'L', long = "loop")]
    pub looping: bool,

    /// Play a random animation
    #[arg(long, conflicts_with = "key")]
    pub random: bool,

    /// Write frames to stdout instead of opening the full-screen player
    #[arg(long)]
    pub plain: bool,

    /// Don't sleep between frames in plain mode
    #[arg(long, requires = "plain")]
    pub no_delay: bool,

    /// Print the animation's frames as JSON
    #[arg(long, conflicts_with_all = ["plain", "looping"])]
    pub export_json: bool,

    /// Art file to load instead of the bundled art
    #[arg(long, value_name = "PATH", env = "ASCIIMATE_ART")]
    pub art: Option<PathBuf>,

    /// Config file to use instead of the default location
    #[arg(long, value_name = "PATH", env = "ASCIIMATE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Write the effective configuration to the config file and exit
    #[arg(long)]
    pub write_config: bool,

    /// Seed for reproducible animations
    #[arg(long)]
    pub seed: Option<u64>,

    /// Playback speed
    #[arg(long, value_enum)]
    pub speed: Option<SpeedArg>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SpeedArg {
    Slow,
    Normal,
    Fast,
}

impl From<SpeedArg> for AnimationSpeed {
    fn from(speed: SpeedArg) -> Self {
        match speed {
            SpeedArg::Slow => AnimationSpeed::Slow,
            SpeedArg::Normal => AnimationSpeed::Normal,
            SpeedArg::Fast => AnimationSpeed::Fast,
        }
    }
}

impl Cli {
    /// Whether this run takes over the terminal with the full-screen player.
    pub fn uses_terminal_ui(&self) -> bool {
        !(self.list || self.view.is_some() || self.plain || self.export_json || self.write_config)
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("asciimate").chain(args.iter().copied()))
    }

    #[test]
    fn test_cli_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_negative_key_shortcut() {
        let cli = parse(&["-3"]).unwrap();
        assert_eq!(cli.key.as_deref(), Some("-3"));
        assert!(!cli.list);
    }

    #[test]
    fn test_flags() {
        let cli = parse(&["12", "-L", "--speed", "fast", "--seed", "7"]).unwrap();
        assert_eq!(cli.key.as_deref(), Some("12"));
        assert!(cli.looping);
        assert_eq!(cli.speed.map(AnimationSpeed::from), Some(AnimationSpeed::Fast));
        assert_eq!(cli.seed, Some(7));
        assert!(cli.uses_terminal_ui());
    }

    #[test]
    fn test_list_and_view() {
        assert!(parse(&["-l"]).unwrap().list);
        let cli = parse(&["-v", "cat"]).unwrap();
        assert_eq!(cli.view.as_deref(), Some("cat"));
        assert!(!cli.uses_terminal_ui());
    }

    #[test]
    fn test_terminal_ui_modes() {
        assert!(parse(&[]).unwrap().uses_terminal_ui());
        assert!(!parse(&["1", "--plain"]).unwrap().uses_terminal_ui());
        assert!(!parse(&["1", "--export-json"]).unwrap().uses_terminal_ui());
        assert!(!parse(&["--write-config"]).unwrap().uses_terminal_ui());
    }

    #[test]
    fn test_no_delay_requires_plain() {
        assert!(parse(&["1", "--no-delay"]).is_err());
        assert!(parse(&["1", "--plain", "--no-delay"]).is_ok());
    }

    #[test]
    fn test_export_conflicts_with_loop() {
        assert!(parse(&["1", "--export-json", "--loop"]).is_err());
        assert!(parse(&["1", "--export-json"]).unwrap().export_json);
    }
}
