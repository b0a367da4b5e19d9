use std::path::PathBuf;

use clap::Parser;

/// pixscii — turn an image into a grayscale PNG and an ASCII-art PNG.
///
/// Input and output locations come from the config file.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// TOML configuration file. Defaults apply when it does not exist.
    #[arg(short, long, default_value = "pixscii.toml")]
    pub config: PathBuf,

    /// Log level: error, warn, info, debug, trace.
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_without_arguments() {
        let cli = Cli::parse_from(["pixscii"]);
        assert_eq!(cli.config, PathBuf::from("pixscii.toml"));
        assert_eq!(cli.log_level, "warn");
    }

    #[test]
    fn accepts_config_and_level() {
        let cli = Cli::parse_from(["pixscii", "-c", "alt.toml", "--log-level", "debug"]);
        assert_eq!(cli.config, PathBuf::from("alt.toml"));
        assert_eq!(cli.log_level, "debug");
    }
}
