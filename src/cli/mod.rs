// src/cli/mod.rs — CLI definition (clap derive)

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "mmbar", about = "i3bar status line generator", version)]
pub struct Cli {
    /// Config file (default: $XDG_CONFIG_HOME/mmbar/config.yml, then ~/.config/mmbar/config.yml)
    pub config: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_args() {
        let cli = Cli::try_parse_from(["mmbar"]).unwrap();
        assert!(cli.config.is_none());
    }

    #[test]
    fn test_positional_config() {
        let cli = Cli::try_parse_from(["mmbar", "/etc/mmbar.yml"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("/etc/mmbar.yml")));
    }

    #[test]
    fn test_rejects_extra_args() {
        assert!(Cli::try_parse_from(["mmbar", "a.yml", "b.yml"]).is_err());
    }
}
