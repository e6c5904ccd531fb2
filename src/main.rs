//! Chat message cell layout demo - Entry Point

use bubblecell::model::AppError;
use bubblecell::source::InputSource;
use bubblecell::view::{self, CellStyles, ColorConfig, ConversationLayout, LayoutSettings};
use clap::Parser;
use std::path::PathBuf;
use tracing::info;

/// Chat message cell layout demo - sizes every cell of a conversation
#[derive(Parser, Debug)]
#[command(name = "bubblecell")]
#[command(version)]
#[command(about = "Lay out a chat conversation and show or report every cell size")]
pub struct Args {
    /// Path to conversation JSON file (uses the built-in sample if not provided)
    pub file: Option<PathBuf>,

    /// List item width in points
    #[arg(short, long)]
    pub width: Option<f64>,

    /// UTC offset in minutes used for dates and times
    #[arg(long, allow_hyphen_values = true)]
    pub utc_offset: Option<i32>,

    /// Print a per-cell size report instead of opening the screen
    #[arg(short, long)]
    pub report: bool,

    /// Disable colors
    #[arg(long)]
    pub no_color: bool,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

fn main() -> Result<(), AppError> {
    let args = Args::parse();

    // Load configuration with full precedence chain:
    // Defaults → Config File → Env Vars → CLI Args
    let config = {
        let config_file = bubblecell::config::load_config_with_precedence(args.config.clone())?;
        let merged = bubblecell::config::merge_config(config_file);
        let with_env = bubblecell::config::apply_env_overrides(merged);
        bubblecell::config::apply_cli_overrides(with_env, args.width, args.utc_offset)
    };
    let settings = LayoutSettings::from_config(&config)?;

    bubblecell::logging::init(&config.log_file_path)?;

    info!(
        config = ?config,
        "Configuration loaded and resolved"
    );

    let conversation = InputSource::detect(args.file.clone())
        .load(chrono::Utc::now(), settings.calculator.sizers())?;
    let layout = ConversationLayout::build(&conversation, &settings);

    if args.report {
        println!("{}", view::format_report(&layout));
        return Ok(());
    }

    let styles = CellStyles::new(ColorConfig::from_env_and_args(args.no_color));
    view::run(layout, styles)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_help_does_not_error() {
        // Help returns Err with DisplayHelp, which is success
        let result = Args::try_parse_from(["bubblecell", "--help"]);
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
    }

    #[test]
    fn test_version_does_not_error() {
        let result = Args::try_parse_from(["bubblecell", "--version"]);
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
    }

    #[test]
    fn test_no_args_defaults() {
        let args = Args::parse_from(["bubblecell"]);
        assert_eq!(args.file, None);
        assert_eq!(args.width, None);
        assert_eq!(args.utc_offset, None);
        assert!(!args.report);
        assert!(!args.no_color);
        assert_eq!(args.config, None);
    }

    #[test]
    fn test_file_path_populates_file_field() {
        let args = Args::parse_from(["bubblecell", "chat.json"]);
        assert_eq!(args.file, Some(PathBuf::from("chat.json")));
    }

    #[test]
    fn test_width_short_and_long() {
        assert_eq!(Args::parse_from(["bubblecell", "-w", "320"]).width, Some(320.0));
        assert_eq!(
            Args::parse_from(["bubblecell", "--width", "414.5"]).width,
            Some(414.5)
        );
    }

    #[test]
    fn test_width_rejects_non_number() {
        let result = Args::try_parse_from(["bubblecell", "--width", "wide"]);
        assert!(result.is_err());
        assert_eq!(
            result.unwrap_err().kind(),
            clap::error::ErrorKind::ValueValidation
        );
    }

    #[test]
    fn test_negative_utc_offset() {
        let args = Args::parse_from(["bubblecell", "--utc-offset", "-300"]);
        assert_eq!(args.utc_offset, Some(-300));
    }

    #[test]
    fn test_report_flag() {
        assert!(Args::parse_from(["bubblecell", "--report"]).report);
        assert!(Args::parse_from(["bubblecell", "-r"]).report);
    }

    #[test]
    fn test_config_path() {
        let args = Args::parse_from(["bubblecell", "--config", "/tmp/bubblecell.toml"]);
        assert_eq!(args.config, Some(PathBuf::from("/tmp/bubblecell.toml")));
    }

    #[test]
    fn test_cli_width_flows_through_config_precedence_chain() {
        let args = Args::parse_from(["bubblecell", "--width", "500"]);
        let merged = bubblecell::config::merge_config(Some(bubblecell::config::ConfigFile {
            item_width: Some(320.0),
            ..Default::default()
        }));
        let resolved = bubblecell::config::apply_cli_overrides(merged, args.width, args.utc_offset);
        assert_eq!(resolved.item_width, 500.0);

        let settings = LayoutSettings::from_config(&resolved).unwrap();
        assert_eq!(settings.item_width, 500.0);
    }
}
