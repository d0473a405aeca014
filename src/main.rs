//! skyfare - Entry Point

use clap::Parser;
use skyfare::report::{run_report, ReportFormat, ReportRequest};
use skyfare::state::{FilterCriteria, Reveal, SortMode};
use skyfare::view::constants::LOAD_FAILED_MESSAGE;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::info;

/// skyfare - browse flight ticket offers in the terminal
#[derive(Parser, Debug)]
#[command(name = "skyfare")]
#[command(version)]
#[command(about = "TUI browser for flight ticket offers: filter, sort and page through a catalog")]
pub struct Args {
    /// Catalog file or http(s) URL (default: db.json)
    #[arg(value_name = "CATALOG", conflicts_with = "catalog")]
    pub location: Option<String>,

    /// Catalog file or http(s) URL
    #[arg(long)]
    pub catalog: Option<String>,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Initial sort mode: cheap, fast or optimal
    #[arg(short, long)]
    pub sort: Option<SortMode>,

    /// Disable colors
    #[arg(long)]
    pub no_color: bool,

    /// Print results and exit instead of starting the TUI
    #[arg(short, long)]
    pub print: bool,

    /// Output format for --print: text or json
    #[arg(long, default_value = "text", requires = "print")]
    pub format: ReportFormat,

    /// Origin substring (case-insensitive)
    #[arg(long, requires = "print")]
    pub from: Option<String>,

    /// Destination substring (case-insensitive)
    #[arg(long, requires = "print")]
    pub to: Option<String>,

    /// Accepted connection count; repeat for several
    #[arg(long = "stops", value_parser = clap::value_parser!(u32).range(0..=3), requires = "print")]
    pub stops: Vec<u32>,

    /// Accepted carrier name; repeat for several
    #[arg(long = "airline", requires = "print")]
    pub airlines: Vec<String>,

    /// Reveal this many extra batches before printing
    #[arg(long, default_value_t = 0, requires = "print")]
    pub more: usize,
}

impl Args {
    /// Catalog location from either the positional or the flag.
    fn catalog_override(&self) -> Option<String> {
        self.location.clone().or_else(|| self.catalog.clone())
    }

    /// Filter selections given on the command line.
    fn criteria(&self) -> FilterCriteria {
        let mut criteria = FilterCriteria::new();
        criteria.origin = self.from.clone().unwrap_or_default();
        criteria.destination = self.to.clone().unwrap_or_default();
        for stops in &self.stops {
            if !criteria.has_connection(*stops) {
                criteria.toggle_connection(*stops);
            }
        }
        for airline in &self.airlines {
            if !criteria.has_carrier(airline) {
                criteria.toggle_carrier(airline);
            }
        }
        criteria
    }
}

fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Defaults → Config File → Env Vars → CLI Args
    let config =
        skyfare::config::resolve_config(args.config.clone(), args.catalog_override(), args.sort)?;

    skyfare::logging::init(&config.log_file_path)?;

    info!(config = ?config, "Configuration loaded and resolved");

    let reveal = Reveal::new(config.initial_visible, config.reveal_step);

    if args.print {
        let request = ReportRequest {
            criteria: args.criteria(),
            sort: config.default_sort,
            reveal,
            more: args.more,
            format: args.format,
        };
        let mut stdout = std::io::stdout().lock();
        return match run_report(&config.catalog, &request, &mut stdout) {
            Ok(()) => Ok(ExitCode::SUCCESS),
            Err(skyfare::model::AppError::Load(_)) => {
                eprintln!("{}", LOAD_FAILED_MESSAGE);
                Ok(ExitCode::FAILURE)
            }
            Err(err) => Err(err.into()),
        };
    }

    let cli_args = skyfare::view::CliArgs::new(config.default_sort, reveal, args.no_color);
    skyfare::view::run_with_source(config.catalog, cli_args)?;

    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_help_does_not_error() {
        let result = Args::try_parse_from(["skyfare", "--help"]);
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
    }

    #[test]
    fn test_version_does_not_error() {
        let result = Args::try_parse_from(["skyfare", "--version"]);
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
    }

    #[test]
    fn test_no_args_defaults() {
        let args = Args::parse_from(["skyfare"]);
        assert_eq!(args.location, None);
        assert_eq!(args.catalog, None);
        assert_eq!(args.config, None);
        assert_eq!(args.sort, None);
        assert!(!args.no_color);
        assert!(!args.print);
        assert_eq!(args.format, ReportFormat::Text);
        assert_eq!(args.more, 0);
        assert!(args.criteria().is_empty());
    }

    #[test]
    fn test_positional_catalog() {
        let args = Args::parse_from(["skyfare", "data/db.json"]);
        assert_eq!(args.catalog_override(), Some("data/db.json".to_string()));
    }

    #[test]
    fn test_catalog_flag() {
        let args = Args::parse_from(["skyfare", "--catalog", "http://localhost:3000/db.json"]);
        assert_eq!(
            args.catalog_override(),
            Some("http://localhost:3000/db.json".to_string())
        );
    }

    #[test]
    fn test_positional_and_flag_conflict() {
        let result = Args::try_parse_from(["skyfare", "a.json", "--catalog", "b.json"]);
        assert_eq!(
            result.unwrap_err().kind(),
            clap::error::ErrorKind::ArgumentConflict
        );
    }

    #[test]
    fn test_sort_parses_mode() {
        let args = Args::parse_from(["skyfare", "--sort", "Optimal"]);
        assert_eq!(args.sort, Some(SortMode::Optimal));

        let args = Args::parse_from(["skyfare", "-s", "fast"]);
        assert_eq!(args.sort, Some(SortMode::Fast));
    }

    #[test]
    fn test_sort_invalid_rejects() {
        let result = Args::try_parse_from(["skyfare", "--sort", "random"]);
        assert_eq!(result.unwrap_err().kind(), clap::error::ErrorKind::ValueValidation);
    }

    #[test]
    fn test_print_filters_build_criteria() {
        let args = Args::parse_from([
            "skyfare", "--print", "--from", "Москва", "--to", "Сочи", "--stops", "0", "--stops",
            "1", "--airline", "S7", "--airline", "S7",
        ]);
        let criteria = args.criteria();

        assert_eq!(criteria.origin, "Москва");
        assert_eq!(criteria.destination, "Сочи");
        assert_eq!(criteria.connections().collect::<Vec<_>>(), vec![0, 1]);
        assert_eq!(criteria.carriers().collect::<Vec<_>>(), vec!["S7"]);
    }

    #[test]
    fn test_stops_out_of_range_rejects() {
        let result = Args::try_parse_from(["skyfare", "--print", "--stops", "4"]);
        assert_eq!(result.unwrap_err().kind(), clap::error::ErrorKind::ValueValidation);
    }

    #[test]
    fn test_report_flags_require_print() {
        let result = Args::try_parse_from(["skyfare", "--from", "Москва"]);
        assert_eq!(
            result.unwrap_err().kind(),
            clap::error::ErrorKind::MissingRequiredArgument
        );
    }

    #[test]
    fn test_format_json() {
        let args = Args::parse_from(["skyfare", "--print", "--format", "json", "--more", "2"]);
        assert_eq!(args.format, ReportFormat::Json);
        assert_eq!(args.more, 2);
    }

    #[test]
    fn test_config_path() {
        let args = Args::parse_from(["skyfare", "--config", "/custom/config.toml"]);
        assert_eq!(args.config, Some(PathBuf::from("/custom/config.toml")));
    }
}
