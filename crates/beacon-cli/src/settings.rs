//! Command-line and environment configuration.
//!
//! Every option can also be set through a `BEACON_*` environment variable.
//! Flags take precedence over the environment, and `--demo` overrides any
//! input file.

use crate::error::Result;
use crate::input::Source;
use crate::report::OutputFormat;
use beacon_alloc::{AllocConfig, Palette, DEFAULT_RADIUS_KM};
use clap::Parser;
use std::path::PathBuf;

/// Default palette when none is given.
pub const DEFAULT_PALETTE: &str = "1,2,3";

#[derive(Parser, Debug, Clone)]
#[command(name = "beacon")]
#[command(about = "Assign non-interfering channels to geographically positioned nodes", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Input CSV with an id,latitude,longitude header (`-` reads stdin)
    #[arg(value_name = "FILE", env = "BEACON_INPUT", required_unless_present = "demo")]
    pub input: Option<PathBuf>,

    /// Use the built-in sample nodes instead of an input file
    #[arg(long)]
    pub demo: bool,

    /// Interference radius in kilometers; closer pairs must differ
    #[arg(short, long, value_name = "KM", default_value_t = DEFAULT_RADIUS_KM, env = "BEACON_RADIUS_KM")]
    pub radius_km: f64,

    /// Channels in preference order (comma-separated)
    #[arg(short, long, value_name = "LIST", default_value = DEFAULT_PALETTE, env = "BEACON_PALETTE")]
    pub palette: Palette,

    /// Report format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Exit with status 2 if any node is left without a channel
    #[arg(long)]
    pub strict: bool,
}

impl Cli {
    /// The input source selected by the arguments.
    pub fn source(&self) -> Source {
        match &self.input {
            _ if self.demo => Source::Demo,
            Some(path) if path.as_os_str() == "-" => Source::Stdin,
            Some(path) => Source::File(path.clone()),
            None => Source::Demo,
        }
    }

    /// Validated engine configuration.
    pub fn alloc_config(&self) -> Result<AllocConfig> {
        Ok(AllocConfig::new(self.radius_km, self.palette.clone())?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use beacon_alloc::Channel;

    fn parse(args: &[&str]) -> std::result::Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("beacon").chain(args.iter().copied()))
    }

    #[test]
    fn defaults() {
        let cli = parse(&["nodes.csv"]).unwrap();
        assert_eq!(cli.source(), Source::File(PathBuf::from("nodes.csv")));
        assert_eq!(cli.radius_km, DEFAULT_RADIUS_KM);
        assert_eq!(cli.palette.channels(), &[Channel(1), Channel(2), Channel(3)]);
        assert_eq!(cli.format, OutputFormat::Table);
        assert!(!cli.strict);
    }

    #[test]
    fn dash_means_stdin() {
        let cli = parse(&["-"]).unwrap();
        assert_eq!(cli.source(), Source::Stdin);
    }

    #[test]
    fn demo_flag() {
        let cli = parse(&["--demo", "--radius-km", "2.5", "--palette", "1,6,11", "--format", "json"]).unwrap();
        assert_eq!(cli.source(), Source::Demo);
        assert_eq!(cli.radius_km, 2.5);
        assert_eq!(cli.palette.len(), 3);
        assert_eq!(cli.format, OutputFormat::Json);
    }

    #[test]
    fn rejects_bad_palette() {
        assert!(parse(&["--demo", "--palette", "1,1"]).is_err());
        assert!(parse(&["--demo", "--palette", "0"]).is_err());
    }

    #[test]
    fn rejects_non_positive_radius_at_config() {
        let cli = parse(&["--demo", "--radius-km", "0"]).unwrap();
        assert!(cli.alloc_config().is_err());
    }

    #[test]
    fn demo_overrides_file_argument() {
        let cli = parse(&["--demo", "nodes.csv"]).unwrap();
        assert_eq!(cli.source(), Source::Demo);
    }

    #[test]
    fn demo_overrides_input_from_environment() {
        std::env::set_var("BEACON_INPUT", "from-env.csv");
        let demo = parse(&["--demo"]);
        let plain = parse(&[]);
        std::env::remove_var("BEACON_INPUT");

        assert_eq!(demo.unwrap().source(), Source::Demo);
        assert_eq!(plain.unwrap().source(), Source::File(PathBuf::from("from-env.csv")));
    }
}
