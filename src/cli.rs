//! Command-line argument parsing.
//!
//! Bad input (unknown flags, a non-numeric or out-of-range port) is a fatal
//! usage error: clap prints usage and exits with status 2 before any
//! listener is opened. `--help` prints usage and exits 0.

use clap::Parser;

use crate::config::{DEFAULT_BIND_ADDRESS, DEFAULT_PORT};

/// Vitals: HTTP health-check endpoint reporting EC2 instance metadata
#[derive(Parser, Debug)]
#[command(name = "vitals", version, about)]
pub struct Args {
    /// Address to bind the HTTP listener to
    #[arg(short = 's', long = "server_ip", default_value = DEFAULT_BIND_ADDRESS)]
    pub server_ip: String,

    /// Port to bind the HTTP listener to
    #[arg(
        short = 'p',
        long = "server_port",
        default_value_t = DEFAULT_PORT,
        value_parser = clap::value_parser!(u16).range(1..)
    )]
    pub server_port: u16,

    /// AWS region to report; detected from instance metadata if omitted
    #[arg(short = 'r', long = "region")]
    pub region: Option<String>,

    /// Log level filter (e.g., "vitals=debug")
    #[arg(short, long)]
    pub log_level: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    #[test]
    fn defaults_when_no_flags_given() {
        let args = Args::try_parse_from(["vitals"]).unwrap();
        assert_eq!(args.server_ip, "0.0.0.0");
        assert_eq!(args.server_port, 80);
        assert!(args.region.is_none());
        assert!(args.log_level.is_none());
    }

    #[test]
    fn short_flags_override_defaults() {
        let args =
            Args::try_parse_from(["vitals", "-s", "127.0.0.1", "-p", "8080", "-r", "us-west-2"])
                .unwrap();
        assert_eq!(args.server_ip, "127.0.0.1");
        assert_eq!(args.server_port, 8080);
        assert_eq!(args.region.as_deref(), Some("us-west-2"));
    }

    #[test]
    fn long_flags_are_accepted() {
        let args = Args::try_parse_from([
            "vitals",
            "--server_ip",
            "10.0.0.1",
            "--server_port",
            "8081",
            "--region",
            "eu-west-1",
        ])
        .unwrap();
        assert_eq!(args.server_ip, "10.0.0.1");
        assert_eq!(args.server_port, 8081);
        assert_eq!(args.region.as_deref(), Some("eu-west-1"));
    }

    #[test]
    fn non_numeric_port_is_a_usage_error() {
        let err = Args::try_parse_from(["vitals", "-p", "eighty"]).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn port_zero_is_rejected() {
        let err = Args::try_parse_from(["vitals", "-p", "0"]).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn help_exits_successfully() {
        let err = Args::try_parse_from(["vitals", "--help"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DisplayHelp);
        assert_eq!(err.exit_code(), 0);
    }
}
