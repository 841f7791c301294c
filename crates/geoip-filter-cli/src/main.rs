use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use policy_engine::Verdict;

mod commands;
mod logging;

const EXIT_ALLOW: u8 = 0;
const EXIT_DENY: u8 = 1;
/// Configuration, log channel, lookup and usage failures.
const EXIT_FATAL: u8 = 2;

#[derive(Parser, Debug)]
#[command(
    name = "geoip-filter",
    version,
    about = "Allow or deny an IP address by list, private range and country"
)]
struct Cli {
    /// Use this configuration file instead of searching . and /srv/config
    #[arg(long)]
    config: Option<PathBuf>,

    /// Increase diagnostic verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Address to evaluate
    ip: String,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    let result = commands::check::execute(commands::check::CheckInputs {
        config_path: cli.config,
        ip: cli.ip,
    });

    match result {
        Ok(verdict) => ExitCode::from(exit_status(&verdict)),
        Err(err) => {
            eprintln!("geoip-filter: {err:#}");
            ExitCode::from(EXIT_FATAL)
        }
    }
}

fn exit_status(verdict: &Verdict) -> u8 {
    if verdict.is_allow() {
        EXIT_ALLOW
    } else {
        EXIT_DENY
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use policy_engine::Reason;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_requires_exactly_one_address() {
        assert!(Cli::try_parse_from(["geoip-filter"]).is_err());
        assert!(Cli::try_parse_from(["geoip-filter", "1.2.3.4", "5.6.7.8"]).is_err());

        let cli = Cli::try_parse_from(["geoip-filter", "-vv", "1.2.3.4"]).unwrap();
        assert_eq!(cli.ip, "1.2.3.4");
        assert_eq!(cli.verbose, 2);
        assert!(cli.config.is_none());
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(exit_status(&Verdict::allow(Reason::Private)), 0);
        assert_eq!(exit_status(&Verdict::deny(Reason::Blacklist)), 1);
        assert_eq!(
            exit_status(&Verdict::deny(Reason::CountryDeny("US".to_string()))),
            1
        );
    }
}
