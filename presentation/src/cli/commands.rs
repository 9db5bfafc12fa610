//! CLI command definitions

use clap::{Args, Parser, Subcommand, ValueEnum};
use outreach_application::DEFAULT_SUBJECT;
use std::path::PathBuf;

/// Output format for outreach results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Every result with its message body
    Full,
    /// One line per domain
    Summary,
    /// JSON array of results (same shape as --export)
    Json,
}

/// CLI arguments for outreach-scout
#[derive(Parser, Debug)]
#[command(name = "outreach-scout")]
#[command(author, version, about = "Find contact addresses and draft backlink outreach")]
#[command(long_about = r#"
Outreach Scout visits each domain you give it, collects the email addresses
it can find, drafts a personalized backlink outreach message and picks the
best recipient. Reviewed results can then be sent through every configured
SMTP account.

Per domain:
1. Fetch: download the front page
2. Harvest: scan markup, mailto links, text and attributes; follow "Contact" links
3. Draft: generate the outreach message from title, description and page text
4. Select: pick the recipient from the harvested addresses

Configuration files are loaded from (in priority order):
1. OUTREACH_* environment variables
2. --config <path>     Explicit config file
3. ./outreach.toml     Project-level config
4. ~/.config/outreach-scout/config.toml   Global config

Example:
  outreach-scout scrape domains.txt --export results.json
  outreach-scout send results.json --host example.com
  outreach-scout check-transports
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,

    /// Also write logs to this file
    #[arg(long, value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Find contacts and draft outreach for a list of domains
    Scrape(ScrapeArgs),

    /// Send reviewed outreach through every configured transport
    Send(SendArgs),

    /// Connect and log in to every configured transport without sending
    CheckTransports,
}

#[derive(Args, Debug)]
pub struct ScrapeArgs {
    /// File with one domain per line (stdin when omitted or "-")
    #[arg(value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "full")]
    pub output: OutputFormat,

    /// Write results as JSON for review and `send`
    #[arg(long, value_name = "PATH")]
    pub export: Option<PathBuf>,

    /// Domains processed at the same time (overrides config)
    #[arg(short = 'j', long, value_name = "N")]
    pub concurrency: Option<usize>,

    /// Model to use (overrides config)
    #[arg(short, long, value_name = "MODEL")]
    pub model: Option<String>,
}

impl ScrapeArgs {
    /// The input file, or `None` for stdin
    pub fn input_path(&self) -> Option<&PathBuf> {
        self.input.as_ref().filter(|path| path.as_os_str() != "-")
    }
}

#[derive(Args, Debug)]
pub struct SendArgs {
    /// Results file written by `scrape --export`
    #[arg(value_name = "RESULTS")]
    pub results: PathBuf,

    /// Only send to these hosts (repeatable; default: every result with a recipient)
    #[arg(long = "host", value_name = "HOST")]
    pub hosts: Vec<String>,

    /// Subject line; {host} is replaced with the domain
    #[arg(short, long, default_value = DEFAULT_SUBJECT)]
    pub subject: String,

    /// Override the recipient (requires exactly one --host)
    #[arg(long, value_name = "EMAIL", requires = "hosts")]
    pub to: Option<String>,

    /// Print the messages instead of sending them
    #[arg(long)]
    pub dry_run: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_scrape() {
        let cli = Cli::try_parse_from([
            "outreach-scout",
            "-vv",
            "scrape",
            "domains.txt",
            "--output",
            "json",
            "--export",
            "out.json",
        ])
        .unwrap();

        assert_eq!(cli.verbose, 2);
        let Some(Command::Scrape(args)) = cli.command else {
            panic!("expected scrape");
        };
        assert_eq!(args.input_path(), Some(&PathBuf::from("domains.txt")));
        assert_eq!(args.output, OutputFormat::Json);
        assert_eq!(args.export, Some(PathBuf::from("out.json")));
    }

    #[test]
    fn test_scrape_dash_reads_stdin() {
        let cli = Cli::try_parse_from(["outreach-scout", "scrape", "-"]).unwrap();
        let Some(Command::Scrape(args)) = cli.command else {
            panic!("expected scrape");
        };
        assert_eq!(args.input_path(), None);
        assert_eq!(args.output, OutputFormat::Full);
    }

    #[test]
    fn test_parse_send_defaults() {
        let cli = Cli::try_parse_from([
            "outreach-scout",
            "send",
            "results.json",
            "--host",
            "foo.com",
            "--host",
            "bar.com",
        ])
        .unwrap();

        let Some(Command::Send(args)) = cli.command else {
            panic!("expected send");
        };
        assert_eq!(args.hosts, vec!["foo.com", "bar.com"]);
        assert_eq!(args.subject, "Backlink Opportunity for {host}");
        assert!(args.to.is_none());
    }

    #[test]
    fn test_send_to_requires_host() {
        let result =
            Cli::try_parse_from(["outreach-scout", "send", "results.json", "--to", "a@foo.com"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "outreach-scout",
            "check-transports",
            "--config",
            "alt.toml",
            "-q",
        ])
        .unwrap();

        assert!(matches!(cli.command, Some(Command::CheckTransports)));
        assert_eq!(cli.config, Some(PathBuf::from("alt.toml")));
        assert!(cli.quiet);
    }
}
