use clap::{Parser, ValueEnum};
use strum_macros::Display;

use crate::dns::zone;

/// How results are printed to the console
#[derive(ValueEnum, Display, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    /// Status lines: `[+] <address> [<name>]`
    #[value(name = "status")]
    #[strum(serialize = "status")]
    Status,
    /// Only the reversed names, one per line
    #[value(name = "plain")]
    #[strum(serialize = "plain")]
    Plain,
}

/// Command-line arguments for the program
#[derive(Parser, Debug)]
#[allow(clippy::struct_excessive_bools)]
#[command(
    name = "reverseaddr",
    author = "Alex Ogden",
    version = env!("CARGO_PKG_VERSION"),
    about = "Reverse IPv4/IPv6 addresses into DNSBL lookup labels",
)]
pub struct CommandArgs {
    /// Addresses to reverse: single IP, CIDR block, range (start-end) or comma-separated list
    #[arg(env = "REVERSEADDR_TARGETS")]
    pub targets: Vec<String>,

    /// File with one target per line, blank lines and '#' comments are ignored
    #[arg(short, long, required = false, env = "REVERSEADDR_FILE")]
    pub file: Option<String>,

    /// DNSBL zone to append to each reversed name, e.g. zen.spamhaus.org
    #[arg(short, long, value_parser = parse_zone, conflicts_with = "ptr", env = "REVERSEADDR_ZONE")]
    pub zone: Option<String>,

    /// Append the reverse-DNS zone (in-addr.arpa or ip6.arpa) instead of a DNSBL zone
    #[arg(long, default_value_t = false, env = "REVERSEADDR_PTR")]
    pub ptr: bool,

    /// Console output format
    #[arg(
        long,
        value_enum,
        default_value_t = OutputFormat::Status,
        ignore_case = true,
        env = "REVERSEADDR_FORMAT"
    )]
    pub format: OutputFormat,

    /// Path of output file to write JSON results to. Extension is optional.
    #[arg(long, required = false, env = "REVERSEADDR_JSON_OUTPUT")]
    pub json: Option<String>,

    /// Don't print results to the console, only write to the output file
    #[arg(short = 'Q', long, required = false, env = "REVERSEADDR_QUIET")]
    pub quiet: bool,

    /// Print extra information
    #[arg(short, long, default_value_t = false, env = "REVERSEADDR_VERBOSE")]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, env = "REVERSEADDR_NO_COLOR")]
    pub no_color: bool,
}

impl CommandArgs {
    pub fn validate(&self) -> Result<(), String> {
        if self.targets.is_empty() && self.file.is_none() {
            return Err(
                "At least one target or '--file <FILE>' must be provided".to_string(),
            );
        }

        if self.quiet && self.json.is_none() {
            return Err("The argument '--quiet' requires '--json <OUTPUT_FILE>'".to_string());
        }

        Ok(())
    }
}

fn parse_zone(s: &str) -> Result<String, String> {
    zone::validate_zone(s).map_err(|e| e.to_string())
}

/// Retrieves and validates the parsed command-line arguments
pub fn get_parsed_args() -> CommandArgs {
    let args = CommandArgs::parse();
    if let Err(e) = args.validate() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
    args
}
