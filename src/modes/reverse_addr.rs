use anyhow::{Context, Result, ensure};
use colored::Colorize;
use std::fmt::Display;
use std::io::Write;

use crate::{
    dns::{
        error::ZoneError,
        reverse::reverse,
        zone::{dnsbl_name, ptr_name},
    },
    io::{
        address_list,
        cli::{CommandArgs, OutputFormat},
        json::{Output, ReverseOutput},
        logger::{Status, write_status},
        target,
    },
};

/// Zone appended to each reversed name
enum Suffix {
    None,
    Dnsbl(String),
    Ptr,
}

impl Suffix {
    fn from_args(args: &CommandArgs) -> Self {
        match (&args.zone, args.ptr) {
            (Some(zone), _) => Self::Dnsbl(zone.clone()),
            (None, true) => Self::Ptr,
            (None, false) => Self::None,
        }
    }

    fn apply(&self, address: &str) -> Result<String, ZoneError> {
        match self {
            Self::None => Ok(reverse(address)?),
            Self::Dnsbl(zone) => dnsbl_name(address, zone),
            Self::Ptr => Ok(ptr_name(address)?),
        }
    }
}

/// Routes console output. Results go to `out`, failures to `err`, and
/// informational lines to `out` only when they cannot pollute plain output.
struct Console<'a, O: Write, E: Write> {
    out: &'a mut O,
    err: &'a mut E,
    format: OutputFormat,
    quiet: bool,
}

impl<O: Write, E: Write> Console<'_, O, E> {
    fn result(&mut self, address: &str, name: &str) -> Result<()> {
        if self.quiet {
            return Ok(());
        }
        match self.format {
            OutputFormat::Plain => writeln!(self.out, "{name}")?,
            OutputFormat::Status => write_status(
                &mut *self.out,
                &Status::Success,
                &format!("{} [{}]", address.cyan(), name.bold()),
            )?,
        }
        Ok(())
    }

    fn failure(&mut self, status: &Status, message: &impl Display) -> Result<()> {
        if !self.quiet {
            write_status(&mut *self.err, status, message)?;
        }
        Ok(())
    }

    fn info(&mut self, status: &Status, message: &impl Display) -> Result<()> {
        if self.format == OutputFormat::Status && !self.quiet {
            write_status(&mut *self.out, status, message)?;
        } else {
            write_status(&mut *self.err, status, message)?;
        }
        Ok(())
    }
}

/// Reverses every target named by `args`, writing console output to `out`/`err`
/// and the JSON file when requested.
pub fn run(args: &CommandArgs, out: &mut impl Write, err: &mut impl Write) -> Result<ReverseOutput> {
    let mut console = Console {
        out,
        err,
        format: args.format,
        quiet: args.quiet,
    };

    let targets = collect_targets(args, &mut console)?;
    let suffix = Suffix::from_args(args);
    let mut output = ReverseOutput::new(args.zone.clone());

    for target in &targets {
        let addresses = match target::expand_target(target) {
            Ok(addresses) => addresses,
            Err(error) => {
                console.failure(&Status::Error, &error)?;
                output.add_failure(target.clone(), error.to_string());
                continue;
            }
        };

        for address in addresses {
            match suffix.apply(&address) {
                Ok(name) => {
                    console.result(&address, &name)?;
                    output.add_result(address, name);
                }
                Err(error) => {
                    console.failure(
                        &Status::Failure,
                        &format!("{} [{}]", address.red().bold(), error),
                    )?;
                    output.add_failure(address, error.to_string());
                }
            }
        }
    }

    if args.verbose {
        console.info(
            &Status::Info,
            &format!(
                "Reversed {} addresses, {} failed",
                output.results.len().to_string().bold(),
                output.failures.len().to_string().bold()
            ),
        )?;
    }

    if let Some(json_file) = &args.json {
        let written = output.write_to_file(json_file)?;
        console.info(&Status::Info, &format!("JSON output written to: {written}"))?;
    }

    Ok(output)
}

/// Fails when any target could not be reversed
pub fn ensure_success(output: &ReverseOutput) -> Result<()> {
    ensure!(
        output.failures.is_empty(),
        "{} target(s) could not be reversed",
        output.failures.len()
    );
    Ok(())
}

fn collect_targets<O: Write, E: Write>(
    args: &CommandArgs,
    console: &mut Console<'_, O, E>,
) -> Result<Vec<String>> {
    let mut targets = args.targets.clone();

    if let Some(file) = &args.file {
        let from_file = address_list::read_from_file(file)
            .with_context(|| format!("Failed to load targets from {file}"))?;
        if from_file.is_empty() {
            console.info(&Status::Warning, &format!("No targets found in {file}"))?;
        }
        targets.extend(from_file);
    }

    ensure!(!targets.is_empty(), "No targets to reverse");
    Ok(targets)
}
