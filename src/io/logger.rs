use colored::{ColoredString, Colorize};
use std::fmt::Display;
use std::io::{self, Write};

#[derive(PartialEq, Eq)]
pub enum Status {
    Info,
    Success,
    Failure,
    Warning,
    Error,
}

impl Status {
    fn symbol(&self) -> ColoredString {
        match self {
            Self::Info => "~".cyan(),
            Self::Success => "+".green(),
            Self::Failure => "-".red(),
            Self::Warning => "!".yellow(),
            Self::Error => "!".red(),
        }
    }

    const fn is_stderr(&self) -> bool {
        matches!(self, Self::Failure | Self::Error)
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

pub fn format_status(status: &Status, message: &impl Display) -> String {
    format!("[{status}] {message}")
}

pub fn status(status: &Status, message: &impl Display, newline: bool) {
    let line = format_status(status, message);
    let newline = if newline { "\n" } else { "" };

    if status.is_stderr() {
        eprintln!("{newline}{line}");
    } else {
        println!("{newline}{line}");
    }
}

/// Writes a status line to `writer` instead of stdout/stderr
pub fn write_status(
    writer: &mut impl Write,
    status: &Status,
    message: &impl Display,
) -> io::Result<()> {
    writeln!(writer, "{}", format_status(status, message))
}

/// Forces colored output on or off, `None` falls back to terminal/`NO_COLOR` detection
pub fn set_color(enabled: Option<bool>) {
    match enabled {
        Some(enabled) => colored::control::set_override(enabled),
        None => colored::control::unset_override(),
    }
}

#[macro_export]
macro_rules! log_error {
    ($message:expr) => {
        $crate::io::logger::status(
            &$crate::io::logger::Status::Error,
            &$message.to_string(),
            false,
        );
    };
    ($message:expr, $newline:expr) => {
        $crate::io::logger::status(
            &$crate::io::logger::Status::Error,
            &$message.to_string(),
            $newline,
        );
    };
}
