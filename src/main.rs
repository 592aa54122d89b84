use std::io;

use reverseaddr::io::{cli, logger};
use reverseaddr::log_error;
use reverseaddr::modes::reverse_addr;

fn main() {
    let args = cli::get_parsed_args();
    logger::set_color(if args.no_color { Some(false) } else { None });

    let result = reverse_addr::run(&args, &mut io::stdout().lock(), &mut io::stderr().lock())
        .and_then(|output| reverse_addr::ensure_success(&output));

    if let Err(err) = result {
        log_error!(format!("{err:#}"));
        std::process::exit(1);
    }
}
