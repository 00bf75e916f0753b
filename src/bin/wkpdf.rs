use std::process;

use wkpdf::render::{JsonHandoff, Renderer};
use wkpdf::{logger, usage, CliError, Invocation};

/// Parses the wkpdf command line and hands the configuration to the renderer
fn main() {
    logger::init_logger();

    let invocation = match wkpdf::parse_args(std::env::args_os()) {
        Ok(invocation) => invocation,
        Err(CliError::Usage(err)) => err.exit(),
        Err(err) => {
            eprintln!("{err}");
            process::exit(err.exit_code());
        }
    };

    match invocation {
        Invocation::Help => print!("{}", usage::usage_text()),
        Invocation::Version => println!("{}", usage::version_text()),
        Invocation::Run(config) => {
            let mut renderer = JsonHandoff::new(std::io::stdout().lock());
            if let Err(err) = renderer.render(config) {
                eprintln!("Error: {err:#}");
                process::exit(1);
            }
        }
    }
}
