//! Command-line entry point: sort the unique words of a text file.

use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

use wordset::pipeline::{self, BuildStrategy};

const USAGE: &str = "\
usage: wordset <input> [options]

Reads a text file and writes its deduplicated, sorted word list.

options:
  -o, --output <path>  output file (default: output.txt)
  -p, --parallel       build the set with the fork-join strategy
  -h, --help           print this message

Logging is controlled through the RUST_LOG environment variable.";

fn main() -> ExitCode {
    pretty_env_logger::init();

    let mut input: Option<PathBuf> = None;
    let mut output = PathBuf::from("output.txt");
    let mut strategy = BuildStrategy::Sequential;

    let mut arguments = env::args().skip(1);
    while let Some(argument) = arguments.next() {
        match argument.as_str() {
            "-p" | "--parallel" => strategy = BuildStrategy::Parallel,
            "-o" | "--output" => match arguments.next() {
                Some(path) => output = PathBuf::from(path),
                None => {
                    eprintln!("error: {argument} requires a path\n\n{USAGE}");
                    return ExitCode::FAILURE;
                }
            },
            "-h" | "--help" => {
                println!("{USAGE}");
                return ExitCode::SUCCESS;
            }
            _ if input.is_none() && !argument.starts_with('-') => {
                input = Some(PathBuf::from(argument));
            }
            other => {
                eprintln!("error: unexpected argument '{other}'\n\n{USAGE}");
                return ExitCode::FAILURE;
            }
        }
    }

    let Some(input) = input else {
        eprintln!("error: missing input file\n\n{USAGE}");
        return ExitCode::FAILURE;
    };

    match pipeline::process_file(&input, &output, strategy) {
        Ok(report) => {
            println!("{report}");
            ExitCode::SUCCESS
        }
        Err(error) => {
            log::error!("{error}");
            eprintln!("error: {error}");
            ExitCode::FAILURE
        }
    }
}
