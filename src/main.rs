//! takt - Assembly-line balancing with the Ranked Positional Weight method

use std::process::ExitCode;

fn main() -> ExitCode {
    if let Err(e) = takt::cli::run() {
        eprintln!("Error: {:#}", e);
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
