//! Workshop migrate - convert legacy flat exercises to the step-based layout

use std::process::ExitCode;

fn main() -> ExitCode {
    if let Err(e) = workshop_migrate::cli::run() {
        eprintln!("Error: {:#}", e);
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
