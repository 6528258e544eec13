//! Binary entrypoint for the `lookfix` CLI.

use std::process::ExitCode;

fn main() -> ExitCode {
    // LOOKFIX_* settings may come from a local .env file.
    let _ = dotenvy::dotenv();
    match lookfix::run(std::env::args()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
