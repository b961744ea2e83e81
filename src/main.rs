//! Binary entrypoint for the `repotell` CLI.

use std::process::ExitCode;

fn main() -> ExitCode {
    // Credentials may live in a local .env file; missing files are fine.
    dotenvy::dotenv().ok();

    match repotell::run(std::env::args()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
