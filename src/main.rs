// src/main.rs
use std::process::ExitCode;

fn main() -> ExitCode {
    match wordlist_lines::app::run() {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
