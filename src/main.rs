//! bgit - Git repository queries for build scripts

use std::process::ExitCode;

use buildgit::ui::output;

fn main() -> ExitCode {
    match buildgit::cli::run() {
        Ok(code) => code,
        Err(err) => {
            output::error(format!("{:#}", err));
            ExitCode::FAILURE
        }
    }
}
