// ABOUTME: Main entry point for the credtmpl CLI application
// ABOUTME: Parses arguments, runs the selected command and maps failures to exit code 1

use credtmpl::cli::{App, Args};
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    let args = match Args::try_parse_args() {
        Ok(args) => args,
        // --help and --version
        Err(e) if !e.use_stderr() => {
            let _ = e.print();
            return ExitCode::SUCCESS;
        }
        Err(e) => {
            eprintln!("error: {}", Args::usage_error(&e));
            return ExitCode::FAILURE;
        }
    };

    let result = match App::from_args(&args) {
        Ok(mut app) => app.run(args).await,
        Err(e) => Err(e),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
