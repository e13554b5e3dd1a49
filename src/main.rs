use std::process::ExitCode;

fn main() -> ExitCode {
    match kindle_clippings::cli::run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
