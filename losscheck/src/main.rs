use std::process::ExitCode;

mod application;

mod presentation {
    pub mod cli;
    pub mod report;
}

fn main() -> ExitCode {
    match application::run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::from(3)
        }
    }
}
