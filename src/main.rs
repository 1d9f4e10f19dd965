use std::process::ExitCode;

fn main() -> ExitCode {
    if let Err(err) = a7::run() {
        eprintln!("error: {err:#}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
