use std::process::ExitCode;

fn main() -> ExitCode {
    match gf::cli::run() {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
