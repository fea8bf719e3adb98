use std::process::ExitCode;

fn main() -> ExitCode {
    balcao_cli::run()
}
