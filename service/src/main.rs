use std::process::ExitCode;

fn main() -> ExitCode {
    rdls_template::cli::run()
}
