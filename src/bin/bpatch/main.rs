use std::process::ExitCode;

mod args;
mod resolve;

fn main() -> ExitCode {
    args::run()
}
