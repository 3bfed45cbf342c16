//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

use tourline_cli::CliError;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .target(env_logger::Target::Stderr)
        .init();
    match tourline_cli::run() {
        Ok(()) => {}
        // Help and version output are reported through clap's own exit path.
        Err(CliError::ArgumentParsing(err)) => err.exit(),
        Err(err) => {
            eprintln!("tourline: {err}");
            std::process::exit(1);
        }
    }
}
