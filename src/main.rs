use anyhow::Context;
use std::env;
use std::io::{self, Write};
use std::process::{exit, ExitCode};
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let args: Vec<String> = env::args_os()
        .skip(1)
        .map(|arg| arg.to_string_lossy().into_owned())
        .collect();

    match calculator::run(&args) {
        Ok(line) => {
            writeln!(io::stdout(), "{}", line).context("failed to write result")?;
            Ok(ExitCode::SUCCESS)
        }
        Err(err) if err.is_fatal() => {
            debug!(code = err.exit_code(), "aborting");
            writeln!(io::stderr(), "{}", err).ok();
            exit(i32::from(err.exit_code()));
        }
        Err(err) => {
            writeln!(io::stderr(), "{}", err).context("failed to write diagnostic")?;
            Ok(ExitCode::from(err.exit_code()))
        }
    }
}
