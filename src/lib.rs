//! Single-shot command-line arithmetic.
//!
//! An invocation is either `<operation> <value>` or `<value> <operator> <value>`.
//! [`run`] takes it through classify, parse, domain check, compute and format,
//! and hands back the line to print or the failure to report.

pub mod error;
pub mod evaluate;
pub mod format;
pub mod lexer;
pub mod parse;

pub use error::{CalcError, Result};

use tracing::debug;

/// Evaluates one invocation; `args` excludes the program name.
pub fn run(args: &[String]) -> Result<String> {
    let calculation = parse::classify(args)?.parse()?;
    let result = evaluate::evaluate(&calculation)?;
    let line = format::format_result(result);
    debug!(result, %line, "formatted result");
    Ok(line)
}
