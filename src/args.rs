use dv::Result;

use std::{env, fs, path::PathBuf};

use anyhow::Context;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum InputArgsError {
    #[error("Couldn't parse input arguments: {0}")]
    Parse(String),

    #[error("File not found: {0}")]
    FileNotFound(String),
}

/// Where to read deposits from and write responses to; `None` means stdin / stdout
#[derive(Debug, Default)]
pub struct InputArgs {
    pub input: Option<PathBuf>,
    pub output: Option<PathBuf>,
}

/// Parses `[INPUT] [OUTPUT]`. The input file, when given, must exist.
pub fn parse_input_args() -> Result<InputArgs> {
    let mut args = env::args().skip(1);

    let input = args
        .next()
        .map(|filename| {
            fs::canonicalize(&filename).with_context(|| InputArgsError::FileNotFound(filename))
        })
        .transpose()?;

    let output = args.next().map(PathBuf::from);

    if let Some(extra) = args.next() {
        Err(InputArgsError::Parse(format!(
            "Unexpected argument: {extra}. Usage: deposit-validator [INPUT] [OUTPUT]"
        )))?
    }

    Ok(InputArgs { input, output })
}
