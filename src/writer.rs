use dv::{DepositResponse, Result};

use std::{
    fs::File,
    io::{self, BufWriter, Write},
    path::PathBuf,
};

pub fn build_line_writer(filepath: Option<PathBuf>) -> Result<Box<dyn Write>> {
    let writer: Box<dyn Write> = match filepath {
        Some(filepath) => Box::new(BufWriter::new(File::create(filepath)?)),
        None => Box::new(BufWriter::new(io::stdout())),
    };

    return Ok(writer);
}

pub fn write_response(writer: &mut dyn Write, response: &DepositResponse) -> Result {
    let json = response.to_json()?;
    writeln!(writer, "{json}")?;

    Ok(())
}
