use dv::Result;

use std::{
    fs::File,
    io::{self, BufRead, BufReader},
    path::PathBuf,
};

pub fn build_line_reader(filepath: Option<PathBuf>) -> Result<Box<dyn BufRead>> {
    let reader: Box<dyn BufRead> = match filepath {
        Some(filepath) => Box::new(BufReader::new(File::open(filepath)?)),
        None => Box::new(BufReader::new(io::stdin())),
    };

    return Ok(reader);
}
