mod args;
mod config;
mod reader;
mod writer;

use dv::processor::{self, ProcessError, ProcessSummary};
use dv::services::DepositValidator;
use dv::Result;

use std::io::{BufRead, Write};

fn main() -> Result {
    config::configure_app()?;

    log::debug!("Application configured. Beginning process...");

    let mut validator = dv::build_validator();

    let summary = process_data(&mut validator)?;

    log::info!(
        "Processed {} deposits: {} accepted, {} rejected, {} duplicates skipped, {} malformed lines skipped",
        validator.processed_count(),
        summary.accepted,
        summary.rejected,
        summary.duplicates,
        summary.malformed,
    );

    log::debug!("Application finished successfully!");

    Ok(())
}

/// Read input lines, validate each deposit, and write one response per processed deposit
fn process_data(validator: &mut DepositValidator) -> Result<ProcessSummary> {
    let input_args = args::parse_input_args()?;
    log::debug!("Found input args: {input_args:?}");

    let rdr = reader::build_line_reader(input_args.input)?;
    let mut wtr = writer::build_line_writer(input_args.output)?;

    let mut summary = ProcessSummary::new();

    for (line_no, bytes) in rdr.split(b'\n').enumerate() {
        let bytes = bytes?;

        let line = match String::from_utf8(bytes) {
            Ok(line) => line,
            Err(e) => {
                log::warn!("Skipping line {}: {e}", line_no + 1);
                summary.record_malformed();
                continue;
            }
        };

        let line = line.trim_end_matches('\r');
        if line.trim().is_empty() {
            log::debug!("Skipping blank line {}", line_no + 1);
            continue;
        }

        let result = processor::process_line(validator, line);
        summary.record(&result);

        match result {
            Ok(response) => {
                log::debug!("Writing response: {response:?}");
                writer::write_response(&mut wtr, &response)?;
            }
            Err(e) => match e.downcast_ref::<ProcessError>() {
                Some(ProcessError::DuplicateSubmission(_, _)) => log::debug!("{e}"),
                _ => log::warn!("Skipping line {}: {e}", line_no + 1),
            },
        }
    }

    wtr.flush()?;

    Ok(summary)
}
