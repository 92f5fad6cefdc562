//! Decode command - COMMAREA buffer to JSON record.

use std::path::PathBuf;

use commarea::CommArea;
use miette::{IntoDiagnostic, Result, WrapErr};

use super::{load_layout, resolve_code_page};
use crate::json::record_to_json;
use crate::BufferArgs;

/// Run the decode command.
pub fn run(layout: PathBuf, buffer_file: PathBuf, args: BufferArgs) -> Result<()> {
    let layout = load_layout(&layout)?;
    let codec = CommArea::with_code_page(resolve_code_page(&args)?);

    let raw = std::fs::read(&buffer_file)
        .into_diagnostic()
        .wrap_err_with(|| format!("Failed to read buffer file: {}", buffer_file.display()))?;
    let buffer = if args.hex {
        let text: String = String::from_utf8_lossy(&raw)
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect();
        hex::decode(&text)
            .into_diagnostic()
            .wrap_err_with(|| format!("Invalid hex in {}", buffer_file.display()))?
    } else {
        raw
    };

    let mut record = layout.new_record();
    let consumed = codec
        .decode(&layout, &buffer, &mut record)
        .into_diagnostic()
        .wrap_err_with(|| format!("Failed to decode {}", layout.name()))?;

    let json = serde_json::to_string_pretty(&record_to_json(&layout, &record)).into_diagnostic()?;
    println!("{json}");

    if consumed < buffer.len() {
        eprintln!("{} trailing bytes ignored", buffer.len() - consumed);
    }
    Ok(())
}
