//! Encode command - JSON record to COMMAREA buffer.

use std::io::Write;
use std::path::PathBuf;

use commarea::CommArea;
use miette::{IntoDiagnostic, Result, WrapErr};

use super::{load_layout, resolve_code_page};
use crate::json::record_from_json;
use crate::BufferArgs;

/// Run the encode command.
pub fn run(
    layout: PathBuf,
    record: PathBuf,
    output: Option<PathBuf>,
    args: BufferArgs,
) -> Result<()> {
    let layout = load_layout(&layout)?;
    let codec = CommArea::with_code_page(resolve_code_page(&args)?);

    let source = std::fs::read_to_string(&record)
        .into_diagnostic()
        .wrap_err_with(|| format!("Failed to read record file: {}", record.display()))?;
    let value: serde_json::Value = serde_json::from_str(&source)
        .into_diagnostic()
        .wrap_err_with(|| format!("Invalid JSON in {}", record.display()))?;

    let record = record_from_json(&layout, &value)?;
    let bytes = codec
        .encode(&layout, &record)
        .into_diagnostic()
        .wrap_err_with(|| format!("Failed to encode {}", layout.name()))?;

    let bytes = if args.hex {
        let mut text = hex::encode_upper(&bytes).into_bytes();
        text.push(b'\n');
        text
    } else {
        bytes
    };

    match output {
        Some(path) => {
            std::fs::write(&path, &bytes)
                .into_diagnostic()
                .wrap_err_with(|| format!("Failed to write {}", path.display()))?;
            tracing::info!(path = %path.display(), bytes = bytes.len(), "Buffer written");
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(&bytes).into_diagnostic()?;
            stdout.flush().into_diagnostic()?;
        }
    }
    Ok(())
}
