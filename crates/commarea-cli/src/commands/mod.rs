//! CLI command implementations.

pub mod decode;
pub mod encode;
pub mod map;

use std::path::Path;

use commarea::{CodePage, CodePageRegistry, CommArea, GatewayConfig, RecordLayout};
use miette::{IntoDiagnostic, Result, WrapErr};

use crate::BufferArgs;

/// Read and validate a layout file.
pub fn load_layout(path: &Path) -> Result<RecordLayout> {
    let source = std::fs::read_to_string(path)
        .into_diagnostic()
        .wrap_err_with(|| format!("Failed to read layout file: {}", path.display()))?;

    let layout = RecordLayout::from_toml_str(&source)
        .into_diagnostic()
        .wrap_err_with(|| format!("Invalid layout file: {}", path.display()))?;

    tracing::debug!(layout = %layout.name(), bytes = layout.byte_len(), "Layout loaded");
    Ok(layout)
}

/// Code page from `--code-page`, else from `--config`, else CP1047.
pub fn resolve_code_page(args: &BufferArgs) -> Result<&'static CodePage> {
    if let Some(name) = &args.code_page {
        return CodePageRegistry::by_name(name).into_diagnostic();
    }
    if let Some(path) = &args.config {
        let config = GatewayConfig::from_file(path).into_diagnostic()?;
        return config.code_page().into_diagnostic();
    }
    Ok(CommArea::new().code_page())
}
