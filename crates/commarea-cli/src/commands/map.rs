//! Map command - prints the byte map of a layout.

use std::path::PathBuf;

use miette::Result;

use super::load_layout;

/// Run the map command.
pub fn run(layout: PathBuf) -> Result<()> {
    let layout = load_layout(&layout)?;

    println!("LAYOUT: {} ({} bytes)", layout.name(), layout.byte_len());
    println!("{:>6} {:>6}  {:<32} PICTURE", "OFFSET", "LENGTH", "FIELD");
    for entry in layout.field_map() {
        println!(
            "{:>6} {:>6}  {:<32} {}",
            entry.offset, entry.len, entry.path, entry.picture
        );
    }
    Ok(())
}
