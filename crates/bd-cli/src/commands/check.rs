//! Check command: validate a sprint data file.

use std::io::Write;
use std::path::Path;

use anyhow::Result;

use crate::input::Sprint;

/// Runs the check command.
pub fn run<W: Write>(writer: &mut W, input: &Path) -> Result<()> {
    let sprint = Sprint::load(input)?;

    writeln!(writer, "Sprint: {}", sprint.name)?;
    writeln!(writer, "Days: {}", sprint.days.len())?;
    writeln!(writer, "Items: {}", sprint.items.len())?;
    writeln!(writer, "Journal entries: {}", sprint.journal_entries())?;

    if !sprint.days.is_sorted() {
        writeln!(writer, "Warning: day range is not sorted ascending.")?;
    }

    Ok(())
}
