//! `show` and `print`: work with saved records.

use std::path::Path;

use anyhow::Result;

use tutorforge_records::{display_loaded_text, load, print_record, SystemPrintHandler};

use crate::context::AppContext;
use crate::terminal_output::note_success;

pub fn run_show(path: &Path) -> Result<()> {
    let record = load(path)?;
    println!("{}", display_loaded_text(&record));
    Ok(())
}

pub fn run_print(ctx: &AppContext, path: &Path) -> Result<()> {
    let record = load(path)?;
    let printed = print_record(&record, &ctx.print_dir(), &SystemPrintHandler)?;
    note_success(&format!("Sent {} to the printer", printed.display()));
    Ok(())
}
