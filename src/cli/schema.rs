//! `schema` command: print the page-builder schema.

use anyhow::Result;
use std::io::{Write, stdout};

use crate::hero::hero_schema;

pub fn print_schema(compact: bool) -> Result<()> {
    let json = hero_schema().to_json(!compact)?;
    let mut stdout = stdout().lock();
    writeln!(stdout, "{json}")?;
    stdout.flush()?;
    Ok(())
}
