//! `docwatch is-cve <id>`.

use anyhow::Result;
use docwatch_core::ids;

pub fn run_is_cve(id: &str) -> Result<()> {
    println!("{}", ids::is_cve(id));
    Ok(())
}
