use anyhow::Result;
use std::io::Write;

use crate::config::Config;

/// Print an example configuration file
pub fn execute_config_example<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out, "{}", Config::example().trim())?;
    Ok(())
}
