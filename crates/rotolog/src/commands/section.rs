//! Write the section separator block

use anyhow::Result;
use rotolog_engine::LogWriter;

pub fn execute(writer: &mut LogWriter) -> Result<()> {
    writer.write_break()?;
    Ok(())
}
