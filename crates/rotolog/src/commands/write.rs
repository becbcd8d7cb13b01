//! Log a single message

use anyhow::Result;
use rotolog_engine::LogWriter;

use crate::cli::WriteArgs;

pub fn execute(writer: &mut LogWriter, args: WriteArgs) -> Result<()> {
    writer.log_at(args.level, &args.message.join(" "))?;
    Ok(())
}
