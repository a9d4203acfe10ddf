use std::io::{Read, Write};

use shellkit_ops::ops_blocksort::sort_blocks;
use shellkit_util::errors::{ToolError, ToolResult};

use crate::cli::SomArgs;

pub fn exec(_args: SomArgs) -> ToolResult<()> {
    let mut input = String::new();
    std::io::stdin()
        .read_to_string(&mut input)
        .map_err(ToolError::Io)?;

    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(sort_blocks(&input).as_bytes())
        .map_err(ToolError::Io)?;
    stdout.flush().map_err(ToolError::Io)?;
    Ok(())
}
