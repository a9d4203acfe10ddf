use shellkit_ops::ops_randid::{id_length, random_id, terminal_columns};
use shellkit_util::errors::ToolResult;

use crate::cli::RandIdArgs;

pub fn exec(args: RandIdArgs) -> ToolResult<()> {
    let columns = terminal_columns(args.columns.as_deref());
    let id = random_id(&mut rand::thread_rng(), id_length(columns));
    println!("{id}");
    Ok(())
}
