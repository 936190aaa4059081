//! Calc command implementation.

use crate::calc::{evaluate, menu};
use crate::cli::args::CalcArgs;
use crate::error::Result;
use crate::render;
use crate::storage::ResolvedConfig;
use crate::util::should_use_color;

/// Execute the calc command. Without an operation the menu is printed.
pub fn execute(args: &CalcArgs, config: &ResolvedConfig) -> Result<()> {
    let Some(operation) = args.operation.as_deref() else {
        print!("{}", menu());
        return Ok(());
    };

    let evaluation = evaluate(operation, &args.operands)?;
    let output = render::render_evaluation(
        &evaluation,
        config.format,
        config.pretty,
        !should_use_color(config.no_color),
    )?;
    print!("{output}");
    Ok(())
}
