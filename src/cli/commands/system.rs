use crate::cli::{input::LineSource, shell_context::ShellContext};

use super::{CommandResult, LoopControl};

/// Ends the loop; the shell saves once on the way out.
pub fn exit(_context: &mut ShellContext, _input: &mut dyn LineSource) -> CommandResult {
    Ok(LoopControl::Exit)
}
