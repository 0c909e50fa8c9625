use std::io::{self, IsTerminal};

use tracing::debug;

use crate::cli::{
    commands::{CommandResult, LoopControl},
    input::{EditorInput, LineSource, ScriptInput},
    menus::main_menu,
    output,
    shell_context::{CliMode, ShellContext},
};
use crate::errors::CliError;

/// Entry point for the binary: picks the input mode from stdin and runs the
/// menu loop against the ledger in the working directory.
pub fn run_cli() -> Result<(), CliError> {
    let mode = if io::stdin().is_terminal() {
        CliMode::Interactive
    } else {
        CliMode::Script
    };

    let mut context = ShellContext::new(mode)?;

    match mode {
        CliMode::Interactive => {
            let mut input = EditorInput::new()?;
            run_shell(&mut context, &mut input)
        }
        CliMode::Script => {
            let stdin = io::stdin();
            let mut input = ScriptInput::new(stdin.lock());
            run_shell(&mut context, &mut input)
        }
    }
}

/// Runs the menu loop until exit or end of input, then saves exactly once.
pub fn run_shell(context: &mut ShellContext, input: &mut dyn LineSource) -> Result<(), CliError> {
    let outcome = run_loop(context, input);
    context.save()?;
    outcome
}

fn run_loop(context: &mut ShellContext, input: &mut dyn LineSource) -> Result<(), CliError> {
    loop {
        main_menu::show();
        let Some(line) = input.read_line(main_menu::MENU_PROMPT)? else {
            output::info("End of input, exiting.");
            return Ok(());
        };

        let choice = line.trim();
        if !choice.is_empty() {
            input.remember(choice);
        }

        match handle_line(context, input, choice)? {
            LoopControl::Continue => {}
            LoopControl::Exit => return Ok(()),
        }
    }
}

fn handle_line(
    context: &mut ShellContext,
    input: &mut dyn LineSource,
    choice: &str,
) -> CommandResult {
    let Some(command) = main_menu::resolve(choice) else {
        debug!(choice, "unrecognized menu selection");
        output::error("Invalid choice. Please try again.");
        if let Some(hint) = main_menu::suggest(choice) {
            output::info(format!("Did you mean {}. {}?", hint.key, hint.label));
        }
        return Ok(LoopControl::Continue);
    };

    debug!(key = command.key, label = command.label, "dispatching menu command");
    (command.handler)(context, input)
}
