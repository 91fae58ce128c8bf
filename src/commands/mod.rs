//! Command dispatch and handlers.

pub mod handle;
pub mod resume;

use crate::cli::Command;
use crate::config::Config;
use crate::context::ServiceContext;

/// Dispatch a parsed command to its handler.
///
/// # Errors
///
/// Returns an error string if the selected command handler fails. The
/// detailed failure is reported through the editor host's notification
/// surface before this returns.
pub fn dispatch(command: &Command) -> Result<(), String> {
    let config = Config::from_env();
    let ctx = ServiceContext::live(&config);
    dispatch_with_context(command, &ctx)
}

/// Dispatch a command with the given service context.
///
/// Every handler failure is caught here and turned into one user-visible
/// notification; nothing propagates as a panic.
fn dispatch_with_context(command: &Command, ctx: &ServiceContext) -> Result<(), String> {
    let result = match command {
        Command::Handle { uri } => handle::run(ctx, uri),
        Command::Resume => resume::run(ctx),
    };

    result.map_err(|err| {
        let message = format!("Deep link error: {err}");
        ctx.editor.notify_error(&message);
        "deep link handling failed".to_string()
    })
}
