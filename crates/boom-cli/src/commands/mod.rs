// crates/boom-cli/src/commands/mod.rs - Command Handler
//
// boom has a single entry point: the positional words go to the session,
// which resolves them against the store and applies one operation. This
// module adapts the session's errors for the terminal.

use anyhow::Result;
use tracing::debug;

use crate::cli::Cli;
use crate::context::Context;

/// Run one invocation
///
/// Lookup misses ("Unknown list", "Couldn't find key") are shown as-is; every
/// other failure is wrapped with the words that triggered it.
pub fn handle(ctx: &mut Context, cli: &Cli) -> Result<()> {
    let tokens = cli.tokens();
    debug!(storage = %ctx.config().storage.backend, ?tokens, "running");

    let Context {
        session, effects, ..
    } = ctx;

    match session.run(&tokens, effects) {
        Ok(_) => Ok(()),
        Err(e) if e.is_lookup_miss() => Err(e.into()),
        Err(e) => Err(anyhow::Error::new(e).context(format!(
            "boom {} failed",
            [&tokens.command, &tokens.major, &tokens.minor]
                .iter()
                .filter(|word| !word.is_empty())
                .map(|word| word.as_str())
                .collect::<Vec<_>>()
                .join(" ")
        ))),
    }
}
