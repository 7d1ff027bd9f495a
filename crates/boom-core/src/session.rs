// crates/boom-core/src/session.rs - One invocation: fetch, resolve, apply, save
//
// The session owns the backend and is the only place that saves. A store is
// fetched once, the tokens are resolved against that snapshot, exactly one
// operation runs, and the store is written back once if that operation says
// it changed something.

use tracing::{debug, info};

use crate::backend::Backend;
use crate::command::{Command, Tokens};
use crate::effects::Effects;
use crate::error::Result;
use crate::ops::{self, Outcome};

pub struct Session<B: Backend> {
    backend: B,
}

impl<B: Backend> Session<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Run one command end to end
    ///
    /// A PersistenceRead error from fetch aborts before anything is resolved.
    /// If the operation fails, nothing is saved.
    pub fn run(&mut self, tokens: &Tokens, fx: &mut dyn Effects) -> Result<Outcome> {
        let mut store = self.backend.fetch()?;
        let command = Command::resolve(tokens, &store);

        let outcome = ops::apply(&command, &mut store, fx, &self.backend)?;
        debug_assert!(
            !outcome.mutated || command.is_mutating(),
            "{} reported a change",
            command
        );

        if outcome.mutated {
            self.backend.save(&store)?;
            info!(%command, "store saved");
        } else {
            debug!(%command, "nothing changed, skipping save");
        }
        Ok(outcome)
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }
}
