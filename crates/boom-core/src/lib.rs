//! # boom-core
//!
//! Store, persistence and command resolution for `boom`, a command-line
//! manager for named lists of key/value items.
//!
//! ## Pieces
//!
//! - [`store`]: lists of items, held in memory for one invocation
//! - [`backend`]: the fetch/save port, with JSON and in-memory backends
//! - [`command`]: turns `[command] [major] [minor]` into one [`Command`]
//! - [`ops`]: applies a command and reports whether the store changed
//! - [`session`]: fetch, resolve, apply, save once
//! - [`effects`]: printing, prompting, clipboard, browser and editor
//! - [`config`]: config file and environment loading
//!
//! ```no_run
//! use boom_core::{JsonBackend, RecordedEffects, Session, Tokens};
//!
//! let mut session = Session::new(JsonBackend::new("/tmp/boom.json"));
//! let mut fx = RecordedEffects::new();
//! session.run(&Tokens::new("urls", "gh", "https://github.com"), &mut fx)?;
//! # Ok::<(), boom_core::BoomError>(())
//! ```

pub mod backend;
pub mod command;
pub mod config;
pub mod effects;
pub mod error;
pub mod ops;
pub mod session;
pub mod store;

pub use backend::{Backend, JsonBackend, MemoryBackend};
pub use command::{Command, Tokens};
pub use config::{BoomConfig, ConfigError, ConfigManager};
pub use effects::{Effects, RecordedEffects};
pub use error::{BoomError, Result};
pub use ops::Outcome;
pub use session::Session;
pub use store::{List, Store};

/// Version reported by `boom version`
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
