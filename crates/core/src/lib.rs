//! submit-guard-core: gate a card form's submission on the number of
//! distinct selected values.
//!
//! The guard is host-independent. It reads inputs through a
//! [`SelectionSource`], reports blocks through a [`Notifier`], and cancels
//! through a [`SubmitEvent`]. A browser host wires these to the DOM; tests
//! and the CLI use recorded inputs.
//!
//! # Public API
//!
//! - [`GuardConfig`] -- validated configuration ([`ConfigError`] on failure)
//! - [`SubmitGuard`] -- runs one check per submission attempt
//! - [`Outcome`] -- `Allow` or `Block`
//! - [`SelectionSnapshot`] -- distinct checked values at one attempt

pub mod config;
pub mod error;
pub mod guard;
pub mod host;
pub mod input;
pub mod snapshot;

pub use config::{GuardConfig, RequiredCount, DEFAULT_CATEGORY, DEFAULT_MESSAGE};
pub use error::{ConfigError, InputsError};
pub use guard::{decide, Outcome, SubmitGuard};
pub use host::{
    CollectingNotifier, FnSource, Notifier, RecordedSubmit, SelectionSource, SubmitEvent,
};
pub use input::SelectableInput;
pub use snapshot::SelectionSnapshot;
