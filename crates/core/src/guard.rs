use serde::Serialize;

use crate::config::GuardConfig;
use crate::host::{Notifier, SelectionSource, SubmitEvent};
use crate::snapshot::SelectionSnapshot;

/// Result of one submission attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "lowercase")]
pub enum Outcome {
    /// The distinct count matched; the default submit action goes ahead.
    Allow { distinct: usize, required: u32 },
    /// The distinct count did not match; the user was told `message`.
    Block {
        distinct: usize,
        required: u32,
        message: String,
    },
}

impl Outcome {
    pub fn is_allowed(&self) -> bool {
        matches!(self, Outcome::Allow { .. })
    }

    pub fn distinct(&self) -> usize {
        match self {
            Outcome::Allow { distinct, .. } | Outcome::Block { distinct, .. } => *distinct,
        }
    }

    pub fn required(&self) -> u32 {
        match self {
            Outcome::Allow { required, .. } | Outcome::Block { required, .. } => *required,
        }
    }

    pub fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }
}

/// Gates a form submission on the number of distinct selected values.
///
/// The guard owns its configuration, the source it reads inputs from, and
/// the notifier it reports blocks to. It keeps no state between attempts.
pub struct SubmitGuard<S, N> {
    config: GuardConfig,
    source: S,
    notifier: N,
}

impl<S, N> SubmitGuard<S, N>
where
    S: SelectionSource,
    N: Notifier,
{
    pub fn new(config: GuardConfig, source: S, notifier: N) -> Self {
        SubmitGuard {
            config,
            source,
            notifier,
        }
    }

    pub fn config(&self) -> &GuardConfig {
        &self.config
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn into_parts(self) -> (GuardConfig, S, N) {
        (self.config, self.source, self.notifier)
    }

    /// Decide without side effects: no notification, no cancellation.
    pub fn evaluate(&self) -> Outcome {
        let inputs = self.source.read_inputs(self.config.category());
        let snapshot = SelectionSnapshot::capture(&inputs);
        decide(&self.config, &snapshot)
    }

    /// Run one submission attempt.
    ///
    /// On a mismatch the user is notified exactly once and the event's
    /// default action is cancelled. On a match neither happens.
    pub fn handle_submit<E: SubmitEvent + ?Sized>(&mut self, event: &mut E) -> Outcome {
        let outcome = self.evaluate();
        if let Outcome::Block { message, .. } = &outcome {
            self.notifier.notify(message);
            event.prevent_default();
        }
        outcome
    }
}

/// Compare a snapshot against the configured count using exact equality.
pub fn decide(config: &GuardConfig, snapshot: &SelectionSnapshot) -> Outcome {
    let distinct = snapshot.distinct_count();
    let required = config.required_count().get();

    if distinct as u64 == u64::from(required) {
        tracing::debug!(distinct, required, category = config.category(), "submission allowed");
        Outcome::Allow { distinct, required }
    } else {
        tracing::debug!(distinct, required, category = config.category(), "submission blocked");
        Outcome::Block {
            distinct,
            required,
            message: config.notification(),
        }
    }
}
