//! Session-scoped flags: the decorative login gate and the first-visit banner.
//!
//! The gate compares two configured strings and remembers the outcome in the
//! store. It keeps casual eyes off the finance commands and nothing more; it
//! is not an authentication mechanism and must not guard real data.

use std::sync::Arc;

use crate::config::GateConfig;
use crate::errors::Result;
use crate::storage::{load_flag, save_flag, KeyValueStore, SESSION_KEY, WELCOME_KEY};

pub struct DecorativeGate {
    credentials: GateConfig,
    store: Arc<dyn KeyValueStore>,
    unlocked: bool,
}

impl DecorativeGate {
    pub fn load(credentials: GateConfig, store: Arc<dyn KeyValueStore>) -> Self {
        let unlocked = load_flag(store.as_ref(), SESSION_KEY).unwrap_or_else(|err| {
            tracing::error!(error = %err, "failed to read session flag");
            false
        });
        Self {
            credentials,
            store,
            unlocked,
        }
    }

    pub fn is_unlocked(&self) -> bool {
        self.unlocked
    }

    /// Returns whether the pair matched; a match is remembered until logout.
    pub fn login(&mut self, username: &str, password: &str) -> Result<bool> {
        let matched = username == self.credentials.username && password == self.credentials.password;
        if matched {
            save_flag(self.store.as_ref(), SESSION_KEY, true)?;
            self.unlocked = true;
            tracing::info!("gate unlocked");
        } else {
            tracing::warn!("gate login rejected");
        }
        Ok(matched)
    }

    pub fn logout(&mut self) -> Result<()> {
        save_flag(self.store.as_ref(), SESSION_KEY, false)?;
        self.unlocked = false;
        tracing::info!("gate locked");
        Ok(())
    }
}

/// Returns `true` exactly once per store: on the first visit, after which the
/// flag is recorded.
pub fn take_first_visit(store: &dyn KeyValueStore) -> Result<bool> {
    if load_flag(store, WELCOME_KEY)? {
        return Ok(false);
    }
    save_flag(store, WELCOME_KEY, true)?;
    Ok(true)
}
