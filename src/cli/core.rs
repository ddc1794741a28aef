//! Command dispatch, error reporting, and helpers shared by command handlers.

use std::sync::Arc;

use chrono::NaiveDate;
use dialoguer::{theme::ColorfulTheme, Confirm};
use strsim::levenshtein;
use thiserror::Error;

use crate::{
    config::ConfigManager,
    core::WalletManager,
    currency::{format_amount, format_date},
    errors::WalletError,
    i18n::{LanguageContext, TranslationKey},
    schedule::{Clock, SystemClock},
    session::{take_first_visit, DecorativeGate},
    storage::{JsonFileStore, KeyValueStore},
};

pub use crate::errors::CliError;

use super::commands;
use super::output;
use super::registry::{CommandEntry, CommandRegistry};
pub use super::shell_context::{CliMode, ShellContext};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LoopControl {
    Continue,
    Exit,
}

pub type CommandResult = Result<(), CommandError>;

#[derive(Debug, Error)]
pub enum CommandError {
    #[error("login required")]
    GateLocked,
    #[error("{0}")]
    InvalidArguments(String),
    #[error("{0}")]
    Message(String),
    #[error(transparent)]
    Core(#[from] WalletError),
    #[error(transparent)]
    Dialoguer(#[from] dialoguer::Error),
    #[error("exit requested")]
    ExitRequested,
}

impl ShellContext {
    /// Opens the context rooted at the default application directory.
    pub fn new(mode: CliMode) -> Result<Self, CliError> {
        let config_manager = ConfigManager::new()?;
        Self::open(mode, config_manager, Arc::new(SystemClock))
    }

    pub fn open(
        mode: CliMode,
        config_manager: ConfigManager,
        clock: Arc<dyn Clock>,
    ) -> Result<Self, CliError> {
        let mut registry = CommandRegistry::new();
        commands::register_all(&mut registry);

        let config = config_manager.load()?;
        let store: Arc<dyn KeyValueStore> =
            Arc::new(JsonFileStore::new(config_manager.store_dir(&config))?);
        let wallet = WalletManager::open(Arc::clone(&store), Arc::clone(&clock));
        let language = LanguageContext::load(Arc::clone(&store));
        let gate = DecorativeGate::load(config.gate.clone(), Arc::clone(&store));

        Ok(ShellContext {
            mode,
            registry,
            wallet,
            language,
            gate,
            store,
            clock,
            theme: ColorfulTheme::default(),
            config_manager,
            config,
            last_command: None,
            running: true,
        })
    }

    pub(crate) fn prompt(&self) -> String {
        let marker = if self.gate.is_unlocked() { "*" } else { "" };
        format!("wallet[{}]{marker}> ", self.language.language())
    }

    pub(crate) fn command_names(&self) -> Vec<&'static str> {
        self.registry.names().collect()
    }

    pub(crate) fn command(&self, name: &str) -> Option<&CommandEntry> {
        self.registry.get(name)
    }

    pub(crate) fn t(&self, key: TranslationKey) -> &'static str {
        self.language.t(key)
    }

    pub(crate) fn money(&self, value: f64) -> String {
        format_amount(self.language.language(), value, &self.config.currency_label)
    }

    pub(crate) fn date(&self, date: NaiveDate) -> String {
        format_date(self.language.language(), date)
    }

    /// Prints the welcome banner the first time the store is used.
    pub(crate) fn greet_first_visit(&self) -> Result<(), CliError> {
        if take_first_visit(self.store.as_ref())? {
            output::section(self.t(TranslationKey::HomeWelcome));
            output::info(self.t(TranslationKey::HomeTitle));
            output::info(self.t(TranslationKey::HomeSubtitle));
            output::info("Type `help` to see available commands.");
        }
        Ok(())
    }

    pub(crate) fn dispatch(
        &mut self,
        command: &str,
        raw: &str,
        args: &[&str],
    ) -> Result<LoopControl, CommandError> {
        let Some(entry) = self.registry.get(command) else {
            self.suggest_command(raw);
            return Ok(LoopControl::Continue);
        };
        if entry.gated && !self.gate.is_unlocked() {
            return Err(CommandError::GateLocked);
        }
        let handler = entry.handler;
        match handler(self, args) {
            Ok(()) => Ok(LoopControl::Continue),
            Err(CommandError::ExitRequested) => Ok(LoopControl::Exit),
            Err(err) => Err(err),
        }
    }

    pub(crate) fn suggest_command(&self, input: &str) {
        output::warning(format!(
            "Unknown command `{input}`. Type `help` to see available commands."
        ));

        let best = self
            .registry
            .names()
            .map(|name| (levenshtein(name, &input.to_lowercase()), name))
            .min_by_key(|(distance, _)| *distance);
        if let Some((distance, name)) = best {
            if distance <= 3 {
                output::info(format!("Suggestion: `{name}`?"));
            }
        }
    }

    pub(crate) fn confirm(&self, prompt: &str) -> Result<bool, CommandError> {
        if self.mode == CliMode::Script {
            return Ok(true);
        }
        Ok(Confirm::with_theme(&self.theme)
            .with_prompt(prompt)
            .default(false)
            .interact()?)
    }

    pub(crate) fn confirm_exit(&self) -> Result<bool, CliError> {
        if self.mode == CliMode::Script {
            return Ok(true);
        }
        Ok(Confirm::with_theme(&self.theme)
            .with_prompt("Exit shell?")
            .default(true)
            .interact()?)
    }

    pub(crate) fn report_error(&self, err: CommandError) {
        match err {
            CommandError::ExitRequested => {}
            CommandError::GateLocked => {
                output::error(self.t(TranslationKey::LoginRequired));
                output::info("Use `login <username> [password]` first.");
            }
            CommandError::InvalidArguments(message) => {
                output::error(message);
                output::info("Use `help <command>` for usage details.");
            }
            other => {
                tracing::debug!(error = %other, "command failed");
                output::error(other.to_string());
            }
        }
    }

    #[cfg(test)]
    pub(crate) fn process_line(&mut self, line: &str) -> Result<LoopControl, CommandError> {
        let tokens = crate::cli::shell::parse_command_line(line)
            .map_err(|err| CommandError::InvalidArguments(err.to_string()))?;
        let Some((raw, rest)) = tokens.split_first() else {
            return Ok(LoopControl::Continue);
        };
        let args: Vec<&str> = rest.iter().map(String::as_str).collect();
        self.dispatch(&raw.to_lowercase(), raw, &args)
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use crate::schedule::FixedClock;
    use tempfile::TempDir;

    /// Script-mode context rooted in a fresh temporary directory.
    pub(crate) fn context(today: NaiveDate) -> (TempDir, ShellContext) {
        let temp = TempDir::new().unwrap();
        let manager = ConfigManager::with_base_dir(temp.path().to_path_buf()).unwrap();
        let context =
            ShellContext::open(CliMode::Script, manager, Arc::new(FixedClock::new(today))).unwrap();
        (temp, context)
    }

    pub(crate) fn unlocked(today: NaiveDate) -> (TempDir, ShellContext) {
        let (temp, mut context) = context(today);
        assert!(context.gate.login("erdener", "Bee2508").unwrap());
        (temp, context)
    }
}
