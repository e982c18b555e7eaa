//! Shell context, dispatch, and the CLI error types.

use std::io;

use dialoguer::theme::ColorfulTheme;
use strsim::levenshtein;
use thiserror::Error;

use crate::cli::chart::TerminalChart;
use crate::cli::commands;
use crate::cli::io as cli_io;
use crate::cli::output::{self, OutputPreferences};
use crate::cli::registry::{CommandEntry, CommandRegistry};
use crate::config::{Config, ConfigManager};
use crate::core::BudgetTracker;
use crate::currency::format_currency;
use crate::errors::BudgetError;
use crate::storage::{JsonFileBackend, Store};
use crate::utils::paths::PathResolver;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LoopControl {
    Continue,
    Exit,
}

pub type CommandResult = Result<(), CommandError>;

/// Fatal shell errors that end the session.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] BudgetError),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("line editor failed: {0}")]
    Readline(#[from] rustyline::error::ReadlineError),
}

/// Per-command failures, reported without leaving the shell.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("{0}")]
    InvalidArguments(String),
    #[error(transparent)]
    Core(#[from] BudgetError),
    #[error(transparent)]
    Dialoguer(#[from] dialoguer::Error),
    #[error(transparent)]
    Io(#[from] io::Error),
}

pub struct ShellContext {
    pub(crate) mode: CliMode,
    pub(crate) registry: CommandRegistry,
    pub(crate) tracker: BudgetTracker,
    pub(crate) config: Config,
    config_manager: Option<ConfigManager>,
    theme: ColorfulTheme,
    pub(crate) running: bool,
}

impl ShellContext {
    /// Opens the tracker stored under the application directory.
    pub fn new(mode: CliMode) -> Result<Self, CliError> {
        let manager = ConfigManager::new()?;
        let config = manager.load()?;
        let backend = JsonFileBackend::new(Some(PathResolver::base_dir()))?;
        let tracker = BudgetTracker::open(Store::new(Box::new(backend)));
        let mut context = Self::with_tracker(mode, tracker, config);
        context.config_manager = Some(manager);
        Ok(context)
    }

    pub fn with_tracker(mode: CliMode, mut tracker: BudgetTracker, config: Config) -> Self {
        output::set_preferences(OutputPreferences {
            plain: mode == CliMode::Script,
        });

        let mut registry = CommandRegistry::new();
        commands::register_all(&mut registry);

        tracker.subscribe(Box::new(TerminalChart::from_config(&config)));

        Self {
            mode,
            registry,
            tracker,
            config,
            config_manager: None,
            theme: ColorfulTheme::default(),
            running: true,
        }
    }

    /// Swaps in new display preferences, saving them when the shell owns a config file.
    ///
    /// Returns whether the change was written to disk.
    pub(crate) fn update_config(&mut self, config: Config) -> Result<bool, CommandError> {
        let saved = match &self.config_manager {
            Some(manager) => {
                manager.save(&config)?;
                true
            }
            None => false,
        };
        self.tracker.clear_sinks();
        self.tracker
            .subscribe(Box::new(TerminalChart::from_config(&config)));
        self.config = config;
        Ok(saved)
    }

    pub fn tracker(&self) -> &BudgetTracker {
        &self.tracker
    }

    pub(crate) fn prompt(&self) -> String {
        format!(
            "budget [{} txns, {} goals]> ",
            self.tracker.transactions().len(),
            self.tracker.goals().len()
        )
    }

    pub(crate) fn money(&self, amount: f64) -> String {
        format_currency(amount, &self.config.currency_symbol)
    }

    pub(crate) fn command(&self, name: &str) -> Option<&CommandEntry> {
        self.registry.get(name)
    }

    pub(crate) fn command_names(&self) -> Vec<&'static str> {
        self.registry.names().collect()
    }

    pub(crate) fn dispatch(&mut self, command: &str, args: &[&str]) -> Result<LoopControl, CommandError> {
        let Some(handler) = self.command(command).map(|entry| entry.handler) else {
            cli_io::print_warning(format!("Unknown command `{}`.", command));
            self.suggest_command(command);
            return Ok(LoopControl::Continue);
        };
        handler(self, args)?;
        if self.running {
            Ok(LoopControl::Continue)
        } else {
            Ok(LoopControl::Exit)
        }
    }

    pub(crate) fn suggest_command(&self, input: &str) {
        let needle = input.to_lowercase();
        let best = self
            .registry
            .names()
            .map(|name| (levenshtein(name, &needle), name))
            .min_by_key(|(distance, _)| *distance);
        if let Some((distance, name)) = best {
            if distance <= 3 {
                cli_io::print_info(format!("Suggestion: `{}`?", name));
            }
        }
    }

    /// Asks before destructive actions; scripted runs never prompt.
    pub(crate) fn confirm(&self, prompt: &str) -> Result<bool, CommandError> {
        if self.mode == CliMode::Script {
            return Ok(true);
        }
        cli_io::confirm_action(&self.theme, prompt, true)
    }

    pub(crate) fn report_error(&self, err: CommandError) {
        cli_io::print_error(err);
    }
}

/// Converts a 1-based position typed by the user into a collection index.
pub(crate) fn parse_position(raw: &str) -> Result<usize, CommandError> {
    raw.trim()
        .parse::<usize>()
        .ok()
        .and_then(|position| position.checked_sub(1))
        .ok_or_else(|| {
            CommandError::InvalidArguments(format!("`{}` is not a valid position", raw))
        })
}
