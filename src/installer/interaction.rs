use std::cell::RefCell;

use clap::ValueEnum;
use dialoguer::{theme::ColorfulTheme, Confirm, Select};

use crate::lib::errors::InstallError;

/// Shell whose profile receives the `PATH` export on macOS.
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum Shell {
    Zsh,
    Bash,
}

impl Shell {
    /// Profile file relative to the home directory.
    pub const fn profile_file(&self) -> &'static str {
        match self {
            Shell::Zsh => ".zshrc",
            Shell::Bash => ".bash_profile",
        }
    }
}

/// Questions the installer may need to ask the person running it.
pub trait UserInteraction {
    fn confirm(&self, prompt: &str) -> Result<bool, InstallError>;
    fn choose_shell(&self) -> Result<Shell, InstallError>;
}

/// Prompts on the controlling terminal.
pub struct TerminalInteraction;

impl UserInteraction for TerminalInteraction {
    fn confirm(&self, prompt: &str) -> Result<bool, InstallError> {
        Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(prompt)
            .default(false)
            .interact()
            .map_err(|err| InstallError::Interaction {
                message: err.to_string(),
            })
    }

    fn choose_shell(&self) -> Result<Shell, InstallError> {
        let choice = Select::with_theme(&ColorfulTheme::default())
            .with_prompt("Please choose your preferred shell")
            .items(&["zsh", "bash"])
            .default(0)
            .interact()
            .map_err(|err| InstallError::Interaction {
                message: err.to_string(),
            })?;
        match choice {
            0 => Ok(Shell::Zsh),
            1 => Ok(Shell::Bash),
            _ => Err(InstallError::InvalidChoice),
        }
    }
}

/// Answers from preset values and records every prompt it was shown.
#[derive(Debug, Default)]
pub struct ScriptedInteraction {
    confirm: Option<bool>,
    shell: Option<Shell>,
    prompts: RefCell<Vec<String>>,
}

impl ScriptedInteraction {
    pub fn new(confirm: Option<bool>, shell: Option<Shell>) -> Self {
        Self {
            confirm,
            shell,
            prompts: RefCell::new(Vec::new()),
        }
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.borrow().clone()
    }
}

impl UserInteraction for ScriptedInteraction {
    fn confirm(&self, prompt: &str) -> Result<bool, InstallError> {
        self.prompts.borrow_mut().push(prompt.to_string());
        self.confirm.ok_or_else(|| InstallError::Interaction {
            message: format!("no answer scripted for `{prompt}`"),
        })
    }

    fn choose_shell(&self) -> Result<Shell, InstallError> {
        self.prompts.borrow_mut().push("shell".to_string());
        self.shell.ok_or(InstallError::InvalidChoice)
    }
}
