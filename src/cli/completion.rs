//
//  gqlx
//  cli/completion.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Shell completion commands
//!
//! ```bash
//! gqlx completion bash > /etc/bash_completion.d/gqlx
//! gqlx completion zsh > "${fpath[1]}/_gqlx"
//! ```

use std::io::Write;

use anyhow::Result;
use clap::{Args, CommandFactory, ValueEnum};
use clap_complete::{generate, Shell};

use super::Cli;
use crate::APP_NAME;

/// Generate shell completion scripts
#[derive(Args, Debug)]
pub struct CompletionCommand {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: CompletionShell,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompletionShell {
    Bash,
    Zsh,
    Fish,
    Powershell,
}

impl From<CompletionShell> for Shell {
    fn from(shell: CompletionShell) -> Self {
        match shell {
            CompletionShell::Bash => Shell::Bash,
            CompletionShell::Zsh => Shell::Zsh,
            CompletionShell::Fish => Shell::Fish,
            CompletionShell::Powershell => Shell::PowerShell,
        }
    }
}

impl CompletionCommand {
    pub fn run(&self) -> Result<()> {
        self.write_to(&mut std::io::stdout())
    }

    fn write_to<W: Write>(&self, out: &mut W) -> Result<()> {
        let mut cmd = Cli::command();
        generate(Shell::from(self.shell), &mut cmd, APP_NAME, out);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bash_completion_mentions_subcommands() {
        let command = CompletionCommand {
            shell: CompletionShell::Bash,
        };
        let mut buf = Vec::new();
        command.write_to(&mut buf).unwrap();

        let script = String::from_utf8(buf).unwrap();
        assert!(script.contains("gqlx"));
        assert!(script.contains("query"));
    }
}
