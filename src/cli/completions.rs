//! Completions command implementation

use crate::cli::{Cli, CompletionsArgs};
use clap::CommandFactory;
use clap_complete::generate;
use std::io::Write;

/// Handle `hcdash completions` command
pub fn handle_completions<W: Write>(args: &CompletionsArgs, out: &mut W) {
    let mut cmd = Cli::command();
    let bin_name = cmd.get_name().to_string();
    generate(args.shell, &mut cmd, bin_name, out);
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap_complete::Shell;

    fn completions_for(shell: Shell) -> String {
        let mut out = Vec::new();
        handle_completions(&CompletionsArgs { shell }, &mut out);
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_completions_bash_lists_subcommands() {
        let script = completions_for(Shell::Bash);
        assert!(script.contains("hcdash"));
        assert!(script.contains("preview"));
        assert!(script.contains("reload"));
    }

    #[test]
    fn test_completions_zsh() {
        let script = completions_for(Shell::Zsh);
        assert!(script.contains("#compdef hcdash"));
    }
}
