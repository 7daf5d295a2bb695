//! Shell completion generation.

use clap::CommandFactory;
use clap_complete::{Generator, generate, shells};

use crate::{
    cli::{Cli, CompletionsArgs, Shell},
    error::CliResult,
};

const BIN_NAME: &str = "trellis";

pub fn execute(args: CompletionsArgs) -> CliResult<()> {
    let mut out = std::io::stdout();
    match args.shell {
        Shell::Bash => write(shells::Bash, &mut out),
        Shell::Zsh => write(shells::Zsh, &mut out),
        Shell::Fish => write(shells::Fish, &mut out),
        Shell::PowerShell => write(shells::PowerShell, &mut out),
        Shell::Elvish => write(shells::Elvish, &mut out),
    }
    Ok(())
}

fn write(generator: impl Generator, out: &mut dyn std::io::Write) {
    generate(generator, &mut Cli::command(), BIN_NAME, out);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bash_script_mentions_subcommands() {
        let mut buf = Vec::new();
        write(shells::Bash, &mut buf);
        let script = String::from_utf8(buf).unwrap();
        assert!(script.contains("trellis"));
        assert!(script.contains("completions"));
    }
}
