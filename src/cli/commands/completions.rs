//! Shell completion generation.

use clap::CommandFactory;
use clap_complete::Shell;

use crate::cli::args::Cli;
use crate::error::LinkTaskerError;

/// Generate a completion script for the given shell.
pub fn completions(shell: Shell) -> Result<String, LinkTaskerError> {
    let mut cmd = Cli::command();
    let mut buf: Vec<u8> = Vec::new();
    clap_complete::generate(shell, &mut cmd, "ltask", &mut buf);
    String::from_utf8(buf).map_err(|e| {
        LinkTaskerError::Config(format!("completion script was not valid UTF-8: {e}"))
    })
}
