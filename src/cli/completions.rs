//! Shell completion generation.

use clap::CommandFactory;
use clap_complete::{generate, Shell};
use std::io::{self, Write};

use crate::cli::args::Cli;
use crate::APP_NAME;

/// Write the completion script for `shell` into `out`.
pub fn write(shell: Shell, out: &mut dyn Write) {
    generate(shell, &mut Cli::command(), APP_NAME, out);
}

/// Print completion script for the requested shell to stdout.
pub fn print(shell: Shell) {
    write(shell, &mut io::stdout());
}
