use crate::Cli;
use anyhow::{bail, Result};
use clap::CommandFactory;
use clap_complete::{
    generate,
    shells::{Bash, Fish, Zsh},
};
use std::io;

pub fn run(shell: &str) -> Result<()> {
    let mut cmd = Cli::command();
    let mut out = io::stdout();
    match shell {
        "bash" => generate(Bash, &mut cmd, "mi", &mut out),
        "zsh" => generate(Zsh, &mut cmd, "mi", &mut out),
        "fish" => generate(Fish, &mut cmd, "mi", &mut out),
        other => bail!("unsupported shell '{other}', choose: bash, zsh, fish"),
    }
    Ok(())
}
