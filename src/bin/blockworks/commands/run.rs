//! `blockworks run` command, also the default when no command is given.

use std::io;

use anyhow::Result;

use crate::cli::RunArgs;
use blockworks::ops::Session;
use blockworks::util::{InvalidInputPolicy, SessionConfig, Shell};

pub fn execute(args: RunArgs, shell: &Shell) -> Result<()> {
    let policy = InvalidInputPolicy::from_flags(args.strict, args.max_attempts);
    tracing::debug!(?policy, "starting interactive session");

    let session = Session::new(SessionConfig::with_policy(policy));

    let stdin = io::stdin();
    let mut input = stdin.lock();
    // Prompts go to stderr; stdout carries only the result.
    let mut prompts = io::stderr();

    let shape = session.run(&mut input, &mut prompts)?;
    shell.shape(&shape);

    Ok(())
}
