use std::process::{Command, ExitCode};

use anyhow::{Context, Result, anyhow};
use clap::Parser;

use crate::compiler;
use crate::store::{FsPatternStore, PatternStore};
use crate::utils::stdin_is_pipe;

#[derive(Parser)]
#[command(name = "gf")]
#[command(version = "0.1.0")]
#[command(about = "Store and run named search-pattern shortcuts for grep-like engines", long_about = None)]
pub struct Cli {
    /// Save a pattern (e.g: gf --save pat-name -Hnri 'search-pattern')
    #[arg(long)]
    pub save: bool,

    /// List available patterns
    #[arg(long)]
    pub list: bool,

    /// Print the search command rather than executing it
    #[arg(long)]
    pub dump: bool,

    /// Mode arguments: for --save, <name> <flags> <pattern>; otherwise
    /// <pattern-name> [target], with target defaulting to the current
    /// directory
    #[arg(allow_hyphen_values = true)]
    pub args: Vec<String>,
}

pub fn run() -> Result<ExitCode> {
    let cli = Cli::parse();
    let store = FsPatternStore::open_default()?;

    if cli.list {
        println!("{}", store.list()?.join("\n"));
        return Ok(ExitCode::SUCCESS);
    }

    if cli.save {
        let name = cli.args.first().map(String::as_str).unwrap_or_default();
        let flags = cli.args.get(1).map(String::as_str).unwrap_or_default();
        let pattern = cli.args.get(2).map(String::as_str).unwrap_or_default();

        store.save(name, flags, pattern)?;
        return Ok(ExitCode::SUCCESS);
    }

    let name = cli.args.first().map(String::as_str).unwrap_or_default();
    let target = cli
        .args
        .get(1)
        .map(String::as_str)
        .filter(|t| !t.is_empty())
        .unwrap_or(".");

    let pattern = store.load(name)?;
    let expr = compiler::compile(&pattern).map_err(|err| anyhow!("{name}: {err}"))?;
    let engine = compiler::resolve_engine(&pattern);

    if cli.dump {
        println!("{} {} {:?} {}", engine, pattern.flags, expr, target);
        return Ok(ExitCode::SUCCESS);
    }

    let mut command = Command::new(engine);
    command.arg(&pattern.flags).arg(&expr);
    // Piped input replaces the target path argument.
    if !stdin_is_pipe() {
        command.arg(target);
    }

    let status = command
        .status()
        .with_context(|| format!("failed to run search engine '{engine}'"))?;

    if status.success() {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::from(1))
    }
}
