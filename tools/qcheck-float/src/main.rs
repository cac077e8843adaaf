mod cli;

use crate::cli::{CheckArgs, Cli};
use anyhow::Context;
use clap::Parser;
use log::{debug, error};
use qcheck_core_checker::{CheckError, EXIT_INPUT, Verdict};
use qcheck_globals::{GlobalOpts, get_globals, init_globals};
use std::fs::File;
use std::io::{self, BufReader, Write};
use std::process::ExitCode;

pub fn run_check_cmd(cmd: &CheckArgs) -> anyhow::Result<Verdict> {
    let verdict = match &cmd.input {
        Some(path) => {
            debug!("qcheck-float input: {:#?}", path);
            let file =
                File::open(path).with_context(|| format!("opening {}", path.display()))?;
            qcheck_core_checker::run(BufReader::new(file))?
        }
        None => qcheck_core_checker::run(io::stdin().lock())?,
    };
    Ok(verdict)
}

pub fn write_verdict(verdict: Verdict, globals: &GlobalOpts) -> anyhow::Result<()> {
    match &globals.output {
        Some(path) => {
            let mut file =
                File::create(path).with_context(|| format!("creating {}", path.display()))?;
            writeln!(file, "{verdict}")?;
        }
        None => {
            let mut out = io::stdout().lock();
            writeln!(out, "{verdict}")?;
            out.flush()?;
        }
    }
    Ok(())
}

// protocol violations are the caller's bug: exit status only
fn exit_code_for(err: &anyhow::Error) -> u8 {
    match err.downcast_ref::<CheckError>() {
        Some(check_err) => {
            if check_err.is_protocol_violation() {
                debug!("protocol violation: {check_err}");
            } else {
                error!("{err:#}");
            }
            check_err.exit_code()
        }
        None => {
            error!("{err:#}");
            EXIT_INPUT
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    init_globals(cli.g);

    let result =
        run_check_cmd(&cli.args).and_then(|verdict| write_verdict(verdict, get_globals()));
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => ExitCode::from(exit_code_for(&err)),
    }
}
