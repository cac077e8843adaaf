use clap::{Args, Parser};
use qcheck_globals::GlobalOpts;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "qcheck-float",
    version = env!("CARGO_PKG_VERSION"),
    about = "Absolute-tolerance float checker. Prints OK or WA."
)]
pub struct Cli {
    #[command(flatten)]
    pub g: GlobalOpts,

    #[command(flatten)]
    pub args: CheckArgs,
}

#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Read checker input from a file instead of stdin
    #[arg(short = 'i', long = "input", value_name = "FILE", value_hint = clap::ValueHint::FilePath)]
    pub input: Option<PathBuf>,
}
