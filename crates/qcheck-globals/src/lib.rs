use clap::Args;
use log::LevelFilter;
use once_cell::sync::OnceCell;
use std::path::PathBuf;

static GLOBAL_OPTS: OnceCell<GlobalOpts> = OnceCell::new();

#[derive(Args, Debug, Clone, Default)]
pub struct GlobalOpts {
    // write the verdict line to a file instead of stdout
    #[arg(short = 'o', long, value_name = "PATH", global = true)]
    pub output: Option<PathBuf>,

    // verbosity (-v, -vv); logs go to stderr only
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

// checkers stay quiet unless asked, the harness reads stdout
pub fn log_level(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

// RUST_LOG still wins when set
pub fn setup_logging(verbose: u8) {
    let env = env_logger::Env::default().default_filter_or(log_level(verbose).as_str());
    let _ = env_logger::Builder::from_env(env)
        .target(env_logger::Target::Stderr)
        .format_timestamp(None)
        .try_init();
}

pub fn init_globals(opts: GlobalOpts) {
    if GLOBAL_OPTS.set(opts).is_err() {
        panic!("Global options already initialized");
    }

    let opts = GLOBAL_OPTS.get().expect("options just initialized");

    setup_logging(opts.verbose);
}

pub fn get_globals() -> &'static GlobalOpts {
    GLOBAL_OPTS.get().expect("Global options not initialized")
}
