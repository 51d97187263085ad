use clap::Parser;
use log::error;
use orienteer_lib::{Args, RunConfig, run};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = RunConfig::from(Args::parse());
    if let Err(e) = run(&config) {
        error!("{e}");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
