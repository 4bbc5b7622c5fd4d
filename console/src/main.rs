mod command;
mod config;
mod render;
mod session;
mod ticker;

use std::io::{self, BufReader};
use std::time::Duration;

use clap::Parser;

use session::{Clock, Session};

use utils::*;

///
/// A structure representing command line arguments.
///
#[derive(Parser)]
struct CLIArgs 
{
    #[clap(short, long, default_value = "config/config.toml")]
    config: String,

    /// Only advance the round clock with the `tick` command.
    #[clap(long)]
    manual_clock: bool
}

fn main () -> Result<()>
{
    let args = CLIArgs::parse();

    let config = config::Config::load(& args.config)?;
    let _logger = log::initialize(& config.log_path, "console", & config.log_level)?;
    log::info!("Console startup with {:?}.", config);

    let clock = match args.manual_clock 
    {
        true  => Clock::Manual,
        false => Clock::every(Duration::from_millis(config.tick_millis))
    };

    Session::new(& config, clock, io::stdout()).run(BufReader::new(io::stdin()))
}
