mod cli;

use std::error::Error;
use std::io;
use std::process;

use enum_property_table::fruit::FRUIT_PROPERTIES;
use log::{debug, error};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};
use structopt::StructOpt;
use structopt_flags::LogLevel;

use cli::{AppConfig, Opt};

fn run(config: AppConfig) -> Result<(), Box<dyn Error>> {
    debug!(
        "Looking up index {} in a table of {} fruit",
        config.index,
        FRUIT_PROPERTIES.len()
    );

    // Bounds checked because the index comes from the user.
    let property = FRUIT_PROPERTIES.at(config.index)?;

    println!("{}", property.name);

    Ok(())
}

fn main() {
    let opt = Opt::from_args();

    if let Some(shell) = opt.completions {
        Opt::clap().gen_completions_to("fruit-lookup", shell, &mut io::stdout());
        return;
    }

    if let Err(e) = TermLogger::init(
        opt.verbose.get_level_filter(),
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    ) {
        eprintln!("Failed to initialise logger: {}", e);
    }

    // Only fails if clap's `required_unless` is bypassed.
    let config = match opt.to_app_config() {
        Ok(config) => config,
        Err(e) => {
            error!("{}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run(config) {
        error!("{}", e);
        process::exit(2);
    }
}
