use std::env;
use std::path::Path;
use std::process;

use log::*;
use meetup::prelude::*;
use simple_logger::SimpleLogger;

const DEFAULT_CONFIG: &str = "conf.toml";

fn load_config(path: Option<String>) -> Result<Config> {
    match path {
        Some(path) => Config::load(path),
        None if Path::new(DEFAULT_CONFIG).exists() => Config::load(DEFAULT_CONFIG),
        None => Ok(Config::default()),
    }
}

fn run(cfg: &Config) -> Result<Population> {
    let population = cfg.population()?;
    let before = Census::from_population(&population);
    info!("before: {}", before);

    let result = run_round(&population)?;
    let after = Census::from_population(&result);
    info!("after: {}", after);
    if cfg.verbose {
        print!("{}", Census::render_csv(&[before, after]));
    }

    if cfg.write_output(&result)? {
        info!("population written to {:?}", cfg.output_csv);
    }
    return Ok(result);
}

pub fn main() {
    SimpleLogger::new().init().unwrap();

    let cfg = match load_config(env::args().nth(1)) {
        Ok(cfg) => cfg,
        Err(err) => {
            error!("{}", err);
            process::exit(1);
        }
    };
    if cfg.verbose {
        println!("{:#?}", cfg);
    }

    match run(&cfg) {
        Ok(result) => println!("Round outcome: {:?}", result),
        Err(err) => {
            error!("{}", err);
            process::exit(1);
        }
    }
}
