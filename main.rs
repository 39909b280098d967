use std::process;

use env_logger::Env;
use log::{error, info};

use rpbme280::{Config, Session};

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("{}", e);
            process::exit(2);
        }
    };

    let reading = Session::open(&config).and_then(|mut session| session.measure());
    match reading {
        Ok(reading) => {
            info!(
                "{:.2} C, {:.2} hPa, {:.2} %",
                reading.temperature_c, reading.pressure_hpa, reading.humidity_rh
            );
            println!("{}", reading);
        }
        Err(e) => {
            error!("{}", e);
            process::exit(1);
        }
    }
}
