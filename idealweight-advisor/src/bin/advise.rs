use std::{env, error::Error};

use idealweight_advisor::{cli, config::Config, Advisor};
use log::{error, info};

fn main() -> Result<(), Box<dyn Error>> {
    log4rs::init_file("log4rs.yml", Default::default())?;

    let args: Vec<String> = env::args().skip(1).collect();
    let profile = cli::read_profile(&args)?;

    let config = Config::from_env()?;
    info!("Loading model from {}", config.model_path.display());
    let advisor = Advisor::new(idealweight_predictor::load(&config.model_path)?);

    match advisor.advise(&profile) {
        Ok(report) => {
            println!("{}", report);
            Ok(())
        }
        Err(e) => {
            error!("Could not compute advice: {}", e);
            Err(e.into())
        }
    }
}
