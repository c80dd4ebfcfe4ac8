use std::error::Error;

use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use idealweight_advisor::{config::Config, Advisor};
use log::info;

#[actix_web::main]
async fn main() -> Result<(), Box<dyn Error>> {
    log4rs::init_file("log4rs.yml", Default::default())?;
    let config = Config::from_env()?;

    info!("Loading model from {}", config.model_path.display());
    let predictor = idealweight_predictor::load(&config.model_path)?;
    let advisor = web::Data::new(Advisor::new(predictor));

    info!("Listening on {}:{}", config.bind_address, config.port);
    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allowed_methods(vec!["GET", "POST"])
                    .allow_any_header(),
            )
            .app_data(advisor.clone())
            .configure(idealweight_api::configure)
    })
    .bind((config.bind_address.as_str(), config.port))?
    .run()
    .await?;

    Ok(())
}
