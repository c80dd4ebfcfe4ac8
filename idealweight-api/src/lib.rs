pub mod page;

use actix_web::{
    get,
    http::{header::ContentType, StatusCode},
    post, web, HttpResponse, ResponseError,
};
use idealweight_advisor::{report::Report, Advisor};
use idealweight_model::{
    profile::{ProfileInput, UserProfile},
    Error,
};
use log::warn;

use crate::page::Outcome;

#[derive(Debug, thiserror::Error)]
#[error(transparent)]
pub struct ApiError(#[from] Error);

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        status_for(&self.0)
    }
}

fn status_for(error: &Error) -> StatusCode {
    match error {
        Error::InputOutOfRange { .. } | Error::UnknownCategory { .. } => StatusCode::BAD_REQUEST,
        Error::ModelUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
    }
}

// Rejected input is logged here; model failures are already logged by the
// advisor.
fn advise(advisor: &Advisor, input: ProfileInput) -> Result<Report, Error> {
    let profile = UserProfile::try_from(input).map_err(|e| {
        warn!("Rejected input: {}", e);
        e
    })?;
    advisor.advise(&profile)
}

#[get("/")]
async fn index() -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(page::render(&ProfileInput::default(), Outcome::Empty))
}

#[post("/")]
async fn submit(advisor: web::Data<Advisor>, form: web::Form<ProfileInput>) -> HttpResponse {
    let input = form.into_inner();
    match advise(&advisor, input.clone()) {
        Ok(report) => HttpResponse::Ok()
            .content_type(ContentType::html())
            .body(page::render(&input, Outcome::Result(&report.to_html()))),
        Err(e) => HttpResponse::build(status_for(&e))
            .content_type(ContentType::html())
            .body(page::render(&input, Outcome::Failure(&e.to_string()))),
    }
}

#[post("/api/advice")]
async fn advice(
    advisor: web::Data<Advisor>,
    body: web::Json<ProfileInput>,
) -> Result<web::Json<Report>, ApiError> {
    Ok(web::Json(advise(&advisor, body.into_inner())?))
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(index).service(submit).service(advice);
}
