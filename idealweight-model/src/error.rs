#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("{field} = {value} is outside of allowed range [{min}, {max}]")]
    InputOutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
    #[error("unknown {kind} category \"{value}\"")]
    UnknownCategory { kind: &'static str, value: String },
    #[error("prediction model unavailable: {0}")]
    ModelUnavailable(String),
}

pub type Result<T> = std::result::Result<T, Error>;
