use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimulationError {
    #[error("Parameter error: {name} = {value} is outside [{min}, {max}]")]
    ParameterOutOfRange {
        name: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("Dataset error: missing required column '{0}'")]
    MissingColumn(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
