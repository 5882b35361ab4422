/// Errors of this crate
#[derive(Debug)]
pub enum Error {
    /// A ratio whose denominator is zero. `what` names the denominator.
    UndefinedRatio { what: &'static str },
    /// An input outside of its physical domain (e.g. a negative rate)
    Domain { what: &'static str, value: f64 },
    /// The constants could not be parsed
    Config(serde_json::Error),
    /// An embedded table could not be parsed
    Data(csv::Error),
    /// The report could not be rendered
    Render(tinytemplate::error::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl std::error::Error for Error {}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UndefinedRatio { what } => write!(f, "undefined ratio: {what} is zero"),
            Self::Domain { what, value } => write!(f, "{what} must be non-negative, got {value}"),
            Self::Config(e) => std::fmt::Display::fmt(&e, f),
            Self::Data(e) => std::fmt::Display::fmt(&e, f),
            Self::Render(e) => std::fmt::Display::fmt(&e, f),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Self::Config(e)
    }
}

impl From<csv::Error> for Error {
    fn from(e: csv::Error) -> Self {
        Self::Data(e)
    }
}

impl From<tinytemplate::error::Error> for Error {
    fn from(e: tinytemplate::error::Error) -> Self {
        Self::Render(e)
    }
}

/// Returns `numerator / denominator`, or [`Error::UndefinedRatio`] when the denominator is zero
/// (or not a number).
pub(crate) fn ratio(numerator: f64, denominator: f64, what: &'static str) -> Result<f64> {
    if denominator == 0.0 || denominator.is_nan() {
        return Err(Error::UndefinedRatio { what });
    }
    Ok(numerator / denominator)
}

/// Returns `value` if it is non-negative, else [`Error::Domain`].
pub(crate) fn non_negative(value: f64, what: &'static str) -> Result<f64> {
    if value >= 0.0 {
        Ok(value)
    } else {
        Err(Error::Domain { what, value })
    }
}
