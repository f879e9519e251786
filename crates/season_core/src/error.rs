use thiserror::Error;

#[derive(Error, Debug)]
pub enum SeasonError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Undefined scoring rate: team '{team}' has zero matches played")]
    UndefinedRate { team: String },

    #[error("Simulation aborted at fixture {fixture} ({first} vs {second}): {source}")]
    SimulationAborted {
        fixture: usize,
        first: String,
        second: String,
        #[source]
        source: Box<SeasonError>,
    },

    #[error("Config error: {0}")]
    Config(String),
}

impl SeasonError {
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        SeasonError::InvalidInput(msg.into())
    }

    /// True when the caller supplied bad data (as opposed to a failed run).
    pub fn is_input_error(&self) -> bool {
        match self {
            SeasonError::InvalidInput(_) => true,
            SeasonError::UndefinedRate { .. } => true,
            SeasonError::Config(_) => true,
            SeasonError::SimulationAborted { .. } => false,
        }
    }

    /// Innermost cause, unwrapping any `SimulationAborted` layers.
    pub fn root_cause(&self) -> &SeasonError {
        match self {
            SeasonError::SimulationAborted { source, .. } => source.root_cause(),
            other => other,
        }
    }
}

impl From<serde_json::Error> for SeasonError {
    fn from(err: serde_json::Error) -> Self {
        SeasonError::InvalidInput(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, SeasonError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_cause_unwraps_abort() {
        let err = SeasonError::SimulationAborted {
            fixture: 3,
            first: "Arsenal".into(),
            second: "Chelsea".into(),
            source: Box::new(SeasonError::UndefinedRate { team: "Chelsea".into() }),
        };

        assert!(!err.is_input_error());
        assert!(matches!(err.root_cause(), SeasonError::UndefinedRate { team } if team == "Chelsea"));
        assert!(err.to_string().contains("fixture 3"));
    }
}
