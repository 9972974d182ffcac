use thiserror::Error;

/// Configuration errors reported before any field buffer is allocated.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("grid resolution must be at least 1, got {0}")]
    ZeroResolution(usize),

    #[error("{stage} iteration count must be at least 1, got {value}")]
    ZeroIterations { stage: &'static str, value: usize },

    #[error("time step must be positive, got {0}")]
    NonPositiveTimeStep(f64),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_name_the_field() {
        let e = ConfigError::ZeroResolution(0);
        assert!(e.to_string().contains("resolution"));
        let e = ConfigError::ZeroIterations { stage: "diffusion", value: 0 };
        assert!(e.to_string().contains("diffusion"));
        let e = ConfigError::NonPositiveTimeStep(-0.5);
        assert!(e.to_string().contains("-0.5"));
    }
}
