use serde::Deserialize;

use crate::policy_error::PolicyError;

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Parameters {
    pub distance_threshold: f64,
    pub policy_debug: bool,
}

impl Parameters {
    pub fn new() -> Result<Self, PolicyError> {
        Self::from_file("parameters")
    }

    pub fn from_file(name: &str) -> Result<Self, PolicyError> {
        let mut s = config::Config::new();
        s.merge(config::File::with_name(name))?;
        Ok(s.try_into()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_bundled_parameters() {
        let params = Parameters::new().unwrap();
        assert_eq!(params.distance_threshold, 1.0);
        assert!(!params.policy_debug);
    }

    #[test]
    fn test_missing_file_is_configuration_error() {
        assert!(matches!(
            Parameters::from_file("no_such_parameters_file"),
            Err(PolicyError::Configuration(_))
        ));
    }
}
