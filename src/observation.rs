use serde::Deserialize;

use crate::policy_error::PolicyError;

/// One tick worth of input from the vehicle harness.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub struct Observation {
    pub ego_velocity: f64,
    pub desired_speed: f64,
    // large when nothing is ahead; zero or negative once the cars overlap
    pub distance_to_lead: f64,
}

impl Observation {
    pub fn new(ego_velocity: f64, desired_speed: f64, distance_to_lead: f64) -> Self {
        Self {
            ego_velocity,
            desired_speed,
            distance_to_lead,
        }
    }

    pub fn validate(&self) -> Result<(), PolicyError> {
        let speeds = [
            ("ego_velocity", self.ego_velocity),
            ("desired_speed", self.desired_speed),
        ];
        for &(field, value) in speeds.iter() {
            if !value.is_finite() || value < 0.0 {
                return Err(PolicyError::InvalidObservation { field, value });
            }
        }

        if !self.distance_to_lead.is_finite() {
            return Err(PolicyError::InvalidObservation {
                field: "distance_to_lead",
                value: self.distance_to_lead,
            });
        }

        Ok(())
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Deserialize, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    Cruising,
    Following,
}

impl Mode {
    pub fn is_following(self) -> bool {
        self == Self::Following
    }
}

// the harness reports the mode as a flag: true while following
impl From<Mode> for bool {
    fn from(mode: Mode) -> Self {
        mode.is_following()
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Cruising => write!(f, "cruising"),
            Self::Following => write!(f, "following"),
        }
    }
}

impl std::str::FromStr for Mode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "cruising" => Ok(Self::Cruising),
            "following" => Ok(Self::Following),
            _ => Err(format!("Invalid Mode '{}'", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_accepts_any_finite_gap() {
        for &gap in [1000.0, 0.0, -0.0, -3.5, f64::MAX, f64::MIN].iter() {
            assert!(Observation::new(0.0, 20.0, gap).validate().is_ok());
        }
    }

    #[test]
    fn test_validate_rejects_non_finite() {
        let bad = [
            Observation::new(f64::NAN, 20.0, 10.0),
            Observation::new(5.0, f64::INFINITY, 10.0),
            Observation::new(5.0, 20.0, f64::NEG_INFINITY),
            Observation::new(5.0, 20.0, f64::NAN),
        ];
        for obs in bad.iter() {
            assert!(matches!(
                obs.validate(),
                Err(PolicyError::InvalidObservation { .. })
            ));
        }
    }

    #[test]
    fn test_validate_rejects_negative_speeds() {
        match Observation::new(-1.0, 20.0, 10.0).validate() {
            Err(PolicyError::InvalidObservation { field, value }) => {
                assert_eq!(field, "ego_velocity");
                assert_eq!(value, -1.0);
            }
            other => panic!("unexpected {:?}", other),
        }
        match Observation::new(1.0, -0.5, 10.0).validate() {
            Err(PolicyError::InvalidObservation { field, .. }) => {
                assert_eq!(field, "desired_speed")
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_mode_flag_and_names() {
        assert!(bool::from(Mode::Following));
        assert!(!bool::from(Mode::Cruising));

        assert_eq!(Mode::Following.to_string(), "following");
        assert_eq!("CRUISING".parse::<Mode>(), Ok(Mode::Cruising));
        assert!("braking".parse::<Mode>().is_err());
    }
}
