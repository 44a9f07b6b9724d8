use crate::{
    arg_parameters::Parameters,
    observation::{Mode, Observation},
    policy_error::PolicyError,
};

pub const FACTOR: f64 = 10.0;
pub const EPSILON: f64 = 0.1;
pub const SPEED_GAIN: f64 = 10.0;
pub const EMERGENCY_GAIN: f64 = 5.0;
pub const CRUISE_ACCEL_DEFAULT: f64 = 1.0;
pub const MAX_ACCEL: f64 = 10.0;

// blend_weight divides by FACTOR - 1
const _: () = assert!(FACTOR > 1.0);

/// Adaptive cruise control law. Every call to `decide` starts from scratch:
/// the only thing carried between ticks is the distance threshold, so a
/// single policy can be shared across threads.
#[derive(Clone, Debug)]
pub struct ControlPolicy {
    distance_threshold: f64,
    debug: bool,
}

impl ControlPolicy {
    pub fn new(distance_threshold: f64) -> Result<Self, PolicyError> {
        if !distance_threshold.is_finite() || distance_threshold <= 0.0 {
            return Err(PolicyError::Configuration(format!(
                "distance_threshold must be positive and finite, got {}",
                distance_threshold
            )));
        }
        if !(FACTOR * distance_threshold).is_finite() {
            return Err(PolicyError::Configuration(format!(
                "distance_threshold {} overflows the anticipation range",
                distance_threshold
            )));
        }

        Ok(Self {
            distance_threshold,
            debug: false,
        })
    }

    pub fn from_parameters(params: &Parameters) -> Result<Self, PolicyError> {
        let mut policy = Self::new(params.distance_threshold)?;
        policy.debug = params.policy_debug;
        Ok(policy)
    }

    pub fn distance_threshold(&self) -> f64 {
        self.distance_threshold
    }

    /// Gap below which the policy brakes unconditionally.
    pub fn safety_distance(&self, ego_velocity: f64) -> f64 {
        let safety_lim = ego_velocity * FACTOR / 2.0;
        safety_lim * self.distance_threshold
    }

    /// Gap at which the policy starts slowing down for a lead vehicle.
    pub fn anticipation_range(&self) -> f64 {
        FACTOR * self.distance_threshold
    }

    // 0 on entering the anticipation range, 1 within one threshold of the lead
    fn blend_weight(&self, dist: f64) -> f64 {
        let alpha =
            (self.anticipation_range() - dist) / ((FACTOR - 1.0) * self.distance_threshold);
        alpha.clamp(0.0, 1.0)
    }

    pub fn decide(&self, obs: &Observation) -> Result<(f64, Mode), PolicyError> {
        obs.validate()?;

        let Observation {
            ego_velocity,
            desired_speed,
            distance_to_lead: dist,
        } = *obs;
        let threshold = self.distance_threshold;

        let safety_dist = self.safety_distance(ego_velocity);
        if dist < safety_dist {
            let accel = -EMERGENCY_GAIN * (safety_dist - dist) / threshold;
            if self.debug {
                eprintln_f!(
                    "emergency: {ego_velocity=:.4}, {dist=:.4}, {safety_dist=:.4}, {accel=:.4}"
                );
            }
            return Ok((clamp_accel(accel), Mode::Following));
        }

        let mut mode = Mode::Cruising;
        let mut accel = CRUISE_ACCEL_DEFAULT;
        if ego_velocity < desired_speed + EPSILON {
            accel = (desired_speed - ego_velocity) * SPEED_GAIN;
        }

        let anticipation_range = self.anticipation_range();
        if dist <= anticipation_range {
            let target_speed = desired_speed * (dist / anticipation_range);
            let dist_accel = (dist - anticipation_range) / threshold;
            let speed_accel = (target_speed - ego_velocity) * SPEED_GAIN;
            let alpha = self.blend_weight(dist);

            // speed_accel can overflow for huge desired speeds; keep it out of 0 * inf
            accel = if alpha < 1.0 {
                alpha * dist_accel + (1.0 - alpha) * speed_accel
            } else {
                dist_accel
            };
            mode = Mode::Following;

            if self.debug {
                eprintln_f!("blend: {ego_velocity=:.4}, {dist=:.4}, {target_speed=:.4}, {dist_accel=:.4}, {speed_accel=:.4}, {alpha=:.4}, {accel=:.4}");
            }
        } else if self.debug {
            eprintln_f!(
                "cruise: {ego_velocity=:.4}, {desired_speed=:.4}, {dist=:.4}, {accel=:.4}"
            );
        }

        Ok((clamp_accel(accel), mode))
    }
}

fn clamp_accel(accel: f64) -> f64 {
    accel.clamp(-MAX_ACCEL, MAX_ACCEL)
}
