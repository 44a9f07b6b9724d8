#[macro_use]
extern crate fstrings;

pub mod arg_parameters;
pub mod control_policy;
pub mod observation;
pub mod policy_error;

pub use arg_parameters::Parameters;
pub use control_policy::ControlPolicy;
pub use observation::{Mode, Observation};
pub use policy_error::PolicyError;
