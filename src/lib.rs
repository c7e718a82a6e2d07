pub mod simulation;
pub mod configuration;
pub mod visualization;

pub use simulation::vec2::NVec2;
pub use simulation::states::{Ball, World, Rgba, DrawRecord, mass_from_radius};
pub use simulation::params::Parameters;
pub use simulation::forces::{Force, ForceSet, MutualGravity};
pub use simulation::integrator::euler_integrator;
pub use simulation::collisions::resolve_collisions;
pub use simulation::interaction::{ButtonPulse, InputSnapshot, InteractionState};
pub use simulation::scenario::Scenario;

pub use configuration::config::{ParametersConfig, BallConfig, ScenarioConfig};

pub use visualization::vis2d::run_2d;
