pub mod vec2;
pub mod states;
pub mod params;
pub mod forces;
pub mod integrator;
pub mod collisions;
pub mod interaction;
pub mod scenario;
