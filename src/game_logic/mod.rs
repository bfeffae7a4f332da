pub mod constants;
pub mod components;
pub mod physics;
pub mod collisions;
pub mod track;
pub mod steering;
pub mod lap_system;

pub use constants::*;
pub use components::*;
pub use physics::*;
pub use collisions::*;
pub use track::*;
pub use steering::*;
pub use lap_system::*;
