pub mod game_logic;
pub mod kart;
pub mod simulation;

pub use game_logic::*;
pub use kart::{Controller, Kart};
pub use simulation::{KartSnapshot, RaceSimulation};
