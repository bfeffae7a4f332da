use crate::game_logic::COLLISION_RADIUS;
use crate::game_logic::track::horizontal_distance;
use bevy::prelude::*;
use std::collections::HashMap;

/// Sole owner of the shared kart-id -> position table. Karts never hold
/// references to each other; every cross-kart lookup goes through here.
///
/// Entries are written once per kart per frame, after that kart's motion is
/// finalized, so within a single tick a reader sees this-frame positions for
/// karts that already updated and last-frame positions for the rest.
#[derive(Resource, Clone, Default)]
pub struct CollisionCoordinator {
    positions: HashMap<String, Vec3>,
}

impl CollisionCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a kart's finalized position for this frame.
    pub fn publish(&mut self, id: &str, position: Vec3) {
        self.positions.insert(id.to_owned(), position);
    }

    pub fn position_of(&self, id: &str) -> Option<Vec3> {
        self.positions.get(id).copied()
    }

    /// Would moving to `tentative` overlap another kart? Returns the first
    /// kart found inside the collision radius; scan order is map order and
    /// only one hit is ever reported per frame. The mover takes no damage
    /// from its own check, the returned kart is the one that gets struck.
    pub fn check_collision(&self, id: &str, tentative: Vec3) -> Option<&str> {
        for (other_id, other_position) in &self.positions {
            // skip self
            if other_id == id {
                continue;
            }
            if horizontal_distance(tentative, *other_position) < COLLISION_RADIUS {
                return Some(other_id);
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coincident_karts_collide_without_matching_self() {
        let mut coordinator = CollisionCoordinator::new();
        let spot = Vec3::new(3.0, 0.5, 25.0);
        coordinator.publish("a", spot);
        coordinator.publish("b", spot);

        // distance 0 is a hit, and it must name the other kart
        assert_eq!(coordinator.check_collision("a", spot), Some("b"));
        assert_eq!(coordinator.check_collision("b", spot), Some("a"));
    }

    #[test]
    fn test_no_collision_when_alone() {
        let mut coordinator = CollisionCoordinator::new();
        let spot = Vec3::new(0.0, 0.5, 0.0);
        coordinator.publish("solo", spot);
        assert_eq!(coordinator.check_collision("solo", spot), None);
    }

    #[test]
    fn test_radius_is_strict() {
        let mut coordinator = CollisionCoordinator::new();
        coordinator.publish("a", Vec3::ZERO);

        // exactly at the radius is not a hit
        let at_radius = Vec3::new(COLLISION_RADIUS, 0.0, 0.0);
        assert_eq!(coordinator.check_collision("b", at_radius), None);

        let just_inside = Vec3::new(COLLISION_RADIUS - 0.01, 0.0, 0.0);
        assert_eq!(coordinator.check_collision("b", just_inside), Some("a"));
    }

    #[test]
    fn test_elevation_is_ignored() {
        let mut coordinator = CollisionCoordinator::new();
        coordinator.publish("a", Vec3::new(0.0, 0.0, 0.0));
        // far apart vertically, overlapping in the horizontal plane
        let above = Vec3::new(0.5, 10.0, 0.0);
        assert_eq!(coordinator.check_collision("b", above), Some("a"));
    }
}
