use crate::game_logic::{
    DrivingStyle, HIT_STUN_SECONDS, LapCounter, MAX_HEALTH, Orientation, RIDE_HEIGHT, TrackModel,
    Velocity, WALL_PAUSE_SECONDS,
};
use bevy::prelude::*;
use std::f32::consts::FRAC_PI_2;

/// Who produces a kart's control intent each frame.
#[derive(Clone, Copy, Debug)]
pub enum Controller {
    /// Intent comes in from outside, straight from key state.
    Player,
    /// Intent is computed by the rule-based driver.
    Ai(DrivingStyle),
}

/// Full simulation state for one kart.
#[derive(Clone, Debug)]
pub struct Kart {
    pub id: String,
    pub position: Vec3,
    pub orientation: Orientation,
    pub velocity: Velocity,
    pub health: i32,
    /// Seconds left sitting out a wall strike; no input is processed.
    pub pause_timer: f32,
    /// Seconds left reeling from a kart strike; no input is processed.
    pub stun_timer: f32,
    /// Last known closest centerline index; the AI also aims off it.
    pub nearest_index: usize,
    pub lap_counter: LapCounter,
    pub wall_hits: u32,
    pub kart_hits: u32,
    /// Bank angle under the kart, for the renderer.
    pub roll: f32,
    pub start_position: Vec3,
    pub controller: Controller,
}

impl Kart {
    pub fn new(id: impl Into<String>, start_position: Vec3, controller: Controller) -> Self {
        Self {
            id: id.into(),
            position: start_position,
            orientation: Orientation::new(FRAC_PI_2),
            velocity: Velocity::new(),
            health: MAX_HEALTH,
            pause_timer: 0.0,
            stun_timer: 0.0,
            nearest_index: 0,
            lap_counter: LapCounter::default(),
            wall_hits: 0,
            kart_hits: 0,
            roll: 0.0,
            start_position,
            controller,
        }
    }

    pub fn is_paused(&self) -> bool {
        self.pause_timer > 0.0
    }

    pub fn is_stunned(&self) -> bool {
        self.stun_timer > 0.0
    }

    pub fn is_player(&self) -> bool {
        matches!(self.controller, Controller::Player)
    }

    /// Wall-strike recovery: snap back onto the centerline nearest the
    /// position the kart drove from, face down the track, and sit out the
    /// pause. The kart stays rendered frozen here until the timer runs out.
    pub fn reset_to_track_center(&mut self, track: &TrackModel) {
        let (index, following) = track.nearest_index(self.position.x, self.position.z);
        let center = track.point(index);
        let ahead = track.point(following);

        self.position = Vec3::new(center.x, center.y + RIDE_HEIGHT, center.z);
        self.orientation.angle = (ahead.x - center.x).atan2(ahead.z - center.z);
        self.velocity.zero();
        self.pause_timer = WALL_PAUSE_SECONDS;
        self.wall_hits += 1;
        self.nearest_index = index;
        info!("{} hit the wall, recentering at point {}", self.id, index);
    }

    /// Struck by another kart: lose a health point and freeze briefly.
    /// Running out of health sends the kart back to the starting grid.
    pub fn take_damage(&mut self) {
        self.health = (self.health - 1).max(0);
        self.stun_timer = HIT_STUN_SECONDS;
        self.velocity.zero();
        self.kart_hits += 1;
        if self.health <= 0 {
            self.reset_to_start();
        }
    }

    /// Back to the starting grid with fresh health. Lap count survives,
    /// checkpoint history does not.
    pub fn reset_to_start(&mut self) {
        self.position = self.start_position;
        self.orientation.angle = FRAC_PI_2;
        self.velocity.zero();
        self.health = MAX_HEALTH;
        self.pause_timer = 0.0;
        self.stun_timer = 0.0;
        self.lap_counter.last_checkpoint = None;
        info!("{} wrecked, back to the start", self.id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_kart() -> Kart {
        Kart::new("test", Vec3::new(0.0, 0.5, 25.0), Controller::Player)
    }

    #[test]
    fn test_ten_hits_trigger_exactly_one_reset() {
        let mut kart = test_kart();
        kart.position = Vec3::new(10.0, 0.5, 20.0);

        for hit in 1..=9 {
            kart.take_damage();
            assert_eq!(kart.health, MAX_HEALTH - hit);
            // still where it was, just stunned
            assert_eq!(kart.position, Vec3::new(10.0, 0.5, 20.0));
            assert!(kart.is_stunned());
        }

        // the tenth hit is the wreck
        kart.take_damage();
        assert_eq!(kart.health, MAX_HEALTH);
        assert_eq!(kart.position, kart.start_position);
        assert_eq!(kart.kart_hits, 10);
        assert!(!kart.is_stunned());
        assert!(!kart.is_paused());
    }

    #[test]
    fn test_damage_freezes_motion() {
        let mut kart = test_kart();
        kart.velocity.linear = 0.3;
        kart.velocity.angular = 0.05;
        kart.take_damage();
        assert_eq!(kart.velocity.linear, 0.0);
        assert_eq!(kart.velocity.angular, 0.0);
        assert_eq!(kart.stun_timer, HIT_STUN_SECONDS);
    }

    #[test]
    fn test_wall_recovery_snaps_to_centerline() {
        let track = TrackModel::new();
        let mut kart = test_kart();

        // drifted off near point 3
        let p3 = track.point(3);
        kart.position = Vec3::new(p3.x + 2.0, p3.y, p3.z + 1.0);
        kart.velocity.linear = 0.4;
        kart.reset_to_track_center(&track);

        assert_eq!(kart.position, Vec3::new(p3.x, p3.y + RIDE_HEIGHT, p3.z));
        let p4 = track.point(4);
        let expected = (p4.x - p3.x).atan2(p4.z - p3.z);
        assert!((kart.orientation.angle - expected).abs() < 1e-6);
        assert_eq!(kart.velocity.linear, 0.0);
        assert_eq!(kart.pause_timer, WALL_PAUSE_SECONDS);
        assert_eq!(kart.wall_hits, 1);
        assert_eq!(kart.nearest_index, 3);
    }

    #[test]
    fn test_reset_keeps_laps_but_clears_checkpoint_history() {
        let mut kart = test_kart();
        kart.lap_counter.laps = 2;
        kart.lap_counter.last_checkpoint = Some(3);
        kart.reset_to_start();
        assert_eq!(kart.lap_counter.laps, 2);
        assert_eq!(kart.lap_counter.last_checkpoint, None);
    }
}
