use crate::game_logic::WAYPOINT_ADVANCE_RADIUS;
use crate::game_logic::physics::ControlIntent;
use crate::game_logic::track::{TrackModel, horizontal_distance};
use bevy::prelude::*;
use std::f32::consts::{PI, TAU};

/// AI temperament: how far ahead the kart aims, how fast it tries to go and
/// how much heading error it tolerates before steering.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DrivingStyle {
    Aggressive,
    Normal,
    Cautious,
}

impl DrivingStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            DrivingStyle::Aggressive => "Aggressive",
            DrivingStyle::Normal => "Normal",
            DrivingStyle::Cautious => "Cautious",
        }
    }

    /// Look-ahead distance along the track, in world units.
    pub fn look_ahead(&self) -> f32 {
        match self {
            DrivingStyle::Aggressive => 8.0,
            DrivingStyle::Normal => 10.0,
            DrivingStyle::Cautious => 12.0,
        }
    }

    /// Speed the kart tries to hold.
    pub fn target_speed(&self) -> f32 {
        match self {
            DrivingStyle::Aggressive => 0.35,
            DrivingStyle::Normal => 0.3,
            DrivingStyle::Cautious => 0.25,
        }
    }

    /// Heading error below which the kart holds its line.
    pub fn turn_threshold(&self) -> f32 {
        match self {
            DrivingStyle::Aggressive => 0.1,
            DrivingStyle::Normal => 0.08,
            DrivingStyle::Cautious => 0.05,
        }
    }

    // look-ahead expressed as centerline points, one point per ~3 units
    fn look_ahead_points(&self) -> usize {
        (self.look_ahead() / 3.0) as usize
    }
}

/// Wrap an angle into (-pi, pi].
pub fn normalize_angle(mut angle: f32) -> f32 {
    while angle > PI {
        angle -= TAU;
    }
    while angle <= -PI {
        angle += TAU;
    }
    angle
}

/// Rule-based steering toward a look-ahead point on the centerline. When the
/// kart closes within the advance radius of its anchor point the tracked
/// index moves up one, and the kart aims a few points past the anchor either
/// way.
pub fn steer(
    style: DrivingStyle,
    position: Vec3,
    heading: f32,
    linear_speed: f32,
    tracked_index: &mut usize,
    track: &TrackModel,
) -> ControlIntent {
    let anchor = track.point(*tracked_index);
    if horizontal_distance(position, anchor) < WAYPOINT_ADVANCE_RADIUS {
        *tracked_index = (*tracked_index + 1) % track.len();
    }
    let target = track.point((*tracked_index + style.look_ahead_points()) % track.len());

    let desired = (target.x - position.x).atan2(target.z - position.z);
    let error = normalize_angle(desired - heading);

    ControlIntent {
        forward: linear_speed < style.target_speed(),
        backward: false,
        left: error > style.turn_threshold(),
        right: error < -style.turn_threshold(),
    }
}
