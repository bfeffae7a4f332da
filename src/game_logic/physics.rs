use crate::game_logic::{
    ACCEL_RATE, DECEL_RATE, FRICTION, MAX_SPEED, MAX_TURN_SPEED, Orientation, REVERSE_SPEED_CAP,
    TURN_ACCEL, TURN_FRICTION, Velocity,
};
use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Control intent for one frame, whatever the source (player keys or AI).
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize)]
pub struct ControlIntent {
    pub forward: bool,
    pub backward: bool,
    pub left: bool,
    pub right: bool,
}

/// Apply one frame of kart physics to the velocity pair and heading.
/// This is the core integration shared by the player and AI karts; the
/// caller decides afterwards whether the resulting displacement sticks.
pub fn apply_physics(
    velocity: &mut Velocity,
    orientation: &mut Orientation,
    input: &ControlIntent,
    delta: f32,
) {
    // Longitudinal velocity: accelerate, brake/reverse, or coast toward 0.
    // The coast decay is one-sided and never crosses zero on its own.
    if input.forward {
        velocity.linear = (velocity.linear + ACCEL_RATE * delta).min(MAX_SPEED);
    } else if input.backward {
        velocity.linear = (velocity.linear - DECEL_RATE * delta).max(-REVERSE_SPEED_CAP);
    } else if velocity.linear > 0.0 {
        velocity.linear = (velocity.linear - DECEL_RATE * delta).max(0.0);
    } else if velocity.linear < 0.0 {
        velocity.linear = (velocity.linear + DECEL_RATE * delta).min(0.0);
    }

    // Rolling friction applies every frame, input or not
    velocity.linear *= FRICTION;

    // Turning authority scales with speed; a stationary kart cannot spin
    let turn_cap = velocity.linear.abs() / MAX_SPEED * MAX_TURN_SPEED;
    if input.left {
        velocity.angular = (velocity.angular + TURN_ACCEL * delta).min(turn_cap);
    } else if input.right {
        velocity.angular = (velocity.angular - TURN_ACCEL * delta).max(-turn_cap);
    } else {
        velocity.angular *= TURN_FRICTION;
    }

    // Angular velocity is already a per-frame delta, no dt here
    orientation.angle += velocity.angular;
}

/// Tentative position for this frame; heading 0 faces +z. Elevation is left
/// untouched, the caller snaps it to the track surface once the move is
/// accepted.
pub fn displace(position: Vec3, orientation: &Orientation, velocity: &Velocity) -> Vec3 {
    position + orientation.forward_vector() * velocity.linear
}
