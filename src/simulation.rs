use crate::game_logic::{
    CollisionCoordinator, ControlIntent, DrivingStyle, RIDE_HEIGHT, TrackModel, apply_physics,
    checkpoint_for, displace, steer,
};
use crate::kart::{Controller, Kart};
use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Render-facing state for one kart, captured at the end of a frame.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct KartSnapshot {
    pub id: String,
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub heading: f32,
    pub pitch: f32,
    pub roll: f32,
    pub health: i32,
    pub is_paused: bool,
    pub is_stunned: bool,
    pub laps: u32,
    pub wall_hits: u32,
    pub kart_hits: u32,
    pub has_finished: bool,
}

impl KartSnapshot {
    fn capture(kart: &Kart) -> Self {
        Self {
            id: kart.id.clone(),
            x: kart.position.x,
            y: kart.position.y,
            z: kart.position.z,
            heading: kart.orientation.angle,
            pitch: 0.0,
            roll: kart.roll,
            health: kart.health,
            is_paused: kart.is_paused(),
            is_stunned: kart.is_stunned(),
            laps: kart.lap_counter.laps,
            wall_hits: kart.wall_hits,
            kart_hits: kart.kart_hits,
            has_finished: kart.lap_counter.has_finished,
        }
    }
}

/// The per-frame orchestrator: track, roster and the shared position table.
///
/// Karts update one at a time in roster order, and that order is held every
/// frame. A kart's collision check sees this-frame positions for karts
/// earlier in the roster and last-frame positions for later ones, so the
/// update order is part of the simulation's reproducibility contract.
pub struct RaceSimulation {
    track: TrackModel,
    karts: Vec<Kart>,
    coordinator: CollisionCoordinator,
}

impl RaceSimulation {
    pub fn new(track: TrackModel, karts: Vec<Kart>) -> Self {
        Self {
            track,
            karts,
            coordinator: CollisionCoordinator::new(),
        }
    }

    /// Reference roster: the player kart on centerline point 0 flanked by
    /// two AI karts on the grid behind it.
    pub fn standard_race() -> Self {
        let track = TrackModel::new();
        let grid = track.point(0);
        let row = |dx: f32, dz: f32| Vec3::new(grid.x + dx, grid.y + RIDE_HEIGHT, grid.z + dz);
        let karts = vec![
            Kart::new("player", row(0.0, 0.0), Controller::Player),
            Kart::new("clutch", row(-2.0, 2.5), Controller::Ai(DrivingStyle::Aggressive)),
            Kart::new("breeze", row(-2.0, -2.5), Controller::Ai(DrivingStyle::Cautious)),
        ];
        Self::new(track, karts)
    }

    pub fn track(&self) -> &TrackModel {
        &self.track
    }

    pub fn karts(&self) -> &[Kart] {
        &self.karts
    }

    pub fn kart(&self, id: &str) -> Option<&Kart> {
        self.karts.iter().find(|k| k.id == id)
    }

    pub fn kart_mut(&mut self, id: &str) -> Option<&mut Kart> {
        self.karts.iter_mut().find(|k| k.id == id)
    }

    /// Advance the whole race by one frame. `intents` feeds the player
    /// karts (a missing entry means no input); AI karts steer themselves.
    pub fn advance(
        &mut self,
        dt: f32,
        intents: &HashMap<String, ControlIntent>,
    ) -> Vec<KartSnapshot> {
        for index in 0..self.karts.len() {
            let struck = self.step_kart(index, dt, intents);
            // the struck kart takes the damage, the mover takes none
            if let Some(victim) = struck {
                if let Some(other) = self.karts.iter_mut().find(|k| k.id == victim) {
                    other.take_damage();
                }
            }
        }
        self.karts.iter().map(KartSnapshot::capture).collect()
    }

    /// One kart's frame. Returns the id of a kart it ran into, if any.
    fn step_kart(
        &mut self,
        index: usize,
        dt: f32,
        intents: &HashMap<String, ControlIntent>,
    ) -> Option<String> {
        let kart = &mut self.karts[index];

        // Frozen karts only run their timers down
        if kart.pause_timer > 0.0 {
            kart.pause_timer = (kart.pause_timer - dt).max(0.0);
            return None;
        }
        if kart.stun_timer > 0.0 {
            kart.stun_timer = (kart.stun_timer - dt).max(0.0);
            return None;
        }

        let intent = match kart.controller {
            Controller::Player => intents.get(&kart.id).copied().unwrap_or_default(),
            Controller::Ai(style) => steer(
                style,
                kart.position,
                kart.orientation.angle,
                kart.velocity.linear,
                &mut kart.nearest_index,
                &self.track,
            ),
        };

        apply_physics(&mut kart.velocity, &mut kart.orientation, &intent, dt);
        let tentative = displace(kart.position, &kart.orientation, &kart.velocity);

        // Off the track: recover to the centerline and end the frame here,
        // leaving the published position as it was
        if !self.track.is_within_bounds(tentative.x, tentative.z) {
            kart.reset_to_track_center(&self.track);
            return None;
        }

        // Into another kart: hold position, keep the velocity and heading
        // the integration just produced
        let struck = self
            .coordinator
            .check_collision(&kart.id, tentative)
            .map(str::to_owned);
        if struck.is_none() {
            kart.position.x = tentative.x;
            kart.position.z = tentative.z;
        }

        // Ride the surface; no vertical physics
        kart.position.y = self.track.height_at(kart.position.x, kart.position.z) + RIDE_HEIGHT;
        let (_, roll) =
            self.track
                .slope_at(kart.position.x, kart.position.z, kart.orientation.angle);
        kart.roll = roll;

        self.coordinator.publish(&kart.id, kart.position);

        kart.nearest_index = self
            .track
            .nearest_index(kart.position.x, kart.position.z)
            .0;
        let checkpoint = checkpoint_for(kart.nearest_index, self.track.len());
        kart.lap_counter.observe(checkpoint);

        struck
    }

    /// Race standings: most laps first, ties broken by distance along the
    /// centerline.
    pub fn leaderboard(&self) -> Vec<&str> {
        let mut order: Vec<&Kart> = self.karts.iter().collect();
        order.sort_by(|a, b| {
            (b.lap_counter.laps, b.nearest_index).cmp(&(a.lap_counter.laps, a.nearest_index))
        });
        order.into_iter().map(|k| k.id.as_str()).collect()
    }
}
