use bevy::prelude::*;

#[derive(Component, Clone, Debug)]
pub struct Orientation {
    pub angle: f32, // radians, 0 = facing +z
}

impl Orientation {
    pub fn new(angle: f32) -> Self {
        Self { angle }
    }

    pub fn forward_vector(&self) -> Vec3 {
        Vec3::new(self.angle.sin(), 0.0, self.angle.cos())
    }
}

#[derive(Component, Clone, Debug, Default)]
pub struct Velocity {
    /// Signed ground speed in units per frame, forward positive.
    pub linear: f32,
    /// Signed turn rate in radians per frame.
    pub angular: f32,
}

impl Velocity {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn zero(&mut self) {
        self.linear = 0.0;
        self.angular = 0.0;
    }
}
