//! Damped spring used to ease the offset back inside the pan boundary.

use crate::constants::{SPRING_MAX_DT_SEC, SPRING_SETTLE_DISTANCE, SPRING_SETTLE_SPEED};
use glam::Vec2;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OffsetSpring {
    pub position: Vec2,
    pub velocity: Vec2,
    pub target: Vec2,
    omega: f32,
    damping_ratio: f32,
}

impl OffsetSpring {
    pub fn new(from: Vec2, target: Vec2, omega: f32, damping_ratio: f32) -> Self {
        Self {
            position: from,
            velocity: Vec2::ZERO,
            target,
            omega,
            damping_ratio,
        }
    }

    #[inline]
    pub fn is_settled(&self) -> bool {
        self.position.distance(self.target) < SPRING_SETTLE_DISTANCE
            && self.velocity.length() < SPRING_SETTLE_SPEED
    }

    /// Advance by `dt_sec` (clamped so a suspended tab cannot blow up the
    /// integration). Returns `true` once the spring has settled, at which
    /// point `position` equals `target` exactly.
    pub fn step(&mut self, dt_sec: f32) -> bool {
        let dt = dt_sec.clamp(0.0, SPRING_MAX_DT_SEC);
        let k = self.omega * self.omega;
        let c = 2.0 * self.omega * self.damping_ratio;
        let accel = (self.target - self.position) * k - self.velocity * c;
        self.velocity += accel * dt;
        self.position += self.velocity * dt;
        if self.is_settled() {
            self.position = self.target;
            self.velocity = Vec2::ZERO;
            return true;
        }
        false
    }
}
