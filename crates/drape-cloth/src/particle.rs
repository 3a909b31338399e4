//! Point mass with explicit per-substep bookkeeping.
//!
//! A particle carries no mass term: accumulated forces are applied
//! directly as a velocity increment when it is integrated.

use drape_math::Vec3;
use drape_types::constants::DEFAULT_DAMPING;
use drape_types::Scalar;

/// A cloth particle.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    /// Committed position.
    pub position: Vec3,
    /// Velocity in units per substep.
    pub velocity: Vec3,
    /// Pending acceleration, consumed and zeroed by [`Particle::integrate`].
    pub acceleration: Vec3,
    /// Locked particles ignore forces and are never integrated.
    pub locked: bool,
    /// Velocity damping applied on each integration.
    pub damping: Scalar,

    // ─── Transient, reset by begin_substep() ───
    integrated: bool,
    inside: bool,
}

impl Particle {
    /// Creates a free particle at rest.
    pub fn new(position: Vec3) -> Self {
        Self {
            position,
            velocity: Vec3::ZERO,
            acceleration: Vec3::ZERO,
            locked: false,
            damping: DEFAULT_DAMPING,
            integrated: false,
            inside: false,
        }
    }

    /// Creates a locked (pinned) particle.
    pub fn locked(position: Vec3) -> Self {
        Self {
            locked: true,
            ..Self::new(position)
        }
    }

    /// Sets the initial velocity.
    pub fn with_velocity(mut self, velocity: Vec3) -> Self {
        self.velocity = velocity;
        self
    }

    /// Adds `force` to the pending acceleration. No-op when locked.
    #[inline]
    pub fn apply_force(&mut self, force: Vec3) {
        if self.locked {
            return;
        }
        self.acceleration += force;
    }

    /// Velocity the next integration would produce, without committing it.
    #[inline]
    pub fn next_velocity(&self) -> Vec3 {
        (self.velocity + self.acceleration) * self.damping
    }

    /// Position the next integration would produce, without committing it.
    ///
    /// Swept colliders test the segment `position → next_point()`.
    #[inline]
    pub fn next_point(&self) -> Vec3 {
        self.position + self.next_velocity()
    }

    /// Clears the per-substep flags.
    #[inline]
    pub fn begin_substep(&mut self) {
        self.integrated = false;
        self.inside = false;
    }

    /// Advances the particle by one substep.
    ///
    /// `v += a; v *= damping; x += v; a = 0`. While the particle is
    /// flagged inside a collider, `contact_damping` (if set) replaces
    /// the free damping. Returns `false` without touching the particle
    /// if it is locked or was already integrated this substep.
    pub fn integrate(&mut self, contact_damping: Option<Scalar>) -> bool {
        if self.locked || self.integrated {
            return false;
        }

        let damping = match contact_damping {
            Some(d) if self.inside => d,
            _ => self.damping,
        };

        self.velocity += self.acceleration;
        self.velocity *= damping;
        self.position += self.velocity;
        self.acceleration = Vec3::ZERO;
        self.integrated = true;
        true
    }

    /// Removes velocity and pending acceleration pointing against `normal`.
    ///
    /// After this the next integration cannot move the particle further
    /// into a surface with outward unit normal `normal`.
    pub fn cancel_inward(&mut self, normal: Vec3) {
        let vn = self.velocity.dot(normal);
        if vn < 0.0 {
            self.velocity -= normal * vn;
        }
        let an = self.acceleration.dot(normal);
        if an < 0.0 {
            self.acceleration -= normal * an;
        }
    }

    #[inline]
    pub fn is_integrated(&self) -> bool {
        self.integrated
    }

    /// Flags the particle as touching a collider for this substep.
    #[inline]
    pub fn mark_inside(&mut self) {
        self.inside = true;
    }

    #[inline]
    pub fn is_inside(&self) -> bool {
        self.inside
    }
}
