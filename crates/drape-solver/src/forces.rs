//! External force sources sampled once per frame.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use drape_math::Vec3;
use drape_types::Scalar;

/// Supplies an external force for a frame.
pub trait ForceProvider {
    fn force(&mut self, frame: u64) -> Vec3;
}

/// The same force every frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConstantForce(pub Vec3);

impl ForceProvider for ConstantForce {
    fn force(&mut self, _frame: u64) -> Vec3 {
        self.0
    }
}

/// Wind blowing along +x with random gusts in y and z.
///
/// With positive strength each frame yields
/// `(strength, U(-0.1, 0.1), U(-0.5, 0.5))`; otherwise zero.
#[derive(Debug, Clone)]
pub struct GustyWind {
    strength: Scalar,
    rng: StdRng,
}

impl GustyWind {
    /// Seeded wind, reproducible across runs.
    pub fn new(strength: Scalar, seed: u64) -> Self {
        Self {
            strength,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn strength(&self) -> Scalar {
        self.strength
    }

    pub fn set_strength(&mut self, strength: Scalar) {
        self.strength = strength;
    }
}

impl ForceProvider for GustyWind {
    fn force(&mut self, _frame: u64) -> Vec3 {
        if self.strength <= 0.0 {
            return Vec3::ZERO;
        }
        Vec3::new(
            self.strength,
            self.rng.gen_range(-0.1..=0.1),
            self.rng.gen_range(-0.5..=0.5),
        )
    }
}
