//! Particle/spring arena for one running scene.
//!
//! The cloth exclusively owns its particles and springs. Springs refer
//! to particles by index, and the particle count is fixed for the
//! lifetime of the cloth.

use drape_math::Vec3;
use drape_types::{DrapeError, DrapeResult, ParticleId, Scalar, SpringId};

use crate::particle::Particle;
use crate::spring::Spring;

/// All particles and springs of a simulated cloth.
#[derive(Debug, Clone)]
pub struct Cloth {
    particles: Vec<Particle>,
    springs: Vec<Spring>,
    /// Grid columns, or the particle count for non-grid cloths.
    cols: usize,
    /// Grid rows, or 1 for non-grid cloths.
    rows: usize,
}

impl Cloth {
    /// Builds a cloth from loose particles and springs.
    ///
    /// Every spring endpoint must refer to an existing particle.
    pub fn new(particles: Vec<Particle>, springs: Vec<Spring>) -> DrapeResult<Self> {
        let cols = particles.len();
        Self::with_dims(particles, springs, cols, 1)
    }

    /// Builds a cloth whose particles form a `rows × cols` row-major grid.
    pub fn with_dims(
        particles: Vec<Particle>,
        springs: Vec<Spring>,
        cols: usize,
        rows: usize,
    ) -> DrapeResult<Self> {
        let count = particles.len();
        if cols.checked_mul(rows) != Some(count) {
            return Err(DrapeError::InvalidGrid(format!(
                "{rows}x{cols} grid does not match {count} particles"
            )));
        }
        for spring in &springs {
            for id in [spring.a, spring.b] {
                if id.index() >= count {
                    return Err(DrapeError::ParticleOutOfBounds { index: id.index(), count });
                }
            }
        }
        Ok(Self { particles, springs, cols, rows })
    }

    #[inline]
    pub fn particle_count(&self) -> usize {
        self.particles.len()
    }

    #[inline]
    pub fn spring_count(&self) -> usize {
        self.springs.len()
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    #[inline]
    pub fn particles_mut(&mut self) -> &mut [Particle] {
        &mut self.particles
    }

    #[inline]
    pub fn springs(&self) -> &[Spring] {
        &self.springs
    }

    /// Splits the arena into read-only springs and mutable particles.
    #[inline]
    pub fn split_mut(&mut self) -> (&[Spring], &mut [Particle]) {
        (&self.springs, &mut self.particles)
    }

    pub fn particle(&self, id: ParticleId) -> DrapeResult<&Particle> {
        let count = self.particles.len();
        self.particles
            .get(id.index())
            .ok_or(DrapeError::ParticleOutOfBounds { index: id.index(), count })
    }

    pub fn particle_mut(&mut self, id: ParticleId) -> DrapeResult<&mut Particle> {
        let count = self.particles.len();
        self.particles
            .get_mut(id.index())
            .ok_or(DrapeError::ParticleOutOfBounds { index: id.index(), count })
    }

    #[inline]
    pub fn spring(&self, id: SpringId) -> Option<&Spring> {
        self.springs.get(id.index())
    }

    /// Handle of the particle at grid cell (`row`, `col`).
    pub fn grid_id(&self, row: usize, col: usize) -> Option<ParticleId> {
        (row < self.rows && col < self.cols).then(|| ParticleId::from(row * self.cols + col))
    }

    /// Position of the particle at grid cell (`row`, `col`).
    pub fn grid_position(&self, row: usize, col: usize) -> Option<Vec3> {
        self.grid_id(row, col).map(|id| self.particles[id.index()].position)
    }

    /// Read-only iterator over particle positions, in index order.
    pub fn positions(&self) -> impl Iterator<Item = Vec3> + '_ {
        self.particles.iter().map(|p| p.position)
    }

    /// Read-only iterator over particle velocities, in index order.
    pub fn velocities(&self) -> impl Iterator<Item = Vec3> + '_ {
        self.particles.iter().map(|p| p.velocity)
    }

    /// Spring endpoint positions, for line rendering.
    pub fn segments(&self) -> impl Iterator<Item = (Vec3, Vec3)> + '_ {
        self.springs.iter().map(|s| {
            (
                self.particles[s.a.index()].position,
                self.particles[s.b.index()].position,
            )
        })
    }

    /// Total kinetic energy with unit particle mass: 0.5 * Σ |v|².
    pub fn kinetic_energy(&self) -> Scalar {
        self.particles
            .iter()
            .filter(|p| !p.locked)
            .map(|p| 0.5 * p.velocity.length_squared())
            .sum()
    }

    /// Total linear momentum with unit particle mass.
    pub fn momentum(&self) -> Vec3 {
        self.particles.iter().map(|p| p.velocity).sum()
    }

    pub fn locked_count(&self) -> usize {
        self.particles.iter().filter(|p| p.locked).count()
    }

    /// Particles flagged inside a collider during the last substep.
    pub fn inside_count(&self) -> usize {
        self.particles.iter().filter(|p| p.is_inside()).count()
    }
}

/// Mutable access to two distinct particles of the same slice.
pub fn pair_mut(
    particles: &mut [Particle],
    a: ParticleId,
    b: ParticleId,
) -> Option<(&mut Particle, &mut Particle)> {
    let (i, j) = (a.index(), b.index());
    if i == j || i >= particles.len() || j >= particles.len() {
        return None;
    }
    if i < j {
        let (lo, hi) = particles.split_at_mut(j);
        Some((&mut lo[i], &mut hi[0]))
    } else {
        let (lo, hi) = particles.split_at_mut(i);
        Some((&mut hi[0], &mut lo[j]))
    }
}
