//! Regular cloth grid generator.
//!
//! Produces a `rows × cols` particle grid in the XY plane with
//! structural springs to the left and upper neighbours and, unless the
//! cloth is soft, shear springs to both upper diagonals.

use serde::{Deserialize, Serialize};

use drape_math::Vec3;
use drape_types::constants::{DEFAULT_DAMPING, DEFAULT_REST_LENGTH, DEFAULT_SPACING, MAX_PARTICLES};
use drape_types::{DrapeError, DrapeResult, ParticleId, Scalar};

use crate::cloth::Cloth;
use crate::particle::Particle;
use crate::spring::{Spring, SpringKind};

/// How spring rest lengths are chosen.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RestLength {
    /// Structural springs rest at this length, diagonals at `length * √2`,
    /// independently of the particle spacing.
    Fixed(Scalar),
    /// Rest length is the true distance between the endpoints at build time.
    Measured,
}

impl RestLength {
    /// Fixed structural rest length of 20 units, independent of spacing.
    pub fn classic() -> Self {
        Self::Fixed(DEFAULT_REST_LENGTH)
    }
}

/// Which particles start locked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PinPattern {
    /// First column of the first and last row.
    LeftCorners,
    /// The whole first column.
    LeftEdge,
    /// The whole first row.
    TopRow,
    /// Nothing is locked.
    None,
}

impl PinPattern {
    fn is_pinned(self, row: usize, col: usize, rows: usize) -> bool {
        match self {
            PinPattern::LeftCorners => col == 0 && (row == 0 || row + 1 == rows),
            PinPattern::LeftEdge => col == 0,
            PinPattern::TopRow => row == 0,
            PinPattern::None => false,
        }
    }
}

/// Geometry of a generated cloth grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridParams {
    /// Particles per row.
    pub cols: usize,
    /// Number of rows.
    pub rows: usize,
    /// Distance between neighbouring particles.
    pub spacing: Scalar,
    /// Position of particle (0, 0).
    #[serde(default)]
    pub origin: Vec3,
    #[serde(default = "default_rest_length")]
    pub rest_length: RestLength,
    #[serde(default = "default_pinning")]
    pub pinning: PinPattern,
    /// Per-particle velocity damping.
    #[serde(default = "default_damping")]
    pub damping: Scalar,
}

fn default_rest_length() -> RestLength {
    RestLength::Measured
}

fn default_pinning() -> PinPattern {
    PinPattern::LeftCorners
}

fn default_damping() -> Scalar {
    DEFAULT_DAMPING
}

impl Default for GridParams {
    fn default() -> Self {
        Self {
            cols: 20,
            rows: 10,
            spacing: DEFAULT_SPACING,
            origin: Vec3::ZERO,
            rest_length: default_rest_length(),
            pinning: default_pinning(),
            damping: default_damping(),
        }
    }
}

impl GridParams {
    /// Creates grid parameters with default origin, rest lengths and pinning.
    pub fn new(cols: usize, rows: usize, spacing: Scalar) -> Self {
        Self {
            cols,
            rows,
            spacing,
            ..Default::default()
        }
    }

    pub fn with_origin(mut self, origin: Vec3) -> Self {
        self.origin = origin;
        self
    }

    pub fn with_rest_length(mut self, rest_length: RestLength) -> Self {
        self.rest_length = rest_length;
        self
    }

    pub fn with_pinning(mut self, pinning: PinPattern) -> Self {
        self.pinning = pinning;
        self
    }

    /// Checks dimensions, particle count, spacing and rest length.
    pub fn validate(&self) -> DrapeResult<()> {
        if self.cols == 0 || self.rows == 0 {
            return Err(DrapeError::InvalidGrid(format!(
                "grid must have at least one row and column, got {}x{}",
                self.rows, self.cols
            )));
        }
        match self.cols.checked_mul(self.rows) {
            Some(count) if count <= MAX_PARTICLES => {}
            _ => {
                return Err(DrapeError::InvalidGrid(format!(
                    "{}x{} grid exceeds the limit of {MAX_PARTICLES} particles",
                    self.rows, self.cols
                )))
            }
        }
        if !(self.spacing > 0.0 && self.spacing.is_finite()) {
            return Err(DrapeError::InvalidGrid(format!(
                "spacing must be positive, got {}",
                self.spacing
            )));
        }
        if let RestLength::Fixed(len) = self.rest_length {
            if !(len > 0.0 && len.is_finite()) {
                return Err(DrapeError::InvalidGrid(format!(
                    "fixed rest length must be positive, got {len}"
                )));
            }
        }
        if !(0.0..=1.0).contains(&self.damping) {
            return Err(DrapeError::InvalidGrid(format!(
                "damping must be in [0, 1], got {}",
                self.damping
            )));
        }
        Ok(())
    }

    /// Number of springs [`build_grid`] will create.
    pub fn spring_count(&self, soft: bool) -> usize {
        let (c, r) = (self.cols, self.rows);
        let structural = r * c.saturating_sub(1) + c * r.saturating_sub(1);
        let shear = if soft {
            0
        } else {
            2 * r.saturating_sub(1) * c.saturating_sub(1)
        };
        structural + shear
    }
}

/// Generates the particle grid and its springs.
///
/// Particle (`row`, `col`) sits at `origin + (col·spacing, row·spacing, 0)`
/// with index `row·cols + col`. Each particle is linked to its left and
/// upper neighbour and, when `soft` is false, to its upper-left and
/// upper-right diagonal neighbours.
pub fn build_grid(params: &GridParams, soft: bool) -> DrapeResult<Cloth> {
    params.validate()?;

    let GridParams { cols, rows, spacing, origin, rest_length, pinning, damping } = *params;

    let mut particles = Vec::with_capacity(cols * rows);
    for row in 0..rows {
        for col in 0..cols {
            let position = origin + Vec3::new(col as Scalar * spacing, row as Scalar * spacing, 0.0);
            let mut particle = if pinning.is_pinned(row, col, rows) {
                Particle::locked(position)
            } else {
                Particle::new(position)
            };
            particle.damping = damping;
            particles.push(particle);
        }
    }

    let index = |row: usize, col: usize| ParticleId::from(row * cols + col);
    let rest = |a: ParticleId, b: ParticleId, kind: SpringKind| match (rest_length, kind) {
        (RestLength::Fixed(len), SpringKind::Structural) => len,
        (RestLength::Fixed(len), SpringKind::Shear) => (len * len + len * len).sqrt(),
        (RestLength::Measured, _) => particles[a.index()]
            .position
            .distance(particles[b.index()].position),
    };

    let mut springs = Vec::with_capacity(params.spring_count(soft));
    for row in 0..rows {
        for col in 0..cols {
            let here = index(row, col);
            let mut neighbours = Vec::with_capacity(4);

            if col > 0 {
                neighbours.push((index(row, col - 1), SpringKind::Structural));
            }
            if row > 0 {
                neighbours.push((index(row - 1, col), SpringKind::Structural));
                if !soft {
                    if col > 0 {
                        neighbours.push((index(row - 1, col - 1), SpringKind::Shear));
                    }
                    if col + 1 < cols {
                        neighbours.push((index(row - 1, col + 1), SpringKind::Shear));
                    }
                }
            }

            for (other, kind) in neighbours {
                springs.push(Spring::new(here, other, rest(here, other, kind), kind)?);
            }
        }
    }

    Cloth::with_dims(particles, springs, cols, rows)
}
