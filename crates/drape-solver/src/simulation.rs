//! The frame stepper.

use std::time::Instant;

use tracing::debug;

use drape_cloth::cloth::pair_mut;
use drape_cloth::{spring_force, Cloth, Particle, SpringForce};
use drape_contact::{
    collide_edges, collide_particle, Collide, Collider, ContactPhase, ContactResult, ShapeRenderer,
};
use drape_scene::{validate_scene, SceneConfig};
use drape_types::{DrapeResult, Scalar};

use crate::config::SimulationConfig;

/// Result of one frame.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StepResult {
    /// Index of the frame that was stepped.
    pub frame: u64,
    /// Substeps performed. Zero when paused.
    pub substeps: u32,
    /// Per-particle contacts, summed over substeps.
    pub particle_contacts: ContactResult,
    /// Spring-edge contacts, summed over substeps.
    pub edge_contacts: ContactResult,
    /// Spring evaluations skipped for coincident endpoints.
    pub degenerate_springs: u32,
    /// Wall-clock time for this frame (seconds).
    pub wall_time: f64,
    pub paused: bool,
}

impl StepResult {
    /// Total contacts of both kinds.
    pub fn contact_count(&self) -> u32 {
        self.particle_contacts.resolved_count + self.edge_contacts.resolved_count
    }

    /// Deepest penetration of either kind.
    pub fn max_penetration(&self) -> Scalar {
        self.particle_contacts
            .max_penetration
            .max(self.edge_contacts.max_penetration)
    }
}

/// A cloth and the colliders it interacts with.
///
/// The simulation exclusively owns its particles and springs; colliders
/// are read-only while stepping.
#[derive(Debug, Clone)]
pub struct Simulation {
    cloth: Cloth,
    colliders: Vec<Collider>,
    frame: u64,
}

impl Simulation {
    pub fn new(cloth: Cloth, colliders: Vec<Collider>) -> Self {
        Self {
            cloth,
            colliders,
            frame: 0,
        }
    }

    /// Validates the scene and builds its cloth.
    pub fn from_scene(scene: &SceneConfig) -> DrapeResult<Self> {
        validate_scene(scene)?;
        let cloth = scene.build_cloth()?;
        debug!(
            scene = %scene.name,
            particles = cloth.particle_count(),
            springs = cloth.spring_count(),
            colliders = scene.colliders.len(),
            "built simulation"
        );
        Ok(Self::new(cloth, scene.colliders.clone()))
    }

    pub fn cloth(&self) -> &Cloth {
        &self.cloth
    }

    pub fn cloth_mut(&mut self) -> &mut Cloth {
        &mut self.cloth
    }

    pub fn colliders(&self) -> &[Collider] {
        &self.colliders
    }

    /// Frames stepped so far. Paused frames do not count.
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Hands every collider's geometry to `renderer`.
    pub fn draw_colliders(&self, renderer: &mut dyn ShapeRenderer) {
        for collider in &self.colliders {
            collider.draw(renderer);
        }
    }

    /// Advances the cloth by one frame.
    ///
    /// The run mode is checked before anything is mutated; a paused
    /// step returns immediately with `paused` set.
    pub fn step(&mut self, config: &SimulationConfig) -> StepResult {
        let start = Instant::now();

        if config.is_paused() {
            return StepResult {
                frame: self.frame,
                paused: true,
                ..Default::default()
            };
        }

        let substeps = config.sub_steps.max(1);
        let inv = 1.0 / Scalar::from(substeps);
        let k = config.spring_constant * inv;
        let gravity = config.gravity * inv;
        let wind = config.wind * inv;

        let mut result = StepResult {
            frame: self.frame,
            substeps,
            ..Default::default()
        };

        let (springs, particles) = self.cloth.split_mut();
        for _ in 0..substeps {
            particles.iter_mut().for_each(Particle::begin_substep);

            for spring in springs {
                let Some((a, b)) = pair_mut(particles, spring.a, spring.b) else {
                    continue;
                };
                if spring_force(a, b, spring.rest_length, k, config.max_spring_force)
                    == SpringForce::Degenerate
                {
                    result.degenerate_springs += 1;
                }
            }

            for particle in particles.iter_mut().filter(|p| !p.locked) {
                particle.apply_force(gravity);
                particle.apply_force(wind);
                collide_particle(
                    particle,
                    &self.colliders,
                    ContactPhase::Swept,
                    &mut result.particle_contacts,
                );
                particle.integrate(config.contact_damping);
                collide_particle(
                    particle,
                    &self.colliders,
                    ContactPhase::Discrete,
                    &mut result.particle_contacts,
                );
            }

            if config.edge_collision {
                collide_edges(particles, springs, &self.colliders, &mut result.edge_contacts);
            }
        }

        self.frame += 1;
        result.wall_time = start.elapsed().as_secs_f64();
        result
    }

    /// Steps `frames` frames with a fixed configuration.
    pub fn run(&mut self, config: &SimulationConfig, frames: u64) -> Vec<StepResult> {
        (0..frames).map(|_| self.step(config)).collect()
    }
}
