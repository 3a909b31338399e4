//! # drape-contact
//!
//! Collision detection and response against rigid primitive colliders.
//!
//! Every collider exposes the same three-part contract through the
//! [`Collide`] trait:
//! 1. **Check**: is the particle inside, or about to enter, the volume
//! 2. **Resolve**: remove penetration and the inward velocity
//! 3. **Draw**: hand geometry to an external renderer
//!
//! Sphere, cylinder and cone are *swept* colliders: they test the
//! particle's prospective path and run before integration. The box is
//! *discrete*: it tests committed positions after integration, and
//! additionally resolves spring edges crossing it (see [`edge`]).

pub mod box_collider;
pub mod collider;
pub mod cone;
pub mod cylinder;
pub mod edge;
pub mod pipeline;
pub mod render;
pub mod response;
pub mod sphere;

pub use box_collider::BoxCollider;
pub use collider::{Collide, Collider, Contact, ContactPhase, ResolutionMode};
pub use cone::ConeCollider;
pub use cylinder::CylinderCollider;
pub use pipeline::{collide_edges, collide_particle};
pub use render::{NullRenderer, ShapeRenderer};
pub use response::ContactResult;
pub use sphere::SphereCollider;
