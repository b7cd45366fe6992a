//! Procedural asteroid field generation and maintenance.
//!
//! Space levels fly the avatar through an endless slab of drifting
//! asteroids. [`AsteroidField`] seeds the slab from the level number, culls
//! instances that fall out of view, and spawns fresh grid successions at the
//! leading edge as the avatar moves.

pub mod asteroid;
pub mod field;

pub use asteroid::*;
pub use field::*;
