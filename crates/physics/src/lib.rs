//! Physics/collision collaborator boundary.
//!
//! The simulation core never solves physics itself. It talks to an external
//! engine through [`PhysicsHost`]: registering collision volumes, applying
//! and removing forces, and running one synchronous collision traversal per
//! tick that delivers typed contact events back into the core.

pub mod collision;
pub mod host;

pub use collision::*;
pub use host::*;
