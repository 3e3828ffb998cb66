//! Arena simulation module
//!
//! All simulation state lives here. This module must stay pure:
//! - Seeded RNG only
//! - Stable iteration order (population index)
//! - No rendering or platform dependencies

pub mod arena;
pub mod displacement;
pub mod entity;

pub use arena::{Arena, Steppable, default_population};
pub use displacement::{ConstantDisplacement, DisplacementSource, RandomWalk};
pub use entity::{Entity, Role, Team};
