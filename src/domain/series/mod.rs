//! Backing data series: sample magnitudes, bounds and regeneration.

pub mod entities;
pub mod services;
pub mod value_objects;

pub use entities::*;
pub use services::*;
pub use value_objects::*;
