//! Stock snapshot aggregate: raw records, view models, chart points and the rules between them.

pub mod entities;
pub mod repositories;
pub mod services;
pub mod synthetic;
pub mod value_objects;

pub use entities::*;
pub use repositories::*;
pub use synthetic::{CandleGenerator, RandomSource};
pub use value_objects::*;
