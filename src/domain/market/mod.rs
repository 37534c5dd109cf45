//! Market aggregate: the asset book, its value objects, validation
//! services and the simulated live-update feed.

pub mod entities;
pub mod services;
pub mod simulator;
pub mod value_objects;

pub use entities::*;
pub use services::*;
pub use value_objects::*;
