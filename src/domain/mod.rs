//! Domain Layer
//!
//! Configuration entities, the version registry, and the ports the
//! application layer depends on.

pub mod entities;
pub mod error;
pub mod ports;
pub mod schema;
pub mod services;
pub mod value_objects;
