//! Gridaddr - grid codes and place labels for map-click address registration
//!
//! This library provides the coordinate encoder, the address resolver and
//! the map session shared by the `locate` binary and UI front ends.

pub mod config;
pub mod error;
pub mod google;
pub mod grid;
pub mod models;
pub mod resolver;
pub mod session;

pub use error::{ConfigError, ServiceError};
pub use models::{AddressLabel, Coordinate, GridCell, GridCode, Precision};
pub use resolver::AddressResolver;
