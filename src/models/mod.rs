//! Value types shared by the encoder, resolver and session.

pub mod address;
pub mod code;
pub mod coordinate;

pub use address::{
    AddressComponent, AddressLabel, ComponentType, PlaceCandidate, PlaceType, RankBy,
    UNKNOWN_LOCATION,
};
pub use code::GridCode;
pub use coordinate::{Coordinate, GridCell, Precision};
