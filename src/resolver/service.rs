//! External lookup seams used by the resolver.

use std::future::Future;

use crate::error::ServiceError;
use crate::models::{AddressComponent, Coordinate, PlaceCandidate, PlaceType, RankBy};

/// Reverse geocoding provider
pub trait Geocoder {
    /// Address components for a point, most specific first
    fn reverse_geocode(
        &self,
        at: Coordinate,
    ) -> impl Future<Output = Result<Vec<AddressComponent>, ServiceError>> + Send;
}

/// Proximity place search provider
pub trait PlaceSearch {
    /// Places of the given type around a point
    fn nearby_search(
        &self,
        at: Coordinate,
        place_type: PlaceType,
        rank_by: RankBy,
    ) -> impl Future<Output = Result<Vec<PlaceCandidate>, ServiceError>> + Send;
}
