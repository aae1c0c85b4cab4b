//! Concurrent geocode + place search, joined and merged into a label.

use tracing::{debug, info, warn};

use super::merge::merge_label;
use super::service::{Geocoder, PlaceSearch};
use crate::models::{AddressComponent, AddressLabel, Coordinate, PlaceCandidate, PlaceType, RankBy};

/// Place types tried in order until one yields a named result
pub const PLACE_FALLBACK_CHAIN: [PlaceType; 2] = [PlaceType::Neighborhood, PlaceType::Sublocality];

/// Resolves a best-effort label for a snapped coordinate.
///
/// Service failures degrade the label but never fail the resolution.
#[derive(Debug, Clone)]
pub struct AddressResolver<G, P> {
    geocoder: G,
    places: P,
}

impl<G, P> AddressResolver<G, P>
where
    G: Geocoder,
    P: PlaceSearch,
{
    pub fn new(geocoder: G, places: P) -> Self {
        Self { geocoder, places }
    }

    /// Resolve the label for a point.
    ///
    /// Both lookups are dispatched before either is awaited, and the merge
    /// only runs once both have settled.
    pub async fn resolve(&self, at: Coordinate) -> AddressLabel {
        let components = self.components(at);
        let place = self.nearest_place(at);
        let (components, place) = tokio::join!(components, place);

        debug!(
            "Joined lookups at ({}): {} components, place {:?}",
            at,
            components.len(),
            place.as_ref().and_then(|p| p.name.as_deref())
        );

        let label = merge_label(place.as_ref(), &components);
        info!(
            "Resolved ({}) to [{} | {} | {}]",
            at, label.line1, label.line2, label.line3
        );
        label
    }

    /// Geocode components, empty on any failure
    async fn components(&self, at: Coordinate) -> Vec<AddressComponent> {
        match self.geocoder.reverse_geocode(at).await {
            Ok(components) => components,
            Err(e) => {
                warn!("Reverse geocode failed at ({}): {}", at, e);
                Vec::new()
            }
        }
    }

    /// First named place along the fallback chain, if any
    async fn nearest_place(&self, at: Coordinate) -> Option<PlaceCandidate> {
        for place_type in PLACE_FALLBACK_CHAIN {
            match self
                .places
                .nearby_search(at, place_type, RankBy::Distance)
                .await
            {
                Ok(results) => {
                    if let Some(first) = results.into_iter().next() {
                        if first.usable_name().is_some() {
                            return Some(first);
                        }
                    }
                    debug!("No {} near ({})", place_type, at);
                }
                Err(e) => {
                    warn!("Place search for {} failed at ({}): {}", place_type, at, e);
                }
            }
        }
        None
    }
}
