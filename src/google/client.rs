//! HTTP client for the Google Maps Geocoding and Places web services.

use std::time::Duration;

use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use super::response::{GeocodeResponse, PlacesResponse};
use crate::error::{ConfigError, ServiceError};
use crate::models::{AddressComponent, Coordinate, PlaceCandidate, PlaceType, RankBy};
use crate::resolver::{Geocoder, PlaceSearch};

pub const DEFAULT_BASE_URL: &str = "https://maps.googleapis.com/maps/api/";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Search radius in meters when ranking by prominence (the API requires one)
const PROMINENCE_RADIUS_M: u32 = 1_000;

/// Google Maps web service client.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Clone)]
pub struct GoogleMapsClient {
    client: Client,
    base_url: Url,
    api_key: String,
}

impl std::fmt::Debug for GoogleMapsClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GoogleMapsClient")
            .field("base_url", &self.base_url.as_str())
            .finish_non_exhaustive()
    }
}

impl GoogleMapsClient {
    /// Create a client against `base_url` (normally [`DEFAULT_BASE_URL`])
    pub fn new(api_key: &str, base_url: &str, timeout: Duration) -> Result<Self, ConfigError> {
        let mut base = base_url.to_string();
        if !base.ends_with('/') {
            base.push('/');
        }

        let client = Client::builder()
            .user_agent(concat!("gridaddr/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()
            .map_err(ConfigError::HttpClient)?;

        Ok(Self {
            client,
            base_url: Url::parse(&base)?,
            api_key: api_key.to_string(),
        })
    }

    /// Endpoint URL with query parameters and the API key appended
    fn endpoint(&self, path: &str, params: &[(&str, String)]) -> Result<Url, ServiceError> {
        let mut url = self.base_url.join(path)?;
        url.query_pairs_mut()
            .extend_pairs(params.iter().map(|(k, v)| (*k, v.as_str())))
            .append_pair("key", &self.api_key);
        Ok(url)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        service: &'static str,
        url: Url,
    ) -> Result<T, ServiceError> {
        let response = self.client.get(url).send().await?;

        if !response.status().is_success() {
            return Err(ServiceError::Status {
                service,
                status: response.status().to_string(),
            });
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|source| ServiceError::Decode { service, source })
    }
}

fn latlng(at: Coordinate) -> String {
    format!("{},{}", at.lat, at.lon)
}

fn nearby_params(
    at: Coordinate,
    place_type: PlaceType,
    rank_by: RankBy,
) -> Vec<(&'static str, String)> {
    let mut params = vec![
        ("location", latlng(at)),
        ("type", place_type.as_str().to_string()),
    ];
    match rank_by {
        RankBy::Distance => params.push(("rankby", "distance".to_string())),
        RankBy::Prominence => params.push(("radius", PROMINENCE_RADIUS_M.to_string())),
    }
    params
}

impl Geocoder for GoogleMapsClient {
    async fn reverse_geocode(
        &self,
        at: Coordinate,
    ) -> Result<Vec<AddressComponent>, ServiceError> {
        let url = self.endpoint("geocode/json", &[("latlng", latlng(at))])?;
        debug!("Reverse geocoding ({})", at);

        let response: GeocodeResponse = self.get_json("geocode", url).await?;
        response.into_components()
    }
}

impl PlaceSearch for GoogleMapsClient {
    async fn nearby_search(
        &self,
        at: Coordinate,
        place_type: PlaceType,
        rank_by: RankBy,
    ) -> Result<Vec<PlaceCandidate>, ServiceError> {
        let params = nearby_params(at, place_type, rank_by);
        let url = self.endpoint("place/nearbysearch/json", &params)?;
        debug!("Nearby search for {} at ({})", place_type, at);

        let response: PlacesResponse = self.get_json("nearbysearch", url).await?;
        response.into_candidates()
    }
}
