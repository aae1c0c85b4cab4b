//! Google Maps web service response bodies.

use serde::Deserialize;

use crate::error::ServiceError;
use crate::models::{AddressComponent, PlaceCandidate};

/// Top-level `status` field of a web service response
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum ServiceStatus {
    Ok,
    ZeroResults,
    OverQueryLimit,
    RequestDenied,
    InvalidRequest,
    UnknownError,
    Other(String),
}

impl ServiceStatus {
    pub fn as_str(&self) -> &str {
        match self {
            ServiceStatus::Ok => "OK",
            ServiceStatus::ZeroResults => "ZERO_RESULTS",
            ServiceStatus::OverQueryLimit => "OVER_QUERY_LIMIT",
            ServiceStatus::RequestDenied => "REQUEST_DENIED",
            ServiceStatus::InvalidRequest => "INVALID_REQUEST",
            ServiceStatus::UnknownError => "UNKNOWN_ERROR",
            ServiceStatus::Other(s) => s,
        }
    }
}

impl From<String> for ServiceStatus {
    fn from(s: String) -> Self {
        match s.as_str() {
            "OK" => ServiceStatus::Ok,
            "ZERO_RESULTS" => ServiceStatus::ZeroResults,
            "OVER_QUERY_LIMIT" => ServiceStatus::OverQueryLimit,
            "REQUEST_DENIED" => ServiceStatus::RequestDenied,
            "INVALID_REQUEST" => ServiceStatus::InvalidRequest,
            "UNKNOWN_ERROR" => ServiceStatus::UnknownError,
            _ => ServiceStatus::Other(s),
        }
    }
}

impl std::fmt::Display for ServiceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `OK` and `ZERO_RESULTS` are successes; everything else is an error
fn check_status(
    service: &'static str,
    status: &ServiceStatus,
    error_message: Option<&str>,
) -> Result<(), ServiceError> {
    match status {
        ServiceStatus::Ok | ServiceStatus::ZeroResults => Ok(()),
        other => Err(ServiceError::Status {
            service,
            status: match error_message {
                Some(msg) => format!("{} ({})", other, msg),
                None => other.to_string(),
            },
        }),
    }
}

#[derive(Debug, Deserialize)]
pub struct GeocodeResponse {
    pub status: ServiceStatus,
    #[serde(default)]
    pub results: Vec<GeocodeResult>,
    #[serde(default)]
    pub error_message: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct GeocodeResult {
    #[serde(default)]
    pub address_components: Vec<RawComponent>,
}

#[derive(Debug, Deserialize)]
pub struct RawComponent {
    pub long_name: String,
    #[serde(default)]
    pub types: Vec<String>,
}

impl GeocodeResponse {
    /// Components of the first (most specific) result
    pub fn into_components(self) -> Result<Vec<AddressComponent>, ServiceError> {
        check_status("geocode", &self.status, self.error_message.as_deref())?;

        Ok(self
            .results
            .into_iter()
            .next()
            .map(|r| {
                r.address_components
                    .into_iter()
                    .map(|c| AddressComponent {
                        long_name: c.long_name,
                        types: c.types,
                    })
                    .collect()
            })
            .unwrap_or_default())
    }
}

#[derive(Debug, Deserialize)]
pub struct PlacesResponse {
    pub status: ServiceStatus,
    #[serde(default)]
    pub results: Vec<PlaceResult>,
    #[serde(default)]
    pub error_message: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct PlaceResult {
    #[serde(default)]
    pub name: Option<String>,
}

impl PlacesResponse {
    pub fn into_candidates(self) -> Result<Vec<PlaceCandidate>, ServiceError> {
        check_status("nearbysearch", &self.status, self.error_message.as_deref())?;

        Ok(self
            .results
            .into_iter()
            .map(|r| PlaceCandidate { name: r.name })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GEOCODE_OK: &str = r#"{
        "status": "OK",
        "results": [
            {
                "formatted_address": "Mogadishu, Somalia",
                "address_components": [
                    { "long_name": "Mogadishu", "short_name": "Mogadishu", "types": ["locality", "political"] },
                    { "long_name": "Banaadir", "short_name": "BN", "types": ["administrative_area_level_1", "political"] },
                    { "long_name": "Somalia", "short_name": "SO", "types": ["country", "political"] }
                ]
            },
            {
                "address_components": [
                    { "long_name": "Somalia", "types": ["country"] }
                ]
            }
        ]
    }"#;

    #[test]
    fn test_geocode_uses_first_result() {
        let response: GeocodeResponse = serde_json::from_str(GEOCODE_OK).unwrap();
        let components = response.into_components().unwrap();
        assert_eq!(components.len(), 3);
        assert_eq!(components[0].long_name, "Mogadishu");
        assert_eq!(components[1].types, vec!["administrative_area_level_1", "political"]);
    }

    #[test]
    fn test_zero_results_is_empty_not_error() {
        let response: GeocodeResponse =
            serde_json::from_str(r#"{ "status": "ZERO_RESULTS", "results": [] }"#).unwrap();
        assert!(response.into_components().unwrap().is_empty());

        let response: PlacesResponse =
            serde_json::from_str(r#"{ "status": "ZERO_RESULTS" }"#).unwrap();
        assert!(response.into_candidates().unwrap().is_empty());
    }

    #[test]
    fn test_denied_status_is_error() {
        let response: GeocodeResponse = serde_json::from_str(
            r#"{ "status": "REQUEST_DENIED", "error_message": "The provided API key is invalid." }"#,
        )
        .unwrap();
        match response.into_components() {
            Err(ServiceError::Status { service, status }) => {
                assert_eq!(service, "geocode");
                assert!(status.starts_with("REQUEST_DENIED"));
                assert!(status.contains("API key"));
            }
            other => panic!("expected status error, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_status_is_preserved() {
        let status: ServiceStatus = serde_json::from_str(r#""NOT_A_STATUS""#).unwrap();
        assert_eq!(status, ServiceStatus::Other("NOT_A_STATUS".to_string()));
        assert_eq!(status.to_string(), "NOT_A_STATUS");
    }

    #[test]
    fn test_places_names() {
        let response: PlacesResponse = serde_json::from_str(
            r#"{
                "status": "OK",
                "results": [
                    { "name": "Bondhere", "vicinity": "Mogadishu" },
                    { "vicinity": "nameless" }
                ]
            }"#,
        )
        .unwrap();
        let candidates = response.into_candidates().unwrap();
        assert_eq!(candidates[0], PlaceCandidate::named("Bondhere"));
        assert_eq!(candidates[1].name, None);
    }
}
