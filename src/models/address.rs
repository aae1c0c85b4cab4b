//! Address components, place candidates and the rendered label.

use serde::{Deserialize, Serialize};

/// Label used when neither service produced a name
pub const UNKNOWN_LOCATION: &str = "Unknown Location";

/// Component types consulted when building a label, in priority order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComponentType {
    /// City / town
    Locality,
    /// District
    #[serde(rename = "administrative_area_level_2")]
    AdminArea2,
    /// Region / state
    #[serde(rename = "administrative_area_level_1")]
    AdminArea1,
    Country,
}

impl ComponentType {
    /// Label priority, most specific first
    pub fn priority() -> &'static [ComponentType] {
        &[
            ComponentType::Locality,
            ComponentType::AdminArea2,
            ComponentType::AdminArea1,
            ComponentType::Country,
        ]
    }

    /// Provider type string
    pub fn as_str(&self) -> &'static str {
        match self {
            ComponentType::Locality => "locality",
            ComponentType::AdminArea2 => "administrative_area_level_2",
            ComponentType::AdminArea1 => "administrative_area_level_1",
            ComponentType::Country => "country",
        }
    }
}

/// One component of a reverse-geocode result
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressComponent {
    pub long_name: String,
    pub types: Vec<String>,
}

impl AddressComponent {
    pub fn new(long_name: &str, types: &[&str]) -> Self {
        Self {
            long_name: long_name.to_string(),
            types: types.iter().map(|t| t.to_string()).collect(),
        }
    }

    pub fn has_type(&self, ty: ComponentType) -> bool {
        self.types.iter().any(|t| t == ty.as_str())
    }
}

/// Place type requested from a proximity search
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlaceType {
    Neighborhood,
    Sublocality,
}

impl PlaceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PlaceType::Neighborhood => "neighborhood",
            PlaceType::Sublocality => "sublocality",
        }
    }
}

impl std::fmt::Display for PlaceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordering of proximity search results
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RankBy {
    Distance,
    Prominence,
}

/// A place search hit
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaceCandidate {
    pub name: Option<String>,
}

impl PlaceCandidate {
    pub fn named(name: &str) -> Self {
        Self {
            name: Some(name.to_string()),
        }
    }

    /// Non-empty name, if any
    pub fn usable_name(&self) -> Option<&str> {
        self.name.as_deref().filter(|n| !n.trim().is_empty())
    }
}

/// Three-line place label.
///
/// `suffix` is set by callers, never by the resolver.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressLabel {
    pub line1: String,
    pub line2: String,
    pub line3: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suffix: Option<String>,
}

impl AddressLabel {
    /// Label from up to three names, assigned by position
    pub fn from_names(names: &[String]) -> Self {
        let line = |i: usize| names.get(i).cloned().unwrap_or_default();
        Self {
            line1: line(0),
            line2: line(1),
            line3: line(2),
            suffix: None,
        }
    }

    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = Some(suffix.into());
        self
    }

    /// Third line with the suffix appended
    pub fn display_line3(&self) -> String {
        match self.suffix.as_deref() {
            Some(suffix) if self.line3.is_empty() => suffix.to_string(),
            Some(suffix) => format!("{} {}", self.line3, suffix),
            None => self.line3.clone(),
        }
    }

    pub fn lines(&self) -> [String; 3] {
        [self.line1.clone(), self.line2.clone(), self.display_line3()]
    }
}
