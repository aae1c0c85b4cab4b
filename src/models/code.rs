//! Hierarchical grid code.

use serde::{Deserialize, Serialize};

/// Digit code for the finest cell containing a point.
///
/// Each segment pairs one latitude digit with one longitude digit at the
/// same decimal place. The segments are built from absolute values, so a
/// point and its mirror through the origin (`-lat`, `-lon`) share a code.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridCode {
    /// Second decimal place
    pub c2d: String,
    /// Third decimal place
    pub c4d: String,
    /// Fourth decimal place
    pub c6d: String,
    /// First decimal place, used to tell broad localities apart
    pub locality_suffix: String,
}

impl GridCode {
    /// Code with the locality digits appended, e.g. `50-61-38-75`
    pub fn with_suffix(&self) -> String {
        format!("{}-{}", self, self.locality_suffix)
    }

    pub fn segments(&self) -> [&str; 3] {
        [&self.c2d, &self.c4d, &self.c6d]
    }
}

impl std::fmt::Display for GridCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}-{}", self.c2d, self.c4d, self.c6d)
    }
}
