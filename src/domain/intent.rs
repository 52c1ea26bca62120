// ============================================================
// Layer 3 — Intent Labels
// ============================================================
// The intent column is filled in by an external LLM labelling
// step. This enum is the closed set that step may emit; anything
// else collapses to GeneralQuery.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    Greeting,
    Pricing,
    Setup,
    Troubleshooting,
    FeatureInformation,
    #[default]
    GeneralQuery,
}

impl Intent {
    pub const ALL: [Intent; 6] = [
        Intent::Greeting,
        Intent::Pricing,
        Intent::Setup,
        Intent::Troubleshooting,
        Intent::FeatureInformation,
        Intent::GeneralQuery,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Intent::Greeting           => "greeting",
            Intent::Pricing            => "pricing",
            Intent::Setup              => "setup",
            Intent::Troubleshooting    => "troubleshooting",
            Intent::FeatureInformation => "feature_information",
            Intent::GeneralQuery       => "general_query",
        }
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a label is outside the known set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownIntent(pub String);

impl fmt::Display for UnknownIntent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown intent label '{}'", self.0)
    }
}

impl std::error::Error for UnknownIntent {}

impl FromStr for Intent {
    type Err = UnknownIntent;

    /// Case-insensitive, surrounding whitespace ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let label = s.trim().to_lowercase();
        Intent::ALL
            .into_iter()
            .find(|intent| intent.as_str() == label)
            .ok_or_else(|| UnknownIntent(s.to_string()))
    }
}
