use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Result of a theme retrieval
///
/// The API returns features under `SrchResults`, whose first element is a
/// metadata record describing the theme.
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum ThemeResults {
    /// Metadata record split from the remaining features
    Split {
        /// First element of `SrchResults`
        metadata: Value,
        /// Remaining elements of `SrchResults`
        results: Vec<Value>,
    },
    /// Response without a non-empty `SrchResults` array, unchanged
    Raw(Value),
}

impl ThemeResults {
    /// Splits a raw `retrieveTheme` response
    pub fn from_response(mut response: Value) -> Self {
        if let Some(Value::Array(items)) = response.get_mut("SrchResults") {
            if !items.is_empty() {
                let mut results = std::mem::take(items);
                let metadata = results.remove(0);
                return ThemeResults::Split { metadata, results };
            }
        }
        ThemeResults::Raw(response)
    }

    /// Metadata record, if the response was split
    pub fn metadata(&self) -> Option<&Value> {
        match self {
            ThemeResults::Split { metadata, .. } => Some(metadata),
            ThemeResults::Raw(_) => None,
        }
    }

    /// Feature records, empty for a raw response
    pub fn results(&self) -> &[Value] {
        match self {
            ThemeResults::Split { results, .. } => results,
            ThemeResults::Raw(_) => &[],
        }
    }
}
