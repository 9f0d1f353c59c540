use serde::{Deserialize, Serialize};

use super::OneOrMany;

/// A security matched by `v1/markets/lookup`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Security {
    pub symbol: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exchange: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SecuritiesEnvelope {
    #[serde(default)]
    pub security: Option<OneOrMany<Security>>,
}

/// Top-level envelope for `v1/markets/lookup`. `securities` is null when
/// nothing matched the query.
#[derive(Debug, Deserialize)]
pub struct LookupResponse {
    #[serde(default)]
    pub securities: Option<SecuritiesEnvelope>,
}

impl LookupResponse {
    /// Matched securities as a flat list, whether the wire carried one or many.
    pub fn into_securities(self) -> Vec<Security> {
        self.securities
            .and_then(|s| s.security)
            .map(OneOrMany::into_vec)
            .unwrap_or_default()
    }
}
