use serde::Deserialize;

/// Login response body. The token is optional so its absence can be
/// reported explicitly instead of failing deserialization.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub token: Option<String>,
}

/// One entry of a message listing. Every field is display-only and the
/// backend is not trusted to populate all of them.
#[derive(Debug, Clone, Deserialize)]
pub struct MessageRecord {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(rename = "createdAt", default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// One entry of the authenticated user's group listing. Only the
/// identifier is consumed; a listing without ids is unusable for the
/// workflow and treated as a failed listing.
#[derive(Debug, Clone, Deserialize)]
pub struct GroupSummary {
    pub id: i64,
}

/// Body of a successful create-group response.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatedGroup {
    pub id: i64,
}
