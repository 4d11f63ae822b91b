use serde::Deserialize;

/// Name search form. An absent or empty term matches everything.
#[derive(Deserialize, utoipa::ToSchema)]
pub struct SearchRequest {
    #[serde(default)]
    #[schema(example = "hop")]
    pub search_term: String,
}
