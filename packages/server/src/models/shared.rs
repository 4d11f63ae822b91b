use serde::{Deserialize, Deserializer};

use crate::error::AppError;

/// Validate a required text field (non-blank after trimming).
pub fn validate_required(field: &str, value: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::Validation(format!("{field} must not be blank")));
    }
    Ok(())
}

/// Trim an optional text field, collapsing blank input to `None`.
pub fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Trim genre labels and drop blank ones.
pub fn clean_genres(genres: Vec<String>) -> Vec<String> {
    genres
        .into_iter()
        .filter_map(|g| non_blank(Some(g)))
        .collect()
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawFlag {
    Bool(bool),
    Text(String),
}

/// Checkbox semantics for `seeking_*` flags.
///
/// * field absent or null => `false`
/// * string `"y"`         => `true`
/// * any other string     => `false`
/// * JSON boolean         => taken as-is
pub fn flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<RawFlag>::deserialize(deserializer)? {
        None => false,
        Some(RawFlag::Bool(b)) => b,
        Some(RawFlag::Text(s)) => s == "y",
    })
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawText {
    Int(i64),
    Float(f64),
    Bool(bool),
    Text(String),
}

/// Accept a JSON scalar or a string, keeping the textual form.
///
/// Show ids arrive as strings from form posts and as numbers from JSON
/// clients; both are parsed later by the show validator. Non-integer
/// numbers keep their fractional form (`5.0`) so they fail that parse.
pub fn text_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(
        Option::<RawText>::deserialize(deserializer)?.map(|raw| match raw {
            RawText::Int(n) => n.to_string(),
            RawText::Float(n) => format!("{n:?}"),
            RawText::Bool(b) => b.to_string(),
            RawText::Text(s) => s,
        }),
    )
}
