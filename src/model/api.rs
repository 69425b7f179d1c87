use serde::{Deserialize, Deserializer, Serialize};

/// The response when an error occurs with an API request
#[derive(Serialize, Deserialize, Debug, utoipa::ToSchema)]
pub struct ErrorDto {
    /// The error message
    pub error: String,
}

/// The response for operations which only report success, such as deletions
#[derive(Serialize, Deserialize, Debug, utoipa::ToSchema)]
pub struct SuccessDto {
    pub success: bool,
}

impl SuccessDto {
    pub fn ok() -> Self {
        Self { success: true }
    }
}

/// Deserializes a field which may be absent, explicitly `null`, or set.
///
/// Use together with `#[serde(default)]`: an absent field stays `None`, `null`
/// becomes `Some(None)` and a value becomes `Some(Some(value))`.
pub fn deserialize_nullable<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
