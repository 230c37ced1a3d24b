use crate::utils::Float;
use serde::{Deserialize, Serialize};

/// Represents a single delivery order: the unit of planning.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Unique order id.
    pub id: String,
    /// Destination postcode.
    pub postcode: String,
    /// Destination city, used to name tours.
    pub city: String,
    /// Order weight, same unit as vehicle capacity.
    pub weight: Float,
    /// Optional name shown to users instead of the id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
}

impl Order {
    /// Creates a new instance of `Order` without display name.
    pub fn new(id: &str, postcode: &str, city: &str, weight: Float) -> Self {
        Self {
            id: id.to_string(),
            postcode: postcode.to_string(),
            city: city.to_string(),
            weight,
            display_name: None,
        }
    }

    /// Returns display name if specified, otherwise id.
    pub fn label(&self) -> &str {
        self.display_name.as_deref().unwrap_or(self.id.as_str())
    }
}
