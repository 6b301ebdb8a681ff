pub mod name;

use self::name::FoodName;

/// Body of `POST /api/Food/Create`.
#[derive(serde::Serialize, Debug, Clone)]
pub struct NewFood {
    #[serde(rename = "Name")]
    pub name: FoodName,
    #[serde(rename = "Description", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl NewFood {
    pub fn new(name: FoodName, description: impl Into<String>) -> Self {
        Self {
            name,
            description: Some(description.into()),
        }
    }
}
