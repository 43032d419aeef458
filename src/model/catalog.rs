use serde::{Deserialize, Serialize};

/// A named area listings belong to. Summary joins only carry `name`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Location {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PropertyType {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

impl Location {
    pub fn named(name: &str) -> Self {
        Location {
            name: name.to_string(),
            ..Default::default()
        }
    }
}

impl PropertyType {
    pub fn named(name: &str) -> Self {
        PropertyType {
            name: name.to_string(),
            ..Default::default()
        }
    }
}
