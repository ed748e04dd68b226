use serde::{Deserialize, Serialize};

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Work {
    #[serde(alias = "bwv")]
    pub catalog_id: String,
    pub title: String,
    #[serde(
        default,
        alias = "germanTitle",
        skip_serializing_if = "Option::is_none"
    )]
    pub localized_title: Option<String>,
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year_composed: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instrumentation: Option<String>,
    #[serde(default, alias = "movements", skip_serializing_if = "Option::is_none")]
    pub movement_count: Option<u32>,
    #[serde(default, alias = "duration", skip_serializing_if = "Option::is_none")]
    pub duration_minutes: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(
        default,
        alias = "movementList",
        skip_serializing_if = "Option::is_none"
    )]
    pub movement_names: Option<Vec<String>>,

    /// Set at load time from the catalogue the work was read from.
    #[serde(default)]
    pub composer_id: String,
}

impl Work {
    /// Year used for ordering, with unknown years sorting first.
    pub fn sort_year(&self) -> i32 {
        self.year_composed.unwrap_or(0)
    }
}
