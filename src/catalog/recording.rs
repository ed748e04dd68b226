use crate::query::eq_ignore_case;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Display value used when a recording lists no performer at all.
pub const VARIOUS_ARTISTS: &str = "Various Artists";

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Performers {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conductor: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub soloist: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub soloists: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ensemble: Option<String>,
}

impl Performers {
    /// The name to show for a recording: soloist, then conductor, then ensemble.
    pub fn main_performer(&self) -> &str {
        self.soloist
            .as_deref()
            .or(self.conductor.as_deref())
            .or(self.ensemble.as_deref())
            .unwrap_or(VARIOUS_ARTISTS)
    }

    /// Every performer value, soloists list included.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.conductor
            .as_deref()
            .into_iter()
            .chain(self.soloist.as_deref())
            .chain(self.soloists.iter().flatten().map(String::as_str))
            .chain(self.ensemble.as_deref())
    }

    pub fn is_empty(&self) -> bool {
        self.names().next().is_none()
    }
}

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RecordingInfo {
    pub year: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub venue: Option<String>,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog_number: Option<String>,
    #[serde(default, alias = "format")]
    pub formats: Vec<String>,
    #[serde(alias = "duration")]
    pub duration_minutes: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recording_type: Option<String>,
}

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AudioQuality {
    pub format: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bitrate: Option<String>,
    #[serde(default)]
    pub remastered: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remaster_year: Option<i32>,
}

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StreamingLink {
    pub platform: String,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub availability: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subscription: Option<bool>,
}

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub source: String,
    #[serde(alias = "rating")]
    pub rating_text: String,
    pub excerpt: String,
}

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CriticalReception {
    pub rating: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reviews: Option<Vec<Review>>,
}

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Recording {
    pub id: String,
    pub work_id: String,
    pub composer: String,
    pub work_title: String,
    #[serde(default)]
    pub performers: Performers,
    pub recording_info: RecordingInfo,
    pub audio_quality: AudioQuality,
    #[serde(default)]
    pub streaming_links: Vec<StreamingLink>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub critical_reception: Option<CriticalReception>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub historical_significance: Option<String>,
}

impl Recording {
    pub fn year(&self) -> i32 {
        self.recording_info.year
    }

    pub fn rating(&self) -> Option<f64> {
        self.critical_reception.as_ref().map(|c| c.rating)
    }

    pub fn is_on_platform(&self, platform: &str) -> bool {
        self.streaming_links
            .iter()
            .any(|link| eq_ignore_case(&link.platform, platform))
    }
}

/// The recordings source document.
#[derive(Clone, Deserialize, Debug, Default)]
pub struct RecordingsDocument {
    pub recordings: Vec<Recording>,
    #[serde(default)]
    pub platforms: BTreeMap<String, serde_json::Value>,
}

/// Recording as returned by the API, with its display performer attached.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordingView<'a> {
    #[serde(flatten)]
    pub recording: &'a Recording,
    pub main_performer: &'a str,
}

impl<'a> From<&'a Recording> for RecordingView<'a> {
    fn from(recording: &'a Recording) -> Self {
        RecordingView {
            recording,
            main_performer: recording.performers.main_performer(),
        }
    }
}
