//! Note and label records

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A label that notes can reference by id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Label {
    pub id: String,
    pub name: String,
}

fn default_color() -> String {
    "default".to_string()
}

/// A single note.
///
/// Field values are carried exactly as the importer produced them; dates,
/// colors and reminders are opaque here. Keys this model does not know
/// about land in `extra` and are written back unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub content: String,

    #[serde(default = "default_color")]
    pub color: String,

    /// Label ids
    #[serde(default)]
    pub labels: Vec<String>,

    #[serde(default)]
    pub pinned: bool,

    #[serde(default)]
    pub archived: bool,

    #[serde(default)]
    pub in_trash: bool,

    #[serde(default)]
    pub reminder: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Note {
    /// Create an empty note with the given id and title.
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            title: title.into(),
            content: String::new(),
            color: default_color(),
            labels: Vec::new(),
            pinned: false,
            archived: false,
            in_trash: false,
            reminder: None,
            created_at: None,
            updated_at: None,
            extra: Map::new(),
        }
    }
}
