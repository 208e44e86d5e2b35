use serde::{Deserialize, Serialize};

pub const UNKNOWN_PROJECT_NAME: &str = "Unknown project";
pub const UNKNOWN_PROJECT_COLOR: &str = "#808080";

/// Project metadata, only used to label aggregated durations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub name: String,
    #[serde(default = "default_color")]
    pub color: String,
}

fn default_color() -> String {
    UNKNOWN_PROJECT_COLOR.to_string()
}

impl Project {
    pub fn new(id: impl Into<String>, name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            color: color.into(),
        }
    }
}

/// Display name and color for `project_id`, with a placeholder when unknown.
pub fn project_label(projects: &[Project], project_id: &str) -> (String, String) {
    match projects.iter().find(|p| p.id == project_id) {
        Some(p) => (p.name.clone(), p.color.clone()),
        None => (
            UNKNOWN_PROJECT_NAME.to_string(),
            UNKNOWN_PROJECT_COLOR.to_string(),
        ),
    }
}
