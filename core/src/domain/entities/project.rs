//! Portfolio projects.

use serde::{Deserialize, Serialize};

use super::resource::Resource;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Project {
    pub id: i64,
    pub title: String,
    pub category: String,
    pub description: String,
    pub image: String,
    pub demo_link: String,
    pub repo_link: String,
    pub show_architecture: bool,
    pub metrics: Vec<Metric>,
    pub key_points: Vec<String>,
    pub tech_stack: Vec<String>,
    pub sort_order: i64,
}

/// A headline result shown on a project card, e.g. `{"value": "40%", "label": "faster"}`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Metric {
    pub value: String,
    pub label: String,
}

impl Resource for Project {
    const LABEL: &'static str = "project";

    fn id(&self) -> i64 {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = id;
    }

    fn sort_order(&self) -> i64 {
        self.sort_order
    }
}
