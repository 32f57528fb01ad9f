//! Work experience entries.

use serde::{Deserialize, Serialize};

use super::resource::Resource;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Experience {
    pub id: i64,
    pub period: String,
    pub title: String,
    pub company: String,
    pub location: String,
    pub color: String,
    pub icon: String,
    pub responsibilities: Vec<String>,
    pub achievements: Vec<String>,
    pub technologies: Vec<String>,
    pub sort_order: i64,
}

impl Resource for Experience {
    const LABEL: &'static str = "experience";

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
