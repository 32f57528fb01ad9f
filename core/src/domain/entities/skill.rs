//! Skill categories and the skills grouped under them.

use serde::{Deserialize, Serialize};

use super::resource::Resource;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SkillCategory {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub icon: String,
    pub skills: Vec<Skill>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Skill {
    pub id: i64,
    pub category_id: i64,
    pub name: String,
    pub level: i64,
    pub description: String,
    pub tags: Vec<String>,
}

impl Resource for Skill {
    const LABEL: &'static str = "skill";

    fn id(&self) -> i64 {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = id;
    }
}
