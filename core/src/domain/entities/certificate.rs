use serde::{Deserialize, Serialize};

use super::resource::Resource;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Certificate {
    pub id: i64,
    pub name: String,
    pub organization: String,
    pub date: String,
    pub description: String,
    pub icon: String,
    pub link: String,
    pub sort_order: i64,
}

impl Resource for Certificate {
    const LABEL: &'static str = "certificate";

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
