use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const DEFAULT_TAG_COLOR: &str = "#3b82f6";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    #[serde(deserialize_with = "super::id::deserialize")]
    pub id: Uuid,
    pub name: String,
    pub color: String,
}

impl Tag {
    pub fn new(input: CreateTag) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: input.name,
            color: input
                .color
                .unwrap_or_else(|| DEFAULT_TAG_COLOR.to_string()),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateTag {
    pub name: String,
    pub color: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateTag {
    pub name: Option<String>,
    pub color: Option<String>,
}

impl UpdateTag {
    pub fn apply(self, tag: &mut Tag) {
        if let Some(name) = self.name {
            tag.name = name;
        }
        if let Some(color) = self.color {
            tag.color = color;
        }
    }
}
