use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::comment::Comment;
use super::tag::Tag;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    #[serde(alias = "baixa")]
    Low,
    #[default]
    #[serde(alias = "media")]
    Medium,
    #[serde(alias = "alta")]
    High,
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Priority::Low => write!(f, "low"),
            Priority::Medium => write!(f, "medium"),
            Priority::High => write!(f, "high"),
        }
    }
}

impl std::str::FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "low" | "baixa" => Ok(Priority::Low),
            "medium" | "media" => Ok(Priority::Medium),
            "high" | "alta" => Ok(Priority::High),
            _ => Err(format!("Invalid priority: {}", s)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    #[serde(deserialize_with = "super::id::deserialize")]
    pub id: Uuid,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub assignee: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "super::id::deserialize_vec")]
    pub tags: Vec<Uuid>,
    #[serde(default)]
    pub comments: Vec<Comment>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Card {
    pub fn new(input: CreateCard, now: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: input.title,
            description: input.description,
            priority: input.priority,
            assignee: input.assignee,
            due_date: input.due_date,
            tags: unique_tags(input.tags),
            comments: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn has_tag(&self, tag_id: Uuid) -> bool {
        self.tags.contains(&tag_id)
    }

    /// A card is overdue once its due date lies strictly in the past.
    pub fn is_overdue(&self, now: DateTime<Utc>) -> bool {
        self.due_date.is_some_and(|due| due < now)
    }

    pub fn touch(&mut self, now: DateTime<Utc>) {
        self.updated_at = now;
    }

    pub fn into_response(self, registry: &[Tag], now: DateTime<Utc>) -> CardResponse {
        let tag_details = crate::engine::tags::resolve_tags(&self, registry)
            .into_iter()
            .cloned()
            .collect();
        let overdue = self.is_overdue(now);

        CardResponse {
            card: self,
            tag_details,
            overdue,
        }
    }
}

/// Drops repeated tag ids, keeping the first occurrence of each.
pub(crate) fn unique_tags(tags: Vec<Uuid>) -> Vec<Uuid> {
    let mut seen = Vec::with_capacity(tags.len());
    for tag in tags {
        if !seen.contains(&tag) {
            seen.push(tag);
        }
    }
    seen
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCard {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub assignee: String,
    #[serde(default)]
    pub due_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub tags: Vec<Uuid>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCard {
    pub title: Option<String>,
    pub description: Option<String>,
    pub priority: Option<Priority>,
    pub assignee: Option<String>,
    #[serde(default, deserialize_with = "super::double_option")]
    pub due_date: Option<Option<DateTime<Utc>>>,
    pub tags: Option<Vec<Uuid>>,
}

impl UpdateCard {
    pub fn apply(self, card: &mut Card, now: DateTime<Utc>) {
        if let Some(title) = self.title {
            card.title = title;
        }
        if let Some(description) = self.description {
            card.description = description;
        }
        if let Some(priority) = self.priority {
            card.priority = priority;
        }
        if let Some(assignee) = self.assignee {
            card.assignee = assignee;
        }
        if let Some(due_date) = self.due_date {
            card.due_date = due_date;
        }
        if let Some(tags) = self.tags {
            card.tags = unique_tags(tags);
        }
        card.touch(now);
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveCard {
    pub source_column_id: Uuid,
    pub target_column_id: Uuid,
    pub target_index: usize,
}

/// Card as rendered: the stored card plus its resolvable tags.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CardResponse {
    #[serde(flatten)]
    pub card: Card,
    pub tag_details: Vec<Tag>,
    pub overdue: bool,
}
