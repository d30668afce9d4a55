use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::entity::Entity;
use crate::errors::ModelError;

/// A user's review of a point of sale.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    pub id: Option<i64>,
    pub pos_id: i64,
    pub author_id: i64,
    pub review: String,
    #[serde(default)]
    pub approval_count: u32,
    #[serde(default)]
    pub approved: bool,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Review {
    /// Unsaved review with no approvals.
    pub fn new(pos_id: i64, author_id: i64, review: impl Into<String>) -> Self {
        Self {
            id: None,
            pos_id,
            author_id,
            review: review.into(),
            approval_count: 0,
            approved: false,
            created_at: None,
            updated_at: None,
        }
    }

    /// Recompute `approved` against the number of approvals required.
    pub fn update_approval(&mut self, quorum: u32) {
        self.approved = self.approval_count >= quorum;
    }
}

impl Entity for Review {
    type Id = i64;
    const NAME: &'static str = "Review";

    fn id(&self) -> Option<i64> { self.id }

    fn with_id(self, id: i64) -> Self { Self { id: Some(id), ..self } }

    fn validate(&self) -> Result<(), ModelError> {
        if self.review.trim().is_empty() {
            return Err(ModelError::validation("review text must not be blank"));
        }
        if self.pos_id <= 0 {
            return Err(ModelError::validation("pos_id must be positive"));
        }
        if self.author_id <= 0 {
            return Err(ModelError::validation("author_id must be positive"));
        }
        Ok(())
    }

    fn touch(&mut self, now: DateTime<Utc>) {
        if self.created_at.is_none() {
            self.created_at = Some(now);
        }
        self.updated_at = Some(now);
    }
}
