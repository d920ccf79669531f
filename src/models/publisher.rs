//! Publisher model

use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DefaultOnNull};
use utoipa::ToSchema;

use super::Record;

/// Publisher record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Publisher {
    pub id: i64,
    pub name: String,
    pub country: String,
}

impl Record for Publisher {
    const NAME: &'static str = "publisher";
    const DISPLAY_NAME: &'static str = "Publisher";

    fn id(&self) -> i64 {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = id;
    }
}

/// Create / update publisher request
#[serde_as]
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct PublisherPayload {
    /// Ignored: the store assigns ids, updates keep the path id
    pub id: Option<i64>,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub name: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub country: String,
}

impl From<PublisherPayload> for Publisher {
    fn from(payload: PublisherPayload) -> Self {
        Self {
            id: 0,
            name: payload.name,
            country: payload.country,
        }
    }
}
