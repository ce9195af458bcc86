//! Blink record lookup.
//!
//! Records are created externally and read here by id. A lookup miss is not
//! an error; callers substitute [`BlinkRecord::fallback`].

use mongodb::bson::doc;
use mongodb::bson::oid::ObjectId;
use mongodb::{Collection, Database};
use serde::{Deserialize, Serialize};

use crate::error::BlinkError;

/// A stored blink: display metadata plus the mint it sells.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlinkRecord {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub icon: String,
    pub label: String,
    pub description: String,
    pub title: String,
    /// Base58 mint address. The fallback record has none, so building a
    /// transaction against it fails.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mint: Option<String>,
}

impl BlinkRecord {
    /// The hardcoded record used when an id does not resolve.
    pub fn fallback() -> Self {
        Self {
            id: None,
            icon: "https://example.com/pump-token-icon.png".to_string(),
            label: "Buy Pump Token 🚀".to_string(),
            description: "Get your Pump tokens now! Choose an amount to purchase.".to_string(),
            title: "Buy Pump Tokens".to_string(),
            mint: None,
        }
    }
}

/// Read-only handle to the `blinks` collection.
#[derive(Clone)]
pub struct BlinkStore {
    blinks: Collection<BlinkRecord>,
}

impl BlinkStore {
    pub fn new(db: &Database) -> Self {
        Self {
            blinks: db.collection("blinks"),
        }
    }

    /// Find a record by its string id.
    ///
    /// Ids that are not well-formed ObjectIds resolve to `None` without
    /// hitting the database, same as ids with no stored record.
    pub async fn find(&self, id: &str) -> Result<Option<BlinkRecord>, BlinkError> {
        let Ok(oid) = ObjectId::parse_str(id) else {
            return Ok(None);
        };
        Ok(self.blinks.find_one(doc! { "_id": oid }).await?)
    }
}
