use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A document of the dashboard collection.
///
/// Its fields are owned by whoever writes the collection, so the item is kept
/// as the raw JSON form of the stored document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DashboardItem(Value);

impl DashboardItem {
    pub fn new(document: Value) -> Self {
        Self(document)
    }

    pub fn as_json(&self) -> &Value {
        &self.0
    }
}
