use super::IDashboardRepo;
use campus_domain::DashboardItem;
use futures::stream::TryStreamExt;
use mongodb::{
    bson::{Bson, Document},
    Collection, Database,
};
use serde_json::Value;

pub struct MongoDashboardRepo {
    collection: Collection<Document>,
}

impl MongoDashboardRepo {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection("dashboards"),
        }
    }
}

#[async_trait::async_trait]
impl IDashboardRepo for MongoDashboardRepo {
    async fn find_all(&self) -> anyhow::Result<Vec<DashboardItem>> {
        let cursor = self.collection.find(None, None).await?;
        let documents: Vec<Document> = cursor.try_collect().await?;
        Ok(documents.into_iter().map(to_domain).collect())
    }
}

/// Relaxed extended JSON of the document, with an `ObjectId` `_id` flattened
/// to its hex string
fn to_domain(document: Document) -> DashboardItem {
    let oid = document.get_object_id("_id").ok();
    let mut json = Bson::Document(document).into_relaxed_extjson();
    if let (Some(oid), Some(fields)) = (oid, json.as_object_mut()) {
        fields.insert("_id".into(), Value::String(oid.to_hex()));
    }
    DashboardItem::new(json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::{doc, oid::ObjectId};
    use serde_json::json;

    #[test]
    fn it_flattens_object_ids() {
        let oid = ObjectId::new();
        let item = to_domain(doc! {
            "_id": oid,
            "title": "Students",
            "count": 42,
        });
        assert_eq!(
            item.as_json(),
            &json!({ "_id": oid.to_hex(), "title": "Students", "count": 42 })
        );
    }

    #[test]
    fn it_keeps_other_ids_untouched() {
        let item = to_domain(doc! { "_id": "custom", "title": "Teachers" });
        assert_eq!(item.as_json(), &json!({ "_id": "custom", "title": "Teachers" }));
    }
}
