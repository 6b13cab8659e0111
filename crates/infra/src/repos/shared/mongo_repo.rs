use anyhow::Result;
use campus_domain::{Entity, ID};
use futures::stream::TryStreamExt;
use mongodb::{
    bson::{doc, Document},
    Collection,
};
use serde::{de::DeserializeOwned, Serialize};

/// Persistence shape of a domain entity `E` inside a MongoDB collection
pub trait MongoDocument<E>: Serialize + DeserializeOwned + Unpin + Send + Sync {
    fn to_domain(self) -> E;
    fn from_domain(entity: &E) -> Self;
}

pub fn id_filter(id: &ID) -> Document {
    doc! {
        "_id": *id.inner_ref()
    }
}

pub async fn insert<E, D: MongoDocument<E>>(collection: &Collection<D>, entity: &E) -> Result<()> {
    collection.insert_one(D::from_domain(entity), None).await?;
    Ok(())
}

/// Replaces the whole stored document. Returns false when nothing was stored
/// under the entity id.
pub async fn save<E: Entity, D: MongoDocument<E>>(
    collection: &Collection<D>,
    entity: &E,
) -> Result<bool> {
    let res = collection
        .replace_one(id_filter(entity.id()), D::from_domain(entity), None)
        .await?;
    Ok(res.matched_count > 0)
}

pub async fn find<E, D: MongoDocument<E>>(collection: &Collection<D>, id: &ID) -> Result<Option<E>> {
    find_one_by::<E, D>(collection, id_filter(id)).await
}

pub async fn find_one_by<E, D: MongoDocument<E>>(
    collection: &Collection<D>,
    filter: Document,
) -> Result<Option<E>> {
    let doc = collection.find_one(filter, None).await?;
    Ok(doc.map(D::to_domain))
}

pub async fn find_many_by<E, D: MongoDocument<E>>(
    collection: &Collection<D>,
    filter: Option<Document>,
) -> Result<Vec<E>> {
    let cursor = collection.find(filter, None).await?;
    let documents: Vec<D> = cursor.try_collect().await?;
    Ok(documents.into_iter().map(D::to_domain).collect())
}

pub async fn delete<E, D: MongoDocument<E>>(
    collection: &Collection<D>,
    id: &ID,
) -> Result<Option<E>> {
    let doc = collection.find_one_and_delete(id_filter(id), None).await?;
    Ok(doc.map(D::to_domain))
}
