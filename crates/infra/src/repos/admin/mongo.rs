use super::IAdminRepo;
use crate::repos::shared::mongo_repo::{self, MongoDocument};
use campus_domain::{Admin, ID};
use mongodb::{
    bson::{doc, oid::ObjectId},
    Collection, Database,
};
use serde::{Deserialize, Serialize};

pub struct MongoAdminRepo {
    collection: Collection<AdminMongo>,
}

impl MongoAdminRepo {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection("admins"),
        }
    }
}

#[async_trait::async_trait]
impl IAdminRepo for MongoAdminRepo {
    async fn insert(&self, admin: &Admin) -> anyhow::Result<()> {
        mongo_repo::insert::<_, AdminMongo>(&self.collection, admin).await
    }

    async fn find_by_username(&self, username: &str) -> anyhow::Result<Option<Admin>> {
        let filter = doc! {
            "username": username
        };
        mongo_repo::find_one_by::<_, AdminMongo>(&self.collection, filter).await
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AdminMongo {
    #[serde(rename = "_id")]
    id: ObjectId,
    username: String,
    password_hash: String,
}

impl MongoDocument<Admin> for AdminMongo {
    fn to_domain(self) -> Admin {
        Admin {
            id: ID::from(self.id),
            username: self.username,
            password_hash: self.password_hash,
        }
    }

    fn from_domain(admin: &Admin) -> Self {
        Self {
            id: *admin.id.inner_ref(),
            username: admin.username.clone(),
            password_hash: admin.password_hash.clone(),
        }
    }
}
