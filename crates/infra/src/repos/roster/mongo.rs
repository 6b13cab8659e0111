use super::IRosterRepo;
use crate::repos::shared::mongo_repo::{self, MongoDocument};
use campus_domain::{Entity, Profile, Staff, Student, Teacher, ID};
use mongodb::{
    bson::{oid::ObjectId, DateTime},
    Collection, Database,
};
use serde::{Deserialize, Serialize};
use std::marker::PhantomData;

pub struct MongoRosterRepo<M, D> {
    collection: Collection<D>,
    _member: PhantomData<fn() -> M>,
}

impl<M, D: MongoDocument<M>> MongoRosterRepo<M, D> {
    pub fn new(db: &Database, collection_name: &str) -> Self {
        Self {
            collection: db.collection(collection_name),
            _member: PhantomData,
        }
    }
}

#[async_trait::async_trait]
impl<M, D> IRosterRepo<M> for MongoRosterRepo<M, D>
where
    M: Entity + Send + Sync + 'static,
    D: MongoDocument<M> + 'static,
{
    async fn insert(&self, member: &M) -> anyhow::Result<()> {
        mongo_repo::insert::<M, D>(&self.collection, member).await
    }

    async fn save(&self, member: &M) -> anyhow::Result<bool> {
        mongo_repo::save::<M, D>(&self.collection, member).await
    }

    async fn find(&self, member_id: &ID) -> anyhow::Result<Option<M>> {
        mongo_repo::find::<M, D>(&self.collection, member_id).await
    }

    async fn find_all(&self) -> anyhow::Result<Vec<M>> {
        mongo_repo::find_many_by::<M, D>(&self.collection, None).await
    }

    async fn delete(&self, member_id: &ID) -> anyhow::Result<Option<M>> {
        mongo_repo::delete::<M, D>(&self.collection, member_id).await
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct ProfileMongo {
    name: String,
    email: Option<String>,
    phone: Option<String>,
    address: Option<String>,
    gender: Option<String>,
    avatar: Option<String>,
}

impl ProfileMongo {
    fn to_domain(self) -> Profile {
        Profile {
            name: self.name,
            email: self.email,
            phone: self.phone,
            address: self.address,
            gender: self.gender,
            avatar: self.avatar,
        }
    }

    fn from_domain(profile: &Profile) -> Self {
        Self {
            name: profile.name.clone(),
            email: profile.email.clone(),
            phone: profile.phone.clone(),
            address: profile.address.clone(),
            gender: profile.gender.clone(),
            avatar: profile.avatar.clone(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentMongo {
    #[serde(rename = "_id")]
    id: ObjectId,
    #[serde(flatten)]
    profile: ProfileMongo,
    date_of_birth: Option<String>,
    class_name: Option<String>,
    created_at: DateTime,
    updated_at: DateTime,
}

impl MongoDocument<Student> for StudentMongo {
    fn to_domain(self) -> Student {
        Student {
            id: ID::from(self.id),
            profile: self.profile.to_domain(),
            date_of_birth: self.date_of_birth,
            class_name: self.class_name,
            created_at: self.created_at.timestamp_millis(),
            updated_at: self.updated_at.timestamp_millis(),
        }
    }

    fn from_domain(student: &Student) -> Self {
        Self {
            id: *student.id.inner_ref(),
            profile: ProfileMongo::from_domain(&student.profile),
            date_of_birth: student.date_of_birth.clone(),
            class_name: student.class_name.clone(),
            created_at: DateTime::from_millis(student.created_at),
            updated_at: DateTime::from_millis(student.updated_at),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeacherMongo {
    #[serde(rename = "_id")]
    id: ObjectId,
    #[serde(flatten)]
    profile: ProfileMongo,
    subject: Option<String>,
    created_at: DateTime,
    updated_at: DateTime,
}

impl MongoDocument<Teacher> for TeacherMongo {
    fn to_domain(self) -> Teacher {
        Teacher {
            id: ID::from(self.id),
            profile: self.profile.to_domain(),
            subject: self.subject,
            created_at: self.created_at.timestamp_millis(),
            updated_at: self.updated_at.timestamp_millis(),
        }
    }

    fn from_domain(teacher: &Teacher) -> Self {
        Self {
            id: *teacher.id.inner_ref(),
            profile: ProfileMongo::from_domain(&teacher.profile),
            subject: teacher.subject.clone(),
            created_at: DateTime::from_millis(teacher.created_at),
            updated_at: DateTime::from_millis(teacher.updated_at),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StaffMongo {
    #[serde(rename = "_id")]
    id: ObjectId,
    #[serde(flatten)]
    profile: ProfileMongo,
    position: Option<String>,
    created_at: DateTime,
    updated_at: DateTime,
}

impl MongoDocument<Staff> for StaffMongo {
    fn to_domain(self) -> Staff {
        Staff {
            id: ID::from(self.id),
            profile: self.profile.to_domain(),
            position: self.position,
            created_at: self.created_at.timestamp_millis(),
            updated_at: self.updated_at.timestamp_millis(),
        }
    }

    fn from_domain(staff: &Staff) -> Self {
        Self {
            id: *staff.id.inner_ref(),
            profile: ProfileMongo::from_domain(&staff.profile),
            position: staff.position.clone(),
            created_at: DateTime::from_millis(staff.created_at),
            updated_at: DateTime::from_millis(staff.updated_at),
        }
    }
}
