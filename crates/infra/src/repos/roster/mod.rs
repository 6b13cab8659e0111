mod inmemory;
mod mongo;

use campus_domain::ID;
pub use inmemory::InMemoryRosterRepo;
pub use mongo::{MongoRosterRepo, StaffMongo, StudentMongo, TeacherMongo};

/// Storage of one kind of roster member (students, teachers or staffs)
#[async_trait::async_trait]
pub trait IRosterRepo<M: Send + Sync + 'static>: Send + Sync {
    async fn insert(&self, member: &M) -> anyhow::Result<()>;
    /// Returns false when no member with that id exists
    async fn save(&self, member: &M) -> anyhow::Result<bool>;
    async fn find(&self, member_id: &ID) -> anyhow::Result<Option<M>>;
    async fn find_all(&self) -> anyhow::Result<Vec<M>>;
    async fn delete(&self, member_id: &ID) -> anyhow::Result<Option<M>>;
}
