use super::IRosterRepo;
use crate::repos::shared::inmemory_repo::*;
use campus_domain::{Entity, ID};
use std::sync::Mutex;

pub struct InMemoryRosterRepo<M> {
    members: Mutex<Vec<M>>,
}

impl<M> InMemoryRosterRepo<M> {
    pub fn new() -> Self {
        Self {
            members: Mutex::new(vec![]),
        }
    }
}

impl<M> Default for InMemoryRosterRepo<M> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl<M> IRosterRepo<M> for InMemoryRosterRepo<M>
where
    M: Entity + Clone + Send + Sync + 'static,
{
    async fn insert(&self, member: &M) -> anyhow::Result<()> {
        insert(member, &self.members);
        Ok(())
    }

    async fn save(&self, member: &M) -> anyhow::Result<bool> {
        Ok(save(member, &self.members))
    }

    async fn find(&self, member_id: &ID) -> anyhow::Result<Option<M>> {
        Ok(find(member_id, &self.members))
    }

    async fn find_all(&self) -> anyhow::Result<Vec<M>> {
        Ok(find_by(&self.members, |_| true))
    }

    async fn delete(&self, member_id: &ID) -> anyhow::Result<Option<M>> {
        Ok(delete(member_id, &self.members))
    }
}
