use super::IAdminRepo;
use crate::repos::shared::inmemory_repo::*;
use campus_domain::Admin;
use std::sync::Mutex;

pub struct InMemoryAdminRepo {
    admins: Mutex<Vec<Admin>>,
}

impl InMemoryAdminRepo {
    pub fn new() -> Self {
        Self {
            admins: Mutex::new(vec![]),
        }
    }
}

impl Default for InMemoryAdminRepo {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl IAdminRepo for InMemoryAdminRepo {
    async fn insert(&self, admin: &Admin) -> anyhow::Result<()> {
        insert(admin, &self.admins);
        Ok(())
    }

    async fn find_by_username(&self, username: &str) -> anyhow::Result<Option<Admin>> {
        Ok(find_by(&self.admins, |admin| admin.username == username)
            .into_iter()
            .next())
    }
}
