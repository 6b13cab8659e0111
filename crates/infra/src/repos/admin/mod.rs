mod inmemory;
mod mongo;

use campus_domain::Admin;
pub use inmemory::InMemoryAdminRepo;
pub use mongo::MongoAdminRepo;

#[async_trait::async_trait]
pub trait IAdminRepo: Send + Sync {
    async fn insert(&self, admin: &Admin) -> anyhow::Result<()>;
    async fn find_by_username(&self, username: &str) -> anyhow::Result<Option<Admin>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn it_finds_admins_by_exact_username() {
        let repo = InMemoryAdminRepo::new();
        let admin = Admin::new("principal", "s3cret").unwrap();
        repo.insert(&admin).await.unwrap();

        let found = repo
            .find_by_username("principal")
            .await
            .unwrap()
            .expect("To find admin");
        assert_eq!(found.id, admin.id);
        assert!(repo.find_by_username("Principal").await.unwrap().is_none());
        assert!(repo.find_by_username("janitor").await.unwrap().is_none());
    }
}
