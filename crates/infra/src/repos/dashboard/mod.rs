mod inmemory;
mod mongo;

use campus_domain::DashboardItem;
pub use inmemory::InMemoryDashboardRepo;
pub use mongo::MongoDashboardRepo;

/// Read access to the dashboard collection. Items are written by other systems.
#[async_trait::async_trait]
pub trait IDashboardRepo: Send + Sync {
    async fn find_all(&self) -> anyhow::Result<Vec<DashboardItem>>;
}
