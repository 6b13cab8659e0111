use super::IDashboardRepo;
use crate::repos::shared::inmemory_repo::find_by;
use campus_domain::DashboardItem;
use std::sync::Mutex;

pub struct InMemoryDashboardRepo {
    items: Mutex<Vec<DashboardItem>>,
}

impl InMemoryDashboardRepo {
    pub fn new() -> Self {
        Self::with_items(vec![])
    }

    pub fn with_items(items: Vec<DashboardItem>) -> Self {
        Self {
            items: Mutex::new(items),
        }
    }
}

impl Default for InMemoryDashboardRepo {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl IDashboardRepo for InMemoryDashboardRepo {
    async fn find_all(&self) -> anyhow::Result<Vec<DashboardItem>> {
        Ok(find_by(&self.items, |_| true))
    }
}
