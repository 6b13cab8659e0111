use crate::base::{APIResponse, BaseClient};
use campus_api_structs::get_dashboard;
use reqwest::StatusCode;
use std::sync::Arc;

#[derive(Clone)]
pub struct DashboardClient {
    base: Arc<BaseClient>,
}

impl DashboardClient {
    pub(crate) fn new(base: Arc<BaseClient>) -> Self {
        Self { base }
    }

    pub async fn get(&self) -> APIResponse<get_dashboard::APIResponse> {
        self.base.get("dashboard".into(), StatusCode::OK).await
    }
}
