use crate::base::{APIResponse, BaseClient};
use reqwest::StatusCode;
use std::sync::Arc;

#[derive(Clone)]
pub struct StatusClient {
    base: Arc<BaseClient>,
}

impl StatusClient {
    pub(crate) fn new(base: Arc<BaseClient>) -> Self {
        Self { base }
    }

    /// Only answered by servers running outside production
    pub async fn check_health(&self) -> APIResponse<String> {
        self.base.get_text("".into(), StatusCode::OK).await
    }
}
