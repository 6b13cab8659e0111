use crate::base::{APIResponse, BaseClient};
use campus_api_structs::login_admin;
use reqwest::StatusCode;
use std::sync::Arc;

#[derive(Clone)]
pub struct LoginClient {
    base: Arc<BaseClient>,
}

impl LoginClient {
    pub(crate) fn new(base: Arc<BaseClient>) -> Self {
        Self { base }
    }

    pub async fn login(
        &self,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> APIResponse<login_admin::APIResponse> {
        let body = login_admin::RequestBody {
            username: username.into(),
            password: password.into(),
        };
        self.base
            .post(body, "api/login".into(), StatusCode::OK)
            .await
    }
}
