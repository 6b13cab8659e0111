use crate::base::{APIResponse, BaseClient};
use reqwest::StatusCode;
use std::sync::Arc;

#[derive(Clone)]
pub struct MediaConfigClient {
    base: Arc<BaseClient>,
}

impl MediaConfigClient {
    pub(crate) fn new(base: Arc<BaseClient>) -> Self {
        Self { base }
    }

    pub async fn cloudinary_url(&self) -> APIResponse<String> {
        self.base
            .get_text("api/config/cloudinary".into(), StatusCode::OK)
            .await
    }

    pub async fn cloudinary_upload_preset(&self) -> APIResponse<String> {
        self.base
            .get_text("api/config/cloudinarypreset".into(), StatusCode::OK)
            .await
    }
}
