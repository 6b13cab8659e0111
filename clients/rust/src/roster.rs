use crate::base::{APIResponse, BaseClient};
use campus_domain::ID;
use reqwest::StatusCode;
use serde::{de::DeserializeOwned, Serialize};
use std::{marker::PhantomData, sync::Arc};

/// Client for one roster route group. `I` is the create and update body and
/// `D` the record the server answers with.
pub struct RosterClient<I, D> {
    base: Arc<BaseClient>,
    path: &'static str,
    _types: PhantomData<fn(I) -> D>,
}

impl<I, D> Clone for RosterClient<I, D> {
    fn clone(&self) -> Self {
        Self {
            base: self.base.clone(),
            path: self.path,
            _types: PhantomData,
        }
    }
}

impl<I: Serialize, D: DeserializeOwned> RosterClient<I, D> {
    pub(crate) fn new(base: Arc<BaseClient>, path: &'static str) -> Self {
        Self {
            base,
            path,
            _types: PhantomData,
        }
    }

    pub async fn list(&self) -> APIResponse<Vec<D>> {
        self.base.get(self.path.into(), StatusCode::OK).await
    }

    pub async fn get(&self, id: &ID) -> APIResponse<D> {
        self.base
            .get(format!("{}/{}", self.path, id), StatusCode::OK)
            .await
    }

    pub async fn create(&self, input: I) -> APIResponse<D> {
        self.base
            .post(input, self.path.into(), StatusCode::CREATED)
            .await
    }

    /// Only the fields set in `input` are changed
    pub async fn update(&self, id: &ID, input: I) -> APIResponse<D> {
        self.base
            .put(input, format!("{}/{}", self.path, id), StatusCode::OK)
            .await
    }

    pub async fn delete(&self, id: &ID) -> APIResponse<D> {
        self.base
            .delete(format!("{}/{}", self.path, id), StatusCode::OK)
            .await
    }
}
