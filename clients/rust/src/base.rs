use campus_api_structs::ErrorResponse;
use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use serde::{de::DeserializeOwned, Serialize};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum APIErrorVariant {
    Network,
    MalformedResponse,
    BadClientData,
    Unauthorized,
    NotFound,
    InternalError,
    UnexpectedStatusCode,
}

#[derive(Debug, Clone)]
pub struct APIError {
    pub variant: APIErrorVariant,
    pub message: String,
}

impl APIError {
    fn new(variant: APIErrorVariant, message: impl Into<String>) -> Self {
        Self {
            variant,
            message: message.into(),
        }
    }
}

pub type APIResponse<T> = Result<T, APIError>;

pub(crate) struct BaseClient {
    client: Client,
    address: String,
}

impl BaseClient {
    pub fn new(address: String) -> Self {
        Self {
            client: Client::new(),
            address: address.trim_end_matches('/').to_string(),
        }
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.client
            .request(method, format!("{}/{}", self.address, path.trim_start_matches('/')))
    }

    async fn send(builder: RequestBuilder, expected: StatusCode) -> APIResponse<Response> {
        let res = builder
            .send()
            .await
            .map_err(|e| APIError::new(APIErrorVariant::Network, e.to_string()))?;
        if res.status() == expected {
            return Ok(res);
        }

        let status = res.status();
        let variant = match status {
            StatusCode::BAD_REQUEST => APIErrorVariant::BadClientData,
            StatusCode::UNAUTHORIZED => APIErrorVariant::Unauthorized,
            StatusCode::NOT_FOUND => APIErrorVariant::NotFound,
            StatusCode::INTERNAL_SERVER_ERROR => APIErrorVariant::InternalError,
            _ => APIErrorVariant::UnexpectedStatusCode,
        };
        let body = res.text().await.unwrap_or_default();
        // Also matches the bare `{ message }` bodies, `stack` is optional
        let message = serde_json::from_str::<ErrorResponse>(&body)
            .map(|e| e.message)
            .unwrap_or(body);
        Err(APIError::new(variant, format!("{}: {}", status, message)))
    }

    async fn json<T: DeserializeOwned>(res: Response) -> APIResponse<T> {
        res.json::<T>()
            .await
            .map_err(|e| APIError::new(APIErrorVariant::MalformedResponse, e.to_string()))
    }

    pub async fn get<T: DeserializeOwned>(
        &self,
        path: String,
        expected: StatusCode,
    ) -> APIResponse<T> {
        let res = Self::send(self.request(Method::GET, &path), expected).await?;
        Self::json(res).await
    }

    /// For the endpoints answering with `text/plain`
    pub async fn get_text(&self, path: String, expected: StatusCode) -> APIResponse<String> {
        let res = Self::send(self.request(Method::GET, &path), expected).await?;
        res.text()
            .await
            .map_err(|e| APIError::new(APIErrorVariant::MalformedResponse, e.to_string()))
    }

    pub async fn post<T: DeserializeOwned>(
        &self,
        body: impl Serialize,
        path: String,
        expected: StatusCode,
    ) -> APIResponse<T> {
        let res = Self::send(self.request(Method::POST, &path).json(&body), expected).await?;
        Self::json(res).await
    }

    pub async fn put<T: DeserializeOwned>(
        &self,
        body: impl Serialize,
        path: String,
        expected: StatusCode,
    ) -> APIResponse<T> {
        let res = Self::send(self.request(Method::PUT, &path).json(&body), expected).await?;
        Self::json(res).await
    }

    pub async fn delete<T: DeserializeOwned>(
        &self,
        path: String,
        expected: StatusCode,
    ) -> APIResponse<T> {
        let res = Self::send(self.request(Method::DELETE, &path), expected).await?;
        Self::json(res).await
    }
}
