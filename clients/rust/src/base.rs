use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use serde::{Deserialize, Serialize};

const API_KEY_HEADER: &str = "x-api-key";

pub(crate) struct BaseClient {
    client: Client,
    address: String,
    api_key: Option<String>,
}

#[derive(Debug)]
pub enum APIError {
    Network,
    MalformedResponse,
    Unauthorized,
    BadClientData(String),
    NotFound(String),
    UnexpectedStatusCode(StatusCode),
}
pub type APIResponse<T> = Result<T, APIError>;

impl BaseClient {
    pub fn new(address: String) -> Self {
        Self {
            client: Client::new(),
            address,
            api_key: None,
        }
    }

    pub fn set_api_key(&mut self, api_key: String) {
        self.api_key = Some(api_key);
    }

    fn get_client(&self, method: Method, path: String) -> RequestBuilder {
        let url = format!("{}/api/v1/{}", self.address, path);
        let builder = self.client.request(method, &url);

        match &self.api_key {
            Some(api_key) if !api_key.is_empty() => builder.header(API_KEY_HEADER, api_key),
            _ => builder,
        }
    }

    async fn check_status_code(
        &self,
        res: Response,
        expected_status_codes: &[StatusCode],
    ) -> Result<Response, APIError> {
        let status = res.status();
        if expected_status_codes.contains(&status) {
            return Ok(res);
        }
        let message = res.text().await.unwrap_or_default();
        Err(match status {
            StatusCode::BAD_REQUEST => APIError::BadClientData(message),
            StatusCode::UNAUTHORIZED => APIError::Unauthorized,
            StatusCode::NOT_FOUND => APIError::NotFound(message),
            _ => APIError::UnexpectedStatusCode(status),
        })
    }

    async fn handle_api_response<T: for<'de> Deserialize<'de>>(
        &self,
        res: Result<Response, reqwest::Error>,
        expected_status_codes: &[StatusCode],
    ) -> APIResponse<T> {
        let res = res.map_err(|_| APIError::Network)?;
        let res = self.check_status_code(res, expected_status_codes).await?;
        res.json::<T>()
            .await
            .map_err(|_| APIError::MalformedResponse)
    }

    pub async fn get<T: for<'de> Deserialize<'de>>(
        &self,
        path: String,
        expected_status_code: StatusCode,
    ) -> APIResponse<T> {
        let res = self.get_client(Method::GET, path).send().await;
        self.handle_api_response(res, &[expected_status_code]).await
    }

    pub async fn delete<T: for<'de> Deserialize<'de>>(
        &self,
        path: String,
        expected_status_code: StatusCode,
    ) -> APIResponse<T> {
        let res = self.get_client(Method::DELETE, path).send().await;
        self.handle_api_response(res, &[expected_status_code]).await
    }

    pub async fn patch<T: for<'de> Deserialize<'de>>(
        &self,
        path: String,
        expected_status_code: StatusCode,
    ) -> APIResponse<T> {
        let res = self.get_client(Method::PATCH, path).send().await;
        self.handle_api_response(res, &[expected_status_code]).await
    }

    pub async fn put<T: for<'de> Deserialize<'de>, S: Serialize>(
        &self,
        body: S,
        path: String,
        expected_status_code: StatusCode,
    ) -> APIResponse<T> {
        let res = self.get_client(Method::PUT, path).json(&body).send().await;
        self.handle_api_response(res, &[expected_status_code]).await
    }

    pub async fn post<T: for<'de> Deserialize<'de>, S: Serialize>(
        &self,
        body: S,
        path: String,
        expected_status_code: StatusCode,
    ) -> APIResponse<T> {
        self.post_expecting(body, path, &[expected_status_code])
            .await
    }

    /// For endpoints that answer with different success codes
    pub async fn post_expecting<T: for<'de> Deserialize<'de>, S: Serialize>(
        &self,
        body: S,
        path: String,
        expected_status_codes: &[StatusCode],
    ) -> APIResponse<T> {
        let res = self.get_client(Method::POST, path).json(&body).send().await;
        self.handle_api_response(res, expected_status_codes).await
    }
}
