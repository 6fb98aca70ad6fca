use reqwest::{Client, RequestBuilder, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use std::fmt::Display;

use crate::Response;

#[derive(Debug, Clone, PartialEq)]
pub enum APIErrorVariant {
    Network,
    MalformedResponse,
    UnexpectedStatusCode(StatusCode),
}

#[derive(Debug, Clone)]
pub struct APIError {
    pub variant: APIErrorVariant,
    /// The `message` of the failed response, when the server sent one
    pub message: String,
}

impl APIError {
    pub fn status(&self) -> Option<StatusCode> {
        match self.variant {
            APIErrorVariant::UnexpectedStatusCode(status) => Some(status),
            _ => None,
        }
    }
}

impl Display for APIError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}: {}", self.variant, self.message)
    }
}

pub type APIResponse<T> = Result<T, APIError>;

pub(crate) struct BaseClient {
    client: Client,
    address: String,
}

impl BaseClient {
    pub fn new(address: String) -> Self {
        let address = format!("{}/api/v1", address.trim_end_matches('/'));
        Self {
            client: Client::new(),
            address,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.address, path)
    }

    async fn handle_api_response<T: DeserializeOwned>(
        &self,
        req: RequestBuilder,
        expected_status_code: StatusCode,
    ) -> APIResponse<T> {
        let res = req.send().await.map_err(|e| APIError {
            variant: APIErrorVariant::Network,
            message: e.to_string(),
        })?;

        let status = res.status();
        if status != expected_status_code {
            let message = match res.json::<Response<()>>().await {
                Ok(body) => body.message,
                Err(_) => String::new(),
            };
            return Err(APIError {
                variant: APIErrorVariant::UnexpectedStatusCode(status),
                message,
            });
        }

        res.json::<T>().await.map_err(|e| APIError {
            variant: APIErrorVariant::MalformedResponse,
            message: e.to_string(),
        })
    }

    pub async fn get<T: DeserializeOwned>(
        &self,
        path: String,
        expected_status_code: StatusCode,
    ) -> APIResponse<T> {
        let req = self.client.get(self.url(&path));
        self.handle_api_response(req, expected_status_code).await
    }

    pub async fn delete<T: DeserializeOwned>(
        &self,
        path: String,
        expected_status_code: StatusCode,
    ) -> APIResponse<T> {
        let req = self.client.delete(self.url(&path));
        self.handle_api_response(req, expected_status_code).await
    }

    pub async fn post<T: DeserializeOwned, S: Serialize>(
        &self,
        body: S,
        path: String,
        expected_status_code: StatusCode,
    ) -> APIResponse<T> {
        let req = self.client.post(self.url(&path)).json(&body);
        self.handle_api_response(req, expected_status_code).await
    }
}
