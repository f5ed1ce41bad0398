use crate::config::Config;
use domain::error::ApiError;
use domain::models::{
    ActionResponse, AskRequest, AskResponse, DeleteResponse, DocumentId, RenameRequest,
    RenameResponse, UploadFile, UploadResponse, ViewResponse,
};
use domain::ports::DocumentApi;
use reqwest::{header, multipart, Client, Method, RequestBuilder};
use serde::de::DeserializeOwned;
use shared::telemetry::Telemetry;
use shared::types::Result;
use std::sync::Arc;
use tracing::debug;

/// Payloads that can describe their own failure. A non-2xx response is only
/// trusted when its body does.
trait ReportsFailure {
    fn reports_failure(&self) -> bool;
}

impl ReportsFailure for ViewResponse {
    fn reports_failure(&self) -> bool {
        self.error.is_some()
    }
}

impl ReportsFailure for AskResponse {
    fn reports_failure(&self) -> bool {
        self.error.is_some()
    }
}

impl ReportsFailure for ActionResponse {
    fn reports_failure(&self) -> bool {
        !self.success || self.error.is_some()
    }
}

#[derive(Clone)]
pub struct HttpDocumentApi {
    client: Arc<Client>,
    base_url: String,
    session_cookie: Option<String>,
}

impl HttpDocumentApi {
    pub fn new(config: &Config) -> Result<Self> {
        let client = Client::builder().build()?;
        Ok(Self {
            client: Arc::new(client),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            session_cookie: config.session_cookie.clone(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let builder = self.client.request(method, self.url(path));
        match &self.session_cookie {
            Some(cookie) => builder.header(header::COOKIE, cookie),
            None => builder,
        }
    }

    async fn send<T>(&self, label: &str, builder: RequestBuilder) -> std::result::Result<T, ApiError>
    where
        T: DeserializeOwned + ReportsFailure,
    {
        let timer = Telemetry::new();
        let response = builder
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        debug!(
            request = label,
            status = status.as_u16(),
            elapsed_ms = timer.elapsed_ms() as u64,
            "backend responded"
        );

        match serde_json::from_str::<T>(&body) {
            Ok(payload) if status.is_success() || payload.reports_failure() => Ok(payload),
            Ok(_) => Err(ApiError::Status {
                status: status.as_u16(),
                body,
            }),
            Err(e) if status.is_success() => Err(ApiError::Decode(e.to_string())),
            Err(_) => Err(ApiError::Status {
                status: status.as_u16(),
                body,
            }),
        }
    }
}

impl DocumentApi for HttpDocumentApi {
    async fn view(&self, id: &DocumentId) -> std::result::Result<ViewResponse, ApiError> {
        let path = format!("/view/{id}");
        self.send(&path, self.request(Method::GET, &path)).await
    }

    async fn ask(&self, request: &AskRequest) -> std::result::Result<AskResponse, ApiError> {
        let builder = self.request(Method::POST, "/ask").json(request);
        self.send("/ask", builder).await
    }

    async fn upload(&self, file: UploadFile) -> std::result::Result<UploadResponse, ApiError> {
        let part = multipart::Part::bytes(file.bytes).file_name(file.file_name);
        let form = multipart::Form::new().part("file", part);
        let builder = self.request(Method::POST, "/upload").multipart(form);
        self.send("/upload", builder).await
    }

    async fn delete(&self, id: &DocumentId) -> std::result::Result<DeleteResponse, ApiError> {
        let path = format!("/delete/{id}");
        self.send(&path, self.request(Method::POST, &path)).await
    }

    async fn rename(
        &self,
        id: &DocumentId,
        request: &RenameRequest,
    ) -> std::result::Result<RenameResponse, ApiError> {
        let path = format!("/rename/{id}");
        let builder = self.request(Method::POST, &path).json(request);
        self.send(&path, builder).await
    }
}
