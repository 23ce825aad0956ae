use std::rc::Rc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

use super::envelope::{ApiError, ApiResponse};
use crate::services::session::CredentialStore;
use crate::services::storage::KeyValueStorage;

// ============================================================================
// HTTP Primitives
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestMethod {
    Get,
    Post,
    Patch,
    Delete,
}

impl RequestMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            RequestMethod::Get => "GET",
            RequestMethod::Post => "POST",
            RequestMethod::Patch => "PATCH",
            RequestMethod::Delete => "DELETE",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    pub method: RequestMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl HttpRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

/// Sends one request and returns whatever the server answered.
/// Only a missing response is an error at this layer.
#[allow(async_fn_in_trait)]
pub trait Transport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError>;
}

/// `window.fetch`.
#[derive(Debug, Clone, Copy, Default)]
pub struct FetchTransport;

fn js_error(e: JsValue) -> ApiError {
    ApiError::Network(
        e.as_string()
            .unwrap_or_else(|| format!("{:?}", e)),
    )
}

impl Transport for FetchTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        let opts = web_sys::RequestInit::new();
        opts.set_method(request.method.as_str());
        opts.set_mode(web_sys::RequestMode::Cors);
        if let Some(body) = &request.body {
            opts.set_body(&JsValue::from_str(body));
        }

        let js_request =
            web_sys::Request::new_with_str_and_init(&request.url, &opts).map_err(js_error)?;
        for (name, value) in &request.headers {
            js_request.headers().set(name, value).map_err(js_error)?;
        }

        let window =
            web_sys::window().ok_or_else(|| ApiError::Network("no window".to_string()))?;
        let response: web_sys::Response = JsFuture::from(window.fetch_with_request(&js_request))
            .await
            .map_err(js_error)?
            .dyn_into()
            .map_err(js_error)?;

        let status = response.status();
        let text = JsFuture::from(response.text().map_err(js_error)?)
            .await
            .map_err(js_error)?;

        Ok(HttpResponse {
            status,
            body: text.as_string().unwrap_or_default(),
        })
    }
}

// ============================================================================
// API Client
// ============================================================================

/// JSON REST client. Attaches the stored bearer credential, unwraps the
/// response envelope, and turns HTTP 401 into a credential wipe.
pub struct ApiClient<T, S> {
    base_url: String,
    transport: T,
    credentials: CredentialStore<S>,
    on_unauthorized: Rc<dyn Fn()>,
}

impl<T: Transport, S: KeyValueStorage> ApiClient<T, S> {
    pub fn new(base_url: impl Into<String>, transport: T, credentials: CredentialStore<S>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            transport,
            credentials,
            on_unauthorized: Rc::new(|| {}),
        }
    }

    /// Runs after credentials are cleared on a 401.
    pub fn with_unauthorized_handler(mut self, handler: impl Fn() + 'static) -> Self {
        self.on_unauthorized = Rc::new(handler);
        self
    }

    pub fn credentials(&self) -> &CredentialStore<S> {
        &self.credentials
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Build the outgoing request. The credential is read here, right before dispatch.
    pub fn build_request<B: Serialize + ?Sized>(
        &self,
        method: RequestMethod,
        path: &str,
        body: Option<&B>,
    ) -> Result<HttpRequest, ApiError> {
        let mut headers = vec![("Content-Type".to_string(), "application/json".to_string())];
        if let Some(token) = self.credentials.access_token() {
            headers.push(("Authorization".to_string(), format!("Bearer {}", token)));
        }

        let body = match body {
            Some(body) if method != RequestMethod::Get => Some(
                serde_json::to_string(body).map_err(|e| ApiError::Decode(e.to_string()))?,
            ),
            _ => None,
        };

        Ok(HttpRequest {
            method,
            url: self.url(path),
            headers,
            body,
        })
    }

    /// Map a raw response onto the envelope.
    pub fn interpret<R: DeserializeOwned>(&self, response: HttpResponse) -> Result<R, ApiError> {
        if response.status == 401 {
            log::info!("Received 401, clearing credentials");
            self.credentials.clear();
            (self.on_unauthorized)();
            return Err(ApiError::Unauthorized);
        }

        ApiResponse::<R>::from_json(&response.body)
            .map_err(|e| ApiError::Decode(format!("HTTP {}: {}", response.status, e)))?
            .into_result()
    }

    pub async fn request<R: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        method: RequestMethod,
        path: &str,
        body: Option<&B>,
    ) -> Result<R, ApiError> {
        let request = self.build_request(method, path, body)?;
        log::debug!("{} {}", request.method.as_str(), request.url);

        let response = self.transport.send(request).await.map_err(|e| {
            log::warn!("{} {} failed: {}", method.as_str(), path, e);
            e
        })?;

        self.interpret(response).map_err(|e| {
            if !e.is_unauthorized() {
                log::warn!("{} {} rejected: {}", method.as_str(), path, e);
            }
            e
        })
    }

    pub async fn get<R: DeserializeOwned>(&self, path: &str) -> Result<R, ApiError> {
        self.request::<R, ()>(RequestMethod::Get, path, None).await
    }

    pub async fn post<R: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<R, ApiError> {
        self.request(RequestMethod::Post, path, Some(body)).await
    }

    /// POST without a body.
    pub async fn post_empty<R: DeserializeOwned>(&self, path: &str) -> Result<R, ApiError> {
        self.request::<R, ()>(RequestMethod::Post, path, None).await
    }

    pub async fn patch<R: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<R, ApiError> {
        self.request(RequestMethod::Patch, path, Some(body)).await
    }

    pub async fn delete<R: DeserializeOwned>(&self, path: &str) -> Result<R, ApiError> {
        self.request::<R, ()>(RequestMethod::Delete, path, None).await
    }
}
