use serde::de::DeserializeOwned;
use serde::Serialize;

use shared::constants::{API_PRODUCTS, CONTENT_TYPE_JSON, HEADER_CONTENT_TYPE};
use shared::types::{Credentials, ErrorResponse, MessageResponse, Product, ProductRequest, TokenResponse};
use shared::utils::{api_path, product_path};

use crate::error::ApiError;
use crate::platform::Platform;
use crate::session::Session;
use crate::types::{ApiRequest, ApiResponse, Headers, Method};

/// Posts credentials to `auth/login` or `auth/register`. A 401 here means bad
/// credentials and is reported as a plain server error.
pub async fn authenticate<P: Platform>(platform: &P, endpoint: &str, credentials: &Credentials) -> Result<TokenResponse, ApiError> {
    let headers = vec![(HEADER_CONTENT_TYPE, CONTENT_TYPE_JSON.to_string())];
    let request = build(Method::Post, api_path(endpoint), headers, Some(credentials))?;
    let response = platform.fetch(request).await?;
    decode(response, false)
}

pub async fn list_products<P: Platform>(session: &Session<P>) -> Result<Vec<Product>, ApiError> {
    let request = build::<()>(Method::Get, api_path(API_PRODUCTS), session.api_headers(), None)?;
    let response = session.platform().fetch(request).await?;
    // an empty collection comes back as `null`
    decode::<Option<Vec<Product>>>(response, true).map(Option::unwrap_or_default)
}

pub async fn create_product<P: Platform>(session: &Session<P>, data: &ProductRequest) -> Result<Product, ApiError> {
    let request = build(Method::Post, api_path(API_PRODUCTS), session.api_headers(), Some(data))?;
    let response = session.platform().fetch(request).await?;
    decode(response, true)
}

pub async fn update_product<P: Platform>(session: &Session<P>, id: &str, data: &ProductRequest) -> Result<Product, ApiError> {
    let request = build(Method::Put, product_path(id), session.api_headers(), Some(data))?;
    let response = session.platform().fetch(request).await?;
    decode(response, true)
}

pub async fn delete_product<P: Platform>(session: &Session<P>, id: &str) -> Result<MessageResponse, ApiError> {
    let request = build::<()>(Method::Delete, product_path(id), session.api_headers(), None)?;
    let response = session.platform().fetch(request).await?;
    decode(response, true)
}

fn build<T: Serialize>(method: Method, path: String, headers: Headers, data: Option<&T>) -> Result<ApiRequest, ApiError> {
    let body = match data {
        Some(data) => Some(serde_json::to_string(data).map_err(|err| ApiError::Decode(err.to_string()))?),
        None => None,
    };
    Ok(ApiRequest { method, path, headers, body })
}

fn decode<T: DeserializeOwned>(response: ApiResponse, authenticated: bool) -> Result<T, ApiError> {
    if authenticated && response.status == 401 {
        return Err(ApiError::Unauthorized);
    }
    if response.is_success() {
        return serde_json::from_str(&response.body).map_err(|err| ApiError::Decode(err.to_string()));
    }
    let message = serde_json::from_str::<ErrorResponse>(&response.body)
        .ok()
        .and_then(|body| body.error)
        .filter(|text| !text.is_empty());
    log::info!("request failed with {}: {:?}", response.status, message);
    Err(ApiError::Server { status: response.status, message })
}
