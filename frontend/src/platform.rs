use gloo_timers::future::TimeoutFuture;

use shared::types::Page;

use crate::config::CONFIG;
use crate::connect_fetch::send;
use crate::error::ApiError;
use crate::types::{ApiRequest, ApiResponse};
use crate::utils::{get_location, get_window, local_storage};

/// Browser side effects used by the page flows.
#[allow(async_fn_in_trait)]
pub trait Platform: 'static {
    fn load_token(&self) -> Option<String>;
    fn save_token(&self, token: &str);
    fn remove_token(&self);
    fn navigate(&self, page: Page);
    fn confirm(&self, message: &str) -> bool;
    async fn fetch(&self, request: ApiRequest) -> Result<ApiResponse, ApiError>;
    async fn sleep(&self, millis: u32);
}

pub struct WebPlatform;

impl Platform for WebPlatform {
    fn load_token(&self) -> Option<String> {
        local_storage()
            .and_then(|storage| storage.get_item(&CONFIG.token_key).ok())
            .and_then(|token| token)
            .filter(|token| !token.is_empty())
    }

    fn save_token(&self, token: &str) {
        if let Some(storage) = local_storage() {
            if let Err(err) = storage.set_item(&CONFIG.token_key, token) {
                log::error!("save_token: {:?}", err);
            }
        }
    }

    fn remove_token(&self) {
        if let Some(storage) = local_storage() {
            if let Err(err) = storage.remove_item(&CONFIG.token_key) {
                log::error!("remove_token: {:?}", err);
            }
        }
    }

    fn navigate(&self, page: Page) {
        log::info!("navigate: {}", page.path());
        if let Some(location) = get_location() {
            if let Err(err) = location.set_href(page.path()) {
                log::error!("navigate: {:?}", err);
            }
        }
    }

    fn confirm(&self, message: &str) -> bool {
        get_window()
            .and_then(|w| w.confirm_with_message(message).ok())
            .unwrap_or(false)
    }

    async fn fetch(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        send(&request).await.map_err(|err| {
            log::error!("{} {}: {:?}", request.method.as_str(), request.path, err);
            ApiError::Network(format!("{:?}", err))
        })
    }

    async fn sleep(&self, millis: u32) {
        TimeoutFuture::new(millis).await;
    }
}
