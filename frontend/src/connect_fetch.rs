use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response};

use crate::types::{ApiRequest, ApiResponse};
use crate::utils::get_window;

pub async fn send(data: &ApiRequest) -> Result<ApiResponse, JsValue> {
    let opts = RequestInit::new();
    opts.set_method(data.method.as_str());
    opts.set_credentials(web_sys::RequestCredentials::SameOrigin);
    if let Some(body) = &data.body {
        opts.set_body(&JsValue::from_str(body));
    }

    let request = Request::new_with_str_and_init(&data.path, &opts)?;
    for (name, value) in &data.headers {
        request.headers().set(name, value)?;
    }

    let window = get_window().ok_or_else(|| JsValue::from_str("no window"))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request)).await?;
    let resp: Response = resp_value.dyn_into()?;

    let text = JsFuture::from(resp.text()?).await?;

    Ok(ApiResponse {
        status: resp.status(),
        body: text.as_string().unwrap_or_default(),
    })
}
