use bytes::Bytes;
use js_sys::{ArrayBuffer, Uint8Array};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestInit, RequestMode, Response};

use crate::{EnvironmentConfig, RegformError};

type HttpResult = Result<(Bytes, u16), RegformError>;

// the browser decides on timeouts, config is accepted to keep the
// signature of the native variant
pub async fn post_json(
    url: &str,
    body: Vec<u8>,
    _config: &EnvironmentConfig,
) -> HttpResult {
    let window = web_sys::window()
        .ok_or(RegformError::Message("No window available".to_string()))?;

    let request_init = RequestInit::new();
    request_init.set_method("POST");
    request_init.set_mode(RequestMode::Cors);

    let headers = Headers::new()?;
    headers.set("Content-Type", "application/json")?;
    headers.set("Accept", "application/json")?;
    request_init.set_headers(&headers);

    let body = String::from_utf8(body)
        .map_err(|e| RegformError::Message(e.to_string()))?;
    request_init.set_body(&JsValue::from_str(&body));

    let request = Request::new_with_str_and_init(url, &request_init)?;
    let response_js =
        JsFuture::from(window.fetch_with_request(&request)).await?;
    let response: Response = response_js.dyn_into()?;

    // error responses carry the message to show, so read the body either way
    let status = response.status();
    let body_js = JsFuture::from(response.array_buffer()?).await?;
    let body: ArrayBuffer = body_js.dyn_into()?;
    let body_bytes = Uint8Array::new(&body).to_vec();
    Ok((Bytes::from(body_bytes), status))
}
