//! Typed JSON requests over the browser fetch API
//!
//! Small generic helpers the rest of the bindings build on. Errors are
//! flattened to `String` for direct display in the UI.

use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response};

/// POST a JSON body and decode a JSON response.
pub async fn post_json<A: Serialize, R: for<'de> Deserialize<'de>>(
    path: &str,
    body: &A,
) -> Result<R, String> {
    let response = send_post(path, body).await?;

    let json_promise = response
        .json()
        .map_err(|_| "Response was not JSON".to_string())?;
    let json = JsFuture::from(json_promise)
        .await
        .map_err(|_| "Failed to read response body".to_string())?;

    serde_wasm_bindgen::from_value(json).map_err(|e| format!("Failed to decode response: {}", e))
}

/// POST a JSON body, ignoring the response payload.
pub async fn post_json_void<A: Serialize>(path: &str, body: &A) -> Result<(), String> {
    send_post(path, body).await.map(|_| ())
}

async fn send_post<A: Serialize>(path: &str, body: &A) -> Result<Response, String> {
    let payload =
        serde_json::to_string(body).map_err(|e| format!("Failed to serialize request: {}", e))?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_body(&JsValue::from_str(&payload));

    let request = Request::new_with_str_and_init(path, &opts)
        .map_err(|_| "Failed to build request".to_string())?;
    request
        .headers()
        .set("Content-Type", "application/json")
        .map_err(|_| "Failed to set request headers".to_string())?;

    let window = web_sys::window().ok_or_else(|| "No window available".to_string())?;
    let response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|_| "Network request failed".to_string())?;
    let response: Response = response
        .dyn_into()
        .map_err(|_| "Unexpected fetch response".to_string())?;

    if !response.ok() {
        return Err(format!("Request failed with status {}", response.status()));
    }
    Ok(response)
}
