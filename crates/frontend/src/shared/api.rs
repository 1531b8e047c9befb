//! Thin client for the Smart Clear API.
//!
//! Every request goes against the single fixed base URL. There is no retry,
//! caching or backoff: a failed call surfaces one error string, and the
//! calling view renders it with its own "Reintentar" control.

use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

pub const API_BASE_URL: &str = "https://test-smart-clear-395411569598.us-central1.run.app";

/// Builds "?k=v&..." from the given pairs, percent-encoding the values.
/// Empty input yields an empty string.
pub fn query_string(pairs: &[(&str, String)]) -> String {
    if pairs.is_empty() {
        return String::new();
    }
    let encoded: Vec<String> = pairs
        .iter()
        .map(|(key, value)| format!("{}={}", key, urlencoding::encode(value)))
        .collect();
    format!("?{}", encoded.join("&"))
}

async fn send(request: Request) -> Result<String, String> {
    let window = web_sys::window().ok_or_else(|| "no window".to_string())?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| format!("{e:?}"))?;
    let resp: Response = resp_value.dyn_into().map_err(|e| format!("{e:?}"))?;

    if !resp.ok() {
        return Err(format!("HTTP {}", resp.status()));
    }

    let text = JsFuture::from(resp.text().map_err(|e| format!("{e:?}"))?)
        .await
        .map_err(|e| format!("{e:?}"))?;
    text.as_string().ok_or_else(|| "bad text".to_string())
}

async fn get_text(path_and_query: &str) -> Result<String, String> {
    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::Cors);

    let url = format!("{}{}", API_BASE_URL, path_and_query);
    let request = Request::new_with_str_and_init(&url, &opts).map_err(|e| format!("{e:?}"))?;
    request
        .headers()
        .set("Accept", "application/json")
        .map_err(|e| format!("{e:?}"))?;

    send(request).await
}

/// GET returning a single JSON object.
pub async fn get_json<T: DeserializeOwned>(path_and_query: &str) -> Result<T, String> {
    let text = get_text(path_and_query).await?;
    serde_json::from_str(&text).map_err(|e| format!("{e}"))
}

/// GET for list endpoints. A body that is valid JSON but not an array is
/// treated as an empty list, not an error.
pub async fn get_list<T: DeserializeOwned>(path_and_query: &str) -> Result<Vec<T>, String> {
    let text = get_text(path_and_query).await?;
    let value: serde_json::Value = serde_json::from_str(&text).map_err(|e| format!("{e}"))?;
    if !value.is_array() {
        return Ok(Vec::new());
    }
    serde_json::from_value(value).map_err(|e| format!("{e}"))
}

/// POST with a JSON body, returning the decoded JSON response.
pub async fn post_json<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
) -> Result<T, String> {
    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);

    let payload = serde_json::to_string(body).map_err(|e| format!("{e}"))?;
    opts.set_body(&wasm_bindgen::JsValue::from_str(&payload));

    let url = format!("{}{}", API_BASE_URL, path);
    let request = Request::new_with_str_and_init(&url, &opts).map_err(|e| format!("{e:?}"))?;
    request
        .headers()
        .set("Content-Type", "application/json")
        .map_err(|e| format!("{e:?}"))?;

    let text = send(request).await?;
    serde_json::from_str(&text).map_err(|e| format!("{e}"))
}

/// POST where only the HTTP status matters (e.g. alert dispatch).
pub async fn post_status<B: Serialize>(path: &str, body: &B) -> Result<(), String> {
    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);

    let payload = serde_json::to_string(body).map_err(|e| format!("{e}"))?;
    opts.set_body(&wasm_bindgen::JsValue::from_str(&payload));

    let url = format!("{}{}", API_BASE_URL, path);
    let request = Request::new_with_str_and_init(&url, &opts).map_err(|e| format!("{e:?}"))?;
    request
        .headers()
        .set("Content-Type", "application/json")
        .map_err(|e| format!("{e:?}"))?;

    send(request).await.map(|_| ())
}
