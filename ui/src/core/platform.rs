//! Platform glue: HTTP posting and timers, split by target.
//!
//! - Web/WASM: `fetch` through `web-sys`, timers through `gloo-timers`.
//! - Native (desktop renderer, server-side rendering): a blocking `ureq` call
//!   moved onto tokio's blocking pool, timers through `tokio::time`.

use super::transport::SubmitError;

/// A fully prepared `POST` with a JSON body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub url: String,
    pub body: String,
    pub headers: Vec<(&'static str, String)>,
}

/// Raw answer: status code and body text (possibly empty).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpReply {
    pub status: u16,
    pub body: String,
}

#[cfg(target_arch = "wasm32")]
pub async fn post_json(request: HttpRequest) -> Result<HttpReply, SubmitError> {
    use wasm_bindgen::{JsCast, JsValue};
    use wasm_bindgen_futures::JsFuture;

    let js_err = |err: JsValue| SubmitError::Network(format!("{err:?}"));

    let headers = web_sys::Headers::new().map_err(js_err)?;
    for (name, value) in &request.headers {
        headers.set(name, value).map_err(js_err)?;
    }

    let init = web_sys::RequestInit::new();
    init.set_method("POST");
    init.set_headers(&headers);
    init.set_body(&JsValue::from_str(&request.body));

    let fetch_request =
        web_sys::Request::new_with_str_and_init(&request.url, &init).map_err(js_err)?;
    let window =
        web_sys::window().ok_or_else(|| SubmitError::Network("no window available".into()))?;

    let value = JsFuture::from(window.fetch_with_request(&fetch_request))
        .await
        .map_err(js_err)?;
    let response: web_sys::Response = value.dyn_into().map_err(js_err)?;

    let status = response.status();
    // An unreadable body is treated like an empty one; the status decides.
    let body = match response.text() {
        Ok(promise) => JsFuture::from(promise)
            .await
            .ok()
            .and_then(|text| text.as_string())
            .unwrap_or_default(),
        Err(_) => String::new(),
    };

    Ok(HttpReply { status, body })
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn post_json(request: HttpRequest) -> Result<HttpReply, SubmitError> {
    tokio::task::spawn_blocking(move || blocking_post(request))
        .await
        .map_err(|err| SubmitError::Network(format!("request task failed: {err}")))?
}

#[cfg(not(target_arch = "wasm32"))]
fn blocking_post(request: HttpRequest) -> Result<HttpReply, SubmitError> {
    // Non-2xx answers are data here, not errors; `api::classify` decides.
    let agent: ureq::Agent = ureq::Agent::config_builder()
        .http_status_as_error(false)
        .build()
        .into();

    let mut builder = agent.post(&request.url);
    for (name, value) in &request.headers {
        builder = builder.header(*name, value.as_str());
    }

    let mut response = builder
        .send(request.body)
        .map_err(|err| SubmitError::Network(err.to_string()))?;

    let status = response.status().as_u16();
    let body = response.body_mut().read_to_string().unwrap_or_default();

    Ok(HttpReply { status, body })
}

#[cfg(target_arch = "wasm32")]
pub async fn sleep_ms(ms: u64) {
    gloo_timers::future::TimeoutFuture::new(ms.min(u32::MAX as u64) as u32).await;
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn sleep_ms(ms: u64) {
    tokio::time::sleep(std::time::Duration::from_millis(ms)).await;
}
