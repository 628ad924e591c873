use contracts::table::TableData;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

use crate::shared::api_utils::api_base;

/// GET the full column/row snapshot for a named table.
pub async fn fetch_table(name: &str) -> Result<TableData, String> {
    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::Cors);

    let url = format!("{}/json_table/{}", api_base(), urlencoding::encode(name));
    let request = Request::new_with_str_and_init(&url, &opts).map_err(|e| format!("{e:?}"))?;
    request
        .headers()
        .set("Accept", "application/json")
        .map_err(|e| format!("{e:?}"))?;

    send(request).await
}

/// POST the form-encoded filter mapping to the search endpoint and
/// get back the filtered snapshot.
pub async fn search_table(name: &str, form_body: &str) -> Result<TableData, String> {
    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_body(&wasm_bindgen::JsValue::from_str(form_body));

    let url = format!("{}/json_search/{}", api_base(), urlencoding::encode(name));
    let request = Request::new_with_str_and_init(&url, &opts).map_err(|e| format!("{e:?}"))?;
    let headers = request.headers();
    headers
        .set("Accept", "application/json")
        .map_err(|e| format!("{e:?}"))?;
    headers
        .set("Content-Type", "application/x-www-form-urlencoded")
        .map_err(|e| format!("{e:?}"))?;

    send(request).await
}

// Network errors, HTTP error statuses and parse failures all collapse
// into Err(String); the caller decides the user-facing message.
async fn send(request: Request) -> Result<TableData, String> {
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
    let text: String = text.as_string().ok_or_else(|| "bad text".to_string())?;
    serde_json::from_str::<TableData>(&text).map_err(|e| format!("{e}"))
}
