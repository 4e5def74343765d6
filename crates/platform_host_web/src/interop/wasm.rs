use wasm_bindgen::JsCast;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions};

fn window() -> Result<web_sys::Window, String> {
    web_sys::window().ok_or_else(|| "window is unavailable".to_string())
}

pub async fn open_external_url(url: &str) -> Result<(), String> {
    let opened = window()?
        .open_with_url_and_target(url, "_blank")
        .map_err(|err| format!("{err:?}"))?;
    if opened.is_none() {
        return Err("popup blocked by the browser".to_string());
    }
    Ok(())
}

pub fn scroll_to_anchor(anchor_id: &str) -> Result<(), String> {
    let document = window()?
        .document()
        .ok_or_else(|| "document is unavailable".to_string())?;
    let element = document
        .get_element_by_id(anchor_id)
        .ok_or_else(|| format!("no element with id '{anchor_id}'"))?;
    let mut options = ScrollIntoViewOptions::new();
    options.behavior(ScrollBehavior::Smooth);
    element.scroll_into_view_with_scroll_into_view_options(&options);
    // Move focus along for keyboard users when the target can take it.
    if let Some(html) = element.dyn_ref::<web_sys::HtmlElement>() {
        let _ = html.focus();
    }
    Ok(())
}

pub fn local_datetime_string() -> String {
    String::from(js_sys::Date::new_0().to_string())
}

pub fn random_index(len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    let raw = (js_sys::Math::random() * len as f64) as usize;
    raw.min(len - 1)
}
