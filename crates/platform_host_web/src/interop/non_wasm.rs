fn unsupported() -> String {
    "Browser APIs are only available when compiled for wasm32".to_string()
}

pub async fn open_external_url(_url: &str) -> Result<(), String> {
    Err(unsupported())
}

pub fn scroll_to_anchor(_anchor_id: &str) -> Result<(), String> {
    Err(unsupported())
}

pub fn local_datetime_string() -> String {
    String::new()
}

pub fn random_index(_len: usize) -> usize {
    0
}
