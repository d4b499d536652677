//! UI configuration: embedded defaults, optionally overridden by a
//! `<script id="ui-config" type="application/toml">` block in index.html.

use contracts::shared::config::{load_config, UiConfig};
use leptos::prelude::*;

const CONFIG_ELEMENT_ID: &str = "ui-config";

fn config_override() -> Option<String> {
    let document = web_sys::window()?.document()?;
    let text = document.get_element_by_id(CONFIG_ELEMENT_ID)?.text_content()?;
    if text.trim().is_empty() {
        None
    } else {
        Some(text)
    }
}

pub fn read_config() -> UiConfig {
    load_config(config_override().as_deref())
}

pub fn use_config() -> UiConfig {
    use_context::<UiConfig>().expect("UiConfig not provided")
}
