//! Functions exported to the page's inline handlers.

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;

use super::{current_app, to_js};
use crate::error::NavError;
use crate::model::NavigationRequest;

fn not_ready() -> JsValue {
    to_js(NavError::Dom("navigation not initialised".into()))
}

fn navigate(request: NavigationRequest) {
    let Some(app) = current_app() else {
        log::warn!("api: {request:?} before boot");
        return;
    };
    spawn_local(async move {
        app.router.navigate(&request, true).await;
    });
}

#[wasm_bindgen]
pub fn innerpage(page_id: String) {
    navigate(NavigationRequest::innerpage(page_id));
}

#[wasm_bindgen]
pub fn word(word_id: String) {
    navigate(NavigationRequest::word(word_id));
}

#[wasm_bindgen(js_name = "match")]
pub fn match_detail(match_id: String) {
    navigate(NavigationRequest::match_detail(match_id));
}

#[wasm_bindgen]
pub fn glossary(part_id: &str) -> Result<(), JsValue> {
    let app = current_app().ok_or_else(not_ready)?;
    app.router.show_glossary_part(part_id).map_err(to_js)
}

#[wasm_bindgen]
pub fn medium_jump(seconds: f64) -> Result<(), JsValue> {
    let app = current_app().ok_or_else(not_ready)?;
    super::media::medium_jump(&app.document, &app.config.video_id, seconds).map_err(to_js)?;
    app.router.scroll_to_page();
    Ok(())
}

/// `json` is an array of `{"id": .., "r": {"x", "y", "w", "h"}}` in image pixels.
#[wasm_bindgen]
pub fn register_cloud_data(cloud_id: &str, json: &str) -> Result<(), JsValue> {
    let app = current_app().ok_or_else(not_ready)?;
    app.clouds.register_json(cloud_id, json).map(|_| ()).map_err(|err| {
        log::error!("api: {err}");
        to_js(err)
    })
}
