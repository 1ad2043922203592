use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{JsFuture, spawn_local};
use web_sys::{Document, HtmlMediaElement};

use crate::error::NavError;

/// Start the page video if needed and seek to `seconds`.
pub fn medium_jump(document: &Document, video_id: &str, seconds: f64) -> Result<(), NavError> {
    let player = document
        .get_element_by_id(video_id)
        .and_then(|el| el.dyn_into::<HtmlMediaElement>().ok())
        .ok_or_else(|| NavError::Dom(format!("no media element `#{video_id}`")))?;
    if player.paused() {
        match player.play() {
            // Autoplay refusals reject the promise; the seek still applies.
            Ok(promise) => spawn_local(async move {
                if let Err(err) = JsFuture::from(promise).await {
                    log::debug!("media: play refused: {err:?}");
                }
            }),
            Err(err) => log::debug!("media: play failed: {err:?}"),
        }
    }
    player.set_current_time(seconds);
    Ok(())
}
