//! Client-side navigation for the distillery content site: inner-page
//! switching synchronized with browser history, on-demand word/match
//! fragments, and click targets on word-cloud images.

use wasm_bindgen::prelude::*;

pub mod cloud;
mod components;
pub mod config;
pub mod error;
mod logging;
pub mod model;
pub mod query;
pub mod router;
pub mod sections;
pub mod web;

pub use cloud::{CloudRegistry, CursorAffordance};
pub use config::NavConfig;
pub use error::{FetchError, NavError};
pub use model::{NavigationRequest, Namespace, Point, Rectangle, ViewState, WordCloudEntry};
pub use router::{ErrorSink, FragmentStore, HistoryPort, ViewRouter};
pub use sections::{SectionHandle, SectionTable};

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    web::boot().map_err(web::to_js)
}
