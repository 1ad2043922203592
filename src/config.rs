//! Page wiring: selectors, attribute names and presentation knobs.
//! Pages may override any field with an inline JSON block.

use log::LevelFilter;
use serde::Deserialize;

/// Id of the optional `<script type="application/json">` holding overrides.
pub const CONFIG_ELEMENT_ID: &str = "distillery-config";

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct NavConfig {
    pub section_selector: String,
    /// Attribute whose value `"true"` marks the start section.
    pub start_attribute: String,
    /// Fragment container inside a detail section.
    pub content_selector: String,
    pub heading_selector: String,
    pub title_prefix: String,
    pub fragment_base: String,
    pub cloud_selector: String,
    pub cloud_id_attribute: String,
    pub cloud_image_selector: String,
    pub glossary_selector: String,
    pub glossary_id_prefix: String,
    pub video_id: String,
    /// Element id scrolled into view after switching pages; unset keeps the scroll position.
    pub scroll_anchor: Option<String>,
    pub error_host_id: String,
    pub log_level: String,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            section_selector: "article.innerpage".into(),
            start_attribute: "data-start".into(),
            content_selector: ".innerpage".into(),
            heading_selector: "h3".into(),
            title_prefix: "distillery - ".into(),
            fragment_base: String::new(),
            cloud_selector: "figure.wordcloud".into(),
            cloud_id_attribute: "data-cloud-id".into(),
            cloud_image_selector: "img.wordcloud".into(),
            glossary_selector: "div.glossary-part".into(),
            glossary_id_prefix: "glossary-part-".into(),
            video_id: "main_video".into(),
            scroll_anchor: None,
            error_host_id: "nav-error".into(),
            log_level: "info".into(),
        }
    }
}

impl NavConfig {
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// Overrides from `raw` when present and valid, defaults otherwise.
    pub fn from_optional_json(raw: Option<&str>) -> Self {
        let Some(raw) = raw.map(str::trim).filter(|r| !r.is_empty()) else {
            return Self::default();
        };
        match Self::from_json(raw) {
            Ok(config) => config,
            Err(err) => {
                log::warn!("config: ignoring invalid #{CONFIG_ELEMENT_ID}: {err}");
                Self::default()
            }
        }
    }

    pub fn level_filter(&self) -> LevelFilter {
        self.log_level.parse().unwrap_or(LevelFilter::Info)
    }
}
