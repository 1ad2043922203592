//! Word-cloud hit-testing against registered rectangles.

use std::cell::RefCell;
use std::collections::HashMap;

use crate::error::NavError;
use crate::model::{Point, WordCloudEntry};

/// Rectangles per cloud id. Filled once per cloud at startup, read on every
/// pointer event afterwards.
#[derive(Default)]
pub struct CloudRegistry {
    clouds: RefCell<HashMap<String, Vec<WordCloudEntry>>>,
}

impl CloudRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `entries` for `cloud_id`, replacing anything registered before.
    pub fn register_cloud(&self, cloud_id: impl Into<String>, entries: Vec<WordCloudEntry>) {
        let cloud_id = cloud_id.into();
        log::debug!("cloud `{cloud_id}`: {} words", entries.len());
        self.clouds.borrow_mut().insert(cloud_id, entries);
    }

    /// Register from the page's JSON form: `[{"id": "..", "r": {"x","y","w","h"}}]`.
    /// Invalid JSON leaves the registry unchanged.
    pub fn register_json(&self, cloud_id: &str, json: &str) -> Result<usize, NavError> {
        let entries: Vec<WordCloudEntry> =
            serde_json::from_str(json).map_err(|err| NavError::CloudData {
                cloud_id: cloud_id.to_owned(),
                reason: err.to_string(),
            })?;
        let count = entries.len();
        self.register_cloud(cloud_id, entries);
        Ok(count)
    }

    pub fn is_registered(&self, cloud_id: &str) -> bool {
        self.clouds.borrow().contains_key(cloud_id)
    }

    /// Word under an image-local point. Overlaps resolve to the earliest
    /// registered rectangle.
    pub fn word_at(&self, cloud_id: &str, local: Point) -> Option<String> {
        let clouds = self.clouds.borrow();
        let Some(entries) = clouds.get(cloud_id) else {
            log::warn!("cloud `{cloud_id}` has no registered words");
            return None;
        };
        entries
            .iter()
            .find(|entry| entry.rectangle.contains(local))
            .map(|entry| entry.id.clone())
    }

    /// Word under a page-space pointer, given the image's page offset.
    pub fn hit_test(&self, cloud_id: &str, pointer: Point, image_origin: Point) -> Option<String> {
        let local = Point::new(pointer.x - image_origin.x, pointer.y - image_origin.y);
        self.word_at(cloud_id, local)
    }
}

/// Pointer style over a cloud image.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CursorAffordance {
    Interactive,
    Default,
}

impl CursorAffordance {
    pub fn for_hit(word: Option<&str>) -> Self {
        if word.is_some() {
            CursorAffordance::Interactive
        } else {
            CursorAffordance::Default
        }
    }

    pub fn css(self) -> &'static str {
        match self {
            CursorAffordance::Interactive => "pointer",
            CursorAffordance::Default => "default",
        }
    }
}
