//! Lookup table of mutually exclusive page sections, built once at startup.

use crate::error::NavError;

/// A toggleable region of the page.
pub trait SectionHandle {
    fn set_visible(&self, visible: bool);
    /// Text of the section's first heading, if any.
    fn heading(&self) -> Option<String>;
    /// Replace the section's fragment container with `markup`.
    fn set_content(&self, markup: &str);
}

pub struct SectionTable<S> {
    sections: Vec<(String, S)>,
    start: Option<String>,
}

impl<S> Default for SectionTable<S> {
    fn default() -> Self {
        Self {
            sections: Vec::new(),
            start: None,
        }
    }
}

impl<S: SectionHandle> SectionTable<S> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a section. A later section with the same id replaces the earlier
    /// one; only the first start marker is honoured.
    pub fn insert(&mut self, id: impl Into<String>, handle: S, is_start: bool) {
        let id = id.into();
        if is_start {
            match &self.start {
                None => self.start = Some(id.clone()),
                Some(existing) if *existing != id => {
                    log::warn!("sections: `{id}` is also marked as start, keeping `{existing}`");
                }
                Some(_) => {}
            }
        }
        if let Some(slot) = self.sections.iter_mut().find(|(key, _)| *key == id) {
            log::warn!("sections: duplicate id `{id}`, later section wins");
            slot.1 = handle;
        } else {
            self.sections.push((id, handle));
        }
    }

    pub fn with(mut self, id: impl Into<String>, handle: S, is_start: bool) -> Self {
        self.insert(id, handle, is_start);
        self
    }

    pub fn get(&self, id: &str) -> Option<&S> {
        self.sections
            .iter()
            .find(|(key, _)| key == id)
            .map(|(_, handle)| handle)
    }

    pub fn start_id(&self) -> Option<&str> {
        self.start.as_deref()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.sections.iter().map(|(id, _)| id.as_str())
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Hide every section, then reveal `id`. Unknown ids leave the page untouched.
    pub fn show_only(&self, id: &str) -> Result<&S, NavError> {
        let target = self.get(id).ok_or_else(|| NavError::unknown_section(id))?;
        for (_, handle) in &self.sections {
            handle.set_visible(false);
        }
        target.set_visible(true);
        Ok(target)
    }
}
