//! Core data models for site navigation.
//! Requests travel through the URL query string and the history state object,
//! so they serialize with the same field names the page's links use.

use serde::{Deserialize, Serialize};
use std::fmt;
use url::form_urlencoded;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub innerpage: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub word: Option<String>,
    #[serde(default, rename = "match", skip_serializing_if = "Option::is_none")]
    pub match_id: Option<String>,
}

/// The single view a request resolves to, after applying field priority.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Target<'a> {
    Match(&'a str),
    Word(&'a str),
    InnerPage(&'a str),
}

impl NavigationRequest {
    pub fn innerpage(id: impl Into<String>) -> Self {
        Self {
            innerpage: Some(id.into()),
            ..Default::default()
        }
    }

    pub fn word(id: impl Into<String>) -> Self {
        Self {
            word: Some(id.into()),
            ..Default::default()
        }
    }

    pub fn match_detail(id: impl Into<String>) -> Self {
        Self {
            match_id: Some(id.into()),
            ..Default::default()
        }
    }

    /// Empty ids carry no meaning on the page; drop them.
    pub fn normalized(self) -> Self {
        let keep = |v: Option<String>| v.filter(|s| !s.is_empty());
        Self {
            innerpage: keep(self.innerpage),
            word: keep(self.word),
            match_id: keep(self.match_id),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.target().is_none()
    }

    /// match > word > innerpage. `None` means "show the start section".
    pub fn target(&self) -> Option<Target<'_>> {
        fn present(v: &Option<String>) -> Option<&str> {
            v.as_deref().filter(|s| !s.is_empty())
        }
        if let Some(id) = present(&self.match_id) {
            return Some(Target::Match(id));
        }
        if let Some(id) = present(&self.word) {
            return Some(Target::Word(id));
        }
        present(&self.innerpage).map(Target::InnerPage)
    }

    /// Decode a history state object previously pushed by the router.
    /// Returns `None` for missing, unparsable or field-less state.
    pub fn from_history_state(raw: &str) -> Option<Self> {
        let request: Self = serde_json::from_str(raw).ok()?;
        let request = request.normalized();
        (!request.is_empty()).then_some(request)
    }

    pub fn to_history_state(&self) -> String {
        // Only strings and optional fields, serialization cannot fail.
        serde_json::to_string(self).unwrap_or_else(|_| String::from("{}"))
    }
}

/// Fragment namespaces served next to the page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Namespace {
    Words,
    Matches,
}

impl Namespace {
    pub fn as_str(self) -> &'static str {
        match self {
            Namespace::Words => "words",
            Namespace::Matches => "matches",
        }
    }

    /// Id of the inner page that hosts fragments of this namespace.
    pub fn section_id(self) -> &'static str {
        match self {
            Namespace::Words => "word",
            Namespace::Matches => "match",
        }
    }

    /// `id` is encoded as a single path segment, so `/`, `?` and `#` stay
    /// inside the file name.
    pub fn fragment_path(self, base: &str, id: &str) -> String {
        let segment = encode_path_segment(id);
        format!("{base}{}/{segment}.inc.html", self.as_str())
    }

    pub fn request(self, id: &str) -> NavigationRequest {
        match self {
            Namespace::Words => NavigationRequest::word(id),
            Namespace::Matches => NavigationRequest::match_detail(id),
        }
    }

    pub fn view(self, id: &str) -> ViewState {
        match self {
            Namespace::Words => ViewState::Word(id.to_owned()),
            Namespace::Matches => ViewState::Match(id.to_owned()),
        }
    }
}

fn encode_path_segment(id: &str) -> String {
    // form encoding escapes every reserved byte; only its `+` for space
    // differs from path encoding.
    form_urlencoded::byte_serialize(id.as_bytes())
        .map(|chunk| if chunk == "+" { "%20" } else { chunk })
        .collect()
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What the router is currently showing. Starts as `Blank` until the first
/// request is processed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ViewState {
    #[default]
    Blank,
    InnerPage(String),
    Word(String),
    Match(String),
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle in image pixels. Bounds are inclusive on all sides.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Rectangle {
    pub x: f64,
    pub y: f64,
    #[serde(alias = "w")]
    pub width: f64,
    #[serde(alias = "h")]
    pub height: f64,
}

impl Rectangle {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.x && p.x <= self.x + self.width && p.y >= self.y && p.y <= self.y + self.height
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WordCloudEntry {
    pub id: String,
    #[serde(alias = "r")]
    pub rectangle: Rectangle,
}

impl WordCloudEntry {
    pub fn new(id: impl Into<String>, rectangle: Rectangle) -> Self {
        Self {
            id: id.into(),
            rectangle,
        }
    }
}
