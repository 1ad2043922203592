use wasm_bindgen::JsValue;
use web_sys::{Document, History, Location, PopStateEvent, Window};

use crate::error::NavError;
use crate::model::NavigationRequest;
use crate::router::HistoryPort;

pub struct BrowserHistory {
    history: History,
    location: Location,
    document: Option<Document>,
}

impl BrowserHistory {
    pub fn new(window: &Window) -> Result<Self, NavError> {
        let history = window
            .history()
            .map_err(|_| NavError::Dom("window.history unavailable".into()))?;
        Ok(Self {
            history,
            location: window.location(),
            document: window.document(),
        })
    }

    /// An empty query still has to clear the one in the address bar.
    fn target_url(&self, url: &str) -> String {
        if url.is_empty() {
            self.location.pathname().unwrap_or_default()
        } else {
            url.to_owned()
        }
    }
}

fn state_object(request: &NavigationRequest) -> Result<JsValue, NavError> {
    js_sys::JSON::parse(&request.to_history_state()).map_err(|err| NavError::History(format!("{err:?}")))
}

impl HistoryPort for BrowserHistory {
    fn push(&self, request: &NavigationRequest, title: &str, url: &str) -> Result<(), NavError> {
        let state = state_object(request)?;
        self.history
            .push_state_with_url(&state, title, Some(&self.target_url(url)))
            .map_err(|err| NavError::History(format!("{err:?}")))
    }

    fn replace(&self, request: &NavigationRequest, title: &str, url: &str) -> Result<(), NavError> {
        let state = state_object(request)?;
        self.history
            .replace_state_with_url(&state, title, Some(&self.target_url(url)))
            .map_err(|err| NavError::History(format!("{err:?}")))
    }

    // Setting `location.hash` would be a fragment navigation: a state-less
    // entry plus a popstate that replays the start section.
    fn scroll_to_anchor(&self, anchor: &str) {
        match self.document.as_ref().and_then(|d| d.get_element_by_id(anchor)) {
            Some(target) => target.scroll_into_view(),
            None => log::debug!("scroll: no element `#{anchor}`"),
        }
    }
}

/// Serialized state carried by a popstate event, if it has any.
pub fn popstate_json(event: &PopStateEvent) -> Option<String> {
    let state = event.state();
    if state.is_null() || state.is_undefined() {
        return None;
    }
    js_sys::JSON::stringify(&state).ok()?.as_string()
}
