//! View router: turns navigation requests into section visibility changes and
//! mirrors them into browser history.

use std::cell::RefCell;
use std::future::Future;

use crate::error::{FetchError, NavError};
use crate::model::{Namespace, NavigationRequest, Target, ViewState};
use crate::query::{build_url, parse_request};
use crate::sections::{SectionHandle, SectionTable};

/// Browser history and location, as far as the router needs them.
pub trait HistoryPort {
    fn push(&self, request: &NavigationRequest, title: &str, url: &str) -> Result<(), NavError>;
    /// Rewrite the current entry without adding a new one.
    fn replace(&self, request: &NavigationRequest, title: &str, url: &str) -> Result<(), NavError>;
    /// Bring the element with id `anchor` into view. Must not change the URL
    /// or the history stack.
    fn scroll_to_anchor(&self, anchor: &str);
}

/// Source of word/match detail markup.
pub trait FragmentStore {
    fn fetch(
        &self,
        namespace: Namespace,
        id: &str,
    ) -> impl Future<Output = Result<String, FetchError>>;
}

/// Where failed navigations are reported.
pub trait ErrorSink {
    fn report(&self, error: &NavError);
    /// Called after a navigation succeeds.
    fn clear(&self) {}
}

pub struct ViewRouter<S, H, F, E> {
    pages: SectionTable<S>,
    glossary: SectionTable<S>,
    history: H,
    fragments: F,
    errors: E,
    title_prefix: String,
    scroll_anchor: Option<String>,
    view: RefCell<ViewState>,
}

impl<S, H, F, E> ViewRouter<S, H, F, E>
where
    S: SectionHandle,
    H: HistoryPort,
    F: FragmentStore,
    E: ErrorSink,
{
    pub fn new(pages: SectionTable<S>, history: H, fragments: F, errors: E) -> Self {
        Self {
            pages,
            glossary: SectionTable::new(),
            history,
            fragments,
            errors,
            title_prefix: String::new(),
            scroll_anchor: None,
            view: RefCell::new(ViewState::Blank),
        }
    }

    pub fn with_glossary(mut self, glossary: SectionTable<S>) -> Self {
        self.glossary = glossary;
        self
    }

    /// Prefix for inner-page history titles.
    pub fn with_title_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.title_prefix = prefix.into();
        self
    }

    /// Element id to scroll into view after a page switch. `None` keeps the scroll position.
    pub fn with_scroll_anchor(mut self, anchor: Option<String>) -> Self {
        self.scroll_anchor = anchor.filter(|a| !a.is_empty());
        self
    }

    pub fn sections(&self) -> &SectionTable<S> {
        &self.pages
    }

    pub fn history(&self) -> &H {
        &self.history
    }

    pub fn errors(&self) -> &E {
        &self.errors
    }

    pub fn current_view(&self) -> ViewState {
        self.view.borrow().clone()
    }

    pub fn show_innerpage(&self, page_id: &str, record_history: bool) -> Result<ViewState, NavError> {
        let section = self.pages.show_only(page_id)?;
        self.scroll_to_page();
        let view = ViewState::InnerPage(page_id.to_owned());
        *self.view.borrow_mut() = view.clone();
        if record_history {
            let heading = section.heading().unwrap_or_else(|| page_id.to_owned());
            let title = format!("{}{}", self.title_prefix, heading);
            self.record(&NavigationRequest::innerpage(page_id), &title)?;
        }
        Ok(view)
    }

    pub async fn show_word_detail(&self, word_id: &str, record_history: bool) -> Result<ViewState, NavError> {
        self.show_detail(Namespace::Words, word_id, record_history).await
    }

    pub async fn show_match_detail(&self, match_id: &str, record_history: bool) -> Result<ViewState, NavError> {
        self.show_detail(Namespace::Matches, match_id, record_history).await
    }

    async fn show_detail(&self, namespace: Namespace, id: &str, record_history: bool) -> Result<ViewState, NavError> {
        let section_id = namespace.section_id();
        let section = self
            .pages
            .get(section_id)
            .ok_or_else(|| NavError::unknown_section(section_id))?;
        let markup = self
            .fragments
            .fetch(namespace, id)
            .await
            .map_err(|source| NavError::FragmentFetch {
                namespace,
                id: id.to_owned(),
                source,
            })?;
        // Content goes in before the section becomes visible.
        section.set_content(&markup);
        self.show_innerpage(section_id, false)?;
        let view = namespace.view(id);
        *self.view.borrow_mut() = view.clone();
        if record_history {
            let title = section.heading().unwrap_or_else(|| id.to_owned());
            self.record(&namespace.request(id), &title)?;
        }
        Ok(view)
    }

    /// Dispatch on match > word > innerpage, falling back to the start section.
    pub async fn process_request(
        &self,
        request: &NavigationRequest,
        record_history: bool,
    ) -> Result<ViewState, NavError> {
        match request.target() {
            Some(Target::Match(id)) => self.show_match_detail(id, record_history).await,
            Some(Target::Word(id)) => self.show_word_detail(id, record_history).await,
            Some(Target::InnerPage(id)) => self.show_innerpage(id, record_history),
            None => {
                let start = self.pages.start_id().ok_or(NavError::NoStartSection)?;
                self.show_innerpage(start, record_history)
            }
        }
    }

    /// `process_request` with failures routed to the error sink.
    pub async fn navigate(&self, request: &NavigationRequest, record_history: bool) -> Option<ViewState> {
        log::info!("nav: {request:?} (history: {record_history})");
        match self.process_request(request, record_history).await {
            Ok(view) => {
                self.errors.clear();
                Some(view)
            }
            Err(err) => {
                log::error!("nav: {err}");
                self.errors.report(&err);
                None
            }
        }
    }

    /// Replay a history entry. `state` is the serialized state object, if any.
    pub async fn on_history_navigate(&self, state: Option<&str>) -> Option<ViewState> {
        let request = match state.and_then(NavigationRequest::from_history_state) {
            Some(request) => request,
            None => {
                log::warn!("nav: history entry without a usable state, showing start section");
                NavigationRequest::default()
            }
        };
        self.navigate(&request, false).await
    }

    /// Apply the request encoded in `search`, if there is one. The current
    /// entry is rewritten to carry the request so it replays on back/forward.
    pub async fn on_page_load(&self, search: &str) -> Option<ViewState> {
        let request = parse_request(search).normalized();
        if request.is_empty() {
            return None;
        }
        if let Err(err) = self.history.replace(&request, "", &build_url(&request)) {
            log::warn!("nav: could not tag initial history entry: {err}");
        }
        self.navigate(&request, false).await
    }

    /// Show one glossary part. Glossary switches are not recorded in history.
    pub fn show_glossary_part(&self, part_id: &str) -> Result<(), NavError> {
        self.glossary.show_only(part_id).map(|_| ())
    }

    pub fn scroll_to_page(&self) {
        if let Some(anchor) = &self.scroll_anchor {
            self.history.scroll_to_anchor(anchor);
        }
    }

    fn record(&self, request: &NavigationRequest, title: &str) -> Result<(), NavError> {
        self.history.push(request, title, &build_url(request))
    }
}
