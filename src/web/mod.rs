//! Browser wiring: builds the router, cloud registry and listeners from the
//! live document and keeps them alive for the page's lifetime.

pub mod api;
pub mod banner;
pub mod cloud_binding;
pub mod dom;
pub mod fetch;
pub mod history;
pub mod media;

use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::EventListener;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, PopStateEvent, Window};

use crate::cloud::CloudRegistry;
use crate::config::{CONFIG_ELEMENT_ID, NavConfig};
use crate::error::NavError;
use crate::logging;
use crate::router::ViewRouter;
use banner::BannerSink;
use cloud_binding::CloudBinding;
use dom::DomSection;
use fetch::HttpFragmentStore;
use history::BrowserHistory;

pub type WebRouter = ViewRouter<DomSection, BrowserHistory, HttpFragmentStore, BannerSink>;

/// Composition root. Owns everything the page's event handlers reach.
pub struct App {
    pub config: NavConfig,
    pub document: Document,
    pub router: Rc<WebRouter>,
    pub clouds: Rc<CloudRegistry>,
    _bindings: Vec<CloudBinding>,
    _popstate: EventListener,
}

thread_local! {
    static APP: RefCell<Option<Rc<App>>> = const { RefCell::new(None) };
}

pub fn current_app() -> Option<Rc<App>> {
    APP.with(|slot| slot.borrow().clone())
}

fn read_config(document: &Document) -> NavConfig {
    let raw = document
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|el| el.text_content());
    NavConfig::from_optional_json(raw.as_deref())
}

fn listen_popstate(window: &Window, router: Rc<WebRouter>) -> EventListener {
    EventListener::new(window, "popstate", move |event| {
        let state = event
            .dyn_ref::<PopStateEvent>()
            .and_then(history::popstate_json);
        let router = router.clone();
        spawn_local(async move {
            router.on_history_navigate(state.as_deref()).await;
        });
    })
}

pub fn boot() -> Result<(), NavError> {
    let window = web_sys::window().ok_or_else(|| NavError::Dom("no window".into()))?;
    let document = window
        .document()
        .ok_or_else(|| NavError::Dom("no document".into()))?;
    let config = read_config(&document);
    logging::init(config.level_filter());

    let pages = dom::collect_sections(&document, &config);
    let glossary = dom::collect_glossary(&document, &config);
    let host = dom::error_host(&document, &config.error_host_id)
        .ok_or_else(|| NavError::Dom(format!("cannot create #{}", config.error_host_id)))?;
    log::info!(
        "boot: {} sections (start: {}), {} glossary parts",
        pages.len(),
        pages.start_id().unwrap_or("none"),
        glossary.len()
    );

    let router = Rc::new(
        ViewRouter::new(
            pages,
            BrowserHistory::new(&window)?,
            HttpFragmentStore::new(config.fragment_base.clone()),
            BannerSink::mount(host),
        )
        .with_glossary(glossary)
        .with_title_prefix(config.title_prefix.clone())
        .with_scroll_anchor(config.scroll_anchor.clone()),
    );
    let clouds = Rc::new(CloudRegistry::new());
    let bindings = cloud_binding::bind_all(&document, &config, &clouds, &router);
    log::info!(
        "boot: clouds bound: [{}]",
        bindings.iter().map(CloudBinding::cloud_id).collect::<Vec<_>>().join(", ")
    );
    let popstate = listen_popstate(&window, router.clone());

    let app = Rc::new(App {
        config,
        document,
        router: router.clone(),
        clouds,
        _bindings: bindings,
        _popstate: popstate,
    });
    APP.with(|slot| *slot.borrow_mut() = Some(app));

    let search = window.location().search().unwrap_or_default();
    spawn_local(async move {
        router.on_page_load(&search).await;
    });
    Ok(())
}

pub fn to_js(err: NavError) -> JsValue {
    JsValue::from_str(&err.to_string())
}
