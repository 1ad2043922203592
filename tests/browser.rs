#![cfg(target_arch = "wasm32")]

use std::rc::Rc;

use distillery_nav::web::WebRouter;
use distillery_nav::web::banner::BannerSink;
use distillery_nav::web::cloud_binding::{CloudBinding, bind_all};
use distillery_nav::web::dom::{DomSection, collect_glossary, collect_sections};
use distillery_nav::web::fetch::HttpFragmentStore;
use distillery_nav::web::history::{BrowserHistory, popstate_json};
use distillery_nav::web::media::medium_jump;
use distillery_nav::{
    CloudRegistry, HistoryPort, NavConfig, NavError, NavigationRequest, Rectangle, SectionHandle,
    SectionTable, ViewRouter, ViewState, WordCloudEntry,
};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_test::*;
use web_sys::{
    Document, Element, HtmlElement, MouseEvent, MouseEventInit, PopStateEvent, PopStateEventInit,
};

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> Document {
    web_sys::window()
        .and_then(|window| window.document())
        .expect("document available")
}

fn mount(markup: &str) -> HtmlElement {
    let document = document();
    let root = document
        .create_element("div")
        .expect("create test root")
        .dyn_into::<HtmlElement>()
        .expect("div is an HtmlElement");
    root.set_inner_html(markup);
    document
        .body()
        .expect("body available")
        .append_child(&root)
        .expect("append test root");
    root
}

fn display(table: &SectionTable<DomSection>, id: &str) -> String {
    table
        .get(id)
        .expect("section present")
        .element()
        .style()
        .get_property_value("display")
        .unwrap_or_default()
}

#[wasm_bindgen_test]
fn sections_toggle_and_fill_from_markup() {
    let root = mount(
        r#"<article class="innerpage" id="t-intro" data-start="true"><h3> Intro </h3></article>
           <article class="innerpage" id="t-word"><h3>Word</h3><div class="innerpage"></div></article>"#,
    );
    let config = NavConfig::default();
    let table = collect_sections(&document(), &config);

    assert_eq!(table.start_id(), Some("t-intro"));
    assert_eq!(
        table.get("t-intro").and_then(|s| s.heading()),
        Some("Intro".to_owned())
    );

    let word = table.show_only("t-word").expect("known section");
    word.set_content("<p>hops</p>");
    assert_eq!(display(&table, "t-word"), "inherit");
    assert_eq!(display(&table, "t-intro"), "none");
    let inner = root
        .query_selector("#t-word div.innerpage")
        .unwrap()
        .expect("fragment container");
    assert_eq!(inner.inner_html(), "<p>hops</p>");

    assert_eq!(
        table.show_only("t-missing").err(),
        Some(NavError::UnknownSection { id: "t-missing".into() })
    );
    root.remove();
}

#[wasm_bindgen_test]
fn glossary_parts_are_keyed_without_prefix() {
    let root = mount(
        r#"<div class="glossary-part" id="glossary-part-a"></div>
           <div class="glossary-part" id="glossary-part-b"></div>"#,
    );
    let table = collect_glossary(&document(), &NavConfig::default());
    assert!(table.get("a").is_some());
    assert!(table.get("b").is_some());
    assert!(table.get("glossary-part-a").is_none());
    root.remove();
}

fn test_router() -> Rc<WebRouter> {
    let window = web_sys::window().expect("window available");
    let host = document().create_element("div").expect("banner host");
    Rc::new(ViewRouter::new(
        SectionTable::new(),
        BrowserHistory::new(&window).expect("history available"),
        HttpFragmentStore::new(""),
        BannerSink::mount(host),
    ))
}

fn query(root: &HtmlElement, selector: &str) -> Element {
    root.query_selector(selector)
        .expect("valid selector")
        .expect("element present")
}

fn pointer(target: &HtmlElement, kind: &str, x: f64, y: f64) {
    let init = MouseEventInit::new();
    init.set_bubbles(true);
    init.set_client_x(x as i32);
    init.set_client_y(y as i32);
    let event = MouseEvent::new_with_mouse_event_init_dict(kind, &init).expect("mouse event");
    target.dispatch_event(&event).expect("dispatch");
}

fn cursor(image: &HtmlElement) -> String {
    image.style().get_property_value("cursor").unwrap_or_default()
}

const FRUIT_CLOUD: &str = r#"<figure class="wordcloud" data-cloud-id="t-fruit">
    <img class="wordcloud" style="display:block; width:100px; height:40px;">
</figure>"#;

#[wasm_bindgen_test]
fn cloud_cursor_follows_registered_words() {
    let root = mount(FRUIT_CLOUD);
    let router = test_router();
    let registry = Rc::new(CloudRegistry::new());
    registry.register_cloud(
        "t-fruit",
        vec![WordCloudEntry::new("apple", Rectangle::new(0.0, 0.0, 10.0, 10.0))],
    );
    let binding = CloudBinding::bind(
        &query(&root, "figure"),
        &NavConfig::default(),
        registry,
        router.clone(),
    )
    .expect("figure binds");
    assert_eq!(binding.cloud_id(), "t-fruit");

    let image: HtmlElement = query(&root, "img").dyn_into().expect("img is an HtmlElement");
    let rect = image.get_bounding_client_rect();
    pointer(&image, "mousemove", rect.left() + 5.0, rect.top() + 5.0);
    assert_eq!(cursor(&image), "pointer");
    pointer(&image, "mousemove", rect.left() + 50.0, rect.top() + 30.0);
    assert_eq!(cursor(&image), "default");

    // A click between words starts no navigation.
    pointer(&image, "click", rect.left() + 50.0, rect.top() + 30.0);
    assert_eq!(router.current_view(), ViewState::Blank);

    // Dropping the binding detaches its listeners.
    drop(binding);
    pointer(&image, "mousemove", rect.left() + 5.0, rect.top() + 5.0);
    assert_eq!(cursor(&image), "default");
    root.remove();
}

#[wasm_bindgen_test]
fn incomplete_cloud_figures_are_not_bound() {
    let root = mount(
        r#"<figure class="wordcloud" id="t-no-id"><img class="wordcloud"></figure>
           <figure class="wordcloud" id="t-no-img" data-cloud-id="t-empty"></figure>"#,
    );
    let router = test_router();
    let registry = Rc::new(CloudRegistry::new());
    let config = NavConfig::default();

    for selector in ["#t-no-id", "#t-no-img"] {
        let bound = CloudBinding::bind(&query(&root, selector), &config, registry.clone(), router.clone());
        assert!(bound.is_none(), "{selector} should not bind");
    }
    root.remove();
}

#[wasm_bindgen_test]
fn bind_all_skips_incomplete_figures() {
    let root = mount(&format!(
        r#"{FRUIT_CLOUD}<figure class="wordcloud"><img class="wordcloud"></figure>"#
    ));
    let registry = Rc::new(CloudRegistry::new());
    let bindings = bind_all(&document(), &NavConfig::default(), &registry, &test_router());
    let ids: Vec<&str> = bindings.iter().map(CloudBinding::cloud_id).collect();
    assert_eq!(ids, vec!["t-fruit"]);
    root.remove();
}

fn history_state_json(history: &web_sys::History) -> String {
    let state = history.state().expect("history state");
    js_sys::JSON::stringify(&state)
        .expect("state serializes")
        .as_string()
        .expect("string state")
}

#[wasm_bindgen_test]
fn browser_history_stores_request_as_state() {
    let window = web_sys::window().expect("window available");
    let history = window.history().expect("history available");
    let original = window.location().href().expect("href");
    let browser = BrowserHistory::new(&window).expect("history port");
    let before = history.length().expect("length");

    browser
        .push(&NavigationRequest::word("a&b"), "", "?word=a%26b")
        .expect("push accepted");
    assert_eq!(history.length().expect("length"), before + 1);
    assert_eq!(window.location().search().expect("search"), "?word=a%26b");
    assert_eq!(
        NavigationRequest::from_history_state(&history_state_json(&history)),
        Some(NavigationRequest::word("a&b"))
    );

    browser
        .replace(&NavigationRequest::innerpage("intro"), "", "?innerpage=intro")
        .expect("replace accepted");
    assert_eq!(history.length().expect("length"), before + 1);
    assert_eq!(
        NavigationRequest::from_history_state(&history_state_json(&history)),
        Some(NavigationRequest::innerpage("intro"))
    );

    history
        .replace_state_with_url(&JsValue::NULL, "", Some(&original))
        .expect("restore url");
}

#[wasm_bindgen_test]
fn scrolling_to_anchor_leaves_history_alone() {
    let root = mount(r#"<nav id="t-main-menu"></nav>"#);
    let window = web_sys::window().expect("window available");
    let history = window.history().expect("history available");
    let before = history.length().expect("length");
    let hash = window.location().hash().expect("hash");

    let browser = BrowserHistory::new(&window).expect("history port");
    browser.scroll_to_anchor("t-main-menu");
    browser.scroll_to_anchor("t-missing");

    assert_eq!(history.length().expect("length"), before);
    assert_eq!(window.location().hash().expect("hash"), hash);
    root.remove();
}

#[wasm_bindgen_test]
fn popstate_state_is_read_back_as_json() {
    let init = PopStateEventInit::new();
    init.set_state(&js_sys::JSON::parse(r#"{"match":"m1"}"#).expect("json"));
    let event = PopStateEvent::new_with_event_init_dict("popstate", &init).expect("event");
    let json = popstate_json(&event).expect("state present");
    assert_eq!(
        NavigationRequest::from_history_state(&json),
        Some(NavigationRequest::match_detail("m1"))
    );

    let empty = PopStateEvent::new("popstate").expect("event");
    assert_eq!(popstate_json(&empty), None);
}

#[wasm_bindgen_test]
fn medium_jump_needs_the_video_element() {
    let root = mount(r#"<video id="t-video"></video>"#);
    let document = document();
    assert_eq!(medium_jump(&document, "t-video", 12.0), Ok(()));
    assert!(matches!(
        medium_jump(&document, "t-no-video", 12.0),
        Err(NavError::Dom(_))
    ));
    root.remove();
}
