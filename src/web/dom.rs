//! DOM-backed sections and the tables built from them at startup.

use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

use crate::config::NavConfig;
use crate::sections::{SectionHandle, SectionTable};

pub struct DomSection {
    element: HtmlElement,
    content_selector: Rc<str>,
    heading_selector: Rc<str>,
}

impl DomSection {
    pub fn new(element: HtmlElement, content_selector: Rc<str>, heading_selector: Rc<str>) -> Self {
        Self {
            element,
            content_selector,
            heading_selector,
        }
    }

    pub fn element(&self) -> &HtmlElement {
        &self.element
    }
}

impl SectionHandle for DomSection {
    fn set_visible(&self, visible: bool) {
        let display = if visible { "inherit" } else { "none" };
        let _ = self.element.style().set_property("display", display);
    }

    fn heading(&self) -> Option<String> {
        self.element
            .query_selector(&self.heading_selector)
            .ok()
            .flatten()
            .and_then(|h| h.text_content())
            .map(|text| text.trim().to_owned())
            .filter(|text| !text.is_empty())
    }

    fn set_content(&self, markup: &str) {
        match self.element.query_selector(&self.content_selector) {
            Ok(Some(container)) => container.set_inner_html(markup),
            _ => self.element.set_inner_html(markup),
        }
    }
}

fn html_elements(document: &Document, selector: &str) -> Vec<HtmlElement> {
    let Ok(list) = document.query_selector_all(selector) else {
        log::warn!("dom: invalid selector `{selector}`");
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect()
}

/// Inner pages keyed by element id; the start section carries `start_attribute="true"`.
pub fn collect_sections(document: &Document, config: &NavConfig) -> SectionTable<DomSection> {
    let content: Rc<str> = config.content_selector.as_str().into();
    let heading: Rc<str> = config.heading_selector.as_str().into();
    let mut table = SectionTable::new();
    for element in html_elements(document, &config.section_selector) {
        let id = element.id();
        if id.is_empty() {
            log::warn!("dom: skipping section without id");
            continue;
        }
        let is_start = element.get_attribute(&config.start_attribute).as_deref() == Some("true");
        table.insert(id, DomSection::new(element, content.clone(), heading.clone()), is_start);
    }
    table
}

/// Glossary parts keyed by the id with `glossary_id_prefix` stripped.
pub fn collect_glossary(document: &Document, config: &NavConfig) -> SectionTable<DomSection> {
    let content: Rc<str> = config.content_selector.as_str().into();
    let heading: Rc<str> = config.heading_selector.as_str().into();
    let mut table = SectionTable::new();
    for element in html_elements(document, &config.glossary_selector) {
        let id = element.id();
        let Some(part) = id.strip_prefix(config.glossary_id_prefix.as_str()) else {
            continue;
        };
        let part = part.to_owned();
        table.insert(part, DomSection::new(element, content.clone(), heading.clone()), false);
    }
    table
}

/// Host element for the error banner, appended to `<body>` when missing.
pub fn error_host(document: &Document, id: &str) -> Option<Element> {
    if let Some(host) = document.get_element_by_id(id) {
        return Some(host);
    }
    let host = document.create_element("div").ok()?;
    host.set_id(id);
    document.body()?.append_child(&host).ok()?;
    Some(host)
}
