//! Pointer handling for word-cloud figures.

use std::rc::Rc;

use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, Element, Event, HtmlElement, MouseEvent};

use super::WebRouter;
use crate::cloud::{CloudRegistry, CursorAffordance};
use crate::config::NavConfig;
use crate::model::{NavigationRequest, Point};

/// One cloud image and the id its rectangles are registered under.
pub struct CloudTarget {
    cloud_id: String,
    image: HtmlElement,
    registry: Rc<CloudRegistry>,
    router: Rc<WebRouter>,
}

impl CloudTarget {
    pub fn cloud_id(&self) -> &str {
        &self.cloud_id
    }

    fn image_origin(&self) -> Point {
        let rect = self.image.get_bounding_client_rect();
        let (scroll_x, scroll_y) = web_sys::window()
            .map(|w| (w.scroll_x().unwrap_or(0.0), w.scroll_y().unwrap_or(0.0)))
            .unwrap_or((0.0, 0.0));
        Point::new(rect.left() + scroll_x, rect.top() + scroll_y)
    }

    fn word_for(&self, event: &Event) -> Option<String> {
        let mouse = event.dyn_ref::<MouseEvent>()?;
        let pointer = Point::new(mouse.page_x() as f64, mouse.page_y() as f64);
        self.registry.hit_test(&self.cloud_id, pointer, self.image_origin())
    }

    pub fn on_click(&self, event: &Event) {
        let Some(word) = self.word_for(event) else {
            return;
        };
        log::debug!("cloud `{}`: clicked `{word}`", self.cloud_id);
        let router = self.router.clone();
        spawn_local(async move {
            router.navigate(&NavigationRequest::word(word), true).await;
        });
    }

    pub fn on_mouse_move(&self, event: &Event) {
        let affordance = CursorAffordance::for_hit(self.word_for(event).as_deref());
        let _ = self.image.style().set_property("cursor", affordance.css());
    }
}

/// Keeps a cloud's listeners attached for as long as it lives.
pub struct CloudBinding {
    target: Rc<CloudTarget>,
    _listeners: [EventListener; 2],
}

impl CloudBinding {
    pub fn bind(
        figure: &Element,
        config: &NavConfig,
        registry: Rc<CloudRegistry>,
        router: Rc<WebRouter>,
    ) -> Option<Self> {
        let Some(cloud_id) = figure.get_attribute(&config.cloud_id_attribute) else {
            log::warn!("cloud: figure without `{}`", config.cloud_id_attribute);
            return None;
        };
        let image = figure
            .query_selector(&config.cloud_image_selector)
            .ok()
            .flatten()
            .and_then(|img| img.dyn_into::<HtmlElement>().ok());
        let Some(image) = image else {
            log::warn!("cloud `{cloud_id}`: no `{}` inside figure", config.cloud_image_selector);
            return None;
        };
        let target = Rc::new(CloudTarget {
            cloud_id,
            image: image.clone(),
            registry,
            router,
        });
        let click = {
            let target = target.clone();
            EventListener::new(&image, "click", move |event| target.on_click(event))
        };
        let mouse_move = {
            let target = target.clone();
            EventListener::new(&image, "mousemove", move |event| target.on_mouse_move(event))
        };
        Some(Self {
            target,
            _listeners: [click, mouse_move],
        })
    }

    pub fn cloud_id(&self) -> &str {
        self.target.cloud_id()
    }
}

pub fn bind_all(
    document: &Document,
    config: &NavConfig,
    registry: &Rc<CloudRegistry>,
    router: &Rc<WebRouter>,
) -> Vec<CloudBinding> {
    let Ok(figures) = document.query_selector_all(&config.cloud_selector) else {
        log::warn!("cloud: invalid selector `{}`", config.cloud_selector);
        return Vec::new();
    };
    (0..figures.length())
        .filter_map(|i| figures.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .filter_map(|figure| CloudBinding::bind(&figure, config, registry.clone(), router.clone()))
        .collect()
}
