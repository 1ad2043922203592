use std::cell::{Cell, RefCell};

use web_sys::Element;
use yew::AppHandle;

use crate::components::error_banner::{ErrorBanner, ErrorBannerProps};
use crate::error::NavError;
use crate::router::ErrorSink;

/// Reports navigation failures in a dismissible banner.
pub struct BannerSink {
    handle: RefCell<AppHandle<ErrorBanner>>,
    serial: Cell<u32>,
    showing: Cell<bool>,
}

impl BannerSink {
    pub fn mount(host: Element) -> Self {
        let props = ErrorBannerProps {
            message: None,
            serial: 0,
        };
        let handle = yew::Renderer::<ErrorBanner>::with_root_and_props(host, props).render();
        Self {
            handle: RefCell::new(handle),
            serial: Cell::new(0),
            showing: Cell::new(false),
        }
    }

    fn show(&self, message: Option<String>) {
        let serial = self.serial.get().wrapping_add(1);
        self.serial.set(serial);
        self.showing.set(message.is_some());
        let props = ErrorBannerProps {
            message: message.map(Into::into),
            serial,
        };
        if let Ok(mut handle) = self.handle.try_borrow_mut() {
            handle.update(props);
        }
    }
}

impl ErrorSink for BannerSink {
    fn report(&self, error: &NavError) {
        self.show(Some(error.to_string()));
    }

    fn clear(&self) {
        if self.showing.get() {
            self.show(None);
        }
    }
}
