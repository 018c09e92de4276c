use wasm_bindgen::{JsCast, closure::Closure};
use web_sys::{Event, HtmlElement, ScrollBehavior, ScrollIntoViewOptions, Window};

use site::{
    nav::Viewport,
    section::{Extent, SectionId, SectionLayout},
    theme::StyleRoot,
};

// browser adapters for the navigation and theme state
//
// a missing window or document is treated exactly like a missing element: nothing happens

pub fn scroll_y() -> f64 {
    web_sys::window()
        .and_then(|window| window.scroll_y().ok())
        .unwrap_or(0.0)
}

fn section_element(section: SectionId) -> Option<HtmlElement> {
    web_sys::window()?
        .document()?
        .get_element_by_id(section.dom_id())?
        .dyn_into::<HtmlElement>()
        .ok()
}

// the live page, queried on every call
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserPage;

impl SectionLayout for BrowserPage {
    fn extent(&self, section: SectionId) -> Option<Extent> {
        let element = section_element(section)?;

        Some(Extent::new(
            f64::from(element.offset_top()),
            f64::from(element.offset_height()),
        ))
    }
}

impl Viewport for BrowserPage {
    fn smooth_scroll_to(&self, section: SectionId) {
        if let Some(element) = section_element(section) {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            element.scroll_into_view_with_scroll_into_view_options(&options);
        }
    }
}

// the <html> element
#[derive(Clone, Copy, Debug, Default)]
pub struct DocumentRoot;

impl StyleRoot for DocumentRoot {
    fn set_class(&self, class: &str, enabled: bool) {
        let Some(root) = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.document_element())
        else {
            return;
        };

        let classes = root.class_list();
        let result = if enabled {
            classes.add_1(class)
        } else {
            classes.remove_1(class)
        };

        if let Err(err) = result {
            tracing::error!("failed to update root class {class}: {err:?}");
        }
    }
}

// window scroll listener
//
// the listener is registered on construction and removed when this is dropped, so the owning
// view must keep it alive exactly as long as it is mounted
pub struct ScrollSubscription {
    window: Window,
    callback: Closure<dyn FnMut(Event)>,
}

impl ScrollSubscription {
    pub fn new<F>(mut on_scroll: F) -> Option<Self>
    where
        F: FnMut() + 'static,
    {
        let window = web_sys::window()?;
        let callback = Closure::<dyn FnMut(Event)>::new(move |_: Event| on_scroll());

        if let Err(err) =
            window.add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref())
        {
            tracing::error!("failed to subscribe to scroll events: {err:?}");
            return None;
        }

        tracing::debug!("subscribed to scroll events");
        Some(ScrollSubscription { window, callback })
    }
}

impl Drop for ScrollSubscription {
    fn drop(&mut self) {
        let _ = self
            .window
            .remove_event_listener_with_callback("scroll", self.callback.as_ref().unchecked_ref());
        tracing::debug!("unsubscribed from scroll events");
    }
}
