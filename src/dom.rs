use crate::core::{BoundingBox, ScrollMetrics, SectionGeometry};
use crate::listener::Subscription;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn viewport_height(window: &web::Window) -> f64 {
    window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0)
}

/// Read everything the global tracker needs in one pass.
pub fn scroll_metrics() -> Option<ScrollMetrics> {
    let window = web::window()?;
    let document = window.document()?;
    let root = document.document_element()?;
    Some(ScrollMetrics {
        offset: window.scroll_y().unwrap_or(0.0),
        document_height: f64::from(root.scroll_height()),
        viewport_height: viewport_height(&window),
    })
}

#[inline]
pub fn bounding_box(el: &web::Element) -> BoundingBox {
    let rect = el.get_bounding_client_rect();
    BoundingBox {
        left: rect.left(),
        top: rect.top(),
        width: rect.width(),
        height: rect.height(),
    }
}

/// Geometry of a section relative to the current viewport, or `None` once
/// the element has left the document.
pub fn section_geometry(el: &web::Element) -> Option<SectionGeometry> {
    if !el.is_connected() {
        return None;
    }
    let window = web::window()?;
    let rect = el.get_bounding_client_rect();
    Some(SectionGeometry {
        top: rect.top(),
        height: rect.height(),
        viewport_height: viewport_height(&window),
    })
}

/// First descendant of `root` matching `selector`.
#[inline]
pub fn query(root: &web::Element, selector: &str) -> Option<web::Element> {
    root.query_selector(selector).ok().flatten()
}

pub fn query_all(document: &web::Document, selector: &str) -> Vec<web::Element> {
    let Ok(list) = document.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<web::Element>().ok())
        .collect()
}

pub fn add_click_listener(
    el: &web::Element,
    mut handler: impl FnMut() + 'static,
) -> anyhow::Result<Subscription> {
    Subscription::passive(el, "click", move |_| handler())
}

pub fn scroll_to_top_smooth() {
    if let Some(window) = web::window() {
        let opts = web::ScrollToOptions::new();
        opts.set_top(0.0);
        opts.set_behavior(web::ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&opts);
    }
}

pub fn scroll_into_view_smooth(element_id: &str) {
    if let Some(el) = window_document().and_then(|d| d.get_element_by_id(element_id)) {
        let opts = web::ScrollIntoViewOptions::new();
        opts.set_behavior(web::ScrollBehavior::Smooth);
        el.scroll_into_view_with_scroll_into_view_options(&opts);
    }
}
