//! Style writes consumed by the page's CSS. The engine never decides how a
//! state looks, it only publishes it.

use crate::core::constants::{HIDDEN_CLASS, REVEAL_ATTR};
use crate::core::{ParallaxFrame, Particle, ScrollSnapshot, TiltState};
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn set_style(el: &web::Element, property: &str, value: &str) {
    if let Some(html) = el.dyn_ref::<web::HtmlElement>() {
        _ = html.style().set_property(property, value);
    }
}

#[inline]
pub fn set_hidden(el: &web::Element, hidden: bool) {
    let cl = el.class_list();
    if hidden {
        _ = cl.add_1(HIDDEN_CLASS);
    } else {
        _ = cl.remove_1(HIDDEN_CLASS);
    }
}

/// Mark an element (and so its transition-driven children) revealed.
#[inline]
pub fn set_revealed(el: &web::Element, revealed: bool) {
    _ = el.set_attribute(REVEAL_ATTR, if revealed { "1" } else { "0" });
}

pub fn apply_scroll(bar: Option<&web::Element>, glow: Option<&web::Element>, s: &ScrollSnapshot) {
    if let Some(bar) = bar {
        set_style(bar, "width", &s.bar_width());
    }
    if let Some(glow) = glow {
        set_style(glow, "background", &s.glow_background());
    }
}

pub fn apply_parallax(
    image: Option<&web::Element>,
    content: Option<&web::Element>,
    frame: &ParallaxFrame,
) {
    if let Some(image) = image {
        set_style(image, "transform", &frame.image_transform());
    }
    if let Some(content) = content {
        set_style(content, "transform", &frame.content_transform());
    }
}

#[inline]
pub fn apply_tilt(el: &web::Element, tilt: &TiltState) {
    set_style(el, "transform", &tilt.transform());
}

/// Replace the children of `container` with one element per particle.
pub fn spawn_particles(
    document: &web::Document,
    container: &web::Element,
    particles: &[Particle],
    class: &str,
) -> anyhow::Result<()> {
    container.set_inner_html("");
    for p in particles {
        let el = document
            .create_element("div")
            .map_err(|e| anyhow::anyhow!("create particle: {:?}", e))?;
        el.set_class_name(class);
        _ = el.set_attribute("style", &p.style());
        container
            .append_child(&el)
            .map_err(|e| anyhow::anyhow!("append particle: {:?}", e))?;
    }
    Ok(())
}
