#![cfg(target_arch = "wasm32")]
//! Scroll-driven reveal, parallax and tilt for the chalisa page.
//!
//! Elements the page is expected to carry (all optional except where noted):
//! - `#scroll-progress`, `#ambient-glow`, `#scroll-top`: page scroll chrome
//! - `#particles`: container for the floating particle field
//! - `#hero` with a `[data-tilt]` child
//! - `section[data-verse]` with `[data-parallax='image']` and
//!   `[data-parallax='content']` children
//! - `#aarti-section` with an optional `[data-petals]` container
//! - any `[data-scroll-to=<id>]` button scrolls smoothly to `#<id>`
//!
//! Revealed elements get `data-visible="1"`; CSS owns the transitions.
use std::cell::RefCell;
use wasm_bindgen::prelude::*;

mod core;
mod dom;
mod listener;
mod observer;
mod sections;
mod view;

thread_local! {
    static PAGE: RefCell<Option<sections::Page>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("chalisa-web starting");

    if let Err(e) = mount() {
        log::error!("mount error: {:?}", e);
    }
    Ok(())
}

fn mount() -> anyhow::Result<()> {
    let page = sections::Page::mount()?;
    // Replacing an existing page drops it, releasing its listeners first
    let previous = PAGE.with(|slot| slot.borrow_mut().replace(page));
    drop(previous);
    Ok(())
}

/// Tear the page down and release every listener, observer and timer.
#[wasm_bindgen]
pub fn unmount() {
    let page = PAGE.with(|slot| slot.borrow_mut().take());
    if page.is_none() {
        log::warn!("unmount: nothing mounted");
    }
}

/// Re-scan the document, e.g. after the host swapped page content.
#[wasm_bindgen]
pub fn remount() -> Result<(), JsValue> {
    unmount();
    mount().map_err(|e| JsValue::from_str(&format!("{:?}", e)))
}
