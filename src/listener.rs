//! Listener and timer registrations owned by the section that created them.
//!
//! Every registration is released when its owner is dropped, so tearing a
//! section down never leaves a dangling callback behind.

use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// A passive event listener removed from its target on drop.
pub struct Subscription {
    target: web::EventTarget,
    event: &'static str,
    closure: Closure<dyn FnMut(web::Event)>,
}

impl Subscription {
    pub fn passive(
        target: &web::EventTarget,
        event: &'static str,
        handler: impl FnMut(web::Event) + 'static,
    ) -> anyhow::Result<Self> {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
        let options = web::AddEventListenerOptions::new();
        options.set_passive(true);
        target
            .add_event_listener_with_callback_and_add_event_listener_options(
                event,
                closure.as_ref().unchecked_ref(),
                &options,
            )
            .map_err(|e| anyhow::anyhow!("add {} listener: {:?}", event, e))?;
        Ok(Self {
            target: target.clone(),
            event,
            closure,
        })
    }

    /// Listen on the window (scroll, resize).
    pub fn window(
        event: &'static str,
        handler: impl FnMut(web::Event) + 'static,
    ) -> anyhow::Result<Self> {
        let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
        Self::passive(&window, event, handler)
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.closure.as_ref().unchecked_ref());
    }
}

/// A pending `setTimeout`, cleared on drop if it has not fired yet.
pub struct Timeout {
    handle: i32,
    _closure: Closure<dyn FnMut()>,
}

impl Timeout {
    pub fn new(delay_ms: i32, callback: impl FnOnce() + 'static) -> anyhow::Result<Self> {
        let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
        let closure = Closure::once(callback);
        let handle = window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                closure.as_ref().unchecked_ref(),
                delay_ms,
            )
            .map_err(|e| anyhow::anyhow!("setTimeout: {:?}", e))?;
        Ok(Self {
            handle,
            _closure: closure,
        })
    }
}

impl Drop for Timeout {
    fn drop(&mut self) {
        if let Some(window) = web::window() {
            window.clear_timeout_with_handle(self.handle);
        }
    }
}

/// Batches style writes into the next animation frame.
///
/// Signal handlers only read layout and call [`FrameWriter::request`]; the
/// write closure runs once per frame no matter how many requests arrived.
/// A pending frame is cancelled on drop.
pub struct FrameWriter {
    pending: Rc<Cell<Option<i32>>>,
    closure: Closure<dyn FnMut()>,
}

impl FrameWriter {
    pub fn new(mut write: impl FnMut() + 'static) -> Self {
        let pending = Rc::new(Cell::new(None));
        let flag = pending.clone();
        let closure = Closure::wrap(Box::new(move || {
            flag.set(None);
            write();
        }) as Box<dyn FnMut()>);
        Self { pending, closure }
    }

    pub fn request(&self) {
        if self.pending.get().is_some() {
            return;
        }
        let Some(window) = web::window() else { return };
        match window.request_animation_frame(self.closure.as_ref().unchecked_ref()) {
            Ok(handle) => self.pending.set(Some(handle)),
            Err(e) => log::warn!("requestAnimationFrame: {:?}", e),
        }
    }
}

impl Drop for FrameWriter {
    fn drop(&mut self) {
        if let (Some(handle), Some(window)) = (self.pending.take(), web::window()) {
            _ = window.cancel_animation_frame(handle);
        }
    }
}
