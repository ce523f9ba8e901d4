use crate::core::{max_visible_ratio, IntersectionSample, LatchTransition, VisibilityLatch};
use crate::dom;
use crate::view;
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

type ObserverCallback = Closure<dyn FnMut(js_sys::Array, web::IntersectionObserver)>;

/// Feeds intersection changes of one element into a [`VisibilityLatch`].
///
/// The observer disconnects itself on the reveal transition and is always
/// disconnected on drop, whether or not the latch ever fired.
pub struct RevealObserver {
    observer: web::IntersectionObserver,
    _callback: ObserverCallback,
}

fn sample_from_entry(entry: &web::IntersectionObserverEntry) -> IntersectionSample {
    let target_height = entry.bounding_client_rect().height();
    let root_height = entry.root_bounds().map_or(0.0, |r| r.height());
    IntersectionSample::new(entry.intersection_ratio(), entry.is_intersecting())
        .with_max_ratio(max_visible_ratio(target_height, root_height))
}

impl RevealObserver {
    pub fn observe(
        target: &web::Element,
        latch: Weak<RefCell<VisibilityLatch>>,
        root_margin: &str,
        mut on_reveal: impl FnMut() + 'static,
    ) -> anyhow::Result<Self> {
        // Root bounds are only known per entry; the viewport is close enough
        // to place the callback steps.
        let estimated_max = web::window().map_or(1.0, |w| {
            max_visible_ratio(
                target.get_bounding_client_rect().height(),
                dom::viewport_height(&w),
            )
        });
        let thresholds = match latch.upgrade() {
            Some(l) => l.borrow().observer_thresholds(estimated_max),
            None => anyhow::bail!("latch dropped before observing"),
        };

        let callback: ObserverCallback = Closure::wrap(Box::new(
            move |entries: js_sys::Array, observer: web::IntersectionObserver| {
                let Some(latch) = latch.upgrade() else {
                    // Section already torn down
                    observer.disconnect();
                    return;
                };
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() else {
                        continue;
                    };
                    let transition = latch.borrow_mut().observe(sample_from_entry(&entry));
                    if transition == LatchTransition::Revealed {
                        observer.disconnect();
                        on_reveal();
                        break;
                    }
                }
            },
        )
            as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

        let steps: js_sys::Array = thresholds.into_iter().map(JsValue::from_f64).collect();
        let init = web::IntersectionObserverInit::new();
        init.set_threshold(&steps);
        init.set_root_margin(root_margin);
        let observer =
            web::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
                .map_err(|e| anyhow::anyhow!("IntersectionObserver: {:?}", e))?;
        observer.observe(target);

        Ok(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for RevealObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Observe `section` for its reveal, or reveal it on the spot when the host
/// cannot observe it, so its content is never stuck hidden.
pub fn observe_or_reveal(
    section: &web::Element,
    latch: &Rc<RefCell<VisibilityLatch>>,
    root_margin: &str,
    label: &str,
) -> Option<RevealObserver> {
    let target = section.clone();
    let name = label.to_owned();
    let observed = RevealObserver::observe(section, Rc::downgrade(latch), root_margin, move || {
        view::set_revealed(&target, true);
        log::debug!("[{}] revealed", name);
    });
    match observed {
        Ok(o) => Some(o),
        Err(e) => {
            log::warn!("[{}] {:?}; revealing immediately", label, e);
            if latch.borrow_mut().force_reveal() == LatchTransition::Revealed {
                view::set_revealed(section, true);
            }
            None
        }
    }
}
