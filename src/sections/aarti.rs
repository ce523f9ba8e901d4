use crate::core::constants::{AARTI_PETAL_COUNT, AARTI_REVEAL_THRESHOLD, AARTI_ROOT_MARGIN};
use crate::core::{petal_ring, VisibilityLatch};
use crate::dom;
use crate::observer::{self, RevealObserver};
use crate::view;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Closing aarti block: a single reveal latch plus the petal decoration.
pub struct AartiSection {
    latch: Rc<RefCell<VisibilityLatch>>,
    _observer: Option<RevealObserver>,
}

impl AartiSection {
    pub fn mount(document: &web::Document, section: web::Element) -> anyhow::Result<Self> {
        if let Some(container) = dom::query(&section, "[data-petals]") {
            view::spawn_particles(
                document,
                &container,
                &petal_ring(AARTI_PETAL_COUNT),
                "petal animate-particle-float",
            )?;
        }

        let latch = Rc::new(RefCell::new(VisibilityLatch::new(AARTI_REVEAL_THRESHOLD)));
        view::set_revealed(&section, false);
        let observer = observer::observe_or_reveal(&section, &latch, AARTI_ROOT_MARGIN, "aarti");

        Ok(Self {
            latch,
            _observer: observer,
        })
    }

    pub fn is_revealed(&self) -> bool {
        self.latch.borrow().is_revealed()
    }
}
