use crate::core::constants::{VERSE_REVEAL_THRESHOLD, VERSE_ROOT_MARGIN};
use crate::core::{ParallaxParams, SectionProgress, VisibilityLatch};
use crate::dom;
use crate::listener::{FrameWriter, Subscription};
use crate::observer::{self, RevealObserver};
use crate::view;
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use web_sys as web;

/// One verse group: fades in once, then follows the scroll with parallax.
///
/// The reveal latch and the parallax progress live in separate cells. The
/// first only ever goes false to true, the second moves both ways.
pub struct VerseSection {
    id: String,
    latch: Rc<RefCell<VisibilityLatch>>,
    progress: Rc<RefCell<SectionProgress>>,
    _observer: Option<RevealObserver>,
    _scroll: Subscription,
}

struct ParallaxLayers {
    image: Option<web::Element>,
    content: Option<web::Element>,
    params: ParallaxParams,
}

impl ParallaxLayers {
    fn write(&self, progress: f64) {
        let frame = self.params.frame(progress);
        view::apply_parallax(self.image.as_ref(), self.content.as_ref(), &frame);
    }
}

/// Read the section's geometry; true when its progress moved.
fn read_progress(section: &web::Element, progress: &Weak<RefCell<SectionProgress>>) -> bool {
    let (Some(progress), Some(geometry)) = (progress.upgrade(), dom::section_geometry(section))
    else {
        return false;
    };
    let changed = progress.borrow_mut().update(geometry);
    changed
}

impl VerseSection {
    pub fn mount(section: web::Element, params: ParallaxParams) -> anyhow::Result<Self> {
        let id = section
            .get_attribute("data-verse")
            .unwrap_or_else(|| section.id());
        let latch = Rc::new(RefCell::new(VisibilityLatch::new(VERSE_REVEAL_THRESHOLD)));
        let progress = Rc::new(RefCell::new(SectionProgress::default()));
        view::set_revealed(&section, false);

        let label = format!("verse {id}");
        let observer = observer::observe_or_reveal(&section, &latch, VERSE_ROOT_MARGIN, &label);

        let layers = ParallaxLayers {
            image: dom::query(&section, "[data-parallax='image']"),
            content: dom::query(&section, "[data-parallax='content']"),
            params,
        };
        // Once on mount, before any scroll signal
        let weak = Rc::downgrade(&progress);
        read_progress(&section, &weak);
        layers.write(progress.borrow().get());

        let writer = {
            let weak = weak.clone();
            FrameWriter::new(move || {
                if let Some(progress) = weak.upgrade() {
                    let value = progress.borrow().get();
                    layers.write(value);
                }
            })
        };
        let scroll = Subscription::window("scroll", move |_| {
            if read_progress(&section, &weak) {
                writer.request();
            }
        })?;

        Ok(Self {
            id,
            latch,
            progress,
            _observer: observer,
            _scroll: scroll,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn is_revealed(&self) -> bool {
        self.latch.borrow().is_revealed()
    }

    pub fn progress(&self) -> f64 {
        self.progress.borrow().get()
    }
}
