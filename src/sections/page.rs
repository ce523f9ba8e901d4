use crate::core::constants::{PARTICLE_FIELD_COUNT, PARTICLE_FIELD_SEED};
use crate::core::{particle_field, ParallaxParams, ScrollSnapshot, ScrollTracker, TiltParams};
use crate::dom;
use crate::listener::{FrameWriter, Subscription};
use crate::sections::{AartiSection, HeroSection, VerseSection};
use crate::view;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Everything mounted on the page. Dropping it releases every listener,
/// observer and timer the sections registered.
pub struct Page {
    scroll: Rc<RefCell<ScrollTracker>>,
    hero: Option<HeroSection>,
    verses: Vec<VerseSection>,
    aarti: Option<AartiSection>,
    _subscriptions: Vec<Subscription>,
}

struct ScrollChrome {
    bar: Option<web::Element>,
    glow: Option<web::Element>,
    to_top: Option<web::Element>,
}

impl ScrollChrome {
    fn write(&self, snapshot: &ScrollSnapshot) {
        view::apply_scroll(self.bar.as_ref(), self.glow.as_ref(), snapshot);
        if let Some(btn) = &self.to_top {
            view::set_hidden(btn, !snapshot.show_scroll_top);
        }
    }
}

impl Page {
    pub fn mount() -> anyhow::Result<Self> {
        let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
        let mut subscriptions = Vec::new();

        if let Some(field) = document.get_element_by_id("particles") {
            let particles = particle_field(PARTICLE_FIELD_COUNT, PARTICLE_FIELD_SEED);
            let class = "particle animate-particle-float";
            view::spawn_particles(&document, &field, &particles, class)?;
        }

        // Global scroll tracker: read on the signal, write on the next frame
        let scroll = Rc::new(RefCell::new(ScrollTracker::default()));
        let chrome = ScrollChrome {
            bar: document.get_element_by_id("scroll-progress"),
            glow: document.get_element_by_id("ambient-glow"),
            to_top: document.get_element_by_id("scroll-top"),
        };
        if let Some(btn) = &chrome.to_top {
            subscriptions.push(dom::add_click_listener(btn, dom::scroll_to_top_smooth)?);
        }
        if let Some(metrics) = dom::scroll_metrics() {
            scroll.borrow_mut().update(metrics);
        }
        chrome.write(&scroll.borrow().current());
        {
            let weak = Rc::downgrade(&scroll);
            let writer = FrameWriter::new(move || {
                if let Some(tracker) = weak.upgrade() {
                    let snapshot = tracker.borrow().current();
                    chrome.write(&snapshot);
                }
            });
            let weak = Rc::downgrade(&scroll);
            subscriptions.push(Subscription::window("scroll", move |_| {
                let (Some(tracker), Some(metrics)) = (weak.upgrade(), dom::scroll_metrics()) else {
                    return;
                };
                if tracker.borrow_mut().update(metrics).any() {
                    writer.request();
                }
            })?);
        }

        // In-page navigation buttons ("begin", "scroll" hints)
        for link in dom::query_all(&document, "[data-scroll-to]") {
            let Some(target) = link.get_attribute("data-scroll-to") else {
                continue;
            };
            subscriptions.push(dom::add_click_listener(&link, move || {
                dom::scroll_into_view_smooth(&target)
            })?);
        }

        let hero = match document.get_element_by_id("hero") {
            Some(el) => Some(HeroSection::mount(el, TiltParams::default())?),
            None => {
                log::warn!("[page] missing #hero");
                None
            }
        };

        let verses = dom::query_all(&document, "section[data-verse]")
            .into_iter()
            .map(|el| VerseSection::mount(el, ParallaxParams::default()))
            .collect::<anyhow::Result<Vec<_>>>()?;

        let aarti = match document.get_element_by_id("aarti-section") {
            Some(el) => Some(AartiSection::mount(&document, el)?),
            None => {
                log::warn!("[page] missing #aarti-section");
                None
            }
        };

        log::info!(
            "[page] mounted: hero={} verses={} aarti={} listeners={}",
            hero.is_some(),
            verses.len(),
            aarti.is_some(),
            subscriptions.len()
        );
        Ok(Self {
            scroll,
            hero,
            verses,
            aarti,
            _subscriptions: subscriptions,
        })
    }

    pub fn scroll(&self) -> ScrollSnapshot {
        self.scroll.borrow().current()
    }

    pub fn revealed_count(&self) -> usize {
        let hero = self.hero.as_ref().map_or(0, |h| usize::from(h.is_revealed()));
        let aarti = self.aarti.as_ref().map_or(0, |a| usize::from(a.is_revealed()));
        hero + aarti + self.verses.iter().filter(|v| v.is_revealed()).count()
    }
}

impl Drop for Page {
    fn drop(&mut self) {
        let progress: Vec<String> = self
            .verses
            .iter()
            .map(|v| format!("{}={:.2}", v.id(), v.progress()))
            .collect();
        log::info!(
            "[page] unmounting at {:.1}%: revealed={} verses[{}]",
            self.scroll().progress_percent(),
            self.revealed_count(),
            progress.join(" ")
        );
    }
}
