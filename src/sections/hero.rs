use crate::core::constants::HERO_ENTRANCE_DELAY_MS;
use crate::core::{LatchTransition, TiltParams, TiltState, VisibilityLatch};
use crate::dom;
use crate::listener::{Subscription, Timeout};
use crate::view;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

struct HeroState {
    latch: VisibilityLatch,
    tilt: TiltState,
}

/// Opening section: reveals on a short timer and tilts its image toward the
/// pointer.
pub struct HeroSection {
    state: Rc<RefCell<HeroState>>,
    _entrance: Timeout,
    _subscriptions: Vec<Subscription>,
}

impl HeroSection {
    pub fn mount(hero: web::Element, params: TiltParams) -> anyhow::Result<Self> {
        let state = Rc::new(RefCell::new(HeroState {
            latch: VisibilityLatch::default(),
            tilt: TiltState::new(params),
        }));
        view::set_revealed(&hero, false);

        let entrance = {
            let weak = Rc::downgrade(&state);
            let hero = hero.clone();
            Timeout::new(HERO_ENTRANCE_DELAY_MS, move || {
                let Some(state) = weak.upgrade() else { return };
                if state.borrow_mut().latch.force_reveal() == LatchTransition::Revealed {
                    view::set_revealed(&hero, true);
                    log::debug!("[hero] revealed");
                }
            })?
        };

        let mut subscriptions = Vec::new();
        match dom::query(&hero, "[data-tilt]") {
            Some(image) => {
                subscriptions.push(wire_pointermove(&hero, &image, &state)?);
                subscriptions.push(wire_pointerleave(&hero, &image, &state)?);
            }
            None => log::warn!("[hero] no [data-tilt] element; tilt disabled"),
        }

        Ok(Self {
            state,
            _entrance: entrance,
            _subscriptions: subscriptions,
        })
    }

    pub fn is_revealed(&self) -> bool {
        self.state.borrow().latch.is_revealed()
    }
}

fn wire_pointermove(
    hero: &web::Element,
    image: &web::Element,
    state: &Rc<RefCell<HeroState>>,
) -> anyhow::Result<Subscription> {
    let weak = Rc::downgrade(state);
    let region = hero.clone();
    let image = image.clone();
    Subscription::passive(hero, "pointermove", move |ev: web::Event| {
        let Some(state) = weak.upgrade() else { return };
        let Some(ev) = ev.dyn_ref::<web::PointerEvent>() else {
            return;
        };
        let rect = dom::bounding_box(&region);
        let mut s = state.borrow_mut();
        let before = s.tilt.tilt();
        let after = s
            .tilt
            .on_pointer_move(rect, f64::from(ev.client_x()), f64::from(ev.client_y()));
        if after != before {
            view::apply_tilt(&image, &s.tilt);
        }
    })
}

fn wire_pointerleave(
    hero: &web::Element,
    image: &web::Element,
    state: &Rc<RefCell<HeroState>>,
) -> anyhow::Result<Subscription> {
    let weak = Rc::downgrade(state);
    let image = image.clone();
    Subscription::passive(hero, "pointerleave", move |_| {
        let Some(state) = weak.upgrade() else { return };
        let mut s = state.borrow_mut();
        if s.tilt.on_pointer_leave() {
            view::apply_tilt(&image, &s.tilt);
        }
    })
}
