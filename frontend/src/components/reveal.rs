use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::error::{DomError, Result};

/// Visibility of one reveal-on-scroll element. `Shown` is terminal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Reveal {
    #[default]
    Hidden,
    Shown,
}

impl Reveal {
    pub fn observe(self, intersecting: bool) -> Self {
        match self {
            Reveal::Hidden if intersecting => Reveal::Shown,
            other => other,
        }
    }

    pub fn is_shown(self) -> bool {
        self == Reveal::Shown
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RevealTrigger {
    /// First time the element intersects the viewport.
    #[default]
    InView,
    /// Right after the first render.
    Mount,
}

/// Offset the element animates in from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RevealMotion {
    #[default]
    Up,
    Left,
    Right,
    Scale,
    Fade,
}

impl RevealMotion {
    pub fn class(self) -> &'static str {
        match self {
            RevealMotion::Up => "reveal-up",
            RevealMotion::Left => "reveal-left",
            RevealMotion::Right => "reveal-right",
            RevealMotion::Scale => "reveal-scale",
            RevealMotion::Fade => "reveal-fade",
        }
    }
}

/// Folds one observer batch into `state`. Returns the new state and whether
/// this batch is the one that revealed the element.
pub fn settle(state: Reveal, batch: &[bool]) -> (Reveal, bool) {
    if batch.iter().any(|&intersecting| state.observe(intersecting) != state) {
        (Reveal::Shown, true)
    } else {
        (state, false)
    }
}

pub fn delay_style(delay: f64) -> Option<String> {
    (delay > 0.0).then(|| format!("transition-delay: {}s;", delay))
}

/// Keeps the observer and its callback alive; disconnects on drop.
pub struct ObserverGuard {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(web_sys::js_sys::Array, IntersectionObserver)>,
}

impl Drop for ObserverGuard {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

pub fn observe_once<F>(element: &Element, on_visible: F) -> Result<ObserverGuard>
where
    F: Fn() + 'static,
{
    let state = Rc::new(Cell::new(Reveal::Hidden));

    let callback = Closure::<dyn FnMut(web_sys::js_sys::Array, IntersectionObserver)>::new(
        move |entries: web_sys::js_sys::Array, observer: IntersectionObserver| {
            let batch: Vec<bool> = entries
                .iter()
                .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                .map(|entry| entry.is_intersecting())
                .collect();
            let (next, fire) = settle(state.get(), &batch);
            state.set(next);
            if fire {
                observer.disconnect();
                on_visible();
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&wasm_bindgen::JsValue::from_f64(0.1));
    options.set_root_margin("0px 0px -50px 0px");

    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
        .map_err(DomError::observer)?;
    observer.observe(element);

    Ok(ObserverGuard {
        observer,
        _callback: callback,
    })
}

#[hook]
pub fn use_reveal(node: NodeRef, trigger: RevealTrigger) -> Reveal {
    let state = use_state_eq(Reveal::default);

    {
        let state = state.clone();
        use_effect_with_deps(
            move |(node, trigger)| {
                let mut guard = None;
                match trigger {
                    RevealTrigger::Mount => state.set(Reveal::Shown),
                    RevealTrigger::InView => match node.cast::<Element>() {
                        Some(element) => {
                            let on_visible = {
                                let state = state.clone();
                                move || state.set(Reveal::Shown)
                            };
                            match observe_once(&element, on_visible) {
                                Ok(observer) => guard = Some(observer),
                                Err(err) => {
                                    log::warn!("Showing element without reveal: {}", err);
                                    state.set(Reveal::Shown);
                                }
                            }
                        }
                        None => state.set(Reveal::Shown),
                    },
                }
                move || drop(guard)
            },
            (node, trigger),
        );
    }

    *state
}

#[derive(Properties, PartialEq)]
pub struct FadeInViewProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub class: Classes,
    /// Seconds.
    #[prop_or(0.0)]
    pub delay: f64,
    #[prop_or_default]
    pub motion: RevealMotion,
    #[prop_or_default]
    pub trigger: RevealTrigger,
}

#[function_component(FadeInView)]
pub fn fade_in_view(props: &FadeInViewProps) -> Html {
    let node = use_node_ref();
    let reveal = use_reveal(node.clone(), props.trigger);

    let class = classes!(
        "reveal",
        props.motion.class(),
        reveal.is_shown().then_some("is-revealed"),
        props.class.clone()
    );

    html! {
        <div ref={node} {class} style={delay_style(props.delay)}>
            { for props.children.iter() }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::render_with_props;

    #[test]
    fn starts_hidden() {
        assert_eq!(Reveal::default(), Reveal::Hidden);
        assert!(!Reveal::default().is_shown());
    }

    #[test]
    fn shows_on_first_intersection() {
        let state = Reveal::Hidden.observe(false).observe(false);
        assert_eq!(state, Reveal::Hidden);
        assert_eq!(state.observe(true), Reveal::Shown);
    }

    #[test]
    fn never_hides_again() {
        let mut state = Reveal::Hidden.observe(true);
        for intersecting in [false, true, false, false] {
            state = state.observe(intersecting);
            assert_eq!(state, Reveal::Shown);
        }
    }

    #[test]
    fn batch_fires_once_on_first_intersection() {
        assert_eq!(settle(Reveal::Hidden, &[false, true, true]), (Reveal::Shown, true));
        assert_eq!(settle(Reveal::Hidden, &[false, false]), (Reveal::Hidden, false));
        assert_eq!(settle(Reveal::Hidden, &[]), (Reveal::Hidden, false));
    }

    #[test]
    fn later_batches_never_fire_again() {
        let (state, fired) = settle(Reveal::Hidden, &[true]);
        assert!(fired);

        let (state, fired) = settle(state, &[false, true]);
        assert!(!fired);
        assert_eq!(state, Reveal::Shown);

        let (state, fired) = settle(state, &[false]);
        assert!(!fired);
        assert!(state.is_shown());
    }

    #[test]
    fn delay_only_emitted_when_positive() {
        assert_eq!(delay_style(0.0), None);
        assert_eq!(delay_style(0.2).as_deref(), Some("transition-delay: 0.2s;"));
    }

    #[test]
    fn renders_hidden_before_any_observation() {
        let html = render_with_props::<FadeInView>(FadeInViewProps {
            children: Children::new(vec![html! { <p>{"stat block"}</p> }]),
            class: classes!("stats"),
            delay: 0.3,
            motion: RevealMotion::Left,
            trigger: RevealTrigger::InView,
        });

        assert!(html.contains("reveal reveal-left stats"), "{html}");
        assert!(!html.contains("is-revealed"));
        assert!(html.contains("transition-delay: 0.3s;"));
        assert!(html.contains("stat block"));
    }
}
