use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::HtmlVideoElement;
use yew::prelude::*;

use crate::components::icons::{Icon, IconKind};

/// The player starts `Playing` because the video autoplays muted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PlayState {
    #[default]
    Playing,
    Paused,
}

impl PlayState {
    pub fn toggle(self) -> Self {
        match self {
            PlayState::Playing => PlayState::Paused,
            PlayState::Paused => PlayState::Playing,
        }
    }

    /// Label of the control, i.e. the action a click performs.
    pub fn label(self) -> &'static str {
        match self {
            PlayState::Playing => "Pause",
            PlayState::Paused => "Play",
        }
    }

    pub fn control_icon(self) -> IconKind {
        match self {
            PlayState::Playing => IconKind::Pause,
            PlayState::Paused => IconKind::Play,
        }
    }

    pub fn overlay_visible(self) -> bool {
        self == PlayState::Paused
    }

    /// State as reported by the element's `paused` flag.
    pub fn from_paused(paused: bool) -> Self {
        if paused {
            PlayState::Paused
        } else {
            PlayState::Playing
        }
    }
}

/// Drives the element towards `state`. `on_refused` gets `Paused` when the
/// browser rejects playback, synchronously or through the `play()` promise.
fn apply(video: &HtmlVideoElement, state: PlayState, on_refused: Callback<PlayState>) {
    match state {
        PlayState::Playing => match video.play() {
            Ok(promise) => spawn_local(async move {
                if let Err(err) = JsFuture::from(promise).await {
                    log::warn!("Demo video playback rejected: {:?}", err);
                    on_refused.emit(PlayState::Paused);
                }
            }),
            Err(err) => {
                log::warn!("Demo video refused to play: {:?}", err);
                on_refused.emit(PlayState::Paused);
            }
        },
        PlayState::Paused => {
            if let Err(err) = video.pause() {
                log::warn!("Demo video refused to pause: {:?}", err);
            }
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct DemoPlayerProps {
    pub src: AttrValue,
    #[prop_or_default]
    pub poster: Option<AttrValue>,
    #[prop_or_default]
    pub caption: Option<AttrValue>,
}

#[function_component(DemoPlayer)]
pub fn demo_player(props: &DemoPlayerProps) -> Html {
    let video_ref = use_node_ref();
    let state = use_state_eq(PlayState::default);

    let on_refused = {
        let state = state.clone();
        Callback::from(move |next: PlayState| state.set(next))
    };

    // The `muted` attribute is not reflected onto the property, and browsers
    // only allow autoplay when the property is set.
    {
        let video_ref = video_ref.clone();
        let state = state.clone();
        let on_refused = on_refused.clone();
        use_effect_with_deps(
            move |_| {
                if let Some(video) = video_ref.cast::<HtmlVideoElement>() {
                    video.set_muted(true);
                    let current = PlayState::from_paused(video.paused());
                    state.set(current);
                    if current == PlayState::Paused {
                        apply(&video, PlayState::Playing, on_refused);
                    }
                }
                || ()
            },
            (),
        );
    }

    let toggle = {
        let state = state.clone();
        let video_ref = video_ref.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            let next = state.toggle();
            state.set(next);
            if let Some(video) = video_ref.cast::<HtmlVideoElement>() {
                apply(&video, next, on_refused.clone());
            }
        })
    };

    // The element is the source of truth once it starts emitting events.
    let on_play = {
        let state = state.clone();
        Callback::from(move |_: Event| state.set(PlayState::Playing))
    };
    let on_pause = {
        let state = state.clone();
        Callback::from(move |_: Event| state.set(PlayState::Paused))
    };

    let overlay_class = classes!(
        "demo-overlay",
        (!state.overlay_visible()).then_some("hidden")
    );

    html! {
        <figure class="demo-player">
            <div class="demo-frame">
                <video
                    ref={video_ref}
                    class="demo-video"
                    src={props.src.clone()}
                    poster={props.poster.clone()}
                    autoplay={true}
                    muted={true}
                    loop={true}
                    playsinline={true}
                    onplay={on_play}
                    onpause={on_pause}
                />
                <button
                    class={overlay_class}
                    onclick={toggle.clone()}
                    aria-hidden={(!state.overlay_visible()).to_string()}
                    aria-label="Play demo"
                    tabindex="-1"
                >
                    <Icon kind={IconKind::Play} class={classes!("demo-overlay-icon")} />
                </button>
            </div>
            <div class="demo-controls">
                <button class="demo-toggle" onclick={toggle}>
                    <Icon kind={state.control_icon()} />
                    <span>{state.label()}</span>
                </button>
            </div>
            {
                if let Some(caption) = props.caption.clone() {
                    html! { <figcaption>{caption}</figcaption> }
                } else {
                    html! {}
                }
            }
            <style>
                {r#"
.demo-player {
    margin: 0;
}

.demo-frame {
    position: relative;
    border-radius: 1rem;
    overflow: hidden;
    border: 1px solid rgba(148, 163, 184, 0.2);
    background: #020617;
    box-shadow: 0 25px 50px -12px rgba(79, 70, 229, 0.35);
}

.demo-video {
    display: block;
    width: 100%;
    height: auto;
}

.demo-overlay {
    position: absolute;
    inset: 0;
    display: flex;
    align-items: center;
    justify-content: center;
    background: rgba(2, 6, 23, 0.55);
    border: none;
    cursor: pointer;
    color: #fff;
    transition: opacity 0.3s ease;
}

.demo-overlay.hidden {
    opacity: 0;
    pointer-events: none;
}

.demo-overlay-icon {
    width: 4rem;
    height: 4rem;
    padding: 1rem;
    border-radius: 9999px;
    background: rgba(79, 70, 229, 0.85);
}

.demo-controls {
    display: flex;
    align-items: center;
    gap: 1rem;
    margin-top: 1rem;
}

.demo-toggle {
    display: inline-flex;
    align-items: center;
    gap: 0.5rem;
    padding: 0.5rem 1rem;
    border-radius: 0.5rem;
    border: 1px solid #cbd5e1;
    background: #fff;
    color: #0f172a;
    font-weight: 500;
    cursor: pointer;
}

.demo-toggle .icon {
    width: 1rem;
    height: 1rem;
}

.demo-player figcaption {
    margin-top: 0.5rem;
    color: #64748b;
    font-size: 0.875rem;
}
                "#}
            </style>
        </figure>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::render_with_props;

    #[test]
    fn toggle_flips_label_and_overlay() {
        let playing = PlayState::default();
        assert_eq!(playing.label(), "Pause");
        assert!(!playing.overlay_visible());

        let paused = playing.toggle();
        assert_eq!(paused, PlayState::Paused);
        assert_eq!(paused.label(), "Play");
        assert!(paused.overlay_visible());
        assert_eq!(paused.control_icon(), IconKind::Play);

        let resumed = paused.toggle();
        assert_eq!(resumed.label(), "Pause");
        assert!(!resumed.overlay_visible());
    }

    #[test]
    fn element_paused_flag_decides_state() {
        assert_eq!(PlayState::from_paused(true), PlayState::Paused);
        assert_eq!(PlayState::from_paused(false), PlayState::Playing);
        assert!(PlayState::from_paused(true).overlay_visible());
        assert_eq!(PlayState::from_paused(true).label(), "Play");
    }

    #[test]
    fn renders_playing_with_overlay_hidden() {
        let html = render_with_props::<DemoPlayer>(DemoPlayerProps {
            src: AttrValue::from("/videos/traigent-demo.mp4"),
            poster: None,
            caption: Some(AttrValue::from("Optimization run on a support agent")),
        });

        assert!(html.contains(r#"src="/videos/traigent-demo.mp4""#));
        assert!(html.contains("demo-overlay hidden"));
        assert!(html.contains("Pause"));
        assert!(html.contains("Optimization run on a support agent"));
    }
}
