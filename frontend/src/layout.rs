use chrono::Datelike;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::external_link::ExternalLink;
use crate::config;
use crate::error;
use crate::{resolve, Route};

const SCROLL_THRESHOLD: f64 = 24.0;

pub const NAV_LINKS: [(Route, &str); 3] = [
    (Route::GetStarted, "Get Started"),
    (Route::ValueProposition, "Why Traigent"),
    (Route::OnePager, "One Pager"),
];

pub fn page_title(route: &Route) -> &'static str {
    match route {
        Route::Home => "Traigent | Ship AI Applications Like Software",
        Route::GetStarted => "Get Started | Traigent",
        Route::OnePager => "One Pager | Traigent",
        Route::ValueProposition => "Value Proposition | Traigent",
        Route::NotFound => "Page Not Found | Traigent",
    }
}

fn enter_page(route: &Route) -> error::Result<()> {
    error::document()?.set_title(page_title(route));
    error::window()?.scroll_to_with_x_and_y(0.0, 0.0);
    Ok(())
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let current = use_route::<Route>();
    let menu_open = use_state(|| false);
    let is_scrolled = use_state_eq(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(move |_| {
            let listener = error::window().map(|window| {
                let target = window.clone();
                let scroll_callback = Closure::<dyn Fn()>::new(move || {
                    let scroll_top = target.scroll_y().unwrap_or(0.0);
                    is_scrolled.set(scroll_top > SCROLL_THRESHOLD);
                });
                if let Err(err) = window
                    .add_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref())
                {
                    log::warn!("Could not watch scrolling: {:?}", err);
                }
                (window, scroll_callback)
            });
            if let Err(err) = &listener {
                log::warn!("Nav stays unscrolled: {}", err);
            }

            move || {
                if let Ok((window, scroll_callback)) = listener {
                    let _ = window
                        .remove_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref());
                }
            }
        }, ());
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then_some("scrolled"))}>
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes={classes!("nav-logo")}>
                    <img src={config::asset_url("images/traigent-logo-white.png")} alt="Traigent" />
                </Link<Route>>

                <button class="burger-menu" onclick={toggle_menu} aria-label="Toggle navigation">
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    { for NAV_LINKS.iter().map(|(route, label)| {
                        let active = current.as_ref() == Some(route);
                        html! {
                            <div onclick={close_menu.clone()}>
                                <Link<Route>
                                    to={route.clone()}
                                    classes={classes!("nav-link", active.then_some("active"))}
                                >
                                    {*label}
                                </Link<Route>>
                            </div>
                        }
                    }) }
                    <div onclick={close_menu.clone()}>
                        <ExternalLink href={config::DEMO_BOOKING_URL} class={classes!("nav-cta")}>
                            {"Request a Demo"}
                        </ExternalLink>
                    </div>
                </div>
            </div>
        </nav>
    }
}

#[function_component(SiteFooter)]
pub fn site_footer() -> Html {
    let year = chrono::Local::now().year();

    html! {
        <footer class="site-footer">
            <div class="footer-content">
                <div class="footer-brand">
                    <div class="footer-name">{"Traigent"}</div>
                    <p>{"Ship AI applications like software. Evaluate, gate, optimize, and deploy with confidence."}</p>
                </div>

                <div class="footer-column">
                    <h3>{"Resources"}</h3>
                    <ul>
                        <li>
                            <ExternalLink href={config::SDK_REPO_URL} class={classes!("footer-link")}>
                                {"SDK Documentation"}
                            </ExternalLink>
                        </li>
                        <li>
                            <ExternalLink href={config::TVL_SITE_URL} class={classes!("footer-link")}>
                                {"TVL Language"}
                            </ExternalLink>
                        </li>
                    </ul>
                </div>

                <div class="footer-column">
                    <h3>{"Company"}</h3>
                    <ul>
                        { for NAV_LINKS.iter().map(|(route, label)| html! {
                            <li>
                                <Link<Route> to={route.clone()} classes={classes!("footer-link")}>{*label}</Link<Route>>
                            </li>
                        }) }
                    </ul>
                </div>

                <div class="footer-column">
                    <h3>{"Contact"}</h3>
                    <ul>
                        <li>
                            <a href={format!("mailto:{}", config::CTO_EMAIL)} class="footer-link">{config::CTO_EMAIL}</a>
                        </li>
                        <li>
                            <a href={format!("mailto:{}", config::CEO_EMAIL)} class="footer-link">{config::CEO_EMAIL}</a>
                        </li>
                    </ul>
                </div>
            </div>

            <div class="footer-bottom">
                <p>{format!("© {} Traigent Ltd. All rights reserved.", year)}</p>
            </div>
        </footer>
    }
}

#[derive(Properties, PartialEq)]
pub struct LayoutProps {
    #[prop_or_default]
    pub children: Children,
}

/// Shared chrome around every page view.
#[function_component(Layout)]
pub fn layout(props: &LayoutProps) -> Html {
    let navigator = use_navigator();
    let route = use_location()
        .map(|location| {
            let path = location.path();
            let relative = navigator
                .as_ref()
                .and_then(|navigator| navigator.basename())
                .and_then(|base| path.strip_prefix(base))
                .unwrap_or(path);
            resolve(relative)
        })
        .unwrap_or(Route::NotFound);

    use_effect_with_deps(
        |route: &Route| {
            if let Err(err) = enter_page(route) {
                log::warn!("Could not update page chrome: {}", err);
            }
            || ()
        },
        route,
    );

    html! {
        <div class="site">
            <Nav />
            <main class="site-main">
                { for props.children.iter() }
            </main>
            <SiteFooter />
            <style>
                {r#"
*, *::before, *::after {
    box-sizing: border-box;
}

body {
    margin: 0;
    font-family: "Inter", -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
    color: #0f172a;
    background: #020617;
    -webkit-font-smoothing: antialiased;
}

a {
    color: inherit;
}

img {
    max-width: 100%;
}

.icon {
    width: 1.25rem;
    height: 1.25rem;
    flex-shrink: 0;
}

.icon-trailing {
    margin-left: 0.5rem;
}

.icon-leading {
    margin-right: 0.5rem;
}

.container {
    max-width: 80rem;
    margin: 0 auto;
    padding: 0 1.5rem;
}

.btn {
    display: inline-flex;
    align-items: center;
    justify-content: center;
    font-weight: 500;
    text-decoration: none;
    border-radius: 0.5rem;
    padding: 0.75rem 1.5rem;
    transition: background 0.2s ease, border-color 0.2s ease;
    cursor: pointer;
}

.btn-lg {
    padding: 1.25rem 2rem;
    font-size: 1.125rem;
}

.btn-white {
    background: #fff;
    color: #0f172a;
    border: 1px solid transparent;
}

.btn-white:hover {
    background: #f3f4f6;
}

.btn-outline {
    background: transparent;
    color: #e2e8f0;
    border: 1px solid #475569;
}

.btn-outline:hover {
    background: rgba(255, 255, 255, 0.05);
}

.btn-indigo {
    background: #4f46e5;
    color: #fff;
    border: 1px solid transparent;
}

.btn-indigo:hover {
    background: #4338ca;
}

/* reveal-on-scroll */
.reveal {
    opacity: 0;
    transition-property: opacity, transform;
    transition-duration: 0.5s;
    transition-timing-function: ease-out;
}

.reveal-up { transform: translateY(20px); }
.reveal-left { transform: translateX(-20px); }
.reveal-right { transform: translateX(20px); }
.reveal-scale { transform: scale(0.95); }

.reveal.is-revealed {
    opacity: 1;
    transform: none;
}

@media (prefers-reduced-motion: reduce) {
    .reveal {
        transition: none;
    }
}

/* nav */
.top-nav {
    position: sticky;
    top: 0;
    z-index: 50;
    background: rgba(2, 6, 23, 0.7);
    backdrop-filter: blur(8px);
    border-bottom: 1px solid transparent;
    transition: background 0.3s ease, border-color 0.3s ease;
}

.top-nav.scrolled {
    background: rgba(2, 6, 23, 0.95);
    border-bottom-color: rgba(148, 163, 184, 0.15);
}

.nav-content {
    max-width: 80rem;
    margin: 0 auto;
    padding: 0.75rem 1.5rem;
    display: flex;
    align-items: center;
    justify-content: space-between;
}

.nav-logo img {
    height: 2rem;
    width: auto;
    display: block;
}

.nav-right {
    display: flex;
    align-items: center;
    gap: 1.5rem;
}

.nav-link {
    color: #cbd5e1;
    text-decoration: none;
    font-size: 0.95rem;
}

.nav-link:hover,
.nav-link.active {
    color: #fff;
}

.nav-cta {
    display: inline-flex;
    padding: 0.5rem 1rem;
    border-radius: 0.5rem;
    background: #fff;
    color: #0f172a;
    text-decoration: none;
    font-weight: 500;
}

.burger-menu {
    display: none;
    flex-direction: column;
    gap: 4px;
    background: none;
    border: none;
    cursor: pointer;
    padding: 0.5rem;
}

.burger-menu span {
    width: 22px;
    height: 2px;
    background: #fff;
}

@media (max-width: 768px) {
    .burger-menu {
        display: flex;
    }

    .nav-right {
        display: none;
        position: absolute;
        top: 100%;
        left: 0;
        right: 0;
        flex-direction: column;
        align-items: flex-start;
        padding: 1rem 1.5rem;
        background: rgba(2, 6, 23, 0.98);
        border-bottom: 1px solid rgba(148, 163, 184, 0.15);
    }

    .nav-right.mobile-menu-open {
        display: flex;
    }
}

/* footer */
.site-footer {
    background: #020617;
    color: #fff;
    padding: 4rem 0 2rem;
    border-top: 1px solid #1e293b;
}

.footer-content {
    max-width: 80rem;
    margin: 0 auto;
    padding: 0 1.5rem;
    display: flex;
    flex-wrap: wrap;
    justify-content: space-between;
    gap: 2rem;
}

.footer-name {
    font-size: 1.25rem;
    font-weight: 700;
    margin-bottom: 1rem;
}

.footer-brand p {
    color: #94a3b8;
    max-width: 20rem;
}

.footer-column h3 {
    font-size: 1.125rem;
    font-weight: 600;
    margin: 0 0 1rem;
}

.footer-column ul {
    list-style: none;
    margin: 0;
    padding: 0;
}

.footer-column li {
    margin-bottom: 0.5rem;
}

.footer-link {
    color: #94a3b8;
    text-decoration: none;
    transition: color 0.2s ease;
}

.footer-link:hover {
    color: #fff;
}

.footer-bottom {
    max-width: 80rem;
    margin: 3rem auto 0;
    padding: 2rem 1.5rem 0;
    border-top: 1px solid #1e293b;
    text-align: center;
    color: #64748b;
}
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::render_path;

    #[test]
    fn every_route_has_its_own_title() {
        let titles = [
            page_title(&Route::Home),
            page_title(&Route::GetStarted),
            page_title(&Route::OnePager),
            page_title(&Route::ValueProposition),
            page_title(&Route::NotFound),
        ];
        for (i, a) in titles.iter().enumerate() {
            assert!(a.contains("Traigent"));
            for b in &titles[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn chrome_wraps_every_page() {
        for path in ["/", "/get-started", "/one-pager", "/value-proposition"] {
            let html = render_path(path);
            assert!(html.contains("top-nav"), "{path}");
            assert!(html.contains("site-footer"), "{path}");
            assert!(html.contains("Request a Demo"), "{path}");
        }
    }

    #[test]
    fn current_page_link_is_active() {
        let html = render_path("/get-started");
        assert!(html.contains(r#"class="nav-link active""#), "{html}");
        assert_eq!(html.matches("nav-link active").count(), 1);
    }

    #[test]
    fn footer_shows_current_year() {
        let html = render_path("/");
        let year = chrono::Local::now().year();
        assert!(html.contains(&format!("{} Traigent Ltd.", year)));
    }
}
