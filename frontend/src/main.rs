use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};

mod config;
mod error;
mod layout;
mod components {
    pub mod demo_player;
    pub mod external_link;
    pub mod flow_diagram;
    pub mod icons;
    pub mod problem_solution;
    pub mod reveal;
    pub mod scale_graph;
}
mod pages {
    pub mod get_started;
    pub mod homepage;
    pub mod not_found;
    pub mod one_pager;
    pub mod value_proposition;
}

#[cfg(test)]
mod test_support;

use layout::Layout;
use pages::{
    get_started::GetStarted,
    homepage::Homepage,
    not_found::NotFound,
    one_pager::OnePager,
    value_proposition::ValueProposition,
};

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/get-started")]
    GetStarted,
    #[at("/one-pager")]
    OnePager,
    #[at("/value-proposition")]
    ValueProposition,
    #[not_found]
    #[at("/404")]
    NotFound,
}

/// Maps a path (relative to the base path) to the page that serves it.
/// Query strings and fragments never affect the match.
pub fn resolve(path: &str) -> Route {
    let path = match path.find(|c| c == '?' || c == '#') {
        Some(end) => &path[..end],
        None => path,
    };
    let path = if path.is_empty() { "/" } else { path };
    Route::recognize(path).unwrap_or(Route::NotFound)
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Homepage /> }
        }
        Route::GetStarted => {
            info!("Rendering Get Started page");
            html! { <GetStarted /> }
        }
        Route::OnePager => {
            info!("Rendering One Pager page");
            html! { <OnePager /> }
        }
        Route::ValueProposition => {
            info!("Rendering Value Proposition page");
            html! { <ValueProposition /> }
        }
        Route::NotFound => {
            info!("Rendering Not Found page");
            html! { <NotFound /> }
        }
    }
}

/// Page chrome plus the routed page. Needs a router above it.
#[function_component(Site)]
pub fn site() -> Html {
    html! {
        <Layout>
            <Switch<Route> render={switch} />
        </Layout>
    }
}

#[function_component(App)]
pub fn app() -> Html {
    let basename = config::router_basename().map(AttrValue::from);

    html! {
        <BrowserRouter {basename}>
            <Site />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting site at base path {}", config::get_base_path());
    yew::Renderer::<App>::new().render();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{anchor_tags, class_attrs, render_path};

    const PAGES: [(&str, &str); 4] = [
        ("/", "Ship AI Applications Like Software"),
        ("/get-started", "Get started"),
        ("/one-pager", "Company Overview"),
        ("/value-proposition", "AI Agents Continuous Optimization"),
    ];

    #[test]
    fn resolves_known_paths() {
        assert_eq!(resolve("/"), Route::Home);
        assert_eq!(resolve("/get-started"), Route::GetStarted);
        assert_eq!(resolve("/one-pager"), Route::OnePager);
        assert_eq!(resolve("/value-proposition"), Route::ValueProposition);
    }

    #[test]
    fn query_and_fragment_are_ignored() {
        assert_eq!(resolve("/one-pager?x=1"), Route::OnePager);
        assert_eq!(resolve("/one-pager#top"), Route::OnePager);
        assert_eq!(resolve("/get-started?ref=nav#tvl"), Route::GetStarted);
        assert_eq!(resolve("?utm_source=mail"), Route::Home);
        assert_eq!(resolve(""), Route::Home);
        assert_eq!(resolve("/pricing?x=1"), Route::NotFound);
    }

    #[test]
    fn unknown_paths_fall_back() {
        assert_eq!(resolve("/pricing"), Route::NotFound);
        assert_eq!(resolve("/one-pager/extra"), Route::NotFound);
    }

    #[test]
    fn every_route_renders_its_page() {
        for (path, headline) in PAGES {
            let html = render_path(path);
            assert!(html.contains(headline), "{path} is missing {headline}");
        }

        let html = render_path("/nowhere");
        assert!(html.contains("Page not found"));
    }

    #[test]
    fn outbound_links_open_in_a_new_context() {
        for (path, _) in PAGES {
            let html = render_path(path);
            let outbound: Vec<_> = anchor_tags(&html)
                .into_iter()
                .filter(|tag| tag.contains(r#"href="http"#))
                .collect();

            assert!(!outbound.is_empty(), "{path} has no outbound links");
            for tag in outbound {
                assert!(tag.contains(r#"target="_blank""#), "{path}: {tag}");
                assert!(tag.contains(r#"rel="noopener noreferrer""#), "{path}: {tag}");
            }
        }
    }

    #[test]
    fn nothing_is_revealed_before_the_browser_reports_visibility() {
        for (path, _) in PAGES {
            let html = render_path(path);
            let revealed = class_attrs(&html)
                .into_iter()
                .filter(|class| class.split_whitespace().any(|c| c == "is-revealed"))
                .count();
            assert_eq!(revealed, 0, "{path}");
        }
    }

    #[test]
    fn demo_starts_out_playing() {
        let html = render_path("/");
        assert!(html.contains("demo-overlay hidden"));
        assert!(html.contains("Pause"));
    }
}
