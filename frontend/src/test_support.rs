use tokio::task::LocalSet;
use yew::LocalServerRenderer;
use yew::prelude::*;
use yew_router::history::{AnyHistory, History, MemoryHistory};
use yew_router::prelude::*;

use crate::Site;

/// Renders a component to HTML the way a server render would. Effects never
/// run, so the output is the state before any browser callback fired.
pub fn render_with_props<C>(props: C::Properties) -> String
where
    C: BaseComponent,
{
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .expect("test runtime");
    LocalSet::new().block_on(&runtime, LocalServerRenderer::<C>::with_props(props).render())
}

#[derive(Properties, PartialEq)]
pub struct SiteAtProps {
    pub path: AttrValue,
}

#[function_component(SiteAt)]
pub fn site_at(props: &SiteAtProps) -> Html {
    let history = use_memo(
        |path: &AttrValue| {
            let history = MemoryHistory::new();
            history.push(path.to_string());
            AnyHistory::from(history)
        },
        props.path.clone(),
    );

    html! {
        <Router history={(*history).clone()}>
            <Site />
        </Router>
    }
}

/// Full site, layout included, with the router sitting on `path`.
pub fn render_path(path: &str) -> String {
    render_with_props::<SiteAt>(SiteAtProps {
        path: AttrValue::from(path.to_string()),
    })
}

/// Every `<a ...>` opening tag in `html`.
pub fn anchor_tags(html: &str) -> Vec<String> {
    let re = regex::Regex::new(r"<a\s[^>]*>").expect("anchor pattern");
    re.find_iter(html).map(|m| m.as_str().to_string()).collect()
}

/// Every `class="..."` value in `html`.
pub fn class_attrs(html: &str) -> Vec<String> {
    let re = regex::Regex::new(r#"class="([^"]*)""#).expect("class pattern");
    re.captures_iter(html).map(|c| c[1].to_string()).collect()
}
