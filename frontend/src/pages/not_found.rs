use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::icons::{Icon, IconKind};
use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="not-found">
            <div class="not-found-code">{"404"}</div>
            <h1>{"Page not found"}</h1>
            <p>{"The page you are looking for does not exist or has moved."}</p>
            <Link<Route> to={Route::Home} classes={classes!("btn", "btn-indigo")}>
                <Icon kind={IconKind::ArrowLeft} class={classes!("icon-leading")} />
                {"Back to home"}
            </Link<Route>>
            <style>
                {r#"
.not-found {
    min-height: 70vh;
    display: flex;
    flex-direction: column;
    align-items: center;
    justify-content: center;
    text-align: center;
    padding: 6rem 1.5rem;
    background: #020617;
    color: #fff;
}

.not-found-code {
    font-size: 5rem;
    font-weight: 700;
    color: #6366f1;
    line-height: 1;
}

.not-found h1 {
    font-size: 2rem;
    margin: 1rem 0 0.5rem;
}

.not-found p {
    color: #94a3b8;
    margin: 0 0 2rem;
}
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use crate::test_support::{anchor_tags, render_path};

    #[test]
    fn offers_a_way_home() {
        let html = render_path("/definitely/not/here");

        assert!(html.contains("Page not found"));
        assert!(anchor_tags(&html)
            .iter()
            .any(|a| a.contains("btn btn-indigo") && a.contains(r#"href="/""#)));
    }
}
