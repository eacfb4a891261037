use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::external_link::ExternalLink;
use crate::components::icons::{Icon, IconKind};
use crate::config;
use crate::Route;

#[function_component(GetStarted)]
pub fn get_started() -> Html {
    html! {
        <div class="get-started">
            <div class="get-started-inner">
                <Link<Route> to={Route::Home} classes={classes!("back-link")}>
                    <Icon kind={IconKind::ArrowLeft} />
                    {"Back to home"}
                </Link<Route>>

                <h1>{"Get started"}</h1>
                <p class="get-started-lead">
                    {"Start bottom-up with the SDK, or start foundational with TVL. Either way: specify, evaluate, optimize, and apply—like software."}
                </p>

                <div class="get-started-grid">
                    <div class="path-card">
                        <h2>{"TVL (Specification)"}</h2>
                        <p>{"Write a TVL module that captures the tunable decisions, objectives, and constraints for your agentic system."}</p>
                        <div class="path-actions">
                            <ExternalLink
                                href={config::TVL_GETTING_STARTED_URL}
                                class={classes!("btn", "btn-white")}
                                icon={IconKind::ExternalLink}
                            >
                                {"TVL getting started"}
                            </ExternalLink>
                            <ExternalLink
                                href={config::TVL_LANGUAGE_REFERENCE_URL}
                                class={classes!("btn", "btn-ghost")}
                                icon={IconKind::ExternalLink}
                            >
                                {"Language reference"}
                            </ExternalLink>
                        </div>
                    </div>

                    <div class="path-card">
                        <h2>{"Traigent SDK"}</h2>
                        <p>{"Attach to your existing AI calls with a decorator, run governed optimization on real workloads, and apply the best config. Follow the SDK docs to install and get started."}</p>
                        <div class="path-actions">
                            <ExternalLink
                                href={config::DEMO_BOOKING_URL}
                                class={classes!("btn", "btn-white")}
                                icon={IconKind::ExternalLink}
                            >
                                {"Request SDK access"}
                            </ExternalLink>
                        </div>
                    </div>
                </div>

                <div class="enterprise-card">
                    <h3>{"Enterprise teams"}</h3>
                    <p>{"Git hooks and GitHub Actions are included in the SDK. Want managed CI/CD dashboards, team analytics, and audit trails? Let's talk about enterprise options."}</p>
                    <ExternalLink
                        href={config::DEMO_BOOKING_URL}
                        class={classes!("btn", "btn-white")}
                        icon={IconKind::ExternalLink}
                    >
                        {"Request enterprise demo"}
                    </ExternalLink>
                </div>
            </div>
            <style>
                {r#"
.get-started {
    min-height: 100vh;
    background: #020617;
    color: #fff;
}

.get-started-inner {
    max-width: 64rem;
    margin: 0 auto;
    padding: 4rem 1rem;
}

.back-link {
    display: inline-flex;
    align-items: center;
    gap: 0.5rem;
    color: #cbd5e1;
    text-decoration: none;
    margin-bottom: 2.5rem;
    transition: color 0.2s ease;
}

.back-link:hover {
    color: #fff;
}

.back-link .icon {
    width: 1rem;
    height: 1rem;
}

.get-started h1 {
    font-size: clamp(2.25rem, 5vw, 3rem);
    font-weight: 700;
    margin: 0 0 1rem;
}

.get-started-lead {
    font-size: 1.125rem;
    color: #cbd5e1;
    max-width: 42rem;
    margin: 0 0 2.5rem;
}

.get-started-grid {
    display: grid;
    grid-template-columns: 1fr;
    gap: 1.5rem;
}

.path-card {
    padding: 1.5rem;
    border-radius: 0.75rem;
    background: rgba(15, 23, 42, 0.6);
    border: 1px solid #1e293b;
}

.path-card h2 {
    font-size: 1.25rem;
    font-weight: 600;
    margin: 0 0 0.5rem;
}

.path-card p {
    color: #cbd5e1;
    margin: 0 0 1.5rem;
}

.path-actions {
    display: flex;
    flex-wrap: wrap;
    gap: 0.75rem;
}

.btn-ghost {
    background: transparent;
    border: 1px solid #334155;
    color: #e2e8f0;
}

.btn-ghost:hover {
    background: rgba(255, 255, 255, 0.05);
}

.enterprise-card {
    margin-top: 3rem;
    padding: 1.5rem;
    border-radius: 0.75rem;
    background: linear-gradient(to bottom right, rgba(79, 70, 229, 0.2), rgba(126, 34, 206, 0.2));
    border: 1px solid rgba(255, 255, 255, 0.1);
}

.enterprise-card h3 {
    font-size: 1.25rem;
    font-weight: 600;
    margin: 0 0 0.5rem;
}

.enterprise-card p {
    color: #e2e8f0;
    max-width: 48rem;
    margin: 0 0 1.5rem;
}

@media (min-width: 768px) {
    .get-started-grid {
        grid-template-columns: 1fr 1fr;
    }
}
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use crate::config;
    use crate::test_support::{anchor_tags, render_path};

    #[test]
    fn offers_both_starting_points() {
        let html = render_path("/get-started");

        assert!(html.contains("TVL (Specification)"));
        assert!(html.contains("Traigent SDK"));
        assert!(html.contains("Enterprise teams"));

        let anchors = anchor_tags(&html);
        let has = |url: &str| anchors.iter().any(|a| a.contains(&format!(r#"href="{url}""#)));
        assert!(has(config::TVL_GETTING_STARTED_URL));
        assert!(has(config::TVL_LANGUAGE_REFERENCE_URL));
        assert!(has(config::DEMO_BOOKING_URL));
    }

    #[test]
    fn copy_reads_as_written() {
        let html = render_path("/get-started");
        assert!(html.contains("specify, evaluate, optimize, and apply—like software."));
        assert!(
            html.contains("Let's talk about enterprise options.")
                || html.contains("Let&#x27;s talk about enterprise options."),
            "{html}"
        );
    }

    #[test]
    fn back_link_goes_home() {
        let html = render_path("/get-started");
        assert!(
            anchor_tags(&html)
                .iter()
                .any(|a| a.contains(r#"class="back-link""#) && a.contains(r#"href="/""#)),
            "{html}"
        );
    }
}
