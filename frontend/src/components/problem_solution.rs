use yew::prelude::*;

use crate::components::reveal::FadeInView;
use crate::config;

#[derive(Clone, Copy, PartialEq)]
pub struct Point {
    pub label: &'static str,
    pub text: &'static str,
}

pub const PROBLEMS: [Point; 4] = [
    Point { label: "Credibility gaps:", text: "Exploding config space" },
    Point { label: "Inefficiency:", text: "95% of configs are suboptimal" },
    Point { label: "Quality & Safety:", text: "Risks in production" },
    Point { label: "Wasted time:", text: "Manual tuning drains cycles" },
];

pub const SOLUTIONS: [Point; 4] = [
    Point { label: "Credibility:", text: "Configs backed by data" },
    Point { label: "Efficiency:", text: "Top 5% performance tier" },
    Point { label: "Quality & Safety:", text: "Guardrails built in" },
    Point { label: "40-60% faster:", text: "Reduced time-to-market" },
];

pub const DEFAULT_SOLUTION_TITLE: &str = "The Solution";

/// The brand name reads as a heading in plain white, anything else in the
/// solution accent colour.
pub fn solution_title_class(title: &str) -> &'static str {
    if title == "Traigent" {
        "card-title plain"
    } else {
        "card-title solution"
    }
}

fn point_list(points: &[Point], mark: &'static str, tone: &'static str) -> Html {
    html! {
        <ul class="card-points">
            { for points.iter().map(|point| html! {
                <li>
                    <span class={classes!("card-mark", tone)}>{mark}</span>
                    <p><strong>{point.label}</strong>{" "}{point.text}</p>
                </li>
            }) }
        </ul>
    }
}

fn card_header(
    image: Option<(String, &'static str)>,
    title: Html,
    subtitle: &'static str,
) -> Html {
    match image {
        Some((src, alt)) => html! {
            <div class="card-header with-image">
                <img {src} {alt} class="card-image" />
                <div>
                    { title }
                    <p class="card-subtitle">{subtitle}</p>
                </div>
            </div>
        },
        None => html! {
            <div class="card-header">
                { title }
            </div>
        },
    }
}

#[derive(Properties, PartialEq)]
pub struct ProblemCardProps {
    #[prop_or(false)]
    pub show_image: bool,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(ProblemCard)]
pub fn problem_card(props: &ProblemCardProps) -> Html {
    let image = props
        .show_image
        .then(|| (config::asset_url("images/robot-error.png"), "AI Agent Error"));

    html! {
        <div class={classes!("ps-card", "problem", props.class.clone())}>
            { card_header(image, html! { <h2 class="card-title problem">{"The Problem"}</h2> }, "AI agents break at scale") }
            { point_list(&PROBLEMS, "✗", "problem") }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct SolutionCardProps {
    #[prop_or(false)]
    pub show_image: bool,
    #[prop_or(AttrValue::Static(DEFAULT_SOLUTION_TITLE))]
    pub title: AttrValue,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(SolutionCard)]
pub fn solution_card(props: &SolutionCardProps) -> Html {
    let image = props
        .show_image
        .then(|| (config::asset_url("images/robot-happy.png"), "Optimized AI Agent"));
    let title = html! {
        <h2 class={solution_title_class(&props.title)}>{props.title.clone()}</h2>
    };

    html! {
        <div class={classes!("ps-card", "solution", props.class.clone())}>
            { card_header(image, title, "Trust your AI agent at scale") }
            { point_list(&SOLUTIONS, "✓", "solution") }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ProblemSolutionSectionProps {
    #[prop_or(false)]
    pub show_images: bool,
    #[prop_or(AttrValue::Static(DEFAULT_SOLUTION_TITLE))]
    pub solution_title: AttrValue,
    /// Fade each card in as it scrolls into view.
    #[prop_or(false)]
    pub reveal: bool,
}

#[function_component(ProblemSolutionSection)]
pub fn problem_solution_section(props: &ProblemSolutionSectionProps) -> Html {
    let problem = html! { <ProblemCard show_image={props.show_images} /> };
    let solution = html! {
        <SolutionCard show_image={props.show_images} title={props.solution_title.clone()} />
    };

    html! {
        <div class="ps-grid">
            {
                if props.reveal {
                    html! {
                        <>
                            <FadeInView delay={0.1}>{ problem }</FadeInView>
                            <FadeInView delay={0.2}>{ solution }</FadeInView>
                        </>
                    }
                } else {
                    html! { <>{ problem }{ solution }</> }
                }
            }
            <style>
                {r#"
.ps-grid {
    display: grid;
    grid-template-columns: 1fr;
    gap: 1rem;
    margin-bottom: 2.5rem;
}

.ps-card {
    background: #0f172a;
    border-radius: 0.75rem;
    padding: 1.5rem;
    border: 1px solid rgba(239, 68, 68, 0.3);
    height: 100%;
    box-sizing: border-box;
}

.ps-card.solution {
    border-color: rgba(16, 185, 129, 0.3);
}

.card-header {
    margin-bottom: 1rem;
}

.card-header.with-image {
    display: flex;
    align-items: center;
    gap: 1rem;
}

.card-image {
    width: 4rem;
    height: 4rem;
    border-radius: 0.5rem;
    object-fit: cover;
}

.card-title {
    margin: 0;
    font-size: 1.25rem;
    font-weight: 700;
}

.card-title.problem { color: #f87171; }
.card-title.solution { color: #34d399; }
.card-title.plain { color: #fff; }

.card-subtitle {
    margin: 0.25rem 0 0;
    color: #94a3b8;
    font-size: 0.75rem;
}

.card-points {
    list-style: none;
    margin: 0;
    padding: 0;
}

.card-points li {
    display: flex;
    align-items: center;
    gap: 0.5rem;
    margin-top: 0.75rem;
}

.card-points p {
    margin: 0;
    color: #e2e8f0;
    font-size: 0.875rem;
}

.card-mark {
    flex-shrink: 0;
    font-size: 0.875rem;
}

.card-mark.problem { color: #f87171; }
.card-mark.solution { color: #34d399; }

@media (min-width: 768px) {
    .ps-grid {
        grid-template-columns: 1fr 1fr;
    }

    .card-title {
        font-size: 1.5rem;
    }
}
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::render_with_props;

    #[test]
    fn brand_title_is_plain() {
        assert_eq!(solution_title_class("Traigent"), "card-title plain");
        assert_eq!(solution_title_class(DEFAULT_SOLUTION_TITLE), "card-title solution");
        assert_eq!(solution_title_class("Our Answer"), "card-title solution");
    }

    #[test]
    fn lists_pair_up() {
        assert_eq!(PROBLEMS.len(), SOLUTIONS.len());
        assert!(PROBLEMS.iter().all(|p| p.label.ends_with(':')));
        assert!(SOLUTIONS.iter().all(|p| p.label.ends_with(':')));
    }

    #[test]
    fn section_without_images() {
        let html = render_with_props::<ProblemSolutionSection>(ProblemSolutionSectionProps {
            show_images: false,
            solution_title: AttrValue::from("Traigent"),
            reveal: false,
        });

        assert!(!html.contains("<img"));
        assert!(html.contains("card-title plain"));
        assert!(html.contains("The Problem"));
        assert_eq!(html.matches("✗").count(), 4);
        assert_eq!(html.matches("✓").count(), 4);
    }

    #[test]
    fn section_with_images() {
        let html = render_with_props::<ProblemSolutionSection>(ProblemSolutionSectionProps {
            show_images: true,
            solution_title: AttrValue::from(DEFAULT_SOLUTION_TITLE),
            reveal: true,
        });

        assert!(html.contains(r#"src="/images/robot-error.png""#));
        assert!(html.contains(r#"src="/images/robot-happy.png""#));
        assert!(html.contains("AI agents break at scale"));
        assert!(html.contains("card-title solution"));
        assert_eq!(html.matches("reveal reveal-up").count(), 2);
    }
}
