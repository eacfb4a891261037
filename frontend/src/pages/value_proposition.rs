use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::external_link::ExternalLink;
use crate::components::flow_diagram::{FlowDiagram, FlowEngine, FlowVariant};
use crate::components::icons::{Icon, IconKind};
use crate::components::problem_solution::ProblemSolutionSection;
use crate::components::reveal::FadeInView;
use crate::components::scale_graph::ScaleGraph;
use crate::config;
use crate::Route;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

/// One lifecycle step. Unchanged steps carry a single badge on the
/// "before" side and read "Same" on the Traigent side.
#[derive(Clone, Copy, PartialEq)]
pub struct LifecycleStep {
    pub step: &'static str,
    pub before: &'static str,
    pub after: &'static str,
    pub before_difficulty: Difficulty,
    pub after_difficulty: Option<Difficulty>,
    /// Bar widths in rem.
    pub before_width: f64,
    pub after_width: f64,
}

impl LifecycleStep {
    const fn same(step: &'static str, before: &'static str, difficulty: Difficulty) -> Self {
        LifecycleStep {
            step,
            before,
            after: "Same",
            before_difficulty: difficulty,
            after_difficulty: None,
            before_width: 3.5,
            after_width: 3.5,
        }
    }

    const fn faster(step: &'static str, before: &'static str, difficulty: Difficulty, before_width: f64) -> Self {
        LifecycleStep {
            step,
            before,
            after: "<1w",
            before_difficulty: difficulty,
            after_difficulty: Some(Difficulty::Easy),
            before_width,
            after_width: 3.0,
        }
    }

    pub fn is_unchanged(&self) -> bool {
        self.after_difficulty.is_none()
    }
}

pub struct Phase {
    pub glyph: &'static str,
    pub name: &'static str,
    pub steps: &'static [LifecycleStep],
}

pub const PHASES: [Phase; 4] = [
    Phase {
        glyph: "📋",
        name: "Planning",
        steps: &[
            LifecycleStep::same("Problem Definition", "1-5d", Difficulty::Medium),
            LifecycleStep::same("Architecture Design", "1-2w", Difficulty::Medium),
        ],
    },
    Phase {
        glyph: "🔧",
        name: "Building",
        steps: &[
            LifecycleStep::same("Data Preparation", "2-6w", Difficulty::Hard),
            LifecycleStep::faster("Prompt Engineering", "3-8 weeks", Difficulty::Hard, 12.0),
            LifecycleStep::faster("Core Development", "1-4 weeks", Difficulty::Medium, 8.0),
            LifecycleStep::same("UX Design", "2d-2w", Difficulty::Easy),
        ],
    },
    Phase {
        glyph: "🛡️",
        name: "Testing & Safety",
        steps: &[
            LifecycleStep::faster("Evaluation & Benchmarking", "1-6 weeks", Difficulty::Hard, 10.0),
            LifecycleStep::faster("Safety & Guardrails", "2-4 weeks", Difficulty::Hard, 8.0),
        ],
    },
    Phase {
        glyph: "🚀",
        name: "Launch",
        steps: &[LifecycleStep::same("Deployment & Monitoring", "1-5d", Difficulty::Easy)],
    },
];

const AUDIENCES: [(IconKind, &str, &str); 3] = [
    (IconKind::Users, "AI Engineers", "SDK integration for code-first optimization"),
    (IconKind::TrendingUp, "No-Code Users", "Studio interface for visual configuration"),
    (IconKind::Zap, "Business Stakeholders", "Goals & ROI tracking with clear metrics"),
];

struct Founder {
    name: &'static str,
    role: &'static str,
    highlights: [&'static str; 4],
}

const TEAM: [Founder; 2] = [
    Founder {
        name: "Dr. Nimrod Busany",
        role: "Co-founder, CTO",
        highlights: [
            "15+ years Research in Industry & Academy",
            "Research group lead at Accenture Labs",
            "20+ Publications & Patents",
            "IEEE/ACM Committee Member",
        ],
    },
    Founder {
        name: "Achi Solomon",
        role: "Co-founder, CEO",
        highlights: [
            "15+ years R&D Leader (Infra, Backend, DevOps, SRE)",
            "Improved Time-To-Market from months to days",
            "Reduced cloud spend by 40%, raised availability to 99.9%",
            "Expert in scalable cloud-native platforms",
        ],
    },
];

#[derive(Properties, PartialEq)]
pub struct DifficultyBadgeProps {
    pub level: Difficulty,
}

#[function_component(DifficultyBadge)]
pub fn difficulty_badge(props: &DifficultyBadgeProps) -> Html {
    let level = props.level.label();
    html! {
        <span class={classes!("difficulty", level)}>{level}</span>
    }
}

#[derive(Properties, PartialEq)]
pub struct LifecycleRowProps {
    pub step: LifecycleStep,
}

#[function_component(LifecycleRow)]
pub fn lifecycle_row(props: &LifecycleRowProps) -> Html {
    let step = props.step;
    let unchanged = step.is_unchanged();
    let bar = |side: &'static str, text: &'static str, width: f64| {
        html! {
            <div
                class={classes!("lc-bar", if unchanged { "same" } else { side })}
                style={format!("width: {}rem;", width)}
            >
                <span>{text}</span>
            </div>
        }
    };

    html! {
        <div class={classes!("lc-row", (!unchanged).then_some("highlight"))}>
            <div class="lc-step">{step.step}</div>
            <div class="lc-cell">
                { bar("before", step.before, step.before_width) }
                <DifficultyBadge level={step.before_difficulty} />
            </div>
            <div class="lc-cell">
                { bar("after", step.after, step.after_width) }
                {
                    match step.after_difficulty {
                        Some(level) => html! { <DifficultyBadge {level} /> },
                        None => html! {},
                    }
                }
            </div>
        </div>
    }
}

#[function_component(ValueProposition)]
pub fn value_proposition() -> Html {
    html! {
        <div class="value-prop">
            <header class="vp-header">
                <FadeInView class={classes!("vp-container")}>
                    <img
                        class="vp-logo"
                        src={config::asset_url("images/traigent-logo-white.png")}
                        alt="Traigent Logo"
                    />
                    <h1>
                        {"The First "}
                        <span class="vp-accent">{"AI Agents Continuous Optimization"}</span>
                        {" Infrastructure"}
                    </h1>
                    <p class="vp-lead">{"Building AI agents is easy; making them production-ready is not."}</p>
                </FadeInView>
            </header>

            <section class="vp-section">
                <div class="vp-container">
                    <FadeInView class={classes!("vp-intro")}>
                        <h2>{"Do You "}<span class="vp-trust">{"TRUST"}</span>{" Your AI Agent at Scale?"}</h2>
                        <p>{"Building AI agents is easy; making them production-ready is not."}</p>
                    </FadeInView>
                    <FadeInView class={classes!("vp-graph")}>
                        <ScaleGraph />
                    </FadeInView>
                    <ProblemSolutionSection reveal={true} />
                </div>
            </section>

            <section class="vp-section alt">
                <div class="vp-container">
                    <FadeInView class={classes!("vp-intro")}>
                        <h2>{"AI Agent Development "}<span class="vp-accent">{"Lifecycle"}</span></h2>
                        <p>{"Timeline comparison: Before vs. With Traigent"}</p>
                    </FadeInView>

                    <div class="lc-legend">
                        <span><i class="lc-swatch before"></i>{"Before Traigent"}</span>
                        <span><i class="lc-swatch after"></i>{"With Traigent"}</span>
                        <span><i class="lc-swatch same"></i>{"Unchanged"}</span>
                    </div>

                    <div class="lc-layout">
                        <div class="lc-table">
                            <div class="lc-head">
                                <span>{"Step"}</span>
                                <span>{"Before"}</span>
                                <span>{"With Traigent"}</span>
                            </div>
                            { for PHASES.iter().map(|phase| html! {
                                <div class="lc-phase">
                                    <div class="lc-phase-name">
                                        <span>{phase.glyph}</span>
                                        <span>{phase.name}</span>
                                    </div>
                                    { for phase.steps.iter().map(|step| html! { <LifecycleRow step={*step} /> }) }
                                </div>
                            }) }
                        </div>

                        <div class="lc-summary">
                            <div class="lc-summary-block">
                                <div class="lc-summary-title">{"Total Time to Market"}</div>
                                <div class="lc-summary-pair">
                                    <div><div class="lc-value before">{"12-34w"}</div><div class="lc-caption">{"Before"}</div></div>
                                    <div><div class="lc-value after">{"7-18w"}</div><div class="lc-caption">{"With Traigent"}</div></div>
                                </div>
                            </div>
                            <div class="lc-summary-block">
                                <div class="lc-summary-title">{"Ongoing Iteration & Improvement"}</div>
                                <div class="lc-summary-pair">
                                    <div><div class="lc-value before">{"0.5"}</div><div class="lc-caption">{"Person/Week"}</div></div>
                                    <div><div class="lc-value after">{"0.25"}</div><div class="lc-caption">{"Person/Week"}</div></div>
                                </div>
                            </div>
                            <div class="lc-saved">
                                <span>{"Time Saved"}</span>
                                <div>{"40-60%"}</div>
                            </div>
                        </div>
                    </div>
                </div>
            </section>

            <section class="vp-section">
                <div class="vp-container">
                    <FadeInView class={classes!("vp-intro")}>
                        <h2>{"How It Works"}</h2>
                    </FadeInView>
                    <FlowDiagram variant={FlowVariant::Dark} engine={FlowEngine::Glyph} reveal={true} />
                </div>
            </section>

            <section class="vp-section alt">
                <div class="vp-container">
                    <FadeInView class={classes!("vp-intro")}>
                        <h2>{"Who It's For"}</h2>
                    </FadeInView>
                    <div class="vp-audiences">
                        { for AUDIENCES.iter().enumerate().map(|(i, (icon, title, description))| html! {
                            <FadeInView delay={i as f64 * 0.1} class={classes!("vp-audience")}>
                                <div class="vp-audience-icon"><Icon kind={*icon} /></div>
                                <div>
                                    <h3>{*title}</h3>
                                    <p>{*description}</p>
                                </div>
                            </FadeInView>
                        }) }
                    </div>
                </div>
            </section>

            <section class="vp-section">
                <div class="vp-container">
                    <FadeInView class={classes!("vp-intro")}>
                        <h2>{"Built By Engineers, For Engineers"}</h2>
                    </FadeInView>
                    <div class="vp-team">
                        { for TEAM.iter().enumerate().map(|(i, founder)| html! {
                            <FadeInView delay={(i + 1) as f64 * 0.1} class={classes!("vp-founder")}>
                                <h3>{founder.name}</h3>
                                <p class="vp-role">{founder.role}</p>
                                <ul>
                                    { for founder.highlights.iter().map(|line| html! { <li>{*line}</li> }) }
                                </ul>
                            </FadeInView>
                        }) }
                    </div>
                </div>
            </section>

            <section class="vp-cta">
                <FadeInView class={classes!("vp-container")}>
                    <h2>{"See These Results On Your System"}</h2>
                    <p>{"1-week POC to compare results vs. your benchmark"}</p>
                    <div class="vp-cta-actions">
                        <ExternalLink
                            href={config::DEMO_BOOKING_URL}
                            class={classes!("btn", "btn-lg", "btn-white")}
                            icon={IconKind::ArrowRight}
                        >
                            {"Request a Demo"}
                        </ExternalLink>
                        <Link<Route> to={Route::Home} classes={classes!("btn", "btn-lg", "btn-outline", "vp-back")}>
                            {"Back to Homepage"}
                        </Link<Route>>
                    </div>
                </FadeInView>
            </section>

            <style>
                {r#"
.value-prop {
    background: #020617;
    color: #fff;
    min-height: 100vh;
}

.vp-container {
    max-width: 72rem;
    margin: 0 auto;
    padding: 0 1.5rem;
}

.vp-header {
    padding: 5rem 0 3rem;
    text-align: center;
}

.vp-logo {
    height: 3.5rem;
    margin-bottom: 2rem;
}

.vp-header h1 {
    font-size: clamp(2rem, 5vw, 3.5rem);
    font-weight: 700;
    line-height: 1.15;
    margin: 0 0 1.5rem;
}

.vp-accent {
    background: linear-gradient(to right, #60a5fa, #a78bfa);
    -webkit-background-clip: text;
    background-clip: text;
    color: transparent;
}

.vp-lead {
    font-size: 1.25rem;
    color: #94a3b8;
    margin: 0;
}

.vp-section {
    padding: 4rem 0;
}

.vp-section.alt {
    background: #0f172a;
}

.vp-intro {
    text-align: center;
    margin-bottom: 3rem;
}

.vp-intro h2 {
    font-size: clamp(1.75rem, 3vw, 2.25rem);
    font-weight: 700;
    margin: 0 0 0.75rem;
}

.vp-intro p {
    color: #94a3b8;
    margin: 0;
}

.vp-trust {
    color: #60a5fa;
    text-shadow: 0 0 20px rgba(59, 130, 246, 0.6);
}

.vp-graph {
    margin-bottom: 3rem;
}

.lc-legend {
    display: flex;
    flex-wrap: wrap;
    justify-content: center;
    gap: 1.5rem;
    font-size: 0.75rem;
    color: #94a3b8;
    margin-bottom: 1.5rem;
}

.lc-legend span {
    display: inline-flex;
    align-items: center;
    gap: 0.5rem;
}

.lc-swatch {
    width: 1rem;
    height: 0.5rem;
    border-radius: 0.125rem;
}

.lc-swatch.before,
.lc-bar.before { background: linear-gradient(to right, #f87171, #fca5a5); }
.lc-swatch.after,
.lc-bar.after {
    background: linear-gradient(to right, #3b82f6, #60a5fa);
    box-shadow: 0 0 15px rgba(59, 130, 246, 0.5);
}
.lc-swatch.same,
.lc-bar.same { background: #334155; }

.lc-layout {
    display: grid;
    grid-template-columns: 1fr;
    gap: 2rem;
}

.lc-table {
    overflow-x: auto;
    background: rgba(15, 23, 42, 0.6);
    border: 1px solid #1e293b;
    border-radius: 0.75rem;
    padding: 1rem 1.5rem;
}

.lc-head,
.lc-row {
    display: grid;
    grid-template-columns: 180px 1fr 1fr;
    gap: 1rem;
    align-items: center;
    min-width: 520px;
}

.lc-head {
    font-size: 0.75rem;
    text-transform: uppercase;
    letter-spacing: 0.05em;
    color: #64748b;
    padding-bottom: 0.75rem;
    border-bottom: 1px solid #1e293b;
}

.lc-phase {
    padding-top: 0.75rem;
}

.lc-phase-name {
    display: flex;
    gap: 0.5rem;
    font-weight: 600;
    color: #cbd5e1;
    font-size: 0.875rem;
    margin-bottom: 0.25rem;
}

.lc-row {
    padding: 0.375rem 0.75rem;
}

.lc-row.highlight {
    background: rgba(59, 130, 246, 0.05);
    border: 1px solid rgba(59, 130, 246, 0.1);
    border-radius: 0.375rem;
}

.lc-step {
    font-size: 0.8125rem;
    color: #e2e8f0;
}

.lc-cell {
    display: flex;
    align-items: center;
    gap: 0.5rem;
}

.lc-bar {
    height: 1.25rem;
    border-radius: 0.25rem;
    display: flex;
    align-items: center;
    padding: 0 0.5rem;
    box-sizing: border-box;
}

.lc-bar span {
    font-size: 0.625rem;
    font-family: ui-monospace, SFMono-Regular, Menlo, monospace;
    font-weight: 500;
    color: #0f172a;
    white-space: nowrap;
}

.lc-bar.same span {
    color: #94a3b8;
}

.difficulty {
    font-size: 0.5rem;
    padding: 0.125rem 0.375rem;
    border-radius: 0.25rem;
    text-transform: uppercase;
    letter-spacing: 0.05em;
    font-family: ui-monospace, SFMono-Regular, Menlo, monospace;
}

.difficulty.hard { background: rgba(239, 68, 68, 0.15); color: #f87171; }
.difficulty.medium { background: rgba(234, 179, 8, 0.15); color: #facc15; }
.difficulty.easy {
    background: rgba(59, 130, 246, 0.15);
    color: #60a5fa;
    box-shadow: 0 0 10px rgba(59, 130, 246, 0.2);
}

.lc-summary {
    display: flex;
    flex-direction: column;
    gap: 1rem;
}

.lc-summary-block {
    background: rgba(15, 23, 42, 0.6);
    border: 1px solid #1e293b;
    border-radius: 0.75rem;
    padding: 1rem;
}

.lc-summary-title {
    font-size: 0.75rem;
    text-transform: uppercase;
    letter-spacing: 0.05em;
    color: #94a3b8;
    margin-bottom: 0.75rem;
}

.lc-summary-pair {
    display: grid;
    grid-template-columns: 1fr 1fr;
    gap: 1rem;
    text-align: center;
}

.lc-value {
    font-size: 1.5rem;
    font-weight: 700;
    font-family: ui-monospace, SFMono-Regular, Menlo, monospace;
}

.lc-value.before { color: #f87171; }
.lc-value.after { color: #60a5fa; }

.lc-caption {
    font-size: 0.6875rem;
    color: #64748b;
}

.lc-saved {
    text-align: center;
    border-radius: 0.75rem;
    padding: 1rem;
    background: linear-gradient(to bottom right, rgba(59, 130, 246, 0.2), rgba(124, 58, 237, 0.2));
    border: 1px solid rgba(59, 130, 246, 0.3);
}

.lc-saved span {
    font-size: 0.75rem;
    text-transform: uppercase;
    color: #93c5fd;
}

.lc-saved div {
    font-size: 2rem;
    font-weight: 700;
}

.vp-audiences,
.vp-team {
    display: grid;
    grid-template-columns: 1fr;
    gap: 1.5rem;
}

.vp-audience {
    display: flex;
    gap: 1rem;
    padding: 1.5rem;
    border-radius: 0.75rem;
    background: rgba(30, 41, 59, 0.6);
    border: 1px solid #1e293b;
}

.vp-audience-icon {
    width: 3rem;
    height: 3rem;
    flex-shrink: 0;
    border-radius: 0.75rem;
    display: flex;
    align-items: center;
    justify-content: center;
    background: rgba(59, 130, 246, 0.15);
    color: #60a5fa;
}

.vp-audience h3,
.vp-founder h3 {
    margin: 0 0 0.25rem;
    font-size: 1.125rem;
}

.vp-audience p {
    margin: 0;
    color: #94a3b8;
    font-size: 0.875rem;
}

.vp-founder {
    padding: 1.5rem;
    border-radius: 0.75rem;
    background: rgba(15, 23, 42, 0.6);
    border: 1px solid #1e293b;
}

.vp-role {
    color: #60a5fa;
    margin: 0 0 1rem;
    font-size: 0.875rem;
}

.vp-founder ul {
    margin: 0;
    padding-left: 1.25rem;
    color: #cbd5e1;
    font-size: 0.875rem;
}

.vp-founder li + li {
    margin-top: 0.375rem;
}

.vp-cta {
    padding: 5rem 0;
    text-align: center;
    background: linear-gradient(to bottom right, #1e3a8a, #4c1d95);
}

.vp-cta h2 {
    font-size: clamp(1.75rem, 3vw, 2.25rem);
    font-weight: 700;
    margin: 0 0 1rem;
}

.vp-cta p {
    color: #cbd5e1;
    margin: 0 0 2rem;
}

.vp-cta-actions {
    display: flex;
    flex-wrap: wrap;
    justify-content: center;
    gap: 1rem;
}

.vp-back {
    border: 2px solid rgba(255, 255, 255, 0.6);
    color: #fff;
}

@media (min-width: 768px) {
    .vp-audiences {
        grid-template-columns: repeat(3, 1fr);
    }

    .vp-team {
        grid-template-columns: 1fr 1fr;
    }
}

@media (min-width: 1024px) {
    .lc-layout {
        grid-template-columns: 3fr 1fr;
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
    use crate::test_support::{class_attrs, render_path, render_with_props};

    #[test]
    fn audience_copy_is_verbatim() {
        assert_eq!(AUDIENCES[2].2, "Goals & ROI tracking with clear metrics");
    }

    fn all_steps() -> impl Iterator<Item = &'static LifecycleStep> {
        PHASES.iter().flat_map(|phase| phase.steps.iter())
    }

    #[test]
    fn lifecycle_table_shape() {
        assert_eq!(all_steps().count(), 9);
        assert_eq!(all_steps().filter(|s| !s.is_unchanged()).count(), 4);
        for step in all_steps().filter(|s| !s.is_unchanged()) {
            assert_eq!(step.after, "<1w");
            assert_eq!(step.after_difficulty, Some(Difficulty::Easy));
            assert!(step.before_width > step.after_width, "{}", step.step);
        }
    }

    #[test]
    fn changed_rows_are_highlighted() {
        let prompt = PHASES[1].steps[1];
        let html = render_with_props::<LifecycleRow>(LifecycleRowProps { step: prompt });

        assert!(html.contains("lc-row highlight"));
        assert!(html.contains("lc-bar before"));
        assert!(html.contains("lc-bar after"));
        assert!(html.contains("width: 12rem;"));
        assert_eq!(html.matches("difficulty hard").count(), 1);
        assert_eq!(html.matches("difficulty easy").count(), 1);
    }

    #[test]
    fn unchanged_rows_carry_one_badge() {
        let design = PHASES[0].steps[1];
        let html = render_with_props::<LifecycleRow>(LifecycleRowProps { step: design });

        assert!(!html.contains("highlight"));
        assert_eq!(html.matches("lc-bar same").count(), 2);
        assert_eq!(html.matches(r#"class="difficulty"#).count(), 1);
        assert!(html.contains("Same"));
    }

    #[test]
    fn page_renders_every_block() {
        let html = render_path("/value-proposition");

        assert!(html.contains("scale-graph"));
        assert!(html.contains("flow-diagram flow-dark"));
        assert!(html.contains(r#"class="flow-engine-tile""#));
        assert!(!html.contains("traigent-logo-icon.png"));
        assert!(html.contains("See These Results On Your System"));
        assert!(html.contains("40-60%"));
        let rows = class_attrs(&html)
            .into_iter()
            .filter(|class| class.split_whitespace().next() == Some("lc-row"))
            .count();
        assert_eq!(rows, 9);
    }
}
