use yew::prelude::*;

use crate::components::demo_player::DemoPlayer;
use crate::components::external_link::ExternalLink;
use crate::components::flow_diagram::{FlowDiagram, FlowVariant};
use crate::components::icons::{Icon, IconKind};
use crate::components::reveal::{FadeInView, RevealMotion, RevealTrigger};
use crate::config;

struct Venue {
    name: &'static str,
    event: &'static str,
}

const VENUES: [Venue; 5] = [
    Venue { name: "Tel-Aviv University", event: "Research Seminar" },
    Venue { name: "IBM Research", event: "AI Seminar" },
    Venue { name: "Reichman University", event: "AI Summit" },
    Venue { name: "MLOps Community", event: "Agents In Product" },
    Venue { name: "IEEE ICSE 2025", event: "Peer-Reviewed" },
];

const STATS: [(&str, &str); 4] = [
    ("40x", "Cost reduction potential"),
    ("10x", "Faster optimization cycles"),
    ("1000s", "Configurations tested automatically"),
    ("0", "Regressions in production"),
];

struct Feature {
    title: &'static str,
    description: &'static str,
    icon: IconKind,
    tone: &'static str,
}

const PAIN_POINTS: [Feature; 4] = [
    Feature {
        title: "High Default Costs",
        description: "Defaulting to frontier models drives costs sky-high. Without optimization data, you're flying blind.",
        icon: IconKind::DollarSign,
        tone: "red",
    },
    Feature {
        title: "Manual, Slow Iteration",
        description: "Prompt engineering by hand is slow and doesn't scale. Every change requires re-testing everything.",
        icon: IconKind::Clock,
        tone: "amber",
    },
    Feature {
        title: "No Quality Gates",
        description: "Unlike software, AI changes ship without evaluation gates. Regressions slip into production undetected.",
        icon: IconKind::Shield,
        tone: "blue",
    },
    Feature {
        title: "Configuration Chaos",
        description: "Model selection, prompts, retrieval settings, hyperparameters — all disconnected from your codebase.",
        icon: IconKind::GitBranch,
        tone: "purple",
    },
];

const PILLARS: [Feature; 4] = [
    Feature {
        title: "Automated Optimization",
        description: "Intelligently explore thousands of configurations against your KPIs on real workloads. No brute force.",
        icon: IconKind::Zap,
        tone: "indigo",
    },
    Feature {
        title: "Evaluation Gates",
        description: "CI/CD checks for accuracy, cost, latency, and safety. Ship with confidence, catch regressions early.",
        icon: IconKind::Shield,
        tone: "indigo",
    },
    Feature {
        title: "Developer-First",
        description: "Zero-code attach via decorators. CLI & playground for easy scaling. Integrates with Git and your existing workflow.",
        icon: IconKind::Terminal,
        tone: "indigo",
    },
    Feature {
        title: "Deployment Ready",
        description: "Get deployment-ready code and actionable insights. Export optimal configurations directly to your codebase.",
        icon: IconKind::ExternalLink,
        tone: "indigo",
    },
];

const STEPS: [(&str, &str, &str); 4] = [
    ("01", "Attach & Define", "Add decorators to your AI calls. Define your evaluation dataset and success metrics."),
    ("02", "Set Optimization Goals", "Choose what matters: cost, accuracy, latency, safety — or balance all four."),
    ("03", "Automated Exploration", "Traigent intelligently tests configurations against your KPIs on real workloads."),
    ("04", "Gate & Deploy", "Set evaluation gates in CI. Ship optimal configs with confidence, prevent regressions."),
];

const TVL_SAMPLE: &str = r#"agent CustomerSupport {
  model: tune("gpt-4o", "claude-3-5")
  temperature: tune(0.1, 0.3, 0.5)

  prompt: tune(
    "You are a helpful assistant...",
    "As a customer service agent..."
  )

  optimize_for: [accuracy, cost]
  constraints: { latency < 2s }
}"#;

/// Stagger for items in a grid, 0.1s apart.
fn stagger(index: usize) -> f64 {
    index as f64 * 0.1
}

#[function_component(Homepage)]
pub fn homepage() -> Html {
    html! {
        <div class="homepage">
            <section class="home-hero">
                <div class="home-hero-backdrop"></div>
                <div class="container home-hero-content">
                    <FadeInView trigger={RevealTrigger::Mount} class={classes!("home-hero-logo")}>
                        <img src={config::asset_url("images/traigent-logo-white.png")} alt="Traigent Logo" />
                    </FadeInView>
                    <div class="home-hero-copy">
                        <FadeInView trigger={RevealTrigger::Mount} delay={0.1}>
                            <h1>{"Ship AI Applications Like Software"}</h1>
                        </FadeInView>
                        <FadeInView trigger={RevealTrigger::Mount} delay={0.2}>
                            <p class="home-hero-subtitle">
                                {"Evaluate, gate, optimize, and deploy AI agents with confidence. Traigent integrates evaluation gates into your CI/CD pipeline — ensuring accuracy, cost, latency, and safety improvements while preventing regressions."}
                            </p>
                        </FadeInView>
                        <FadeInView trigger={RevealTrigger::Mount} delay={0.25} class={classes!("home-hero-checks")}>
                            { for ["Zero-code attach via decorators", "Git & CI integration", "Measurable, gateable artifacts"]
                                .iter()
                                .map(|item| html! {
                                    <span><Icon kind={IconKind::Check} class={classes!("check")} />{*item}</span>
                                }) }
                        </FadeInView>
                        <FadeInView trigger={RevealTrigger::Mount} delay={0.3} class={classes!("home-hero-ctas")}>
                            <ExternalLink
                                href={config::DEMO_BOOKING_URL}
                                class={classes!("btn", "btn-lg", "btn-white")}
                                icon={IconKind::ArrowRight}
                            >
                                {"Request a Demo"}
                            </ExternalLink>
                            <ExternalLink href={config::SDK_REPO_URL} class={classes!("btn", "btn-lg", "btn-outline")}>
                                <Icon kind={IconKind::Code} class={classes!("icon-leading")} />
                                {"View SDK"}
                            </ExternalLink>
                        </FadeInView>
                    </div>
                </div>
                <div class="home-hero-accent"></div>
            </section>

            <section class="home-venues">
                <div class="container">
                    <p class="home-venues-title">{"Presented & Featured At"}</p>
                    <div class="home-venues-list">
                        { for VENUES.iter().map(|venue| html! {
                            <div class="home-venue">
                                <p class="home-venue-name">{venue.name}</p>
                                <p class="home-venue-event">{venue.event}</p>
                            </div>
                        }) }
                    </div>
                </div>
            </section>

            <section class="home-stats">
                <div class="container home-stats-grid">
                    { for STATS.iter().enumerate().map(|(i, (value, label))| html! {
                        <FadeInView delay={stagger(i)}>
                            <div class="home-stat-value">{*value}</div>
                            <p>{*label}</p>
                        </FadeInView>
                    }) }
                </div>
            </section>

            <section class="home-section light">
                <div class="container">
                    <div class="home-section-intro">
                        <FadeInView motion={RevealMotion::Fade}>
                            <h2>{"AI Development Shouldn't Be Guesswork"}</h2>
                        </FadeInView>
                        <p>{"Most teams deploy AI without knowing if it's optimal — or if the next change will break it."}</p>
                    </div>
                    <div class="home-grid-2">
                        { for PAIN_POINTS.iter().enumerate().map(|(i, item)| html! {
                            <FadeInView delay={stagger(i)} class={classes!("home-pain")}>
                                <div class={classes!("home-icon-tile", item.tone)}>
                                    <Icon kind={item.icon} />
                                </div>
                                <div>
                                    <h3>{item.title}</h3>
                                    <p>{item.description}</p>
                                </div>
                            </FadeInView>
                        }) }
                    </div>
                </div>
            </section>

            <section class="home-section tinted">
                <div class="container">
                    <div class="home-section-intro">
                        <FadeInView>
                            <h2>{"Treat AI Decisions as Code"}</h2>
                        </FadeInView>
                        <p>{"Traigent makes every AI configuration decision — model, prompt, retrieval, hyperparameters — a measurable, version-controlled, gateable artifact."}</p>
                    </div>
                    <div class="home-grid-2">
                        { for PILLARS.iter().enumerate().map(|(i, item)| html! {
                            <FadeInView delay={stagger(i)} class={classes!("home-pillar")}>
                                <div class={classes!("home-icon-tile", item.tone)}>
                                    <Icon kind={item.icon} />
                                </div>
                                <h3>{item.title}</h3>
                                <p>{item.description}</p>
                            </FadeInView>
                        }) }
                    </div>
                    <FadeInView class={classes!("home-flow")}>
                        <FlowDiagram variant={FlowVariant::Light} />
                    </FadeInView>
                </div>
            </section>

            <section class="home-section light">
                <div class="container home-demo">
                    <FadeInView motion={RevealMotion::Left} class={classes!("home-demo-copy")}>
                        <h2>{"Watch an Optimization Run"}</h2>
                        <p>{"Traigent attaches to an existing agent, explores models, prompts, and temperatures against your KPIs, and reports the configuration that wins on accuracy and cost."}</p>
                    </FadeInView>
                    <FadeInView motion={RevealMotion::Right}>
                        <DemoPlayer
                            src={config::asset_url("videos/traigent-demo.mp4")}
                            poster={config::asset_url("images/traigent-demo-poster.png")}
                            caption="Optimization run on a customer support agent"
                        />
                    </FadeInView>
                </div>
            </section>

            <section class="home-tvl">
                <div class="container home-tvl-grid">
                    <FadeInView motion={RevealMotion::Left}>
                        <div class="home-badge">{"Open Source"}</div>
                        <h2>{"TVL: The Tuned Variables Language"}</h2>
                        <p>{"A declarative language for defining how your AI systems should be tuned. TVL bridges the gap between static configuration and dynamic optimization — giving you a type-safe, version-controlled way to manage prompts, hyperparameters, and model choices."}</p>
                        <ExternalLink
                            href={config::TVL_SITE_URL}
                            class={classes!("btn", "btn-indigo")}
                            icon={IconKind::ExternalLink}
                        >
                            {"Learn More"}
                        </ExternalLink>
                    </FadeInView>
                    <FadeInView motion={RevealMotion::Right} class={classes!("home-code")}>
                        <div class="home-code-bar">
                            <span class="dot red"></span>
                            <span class="dot yellow"></span>
                            <span class="dot green"></span>
                            <span class="home-code-file">{"agent.tvl"}</span>
                        </div>
                        <pre>{TVL_SAMPLE}</pre>
                    </FadeInView>
                </div>
            </section>

            <section class="home-section light">
                <div class="container">
                    <div class="home-section-intro">
                        <FadeInView>
                            <h2>{"How It Works"}</h2>
                        </FadeInView>
                        <p>{"From evaluation to deployment in four simple steps"}</p>
                    </div>
                    <div class="home-steps">
                        { for STEPS.iter().enumerate().map(|(i, (step, title, description))| html! {
                            <FadeInView delay={stagger(i)} class={classes!("home-step")}>
                                <div class="home-step-number">{*step}</div>
                                <h3>{*title}</h3>
                                <p>{*description}</p>
                                {
                                    if i + 1 < STEPS.len() {
                                        html! { <div class="home-step-next"><Icon kind={IconKind::ChevronRight} /></div> }
                                    } else {
                                        html! {}
                                    }
                                }
                            </FadeInView>
                        }) }
                    </div>
                </div>
            </section>

            <section class="home-research">
                <div class="container home-research-grid">
                    <FadeInView motion={RevealMotion::Left}>
                        <h2>{"Built on Peer-Reviewed Research"}</h2>
                        <p class="home-research-lead">
                            {"Traigent emerged from academic research demonstrating that most AI deployments operate far below their potential — with 40x gaps in cost and performance due to suboptimal configurations."}
                        </p>
                        <div class="home-research-card">
                            <div class="home-research-row">
                                <div>
                                    <h4>{"IEEE ICSE 2025"}</h4>
                                    <p>{"International Conference on Software Engineering"}</p>
                                </div>
                                <span class="home-pill">{"Peer-Reviewed"}</span>
                            </div>
                        </div>
                        <div class="home-research-card">
                            <h4>{"Featured Presentations"}</h4>
                            <div class="home-research-venues">
                                <span>{"Tel-Aviv University"}</span>
                                <span>{"IBM Research"}</span>
                                <span>{"Reichman AI Summit"}</span>
                                <span>{"MLOps Community"}</span>
                            </div>
                        </div>
                    </FadeInView>
                    <FadeInView motion={RevealMotion::Scale} class={classes!("home-gap")}>
                        <div class="home-gap-value">{"40x"}</div>
                        <p class="home-gap-title">{"Performance & Cost Gap"}</p>
                        <p class="home-gap-note">{"Between default configurations and optimized deployments in production AI systems"}</p>
                        <div class="home-gap-dots">
                            <span class="emerald"></span>
                            <span class="purple"></span>
                            <span class="blue"></span>
                        </div>
                    </FadeInView>
                </div>
            </section>

            <section class="home-cta">
                <div class="container home-cta-inner">
                    <FadeInView>
                        <h2>{"Stop Guessing. Start Optimizing."}</h2>
                    </FadeInView>
                    <p>{"Join engineering teams shipping AI applications with the same rigor as software. Reduce costs, improve accuracy, prevent regressions — automatically."}</p>
                    <FadeInView motion={RevealMotion::Fade} delay={0.2} class={classes!("home-cta-buttons")}>
                        <ExternalLink
                            href={config::DEMO_BOOKING_URL}
                            class={classes!("btn", "btn-lg", "btn-white")}
                            icon={IconKind::ArrowRight}
                        >
                            {"Request a Demo"}
                        </ExternalLink>
                        <ExternalLink
                            href={config::SDK_REPO_URL}
                            class={classes!("btn", "btn-lg", "btn-outline", "light")}
                            icon={IconKind::Code}
                        >
                            {"Try the SDK"}
                        </ExternalLink>
                    </FadeInView>
                </div>
            </section>

            <style>
                {r#"
.homepage {
    background: #fff;
}

.home-hero {
    position: relative;
    overflow: hidden;
    color: #fff;
    background: linear-gradient(to bottom right, #020617, #1e1b4b);
}

.home-hero-backdrop {
    position: absolute;
    inset: 0;
    background-image: url('https://images.unsplash.com/photo-1639762681057-408e52192e55?q=80&w=2832&auto=format&fit=crop');
    background-size: cover;
    background-position: center;
    opacity: 0.1;
}

.home-hero-content {
    position: relative;
    padding-top: 6rem;
    padding-bottom: 6rem;
}

.home-hero-logo {
    margin-bottom: 4rem;
}

.home-hero-logo img {
    height: 3rem;
    width: auto;
}

.home-hero-copy {
    max-width: 48rem;
}

.home-hero h1 {
    font-size: clamp(2.25rem, 5vw, 3.75rem);
    font-weight: 700;
    line-height: 1.1;
    letter-spacing: -0.025em;
    margin: 0 0 1.5rem;
}

.home-hero-subtitle {
    font-size: clamp(1.25rem, 2.5vw, 1.5rem);
    color: #cbd5e1;
    max-width: 42rem;
    margin: 0 0 1.5rem;
}

.home-hero-checks {
    display: flex;
    flex-wrap: wrap;
    gap: 1rem;
    font-size: 0.875rem;
    color: #94a3b8;
    margin-bottom: 2.5rem;
}

.home-hero-checks span {
    display: inline-flex;
    align-items: center;
    gap: 0.5rem;
}

.home-hero-checks .check {
    width: 1rem;
    height: 1rem;
    color: #34d399;
}

.home-hero-ctas,
.home-cta-buttons {
    display: flex;
    flex-wrap: wrap;
    gap: 1rem;
}

.home-hero-accent {
    position: absolute;
    bottom: 0;
    left: 0;
    right: 0;
    height: 4px;
    background: linear-gradient(to right, #6366f1, #a855f7, #3b82f6);
}

.home-venues {
    padding: 2rem 0;
    background: #f8fafc;
    border-bottom: 1px solid #e2e8f0;
}

.home-venues-title {
    text-align: center;
    font-size: 0.875rem;
    font-weight: 500;
    color: #64748b;
    text-transform: uppercase;
    letter-spacing: 0.05em;
    margin: 0 0 1.5rem;
}

.home-venues-list {
    display: flex;
    flex-wrap: wrap;
    justify-content: center;
    align-items: center;
    gap: 2rem 3rem;
    color: #475569;
}

.home-venue {
    text-align: center;
}

.home-venue p {
    margin: 0;
}

.home-venue-name {
    font-weight: 600;
}

.home-venue-event {
    font-size: 0.75rem;
    color: #94a3b8;
}

.home-stats {
    padding: 4rem 0;
}

.home-stats-grid {
    display: grid;
    grid-template-columns: repeat(2, 1fr);
    gap: 2rem;
    text-align: center;
}

.home-stat-value {
    font-size: clamp(2.25rem, 4vw, 3rem);
    font-weight: 700;
    color: #4f46e5;
    margin-bottom: 0.5rem;
}

.home-stats p {
    color: #475569;
    margin: 0;
}

.home-section {
    padding: 5rem 0;
}

.home-section.tinted {
    background: linear-gradient(to bottom right, #eef2ff, #f8fafc);
}

.home-section-intro {
    max-width: 48rem;
    margin: 0 auto 4rem;
    text-align: center;
}

.home-section h2,
.home-demo-copy h2 {
    font-size: clamp(1.875rem, 3vw, 2.25rem);
    font-weight: 700;
    color: #111827;
    margin: 0 0 1.5rem;
}

.home-section-intro p {
    font-size: 1.25rem;
    color: #4b5563;
    margin: 0;
}

.home-grid-2 {
    display: grid;
    grid-template-columns: 1fr;
    gap: 2rem;
}

.home-pain {
    display: flex;
    gap: 1.25rem;
    padding: 1.5rem;
    border-radius: 0.75rem;
    transition: background 0.2s ease;
}

.home-pain:hover {
    background: #f9fafb;
}

.home-pain h3,
.home-pillar h3,
.home-step h3 {
    font-size: 1.25rem;
    font-weight: 600;
    color: #111827;
    margin: 0 0 0.5rem;
}

.home-pain p,
.home-pillar p,
.home-step p {
    color: #4b5563;
    margin: 0;
}

.home-icon-tile {
    width: 3rem;
    height: 3rem;
    border-radius: 0.75rem;
    display: flex;
    align-items: center;
    justify-content: center;
    flex-shrink: 0;
    background: #f3f4f6;
}

.home-icon-tile .icon {
    width: 1.5rem;
    height: 1.5rem;
}

.home-icon-tile.red { color: #dc2626; }
.home-icon-tile.amber { color: #d97706; }
.home-icon-tile.blue { color: #2563eb; }
.home-icon-tile.purple { color: #9333ea; }
.home-icon-tile.indigo { color: #4f46e5; background: #e0e7ff; }

.home-pillar {
    padding: 1.5rem;
    background: #fff;
    border-radius: 0.75rem;
    box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
    transition: box-shadow 0.2s ease;
}

.home-pillar:hover {
    box-shadow: 0 4px 6px -1px rgba(0, 0, 0, 0.1);
}

.home-pillar .home-icon-tile {
    margin-bottom: 1rem;
}

.home-flow {
    margin-top: 4rem;
}

.home-demo {
    display: grid;
    grid-template-columns: 1fr;
    gap: 3rem;
    align-items: center;
}

.home-demo-copy p {
    font-size: 1.125rem;
    color: #4b5563;
}

.home-tvl {
    padding: 4rem 0;
    background: #0f172a;
    color: #fff;
}

.home-tvl-grid,
.home-research-grid {
    display: grid;
    grid-template-columns: 1fr;
    gap: 3rem;
    align-items: center;
}

.home-badge {
    display: inline-block;
    padding: 0.25rem 0.75rem;
    border-radius: 9999px;
    background: rgba(99, 102, 241, 0.2);
    color: #a5b4fc;
    font-size: 0.875rem;
    font-weight: 500;
    margin-bottom: 1rem;
}

.home-tvl h2,
.home-research h2 {
    font-size: clamp(1.875rem, 3vw, 2.25rem);
    font-weight: 700;
    margin: 0 0 1rem;
}

.home-tvl p {
    color: #cbd5e1;
    font-size: 1.125rem;
    margin: 0 0 1.5rem;
}

.home-code {
    background: #1e293b;
    border-radius: 0.75rem;
    padding: 1.5rem;
    font-family: ui-monospace, SFMono-Regular, Menlo, monospace;
    font-size: 0.875rem;
}

.home-code-bar {
    display: flex;
    align-items: center;
    gap: 0.5rem;
    margin-bottom: 1rem;
    color: #94a3b8;
}

.home-code-bar .dot {
    width: 0.75rem;
    height: 0.75rem;
    border-radius: 9999px;
}

.dot.red { background: #ef4444; }
.dot.yellow { background: #eab308; }
.dot.green { background: #22c55e; }

.home-code-file {
    margin-left: 0.5rem;
}

.home-code pre {
    margin: 0;
    color: #cbd5e1;
    overflow-x: auto;
}

.home-steps {
    display: grid;
    grid-template-columns: 1fr;
    gap: 1.5rem;
}

.home-step {
    position: relative;
    padding: 1.5rem;
    border-radius: 0.75rem;
    background: #fff;
    border: 1px solid #f3f4f6;
    transition: border-color 0.2s ease, box-shadow 0.2s ease;
}

.home-step:hover {
    border-color: #e0e7ff;
    box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
}

.home-step-number {
    width: 3rem;
    height: 3rem;
    border-radius: 9999px;
    background: #e0e7ff;
    color: #4338ca;
    font-weight: 700;
    display: flex;
    align-items: center;
    justify-content: center;
    margin-bottom: 1rem;
}

.home-step-next {
    display: none;
    position: absolute;
    top: 50%;
    right: -0.75rem;
    transform: translateY(-50%);
    color: #818cf8;
    z-index: 10;
}

.home-research {
    padding: 5rem 0;
    background: #020617;
    color: #fff;
}

.home-research-lead {
    color: #cbd5e1;
    font-size: 1.125rem;
    margin: 0 0 1.5rem;
}

.home-research-card {
    padding: 1rem;
    border-radius: 0.75rem;
    background: rgba(15, 23, 42, 0.6);
    border: 1px solid #1e293b;
    margin-bottom: 1rem;
}

.home-research-card h4 {
    margin: 0 0 0.5rem;
    font-weight: 600;
}

.home-research-card p {
    margin: 0;
    color: #94a3b8;
    font-size: 0.875rem;
}

.home-research-row {
    display: flex;
    align-items: center;
    justify-content: space-between;
}

.home-pill {
    padding: 0.25rem 0.75rem;
    border-radius: 9999px;
    background: rgba(16, 185, 129, 0.2);
    color: #6ee7b7;
    font-size: 0.75rem;
    font-weight: 500;
}

.home-research-venues {
    display: grid;
    grid-template-columns: 1fr 1fr;
    gap: 0.5rem;
    font-size: 0.875rem;
    color: #94a3b8;
}

.home-gap {
    position: relative;
    height: 400px;
    border-radius: 1rem;
    overflow: hidden;
    background: linear-gradient(to bottom right, #4f46e5, #7e22ce);
    display: flex;
    flex-direction: column;
    align-items: center;
    justify-content: center;
    padding: 2rem;
    text-align: center;
}

.home-gap-value {
    font-size: 4.5rem;
    font-weight: 700;
    margin-bottom: 1rem;
}

.home-gap-title {
    font-size: 1.25rem;
    color: rgba(255, 255, 255, 0.9);
    margin: 0 0 0.5rem;
}

.home-gap-note {
    color: rgba(255, 255, 255, 0.7);
    max-width: 20rem;
    margin: 0;
}

.home-gap-dots {
    position: absolute;
    top: 2rem;
    right: 2rem;
    display: flex;
    gap: 0.5rem;
}

.home-gap-dots span {
    width: 0.75rem;
    height: 0.75rem;
    border-radius: 9999px;
}

.home-gap-dots .emerald { background: #34d399; }
.home-gap-dots .purple { background: #c084fc; }
.home-gap-dots .blue { background: #60a5fa; }

.home-cta {
    padding: 5rem 0;
    color: #fff;
    background: linear-gradient(to bottom right, #4f46e5, #7e22ce);
}

.home-cta-inner {
    max-width: 48rem;
    text-align: center;
}

.home-cta h2 {
    font-size: clamp(1.875rem, 3vw, 2.25rem);
    font-weight: 700;
    margin: 0 0 1.5rem;
}

.home-cta p {
    font-size: 1.25rem;
    opacity: 0.9;
    margin: 0 0 2.5rem;
}

.home-cta-buttons {
    justify-content: center;
}

.home-cta .btn-white {
    color: #4338ca;
}

.btn-outline.light {
    border: 2px solid #fff;
    color: #fff;
}

@media (min-width: 768px) {
    .home-hero-content {
        padding-top: 8rem;
        padding-bottom: 8rem;
    }

    .home-stats-grid {
        grid-template-columns: repeat(4, 1fr);
    }

    .home-grid-2,
    .home-tvl-grid,
    .home-research-grid,
    .home-demo {
        grid-template-columns: 1fr 1fr;
    }

    .home-steps {
        grid-template-columns: repeat(2, 1fr);
    }
}

@media (min-width: 1024px) {
    .home-steps {
        grid-template-columns: repeat(4, 1fr);
    }

    .home-step-next {
        display: block;
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
    use crate::test_support::{anchor_tags, render_with_props};

    #[test]
    fn stagger_is_a_tenth_per_item() {
        assert_eq!(stagger(0), 0.0);
        assert!((stagger(3) - 0.3).abs() < 1e-9);
    }

    #[test]
    fn call_to_action_buttons_carry_each_class() {
        let html = render_with_props::<Homepage>(());
        let anchors = anchor_tags(&html);

        let demo = anchors
            .iter()
            .filter(|a| a.contains(config::DEMO_BOOKING_URL))
            .collect::<Vec<_>>();
        assert_eq!(demo.len(), 2);
        assert!(demo.iter().all(|a| a.contains(r#"class="btn btn-lg btn-white""#)));
        assert!(anchors
            .iter()
            .any(|a| a.contains(r#"class="btn btn-lg btn-outline light""#)));
        assert!(anchors.iter().any(|a| a.contains(r#"class="btn btn-indigo""#)));
    }

    #[test]
    fn copy_keeps_its_dashes() {
        let html = render_with_props::<Homepage>(());

        assert!(html.contains("prevent regressions — automatically."));
        assert!(html.contains("decision — model, prompt, retrieval, hyperparameters — a measurable"));
        assert!(STEPS[1].2.contains("safety — or balance all four"));
    }

    #[test]
    fn renders_every_section() {
        let html = render_with_props::<Homepage>(());

        for heading in [
            "Ship AI Applications Like Software",
            "Presented",
            "Treat AI Decisions as Code",
            "Watch an Optimization Run",
            "TVL: The Tuned Variables Language",
            "How It Works",
            "Built on Peer-Reviewed Research",
            "Stop Guessing. Start Optimizing.",
        ] {
            assert!(html.contains(heading), "missing {heading}");
        }
        assert!(html.contains("demo-player"));
        assert!(html.contains("flow-diagram flow-light"));
        assert_eq!(html.matches(r#"class="home-step-next""#).count(), STEPS.len() - 1);
    }
}
