use yew::prelude::*;

use crate::components::external_link::ExternalLink;
use crate::components::flow_diagram::{FlowDiagram, FlowVariant};
use crate::components::icons::IconKind;
use crate::components::problem_solution::ProblemSolutionSection;
use crate::config;

struct Contact {
    name: &'static str,
    role: &'static str,
    email: &'static str,
    linkedin: &'static str,
    phone: &'static str,
}

const CONTACTS: [Contact; 2] = [
    Contact {
        name: "Achi Solomon",
        role: "Co-founder, CEO",
        email: config::CEO_EMAIL,
        linkedin: config::CEO_LINKEDIN_URL,
        phone: "+972-54-7784395",
    },
    Contact {
        name: "Dr. Nimrod Busany",
        role: "Co-founder, CTO",
        email: config::CTO_EMAIL,
        linkedin: config::CTO_LINKEDIN_URL,
        phone: "+972-54-4553811",
    },
];

const PERSONAS: [(&str, &str); 4] = [
    ("AI/ML/DS Engineers:", "Integrate via decorator (SDK), optimize with code."),
    ("No-Code Users:", "Visual interface for non-technical users."),
    ("QA Users:", "Scalable quality validation for agentic AI"),
    ("Stakeholders:", "Track Business KPIs and cost-efficiency metrics"),
];

const PARTNER_BENEFITS: [&str; 3] = [
    "Direct influence on the Traigent product roadmap",
    "White-glove dedicated engineering integration support",
    "Gain recognition as an AI innovator (success story)",
];

#[derive(Properties, PartialEq)]
struct SectionHeaderProps {
    children: Children,
}

#[function_component(SectionHeader)]
fn section_header(props: &SectionHeaderProps) -> Html {
    html! {
        <div class="op-section-header">{ for props.children.iter() }</div>
    }
}

#[function_component(OnePager)]
pub fn one_pager() -> Html {
    html! {
        <div class="one-pager">
            <div class="one-pager-inner">
                <div class="op-logo">
                    <img src={config::asset_url("images/traigent-logo-white.png")} alt="Traigent" />
                </div>

                <section class="op-section">
                    <SectionHeader>{"Company Overview"}</SectionHeader>
                    <p class="op-overview">
                        {"Traigent is building the AI Agents Continuous "}<strong>{"Optimization"}</strong>
                        {" infrastructure. We automate the complex process of optimizing AI agent configurations by balancing "}
                        <strong>{"accuracy"}</strong>{", "}<strong>{"latency"}</strong>{", and "}<strong>{"cost"}</strong>
                        {", so engineering teams can ship production-ready agents "}<strong>{"faster"}</strong>
                        {" and with "}<strong>{"confidence"}</strong>{"."}
                    </p>
                </section>

                <ProblemSolutionSection show_images={true} />

                <section class="op-section">
                    <SectionHeader>{"The Product: AI Agent Optimizer"}</SectionHeader>
                    <FlowDiagram variant={FlowVariant::Dark} />
                </section>

                <section class="op-section">
                    <SectionHeader>{"Personas"}</SectionHeader>
                    <div class="op-personas">
                        { for PERSONAS.iter().map(|(who, what)| html! {
                            <p><strong>{*who}</strong>{" "}{*what}</p>
                        }) }
                    </div>
                </section>

                <section class="op-section">
                    <SectionHeader>{"POC & Design Partner Program"}</SectionHeader>
                    <div class="op-poc">
                        <div>
                            <h4>{"Before"}</h4>
                            <p class="op-muted">{"Define:"}</p>
                            <ul>
                                <li>{"Benchmark (EvalSet + Eval)"}</li>
                                <li>{"POC success metrics"}</li>
                            </ul>
                        </div>
                        <div>
                            <h4>{"POC"}</h4>
                            <p>{"1-week integration & optimization on your system"}</p>
                        </div>
                        <div>
                            <h4>{"After"}</h4>
                            <p>{"Compare optimized results vs. your baseline benchmark"}</p>
                        </div>
                    </div>
                    <div class="op-benefits">
                        <h4>{"Design Partner Benefits"}</h4>
                        <ul>
                            { for PARTNER_BENEFITS.iter().map(|benefit| html! { <li>{*benefit}</li> }) }
                        </ul>
                    </div>
                </section>

                <section class="op-section">
                    <SectionHeader>{"Contact"}</SectionHeader>
                    <div class="op-contacts">
                        { for CONTACTS.iter().map(|contact| html! {
                            <div class="op-contact">
                                <p class="op-contact-name">{contact.name}{" | "}{contact.role}</p>
                                <p>
                                    <a href={format!("mailto:{}", contact.email)}>{contact.email}</a>
                                    {" | "}
                                    <ExternalLink href={contact.linkedin}>{"LinkedIn"}</ExternalLink>
                                </p>
                                <p class="op-muted">{contact.phone}</p>
                            </div>
                        }) }
                    </div>
                </section>

                <div class="op-cta">
                    <ExternalLink
                        href={config::DEMO_BOOKING_URL}
                        class={classes!("btn", "btn-lg", "btn-gradient")}
                        icon={IconKind::ArrowRight}
                    >
                        {"Request a Demo"}
                    </ExternalLink>
                </div>
            </div>
            <style>
                {r#"
.one-pager {
    background: #020617;
    min-height: 100vh;
}

.one-pager-inner {
    max-width: 56rem;
    margin: 0 auto;
    padding: 3rem 1.5rem;
}

.op-logo {
    margin-bottom: 2.5rem;
}

.op-logo img {
    height: 3.5rem;
}

.op-section {
    margin-bottom: 2.5rem;
}

.op-section-header {
    background: #3b82f6;
    color: #fff;
    font-weight: 700;
    font-size: 1.25rem;
    padding: 0.75rem 1.5rem;
    border-radius: 0.5rem;
    margin-bottom: 1rem;
}

.op-overview {
    color: #cbd5e1;
    line-height: 1.625;
}

.op-personas {
    display: grid;
    grid-template-columns: 1fr;
    gap: 0.75rem 2rem;
}

.op-personas p,
.op-contact p {
    color: #e2e8f0;
    margin: 0;
}

.op-poc {
    display: grid;
    grid-template-columns: 1fr;
    gap: 1.5rem;
    margin-bottom: 1.5rem;
    color: #cbd5e1;
    font-size: 0.875rem;
}

.op-poc h4,
.op-benefits h4 {
    color: #fff;
    font-weight: 700;
    font-size: 1rem;
    margin: 0 0 0.5rem;
}

.op-poc p {
    margin: 0;
}

.op-poc ul {
    margin: 0;
    padding-left: 1.25rem;
}

.op-muted {
    color: #94a3b8;
}

.op-benefits {
    background: #1e293b;
    border: 1px solid #334155;
    border-radius: 0.5rem;
    padding: 1rem;
    text-align: center;
}

.op-benefits ul {
    list-style: none;
    margin: 0;
    padding: 0;
    color: #cbd5e1;
    font-size: 0.875rem;
}

.op-benefits li + li {
    margin-top: 0.25rem;
}

.op-contacts {
    display: grid;
    grid-template-columns: 1fr;
    gap: 2rem;
}

.op-contact p + p {
    margin-top: 0.25rem;
}

.op-contact-name {
    font-weight: 700;
}

.op-contact a {
    color: #818cf8;
    text-decoration: none;
}

.op-contact a:hover {
    text-decoration: underline;
}

.op-cta {
    text-align: center;
    margin-top: 3rem;
}

.btn-gradient {
    color: #fff;
    background: linear-gradient(to right, #4f46e5, #9333ea);
    box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.3);
}

.btn-gradient:hover {
    background: linear-gradient(to right, #4338ca, #7e22ce);
}

@media (min-width: 768px) {
    .op-section-header {
        font-size: 1.5rem;
    }

    .op-personas,
    .op-contacts {
        grid-template-columns: 1fr 1fr;
    }

    .op-poc {
        grid-template-columns: repeat(3, 1fr);
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
    use crate::test_support::{anchor_tags, render_path};

    #[test]
    fn lists_both_founders() {
        let html = render_path("/one-pager");

        for contact in &CONTACTS {
            assert!(html.contains(contact.phone));
            assert!(html.contains(&format!(r#"href="mailto:{}""#, contact.email)));
        }
        let linkedin = anchor_tags(&html)
            .into_iter()
            .filter(|a| a.contains("linkedin.com"))
            .count();
        assert_eq!(linkedin, CONTACTS.len());
    }

    #[test]
    fn uses_dark_flow_and_images() {
        let html = render_path("/one-pager");

        assert!(html.contains("flow-diagram flow-dark"));
        assert!(html.contains("robot-error.png"));
        assert!(html.contains("Design Partner Benefits"));
        assert!(html.contains("Personas"));
    }

    #[test]
    fn mail_links_stay_in_place() {
        let html = render_path("/one-pager");
        for tag in anchor_tags(&html).iter().filter(|a| a.contains("mailto:")) {
            assert!(!tag.contains("target="), "{tag}");
        }
    }
}
