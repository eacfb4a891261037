use yew::prelude::*;

use crate::components::icons::{Icon, IconKind};
use crate::components::reveal::FadeInView;
use crate::config;

/// `Light` sits on white sections, `Dark` on slate backgrounds.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FlowVariant {
    #[default]
    Light,
    Dark,
}

impl FlowVariant {
    fn class(self) -> &'static str {
        match self {
            FlowVariant::Light => "flow-light",
            FlowVariant::Dark => "flow-dark",
        }
    }
}

/// What sits in the middle of the diagram.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlowEngine {
    Logo,
    Glyph,
}

impl FlowVariant {
    /// Dark backgrounds get the logo mark, light ones the glyph tile.
    fn default_engine(self) -> FlowEngine {
        match self {
            FlowVariant::Light => FlowEngine::Glyph,
            FlowVariant::Dark => FlowEngine::Logo,
        }
    }
}

const INPUTS: [&str; 2] = ["Prompts & Models", "Eval Data & KPIs"];
const OUTPUTS: [&str; 2] = ["Optimized Configs", "Evidence-backed Reports"];

#[derive(Properties, PartialEq)]
pub struct FlowDiagramProps {
    #[prop_or_default]
    pub variant: FlowVariant,
    /// Stagger the three boxes in as the diagram scrolls into view.
    #[prop_or(false)]
    pub reveal: bool,
    /// Overrides the variant's usual centre piece.
    #[prop_or_default]
    pub engine: Option<FlowEngine>,
}

#[derive(Properties, PartialEq)]
struct StageProps {
    class: Classes,
    reveal: bool,
    delay: f64,
    children: Children,
}

#[function_component(Stage)]
fn stage(props: &StageProps) -> Html {
    if props.reveal {
        html! {
            <FadeInView class={props.class.clone()} delay={props.delay}>
                { for props.children.iter() }
            </FadeInView>
        }
    } else {
        html! {
            <div class={props.class.clone()}>
                { for props.children.iter() }
            </div>
        }
    }
}

fn flow_box(kind: &'static str, glyph: &'static str, title: &'static str, items: &[&'static str]) -> Html {
    html! {
        <>
            <div class="flow-box-header">
                <div class={classes!("flow-glyph", kind)}>{glyph}</div>
                <h4>{title}</h4>
            </div>
            <ul>
                { for items.iter().map(|item| html! {
                    <li><span class={classes!("flow-dot", kind)}></span>{*item}</li>
                }) }
            </ul>
        </>
    }
}

#[function_component(FlowDiagram)]
pub fn flow_diagram(props: &FlowDiagramProps) -> Html {
    let engine = props.engine.unwrap_or_else(|| props.variant.default_engine());

    let engine = if engine == FlowEngine::Logo {
        html! {
            <div class="flow-engine-logo">
                <img src={config::asset_url("images/traigent-logo-icon.png")} alt="Traigent" />
            </div>
        }
    } else {
        html! {
            <div class="flow-engine-tile">
                <span>{"⚡"}</span>
            </div>
        }
    };

    html! {
        <div class={classes!("flow-diagram", props.variant.class())}>
            <div class="flow-grid">
                <Stage class={classes!("flow-box", "flow-input")} reveal={props.reveal} delay={0.1}>
                    { flow_box("input", "📥", "Input", &INPUTS) }
                </Stage>

                <div class="flow-arrow input">
                    <Icon kind={IconKind::ArrowRight} />
                </div>

                <Stage class={classes!("flow-engine")} reveal={props.reveal} delay={0.2}>
                    <div class="flow-engine-inner">
                        { engine }
                        <span class="flow-engine-label">{"TRAIGENT"}</span>
                    </div>
                </Stage>

                <div class="flow-arrow output">
                    <Icon kind={IconKind::ArrowRight} />
                </div>

                <Stage class={classes!("flow-box", "flow-output")} reveal={props.reveal} delay={0.3}>
                    { flow_box("output", "📤", "Output", &OUTPUTS) }
                </Stage>
            </div>

            <div class="flow-mobile-arrows">
                <span class="flow-mobile-arrow">{"→"}</span>
                <span class="flow-mobile-label">{"TRAIGENT"}</span>
                <span class="flow-mobile-arrow">{"→"}</span>
            </div>

            <style>
                {r#"
.flow-diagram {
    position: relative;
}

.flow-grid {
    display: grid;
    grid-template-columns: 1fr;
    gap: 1rem;
    align-items: center;
}

.flow-box {
    border-radius: 0.75rem;
    padding: 1.25rem;
    border: 1px solid #334155;
    background: #0f172a;
}

.flow-dark .flow-box {
    background: #1e293b;
}

.flow-box.flow-output {
    border-color: rgba(16, 185, 129, 0.3);
}

.flow-box-header {
    display: flex;
    align-items: center;
    gap: 0.5rem;
    margin-bottom: 0.75rem;
}

.flow-box-header h4 {
    margin: 0;
    color: #fff;
    font-weight: 700;
}

.flow-glyph {
    width: 2rem;
    height: 2rem;
    border-radius: 0.5rem;
    display: flex;
    align-items: center;
    justify-content: center;
    font-size: 1.125rem;
}

.flow-glyph.input {
    background: rgba(59, 130, 246, 0.2);
}

.flow-glyph.output {
    background: rgba(16, 185, 129, 0.2);
}

.flow-box ul {
    list-style: none;
    margin: 0;
    padding: 0;
    font-size: 0.875rem;
}

.flow-box li {
    display: flex;
    align-items: center;
    gap: 0.5rem;
    color: #cbd5e1;
    margin-top: 0.5rem;
}

.flow-dot {
    width: 0.375rem;
    height: 0.375rem;
    border-radius: 9999px;
}

.flow-dot.input {
    background: #60a5fa;
}

.flow-dot.output {
    background: #34d399;
}

.flow-arrow {
    display: none;
    justify-content: center;
}

.flow-arrow .icon {
    width: 1.5rem;
    height: 1.5rem;
}

.flow-light .flow-arrow.input { color: #3b82f6; }
.flow-light .flow-arrow.output { color: #10b981; }
.flow-dark .flow-arrow.input { color: #60a5fa; }
.flow-dark .flow-arrow.output { color: #34d399; }

.flow-engine {
    display: flex;
    justify-content: center;
}

.flow-engine-inner {
    position: relative;
    display: flex;
    flex-direction: column;
    align-items: center;
}

.flow-engine-tile {
    width: 5rem;
    height: 5rem;
    border-radius: 1rem;
    display: flex;
    align-items: center;
    justify-content: center;
    font-size: 1.875rem;
    background: linear-gradient(to bottom right, #3b82f6, #4f46e5);
    box-shadow: 0 10px 15px -3px rgba(59, 130, 246, 0.25);
}

.flow-engine-logo {
    width: 6rem;
    height: 6rem;
}

.flow-engine-logo img {
    width: 100%;
    height: 100%;
    object-fit: contain;
    filter: drop-shadow(0 0 15px rgba(59, 130, 246, 0.5));
}

.flow-engine-label {
    margin-top: 0.5rem;
    font-size: 0.75rem;
    font-weight: 600;
    white-space: nowrap;
}

.flow-light .flow-engine-label,
.flow-light .flow-mobile-arrows { color: #4f46e5; }
.flow-dark .flow-engine-label,
.flow-dark .flow-mobile-arrows { color: #60a5fa; }

.flow-mobile-arrows {
    display: flex;
    flex-direction: column;
    align-items: center;
    gap: 0.5rem;
    margin: 1rem 0;
}

.flow-mobile-arrow {
    transform: rotate(90deg);
}

.flow-mobile-label {
    font-size: 0.75rem;
    font-weight: 600;
}

@media (min-width: 768px) {
    .flow-grid {
        grid-template-columns: 2fr 1fr 1fr 1fr 2fr;
    }

    .flow-arrow {
        display: flex;
    }

    .flow-mobile-arrows {
        display: none;
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
    fn light_variant_uses_glyph_tile() {
        let html = render_with_props::<FlowDiagram>(FlowDiagramProps {
            variant: FlowVariant::Light,
            reveal: false,
            engine: None,
        });

        assert!(html.contains("flow-diagram flow-light"));
        assert!(html.contains(r#"class="flow-engine-tile""#));
        assert!(!html.contains("traigent-logo-icon.png"));
        assert!(html.contains("Optimized Configs"));
        assert!(!html.contains("reveal"));
    }

    #[test]
    fn dark_variant_shows_logo_and_can_reveal() {
        let html = render_with_props::<FlowDiagram>(FlowDiagramProps {
            variant: FlowVariant::Dark,
            reveal: true,
            engine: None,
        });

        assert!(html.contains(r#"src="/images/traigent-logo-icon.png""#));
        assert_eq!(html.matches("reveal reveal-up").count(), 3);
        assert!(html.contains("Evidence-backed Reports"));
    }

    #[test]
    fn dark_variant_can_keep_the_glyph() {
        let html = render_with_props::<FlowDiagram>(FlowDiagramProps {
            variant: FlowVariant::Dark,
            reveal: true,
            engine: Some(FlowEngine::Glyph),
        });

        assert!(html.contains("flow-diagram flow-dark"));
        assert!(html.contains(r#"class="flow-engine-tile""#));
        assert!(!html.contains("traigent-logo-icon.png"));
    }
}
