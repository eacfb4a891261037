//! Efficiency-vs-load chart for the value proposition page.
//!
//! Everything is plain SVG. The entrance is CSS transitions keyed off the
//! `is-revealed` class, which `use_reveal` adds once the chart scrolls into
//! view: illustrations pop in, then every curve draws itself along its
//! normalised `pathLength`, then the legend fades in.

use yew::prelude::*;

use crate::components::reveal::{use_reveal, RevealTrigger};
use crate::config;

/// One series. Drawn twice: a wide blurred glow layer under a crisp line.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Curve {
    pub name: &'static str,
    pub path: &'static str,
    pub stroke: &'static str,
    pub width: f32,
    pub glow_stroke: &'static str,
    pub glow_width: f32,
    pub glow_opacity: f32,
    pub glow_filter: &'static str,
    /// Seconds after reveal before the curve starts drawing.
    pub delay: f32,
    pub legend_x: u32,
    pub legend_glow_width: f32,
}

pub const CURVES: [Curve; 4] = [
    Curve {
        name: "AI SDLC",
        path: "M 60 180 C 120 182, 180 195, 240 215 C 300 235, 360 270, 420 305 C 480 340, 540 355, 600 360 C 660 365, 700 367, 740 368",
        stroke: "#dc2626",
        width: 3.0,
        glow_stroke: "#991b1b",
        glow_width: 8.0,
        glow_opacity: 0.4,
        glow_filter: "glowRed",
        delay: 0.2,
        legend_x: 85,
        legend_glow_width: 6.0,
    },
    Curve {
        name: "Credibility",
        path: "M 60 195 C 140 198, 220 210, 300 235 C 380 260, 460 290, 540 315 C 620 340, 680 350, 740 355",
        stroke: "#9ca3af",
        width: 2.5,
        glow_stroke: "#6b7280",
        glow_width: 6.0,
        glow_opacity: 0.3,
        glow_filter: "glowGray",
        delay: 0.4,
        legend_x: 200,
        legend_glow_width: 5.0,
    },
    Curve {
        name: "Quality",
        path: "M 60 210 C 140 215, 220 235, 300 260 C 380 285, 460 310, 540 332 C 620 354, 680 360, 740 362",
        stroke: "#f1f5f9",
        width: 2.5,
        glow_stroke: "#e2e8f0",
        glow_width: 6.0,
        glow_opacity: 0.4,
        glow_filter: "glowGray",
        delay: 0.6,
        legend_x: 330,
        legend_glow_width: 5.0,
    },
    // Exponential cost growth, strongest glow.
    Curve {
        name: "Cost",
        path: "M 60 365 C 200 364, 350 362, 450 358 C 530 352, 580 330, 620 280 C 660 220, 700 180, 740 168",
        stroke: "#f87171",
        width: 4.0,
        glow_stroke: "#ef4444",
        glow_width: 12.0,
        glow_opacity: 0.5,
        glow_filter: "glowRed",
        delay: 0.8,
        legend_x: 445,
        legend_glow_width: 8.0,
    },
];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Zone {
    pub label: &'static str,
    pub center_x: u32,
    pub colour: &'static str,
    pub image: &'static str,
    pub radial: &'static str,
    pub glow_opacity: f32,
    pub delay: f32,
    /// Glow filter on the zone's caption, if any.
    pub label_glow: Option<&'static str>,
}

pub const ZONES: [Zone; 3] = [
    Zone {
        label: "OPTIMAL",
        center_x: 175,
        colour: "#3b82f6",
        image: "images/robot-happy.png",
        radial: "blueRadial",
        glow_opacity: 0.6,
        delay: 0.5,
        label_glow: None,
    },
    Zone {
        label: "DEGRADING",
        center_x: 416,
        colour: "#a855f7",
        image: "images/robot-confused.png",
        radial: "purpleRadial",
        glow_opacity: 0.5,
        delay: 1.0,
        label_glow: None,
    },
    Zone {
        label: "CRITICAL",
        center_x: 641,
        colour: "#ef4444",
        image: "images/robot-error.png",
        radial: "redRadial",
        glow_opacity: 0.6,
        delay: 1.5,
        label_glow: Some("glowRed"),
    },
];

pub const LEGEND_DELAY: f32 = 2.5;

fn delay(seconds: f32) -> String {
    format!("transition-delay: {}s;", seconds)
}

fn glow_filter(id: &'static str, colour: &'static str, deviation: &'static str, opacity: &'static str) -> Html {
    html! {
        <filter id={id} x="-50%" y="-50%" width="200%" height="200%">
            <feGaussianBlur stdDeviation={deviation} result="blur" />
            <feFlood flood-color={colour} flood-opacity={opacity} />
            <feComposite in2="blur" operator="in" />
            <feMerge>
                <feMergeNode />
                <feMergeNode in="SourceGraphic" />
            </feMerge>
        </filter>
    }
}

fn radial(id: &'static str, inner: &'static str, inner_opacity: &'static str, mid: &'static str, mid_opacity: &'static str) -> Html {
    html! {
        <radialGradient id={id} cx="50%" cy="50%" r="50%">
            <stop offset="0%" stop-color={inner} stop-opacity={inner_opacity} />
            <stop offset="70%" stop-color={mid} stop-opacity={mid_opacity} />
            <stop offset="100%" stop-color="transparent" stop-opacity="0" />
        </radialGradient>
    }
}

fn defs() -> Html {
    html! {
        <defs>
            { glow_filter("glowBlue", "#3b82f6", "4", "0.8") }
            { glow_filter("glowPurple", "#a855f7", "4", "0.8") }
            { glow_filter("glowRed", "#ef4444", "5", "0.9") }
            { glow_filter("glowGray", "#94a3b8", "3", "0.6") }
            { glow_filter("glowCyan", "#22d3ee", "6", "0.8") }

            <linearGradient id="rightZoneGradient" x1="0%" y1="0%" x2="100%" y2="0%">
                <stop offset="0%" stop-color="transparent" />
                <stop offset="100%" stop-color="rgba(127, 29, 29, 0.15)" />
            </linearGradient>

            { radial("blueRadial", "#3b82f6", "0.6", "#1e40af", "0.2") }
            { radial("purpleRadial", "#a855f7", "0.5", "#6b21a8", "0.15") }
            { radial("redRadial", "#ef4444", "0.7", "#991b1b", "0.3") }
        </defs>
    }
}

fn zone_figure(zone: &Zone) -> Html {
    let x = zone.center_x;
    html! {
        <g class="graph-figure" style={delay(zone.delay)}>
            <circle
                cx={x.to_string()}
                cy="70"
                r="50"
                fill={format!("url(#{})", zone.radial)}
                opacity={zone.glow_opacity.to_string()}
            />
            <image
                href={config::asset_url(zone.image)}
                x={(x - 55).to_string()}
                y="15"
                width="110"
                height="110"
                preserveAspectRatio="xMidYMid meet"
            />
        </g>
    }
}

fn curve(curve: &Curve) -> Html {
    html! {
        <g class="graph-curve" style={delay(curve.delay)}>
            <path
                d={curve.path}
                pathLength="1"
                fill="none"
                stroke={curve.glow_stroke}
                stroke-width={curve.glow_width.to_string()}
                stroke-linecap="round"
                opacity={curve.glow_opacity.to_string()}
                filter={format!("url(#{})", curve.glow_filter)}
            />
            <path
                d={curve.path}
                pathLength="1"
                fill="none"
                stroke={curve.stroke}
                stroke-width={curve.width.to_string()}
                stroke-linecap="round"
            />
        </g>
    }
}

fn legend_entry(curve: &Curve) -> Html {
    let x = curve.legend_x;
    html! {
        <g class="graph-legend-entry">
            <line
                x1={x.to_string()}
                y1="438"
                x2={(x + 25).to_string()}
                y2="438"
                stroke={curve.glow_stroke}
                stroke-width={curve.legend_glow_width.to_string()}
                stroke-linecap="round"
                opacity={curve.glow_opacity.to_string()}
                filter={format!("url(#{})", curve.glow_filter)}
            />
            <line
                x1={x.to_string()}
                y1="438"
                x2={(x + 25).to_string()}
                y2="438"
                stroke={curve.stroke}
                stroke-width={curve.width.to_string()}
                stroke-linecap="round"
            />
            <text
                x={(x + 33).to_string()}
                y="441"
                fill={curve.stroke}
                font-size="9"
                font-family="monospace"
                font-weight="500"
            >
                {curve.name}
            </text>
        </g>
    }
}

#[function_component(ScaleGraph)]
pub fn scale_graph() -> Html {
    let node = use_node_ref();
    let reveal = use_reveal(node.clone(), RevealTrigger::InView);

    html! {
        <div ref={node} class={classes!("scale-graph", reveal.is_shown().then_some("is-revealed"))}>
            <svg viewBox="0 0 800 460" role="img" aria-label="AI agent efficiency falls and cost climbs as load grows">
                { defs() }

                <rect x="0" y="0" width="800" height="450" fill="#000000" />
                <rect x="533" y="120" width="237" height="280" fill="url(#rightZoneGradient)" />

                { for (0..6).map(|i| {
                    let y = (170 + i * 40).to_string();
                    html! { <line x1="50" y1={y.clone()} x2="750" y2={y} stroke="#1a1a2e" stroke-width="1" /> }
                }) }

                <line x1="300" y1="120" x2="300" y2="400" stroke="#334155" stroke-width="1" stroke-dasharray="8,4" />
                <line x1="533" y1="120" x2="533" y2="400" stroke="#4a1515" stroke-width="1" stroke-dasharray="8,4" />

                <line x1="50" y1="370" x2="750" y2="370" stroke="#374151" stroke-width="2" />
                <line x1="50" y1="170" x2="50" y2="370" stroke="#374151" stroke-width="2" />

                <text x="400" y="420" text-anchor="middle" fill="#4b5563" font-size="11" font-family="monospace" letter-spacing="1">
                    {"LOAD (REQ/SEC • DATA VOLUME • COMPLEXITY) →"}
                </text>
                <text x="20" y="270" text-anchor="middle" fill="#4b5563" font-size="11" font-family="monospace" letter-spacing="1" transform="rotate(-90, 20, 270)">
                    {"EFFICIENCY"}
                </text>

                { for ZONES.iter().map(zone_figure) }
                { for CURVES.iter().map(curve) }

                { for ZONES.iter().map(|zone| html! {
                    <text
                        x={zone.center_x.to_string()}
                        y="395"
                        text-anchor="middle"
                        fill={zone.colour}
                        font-size="10"
                        font-family="monospace"
                        font-weight="600"
                        letter-spacing="1"
                        filter={zone.label_glow.map(|id| format!("url(#{})", id))}
                    >
                        {zone.label}
                    </text>
                }) }

                <g class="graph-legend" style={delay(LEGEND_DELAY)}>
                    { for CURVES.iter().map(legend_entry) }
                </g>
            </svg>
            <style>
                {r#"
.scale-graph {
    position: relative;
    width: 100%;
    max-width: 56rem;
    margin: 0 auto;
}

.scale-graph svg {
    width: 100%;
    height: auto;
    display: block;
}

.graph-figure {
    opacity: 0;
    transform: scale(0.8);
    transform-box: fill-box;
    transform-origin: center;
    transition-property: opacity, transform;
    transition-duration: 0.5s;
}

.graph-curve {
    opacity: 0;
    transition-property: opacity;
    transition-duration: 2s;
    transition-timing-function: ease-in-out;
}

.graph-curve path {
    stroke-dasharray: 1;
    stroke-dashoffset: 1;
    transition: stroke-dashoffset 2s ease-in-out;
    transition-delay: inherit;
}

.graph-legend {
    opacity: 0;
    transition-property: opacity;
    transition-duration: 0.5s;
}

.scale-graph.is-revealed .graph-figure {
    opacity: 1;
    transform: scale(1);
}

.scale-graph.is-revealed .graph-curve,
.scale-graph.is-revealed .graph-legend {
    opacity: 1;
}

.scale-graph.is-revealed .graph-curve path {
    stroke-dashoffset: 0;
}

@media (prefers-reduced-motion: reduce) {
    .graph-figure,
    .graph-curve,
    .graph-curve path,
    .graph-legend {
        transition: none;
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
    fn entrance_is_staggered() {
        assert!(ZONES.windows(2).all(|w| w[0].delay < w[1].delay));
        assert!(CURVES.windows(2).all(|w| w[0].delay < w[1].delay));
        assert!(CURVES.iter().all(|c| c.delay < LEGEND_DELAY));
    }

    #[test]
    fn legend_entries_do_not_overlap() {
        // swatch (25) + gap (8) + label
        assert!(CURVES.windows(2).all(|w| w[1].legend_x >= w[0].legend_x + 100));
    }

    #[test]
    fn only_the_critical_caption_glows() {
        let html = render_with_props::<ScaleGraph>(());
        let caption = regex::Regex::new(r"<text [^>]*>\s*(OPTIMAL|DEGRADING|CRITICAL)\s*</text>").unwrap();

        let glowing: Vec<_> = caption
            .captures_iter(&html)
            .filter(|c| c[0].contains(r#"filter="url(#glowRed)""#))
            .map(|c| c[1].to_string())
            .collect();
        assert_eq!(glowing, vec!["CRITICAL".to_string()]);
        assert_eq!(caption.captures_iter(&html).count(), ZONES.len());
    }

    #[test]
    fn renders_hidden_with_all_series() {
        let html = render_with_props::<ScaleGraph>(());

        assert!(html.contains(r#"class="scale-graph""#), "{html}");
        assert!(!html.contains("scale-graph is-revealed"));
        assert_eq!(html.matches(r#"pathLength="1""#).count(), CURVES.len() * 2);
        for curve in CURVES {
            assert!(html.contains(curve.name));
        }
        for zone in ZONES {
            assert!(html.contains(zone.label));
            assert!(html.contains(&config::asset_url(zone.image)));
        }
    }
}
