use yew::prelude::*;

/// 24x24 stroke icons, drawn with `currentColor`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IconKind {
    ArrowRight,
    ArrowLeft,
    Check,
    ChevronRight,
    ExternalLink,
    Terminal,
    Zap,
    Code,
    GitBranch,
    Shield,
    Clock,
    DollarSign,
    TrendingUp,
    Users,
    Play,
    Pause,
}

impl IconKind {
    fn paths(self) -> &'static [&'static str] {
        match self {
            IconKind::ArrowRight => &["M5 12h14", "m12 5 7 7-7 7"],
            IconKind::ArrowLeft => &["m12 19-7-7 7-7", "M19 12H5"],
            IconKind::Check => &["M20 6 9 17l-5-5"],
            IconKind::ChevronRight => &["m9 18 6-6-6-6"],
            IconKind::ExternalLink => &[
                "M15 3h6v6",
                "M10 14 21 3",
                "M18 13v6a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V8a2 2 0 0 1 2-2h6",
            ],
            IconKind::Terminal => &["m4 17 6-6-6-6", "M12 19h8"],
            IconKind::Zap => &["M13 2 3 14h9l-1 8 10-12h-9l1-8z"],
            IconKind::Code => &["m16 18 6-6-6-6", "m8 6-6 6 6 6"],
            IconKind::GitBranch => &[
                "M6 3v12",
                "M15 6a3 3 0 1 0 6 0a3 3 0 1 0 -6 0",
                "M3 18a3 3 0 1 0 6 0a3 3 0 1 0 -6 0",
                "M18 9a9 9 0 0 1-9 9",
            ],
            IconKind::Shield => &["M12 22s8-4 8-10V5l-8-3-8 3v7c0 6 8 10 8 10z"],
            IconKind::Clock => &["M2 12a10 10 0 1 0 20 0a10 10 0 1 0 -20 0", "M12 6v6l4 2"],
            IconKind::DollarSign => &["M12 2v20", "M17 5H9.5a3.5 3.5 0 0 0 0 7h5a3.5 3.5 0 0 1 0 7H6"],
            IconKind::TrendingUp => &["m22 7-8.5 8.5-5-5L2 17", "M16 7h6v6"],
            IconKind::Users => &[
                "M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2",
                "M5 7a4 4 0 1 0 8 0a4 4 0 1 0 -8 0",
                "M22 21v-2a4 4 0 0 0-3-3.87",
                "M16 3.13a4 4 0 0 1 0 7.75",
            ],
            IconKind::Play => &["M6 3 20 12 6 21z"],
            IconKind::Pause => &["M6 4h4v16H6z", "M14 4h4v16h-4z"],
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct IconProps {
    pub kind: IconKind,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(Icon)]
pub fn icon(props: &IconProps) -> Html {
    html! {
        <svg
            class={classes!("icon", props.class.clone())}
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            { for props.kind.paths().iter().map(|d| html! { <path d={*d} /> }) }
        </svg>
    }
}
