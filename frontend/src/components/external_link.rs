use yew::prelude::*;

use crate::components::icons::{Icon, IconKind};

pub const NEW_CONTEXT_TARGET: &str = "_blank";
pub const SAFE_REL: &str = "noopener noreferrer";

#[derive(Properties, PartialEq)]
pub struct ExternalLinkProps {
    pub href: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    /// Trailing icon, e.g. an arrow or the external-link glyph.
    #[prop_or_default]
    pub icon: Option<IconKind>,
    #[prop_or_default]
    pub children: Children,
}

/// Anchor to another site. Always opens in a new browsing context and never
/// hands the opener or referrer to the destination.
#[function_component(ExternalLink)]
pub fn external_link(props: &ExternalLinkProps) -> Html {
    html! {
        <a
            href={props.href.clone()}
            target={NEW_CONTEXT_TARGET}
            rel={SAFE_REL}
            class={props.class.clone()}
        >
            { for props.children.iter() }
            {
                if let Some(kind) = props.icon {
                    html! { <Icon {kind} class={classes!("icon-trailing")} /> }
                } else {
                    html! {}
                }
            }
        </a>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{anchor_tags, render_with_props};

    #[test]
    fn carries_target_and_rel() {
        let html = render_with_props::<ExternalLink>(ExternalLinkProps {
            href: AttrValue::from("https://tvl-lang.org"),
            class: classes!("btn"),
            icon: Some(IconKind::ExternalLink),
            children: Children::new(vec![html! { {"TVL Language"} }]),
        });

        let anchors = anchor_tags(&html);
        assert_eq!(anchors.len(), 1);
        assert!(anchors[0].contains(r#"href="https://tvl-lang.org""#));
        assert!(anchors[0].contains(r#"target="_blank""#));
        assert!(anchors[0].contains(r#"rel="noopener noreferrer""#));
        assert!(html.contains("icon-trailing"));
    }
}
