//! Badge Component
//!
//! Small pill labels: price change, article category, blog tags.

use cryptoworld_core::CategoryTone;
use dioxus::prelude::*;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum BadgeVariant {
    #[default]
    Default,
    Secondary,
    /// Positive change
    Success,
    /// Negative change
    Destructive,
    /// Yellow "Featured" marker
    Featured,
    /// Category/tag color family
    Tone(CategoryTone),
}

impl BadgeVariant {
    pub fn class(&self) -> String {
        match self {
            BadgeVariant::Default => "badge".to_string(),
            BadgeVariant::Secondary => "badge badge-secondary".to_string(),
            BadgeVariant::Success => "badge badge-success".to_string(),
            BadgeVariant::Destructive => "badge badge-destructive".to_string(),
            BadgeVariant::Featured => "badge tone-yellow".to_string(),
            BadgeVariant::Tone(tone) => format!("badge {}", tone.class()),
        }
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct BadgeProps {
    #[props(default)]
    pub variant: BadgeVariant,
    pub children: Element,
}

#[component]
pub fn Badge(props: BadgeProps) -> Element {
    let class = props.variant.class();

    rsx! {
        span { class: "{class}", {props.children} }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn badge_classes() {
        assert_eq!(BadgeVariant::default().class(), "badge");
        assert_eq!(BadgeVariant::Success.class(), "badge badge-success");
        assert_eq!(
            BadgeVariant::Tone(CategoryTone::for_label("Bitcoin")).class(),
            "badge tone-orange"
        );
        assert_eq!(
            BadgeVariant::Tone(CategoryTone::for_label("Beginner")).class(),
            "badge tone-gray"
        );
    }
}
