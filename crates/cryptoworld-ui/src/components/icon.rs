//! Lucide Icons
//!
//! Outline icons from the Lucide set, stored as shape lists and drawn into a
//! 24x24 viewBox with `currentColor` strokes.

use dioxus::prelude::*;

use cryptoworld_core::content::{SocialIcon, TopicIcon};

use crate::components::join_classes;

/// One primitive inside an icon
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum Shape {
    Path(&'static str),
    Circle { cx: f32, cy: f32, r: f32 },
    Rect { x: f32, y: f32, w: f32, h: f32, rx: f32 },
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Icon {
    Menu,
    Close,
    Sun,
    Moon,
    ArrowRight,
    TrendingUp,
    TrendingDown,
    Star,
    Search,
    Blocks,
    Wallet,
    Cpu,
    Shield,
    Zap,
    Globe,
    Clock,
    ExternalLink,
    User,
    Calendar,
    Github,
    Twitter,
    Linkedin,
    Youtube,
}

impl Icon {
    pub const ALL: [Icon; 23] = [
        Icon::Menu,
        Icon::Close,
        Icon::Sun,
        Icon::Moon,
        Icon::ArrowRight,
        Icon::TrendingUp,
        Icon::TrendingDown,
        Icon::Star,
        Icon::Search,
        Icon::Blocks,
        Icon::Wallet,
        Icon::Cpu,
        Icon::Shield,
        Icon::Zap,
        Icon::Globe,
        Icon::Clock,
        Icon::ExternalLink,
        Icon::User,
        Icon::Calendar,
        Icon::Github,
        Icon::Twitter,
        Icon::Linkedin,
        Icon::Youtube,
    ];

    pub fn shapes(&self) -> &'static [Shape] {
        use Shape::*;
        match self {
            Icon::Menu => &[Path("M4 12h16"), Path("M4 6h16"), Path("M4 18h16")],
            Icon::Close => &[Path("M18 6 6 18"), Path("m6 6 12 12")],
            Icon::Sun => &[
                Circle { cx: 12.0, cy: 12.0, r: 4.0 },
                Path("M12 2v2"),
                Path("M12 20v2"),
                Path("m4.93 4.93 1.41 1.41"),
                Path("m17.66 17.66 1.41 1.41"),
                Path("M2 12h2"),
                Path("M20 12h2"),
                Path("m6.34 17.66-1.41 1.41"),
                Path("m19.07 4.93-1.41 1.41"),
            ],
            Icon::Moon => &[Path("M12 3a6 6 0 0 0 9 9 9 9 0 1 1-9-9Z")],
            Icon::ArrowRight => &[Path("M5 12h14"), Path("m12 5 7 7-7 7")],
            Icon::TrendingUp => &[Path("M22 7 13.5 15.5 8.5 10.5 2 17"), Path("M16 7h6v6")],
            Icon::TrendingDown => &[Path("M22 17 13.5 8.5 8.5 13.5 2 7"), Path("M16 17h6v-6")],
            Icon::Star => &[Path(
                "M12 2l3.09 6.26L22 9.27l-5 4.87 1.18 6.88L12 17.77l-6.18 3.25L7 14.14 2 9.27l6.91-1.01L12 2z",
            )],
            Icon::Search => &[Circle { cx: 11.0, cy: 11.0, r: 8.0 }, Path("m21 21-4.3-4.3")],
            Icon::Blocks => &[
                Rect { x: 14.0, y: 3.0, w: 7.0, h: 7.0, rx: 1.0 },
                Path("M10 21V8a1 1 0 0 0-1-1H4a1 1 0 0 0-1 1v12a1 1 0 0 0 1 1h12a1 1 0 0 0 1-1v-5a1 1 0 0 0-1-1H3"),
            ],
            Icon::Wallet => &[
                Path("M19 7V4a1 1 0 0 0-1-1H5a2 2 0 0 0 0 4h15a1 1 0 0 1 1 1v4h-3a2 2 0 0 0 0 4h3a1 1 0 0 0 1-1v-2a1 1 0 0 0-1-1"),
                Path("M3 5v14a2 2 0 0 0 2 2h15a1 1 0 0 0 1-1v-4"),
            ],
            Icon::Cpu => &[
                Rect { x: 4.0, y: 4.0, w: 16.0, h: 16.0, rx: 2.0 },
                Rect { x: 9.0, y: 9.0, w: 6.0, h: 6.0, rx: 0.0 },
                Path("M15 2v2"),
                Path("M15 20v2"),
                Path("M2 15h2"),
                Path("M2 9h2"),
                Path("M20 15h2"),
                Path("M20 9h2"),
                Path("M9 2v2"),
                Path("M9 20v2"),
            ],
            Icon::Shield => &[Path(
                "M20 13c0 5-3.5 7.5-7.66 8.95a1 1 0 0 1-.67-.01C7.5 20.5 4 18 4 13V6a1 1 0 0 1 1-1c2 0 4.5-1.2 6.24-2.72a1.17 1.17 0 0 1 1.52 0C14.51 3.81 17 5 19 5a1 1 0 0 1 1 1z",
            )],
            Icon::Zap => &[Path(
                "M4 14a1 1 0 0 1-.78-1.63l9.9-10.2a.5.5 0 0 1 .86.46l-1.92 6.02A1 1 0 0 0 13 10h7a1 1 0 0 1 .78 1.63l-9.9 10.2a.5.5 0 0 1-.86-.46l1.92-6.02A1 1 0 0 0 11 14z",
            )],
            Icon::Globe => &[
                Circle { cx: 12.0, cy: 12.0, r: 10.0 },
                Path("M12 2a14.5 14.5 0 0 0 0 20 14.5 14.5 0 0 0 0-20"),
                Path("M2 12h20"),
            ],
            Icon::Clock => &[Circle { cx: 12.0, cy: 12.0, r: 10.0 }, Path("M12 6v6l4 2")],
            Icon::ExternalLink => &[
                Path("M15 3h6v6"),
                Path("M10 14 21 3"),
                Path("M18 13v6a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V8a2 2 0 0 1 2-2h6"),
            ],
            Icon::User => &[
                Circle { cx: 12.0, cy: 7.0, r: 4.0 },
                Path("M19 21v-2a4 4 0 0 0-4-4H9a4 4 0 0 0-4 4v2"),
            ],
            Icon::Calendar => &[
                Rect { x: 3.0, y: 4.0, w: 18.0, h: 18.0, rx: 2.0 },
                Path("M16 2v4"),
                Path("M8 2v4"),
                Path("M3 10h18"),
            ],
            Icon::Github => &[
                Path("M15 22v-4a4.8 4.8 0 0 0-1-3.5c3 0 6-2 6-5.5.08-1.25-.27-2.48-1-3.5.28-1.15.28-2.35 0-3.5 0 0-1 0-3 1.5-2.64-.5-5.36-.5-8 0C6 2 5 2 5 2c-.3 1.15-.3 2.35 0 3.5A5.403 5.403 0 0 0 4 9c0 3.5 3 5.5 6 5.5-.39.49-.68 1.05-.85 1.65-.17.6-.22 1.23-.15 1.85v4"),
                Path("M9 18c-4.51 2-5-2-7-2"),
            ],
            Icon::Twitter => &[Path(
                "M22 4s-.7 2.1-2 3.4c1.6 10-9.4 17.3-18 11.6 2.2.1 4.4-.6 6-2C3 15.5.5 9.6 3 5c2.2 2.6 5.6 4.1 9 4-.9-4.2 4-6.6 7-3.8 1.1 0 3-1.2 3-1.2z",
            )],
            Icon::Linkedin => &[
                Path("M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-2-2 2 2 0 0 0-2 2v7h-4v-7a6 6 0 0 1 6-6z"),
                Rect { x: 2.0, y: 9.0, w: 4.0, h: 12.0, rx: 0.0 },
                Circle { cx: 4.0, cy: 4.0, r: 2.0 },
            ],
            Icon::Youtube => &[
                Path("M2.5 17a24.12 24.12 0 0 1 0-10 2 2 0 0 1 1.4-1.4 49.56 49.56 0 0 1 16.2 0A2 2 0 0 1 21.5 7a24.12 24.12 0 0 1 0 10 2 2 0 0 1-1.4 1.4 49.55 49.55 0 0 1-16.2 0A2 2 0 0 1 2.5 17"),
                Path("m10 15 5-3-5-3z"),
            ],
        }
    }
}

impl From<TopicIcon> for Icon {
    fn from(icon: TopicIcon) -> Self {
        match icon {
            TopicIcon::Blocks => Icon::Blocks,
            TopicIcon::Wallet => Icon::Wallet,
            TopicIcon::Cpu => Icon::Cpu,
            TopicIcon::Shield => Icon::Shield,
            TopicIcon::Zap => Icon::Zap,
            TopicIcon::Globe => Icon::Globe,
        }
    }
}

impl From<SocialIcon> for Icon {
    fn from(icon: SocialIcon) -> Self {
        match icon {
            SocialIcon::Twitter => Icon::Twitter,
            SocialIcon::Github => Icon::Github,
            SocialIcon::Linkedin => Icon::Linkedin,
            SocialIcon::Youtube => Icon::Youtube,
        }
    }
}

/// Render a Lucide icon at `size` pixels
#[component]
pub fn LucideIcon(
    icon: Icon,
    #[props(default = 16)] size: u32,
    #[props(default)] class: Option<String>,
) -> Element {
    let class = join_classes(&["icon", class.as_deref().unwrap_or("")]);

    rsx! {
        svg {
            class: "{class}",
            xmlns: "http://www.w3.org/2000/svg",
            width: "{size}",
            height: "{size}",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            "aria-hidden": "true",
            for shape in icon.shapes() {
                {render_shape(*shape)}
            }
        }
    }
}

fn render_shape(shape: Shape) -> Element {
    match shape {
        Shape::Path(d) => rsx! {
            path { d: d }
        },
        Shape::Circle { cx, cy, r } => rsx! {
            circle { cx: "{cx}", cy: "{cy}", r: "{r}" }
        },
        Shape::Rect { x, y, w, h, rx } => rsx! {
            rect { x: "{x}", y: "{y}", width: "{w}", height: "{h}", rx: "{rx}" }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_icon_has_shapes() {
        for icon in Icon::ALL {
            assert!(!icon.shapes().is_empty(), "{:?} has no shapes", icon);
        }
    }

    #[test]
    fn topic_icons_map_one_to_one() {
        use cryptoworld_core::content::TOPIC_CARDS;
        let mapped: Vec<Icon> = TOPIC_CARDS.iter().map(|c| Icon::from(c.icon)).collect();
        for (i, a) in mapped.iter().enumerate() {
            assert!(!mapped[i + 1..].contains(a));
        }
    }
}
