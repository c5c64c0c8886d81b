//! Brand, navigation, hero and footer copy.

use serde::Serialize;

pub const BRAND_NAME: &str = "Crypto World";

pub const BRAND_TAGLINE: &str = "Your trusted gateway to the world of cryptocurrency. Trade, learn, and explore the future of finance with confidence and security.";

pub const COPYRIGHT: &str = "\u{00A9} 2024 Crypto World. All rights reserved.";

/// In-page navigation target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavLink {
    pub name: &'static str,
    /// Fragment including the leading `#`
    pub anchor: &'static str,
}

pub static NAV_LINKS: &[NavLink] = &[
    NavLink { name: "Home", anchor: "#home" },
    NavLink { name: "Markets", anchor: "#markets" },
    NavLink { name: "Wallet", anchor: "#wallet" },
    NavLink { name: "News", anchor: "#news" },
    NavLink { name: "About", anchor: "#about" },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SocialIcon {
    Twitter,
    Github,
    Linkedin,
    Youtube,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SocialLink {
    pub name: &'static str,
    pub icon: SocialIcon,
}

pub static SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink { name: "Twitter", icon: SocialIcon::Twitter },
    SocialLink { name: "GitHub", icon: SocialIcon::Github },
    SocialLink { name: "LinkedIn", icon: SocialIcon::Linkedin },
    SocialLink { name: "YouTube", icon: SocialIcon::Youtube },
];

/// Headline figure under the hero copy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HeroStat {
    pub value: &'static str,
    pub label: &'static str,
}

pub static HERO_STATS: &[HeroStat] = &[
    HeroStat { value: "$2.1T", label: "Total Market Cap" },
    HeroStat { value: "10M+", label: "Active Users" },
    HeroStat { value: "24/7", label: "Trading Available" },
];

/// One column of footer links, rendered in table order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FooterColumn {
    pub category: &'static str,
    pub links: &'static [&'static str],
}

pub static FOOTER_COLUMNS: &[FooterColumn] = &[
    FooterColumn {
        category: "Platform",
        links: &["Trade", "Markets", "Portfolio", "API"],
    },
    FooterColumn {
        category: "Resources",
        links: &["Learn", "Blog", "Documentation", "Support"],
    },
    FooterColumn {
        category: "Company",
        links: &["About", "Careers", "Press", "Partners"],
    },
    FooterColumn {
        category: "Legal",
        links: &["Privacy Policy", "Terms of Service", "Cookie Policy", "Compliance"],
    },
];
