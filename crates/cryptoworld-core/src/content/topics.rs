use serde::Serialize;

/// Icon shown in a topic card's gradient tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TopicIcon {
    Blocks,
    Wallet,
    Cpu,
    Shield,
    Zap,
    Globe,
}

/// An educational topic card.
///
/// `gradient` holds the left and right stop colors of the icon tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TopicCard {
    pub icon: TopicIcon,
    pub title: &'static str,
    pub description: &'static str,
    pub gradient: (&'static str, &'static str),
}

pub static TOPIC_CARDS: &[TopicCard] = &[
    TopicCard {
        icon: TopicIcon::Blocks,
        title: "What is Blockchain?",
        description: "A decentralized, distributed ledger that records transactions across many computers in a secure and immutable way.",
        gradient: ("#3b82f6", "#06b6d4"),
    },
    TopicCard {
        icon: TopicIcon::Wallet,
        title: "Crypto Wallets",
        description: "Digital tools that store your private keys and allow you to send, receive, and manage your cryptocurrency holdings.",
        gradient: ("#22c55e", "#10b981"),
    },
    TopicCard {
        icon: TopicIcon::Cpu,
        title: "Mining & Staking",
        description: "Methods of validating transactions and securing blockchain networks while earning rewards for participation.",
        gradient: ("#a855f7", "#ec4899"),
    },
    TopicCard {
        icon: TopicIcon::Shield,
        title: "Security & Safety",
        description: "Best practices for keeping your crypto safe, including hardware wallets, 2FA, and avoiding common scams.",
        gradient: ("#f97316", "#ef4444"),
    },
    TopicCard {
        icon: TopicIcon::Zap,
        title: "DeFi Protocols",
        description: "Decentralized Finance applications that recreate traditional financial services without intermediaries.",
        gradient: ("#eab308", "#f97316"),
    },
    TopicCard {
        icon: TopicIcon::Globe,
        title: "Web3 & dApps",
        description: "The next generation of internet applications built on blockchain technology for true decentralization.",
        gradient: ("#6366f1", "#a855f7"),
    },
];

/// Next expanded card after a click on `index`.
///
/// Clicking the open card closes it; clicking any other card opens that one.
pub fn toggle_expanded(current: Option<usize>, index: usize) -> Option<usize> {
    if current == Some(index) {
        None
    } else {
        Some(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_expanded_opens_closed_card() {
        assert_eq!(toggle_expanded(None, 2), Some(2));
    }

    #[test]
    fn test_toggle_expanded_closes_open_card() {
        assert_eq!(toggle_expanded(Some(2), 2), None);
    }

    #[test]
    fn test_toggle_expanded_switches_card() {
        assert_eq!(toggle_expanded(Some(0), 4), Some(4));
    }
}
