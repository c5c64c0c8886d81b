use serde::Serialize;

/// A crypto jargon term with its definition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GlossaryTerm {
    pub term: &'static str,
    pub definition: &'static str,
}

const fn term(term: &'static str, definition: &'static str) -> GlossaryTerm {
    GlossaryTerm { term, definition }
}

/// Glossary entries in display order
pub static GLOSSARY_TERMS: &[GlossaryTerm] = &[
    term(
        "HODL",
        "A crypto slang term meaning to hold onto your cryptocurrency for a long period, derived from \"hold\".",
    ),
    term(
        "DeFi",
        "Decentralized Finance - financial services using smart contracts on blockchain networks.",
    ),
    term(
        "Smart Contract",
        "Self-executing contracts with terms directly written into code on the blockchain.",
    ),
    term(
        "NFT",
        "Non-Fungible Token - unique digital assets that represent ownership of digital or physical items.",
    ),
    term(
        "DAO",
        "Decentralized Autonomous Organization - an organization governed by smart contracts and token holders.",
    ),
    term(
        "Gas Fee",
        "The cost required to execute transactions or smart contracts on blockchain networks.",
    ),
    term(
        "Staking",
        "Locking up cryptocurrency to support network operations and earn rewards.",
    ),
    term(
        "Liquidity Pool",
        "Collections of funds locked in smart contracts that facilitate decentralized trading.",
    ),
    term(
        "Yield Farming",
        "Earning rewards by providing liquidity to DeFi protocols.",
    ),
    term(
        "Bull Market",
        "A period of rising prices and optimistic market sentiment.",
    ),
    term(
        "Bear Market",
        "A period of falling prices and pessimistic market sentiment.",
    ),
    term(
        "FOMO",
        "Fear Of Missing Out - the anxiety of missing potential profits from rising prices.",
    ),
];
