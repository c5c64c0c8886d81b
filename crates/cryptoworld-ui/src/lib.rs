//! Crypto World UI Components
//!
//! Dioxus primitives shared by the landing page sections: buttons, inputs,
//! badges, cards, Lucide icons and the toast stack.
//!
//! ## Design Language
//!
//! - **Green (#22c55e → #16a34a)**: brand, calls to action, positive change
//! - **Red (#ef4444)**: negative change, destructive badges
//! - **Glass cards**: translucent surfaces with a faint green border
//!
//! Every color comes from CSS custom properties defined by the app, so the
//! same components render correctly under both the `dark` and `light` root
//! classes.

pub mod components;

pub use components::*;
