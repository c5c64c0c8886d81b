//! Reusable UI components
//!
//! Class names are stable; the app stylesheet targets them directly.

mod badge;
mod button;
mod card;
mod icon;
mod input;
mod toast;

pub use badge::*;
pub use button::*;
pub use card::*;
pub use icon::*;
pub use input::*;
pub use toast::*;
