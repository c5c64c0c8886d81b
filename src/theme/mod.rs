//! Visual theme: the global stylesheet.

mod styles;

pub use styles::GLOBAL_STYLES;
