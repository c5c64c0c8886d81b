//! Page components for Crypto World.

mod home;

pub use home::Home;
