use log::Level;

pub const CONTACT_EMAIL: &str = "A3sthera@proton.me";

pub const CHECKOUT_PLAN_ID: &str = "plan_JNpVughNh9qVj";
pub const HOSTED_CHECKOUT_BASE: &str = "https://whop.com/checkout/";
pub const CHECKOUT_LOADER_SRC: &str = "https://js.whop.com/static/checkout/loader.js";

/// Vertical offset (px) at which the navbar switches to its scrolled style.
pub const NAV_SCROLLED_OFFSET: f64 = 60.0;
/// Share of the scrollable height (percent) past which the buy bar shows.
pub const BUY_BAR_PERCENT: f64 = 5.0;
/// Fraction of an element that must be on screen before it fades in.
pub const REVEAL_THRESHOLD: f64 = 0.15;

/// Class marking elements that fade in once scrolled into view.
pub const REVEAL_CLASS: &str = "fade-in";

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose while running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
