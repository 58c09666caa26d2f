pub use anstream::println as aprintln;

/// ANSI color codes for plan output.
#[allow(dead_code)]
mod colors {
    pub const RESET: &str = "\x1b[0m";

    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const BLUE: &str = "\x1b[34m";
    pub const CYAN: &str = "\x1b[36m";
}

/// Wrap text in green.
pub fn p_g(text: &str) -> String {
    format!("{}{}{}", colors::GREEN, text, colors::RESET)
}

/// Wrap text in red.
pub fn p_r(text: &str) -> String {
    format!("{}{}{}", colors::RED, text, colors::RESET)
}

/// Wrap text in yellow.
pub fn p_y(text: &str) -> String {
    format!("{}{}{}", colors::YELLOW, text, colors::RESET)
}

/// Wrap text in blue.
pub fn p_b(text: &str) -> String {
    format!("{}{}{}", colors::BLUE, text, colors::RESET)
}

/// Wrap text in cyan.
pub fn p_c(text: &str) -> String {
    format!("{}{}{}", colors::CYAN, text, colors::RESET)
}
