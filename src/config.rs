/// Configuration constants for the toggle button and its demo host
pub struct Config;

impl Config {
    /// Glyph size in pixels, identical for both modes
    pub const ICON_SIZE: u32 = 25;

    /// Classes applied to the rendered `<button>`
    pub const BUTTON_CLASS: &'static str = "dark-mode-button";

    /// Attribute on `<html>` the host writes the current mode to
    pub const THEME_ATTRIBUTE: &'static str = "data-theme";

    /// Media query matching an OS-level dark preference
    pub const DARK_SCHEME_QUERY: &'static str = "(prefers-color-scheme: dark)";
}
