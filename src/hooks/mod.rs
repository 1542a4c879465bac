pub mod use_color_mode;
pub mod use_has_mounted;

pub use use_color_mode::{ColorModeHandle, use_color_mode};
pub use use_has_mounted::{MountPhase, use_has_mounted};
