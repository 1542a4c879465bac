pub mod dark_mode_button;
pub mod icons;

pub use dark_mode_button::{DarkModeButton, render_button};
pub use icons::{Moon, Sun, ToggleIcon};
