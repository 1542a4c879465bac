pub mod color_mode;
pub mod error;

pub use color_mode::ColorMode;
pub use error::ThemeError;
