#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ThemeError {
    #[error("Unknown color mode: {0:?}")]
    UnknownColorMode(String),
}
