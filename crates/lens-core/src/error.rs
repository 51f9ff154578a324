use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum LensError {
    #[error("invalid config value for `{field}`: {value}")]
    InvalidConfig { field: &'static str, value: f64 },
    #[error("hover index {index} out of range for {len} links")]
    HoverOutOfRange { index: usize, len: usize },
}
