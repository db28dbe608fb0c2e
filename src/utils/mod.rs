pub mod constants;
pub mod headers;
