pub mod id;
pub mod json;
