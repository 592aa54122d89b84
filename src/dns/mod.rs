pub mod error;
pub mod reverse;
pub mod zone;
