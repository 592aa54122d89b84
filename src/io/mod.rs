pub mod address_list;
pub mod cli;
pub mod json;
pub mod logger;
pub mod target;
