pub mod import;
pub mod seed;
