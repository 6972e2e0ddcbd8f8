pub mod models;
pub mod perception;
pub mod types;
pub mod utils;
