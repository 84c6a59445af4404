pub mod repositories;
pub mod time;
pub mod urls;
