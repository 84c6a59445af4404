pub mod time;
pub mod urls;
