pub mod catalog;
pub mod content;
pub mod errors;
pub mod form;
pub mod member;
pub mod validation;
