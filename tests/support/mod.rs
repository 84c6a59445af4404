// Shared by several integration test binaries; each one only uses part of it.
#[allow(dead_code, unused_imports)]
pub mod helpers;

#[allow(unused_imports)]
pub use helpers::*;
