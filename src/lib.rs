//! Scaffolds LeetCode solution files: a problem header followed by the
//! starter code wrapped in markers that delimit the user-owned region.

pub mod api;
pub mod config;
pub mod confirm;
pub mod editor;
pub mod lang;
pub mod materialize;
pub mod question;
