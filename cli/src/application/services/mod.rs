//! Application services — one module per bootstrap use-case.
//!
//! Services import only from `crate::domain`, `crate::application::ports`
//! and sibling services.

pub mod bootstrap;
pub mod configure;
pub mod download;
pub mod negotiate;
pub mod provision;
pub mod supervise;
pub mod synchronize;
