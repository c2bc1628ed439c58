//! Command implementations for the OxiStatus CLI.

pub mod detect;
pub mod info;
pub mod status;

pub use detect::cmd_detect;
pub use info::cmd_info;
pub use status::cmd_status;
