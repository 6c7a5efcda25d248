// Shared utils

pub mod constants;
pub mod format;
pub mod storage;

pub use constants::*;
pub use format::*;
pub use storage::*;
