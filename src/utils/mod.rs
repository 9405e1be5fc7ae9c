// Utils compartidos

pub mod constants;
pub mod format;
pub mod storage;
pub mod toast;

pub use constants::*;
pub use format::*;
