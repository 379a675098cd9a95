pub mod credentials;
pub mod fs_json_util;
pub mod macros;

#[doc(hidden)]
pub use once_cell;
