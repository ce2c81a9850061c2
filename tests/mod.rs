pub mod async_ext;
pub mod macros;
pub mod traits;
pub mod types;
