pub mod human_bytes;
pub mod tools;

pub use self::human_bytes::human_bytes;
pub use self::tools::show_rust_core_dependencies;
