pub mod in_memory;
pub mod json_file;

pub use self::in_memory::*;
