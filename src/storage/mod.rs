pub mod artifacts;

pub use artifacts::Storage;
