//! Live adapters backed by the real environment.

pub mod filesystem;

pub use filesystem::LiveFileSystem;
