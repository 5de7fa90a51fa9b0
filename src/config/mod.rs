//! Configuration and path management for findash

pub mod paths;

pub use paths::StorePaths;
