pub mod analyzer;
pub mod boundary;
pub mod cli;
pub mod config;
pub mod domain;
pub mod editor;
pub mod error;
pub mod git;
pub mod guard;
pub mod publisher;
pub mod ui;

pub use error::{BumptagError, Result};
