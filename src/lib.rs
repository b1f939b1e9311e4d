// Public library interface for repusense-layout
// The debug and validation tools use these modules directly.

pub mod config;
pub mod data;
pub mod error;
pub mod layout;
pub mod render;

pub use error::{Error, Result};
