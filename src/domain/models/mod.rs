mod completion;
mod config;

pub use completion::*;
pub use config::*;
