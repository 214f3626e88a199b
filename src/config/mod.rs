//! Fixed numbers and compile-time switches for the lesson module.

mod constants;
mod debug;

pub use constants::*;
pub use debug::DF;
