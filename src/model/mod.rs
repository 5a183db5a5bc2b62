pub mod types;
pub use types::*;

pub mod api;
pub mod controller;
pub mod render;

#[cfg(feature = "ssr")]
pub mod functions;
#[cfg(feature = "ssr")]
pub use functions::*;
