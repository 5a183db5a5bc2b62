pub mod config;
pub mod error;
pub mod health;
pub mod notification;
pub mod user;

#[cfg(feature = "ssr")]
pub mod app_state;

pub use config::*;
pub use error::*;
pub use health::*;
pub use notification::*;
pub use user::*;

#[cfg(feature = "ssr")]
pub use app_state::*;
