//! Request model, validation, formatting and numbering.
//!
//! Everything here is pure: no I/O, no shared state.

mod builder;
mod config;
pub mod currencies;
mod error;
mod format;
mod locale;
mod numbering;
mod types;
mod validation;

pub use builder::*;
pub use config::*;
pub use currencies::is_known_currency_code;
pub use error::*;
pub use format::*;
pub use locale::*;
pub use numbering::*;
pub use types::*;
pub use validation::*;
