#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

mod catalog;
mod error;
mod intake;
mod plan;
mod profile;
mod selection;
mod service;
mod workout;

pub use catalog::*;
pub use error::*;
pub use intake::*;
pub use plan::*;
pub use profile::*;
pub use selection::*;
pub use service::*;
pub use workout::*;
