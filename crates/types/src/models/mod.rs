//! Content entities exchanged between the engine and the management API.
//!
//! Plain data-transfer records: validation, defaulting, and persistence
//! belong to the API and storage layers.

mod blog;
mod deployment;
mod form;
mod lead;
mod page;
mod path;
mod redirect;
mod timestamp;

pub use blog::*;
pub use deployment::*;
pub use form::*;
pub use lead::*;
pub use page::*;
pub use path::*;
pub use redirect::*;
pub use timestamp::Timestamp;
