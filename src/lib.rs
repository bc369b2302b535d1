mod error;
mod mirror;
mod record;
mod store;

pub mod books;
pub mod items;

pub use error::{StoreError, ValidationError, Violation};
pub use mirror::{FileMirror, MirrorError};
pub use record::Record;
pub use store::Store;

// HTTP transport (requires "http" feature)
#[cfg(feature = "http")]
pub mod http;
