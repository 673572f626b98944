//! Data models for the content API.

mod collection;
mod page;
mod record;

pub use collection::{Collection, UnknownCollection};
pub use page::ProfilePage;
pub use record::{Field, Record, RecordId};
