pub mod alias;
pub mod record;

pub use alias::AliasKind;
pub use record::{is_synthetic_name, Record, RecordBody, SYNTHETIC_NAME_PREFIX};
