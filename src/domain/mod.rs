pub mod entities;
pub mod repositories;

pub use entities::profile::ProfileRecord;
pub use entities::record::Record;
pub use entities::task::TaskRecord;
// Field sets are built through parse_field_args in the binary; named directly in tests
#[allow(unused_imports)]
pub use entities::profile::ProfileFields;
#[allow(unused_imports)]
pub use entities::task::TaskFields;
