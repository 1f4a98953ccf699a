pub mod collection;
pub mod profile;
pub mod record;
pub mod task;
