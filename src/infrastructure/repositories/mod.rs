pub mod json_record_repository;
pub mod json_storage;

pub use json_record_repository::JsonRecordRepository;
