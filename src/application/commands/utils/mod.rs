pub mod field_args;

pub use field_args::parse_field_args;
