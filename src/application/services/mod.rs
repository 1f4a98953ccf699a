pub mod edit_session;
pub mod record_service;

pub use edit_session::EditSession;
pub use record_service::RecordService;
