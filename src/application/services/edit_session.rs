use crate::domain::entities::record::{FieldSet, Record};
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum EditState<F> {
    Idle,
    Editing { id: u64, buffer: F },
}

#[derive(Debug, Clone, PartialEq)]
pub enum EditError {
    AlreadyEditing(u64),
    NotEditing,
    UnknownField(String),
}

impl fmt::Display for EditError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            EditError::AlreadyEditing(id) => {
                write!(f, "Already editing #{}; commit or cancel first", id)
            }
            EditError::NotEditing => write!(f, "Nothing is being edited"),
            EditError::UnknownField(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for EditError {}

/// Two-state edit toggle; the buffer lives only here until committed
#[derive(Debug, Clone)]
pub struct EditSession<R: Record> {
    state: EditState<R::Fields>,
}

impl<R: Record> Default for EditSession<R> {
    fn default() -> Self {
        Self {
            state: EditState::Idle,
        }
    }
}

impl<R: Record> EditSession<R> {
    pub fn new() -> Self {
        Self::default()
    }

    #[allow(dead_code)]
    pub fn state(&self) -> &EditState<R::Fields> {
        &self.state
    }

    pub fn editing_id(&self) -> Option<u64> {
        match &self.state {
            EditState::Editing { id, .. } => Some(*id),
            EditState::Idle => None,
        }
    }

    /// Idle -> Editing, with the record's current values copied into the buffer
    pub fn start(&mut self, record: &R) -> Result<R::Fields, EditError> {
        if let EditState::Editing { id, .. } = &self.state {
            return Err(EditError::AlreadyEditing(*id));
        }
        let buffer = record.fields();
        self.state = EditState::Editing {
            id: record.id(),
            buffer: buffer.clone(),
        };
        Ok(buffer)
    }

    /// Current id and buffer, without leaving Editing
    pub fn buffer(&self) -> Result<(u64, &R::Fields), EditError> {
        match &self.state {
            EditState::Editing { id, buffer } => Ok((*id, buffer)),
            EditState::Idle => Err(EditError::NotEditing),
        }
    }

    pub fn set_field(&mut self, name: &str, value: String) -> Result<(), EditError> {
        match &mut self.state {
            EditState::Editing { buffer, .. } => {
                buffer.set(name, value).map_err(EditError::UnknownField)
            }
            EditState::Idle => Err(EditError::NotEditing),
        }
    }

    /// Editing -> Idle, handing back the id and buffer for the caller to persist
    pub fn commit(&mut self) -> Result<(u64, R::Fields), EditError> {
        match std::mem::replace(&mut self.state, EditState::Idle) {
            EditState::Editing { id, buffer } => Ok((id, buffer)),
            EditState::Idle => Err(EditError::NotEditing),
        }
    }

    /// Editing -> Idle; the buffer is dropped
    pub fn cancel(&mut self) -> Result<u64, EditError> {
        match std::mem::replace(&mut self.state, EditState::Idle) {
            EditState::Editing { id, .. } => Ok(id),
            EditState::Idle => Err(EditError::NotEditing),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{TaskFields, TaskRecord};

    fn record() -> TaskRecord {
        TaskRecord::new(1, TaskFields::new("Buy milk", "2 liters"))
    }

    #[test]
    fn start_loads_current_values() {
        let mut session = EditSession::<TaskRecord>::new();
        let buffer = session.start(&record()).unwrap();

        assert_eq!(buffer, TaskFields::new("Buy milk", "2 liters"));
        assert_eq!(session.editing_id(), Some(1));
    }

    #[test]
    fn commit_returns_edited_buffer_and_goes_idle() {
        let mut session = EditSession::<TaskRecord>::new();
        session.start(&record()).unwrap();
        session.set_field("task", "Buy oat milk".into()).unwrap();

        let (id, fields) = session.commit().unwrap();

        assert_eq!(id, 1);
        assert_eq!(fields, TaskFields::new("Buy oat milk", "2 liters"));
        assert_eq!(session.state(), &EditState::Idle);
    }

    #[test]
    fn buffer_reads_without_leaving_editing() {
        let mut session = EditSession::<TaskRecord>::new();
        assert_eq!(session.buffer().unwrap_err(), EditError::NotEditing);

        session.start(&record()).unwrap();
        session.set_field("task", "Buy bread".into()).unwrap();
        let (id, fields) = session.buffer().unwrap();

        assert_eq!(id, 1);
        assert_eq!(fields.task, "Buy bread");
        assert_eq!(session.editing_id(), Some(1));
    }

    #[test]
    fn cancel_discards_buffer() {
        let mut session = EditSession::<TaskRecord>::new();
        session.start(&record()).unwrap();
        session.set_field("description", "changed".into()).unwrap();

        assert_eq!(session.cancel(), Ok(1));
        assert_eq!(session.state(), &EditState::Idle);
        assert_eq!(session.commit(), Err(EditError::NotEditing));
    }

    #[test]
    fn idle_rejects_edits() {
        let mut session = EditSession::<TaskRecord>::new();
        assert_eq!(
            session.set_field("task", "x".into()),
            Err(EditError::NotEditing)
        );
        assert_eq!(session.cancel(), Err(EditError::NotEditing));
    }

    #[test]
    fn cannot_start_twice() {
        let mut session = EditSession::<TaskRecord>::new();
        session.start(&record()).unwrap();
        let other = TaskRecord::new(2, TaskFields::new("b", ""));

        assert_eq!(
            session.start(&other).unwrap_err(),
            EditError::AlreadyEditing(1)
        );
        assert_eq!(session.editing_id(), Some(1));
    }

    #[test]
    fn unknown_field_keeps_editing() {
        let mut session = EditSession::<TaskRecord>::new();
        session.start(&record()).unwrap();

        assert!(matches!(
            session.set_field("title", "x".into()),
            Err(EditError::UnknownField(_))
        ));
        assert_eq!(session.editing_id(), Some(1));
    }
}
