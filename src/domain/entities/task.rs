use serde::{Deserialize, Serialize};
use std::fmt;

use super::record::{FieldSet, Record};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskRecord {
    pub id: u64,
    pub task: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskFields {
    pub task: String,
    pub description: String,
}

impl TaskFields {
    pub fn new(task: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            task: task.into(),
            description: description.into(),
        }
    }
}

impl FieldSet for TaskFields {
    const FIELD_NAMES: &'static [&'static str] = &["task", "description"];

    fn set(&mut self, name: &str, value: String) -> Result<(), String> {
        match name {
            "task" => self.task = value,
            "description" => self.description = value,
            _ => return Err(Self::unknown_field(name)),
        }
        Ok(())
    }

    fn get(&self, name: &str) -> Option<&str> {
        match name {
            "task" => Some(&self.task),
            "description" => Some(&self.description),
            _ => None,
        }
    }

    fn validate(&self) -> Result<(), String> {
        if self.task.trim().is_empty() {
            return Err("Task can not be empty".to_string());
        }
        Ok(())
    }
}

impl Record for TaskRecord {
    type Fields = TaskFields;

    const KIND: &'static str = "task";

    fn new(id: u64, fields: TaskFields) -> Self {
        Self {
            id,
            task: fields.task,
            description: fields.description,
        }
    }

    fn id(&self) -> u64 {
        self.id
    }

    fn fields(&self) -> TaskFields {
        TaskFields {
            task: self.task.clone(),
            description: self.description.clone(),
        }
    }

    fn set_fields(&mut self, fields: TaskFields) {
        self.task = fields.task;
        self.description = fields.description;
    }
}

impl fmt::Display for TaskRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}: {}", self.id, self.task)?;
        if !self.description.is_empty() {
            write!(f, " - {}", self.description)?;
        }
        Ok(())
    }
}
