use serde::{Deserialize, Serialize};
use std::fmt;

use super::record::{FieldSet, Record};

/// Password is stored as entered; the file is the only copy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileRecord {
    pub id: u64,
    pub name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileFields {
    pub name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
}

impl ProfileFields {
    pub fn new(
        name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            last_name: last_name.into(),
            email: email.into(),
            password: password.into(),
        }
    }
}

impl FieldSet for ProfileFields {
    const FIELD_NAMES: &'static [&'static str] = &["name", "lastName", "email", "password"];

    fn set(&mut self, name: &str, value: String) -> Result<(), String> {
        match name {
            "name" => self.name = value,
            "lastName" => self.last_name = value,
            "email" => self.email = value,
            "password" => self.password = value,
            _ => return Err(Self::unknown_field(name)),
        }
        Ok(())
    }

    fn get(&self, name: &str) -> Option<&str> {
        match name {
            "name" => Some(&self.name),
            "lastName" => Some(&self.last_name),
            "email" => Some(&self.email),
            "password" => Some(&self.password),
            _ => None,
        }
    }

    fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Name can not be empty".to_string());
        }
        let email = self.email.trim();
        if email.is_empty() {
            return Err("Email can not be empty".to_string());
        }
        if !email.contains('@') {
            return Err(format!("'{}' is not a valid email", email));
        }
        Ok(())
    }
}

impl Record for ProfileRecord {
    type Fields = ProfileFields;

    const KIND: &'static str = "profile";

    fn new(id: u64, fields: ProfileFields) -> Self {
        Self {
            id,
            name: fields.name,
            last_name: fields.last_name,
            email: fields.email,
            password: fields.password,
        }
    }

    fn id(&self) -> u64 {
        self.id
    }

    fn fields(&self) -> ProfileFields {
        ProfileFields {
            name: self.name.clone(),
            last_name: self.last_name.clone(),
            email: self.email.clone(),
            password: self.password.clone(),
        }
    }

    fn set_fields(&mut self, fields: ProfileFields) {
        self.name = fields.name;
        self.last_name = fields.last_name;
        self.email = fields.email;
        self.password = fields.password;
    }
}

impl fmt::Display for ProfileRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{}: Name: {} | Last name: {} | Email: {} | Password: {}",
            self.id, self.name, self.last_name, self.email, self.password
        )
    }
}
