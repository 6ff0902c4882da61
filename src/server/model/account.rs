use chrono::{DateTime, Utc};

use crate::model::account::AccountDto;

/// Registered account as seen by the permission checks.
#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    pub id: i32,
    pub username: String,
    pub admin: bool,
    pub date_joined: DateTime<Utc>,
}

impl Account {
    pub fn into_dto(self) -> AccountDto {
        AccountDto {
            id: self.id,
            username: self.username,
            admin: self.admin,
        }
    }

    /// Whether this account may modify a record owned by `owner_id`.
    ///
    /// Owners manage their own records, admins manage everything.
    pub fn can_manage(&self, owner_id: i32) -> bool {
        self.admin || self.id == owner_id
    }

    pub fn from_entity(entity: entity::account::Model) -> Self {
        Self {
            id: entity.id,
            username: entity.username,
            admin: entity.admin,
            date_joined: entity.date_joined,
        }
    }
}
