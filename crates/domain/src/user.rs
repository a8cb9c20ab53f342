use derive_more::Deref;
use uuid::Uuid;

use crate::{CreateError, Name, ReadError};

pub trait UserService {
    fn get_users(&self) -> Result<Vec<User>, ReadError>;
    fn get_user(&self, id: UserID) -> Result<User, ReadError>;
    fn get_user_by_name(&self, name: &Name) -> Result<User, ReadError>;
    fn create_user(&self, name: Name, password: String) -> Result<User, CreateError>;
}

pub trait UserRepository {
    fn read_users(&self) -> Result<Vec<User>, ReadError>;
    fn read_user(&self, id: UserID) -> Result<User, ReadError>;
    fn read_user_by_name(&self, name: &Name) -> Result<User, ReadError>;
    fn create_user(&self, name: Name, password: String) -> Result<User, CreateError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: UserID,
    pub name: Name,
    pub password: String,
}

#[derive(Deref, Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct UserID(Uuid);

impl UserID {
    #[must_use]
    pub fn nil() -> Self {
        Self(Uuid::nil())
    }

    #[must_use]
    pub fn is_nil(&self) -> bool {
        self.0.is_nil()
    }
}

impl From<Uuid> for UserID {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl From<u128> for UserID {
    fn from(value: u128) -> Self {
        Self(Uuid::from_bytes(value.to_be_bytes()))
    }
}
