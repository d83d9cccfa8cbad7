use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Student,
}

#[derive(Clone, Debug)]
pub struct User {
    /// User ID
    pub id: u64,
    pub name: String,
    /// Unique, matched case-sensitively
    pub email: String,
    /// Salted one-way hash, never serialized
    pub password_hash: String,
    pub room_number: String,
    pub role: Role,
}

/// Wire shape for a user record. The password hash stays server-side.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicUser {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub room_number: String,
    pub role: Role,
}

impl From<&User> for PublicUser {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            name: user.name.clone(),
            email: user.email.clone(),
            room_number: user.room_number.clone(),
            role: user.role,
        }
    }
}
