//! Front-desk operator account

use serde::{Deserialize, Serialize};

/// Login form fields (`POST /login`, form-encoded) and `PUT /user/register` body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserCredentials {
    pub id: String,
    pub password: String,
}
