//! Register-operator form

use shared::models::UserCredentials;

use super::validation::{MAX_SHORT_TEXT_LEN, Validator};
use super::{EntityForm, Mutation};
use crate::DeskResult;

const MAX_PASSWORD_LEN: usize = 128;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserForm {
    pub id: String,
    pub password: String,
}

impl UserForm {
    /// Checked credentials, shared with the login path
    pub fn credentials(&self) -> DeskResult<UserCredentials> {
        let mut v = Validator::new();
        let id = v.required("id", "User ID", &self.id, MAX_SHORT_TEXT_LEN);
        if self.password.is_empty() {
            v.fail("password", "Password is required");
        } else if self.password.len() > MAX_PASSWORD_LEN {
            v.fail("password", format!("Password is too long (max {MAX_PASSWORD_LEN})"));
        }
        v.finish()?;
        Ok(UserCredentials {
            id,
            password: self.password.clone(),
        })
    }
}

impl EntityForm for UserForm {
    type Action = ();

    fn prepare(&self, _: ()) -> DeskResult<Mutation> {
        Ok(Mutation::RegisterUser(self.credentials()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_both_fields_required() {
        let err = UserForm::default().prepare(()).unwrap_err();
        let fields = err.field_errors().unwrap();
        assert_eq!(fields["id"], "User ID is required");
        assert_eq!(fields["password"], "Password is required");
    }

    #[test]
    fn test_password_is_not_trimmed() {
        let form = UserForm {
            id: " front01 ".into(),
            password: " pass ".into(),
        };
        let creds = form.credentials().unwrap();
        assert_eq!(creds.id, "front01");
        assert_eq!(creds.password, " pass ");
    }
}
