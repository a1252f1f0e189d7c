//! Edit-guest form

use shared::kana::to_katakana;
use shared::models::Guest;

use super::validation::{MAX_EMAIL_LEN, MAX_NAME_LEN, MAX_SHORT_TEXT_LEN, Validator};
use super::{EntityForm, Mutation};
use crate::DeskResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuestAction {
    /// `PUT /guest/update`
    Save,
    /// Soft delete or restore (`PUT /guest/deleted`)
    ToggleDeleted,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct GuestForm {
    pub id: String,
    pub name: String,
    pub kana_name: String,
    pub gender: String,
    pub age: String,
    pub region: String,
    pub email: String,
    pub phone: String,
    pub deleted: bool,
}

impl GuestForm {
    pub fn from_guest(guest: &Guest) -> Self {
        Self {
            id: guest.id.clone(),
            name: guest.name.clone(),
            kana_name: guest.kana_name.clone(),
            gender: guest.gender.clone(),
            age: guest.age.map(|a| a.to_string()).unwrap_or_default(),
            region: guest.region.clone(),
            email: guest.email.clone(),
            phone: guest.phone.clone(),
            deleted: guest.deleted,
        }
    }

    /// Label of the toggle button
    pub fn toggle_label(&self) -> &'static str {
        if self.deleted { "Restore" } else { "Delete" }
    }

    fn to_guest(&self) -> DeskResult<Guest> {
        let mut v = Validator::new();
        let id = v.required("id", "Guest ID", &self.id, MAX_SHORT_TEXT_LEN);
        let name = v.required("name", "Name", &self.name, MAX_NAME_LEN);
        let kana_name = to_katakana(&self.kana_name);
        if kana_name.is_empty() && !self.kana_name.trim().is_empty() {
            v.fail("kanaName", "Kana must be written in kana");
        }
        let age = v.whole_number("age", "Age", &self.age, false);
        let region = v.optional("region", "Region", &self.region, MAX_SHORT_TEXT_LEN);
        let email = v.optional("email", "Email", &self.email, MAX_EMAIL_LEN);
        let phone = v.optional("phone", "Phone", &self.phone, MAX_SHORT_TEXT_LEN);
        v.finish()?;

        Ok(Guest {
            id,
            name,
            kana_name,
            gender: self.gender.trim().to_string(),
            age,
            region,
            email,
            phone,
            deleted: self.deleted,
        })
    }
}

impl EntityForm for GuestForm {
    type Action = GuestAction;

    fn prepare(&self, action: GuestAction) -> DeskResult<Mutation> {
        match action {
            GuestAction::Save => Ok(Mutation::UpdateGuest(self.to_guest()?)),
            GuestAction::ToggleDeleted => {
                let mut v = Validator::new();
                let id = v.required("id", "Guest ID", &self.id, MAX_SHORT_TEXT_LEN);
                v.finish()?;
                Ok(Mutation::ToggleGuestDeleted {
                    id,
                    name: self.name.trim().to_string(),
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DeskError;

    fn form() -> GuestForm {
        GuestForm {
            id: "G1".into(),
            name: " 田中 太郎 ".into(),
            kana_name: "たなか たろう".into(),
            gender: "男性".into(),
            age: "41".into(),
            phone: "09012345678".into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_save_normalizes_input() {
        let Mutation::UpdateGuest(guest) = form().prepare(GuestAction::Save).unwrap() else {
            panic!("expected guest update");
        };
        assert_eq!(guest.name, "田中 太郎");
        assert_eq!(guest.kana_name, "タナカ タロウ");
        assert_eq!(guest.age, Some(41));
    }

    #[test]
    fn test_blank_age_is_none() {
        let mut f = form();
        f.age = " ".into();
        let Mutation::UpdateGuest(guest) = f.prepare(GuestAction::Save).unwrap() else {
            panic!("expected guest update");
        };
        assert_eq!(guest.age, None);
    }

    #[test]
    fn test_invalid_fields() {
        let mut f = form();
        f.name.clear();
        f.age = "-3".into();
        f.kana_name = "Tanaka".into();
        let err = f.prepare(GuestAction::Save).unwrap_err();
        let DeskError::Validation(fields) = err else {
            panic!("expected validation error");
        };
        assert_eq!(fields.len(), 3);
        assert!(fields.contains_key("name"));
        assert!(fields.contains_key("age"));
        assert!(fields.contains_key("kanaName"));
    }

    #[test]
    fn test_toggle_needs_only_id() {
        let mut f = form();
        f.age = "not a number".into();
        f.deleted = true;
        assert_eq!(f.toggle_label(), "Restore");
        assert_eq!(
            f.prepare(GuestAction::ToggleDeleted).unwrap(),
            Mutation::ToggleGuestDeleted {
                id: "G1".into(),
                name: "田中 太郎".into()
            }
        );
        f.id.clear();
        assert!(f.prepare(GuestAction::ToggleDeleted).is_err());
    }
}
