//! Register a guest together with their first reservation
//!
//! The form is pre-filled from an exact-match lookup: a known guest keeps
//! their record and id, an unknown one starts from the three lookup keys.

use chrono::NaiveDate;
use desk_client::HotelApi;
use shared::kana::to_katakana;
use shared::models::{Guest, GuestMatchQuery, GuestRegistration};

use super::validation::{MAX_EMAIL_LEN, MAX_NAME_LEN, MAX_NOTE_LEN, MAX_SHORT_TEXT_LEN, Validator};
use super::{EntityForm, Mutation};
use crate::DeskResult;

pub const GENDER_MALE: &str = "男性";
pub const GENDER_FEMALE: &str = "女性";
pub const GENDER_OTHER: &str = "その他";

/// Map operator input to the backend's gender labels.
pub fn normalize_gender(input: &str) -> Option<&'static str> {
    match input.trim().to_lowercase().as_str() {
        "男" | "男性" | "male" | "m" => Some(GENDER_MALE),
        "女" | "女性" | "female" | "f" => Some(GENDER_FEMALE),
        "その他" | "other" | "o" => Some(GENDER_OTHER),
        _ => None,
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RegistrationForm {
    /// Empty for a new guest
    pub guest_id: String,
    pub name: String,
    pub kana_name: String,
    pub gender: String,
    pub age: String,
    pub region: String,
    pub email: String,
    pub phone: String,
    pub booking_id: String,
    pub check_in_date: String,
    pub stay_days: String,
    pub memo: String,
    /// Check-in dates before this are rejected
    pub today: NaiveDate,
}

impl RegistrationForm {
    /// Blank form for a guest the lookup did not find
    pub fn new_guest(query: &GuestMatchQuery, today: NaiveDate) -> Self {
        Self {
            guest_id: String::new(),
            name: query.name.trim().to_string(),
            kana_name: query.kana_name.trim().to_string(),
            gender: String::new(),
            age: String::new(),
            region: String::new(),
            email: String::new(),
            phone: query.phone.trim().to_string(),
            booking_id: String::new(),
            check_in_date: today.to_string(),
            stay_days: "1".into(),
            memo: String::new(),
            today,
        }
    }

    /// Form for another stay of a known guest
    pub fn existing_guest(guest: &Guest, today: NaiveDate) -> Self {
        Self {
            guest_id: guest.id.clone(),
            name: guest.name.clone(),
            kana_name: guest.kana_name.clone(),
            gender: guest.gender.clone(),
            age: guest.age.map(|a| a.to_string()).unwrap_or_default(),
            region: guest.region.clone(),
            email: guest.email.clone(),
            phone: guest.phone.clone(),
            ..Self::new_guest(&GuestMatchQuery::default(), today)
        }
    }

    /// Look the guest up by exact name, kana and phone and pre-fill.
    pub async fn lookup(
        api: &dyn HotelApi,
        query: &GuestMatchQuery,
        today: NaiveDate,
    ) -> DeskResult<Self> {
        let query = GuestMatchQuery {
            name: query.name.trim().to_string(),
            kana_name: to_katakana(&query.kana_name),
            phone: query.phone.trim().to_string(),
        };
        let found = api.match_guest(&query).await?;
        Ok(match found.found() {
            Some(guest) => {
                tracing::debug!(guest_id = %guest.id, "registration matched existing guest");
                Self::existing_guest(guest, today)
            }
            None => Self::new_guest(&query, today),
        })
    }

    pub fn is_existing_guest(&self) -> bool {
        !self.guest_id.trim().is_empty()
    }
}

impl EntityForm for RegistrationForm {
    type Action = ();

    fn prepare(&self, _: ()) -> DeskResult<Mutation> {
        let mut v = Validator::new();

        let booking_id = v.uuid("bookingId", "Plan", &self.booking_id);
        let check_in_date = v.date("checkInDate", "Check-in date", &self.check_in_date, true);
        if let Some(date) = check_in_date
            && date < self.today
        {
            v.fail("checkInDate", "Check-in date cannot be in the past");
        }
        let stay_days = v.stay_days("stayDays", &self.stay_days);
        let memo = v.optional("memo", "Memo", &self.memo, MAX_NOTE_LEN);

        let name = v.required("name", "Name", &self.name, MAX_NAME_LEN);
        v.required("kanaName", "Kana", &self.kana_name, MAX_NAME_LEN);
        let kana_name = to_katakana(&self.kana_name);
        if kana_name.is_empty() {
            v.fail("kanaName", "Kana must be written in kana");
        }
        let gender = if self.gender.trim().is_empty() {
            v.fail("gender", "Gender is required");
            ""
        } else {
            normalize_gender(&self.gender).unwrap_or_else(|| {
                v.fail("gender", "Choose 男性, 女性 or その他");
                ""
            })
        };
        let age = v.whole_number("age", "Age", &self.age, true);
        let region = v.required("region", "Region", &self.region, MAX_SHORT_TEXT_LEN);
        let email = v.required("email", "Email", &self.email, MAX_EMAIL_LEN);
        let phone = v.required("phone", "Phone", &self.phone, MAX_SHORT_TEXT_LEN);
        v.finish()?;

        let check_in_date = check_in_date.unwrap_or(self.today);
        Ok(Mutation::RegisterGuest(GuestRegistration {
            guest: Guest {
                id: self.guest_id.trim().to_string(),
                name,
                kana_name,
                gender: gender.to_string(),
                age,
                region,
                email,
                phone,
                deleted: false,
            },
            booking_id,
            stay_days,
            check_in_date,
            memo,
        }))
    }
}
