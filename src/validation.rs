//! Form Validation
//!
//! Client-side checks run before a form is submitted. Each field reports
//! only its first failing rule.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;

use crate::models::{LoginData, RegisterData};

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));

static PHONE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\+?\(?[0-9]{3}\)?[-\s.]?[0-9]{3}[-\s.]?[0-9]{4,6}$").expect("valid phone regex")
});

/// Field name -> error message
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldErrors(BTreeMap<&'static str, String>);

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    fn check(&mut self, field: &'static str, ok: bool, message: &str) {
        if !ok && !self.0.contains_key(field) {
            self.0.insert(field, message.to_string());
        }
    }

    fn into_result(self) -> Result<(), FieldErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

fn char_len(value: &str) -> usize {
    value.chars().count()
}

pub fn validate_login(data: &LoginData) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::default();
    errors.check("username", !data.username.is_empty(), "Username is required.");
    errors.check(
        "password",
        char_len(&data.password) >= 4,
        "Password must be at least 4 characters.",
    );
    errors.into_result()
}

/// Validate a registration form; `today` bounds the purchase date
pub fn validate_register(data: &RegisterData, today: NaiveDate) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::default();

    let name_len = char_len(&data.full_name);
    errors.check("fullName", name_len >= 2, "Name must be at least 2 characters.");
    errors.check("fullName", name_len <= 100, "Name is too long.");

    errors.check(
        "password",
        char_len(&data.password) >= 6,
        "Password must be at least 6 characters.",
    );

    errors.check("email", !data.email.is_empty(), "Email is required.");
    errors.check("email", EMAIL_RE.is_match(&data.email), "Please enter a valid email address.");

    let phone_len = char_len(&data.phone);
    errors.check("phone", phone_len >= 8, "Phone number is too short.");
    errors.check("phone", phone_len <= 20, "Phone number is too long.");
    errors.check("phone", PHONE_RE.is_match(&data.phone), "Please enter a valid phone number.");

    errors.check(
        "address",
        char_len(&data.address) >= 10,
        "Address must be at least 10 characters and detailed enough.",
    );

    match NaiveDate::parse_from_str(&data.purchase_date, "%Y-%m-%d") {
        Ok(date) => {
            errors.check("purchaseDate", date <= today, "Purchase date cannot be in the future.")
        }
        Err(_) => errors.check("purchaseDate", false, "Purchase date is required."),
    }

    errors.check(
        "deviceSerialNumber",
        !data.device_serial_number.is_empty(),
        "Serial number is required.",
    );

    errors.into_result()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()
    }

    fn valid_registration() -> RegisterData {
        RegisterData {
            full_name: "Ivan Ivanov".into(),
            password: "secret1".into(),
            email: "ivan@example.com".into(),
            phone: "+359888123456".into(),
            address: "Varna, Levski Blvd 12".into(),
            purchase_date: "2025-05-20".into(),
            device_serial_number: "SN-00000001".into(),
        }
    }

    #[test]
    fn login_rules() {
        let ok = LoginData { username: "ivan".into(), password: "1234".into() };
        assert!(validate_login(&ok).is_ok());

        let short = LoginData { username: String::new(), password: "123".into() };
        let errors = validate_login(&short).unwrap_err();
        assert_eq!(errors.get("username"), Some("Username is required."));
        assert_eq!(errors.get("password"), Some("Password must be at least 4 characters."));
    }

    #[test]
    fn valid_registration_passes() {
        assert_eq!(validate_register(&valid_registration(), today()), Ok(()));
    }

    #[test]
    fn first_failing_rule_wins() {
        let data = RegisterData { email: String::new(), ..valid_registration() };
        let errors = validate_register(&data, today()).unwrap_err();
        assert_eq!(errors.get("email"), Some("Email is required."));
    }

    #[test]
    fn phone_formats() {
        for phone in ["0888123456", "+359888123456", "(088)812-3456", "088 812 3456"] {
            let data = RegisterData { phone: phone.into(), ..valid_registration() };
            assert!(validate_register(&data, today()).is_ok(), "{phone} should be accepted");
        }
        for phone in ["0888", "+359 888 123 456", "phone-number"] {
            let data = RegisterData { phone: phone.into(), ..valid_registration() };
            let errors = validate_register(&data, today()).unwrap_err();
            assert!(errors.get("phone").is_some(), "{phone}");
        }
    }

    #[test]
    fn purchase_date_rules() {
        let future = RegisterData { purchase_date: "2025-06-02".into(), ..valid_registration() };
        let errors = validate_register(&future, today()).unwrap_err();
        assert_eq!(errors.get("purchaseDate"), Some("Purchase date cannot be in the future."));

        let same_day = RegisterData { purchase_date: "2025-06-01".into(), ..valid_registration() };
        assert!(validate_register(&same_day, today()).is_ok());

        let missing = RegisterData { purchase_date: String::new(), ..valid_registration() };
        let errors = validate_register(&missing, today()).unwrap_err();
        assert_eq!(errors.get("purchaseDate"), Some("Purchase date is required."));
    }

    #[test]
    fn name_length_counts_characters() {
        let data = RegisterData { full_name: "Ив".into(), ..valid_registration() };
        assert!(validate_register(&data, today()).is_ok());
        let data = RegisterData { full_name: "И".repeat(101), ..valid_registration() };
        let errors = validate_register(&data, today()).unwrap_err();
        assert_eq!(errors.get("fullName"), Some("Name is too long."));
    }
}
