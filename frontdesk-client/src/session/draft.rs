//! Guest and payment drafts
//!
//! Transient form data. Drafts are the source of truth while a modal is
//! open; the presentation layer writes into them and reads from them,
//! never the reverse.

use super::error::ValidationError;
use crate::money;
use serde::{Deserialize, Serialize};
use shared::models::PaymentMethod;

/// Guest data captured during check-in
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GuestDraft {
    /// Required, non-empty after trimming
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
}

impl GuestDraft {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: None,
            phone: None,
        }
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    /// Validate the draft. Name is required; email and phone are
    /// optional but format-checked when present. Empty optional fields
    /// count as absent (the legacy forms submit them as "").
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::NameRequired);
        }

        if let Some(email) = self.email.as_deref()
            && !email.trim().is_empty()
            && !is_valid_email(email.trim())
        {
            return Err(ValidationError::InvalidEmail(email.to_string()));
        }

        if let Some(phone) = self.phone.as_deref()
            && !phone.trim().is_empty()
            && !is_valid_phone(phone.trim())
        {
            return Err(ValidationError::InvalidPhone(phone.to_string()));
        }

        Ok(())
    }

    /// Normalized copy: trimmed name, empty optionals dropped
    pub fn normalized(&self) -> GuestDraft {
        let clean = |v: &Option<String>| {
            v.as_deref()
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
        };
        GuestDraft {
            name: self.name.trim().to_string(),
            email: clean(&self.email),
            phone: clean(&self.phone),
        }
    }
}

/// Payment data captured in the payment modal
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentDraft {
    pub method: PaymentMethod,
    /// Amount handed over by the guest; only meaningful for cash
    pub tendered: f64,
}

impl PaymentDraft {
    /// Default draft for a freshly opened payment stage: cash, with
    /// the tendered amount pre-filled to the total.
    pub fn cash(total: f64) -> Self {
        Self {
            method: PaymentMethod::Cash,
            tendered: total,
        }
    }

    /// Change due against `total`; negative means insufficient
    pub fn change(&self, total: f64) -> f64 {
        money::change(self.tendered, total)
    }

    /// Amount the stay record will carry as paid
    pub fn amount_paid(&self, total: f64) -> f64 {
        if self.method.requires_tendered() {
            self.tendered
        } else {
            total
        }
    }

    /// Validate against the session total. Non-cash methods ignore the
    /// tendered amount entirely.
    pub fn validate(&self, total: f64) -> Result<(), ValidationError> {
        if self.method.requires_tendered() && !money::covers(self.tendered, total) {
            return Err(ValidationError::InsufficientFunds {
                total,
                tendered: self.tendered,
            });
        }
        Ok(())
    }
}

/// Minimal structural email check: one `@`, non-empty local part,
/// dotted domain, no whitespace.
fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    !host.is_empty() && tld.len() >= 2
}

/// Lenient regional phone check: optional leading `+`, digits with
/// common separators, 7 to 15 digits total.
fn is_valid_phone(phone: &str) -> bool {
    let rest = phone.strip_prefix('+').unwrap_or(phone);
    let mut digits = 0usize;
    for c in rest.chars() {
        match c {
            '0'..='9' => digits += 1,
            ' ' | '-' | '.' | '(' | ')' => {}
            _ => return false,
        }
    }
    (7..=15).contains(&digits)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_required() {
        assert!(matches!(
            GuestDraft::new("").validate(),
            Err(ValidationError::NameRequired)
        ));
        assert!(matches!(
            GuestDraft::new("   ").validate(),
            Err(ValidationError::NameRequired)
        ));
        assert!(GuestDraft::new("Ana García").validate().is_ok());
    }

    #[test]
    fn test_email_optional_but_checked() {
        assert!(GuestDraft::new("Ana").validate().is_ok());
        assert!(
            GuestDraft::new("Ana")
                .with_email("ana@example.com")
                .validate()
                .is_ok()
        );
        // empty string is treated as absent
        assert!(GuestDraft::new("Ana").with_email("").validate().is_ok());
        assert!(matches!(
            GuestDraft::new("Ana").with_email("not-an-email").validate(),
            Err(ValidationError::InvalidEmail(_))
        ));
        assert!(matches!(
            GuestDraft::new("Ana").with_email("a@b").validate(),
            Err(ValidationError::InvalidEmail(_))
        ));
    }

    #[test]
    fn test_phone_optional_but_checked() {
        assert!(
            GuestDraft::new("Ana")
                .with_phone("+34 612 345 678")
                .validate()
                .is_ok()
        );
        assert!(
            GuestDraft::new("Ana")
                .with_phone("912-345-678")
                .validate()
                .is_ok()
        );
        assert!(matches!(
            GuestDraft::new("Ana").with_phone("12345").validate(),
            Err(ValidationError::InvalidPhone(_))
        ));
        assert!(matches!(
            GuestDraft::new("Ana").with_phone("phone#1").validate(),
            Err(ValidationError::InvalidPhone(_))
        ));
    }

    #[test]
    fn test_normalized_drops_empty_optionals() {
        let draft = GuestDraft {
            name: "  Ana  ".to_string(),
            email: Some("".to_string()),
            phone: Some(" 612345678 ".to_string()),
        };
        let clean = draft.normalized();
        assert_eq!(clean.name, "Ana");
        assert!(clean.email.is_none());
        assert_eq!(clean.phone.as_deref(), Some("612345678"));
    }

    #[test]
    fn test_cash_draft_defaults_tendered_to_total() {
        let draft = PaymentDraft::cash(80.0);
        assert_eq!(draft.method, PaymentMethod::Cash);
        assert_eq!(draft.tendered, 80.0);
        assert_eq!(draft.change(80.0), 0.0);
        assert!(draft.validate(80.0).is_ok());
    }

    #[test]
    fn test_insufficient_cash_rejected() {
        let draft = PaymentDraft {
            method: PaymentMethod::Cash,
            tendered: 100.0,
        };
        assert!(matches!(
            draft.validate(120.0),
            Err(ValidationError::InsufficientFunds { .. })
        ));
        assert_eq!(draft.change(120.0), -20.0);
    }

    #[test]
    fn test_one_cent_short_rejected() {
        let draft = PaymentDraft {
            method: PaymentMethod::Cash,
            tendered: 99.99,
        };
        assert!(matches!(
            draft.validate(100.0),
            Err(ValidationError::InsufficientFunds { .. })
        ));
        assert_eq!(draft.change(100.0), -0.01);
    }

    #[test]
    fn test_non_cash_ignores_tendered() {
        let draft = PaymentDraft {
            method: PaymentMethod::Card,
            tendered: 0.0,
        };
        assert!(draft.validate(120.0).is_ok());
        assert_eq!(draft.amount_paid(120.0), 120.0);
    }
}
