//! Contact
//!
//! The public contact form. Name, email and message are required; subject
//! and sender type are optional.

use std::{fmt, str::FromStr};

use thiserror::Error;
use tracing::info;

/// Errors raised when submitting the contact form.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ContactError {
    /// A required form field was left empty.
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    /// Sender type text is not one of the offered options.
    #[error("Unknown sender type: {0}")]
    UnknownSenderType(String),
}

/// Who is getting in touch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SenderType {
    /// A farmer
    Farmer,

    /// A buyer or restaurant owner
    Buyer,

    /// A retailer
    Retailer,

    /// An individual consumer
    Consumer,

    /// A potential partner
    Partner,

    /// Anyone else
    Other,
}

impl SenderType {
    /// Every sender type, in the order they are offered.
    pub const ALL: [SenderType; 6] = [
        SenderType::Farmer,
        SenderType::Buyer,
        SenderType::Retailer,
        SenderType::Consumer,
        SenderType::Partner,
        SenderType::Other,
    ];

    /// Textual form of the sender type.
    pub fn as_str(self) -> &'static str {
        match self {
            SenderType::Farmer => "farmer",
            SenderType::Buyer => "buyer",
            SenderType::Retailer => "retailer",
            SenderType::Consumer => "consumer",
            SenderType::Partner => "partner",
            SenderType::Other => "other",
        }
    }
}

impl fmt::Display for SenderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SenderType {
    type Err = ContactError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SenderType::ALL
            .into_iter()
            .find(|sender| sender.as_str() == s)
            .ok_or_else(|| ContactError::UnknownSenderType(s.to_string()))
    }
}

/// Contact form values, as entered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactDraft {
    /// Full name (required)
    pub name: String,

    /// Email address (required)
    pub email: String,

    /// Subject line
    pub subject: String,

    /// Who is getting in touch
    pub sender_type: Option<SenderType>,

    /// Message body (required)
    pub message: String,
}

impl ContactDraft {
    /// Check the required fields and accept the message.
    ///
    /// # Errors
    ///
    /// Returns [`ContactError::MissingField`] for the first required field
    /// that is empty.
    pub fn submit(&self) -> Result<(), ContactError> {
        for (field, value) in [
            ("name", &self.name),
            ("email", &self.email),
            ("message", &self.message),
        ] {
            if value.is_empty() {
                return Err(ContactError::MissingField(field));
            }
        }

        info!(
            email = %self.email,
            subject = %self.subject,
            sender_type = ?self.sender_type,
            "contact message accepted"
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> ContactDraft {
        ContactDraft {
            name: "Ada Grower".to_string(),
            email: "ada@example.com".to_string(),
            message: "Do you deliver to Portland?".to_string(),
            ..ContactDraft::default()
        }
    }

    #[test]
    fn submit_accepts_required_fields_only() {
        assert_eq!(draft().submit(), Ok(()));
    }

    #[test]
    fn submit_requires_name_email_and_message() {
        let cases = [
            (ContactDraft { name: String::new(), ..draft() }, "name"),
            (ContactDraft { email: String::new(), ..draft() }, "email"),
            (ContactDraft { message: String::new(), ..draft() }, "message"),
        ];

        for (draft, field) in cases {
            assert_eq!(
                draft.submit(),
                Err(ContactError::MissingField(field)),
                "expected {field} to be required"
            );
        }
    }

    #[test]
    fn sender_type_parses_offered_options() {
        assert_eq!("buyer".parse::<SenderType>(), Ok(SenderType::Buyer));
        assert_eq!(
            "restaurant".parse::<SenderType>(),
            Err(ContactError::UnknownSenderType("restaurant".to_string()))
        );
    }
}
