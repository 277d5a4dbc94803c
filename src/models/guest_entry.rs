//! Guest entry model

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::error::{AppError, AppResult};

use super::log_row::LogRow;

/// Placeholder stored when no phone number was given
pub const PHONE_PLACEHOLDER: &str = "-";

/// Guest book submission as sent by the form
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
pub struct SubmitGuestRequest {
    #[validate(required, length(min = 1))]
    pub name: Option<String>,
    /// Not checked beyond presence
    #[validate(required, length(min = 1))]
    pub email: Option<String>,
    pub phone: Option<String>,
    #[validate(required, length(min = 1))]
    pub institution: Option<String>,
    #[validate(required, length(min = 1))]
    pub subject: Option<String>,
    #[validate(required, length(min = 1))]
    pub message: Option<String>,
}

/// Successful submission acknowledgment
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SubmitGuestResponse {
    pub message: String,
    pub success: bool,
}

impl SubmitGuestResponse {
    pub fn saved() -> Self {
        Self {
            message: "Data berhasil disimpan".to_string(),
            success: true,
        }
    }
}

/// A validated guest entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuestEntry {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub institution: String,
    pub subject: String,
    pub message: String,
}

impl TryFrom<SubmitGuestRequest> for GuestEntry {
    type Error = AppError;

    fn try_from(req: SubmitGuestRequest) -> AppResult<Self> {
        req.validate()?;

        let required = |value: Option<String>, field: &str| {
            value.ok_or_else(|| AppError::Validation(format!("Missing required fields: {}", field)))
        };

        Ok(Self {
            name: required(req.name, "name")?,
            email: required(req.email, "email")?,
            phone: req.phone.filter(|p| !p.is_empty()),
            institution: required(req.institution, "institution")?,
            subject: required(req.subject, "subject")?,
            message: required(req.message, "message")?,
        })
    }
}

impl GuestEntry {
    /// Build the row appended to the log, stamped with `timestamp`
    pub fn into_log_row(self, timestamp: String) -> LogRow {
        LogRow::new(vec![
            timestamp,
            self.name,
            self.email,
            self.phone.unwrap_or_else(|| PHONE_PLACEHOLDER.to_string()),
            self.institution,
            self.subject,
            self.message,
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete() -> SubmitGuestRequest {
        SubmitGuestRequest {
            name: Some("Siti".into()),
            email: Some("siti@example.org".into()),
            phone: Some("0812".into()),
            institution: Some("Universitas Indonesia".into()),
            subject: Some("Kunjungan".into()),
            message: Some("Terima kasih".into()),
        }
    }

    #[test]
    fn test_complete_entry_accepted() {
        let entry = GuestEntry::try_from(complete()).unwrap();
        assert_eq!(entry.name, "Siti");
        assert_eq!(entry.phone.as_deref(), Some("0812"));
    }

    #[test]
    fn test_missing_field_rejected() {
        let req = SubmitGuestRequest { institution: None, ..complete() };
        match GuestEntry::try_from(req) {
            Err(AppError::Validation(msg)) => assert!(msg.contains("institution")),
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_field_rejected() {
        let req = SubmitGuestRequest { message: Some(String::new()), ..complete() };
        assert!(matches!(GuestEntry::try_from(req), Err(AppError::Validation(_))));
    }

    #[test]
    fn test_email_not_format_checked() {
        let req = SubmitGuestRequest { email: Some("not-an-address".into()), ..complete() };
        assert!(GuestEntry::try_from(req).is_ok());
    }

    #[test]
    fn test_row_layout() {
        let row = GuestEntry::try_from(complete())
            .unwrap()
            .into_log_row("3/10/2025, 10.27.04".into());
        assert_eq!(
            row.fields(),
            [
                "3/10/2025, 10.27.04",
                "Siti",
                "siti@example.org",
                "0812",
                "Universitas Indonesia",
                "Kunjungan",
                "Terima kasih",
            ]
        );
    }

    #[test]
    fn test_phone_placeholder() {
        for phone in [None, Some(String::new())] {
            let req = SubmitGuestRequest { phone, ..complete() };
            let row = GuestEntry::try_from(req).unwrap().into_log_row("t".into());
            assert_eq!(row.fields()[3], PHONE_PLACEHOLDER);
            assert_eq!(row.fields().len(), LogRow::WIDTH);
        }
    }
}
