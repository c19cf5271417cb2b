use log::info;
use serde::Serialize;
use serde_json::json;
use thiserror::Error;

use crate::config;

/// Free-text fields collected by the quote form.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct QuoteFields {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

#[derive(Error, Debug, PartialEq)]
pub enum SubmitError {
    #[error("Please fill in your first name and email address.")]
    MissingContact,
}

/// Where a composed quote request goes. The live site ships the
/// discarding implementation; a deployment with a mail or ticketing
/// endpoint would plug in its own.
pub trait QuoteSubmitter {
    fn submit(
        &self,
        fields: &QuoteFields,
        selected_ids: &[&'static str],
        total: u32,
    ) -> Result<(), SubmitError>;
}

/// Checks the required contact fields, then drops the request. Nothing
/// in this crate performs a network call.
pub struct DiscardSubmitter;

impl QuoteSubmitter for DiscardSubmitter {
    fn submit(
        &self,
        fields: &QuoteFields,
        selected_ids: &[&'static str],
        total: u32,
    ) -> Result<(), SubmitError> {
        if fields.first_name.trim().is_empty() || fields.email.trim().is_empty() {
            return Err(SubmitError::MissingContact);
        }
        if config::log_submission_payloads() {
            let payload = json!({
                "fields": fields,
                "services": selected_ids,
                "total": total,
            });
            info!("Quote request composed (not sent): {}", payload);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_fields() -> QuoteFields {
        QuoteFields {
            first_name: "John".to_string(),
            last_name: "Doe".to_string(),
            email: "john@example.com".to_string(),
            subject: "Project Inquiry".to_string(),
            message: "Tell me more.".to_string(),
        }
    }

    #[test]
    fn accepts_complete_contact_details() {
        let result = DiscardSubmitter.submit(&complete_fields(), &["web-dev", "seo"], 600);
        assert_eq!(result, Ok(()));
    }

    #[test]
    fn rejects_missing_first_name() {
        let mut fields = complete_fields();
        fields.first_name.clear();
        let result = DiscardSubmitter.submit(&fields, &[], 0);
        assert_eq!(result, Err(SubmitError::MissingContact));
    }

    #[test]
    fn rejects_missing_email() {
        let mut fields = complete_fields();
        fields.email.clear();
        let result = DiscardSubmitter.submit(&fields, &["logo"], 50);
        assert_eq!(result, Err(SubmitError::MissingContact));
    }

    #[test]
    fn whitespace_only_contact_counts_as_missing() {
        let mut fields = complete_fields();
        fields.email = "   ".to_string();
        let result = DiscardSubmitter.submit(&fields, &[], 0);
        assert_eq!(result, Err(SubmitError::MissingContact));
    }

    #[test]
    fn empty_selection_is_still_submittable() {
        let result = DiscardSubmitter.submit(&complete_fields(), &[], 0);
        assert_eq!(result, Ok(()));
    }
}
