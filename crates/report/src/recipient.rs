use serde::{Deserialize, Serialize};

use stockworth_core::{DomainError, DomainResult};

/// Who a report is generated for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportRecipient {
    pub full_name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    #[serde(default)]
    pub consent: bool,
}

impl ReportRecipient {
    pub fn new(full_name: impl Into<String>, email: impl Into<String>, consent: bool) -> Self {
        Self {
            full_name: full_name.into(),
            email: email.into(),
            company_name: None,
            consent,
        }
    }

    pub fn with_company(mut self, company_name: impl Into<String>) -> Self {
        let company_name = company_name.into();
        self.company_name = (!company_name.trim().is_empty()).then_some(company_name);
        self
    }

    /// Name, email and consent are required; the email must look like `a@b.c`.
    pub fn validate(&self) -> DomainResult<()> {
        if self.full_name.trim().is_empty() || self.email.trim().is_empty() || !self.consent {
            return Err(DomainError::validation(
                "please fill in all required fields and accept the consent",
            ));
        }
        if !is_email_shaped(&self.email) {
            return Err(DomainError::validation("please enter a valid email address"));
        }
        Ok(())
    }
}

/// `local@domain.tld` shape check: no whitespace, exactly one `@`, and a dot
/// inside the domain part with text on both sides.
pub fn is_email_shaped(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}
