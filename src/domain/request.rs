use crate::domain::{AppError, Domain};

/// Placeholder used when constraints are empty.
pub const NO_CONSTRAINTS: &str = "None";

/// A submitted form.
///
/// The domain is kept as its label so requests built outside the CLI can name
/// a vertical the fallback table does not know.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UseCaseRequest {
    domain: String,
    persona: String,
    pain_point: String,
    constraints: String,
}

impl UseCaseRequest {
    /// Build a request, rejecting an empty persona or pain point.
    pub fn new(
        domain: impl Into<String>,
        persona: impl Into<String>,
        pain_point: impl Into<String>,
        constraints: impl Into<String>,
    ) -> Result<Self, AppError> {
        let persona = persona.into();
        let pain_point = pain_point.into();
        if persona.is_empty() || pain_point.is_empty() {
            return Err(AppError::MissingRequiredFields);
        }

        Ok(Self { domain: domain.into(), persona, pain_point, constraints: constraints.into() })
    }

    /// Build a request for one of the supported domains.
    pub fn for_domain(
        domain: Domain,
        persona: impl Into<String>,
        pain_point: impl Into<String>,
        constraints: impl Into<String>,
    ) -> Result<Self, AppError> {
        Self::new(domain.display_name(), persona, pain_point, constraints)
    }

    pub fn domain(&self) -> &str {
        &self.domain
    }

    pub fn persona(&self) -> &str {
        &self.persona
    }

    pub fn pain_point(&self) -> &str {
        &self.pain_point
    }

    /// Constraints exactly as entered.
    pub fn constraints(&self) -> &str {
        &self.constraints
    }

    /// Constraints with empty input replaced by [`NO_CONSTRAINTS`].
    pub fn constraints_or_default(&self) -> &str {
        constraints_or_default(&self.constraints)
    }

    /// The supported domain this request targets, matched exactly by key.
    pub fn known_domain(&self) -> Option<Domain> {
        Domain::from_key(&self.domain)
    }
}

pub(crate) fn constraints_or_default(constraints: &str) -> &str {
    if constraints.is_empty() { NO_CONSTRAINTS } else { constraints }
}
