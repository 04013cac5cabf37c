use std::fmt;
use std::str::FromStr;

use crate::domain::AppError;

/// Business verticals use cases can be generated for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Domain {
    Healthcare,
    Retail,
    Banking,
}

impl Domain {
    /// All supported domains in form order.
    pub const ALL: [Domain; 3] = [Domain::Healthcare, Domain::Retail, Domain::Banking];

    /// Label used in prompts, exports, and the domain selector.
    pub fn display_name(&self) -> &'static str {
        match self {
            Domain::Healthcare => "Healthcare",
            Domain::Retail => "Retail",
            Domain::Banking => "Banking",
        }
    }

    /// Look up a domain by its exact display name.
    pub fn from_key(key: &str) -> Option<Domain> {
        Domain::ALL.into_iter().find(|domain| domain.display_name() == key)
    }

    /// Parse a domain from its label, ignoring case and surrounding whitespace.
    pub fn from_name(name: &str) -> Option<Domain> {
        match name.trim().to_lowercase().as_str() {
            "healthcare" => Some(Domain::Healthcare),
            "retail" => Some(Domain::Retail),
            "banking" => Some(Domain::Banking),
            _ => None,
        }
    }

    /// Pre-written use cases served when the model is unavailable.
    pub fn fallback_use_cases(&self) -> [&'static str; 3] {
        match self {
            Domain::Healthcare => [
                "1. Agentic AI for automated patient intake, gathering symptoms, and scheduling appointments.",
                "2. AI assistant for doctors that summarizes patient history and suggests next steps.",
                "3. AI-powered compliance agent to ensure hospital procedures follow regulations.",
            ],
            Domain::Retail => [
                "1. AI-driven shelf restocking agent that tracks stock levels and automatically reorders items.",
                "2. Virtual shopping assistant that recommends outfits based on user preferences.",
                "3. Customer service AI that handles refunds and product queries autonomously.",
            ],
            Domain::Banking => [
                "1. Agentic fraud detection bot that scans transactions and flags anomalies in real-time.",
                "2. AI loan assistant that evaluates applicants and explains rejections based on policy.",
                "3. Agent that monitors customer spending habits and suggests financial optimizations.",
            ],
        }
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for Domain {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Domain::from_name(s).ok_or_else(|| AppError::InvalidDomain { name: s.to_string() })
    }
}
