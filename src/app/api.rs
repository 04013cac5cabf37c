//! API Facade for the application.
//!
//! This module exposes high-level functions that glue together context creation
//! and command execution.

use crate::app::{
    AppContext,
    commands::{export, generate},
};
use crate::domain::{AGENT_CATALOG, build_prompt};
use crate::ports::UseCaseResolver;

pub use crate::app::commands::export::{ExportOptions, ExportOutcome};
pub use crate::app::commands::generate::GenerateOutcome;
pub use crate::domain::{
    AgentCategory, AppError, Domain, FallbackReason, UseCaseReport, UseCaseRequest,
};

// =============================================================================
// Generate API
// =============================================================================

/// Generate use cases, selecting the resolver from `HF_TOKEN`.
///
/// The token is read on the first call only; a process that starts without it
/// stays offline.
///
/// Returns an error only when persona or pain point is empty. Every resolver
/// failure ends in fallback output recorded on the outcome.
pub fn generate_use_cases(
    domain: &str,
    persona: &str,
    pain_point: &str,
    constraints: Option<&str>,
) -> Result<GenerateOutcome, AppError> {
    let request = UseCaseRequest::new(domain, persona, pain_point, constraints.unwrap_or(""))?;
    let ctx = AppContext::from_process_env()?;
    Ok(generate::execute(ctx.resolver(), &request))
}

/// Generate use cases with an explicit resolver.
pub fn generate_use_cases_with(
    resolver: &dyn UseCaseResolver,
    domain: &str,
    persona: &str,
    pain_point: &str,
    constraints: Option<&str>,
) -> Result<GenerateOutcome, AppError> {
    let request = UseCaseRequest::new(domain, persona, pain_point, constraints.unwrap_or(""))?;
    Ok(generate::execute(resolver, &request))
}

/// Render the prompt that would be sent, without contacting the model.
pub fn preview_prompt(
    domain: &str,
    persona: &str,
    pain_point: &str,
    constraints: Option<&str>,
) -> String {
    build_prompt(domain, persona, pain_point, constraints.unwrap_or(""))
}

// =============================================================================
// Export API
// =============================================================================

/// Write the JSON and/or Markdown downloads for a report.
pub fn export_report(
    report: &UseCaseReport,
    options: &ExportOptions,
) -> Result<ExportOutcome, AppError> {
    export::execute(report, options)
}

// =============================================================================
// Catalog API
// =============================================================================

/// Agent types grouped by category.
pub fn agent_catalog() -> &'static [AgentCategory] {
    &AGENT_CATALOG
}

/// Domains offered by the form.
pub fn domains() -> &'static [Domain] {
    &Domain::ALL
}
