//! usecase-gen: Generate Agentic AI use cases from a persona, domain, and pain point.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use adapters::{OfflineResolver, RemoteResolver};
pub use app::api::{
    ExportOptions, ExportOutcome, GenerateOutcome, agent_catalog, domains, export_report,
    generate_use_cases, generate_use_cases_with, preview_prompt,
};
pub use domain::{
    AgentCategory, AppError, Domain, FallbackReason, GENERATION_FAILED, InferenceConfig,
    TRAILING_INSTRUCTION, UseCaseReport, UseCaseRequest,
};
pub use ports::UseCaseResolver;
