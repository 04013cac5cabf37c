pub mod agent_catalog;
pub mod business_domain;
pub mod error;
pub mod fallback;
pub mod inference_config;
pub mod prompt_template;
pub mod report;
pub mod request;

pub use agent_catalog::{AGENT_CATALOG, AgentCategory};
pub use business_domain::Domain;
pub use error::AppError;
pub use fallback::{FallbackReason, GENERATION_FAILED, NoticeSeverity, fallback_output};
pub use inference_config::InferenceConfig;
pub use prompt_template::{TRAILING_INSTRUCTION, build_prompt, extract_use_cases};
pub use report::UseCaseReport;
pub use request::{NO_CONSTRAINTS, UseCaseRequest};
