//! Catalog listing commands.

use crate::app::api;
use crate::domain::AppError;

pub fn run_agents() -> Result<(), AppError> {
    println!("🧠 Agent Types");
    for category in api::agent_catalog() {
        println!("{}:", category.name);
        println!("  {}", category.agent_list());
    }
    Ok(())
}

pub fn run_domains() -> Result<(), AppError> {
    for domain in api::domains() {
        println!("{}", domain);
    }
    Ok(())
}
