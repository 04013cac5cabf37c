//! Generate command implementation.

use std::io::ErrorKind;
use std::path::PathBuf;

use clap::Args;
use dialoguer::{Error as DialoguerError, Input, Select};

use crate::app::AppContext;
use crate::app::api::{self, ExportOptions};
use crate::app::commands::generate;
use crate::domain::{AppError, Domain, InferenceConfig, NoticeSeverity, UseCaseRequest};

#[derive(Args)]
pub struct GenerateArgs {
    /// Domain: healthcare, retail, or banking
    #[arg(short, long)]
    domain: Option<String>,
    /// User persona (e.g., 'Hospital Administrator')
    #[arg(short, long)]
    persona: Option<String>,
    /// Pain point (e.g., 'manual data entry')
    #[arg(short = 'k', long)]
    pain_point: Option<String>,
    /// Optional constraints (e.g., cost limit, compliance)
    #[arg(short, long)]
    constraints: Option<String>,
    /// Print the prompt without calling the API
    #[arg(long, conflicts_with_all = ["json", "markdown", "export_dir"])]
    prompt_preview: bool,
    /// Write the JSON download to this path
    #[arg(long)]
    json: Option<PathBuf>,
    /// Write the Markdown download to this path
    #[arg(long)]
    markdown: Option<PathBuf>,
    /// Write both downloads into this directory
    #[arg(long)]
    export_dir: Option<PathBuf>,
    /// Never prompt; fields not given as flags are left empty
    #[arg(long)]
    no_input: bool,
}

struct FormInput {
    domain: Domain,
    persona: String,
    pain_point: String,
    constraints: String,
}

pub fn run_generate(args: GenerateArgs, token: Option<String>) -> Result<(), AppError> {
    let Some(form) = resolve_form(&args)? else {
        return Ok(());
    };

    let request =
        UseCaseRequest::for_domain(form.domain, form.persona, form.pain_point, form.constraints)?;

    if args.prompt_preview {
        println!("{}", request.prompt());
        return Ok(());
    }

    let ctx = AppContext::from_credential(token, &InferenceConfig::default())?;

    eprintln!("⏳ Generating use cases...");
    let outcome = generate::execute(ctx.resolver(), &request);

    if let Some(reason) = &outcome.fallback {
        match reason.severity() {
            NoticeSeverity::Warning => eprintln!("⚠️  {}", reason),
            NoticeSeverity::Error => eprintln!("❌ {}", reason),
        }
    }

    println!("✅ Generated Use Cases");
    println!();
    println!("{}", outcome.output());

    let options = ExportOptions {
        json: args.json,
        markdown: args.markdown,
        export_dir: args.export_dir,
    };
    if !options.is_empty() {
        let exported = api::export_report(&outcome.report, &options)?;
        for path in exported.written {
            println!("⬇️  Saved {}", path.display());
        }
    }

    Ok(())
}

fn resolve_form(args: &GenerateArgs) -> Result<Option<FormInput>, AppError> {
    let domain = match &args.domain {
        Some(value) => value.parse::<Domain>()?,
        None if args.no_input => Domain::ALL[0],
        None => match prompt_domain()? {
            Some(domain) => domain,
            None => return Ok(None),
        },
    };

    let Some(persona) =
        text_field(&args.persona, "User Persona (e.g., 'Hospital Administrator')", args.no_input)?
    else {
        return Ok(None);
    };
    let Some(pain_point) =
        text_field(&args.pain_point, "Pain Point (e.g., 'manual data entry')", args.no_input)?
    else {
        return Ok(None);
    };
    let Some(constraints) = text_field(
        &args.constraints,
        "Constraints (Optional, e.g., cost limit, compliance)",
        args.no_input,
    )?
    else {
        return Ok(None);
    };

    Ok(Some(FormInput { domain, persona, pain_point, constraints }))
}

fn text_field(
    value: &Option<String>,
    label: &str,
    no_input: bool,
) -> Result<Option<String>, AppError> {
    match value {
        Some(value) => Ok(Some(value.clone())),
        None if no_input => Ok(Some(String::new())),
        None => prompt_text(label),
    }
}

fn prompt_domain() -> Result<Option<Domain>, AppError> {
    let items: Vec<&str> = Domain::ALL.iter().map(|domain| domain.display_name()).collect();
    let selection = Select::new()
        .with_prompt("Select Domain")
        .items(&items)
        .default(0)
        .interact_opt();

    Ok(interrupted_as_cancel(selection, "domain")?.flatten().map(|index| Domain::ALL[index]))
}

fn prompt_text(label: &str) -> Result<Option<String>, AppError> {
    let value = Input::<String>::new().with_prompt(label).allow_empty(true).interact_text();
    interrupted_as_cancel(value, label)
}

/// Ctrl-C while a prompt is open ends the form quietly instead of failing.
fn interrupted_as_cancel<T>(
    result: Result<T, DialoguerError>,
    field: &str,
) -> Result<Option<T>, AppError> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(DialoguerError::IO(err)) if err.kind() == ErrorKind::Interrupted => Ok(None),
        Err(err) => Err(AppError::Validation(format!("Failed to read {}: {}", field, err))),
    }
}
