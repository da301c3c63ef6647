//! opb: Assemble paste-ready Korean business email prompts from structured
//! options.
//!
//! The core is a pure builder, [`build_prompt`], mapping an options record to
//! an instruction prompt with fixed section ordering. The surrounding crate
//! supplies the surfaces: a flag-driven build command, an interactive wizard,
//! a catalog listing of the option sets, and clipboard transport.

pub mod app;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
pub(crate) mod testing;

use app::{
    AppContext,
    commands::{build, catalog, wizard},
};
use ports::NoopClipboard;
use services::ArboardClipboard;

pub use app::commands::build::BuildRequest;
pub use app::commands::catalog::CatalogFormat;
pub use domain::{
    AppError, Audience, Length, PromptForm, PromptOptions, Purpose, RequirementFlags,
    RequirementKey, SubjectStyle, Tone, build_prompt,
};

/// Assemble a prompt from flag values, print it, and optionally copy it to
/// the system clipboard.
pub fn build(request: &BuildRequest) -> Result<String, AppError> {
    let prompt = if request.copy {
        let mut ctx = AppContext::new(ArboardClipboard::new()?);
        build::execute(&mut ctx, request)?
    } else {
        let mut ctx = AppContext::new(NoopClipboard);
        build::execute(&mut ctx, request)?
    };

    println!("{prompt}");
    if request.copy {
        eprintln!("✅ Copied prompt to clipboard");
    }
    Ok(prompt)
}

/// Run the interactive prompt wizard.
pub fn wizard() -> Result<String, AppError> {
    let mut ctx = AppContext::new(ArboardClipboard::new()?);
    wizard::execute(&mut ctx)
}

/// Print the option sets and requirement checklist.
pub fn catalog(format: CatalogFormat) -> Result<String, AppError> {
    let rendered = catalog::execute(format)?;
    println!("{}", rendered.trim_end());
    Ok(rendered)
}
