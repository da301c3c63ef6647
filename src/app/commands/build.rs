use crate::app::AppContext;
use crate::domain::{
    AppError, Audience, Length, PromptOptions, Purpose, RequirementKey, SubjectStyle, Tone,
    build_prompt,
};
use crate::ports::ClipboardWriter;

/// Inputs for the non-interactive build command.
///
/// Enum fields arrive as raw flag values (slug or Korean label) and are
/// resolved here; unset fields keep the seeded defaults.
#[derive(Debug, Clone, Default)]
pub struct BuildRequest {
    pub purpose: Option<String>,
    pub tone: Option<String>,
    pub length: Option<String>,
    pub audience: Option<String>,
    pub subject_style: Option<String>,
    pub recipient_name: Option<String>,
    pub recipient_title: Option<String>,
    pub deadline: Option<String>,
    pub deliverable: Option<String>,
    pub context: Option<String>,
    /// Start with every requirement flag disabled.
    pub no_defaults: bool,
    /// Requirement keys to disable.
    pub off: Vec<String>,
    /// Custom requirement lines to append.
    pub require: Vec<String>,
    /// Copy the rendered prompt to the clipboard.
    pub copy: bool,
}

/// Execute the build command.
pub fn execute<C: ClipboardWriter>(
    ctx: &mut AppContext<C>,
    request: &BuildRequest,
) -> Result<String, AppError> {
    let options = resolve_options(request)?;
    let prompt = build_prompt(&options);

    if request.copy {
        ctx.clipboard_mut().write_text(&prompt)?;
    }

    Ok(prompt)
}

/// Resolve flag values into a complete options record.
fn resolve_options(request: &BuildRequest) -> Result<PromptOptions, AppError> {
    let mut options = PromptOptions::default();

    if let Some(value) = &request.purpose {
        options.purpose =
            parse_choice("purpose", value, Purpose::from_input, &Purpose::ALL.map(|p| p.key()))?;
    }
    if let Some(value) = &request.tone {
        options.tone = parse_choice("tone", value, Tone::from_input, &Tone::ALL.map(|t| t.key()))?;
    }
    if let Some(value) = &request.length {
        options.length =
            parse_choice("length", value, Length::from_input, &Length::ALL.map(|l| l.key()))?;
    }
    if let Some(value) = &request.audience {
        options.audience =
            parse_choice("audience", value, Audience::from_input, &Audience::ALL.map(|a| a.key()))?;
    }
    if let Some(value) = &request.subject_style {
        options.subject_style = parse_choice(
            "subject style",
            value,
            SubjectStyle::from_input,
            &SubjectStyle::ALL.map(|s| s.key()),
        )?;
    }

    options.recipient_name = request.recipient_name.clone().unwrap_or_default();
    options.recipient_title = request.recipient_title.clone().unwrap_or_default();
    options.deadline = request.deadline.clone().unwrap_or_default();
    options.deliverable = request.deliverable.clone().unwrap_or_default();
    options.context = request.context.clone().unwrap_or_default();

    if request.no_defaults {
        options.requirements.clear_all();
    }
    for name in &request.off {
        let key = parse_choice(
            "requirement",
            name,
            RequirementKey::from_input,
            &RequirementKey::DISPLAY_ORDER.map(|k| k.key()),
        )?;
        options.requirements.set(key, false);
    }

    options.custom_requirements = request.require.clone();

    Ok(options)
}

fn parse_choice<T>(
    field: &str,
    value: &str,
    parse: impl Fn(&str) -> Option<T>,
    keys: &[&str],
) -> Result<T, AppError> {
    parse(value).ok_or_else(|| AppError::UnknownOption {
        field: field.to_string(),
        value: value.to_string(),
        expected: keys.join(", "),
    })
}
