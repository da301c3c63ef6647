use dialoguer::{Confirm, Input, MultiSelect, Select};

use crate::app::AppContext;
use crate::domain::{
    AppError, Audience, Length, PromptForm, Purpose, RequirementKey, SubjectStyle, Tone,
};
use crate::ports::ClipboardWriter;

/// Execute the interactive wizard.
///
/// Walks the same form the option catalogs describe: one select per enum,
/// free-text inputs, the requirement checklist seeded all-on, and a custom
/// requirement loop. Prints the rendered prompt and offers a clipboard copy.
pub fn execute<C: ClipboardWriter>(ctx: &mut AppContext<C>) -> Result<String, AppError> {
    let mut form = PromptForm::new();

    form.set_purpose(select_one("목적", &Purpose::ALL, |p| p.label(), 0)?);
    form.set_audience(select_one("대상", &Audience::ALL, |a| a.label(), 0)?);
    form.set_tone(select_one("톤", &Tone::ALL, |t| t.label(), 0)?);
    form.set_length(select_one("길이", &Length::ALL, |l| l.label(), 1)?);
    form.set_subject_style(select_one("Subject 유형", &SubjectStyle::ALL, |s| s.label(), 0)?);

    form.set_recipient_name(input_optional("수신인 이름 (선택)")?);
    form.set_recipient_title(input_optional("수신인 직급/호칭 (선택)")?);
    form.set_deadline(input_optional("희망 일정/마감 (선택)")?);
    form.set_deliverable(input_optional("요청 산출물/자료 (선택)")?);
    form.set_context(input_optional("상황")?);

    let items: Vec<&str> =
        RequirementKey::DISPLAY_ORDER.iter().map(|key| key.checklist_label()).collect();
    let defaults = [true; 8];
    let picked = MultiSelect::new()
        .with_prompt("요구사항 선택 (space 토글, enter 확정)")
        .items(&items)
        .defaults(&defaults)
        .interact()
        .map_err(|e| AppError::Interaction(format!("Requirement selection failed: {e}")))?;

    form.clear_all_requirements();
    for index in picked {
        form.set_requirement(RequirementKey::DISPLAY_ORDER[index], true);
    }

    loop {
        let entry = input_optional("추가 요구사항 (빈 입력으로 마침)")?;
        if !form.add_custom_requirement(&entry) {
            break;
        }
    }

    let prompt = form.render();
    println!("{prompt}");

    let copy = Confirm::new()
        .with_prompt("클립보드에 복사할까요?")
        .default(true)
        .interact()
        .map_err(|e| AppError::Interaction(format!("Copy confirmation failed: {e}")))?;
    if copy {
        ctx.clipboard_mut().write_text(&prompt)?;
        eprintln!("✅ Copied prompt to clipboard");
    }

    Ok(prompt)
}

fn select_one<T: Copy>(
    prompt: &str,
    choices: &[T],
    label: impl Fn(&T) -> &'static str,
    default: usize,
) -> Result<T, AppError> {
    let items: Vec<&str> = choices.iter().map(&label).collect();
    let selection = Select::new()
        .with_prompt(prompt)
        .items(&items)
        .default(default)
        .interact()
        .map_err(|e| AppError::Interaction(format!("{prompt} selection failed: {e}")))?;
    Ok(choices[selection])
}

fn input_optional(prompt: &str) -> Result<String, AppError> {
    Input::<String>::new()
        .with_prompt(prompt)
        .allow_empty(true)
        .interact_text()
        .map_err(|e| AppError::Interaction(format!("{prompt} input failed: {e}")))
}
