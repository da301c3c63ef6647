//! Contract checks for the prompt builder through the public library API.

use opb::{PromptForm, PromptOptions, RequirementFlags, build_prompt};

/// Bullet lines of the requirement section, between [요구사항] and [출력 형식].
fn requirement_bullets(prompt: &str) -> Vec<String> {
    let start = prompt.find("[요구사항]").expect("requirement section present");
    let end = prompt.find("[출력 형식]").expect("output format section present");
    prompt[start..end]
        .lines()
        .filter(|line| line.starts_with("- "))
        .map(str::to_string)
        .collect()
}

#[test]
fn empty_recipient_is_replaced_by_the_placeholder_token() {
    let prompt = build_prompt(&PromptOptions::default());
    assert!(prompt.contains("{수신자}에게 보내는 이메일을"));
}

#[test]
fn all_flags_on_plus_one_custom_yields_nine_trailing_ordered_bullets() {
    let options = PromptOptions {
        custom_requirements: vec!["회신은 내일까지".to_string()],
        ..PromptOptions::default()
    };
    let bullets = requirement_bullets(&build_prompt(&options));

    assert_eq!(bullets.len(), 9);
    assert_eq!(bullets[8], "- 회신은 내일까지");
}

#[test]
fn all_flags_off_without_customs_yields_the_single_fixed_line() {
    let options =
        PromptOptions { requirements: RequirementFlags::none(), ..PromptOptions::default() };
    let bullets = requirement_bullets(&build_prompt(&options));
    assert_eq!(bullets, vec!["- 별도 요구사항 없음".to_string()]);
}

#[test]
fn form_edits_flow_into_the_rendered_prompt() {
    let mut form = PromptForm::new();
    form.set_context("통합 빌드가 언제 완료되는지 확인");
    form.set_deadline("이번 주 금요일");
    form.add_custom_requirement("회신은 내일까지");
    form.remove_custom_requirement(0);
    form.add_custom_requirement("첨부 자료 포함");

    let prompt = form.render();
    assert!(prompt.contains("[상황]\n통합 빌드가 언제 완료되는지 확인"));
    assert!(prompt.contains("- 희망 일정/마감: 이번 주 금요일"));
    assert!(prompt.contains("- 첨부 자료 포함"));
    assert!(!prompt.contains("회신은 내일까지"));
}

#[test]
fn rendering_is_idempotent_for_identical_records() {
    let options = PromptOptions {
        recipient_name: "김민수".to_string(),
        recipient_title: "과장님".to_string(),
        context: "지연 안내".to_string(),
        ..PromptOptions::default()
    };
    assert_eq!(build_prompt(&options), build_prompt(&options));
}
