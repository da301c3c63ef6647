use super::options::PromptOptions;
use super::requirement::{RequirementFlags, RequirementKey};

/// Substituted when the situation text is empty or whitespace-only.
const CONTEXT_PLACEHOLDER: &str = "(상황을 입력해 주세요)";

/// Substituted when neither recipient name nor title is given.
const RECIPIENT_PLACEHOLDER: &str = "{수신자}";

/// Emitted alone when no requirement line is enabled.
const NO_REQUIREMENTS_LINE: &str = "- 별도 요구사항 없음";

/// Render an options record into the paste-ready instruction prompt.
///
/// Total over its input: every combination of enum members, free text, and
/// flags yields a well-formed prompt; blank optional fields degrade to
/// omission or placeholder text. Identical input renders byte-identical
/// output.
pub fn build_prompt(options: &PromptOptions) -> String {
    let context = match options.context.trim() {
        "" => CONTEXT_PLACEHOLDER,
        trimmed => trimmed,
    };
    let recipient = format_recipient(&options.recipient_name, &options.recipient_title);
    let requirements = requirements_to_text(&options.requirements, &options.custom_requirements);

    let mut option_lines = vec![
        format!("- 목적: {}", options.purpose.label()),
        format!("- 대상 유형: {}", options.audience.label()),
        format!("- 톤: {}", options.tone.label()),
        format!("- 길이: {}", options.length.label()),
        format!("- Subject 유형: {}", options.subject_style.label()),
    ];
    let deadline = options.deadline.trim();
    if !deadline.is_empty() {
        option_lines.push(format!("- 희망 일정/마감: {deadline}"));
    }
    let deliverable = options.deliverable.trim();
    if !deliverable.is_empty() {
        option_lines.push(format!("- 요청 산출물/자료: {deliverable}"));
    }

    format!(
        r#"당신은 회사에서 일하는 사무직 직원입니다.

아래 상황을 바탕으로, {recipient}에게 보내는 이메일을 한국어로 작성해 주세요.

[작성 옵션]
{options}

[상황]
{context}

[요구사항]
{requirements}

[출력 형식]
1) Subject: (한 줄)
2) 본문: 인사 → 배경/현재상황 → 요청/확인사항 → 다음 단계 → 마무리"#,
        recipient = recipient,
        options = option_lines.join("\n"),
        context = context,
        requirements = requirements,
    )
}

/// Resolve the recipient string from name and title.
fn format_recipient(name: &str, title: &str) -> String {
    let name = name.trim();
    let title = title.trim();
    match (name.is_empty(), title.is_empty()) {
        (true, true) => RECIPIENT_PLACEHOLDER.to_string(),
        (false, false) => format!("{name} {title}"),
        (false, true) => name.to_string(),
        (true, false) => title.to_string(),
    }
}

/// Render the requirement section body.
///
/// Fixed flags are walked in `EMIT_ORDER`; custom entries follow in
/// insertion order, skipping ones that trim to empty.
fn requirements_to_text(flags: &RequirementFlags, custom: &[String]) -> String {
    let mut lines: Vec<String> = RequirementKey::EMIT_ORDER
        .into_iter()
        .filter(|key| flags.is_on(*key))
        .map(|key| format!("- {}", key.prompt_line()))
        .collect();

    lines.extend(
        custom
            .iter()
            .map(|entry| entry.trim())
            .filter(|entry| !entry.is_empty())
            .map(|entry| format!("- {entry}")),
    );

    if lines.is_empty() { NO_REQUIREMENTS_LINE.to_string() } else { lines.join("\n") }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::{Audience, Length, Purpose, SubjectStyle, Tone};
    use proptest::prelude::*;

    fn options_with_context(context: &str) -> PromptOptions {
        PromptOptions { context: context.to_string(), ..PromptOptions::default() }
    }

    /// Bullet lines of the requirement section, between [요구사항] and [출력 형식].
    fn requirement_section(prompt: &str) -> Vec<&str> {
        let start = prompt.find("[요구사항]").expect("requirement section present");
        let end = prompt.find("[출력 형식]").expect("output format section present");
        prompt[start..end].lines().filter(|line| line.starts_with("- ")).collect()
    }

    #[test]
    fn default_options_render_every_section_in_order() {
        let prompt = build_prompt(&PromptOptions::default());

        let sections = ["당신은 회사에서 일하는 사무직 직원입니다.", "[작성 옵션]", "[상황]", "[요구사항]", "[출력 형식]"];
        let mut cursor = 0;
        for section in sections {
            let at = prompt[cursor..].find(section).expect(section);
            cursor += at + section.len();
        }
        assert!(prompt.contains("1) Subject: (한 줄)"));
        assert!(prompt.contains("2) 본문: 인사 → 배경/현재상황 → 요청/확인사항 → 다음 단계 → 마무리"));
    }

    #[test]
    fn blank_context_falls_back_to_the_placeholder() {
        for context in ["", "   ", "\n\t "] {
            let prompt = build_prompt(&options_with_context(context));
            assert!(prompt.contains("(상황을 입력해 주세요)"));
        }
    }

    #[test]
    fn non_blank_context_is_used_trimmed() {
        let prompt = build_prompt(&options_with_context("  통합 빌드 일정 확인  "));
        assert!(prompt.contains("[상황]\n통합 빌드 일정 확인\n"));
        assert!(!prompt.contains("(상황을 입력해 주세요)"));
    }

    #[test]
    fn missing_recipient_uses_the_placeholder_token() {
        let prompt = build_prompt(&PromptOptions::default());
        assert!(prompt.contains("아래 상황을 바탕으로, {수신자}에게 보내는 이메일을"));
    }

    #[test]
    fn recipient_name_and_title_are_space_joined_in_order() {
        let mut options = PromptOptions::default();
        options.recipient_name = " 김민수 ".to_string();
        options.recipient_title = " 매니저님 ".to_string();
        let prompt = build_prompt(&options);
        assert!(prompt.contains("김민수 매니저님에게 보내는 이메일을"));
    }

    #[test]
    fn single_recipient_field_appears_alone() {
        let mut options = PromptOptions::default();
        options.recipient_name = "김민수".to_string();
        assert!(build_prompt(&options).contains("김민수에게 보내는"));

        let mut options = PromptOptions::default();
        options.recipient_title = "과장님".to_string();
        assert!(build_prompt(&options).contains("과장님에게 보내는"));
    }

    #[test]
    fn blank_deadline_and_deliverable_emit_no_line() {
        let prompt = build_prompt(&PromptOptions::default());
        assert!(!prompt.contains("희망 일정/마감"));
        assert!(!prompt.contains("요청 산출물/자료"));

        let mut options = PromptOptions::default();
        options.deadline = "   ".to_string();
        options.deliverable = "\t".to_string();
        let prompt = build_prompt(&options);
        assert!(!prompt.contains("희망 일정/마감"));
        assert!(!prompt.contains("요청 산출물/자료"));
    }

    #[test]
    fn deadline_and_deliverable_lines_carry_the_trimmed_text() {
        let mut options = PromptOptions::default();
        options.deadline = " 오늘 5시 ".to_string();
        options.deliverable = "빌드 결과".to_string();
        let prompt = build_prompt(&options);
        assert!(prompt.contains("- 희망 일정/마감: 오늘 5시\n"));
        assert!(prompt.contains("- 요청 산출물/자료: 빌드 결과\n"));
    }

    #[test]
    fn no_flags_and_no_customs_yield_the_fixed_no_requirements_line() {
        let mut options = PromptOptions::default();
        options.requirements = RequirementFlags::none();
        let prompt = build_prompt(&options);
        assert!(prompt.contains("[요구사항]\n- 별도 요구사항 없음\n"));
        assert_eq!(requirement_section(&prompt), vec!["- 별도 요구사항 없음"]);
    }

    #[test]
    fn all_flags_plus_one_custom_yield_nine_bullets_with_custom_last() {
        let mut options = PromptOptions::default();
        options.custom_requirements = vec!["회신은 내일까지".to_string()];
        let prompt = build_prompt(&options);

        let bullets = requirement_section(&prompt);
        assert_eq!(bullets.len(), 9);
        assert_eq!(bullets[8], "- 회신은 내일까지");
    }

    #[test]
    fn fixed_bullets_follow_emit_order_not_display_order() {
        let prompt = build_prompt(&PromptOptions::default());
        let bullets = requirement_section(&prompt);
        let expected: Vec<String> = RequirementKey::EMIT_ORDER
            .into_iter()
            .map(|key| format!("- {}", key.prompt_line()))
            .collect();
        assert_eq!(bullets, expected);
        assert_eq!(bullets[7], "- 이메일 제목(Subject)과 본문을 모두 작성할 것");
    }

    #[test]
    fn blank_custom_requirements_are_skipped() {
        let mut options = PromptOptions::default();
        options.requirements = RequirementFlags::none();
        options.custom_requirements =
            vec!["".to_string(), "  ".to_string(), " 첨부 자료 포함 ".to_string()];
        let prompt = build_prompt(&options);
        assert_eq!(requirement_section(&prompt), vec!["- 첨부 자료 포함"]);
    }

    #[test]
    fn identical_input_renders_byte_identical_output() {
        let mut options = PromptOptions::default();
        options.context = "지연 안내 메일".to_string();
        options.deadline = "이번 주 금요일".to_string();
        options.custom_requirements = vec!["회신은 내일까지".to_string()];
        assert_eq!(build_prompt(&options), build_prompt(&options));
    }

    proptest! {
        #[test]
        fn every_enum_combination_renders_all_labels(
            p in 0..Purpose::ALL.len(),
            t in 0..Tone::ALL.len(),
            l in 0..Length::ALL.len(),
            a in 0..Audience::ALL.len(),
            s in 0..SubjectStyle::ALL.len(),
        ) {
            let options = PromptOptions {
                purpose: Purpose::ALL[p],
                tone: Tone::ALL[t],
                length: Length::ALL[l],
                audience: Audience::ALL[a],
                subject_style: SubjectStyle::ALL[s],
                context: "일정 확인".to_string(),
                ..PromptOptions::default()
            };
            let prompt = build_prompt(&options);
            prop_assert!(!prompt.is_empty());
            prop_assert!(prompt.contains(&format!("- 목적: {}", options.purpose.label())), "purpose label missing");
            prop_assert!(prompt.contains(&format!("- 대상 유형: {}", options.audience.label())), "audience label missing");
            prop_assert!(prompt.contains(&format!("- 톤: {}", options.tone.label())), "tone label missing");
            prop_assert!(prompt.contains(&format!("- 길이: {}", options.length.label())), "length label missing");
            prop_assert!(prompt.contains(&format!("- Subject 유형: {}", options.subject_style.label())), "subject style label missing");
        }
    }
}
