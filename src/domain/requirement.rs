use serde::{Deserialize, Serialize};

/// A named stylistic requirement toggle.
///
/// Each key controls whether one fixed instruction line appears in the
/// generated prompt's requirement section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RequirementKey {
    #[serde(rename = "collaborative")]
    Collaborative,
    #[serde(rename = "noPressure")]
    NoPressure,
    #[serde(rename = "clearAsk")]
    ClearAsk,
    #[serde(rename = "includeSubjectBody")]
    IncludeSubjectBody,
    #[serde(rename = "includeDeadline")]
    IncludeDeadline,
    #[serde(rename = "includeNextStep")]
    IncludeNextStep,
    #[serde(rename = "includeThanks")]
    IncludeThanks,
    #[serde(rename = "includeBullets")]
    IncludeBullets,
}

impl RequirementKey {
    /// Checklist order shown by the wizard and the catalog.
    pub const DISPLAY_ORDER: [RequirementKey; 8] = [
        RequirementKey::Collaborative,
        RequirementKey::NoPressure,
        RequirementKey::ClearAsk,
        RequirementKey::IncludeSubjectBody,
        RequirementKey::IncludeDeadline,
        RequirementKey::IncludeNextStep,
        RequirementKey::IncludeThanks,
        RequirementKey::IncludeBullets,
    ];

    /// Order the builder walks when emitting bullet lines.
    ///
    /// Differs from `DISPLAY_ORDER` and is part of the output contract:
    /// the subject/body line is emitted last among the fixed bullets.
    pub const EMIT_ORDER: [RequirementKey; 8] = [
        RequirementKey::Collaborative,
        RequirementKey::NoPressure,
        RequirementKey::ClearAsk,
        RequirementKey::IncludeDeadline,
        RequirementKey::IncludeNextStep,
        RequirementKey::IncludeThanks,
        RequirementKey::IncludeBullets,
        RequirementKey::IncludeSubjectBody,
    ];

    /// Stable camelCase identifier, as used in serialized records.
    pub fn key(&self) -> &'static str {
        match self {
            RequirementKey::Collaborative => "collaborative",
            RequirementKey::NoPressure => "noPressure",
            RequirementKey::ClearAsk => "clearAsk",
            RequirementKey::IncludeSubjectBody => "includeSubjectBody",
            RequirementKey::IncludeDeadline => "includeDeadline",
            RequirementKey::IncludeNextStep => "includeNextStep",
            RequirementKey::IncludeThanks => "includeThanks",
            RequirementKey::IncludeBullets => "includeBullets",
        }
    }

    /// Short Korean label shown next to the wizard checkbox.
    pub fn checklist_label(&self) -> &'static str {
        match self {
            RequirementKey::Collaborative => "협업적인 톤을 유지",
            RequirementKey::NoPressure => "재촉/압박 표현은 피함",
            RequirementKey::ClearAsk => "핵심 요청/확인 사항이 분명하게",
            RequirementKey::IncludeSubjectBody => "제목(Subject)과 본문 모두 작성",
            RequirementKey::IncludeDeadline => "가능하면 희망 일정/마감 포함",
            RequirementKey::IncludeNextStep => "다음 액션(Next step) 포함",
            RequirementKey::IncludeThanks => "감사 표현 포함",
            RequirementKey::IncludeBullets => "요청 사항은 불릿으로 정리",
        }
    }

    /// Full instruction sentence emitted as a bullet when the flag is on.
    pub fn prompt_line(&self) -> &'static str {
        match self {
            RequirementKey::Collaborative => "협업적인 톤을 유지할 것",
            RequirementKey::NoPressure => "상대를 압박하거나 재촉하는 표현은 피할 것",
            RequirementKey::ClearAsk => "핵심 요청/확인 사항이 분명히 드러나게 할 것",
            RequirementKey::IncludeSubjectBody => "이메일 제목(Subject)과 본문을 모두 작성할 것",
            RequirementKey::IncludeDeadline => "가능하다면 희망 일정/마감을 자연스럽게 포함할 것",
            RequirementKey::IncludeNextStep => "다음 액션(누가 무엇을 할지)을 포함할 것",
            RequirementKey::IncludeThanks => "감사 표현을 자연스럽게 포함할 것",
            RequirementKey::IncludeBullets => "요청/확인 항목은 불릿으로 정리할 것",
        }
    }

    /// Parse a key from its camelCase, kebab-case, or snake_case spelling.
    pub fn from_input(input: &str) -> Option<RequirementKey> {
        let normalized: String = input
            .trim()
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .collect::<String>()
            .to_ascii_lowercase();
        RequirementKey::DISPLAY_ORDER
            .into_iter()
            .find(|key| key.key().to_ascii_lowercase() == normalized)
    }
}

/// Independently toggleable requirement flags, one per [`RequirementKey`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequirementFlags {
    pub collaborative: bool,
    pub no_pressure: bool,
    pub clear_ask: bool,
    pub include_subject_body: bool,
    pub include_deadline: bool,
    pub include_next_step: bool,
    pub include_thanks: bool,
    pub include_bullets: bool,
}

impl Default for RequirementFlags {
    /// Every checklist entry starts enabled.
    fn default() -> Self {
        Self {
            collaborative: true,
            no_pressure: true,
            clear_ask: true,
            include_subject_body: true,
            include_deadline: true,
            include_next_step: true,
            include_thanks: true,
            include_bullets: true,
        }
    }
}

impl RequirementFlags {
    /// Flags with every entry disabled.
    pub fn none() -> Self {
        Self {
            collaborative: false,
            no_pressure: false,
            clear_ask: false,
            include_subject_body: false,
            include_deadline: false,
            include_next_step: false,
            include_thanks: false,
            include_bullets: false,
        }
    }

    /// Toggle a single flag.
    pub fn set(&mut self, key: RequirementKey, on: bool) {
        match key {
            RequirementKey::Collaborative => self.collaborative = on,
            RequirementKey::NoPressure => self.no_pressure = on,
            RequirementKey::ClearAsk => self.clear_ask = on,
            RequirementKey::IncludeSubjectBody => self.include_subject_body = on,
            RequirementKey::IncludeDeadline => self.include_deadline = on,
            RequirementKey::IncludeNextStep => self.include_next_step = on,
            RequirementKey::IncludeThanks => self.include_thanks = on,
            RequirementKey::IncludeBullets => self.include_bullets = on,
        }
    }

    /// Whether a flag is enabled.
    pub fn is_on(&self, key: RequirementKey) -> bool {
        match key {
            RequirementKey::Collaborative => self.collaborative,
            RequirementKey::NoPressure => self.no_pressure,
            RequirementKey::ClearAsk => self.clear_ask,
            RequirementKey::IncludeSubjectBody => self.include_subject_body,
            RequirementKey::IncludeDeadline => self.include_deadline,
            RequirementKey::IncludeNextStep => self.include_next_step,
            RequirementKey::IncludeThanks => self.include_thanks,
            RequirementKey::IncludeBullets => self.include_bullets,
        }
    }

    /// Enable every flag.
    pub fn select_all(&mut self) {
        *self = Self::default();
    }

    /// Disable every flag.
    pub fn clear_all(&mut self) {
        *self = Self::none();
    }
}
