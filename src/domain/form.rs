use super::build_prompt;
use super::catalog::{Audience, Length, Purpose, SubjectStyle, Tone};
use super::options::PromptOptions;
use super::requirement::{RequirementFlags, RequirementKey};

/// Mutable local state behind the interactive form.
///
/// Holds the same fields the options record snapshots; every change is an
/// explicit setter and [`PromptForm::options`] rebuilds a fresh record, so
/// renders never observe partially applied edits.
#[derive(Debug, Clone, Default)]
pub struct PromptForm {
    purpose: Purpose,
    tone: Tone,
    length: Length,
    audience: Audience,
    subject_style: SubjectStyle,
    recipient_name: String,
    recipient_title: String,
    deadline: String,
    deliverable: String,
    context: String,
    requirements: RequirementFlags,
    custom_requirements: Vec<String>,
}

impl PromptForm {
    /// Create a form seeded with the default selections.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_purpose(&mut self, purpose: Purpose) {
        self.purpose = purpose;
    }

    pub fn set_tone(&mut self, tone: Tone) {
        self.tone = tone;
    }

    pub fn set_length(&mut self, length: Length) {
        self.length = length;
    }

    pub fn set_audience(&mut self, audience: Audience) {
        self.audience = audience;
    }

    pub fn set_subject_style(&mut self, subject_style: SubjectStyle) {
        self.subject_style = subject_style;
    }

    pub fn set_recipient_name<S: Into<String>>(&mut self, value: S) {
        self.recipient_name = value.into();
    }

    pub fn set_recipient_title<S: Into<String>>(&mut self, value: S) {
        self.recipient_title = value.into();
    }

    pub fn set_deadline<S: Into<String>>(&mut self, value: S) {
        self.deadline = value.into();
    }

    pub fn set_deliverable<S: Into<String>>(&mut self, value: S) {
        self.deliverable = value.into();
    }

    pub fn set_context<S: Into<String>>(&mut self, value: S) {
        self.context = value.into();
    }

    /// Reset the situation text.
    pub fn clear_context(&mut self) {
        self.context.clear();
    }

    /// Toggle a single requirement checkbox.
    pub fn set_requirement(&mut self, key: RequirementKey, on: bool) {
        self.requirements.set(key, on);
    }

    /// Enable every requirement flag.
    pub fn select_all_requirements(&mut self) {
        self.requirements.select_all();
    }

    /// Disable every requirement flag and drop the custom entries too.
    pub fn clear_all_requirements(&mut self) {
        self.requirements.clear_all();
        self.custom_requirements.clear();
    }

    /// Append a custom requirement line.
    ///
    /// The entry is trimmed; whitespace-only input is ignored. Returns
    /// whether the entry was added.
    pub fn add_custom_requirement(&mut self, text: &str) -> bool {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return false;
        }
        self.custom_requirements.push(trimmed.to_string());
        true
    }

    /// Remove a custom requirement by index, returning it if it existed.
    pub fn remove_custom_requirement(&mut self, index: usize) -> Option<String> {
        if index < self.custom_requirements.len() {
            Some(self.custom_requirements.remove(index))
        } else {
            None
        }
    }

    pub fn requirements(&self) -> &RequirementFlags {
        &self.requirements
    }

    pub fn custom_requirements(&self) -> &[String] {
        &self.custom_requirements
    }

    /// Snapshot the current state into a fresh options record.
    pub fn options(&self) -> PromptOptions {
        PromptOptions {
            purpose: self.purpose,
            tone: self.tone,
            length: self.length,
            audience: self.audience,
            subject_style: self.subject_style,
            recipient_name: self.recipient_name.clone(),
            recipient_title: self.recipient_title.clone(),
            deadline: self.deadline.clone(),
            deliverable: self.deliverable.clone(),
            context: self.context.clone(),
            requirements: self.requirements.clone(),
            custom_requirements: self.custom_requirements.clone(),
        }
    }

    /// Render the prompt for the current state.
    pub fn render(&self) -> String {
        build_prompt(&self.options())
    }
}
