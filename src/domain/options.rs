use serde::{Deserialize, Serialize};

use super::catalog::{Audience, Length, Purpose, SubjectStyle, Tone};
use super::requirement::RequirementFlags;

/// The complete set of form selections and text fields for one render.
///
/// Transient: constructed fresh from the current form state every time any
/// field changes and handed to [`build_prompt`](super::build_prompt). Free
/// text fields represent absence as the empty (or whitespace-only) string.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptOptions {
    pub purpose: Purpose,
    pub tone: Tone,
    pub length: Length,
    pub audience: Audience,
    pub subject_style: SubjectStyle,

    #[serde(default)]
    pub recipient_name: String,
    #[serde(default)]
    pub recipient_title: String,
    #[serde(default)]
    pub deadline: String,
    #[serde(default)]
    pub deliverable: String,
    #[serde(default)]
    pub context: String,

    #[serde(default)]
    pub requirements: RequirementFlags,
    #[serde(default)]
    pub custom_requirements: Vec<String>,
}
