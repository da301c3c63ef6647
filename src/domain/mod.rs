mod builder;
mod catalog;
mod error;
mod form;
mod options;
mod requirement;

pub use builder::build_prompt;
pub use catalog::{Audience, Length, Purpose, SubjectStyle, Tone};
pub use error::AppError;
pub use form::PromptForm;
pub use options::PromptOptions;
pub use requirement::{RequirementFlags, RequirementKey};
