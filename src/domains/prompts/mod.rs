//! Prompts domain module.
//!
//! Guided prompts fronting the tool catalog. The registry derives one
//! prompt per tool, the service lists and renders them, and the template
//! engine handles `{{variable}}` substitution.

mod error;
mod registry;
mod service;
pub mod templates;

pub use error::PromptError;
pub use registry::get_all_prompts;
pub use service::PromptService;
pub use templates::PromptTemplate;
