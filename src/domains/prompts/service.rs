//! Prompt service implementation.
//!
//! The PromptService owns the derived prompt registry and handles listing
//! and argument substitution. Adding a tool to the catalog automatically
//! adds its prompt here.

use rmcp::model::{GetPromptResult, Prompt, PromptMessage, PromptMessageRole};
use std::collections::HashMap;
use tracing::info;

use super::error::PromptError;
use super::registry::get_all_prompts;
use super::templates::PromptTemplate;

/// Service for managing and instantiating prompts.
pub struct PromptService {
    /// Registry of available prompts, keyed by prompt name.
    prompts: HashMap<String, PromptTemplate>,
}

impl PromptService {
    /// Create the service and populate it from the derived registry.
    pub fn new() -> Self {
        let prompts: HashMap<_, _> = get_all_prompts()
            .into_iter()
            .map(|template| (template.name.clone(), template))
            .collect();
        info!(prompts = prompts.len(), "prompt service initialized");

        Self { prompts }
    }

    /// List all available prompts.
    pub fn list_prompts(&self) -> Vec<Prompt> {
        let mut templates: Vec<_> = self.prompts.values().collect();
        templates.sort_by(|a, b| a.name.cmp(&b.name));
        templates
            .into_iter()
            .map(|template| Prompt {
                name: template.name.clone(),
                title: None,
                description: template.description.clone(),
                arguments: Some(template.arguments.clone()),
                icons: None,
                meta: None,
            })
            .collect()
    }

    /// Get a prompt with arguments substituted.
    pub fn get_prompt(
        &self,
        name: &str,
        arguments: Option<HashMap<String, String>>,
    ) -> Result<GetPromptResult, PromptError> {
        let template = self
            .prompts
            .get(name)
            .ok_or_else(|| PromptError::not_found(name))?;

        let arguments = arguments.unwrap_or_default();

        for arg in &template.arguments {
            if arg.required.unwrap_or(false) && !arguments.contains_key(&arg.name) {
                return Err(PromptError::missing_argument(&arg.name));
            }
        }

        let content = template.render(&arguments)?;

        Ok(GetPromptResult {
            description: template.description.clone(),
            messages: vec![PromptMessage::new_text(PromptMessageRole::User, content)],
        })
    }
}

impl Default for PromptService {
    fn default() -> Self {
        Self::new()
    }
}
