//! Prompt template rendering.
//!
//! Templates use a simple `{{variable}}` substitution syntax. Unmatched
//! placeholders (optional arguments the caller omitted) are removed from
//! the rendered output.

use rmcp::model::PromptArgument;
use std::collections::HashMap;

use super::error::PromptError;

/// A prompt template that can be instantiated with arguments.
#[derive(Debug, Clone)]
pub struct PromptTemplate {
    /// The unique name of the prompt.
    pub name: String,

    /// A description of what the prompt does.
    pub description: Option<String>,

    /// The arguments that this prompt accepts.
    pub arguments: Vec<PromptArgument>,

    /// The template string with `{{variable}}` placeholders.
    pub template: String,
}

impl PromptTemplate {
    /// Create a new prompt template.
    pub fn new(
        name: impl Into<String>,
        description: Option<String>,
        arguments: Vec<PromptArgument>,
        template: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description,
            arguments,
            template: template.into(),
        }
    }

    /// Render the template with the given arguments.
    pub fn render(&self, arguments: &HashMap<String, String>) -> Result<String, PromptError> {
        let mut result = self.template.clone();

        for (key, value) in arguments {
            let placeholder = format!("{{{{{}}}}}", key);
            result = result.replace(&placeholder, value);
        }

        Ok(clean_unmatched_placeholders(&result))
    }
}

/// Remove any placeholders left unsubstituted.
fn clean_unmatched_placeholders(template: &str) -> String {
    let mut result = template.to_string();

    while let Some(pos) = result.find("{{") {
        if let Some(end) = result[pos..].find("}}") {
            result = format!("{}{}", &result[..pos], &result[pos + end + 2..]);
        } else {
            break;
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_substitution() {
        let template = PromptTemplate::new("test", None, vec![], "Quote for {{symbol}}, please.");

        let mut args = HashMap::new();
        args.insert("symbol".to_string(), "IBM".to_string());

        let result = template.render(&args).unwrap();
        assert_eq!(result, "Quote for IBM, please.");
    }

    #[test]
    fn test_unmatched_placeholder_removed() {
        let template = PromptTemplate::new("test", None, vec![], "Series for {{symbol}}{{month}}.");

        let mut args = HashMap::new();
        args.insert("symbol".to_string(), "IBM".to_string());

        let result = template.render(&args).unwrap();
        assert_eq!(result, "Series for IBM.");
    }

    #[test]
    fn test_extra_arguments_ignored() {
        let template = PromptTemplate::new("test", None, vec![], "Hello {{name}}");

        let mut args = HashMap::new();
        args.insert("name".to_string(), "there".to_string());
        args.insert("unused".to_string(), "X".to_string());

        let result = template.render(&args).unwrap();
        assert_eq!(result, "Hello there");
    }
}
