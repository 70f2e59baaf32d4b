//! Prompt registry: one guided prompt per catalog operation.
//!
//! Rather than maintaining a hand-written prompt list that drifts out of
//! sync with the tool surface, prompts are derived from the tool catalog.
//! Each prompt names the tool it fronts, takes the tool's required
//! parameters as its arguments, and renders a one-line request. A few
//! frequently used prompts carry curated wording instead of the generated
//! one.

use rmcp::model::PromptArgument;

use super::templates::PromptTemplate;
use crate::domains::tools::{ToolDef, catalog};

/// Build the full prompt list from the tool catalog.
pub fn get_all_prompts() -> Vec<PromptTemplate> {
    catalog::all()
        .map(|def| curated(def.name).unwrap_or_else(|| derive_template(def)))
        .collect()
}

/// Derive the default prompt for one tool.
fn derive_template(def: &'static ToolDef) -> PromptTemplate {
    let arguments: Vec<PromptArgument> = def
        .params
        .iter()
        .filter(|p| p.required)
        .map(|p| PromptArgument {
            name: p.name.to_string(),
            title: None,
            description: Some(format!("Value for the '{}' parameter", p.name)),
            required: Some(true),
        })
        .collect();

    let mut template = def.description.to_string();
    for (i, arg) in arguments.iter().enumerate() {
        let connector = if i == 0 { " for" } else { " and" };
        template.push_str(&format!(
            "{connector} {} {{{{{}}}}}",
            arg.name.replace('_', " "),
            arg.name
        ));
    }
    template.push('.');

    PromptTemplate::new(def.name, Some(def.description.to_string()), arguments, template)
}

/// Curated wording for the most commonly used prompts.
fn curated(name: &str) -> Option<PromptTemplate> {
    let template = match name {
        "stock_quote" => PromptTemplate::new(
            "stock_quote",
            Some("Fetch a stock quote".to_string()),
            vec![required_arg("symbol", "Ticker symbol, e.g. IBM")],
            "Fetch the latest quote for {{symbol}} and summarize the price, \
             change, and volume.",
        ),
        "time_series_daily" => PromptTemplate::new(
            "time_series_daily",
            Some("Fetch daily time series".to_string()),
            vec![required_arg("symbol", "Ticker symbol, e.g. IBM")],
            "Fetch the daily time series for {{symbol}} and describe the \
             recent trend.",
        ),
        "company_overview" => PromptTemplate::new(
            "company_overview",
            Some("Fetch company overview".to_string()),
            vec![required_arg("symbol", "Ticker symbol, e.g. IBM")],
            "Fetch the company overview for {{symbol}} and highlight the key \
             fundamentals.",
        ),
        "news_sentiment" => PromptTemplate::new(
            "news_sentiment",
            Some("Fetch news sentiment".to_string()),
            vec![required_arg("tickers", "Ticker symbols to cover")],
            "Fetch news and sentiment for {{tickers}} and summarize the \
             overall tone.",
        ),
        _ => return None,
    };
    Some(template)
}

fn required_arg(name: &str, description: &str) -> PromptArgument {
    PromptArgument {
        name: name.to_string(),
        title: None,
        description: Some(description.to_string()),
        required: Some(true),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_prompt_per_tool() {
        let prompts = get_all_prompts();
        assert_eq!(prompts.len(), catalog::all().count());

        for (prompt, def) in prompts.iter().zip(catalog::all()) {
            assert_eq!(prompt.name, def.name);
        }
    }

    #[test]
    fn test_prompt_arguments_are_tool_parameters() {
        for prompt in get_all_prompts() {
            let def = catalog::all().find(|d| d.name == prompt.name).unwrap();
            for arg in &prompt.arguments {
                let param = def.param(&arg.name).unwrap_or_else(|| {
                    panic!("prompt {} takes unknown argument {}", prompt.name, arg.name)
                });
                assert!(param.required, "{}.{} should be required", prompt.name, arg.name);
            }
        }
    }

    #[test]
    fn test_derived_template_mentions_every_argument() {
        for prompt in get_all_prompts() {
            for arg in &prompt.arguments {
                assert!(
                    prompt.template.contains(&format!("{{{{{}}}}}", arg.name)),
                    "prompt {} template omits {}",
                    prompt.name,
                    arg.name
                );
            }
        }
    }

    #[test]
    fn test_zero_argument_tools_get_plain_prompts() {
        let prompts = get_all_prompts();
        let movers = prompts.iter().find(|p| p.name == "top_gainers_losers").unwrap();
        assert!(movers.arguments.is_empty());
        assert!(!movers.template.contains("{{"));
    }
}
