//! The operation catalog: one declarative [`ToolDef`] per upstream endpoint.
//!
//! Grouped by Alpha Vantage API category. Shared parameter specs live here;
//! each category module exposes a `TOOLS` table and everything is stitched
//! together by [`all`].

use super::schema::{ParamKind, ParamSpec, ToolDef};

mod commodities;
mod core_stock;
mod crypto;
mod economic;
mod forex;
mod fundamentals;
mod indicators;
mod intelligence;
mod options;

/// Ticker symbol, required by most equity endpoints.
pub(crate) const SYMBOL: ParamSpec = ParamSpec::required("symbol", ParamKind::Str);

/// Sampling interval, required by time-series endpoints.
pub(crate) const INTERVAL: ParamSpec = ParamSpec::required("interval", ParamKind::Str);

/// Response format switch; the upstream default is structured JSON.
pub(crate) const DATATYPE: ParamSpec = ParamSpec::with_default("datatype", ParamKind::Str, "json");

/// Output size; defaults to the compact (latest 100 points) mode.
pub(crate) const OUTPUTSIZE: ParamSpec =
    ParamSpec::with_default("outputsize", ParamKind::Str, "compact");

/// Optional YYYY-MM month filter for intraday history.
pub(crate) const MONTH: ParamSpec = ParamSpec::optional("month", ParamKind::Str);

/// All category tables, in the order they are advertised.
const CATEGORIES: &[&[ToolDef]] = &[
    core_stock::TOOLS,
    options::TOOLS,
    intelligence::TOOLS,
    fundamentals::TOOLS,
    forex::TOOLS,
    crypto::TOOLS,
    commodities::TOOLS,
    economic::TOOLS,
    indicators::TOOLS,
];

/// Iterate over every operation descriptor in the catalog.
pub fn all() -> impl Iterator<Item = &'static ToolDef> {
    CATEGORIES.iter().flat_map(|category| category.iter())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::schema::ResponseKind;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_size() {
        assert_eq!(all().count(), 113);
    }

    #[test]
    fn test_tool_names_unique() {
        let mut seen = HashSet::new();
        for def in all() {
            assert!(seen.insert(def.name), "duplicate tool name: {}", def.name);
        }
    }

    #[test]
    fn test_descriptor_well_formed() {
        for def in all() {
            assert!(!def.description.is_empty(), "{} has no description", def.name);
            assert!(!def.function.is_empty(), "{} has no function", def.name);

            let mut param_names = HashSet::new();
            for p in def.params {
                assert!(
                    param_names.insert(p.name),
                    "{} declares parameter {} twice",
                    def.name,
                    p.name
                );
                assert!(
                    !(p.required && p.default.is_some()),
                    "{}.{} is required but carries a default",
                    def.name,
                    p.name
                );
            }
        }
    }

    #[test]
    fn test_datatype_always_defaults_to_json() {
        for def in all() {
            if let Some(p) = def.param("datatype") {
                assert_eq!(p.default, Some("json"), "{} datatype default", def.name);
                assert_eq!(def.response, ResponseKind::ByDatatype, "{}", def.name);
            }
        }
    }

    #[test]
    fn test_digital_currency_weekly_uses_weekly_function() {
        let def = all().find(|d| d.name == "digital_currency_weekly").unwrap();
        assert_eq!(def.function, "DIGITAL_CURRENCY_WEEKLY");
    }

    #[test]
    fn test_tema_present() {
        assert!(all().any(|d| d.name == "tema" && d.function == "TEMA"));
    }
}
