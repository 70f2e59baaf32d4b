//! Commodity price endpoints.
//!
//! Every commodity series shares the same shape: an optional sampling
//! interval that falls back to monthly, plus the datatype switch.

use super::DATATYPE;
use crate::domains::tools::schema::{ParamKind, ParamSpec, ToolDef};

const INTERVAL_MONTHLY: ParamSpec =
    ParamSpec::with_default("interval", ParamKind::Str, "monthly");

const COMMODITY: &[ParamSpec] = &[INTERVAL_MONTHLY, DATATYPE];

pub const TOOLS: &[ToolDef] = &[
    ToolDef::new("wti_crude_oil", "Fetch WTI crude oil prices", "WTI", COMMODITY),
    ToolDef::new("brent_crude_oil", "Fetch Brent crude oil prices", "BRENT", COMMODITY),
    ToolDef::new("natural_gas", "Fetch natural gas prices", "NATURAL_GAS", COMMODITY),
    ToolDef::new("copper", "Fetch copper prices", "COPPER", COMMODITY),
    ToolDef::new("aluminum", "Fetch aluminum prices", "ALUMINUM", COMMODITY),
    ToolDef::new("wheat", "Fetch wheat prices", "WHEAT", COMMODITY),
    ToolDef::new("corn", "Fetch corn prices", "CORN", COMMODITY),
    ToolDef::new("cotton", "Fetch cotton prices", "COTTON", COMMODITY),
    ToolDef::new("sugar", "Fetch sugar prices", "SUGAR", COMMODITY),
    ToolDef::new("coffee", "Fetch coffee prices", "COFFEE", COMMODITY),
    ToolDef::new(
        "all_commodities",
        "Fetch the global commodities index",
        "ALL_COMMODITIES",
        COMMODITY,
    ),
];
