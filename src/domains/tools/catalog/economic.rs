//! US economic indicator endpoints.

use super::DATATYPE;
use crate::domains::tools::schema::{ParamKind, ParamSpec, ToolDef};

const INTERVAL_MONTHLY: ParamSpec =
    ParamSpec::with_default("interval", ParamKind::Str, "monthly");

const WITH_INTERVAL: &[ParamSpec] = &[INTERVAL_MONTHLY, DATATYPE];
const PLAIN: &[ParamSpec] = &[DATATYPE];

pub const TOOLS: &[ToolDef] = &[
    ToolDef::new("real_gdp", "Fetch real GDP data", "REAL_GDP", WITH_INTERVAL),
    ToolDef::new(
        "real_gdp_per_capita",
        "Fetch real GDP per capita data",
        "REAL_GDP_PER_CAPITA",
        PLAIN,
    ),
    ToolDef::new(
        "treasury_yield",
        "Fetch treasury yield data",
        "TREASURY_YIELD",
        &[
            INTERVAL_MONTHLY,
            ParamSpec::with_default("maturity", ParamKind::Str, "10year"),
            DATATYPE,
        ],
    ),
    ToolDef::new(
        "federal_funds_rate",
        "Fetch the federal funds rate",
        "FEDERAL_FUNDS_RATE",
        WITH_INTERVAL,
    ),
    ToolDef::new("cpi", "Fetch consumer price index data", "CPI", WITH_INTERVAL),
    ToolDef::new("inflation", "Fetch annual inflation data", "INFLATION", PLAIN),
    ToolDef::new("retail_sales", "Fetch retail sales data", "RETAIL_SALES", PLAIN),
    ToolDef::new("durables", "Fetch durable goods orders", "DURABLES", PLAIN),
    ToolDef::new("unemployment", "Fetch the unemployment rate", "UNEMPLOYMENT", PLAIN),
    ToolDef::new(
        "nonfarm_payroll",
        "Fetch nonfarm payroll data",
        "NONFARM_PAYROLL",
        PLAIN,
    ),
];
