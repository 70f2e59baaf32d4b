//! Fundamental data endpoints: company facts, statements, and calendars.
//!
//! The calendar and listing endpoints only serve delimited text, so they
//! are declared with [`ToolDef::csv`].

use super::SYMBOL;
use crate::domains::tools::schema::{ParamKind, ParamSpec, ToolDef};

const BY_SYMBOL: &[ParamSpec] = &[SYMBOL];

pub const TOOLS: &[ToolDef] = &[
    ToolDef::new(
        "company_overview",
        "Fetch company overview",
        "OVERVIEW",
        BY_SYMBOL,
    ),
    ToolDef::new("etf_profile", "Fetch ETF profile", "ETF_PROFILE", BY_SYMBOL),
    ToolDef::new(
        "company_dividends",
        "Fetch company dividends",
        "DIVIDENDS",
        BY_SYMBOL,
    ),
    ToolDef::new("company_splits", "Fetch company splits", "SPLITS", BY_SYMBOL),
    ToolDef::new(
        "income_statement",
        "Fetch company income statement",
        "INCOME_STATEMENT",
        BY_SYMBOL,
    ),
    ToolDef::new(
        "balance_sheet",
        "Fetch company balance sheet",
        "BALANCE_SHEET",
        BY_SYMBOL,
    ),
    ToolDef::new("cash_flow", "Fetch company cash flow", "CASH_FLOW", BY_SYMBOL),
    ToolDef::new(
        "company_earnings",
        "Fetch annual and quarterly earnings (EPS)",
        "EARNINGS",
        BY_SYMBOL,
    ),
    ToolDef::new(
        "earnings_call_transcript",
        "Fetch the earnings call transcript for a company in a specific quarter",
        "EARNINGS_CALL_TRANSCRIPT",
        &[SYMBOL, ParamSpec::required("quarter", ParamKind::Str)],
    ),
    ToolDef::csv(
        "listing_status",
        "Fetch listing status",
        "LISTING_STATUS",
        &[
            ParamSpec::optional("date", ParamKind::Str),
            ParamSpec::with_default("state", ParamKind::Str, "active"),
        ],
    ),
    ToolDef::csv(
        "earnings_calendar",
        "Fetch company earnings calendar",
        "EARNINGS_CALENDAR",
        &[
            ParamSpec::optional("symbol", ParamKind::Str),
            ParamSpec::with_default("horizon", ParamKind::Str, "3month"),
        ],
    ),
    ToolDef::csv("ipo_calendar", "Fetch IPO calendar", "IPO_CALENDAR", &[]),
];
