//! Alpha Intelligence endpoints: news, movers, insiders, and analytics.

use super::{DATATYPE, SYMBOL};
use crate::domains::tools::schema::{ParamKind, ParamSpec, ToolDef};

const NEWS: &[ParamSpec] = &[
    ParamSpec::required("tickers", ParamKind::List),
    ParamSpec::optional("topics", ParamKind::List),
    ParamSpec::optional("time_from", ParamKind::Str),
    ParamSpec::optional("time_to", ParamKind::Str),
    ParamSpec::with_default("sort", ParamKind::Str, "LATEST"),
    ParamSpec::with_default("limit", ParamKind::Int, "50"),
    DATATYPE,
];

// The analytics endpoints take uppercase query keys.
const ANALYTICS_FIXED: &[ParamSpec] = &[
    ParamSpec::required("symbols", ParamKind::SymbolList).upstream("SYMBOLS"),
    ParamSpec::required("series_range", ParamKind::Str).upstream("RANGE"),
    ParamSpec::required("interval", ParamKind::Str).upstream("INTERVAL"),
    ParamSpec::with_default("ohlc", ParamKind::Str, "close").upstream("OHLC"),
    ParamSpec::required("calculations", ParamKind::List).upstream("CALCULATIONS"),
];

const ANALYTICS_SLIDING: &[ParamSpec] = &[
    ParamSpec::required("symbols", ParamKind::SymbolList).upstream("SYMBOLS"),
    ParamSpec::required("series_range", ParamKind::Str).upstream("RANGE"),
    ParamSpec::required("interval", ParamKind::Str).upstream("INTERVAL"),
    ParamSpec::with_default("ohlc", ParamKind::Str, "close").upstream("OHLC"),
    ParamSpec::required("window_size", ParamKind::Int).upstream("WINDOW_SIZE"),
    ParamSpec::required("calculations", ParamKind::List).upstream("CALCULATIONS"),
];

pub const TOOLS: &[ToolDef] = &[
    ToolDef::new(
        "news_sentiment",
        "Fetch news sentiment",
        "NEWS_SENTIMENT",
        NEWS,
    ),
    ToolDef::new(
        "top_gainers_losers",
        "Fetch top gainers and losers",
        "TOP_GAINERS_LOSERS",
        &[],
    ),
    ToolDef::new(
        "insider_transactions",
        "Fetch insider transactions",
        "INSIDER_TRANSACTIONS",
        &[SYMBOL],
    ),
    ToolDef::new(
        "analytics_fixed_window",
        "Fetch analytics fixed window",
        "ANALYTICS_FIXED_WINDOW",
        ANALYTICS_FIXED,
    ),
    ToolDef::new(
        "analytics_sliding_window",
        "Fetch analytics sliding window",
        "ANALYTICS_SLIDING_WINDOW",
        ANALYTICS_SLIDING,
    ),
];
