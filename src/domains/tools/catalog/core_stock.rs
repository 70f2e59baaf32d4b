//! Core stock API endpoints: quotes, time series, and symbol search.

use super::{DATATYPE, INTERVAL, MONTH, OUTPUTSIZE, SYMBOL};
use crate::domains::tools::schema::{ParamKind, ParamSpec, ToolDef};

const QUOTE: &[ParamSpec] = &[SYMBOL, DATATYPE];

const INTRADAY: &[ParamSpec] = &[
    SYMBOL,
    INTERVAL,
    ParamSpec::with_default("adjusted", ParamKind::Bool, "true"),
    ParamSpec::with_default("extended_hours", ParamKind::Bool, "true"),
    OUTPUTSIZE,
    DATATYPE,
    MONTH,
];

const DAILY: &[ParamSpec] = &[SYMBOL, OUTPUTSIZE, DATATYPE];

/// Weekly and monthly series always return the full-length history.
const PERIODIC: &[ParamSpec] = &[SYMBOL, DATATYPE];

pub const TOOLS: &[ToolDef] = &[
    ToolDef::new("stock_quote", "Fetch a stock quote", "GLOBAL_QUOTE", QUOTE),
    ToolDef::new(
        "time_series_intraday",
        "Fetch a time series intraday",
        "TIME_SERIES_INTRADAY",
        INTRADAY,
    ),
    ToolDef::new(
        "time_series_daily",
        "Fetch a time series daily",
        "TIME_SERIES_DAILY",
        DAILY,
    ),
    ToolDef::new(
        "time_series_daily_adjusted",
        "Fetch a time series daily adjusted",
        "TIME_SERIES_DAILY_ADJUSTED",
        DAILY,
    ),
    ToolDef::new(
        "time_series_weekly",
        "Fetch a time series weekly",
        "TIME_SERIES_WEEKLY",
        PERIODIC,
    ),
    ToolDef::new(
        "time_series_weekly_adjusted",
        "Fetch a time series weekly adjusted",
        "TIME_SERIES_WEEKLY_ADJUSTED",
        PERIODIC,
    ),
    ToolDef::new(
        "time_series_monthly",
        "Fetch a time series monthly",
        "TIME_SERIES_MONTHLY",
        PERIODIC,
    ),
    ToolDef::new(
        "time_series_monthly_adjusted",
        "Fetch a time series monthly adjusted",
        "TIME_SERIES_MONTHLY_ADJUSTED",
        PERIODIC,
    ),
    ToolDef::new(
        "realtime_bulk_quotes",
        "Fetch real time bulk quotes",
        "REALTIME_BULK_QUOTES",
        &[
            ParamSpec::required("symbols", ParamKind::SymbolList),
            DATATYPE,
        ],
    ),
    ToolDef::new(
        "symbol_search",
        "Search for symbols matching keywords",
        "SYMBOL_SEARCH",
        &[ParamSpec::required("keywords", ParamKind::Str), DATATYPE],
    ),
    ToolDef::new(
        "market_status",
        "Fetch global market open/closed status",
        "MARKET_STATUS",
        &[],
    ),
];
