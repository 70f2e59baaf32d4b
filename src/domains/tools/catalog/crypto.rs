//! Cryptocurrency endpoints.

use super::{DATATYPE, INTERVAL, OUTPUTSIZE, SYMBOL};
use crate::domains::tools::schema::{ParamKind, ParamSpec, ToolDef};

const MARKET: ParamSpec = ParamSpec::required("market", ParamKind::Str);

// The digital-currency series endpoints only ever return JSON.
const DIGITAL_PAIR: &[ParamSpec] = &[SYMBOL, MARKET];

pub const TOOLS: &[ToolDef] = &[
    ToolDef::new(
        "crypto_intraday",
        "Fetch crypto intraday time series",
        "CRYPTO_INTRADAY",
        &[SYMBOL, MARKET, INTERVAL, OUTPUTSIZE, DATATYPE],
    ),
    ToolDef::new(
        "digital_currency_daily",
        "Fetch digital currency daily time series",
        "DIGITAL_CURRENCY_DAILY",
        DIGITAL_PAIR,
    ),
    ToolDef::new(
        "digital_currency_weekly",
        "Fetch digital currency weekly time series",
        "DIGITAL_CURRENCY_WEEKLY",
        DIGITAL_PAIR,
    ),
    ToolDef::new(
        "digital_currency_monthly",
        "Fetch digital currency monthly time series",
        "DIGITAL_CURRENCY_MONTHLY",
        DIGITAL_PAIR,
    ),
];
