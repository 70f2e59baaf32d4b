//! Foreign exchange endpoints.

use super::{DATATYPE, INTERVAL, OUTPUTSIZE};
use crate::domains::tools::schema::{ParamKind, ParamSpec, ToolDef};

const FROM_SYMBOL: ParamSpec = ParamSpec::required("from_symbol", ParamKind::Str);
const TO_SYMBOL: ParamSpec = ParamSpec::required("to_symbol", ParamKind::Str);

const PAIR_PERIODIC: &[ParamSpec] = &[FROM_SYMBOL, TO_SYMBOL, DATATYPE];

pub const TOOLS: &[ToolDef] = &[
    ToolDef::new(
        "exchange_rate",
        "Fetch the realtime exchange rate for a currency pair",
        "CURRENCY_EXCHANGE_RATE",
        &[
            ParamSpec::required("from_currency", ParamKind::Str),
            ParamSpec::required("to_currency", ParamKind::Str),
        ],
    ),
    ToolDef::new(
        "fx_intraday",
        "Fetch FX intraday",
        "FX_INTRADAY",
        &[FROM_SYMBOL, TO_SYMBOL, INTERVAL, OUTPUTSIZE, DATATYPE],
    ),
    ToolDef::new(
        "fx_daily",
        "Fetch FX daily",
        "FX_DAILY",
        &[FROM_SYMBOL, TO_SYMBOL, OUTPUTSIZE, DATATYPE],
    ),
    ToolDef::new("fx_weekly", "Fetch FX weekly", "FX_WEEKLY", PAIR_PERIODIC),
    ToolDef::new("fx_monthly", "Fetch FX monthly", "FX_MONTHLY", PAIR_PERIODIC),
];
