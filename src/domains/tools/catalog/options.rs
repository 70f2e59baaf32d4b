//! Options data endpoints.

use super::{DATATYPE, SYMBOL};
use crate::domains::tools::schema::{ParamKind, ParamSpec, ToolDef};

pub const TOOLS: &[ToolDef] = &[
    ToolDef::new(
        "realtime_options",
        "Fetch realtime options",
        "REALTIME_OPTIONS",
        &[
            SYMBOL,
            DATATYPE,
            ParamSpec::optional("contract", ParamKind::Str),
        ],
    ),
    // The historical endpoint takes a trading date, not a contract id.
    ToolDef::new(
        "historical_options",
        "Fetch the full historical options chain for a symbol on a given date",
        "HISTORICAL_OPTIONS",
        &[SYMBOL, DATATYPE, ParamSpec::optional("date", ParamKind::Str)],
    ),
];
