//! Technical indicator endpoints.
//!
//! The indicator API is highly regular: most endpoints take a symbol, an
//! interval, and some combination of `time_period` and `series_type`.
//! Shared parameter slices cover the regular families; the handful of
//! oscillators with bespoke tuning knobs get explicit parameter lists.

use super::{DATATYPE, INTERVAL, MONTH, SYMBOL};
use crate::domains::tools::schema::{ParamKind, ParamSpec, ToolDef};

const TIME_PERIOD: ParamSpec = ParamSpec::required("time_period", ParamKind::Int);
const SERIES_TYPE: ParamSpec = ParamSpec::required("series_type", ParamKind::Str);

/// Moving averages and single-line studies computed over a price series.
const MA: &[ParamSpec] = &[SYMBOL, INTERVAL, MONTH, TIME_PERIOD, SERIES_TYPE, DATATYPE];

/// Studies computed over OHLC bars, parameterized by window length only.
const WINDOWED: &[ParamSpec] = &[SYMBOL, INTERVAL, MONTH, TIME_PERIOD, DATATYPE];

/// Studies with no tuning knobs beyond the sampling interval.
const PRICE_ONLY: &[ParamSpec] = &[SYMBOL, INTERVAL, MONTH, DATATYPE];

/// Hilbert transform family.
const HT: &[ParamSpec] = &[SYMBOL, INTERVAL, MONTH, SERIES_TYPE, DATATYPE];

const MATYPE: ParamSpec = ParamSpec::with_default("matype", ParamKind::Int, "0");

pub const TOOLS: &[ToolDef] = &[
    // Moving averages.
    ToolDef::new("sma", "Fetch the simple moving average", "SMA", MA),
    ToolDef::new("ema", "Fetch the exponential moving average", "EMA", MA),
    ToolDef::new("wma", "Fetch the weighted moving average", "WMA", MA),
    ToolDef::new("dema", "Fetch the double exponential moving average", "DEMA", MA),
    ToolDef::new("tema", "Fetch the triple exponential moving average", "TEMA", MA),
    ToolDef::new("trima", "Fetch the triangular moving average", "TRIMA", MA),
    ToolDef::new("kama", "Fetch the Kaufman adaptive moving average", "KAMA", MA),
    ToolDef::new(
        "mama",
        "Fetch the MESA adaptive moving average",
        "MAMA",
        &[
            SYMBOL,
            INTERVAL,
            MONTH,
            SERIES_TYPE,
            ParamSpec::required("fastlimit", ParamKind::Float),
            ParamSpec::required("slowlimit", ParamKind::Float),
            DATATYPE,
        ],
    ),
    ToolDef::new(
        "vwap",
        "Fetch the volume weighted average price",
        "VWAP",
        PRICE_ONLY,
    ),
    ToolDef::new("t3", "Fetch the triple exponential moving average (T3)", "T3", MA),
    // MACD family.
    ToolDef::new(
        "macd",
        "Fetch moving average convergence / divergence values",
        "MACD",
        &[
            SYMBOL,
            INTERVAL,
            MONTH,
            SERIES_TYPE,
            ParamSpec::with_default("fastperiod", ParamKind::Int, "12"),
            ParamSpec::with_default("slowperiod", ParamKind::Int, "26"),
            ParamSpec::with_default("signalperiod", ParamKind::Int, "9"),
            DATATYPE,
        ],
    ),
    ToolDef::new(
        "macdext",
        "Fetch MACD values with controllable moving average types",
        "MACDEXT",
        &[
            SYMBOL,
            INTERVAL,
            MONTH,
            SERIES_TYPE,
            ParamSpec::with_default("fastperiod", ParamKind::Int, "12"),
            ParamSpec::with_default("slowperiod", ParamKind::Int, "26"),
            ParamSpec::with_default("signalperiod", ParamKind::Int, "9"),
            ParamSpec::with_default("fastmatype", ParamKind::Int, "0"),
            ParamSpec::with_default("slowmatype", ParamKind::Int, "0"),
            ParamSpec::with_default("signalmatype", ParamKind::Int, "0"),
            DATATYPE,
        ],
    ),
    // Stochastics.
    ToolDef::new(
        "stoch",
        "Fetch the stochastic oscillator",
        "STOCH",
        &[
            SYMBOL,
            INTERVAL,
            MONTH,
            ParamSpec::with_default("fastkperiod", ParamKind::Int, "5"),
            ParamSpec::with_default("slowkperiod", ParamKind::Int, "3"),
            ParamSpec::with_default("slowdperiod", ParamKind::Int, "3"),
            ParamSpec::with_default("slowkmatype", ParamKind::Int, "0"),
            ParamSpec::with_default("slowdmatype", ParamKind::Int, "0"),
            DATATYPE,
        ],
    ),
    ToolDef::new(
        "stochf",
        "Fetch the stochastic fast oscillator",
        "STOCHF",
        &[
            SYMBOL,
            INTERVAL,
            MONTH,
            ParamSpec::with_default("fastkperiod", ParamKind::Int, "5"),
            ParamSpec::with_default("fastdperiod", ParamKind::Int, "3"),
            ParamSpec::with_default("fastdmatype", ParamKind::Int, "0"),
            DATATYPE,
        ],
    ),
    ToolDef::new("rsi", "Fetch the relative strength index", "RSI", MA),
    ToolDef::new(
        "stochrsi",
        "Fetch the stochastic relative strength index",
        "STOCHRSI",
        &[
            SYMBOL,
            INTERVAL,
            MONTH,
            TIME_PERIOD,
            SERIES_TYPE,
            ParamSpec::with_default("fastkperiod", ParamKind::Int, "5"),
            ParamSpec::with_default("fastdperiod", ParamKind::Int, "3"),
            ParamSpec::with_default("fastdmatype", ParamKind::Int, "0"),
            DATATYPE,
        ],
    ),
    ToolDef::new("willr", "Fetch the Williams %R oscillator", "WILLR", WINDOWED),
    // Directional movement.
    ToolDef::new("adx", "Fetch the average directional movement index", "ADX", WINDOWED),
    ToolDef::new(
        "adxr",
        "Fetch the average directional movement index rating",
        "ADXR",
        WINDOWED,
    ),
    ToolDef::new(
        "apo",
        "Fetch the absolute price oscillator",
        "APO",
        &[
            SYMBOL,
            INTERVAL,
            MONTH,
            SERIES_TYPE,
            ParamSpec::required("fastperiod", ParamKind::Int),
            ParamSpec::required("slowperiod", ParamKind::Int),
            MATYPE,
            DATATYPE,
        ],
    ),
    ToolDef::new(
        "ppo",
        "Fetch the percentage price oscillator",
        "PPO",
        &[
            SYMBOL,
            INTERVAL,
            MONTH,
            SERIES_TYPE,
            ParamSpec::required("fastperiod", ParamKind::Int),
            ParamSpec::required("slowperiod", ParamKind::Int),
            MATYPE,
            DATATYPE,
        ],
    ),
    ToolDef::new("mom", "Fetch momentum values", "MOM", MA),
    ToolDef::new("bop", "Fetch the balance of power", "BOP", PRICE_ONLY),
    ToolDef::new("cci", "Fetch the commodity channel index", "CCI", WINDOWED),
    ToolDef::new("cmo", "Fetch the Chande momentum oscillator", "CMO", WINDOWED),
    ToolDef::new("roc", "Fetch the rate of change", "ROC", MA),
    ToolDef::new("rocr", "Fetch the rate of change ratio", "ROCR", MA),
    ToolDef::new("aroon", "Fetch Aroon values", "AROON", WINDOWED),
    ToolDef::new("aroonosc", "Fetch the Aroon oscillator", "AROONOSC", WINDOWED),
    ToolDef::new("mfi", "Fetch the money flow index", "MFI", WINDOWED),
    ToolDef::new(
        "trix",
        "Fetch the 1-day rate of change of a triple smooth EMA",
        "TRIX",
        MA,
    ),
    ToolDef::new(
        "ultosc",
        "Fetch the ultimate oscillator",
        "ULTOSC",
        &[
            SYMBOL,
            INTERVAL,
            MONTH,
            ParamSpec::required("timeperiod1", ParamKind::Int),
            ParamSpec::required("timeperiod2", ParamKind::Int),
            ParamSpec::required("timeperiod3", ParamKind::Int),
            DATATYPE,
        ],
    ),
    ToolDef::new("dx", "Fetch the directional movement index", "DX", WINDOWED),
    ToolDef::new(
        "minus_di",
        "Fetch the minus directional indicator",
        "MINUS_DI",
        WINDOWED,
    ),
    ToolDef::new(
        "plus_di",
        "Fetch the plus directional indicator",
        "PLUS_DI",
        WINDOWED,
    ),
    ToolDef::new(
        "minus_dm",
        "Fetch the minus directional movement",
        "MINUS_DM",
        WINDOWED,
    ),
    ToolDef::new(
        "plus_dm",
        "Fetch the plus directional movement",
        "PLUS_DM",
        WINDOWED,
    ),
    ToolDef::new(
        "bbands",
        "Fetch Bollinger bands",
        "BBANDS",
        &[
            SYMBOL,
            INTERVAL,
            MONTH,
            TIME_PERIOD,
            SERIES_TYPE,
            ParamSpec::required("nbdevup", ParamKind::Int),
            ParamSpec::required("nbdevdn", ParamKind::Int),
            MATYPE,
            DATATYPE,
        ],
    ),
    ToolDef::new("midpoint", "Fetch midpoint values", "MIDPOINT", MA),
    ToolDef::new("midprice", "Fetch midprice values", "MIDPRICE", WINDOWED),
    ToolDef::new(
        "sar",
        "Fetch the parabolic SAR",
        "SAR",
        &[
            SYMBOL,
            INTERVAL,
            MONTH,
            ParamSpec::with_default("acceleration", ParamKind::Float, "0.02"),
            ParamSpec::with_default("maximum", ParamKind::Float, "0.2"),
            DATATYPE,
        ],
    ),
    // Volatility.
    ToolDef::new("trange", "Fetch the true range", "TRANGE", PRICE_ONLY),
    ToolDef::new("atr", "Fetch the average true range", "ATR", WINDOWED),
    ToolDef::new("natr", "Fetch the normalized average true range", "NATR", WINDOWED),
    // Volume.
    ToolDef::new("ad", "Fetch the Chaikin A/D line", "AD", PRICE_ONLY),
    ToolDef::new(
        "adosc",
        "Fetch the Chaikin A/D oscillator",
        "ADOSC",
        &[
            SYMBOL,
            INTERVAL,
            MONTH,
            ParamSpec::required("fastperiod", ParamKind::Int),
            ParamSpec::required("slowperiod", ParamKind::Int),
            DATATYPE,
        ],
    ),
    ToolDef::new("obv", "Fetch on balance volume", "OBV", PRICE_ONLY),
    // Hilbert transform family.
    ToolDef::new(
        "ht_trendline",
        "Fetch the Hilbert transform instantaneous trendline",
        "HT_TRENDLINE",
        HT,
    ),
    ToolDef::new("ht_sine", "Fetch the Hilbert transform sine wave", "HT_SINE", HT),
    ToolDef::new(
        "ht_trendmode",
        "Fetch the Hilbert transform trend vs cycle mode",
        "HT_TRENDMODE",
        HT,
    ),
    ToolDef::new(
        "ht_dcperiod",
        "Fetch the Hilbert transform dominant cycle period",
        "HT_DCPERIOD",
        HT,
    ),
    ToolDef::new(
        "ht_dcphase",
        "Fetch the Hilbert transform dominant cycle phase",
        "HT_DCPHASE",
        HT,
    ),
    ToolDef::new("ht_phasor", "Fetch Hilbert transform phasor components", "HT_PHASOR", HT),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indicator_count_matches_catalog() {
        assert_eq!(TOOLS.len(), 53);
    }

    #[test]
    fn moving_averages_share_required_inputs() {
        for name in ["sma", "ema", "tema", "kama", "rsi"] {
            let def = TOOLS.iter().find(|t| t.name == name).unwrap();
            assert!(def.param("time_period").unwrap().required, "{name}");
            assert!(def.param("series_type").unwrap().required, "{name}");
        }
    }

    #[test]
    fn macd_periods_have_standard_defaults() {
        let macd = TOOLS.iter().find(|t| t.name == "macd").unwrap();
        assert_eq!(macd.param("fastperiod").unwrap().default, Some("12"));
        assert_eq!(macd.param("slowperiod").unwrap().default, Some("26"));
        assert_eq!(macd.param("signalperiod").unwrap().default, Some("9"));
    }

    #[test]
    fn sar_tuning_defaults() {
        let sar = TOOLS.iter().find(|t| t.name == "sar").unwrap();
        assert_eq!(sar.param("acceleration").unwrap().default, Some("0.02"));
        assert_eq!(sar.param("maximum").unwrap().default, Some("0.2"));
    }
}
