//! Unit arithmetic for [`QuantityValue`](super::QuantityValue) conversion.
//!
//! Every known symbol maps linearly onto the base unit of its dimension:
//! `base = value * scale + offset`. Converting between two symbols of the
//! same dimension goes through that base unit.

use crate::error::ValueError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Dimension {
    Temperature,
    Length,
    Power,
    Energy,
    Pressure,
    Speed,
    Time,
    Volume,
    Ratio,
}

#[derive(Debug)]
struct UnitDef {
    symbol: &'static str,
    dimension: Dimension,
    scale: f64,
    offset: f64,
}

const fn linear(symbol: &'static str, dimension: Dimension, scale: f64) -> UnitDef {
    UnitDef {
        symbol,
        dimension,
        scale,
        offset: 0.0,
    }
}

const UNITS: &[UnitDef] = &[
    linear("K", Dimension::Temperature, 1.0),
    UnitDef {
        symbol: "°C",
        dimension: Dimension::Temperature,
        scale: 1.0,
        offset: 273.15,
    },
    UnitDef {
        symbol: "°F",
        dimension: Dimension::Temperature,
        scale: 5.0 / 9.0,
        offset: 459.67 * 5.0 / 9.0,
    },
    linear("mm", Dimension::Length, 0.001),
    linear("cm", Dimension::Length, 0.01),
    linear("m", Dimension::Length, 1.0),
    linear("km", Dimension::Length, 1000.0),
    linear("W", Dimension::Power, 1.0),
    linear("kW", Dimension::Power, 1000.0),
    linear("J", Dimension::Energy, 1.0),
    linear("Wh", Dimension::Energy, 3600.0),
    linear("kWh", Dimension::Energy, 3_600_000.0),
    linear("Pa", Dimension::Pressure, 1.0),
    linear("hPa", Dimension::Pressure, 100.0),
    linear("mbar", Dimension::Pressure, 100.0),
    linear("bar", Dimension::Pressure, 100_000.0),
    linear("m/s", Dimension::Speed, 1.0),
    linear("km/h", Dimension::Speed, 1.0 / 3.6),
    linear("s", Dimension::Time, 1.0),
    linear("min", Dimension::Time, 60.0),
    linear("h", Dimension::Time, 3600.0),
    linear("l", Dimension::Volume, 0.001),
    linear("m³", Dimension::Volume, 1.0),
    linear("%", Dimension::Ratio, 0.01),
];

fn lookup(symbol: &str) -> Option<&'static UnitDef> {
    UNITS.iter().find(|def| def.symbol == symbol)
}

/// Convert `value` expressed in `from` into `to`.
///
/// Identical symbols short-circuit, so units missing from the table still
/// pass through when both sides agree.
///
/// # Errors
///
/// Returns [`ValueError::IncompatibleUnit`] when a symbol is unknown or the
/// two units belong to different dimensions.
pub fn convert(value: f64, from: &str, to: &str) -> Result<f64, ValueError> {
    if from == to {
        return Ok(value);
    }
    let incompatible = || ValueError::IncompatibleUnit {
        from: from.to_string(),
        to: to.to_string(),
    };
    let (Some(source), Some(target)) = (lookup(from), lookup(to)) else {
        return Err(incompatible());
    };
    if source.dimension != target.dimension {
        return Err(incompatible());
    }
    let base = value * source.scale + source.offset;
    Ok((base - target.offset) / target.scale)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn should_pass_through_identical_unknown_units() {
        assert_eq!(convert(3.0, "lx", "lx").unwrap(), 3.0);
    }

    #[test]
    fn should_convert_celsius_to_fahrenheit() {
        assert_close(convert(20.0, "°C", "°F").unwrap(), 68.0);
        assert_close(convert(-40.0, "°C", "°F").unwrap(), -40.0);
    }

    #[test]
    fn should_convert_fahrenheit_to_kelvin() {
        assert_close(convert(32.0, "°F", "K").unwrap(), 273.15);
    }

    #[test]
    fn should_convert_energy_prefixes() {
        assert_close(convert(1.5, "kWh", "Wh").unwrap(), 1500.0);
        assert_close(convert(1.0, "Wh", "J").unwrap(), 3600.0);
    }

    #[test]
    fn should_convert_speed() {
        assert_close(convert(36.0, "km/h", "m/s").unwrap(), 10.0);
    }

    #[test]
    fn should_reject_different_dimensions() {
        assert_eq!(
            convert(1.0, "kW", "kWh"),
            Err(ValueError::IncompatibleUnit {
                from: "kW".to_string(),
                to: "kWh".to_string()
            })
        );
    }

    #[test]
    fn should_reject_unknown_symbol() {
        assert!(convert(1.0, "furlong", "m").is_err());
        assert!(lookup("furlong").is_none());
        assert!(lookup("hPa").is_some());
    }
}
