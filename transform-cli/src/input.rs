//! Parsing of typed values.
//!
//! Values are validated and clamped here so the dispatcher only ever sees
//! finite, in-range numbers.

use transform_core::{Bound, TransformError, TransformResult};

/// Parse a number and clamp it into `bound`.
///
/// # Errors
///
/// Returns [`TransformError::InvalidInput`] if `raw` is not a finite number.
pub fn parse_value(raw: &str, bound: Option<Bound>) -> TransformResult<f64> {
    let trimmed = raw.trim();
    let value: f64 = trimmed
        .parse()
        .map_err(|_| TransformError::InvalidInput(format!("`{trimmed}` is not a number")))?;
    if !value.is_finite() {
        return Err(TransformError::InvalidInput(format!(
            "`{trimmed}` is not a finite number"
        )));
    }

    let Some(bound) = bound else {
        return Ok(value);
    };
    let clamped = bound.clamp(value);
    if !bound.contains(value) {
        tracing::debug!("Clamped {value} to {clamped}");
    }
    Ok(clamped)
}

/// Parse an on/off switch.
///
/// # Errors
///
/// Returns [`TransformError::InvalidInput`] for anything that is not a switch word.
pub fn parse_switch(raw: &str) -> TransformResult<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "on" | "true" | "yes" | "1" | "lock" | "locked" => Ok(true),
        "off" | "false" | "no" | "0" | "unlock" | "unlocked" => Ok(false),
        other => Err(TransformError::InvalidInput(format!(
            "`{other}` is not on or off"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_value_plain() {
        let value = parse_value(" -12.5 ", None).expect("should parse");
        assert!((value - -12.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_parse_value_clamps() {
        let bound = Bound::new(1.0, 150.0);
        let value = parse_value("0.25", Some(bound)).expect("should parse");
        assert!((value - 1.0).abs() < f64::EPSILON);
        let value = parse_value("900", Some(bound)).expect("should parse");
        assert!((value - 150.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_parse_value_rejects_garbage() {
        assert!(matches!(
            parse_value("twelve", None),
            Err(TransformError::InvalidInput(_))
        ));
        assert!(matches!(
            parse_value("NaN", None),
            Err(TransformError::InvalidInput(_))
        ));
        assert!(matches!(
            parse_value("inf", Some(Bound::new(0.0, 1.0))),
            Err(TransformError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_parse_switch() {
        assert!(parse_switch("ON").expect("on"));
        assert!(!parse_switch("unlocked").expect("off"));
        assert!(parse_switch("maybe").is_err());
    }
}
