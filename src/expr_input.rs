#[cfg(feature = "expr_input")]
extern crate meval;

use crate::error::ConfigError;

/// Parses a user supplied quantity. With the `expr_input` feature this accepts arithmetic such
/// as `50/1000` or `2 * 15`, otherwise a plain float.
#[cfg(feature = "expr_input")]
pub(crate) fn parse_value(name: &'static str, input: &str) -> Result<f64, ConfigError> {
    let input = input.trim();
    meval::eval_str(input).map_err(|e| ConfigError::Parse {
        name,
        input: input.to_string(),
        reason: e.to_string(),
    })
}

#[cfg(not(feature = "expr_input"))]
pub(crate) fn parse_value(name: &'static str, input: &str) -> Result<f64, ConfigError> {
    let input = input.trim();
    input.parse::<f64>().map_err(|e| ConfigError::Parse {
        name,
        input: input.to_string(),
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_numbers_parse() {
        assert_eq!(parse_value("x", " 30 "), Ok(30.0));
        assert_eq!(parse_value("x", "1.5"), Ok(1.5));
    }

    #[cfg(feature = "expr_input")]
    #[test]
    fn expressions_evaluate() {
        assert_eq!(parse_value("x", "50/1000"), Ok(0.05));
        assert_eq!(parse_value("x", "2 * 15"), Ok(30.0));
    }

    #[test]
    fn garbage_is_reported_with_name() {
        match parse_value("safety_factor", "lots") {
            Err(ConfigError::Parse { name, input, .. }) => {
                assert_eq!(name, "safety_factor");
                assert_eq!(input, "lots");
            }
            other => panic!("unexpected {:?}", other),
        }
    }
}
