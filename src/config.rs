//! Burden search configuration
//!
//! Values come from built in defaults, then `BURDEN_` prefixed environment variables (a `.env`
//! file is honoured), then optionally interactive prompts.

use tracing::debug;

use std::env;
use std::io::{BufRead, Write};
use std::num::ParseIntError;

use crate::error::{ConfigError, Result};
use crate::expr_input::parse_value;
use crate::search::{BurdenProblem, DEFAULT_KEEP};
use crate::Catalog;

const ENV_PREFIX: &str = "BURDEN_";

/// Burden search configuration. Currents are in amps.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub max_rated_input_current: f64,
    pub max_rated_output_current: f64,
    /// Peak current of the first sensing range
    pub max_practical_input_current_1: f64,
    /// Peak current of the second sensing range
    pub max_practical_input_current_2: f64,
    pub safety_factor: f64,
    /// How many of the best combinations to report
    pub combinations_to_save: usize,
    /// Name of the resistor catalog, see `Catalog::by_name`
    pub catalog: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            max_rated_input_current: 100.0,
            max_rated_output_current: 0.05,
            max_practical_input_current_1: 30.0,
            max_practical_input_current_2: 50.0,
            safety_factor: 1.5,
            combinations_to_save: DEFAULT_KEEP,
            catalog: "standard".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from the environment, after reading a `.env` file if one exists.
    pub fn load() -> Result<Self> {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a configuration from defaults overridden by whatever `lookup` returns for the
    /// `BURDEN_*` keys.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Self::default();
        let var = |name: &str| lookup(&format!("{}{}", ENV_PREFIX, name.to_ascii_uppercase()));

        {
            let fields: [(&'static str, &mut f64); 5] = [
                ("max_rated_input_current", &mut cfg.max_rated_input_current),
                ("max_rated_output_current", &mut cfg.max_rated_output_current),
                ("max_practical_input_current_1", &mut cfg.max_practical_input_current_1),
                ("max_practical_input_current_2", &mut cfg.max_practical_input_current_2),
                ("safety_factor", &mut cfg.safety_factor),
            ];
            for (name, field) in fields {
                if let Some(val) = var(name) {
                    *field = parse_value(name, &val)?;
                    debug!(key = name, value = *field, "configured from environment");
                }
            }
        }

        if let Some(val) = var("combinations_to_save") {
            let val = val.trim();
            cfg.combinations_to_save = val.parse().map_err(|e: ParseIntError| ConfigError::Parse {
                name: "combinations_to_save",
                input: val.to_string(),
                reason: e.to_string(),
            })?;
        }
        if let Some(val) = var("catalog") {
            cfg.catalog = val.trim().to_string();
        }

        Ok(cfg)
    }

    /// Asks for the five electrical values on `output`, reading one answer per line from
    /// `input`. An empty answer keeps the current value. The rated output current is asked for
    /// in mA.
    pub fn prompt<R: BufRead, W: Write>(mut self, input: &mut R, output: &mut W) -> Result<Self> {
        self.max_rated_input_current = ask(
            input,
            output,
            "max_rated_input_current",
            "Please type the maximum rated input current in A",
            self.max_rated_input_current,
        )?;
        self.max_rated_output_current = ask(
            input,
            output,
            "max_rated_output_current",
            "Please type the maximum rated output current in mA",
            self.max_rated_output_current * 1000.0,
        )? / 1000.0;
        self.max_practical_input_current_1 = ask(
            input,
            output,
            "max_practical_input_current_1",
            "Please type the maximum current to be sensed 1 in A",
            self.max_practical_input_current_1,
        )?;
        self.max_practical_input_current_2 = ask(
            input,
            output,
            "max_practical_input_current_2",
            "Please type the maximum current to be sensed 2 in A",
            self.max_practical_input_current_2,
        )?;
        self.safety_factor = ask(
            input,
            output,
            "safety_factor",
            "Please type the value of the safety factor",
            self.safety_factor,
        )?;
        Ok(self)
    }

    /// Rejects values that would make the search meaningless.
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        let checks = [
            ("max_rated_input_current", self.max_rated_input_current),
            ("max_rated_output_current", self.max_rated_output_current),
            ("max_practical_input_current_1", self.max_practical_input_current_1),
            ("max_practical_input_current_2", self.max_practical_input_current_2),
            ("safety_factor", self.safety_factor),
        ];
        for &(name, value) in checks.iter() {
            if !(value > 0.0) || !value.is_finite() {
                return Err(ConfigError::NotPositive { name, value });
            }
        }
        if self.combinations_to_save == 0 {
            return Err(ConfigError::NothingToSave);
        }
        self.catalog().map(|_| ())
    }

    /// The configured resistor catalog.
    pub fn catalog(&self) -> std::result::Result<&'static Catalog, ConfigError> {
        Catalog::by_name(&self.catalog)
            .ok_or_else(|| ConfigError::UnknownCatalog(self.catalog.clone()))
    }

    /// The search targets derived from the configured currents.
    pub fn problem(&self) -> BurdenProblem {
        BurdenProblem::new(
            self.max_rated_input_current,
            self.max_rated_output_current,
            self.max_practical_input_current_1,
            self.max_practical_input_current_2,
            self.safety_factor,
        )
    }
}

fn ask<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    name: &'static str,
    question: &str,
    current: f64,
) -> Result<f64> {
    write!(output, "{} [{}]: ", question, current)?;
    output.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(ConfigError::MissingInput(name).into());
    }
    if line.trim().is_empty() {
        Ok(current)
    } else {
        Ok(parse_value(name, &line)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use std::collections::HashMap;
    use std::io::Cursor;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_are_valid() {
        let cfg = Config::default();
        assert_eq!(cfg.validate(), Ok(()));
        let problem = cfg.problem();
        assert!((problem.turns - 2000.0).abs() < 1e-9);
    }

    #[test]
    fn environment_overrides_defaults() {
        let cfg = Config::from_lookup(lookup(&[
            ("BURDEN_SAFETY_FACTOR", "2"),
            ("BURDEN_MAX_PRACTICAL_INPUT_CURRENT_2", " 40 "),
            ("BURDEN_COMBINATIONS_TO_SAVE", "10"),
            ("BURDEN_CATALOG", "e12"),
        ]))
        .unwrap();
        assert_eq!(cfg.safety_factor, 2.0);
        assert_eq!(cfg.max_practical_input_current_2, 40.0);
        assert_eq!(cfg.max_practical_input_current_1, 30.0);
        assert_eq!(cfg.combinations_to_save, 10);
        assert_eq!(cfg.catalog, "e12");
        assert_eq!(cfg.catalog(), Ok(&*crate::E12));
    }

    #[test]
    fn bad_environment_value_is_an_error() {
        let res = Config::from_lookup(lookup(&[("BURDEN_COMBINATIONS_TO_SAVE", "many")]));
        match res {
            Err(Error::Config(ConfigError::Parse { name, .. })) => {
                assert_eq!(name, "combinations_to_save")
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn validate_rejects_non_positive_values() {
        let mut cfg = Config::default();
        cfg.max_practical_input_current_1 = 0.0;
        assert_eq!(
            cfg.validate(),
            Err(ConfigError::NotPositive {
                name: "max_practical_input_current_1",
                value: 0.0
            })
        );

        let mut cfg = Config::default();
        cfg.combinations_to_save = 0;
        assert_eq!(cfg.validate(), Err(ConfigError::NothingToSave));

        let mut cfg = Config::default();
        cfg.catalog = "e192".to_string();
        assert_eq!(
            cfg.validate(),
            Err(ConfigError::UnknownCatalog("e192".to_string()))
        );
    }

    #[test]
    fn prompt_reads_one_value_per_line() {
        let mut input = Cursor::new("200\n100\n60\n\n2\n");
        let mut output = Vec::new();
        let cfg = Config::default().prompt(&mut input, &mut output).unwrap();
        assert_eq!(cfg.max_rated_input_current, 200.0);
        assert_eq!(cfg.max_rated_output_current, 0.1);
        assert_eq!(cfg.max_practical_input_current_1, 60.0);
        assert_eq!(cfg.max_practical_input_current_2, 50.0);
        assert_eq!(cfg.safety_factor, 2.0);

        let text = String::from_utf8(output).unwrap();
        assert!(text.starts_with("Please type the maximum rated input current in A [100]: "));
        assert!(text.contains("output current in mA [50]: "));
    }

    #[test]
    fn prompt_fails_on_early_eof() {
        let mut input = Cursor::new("200\n");
        let mut output = Vec::new();
        match Config::default().prompt(&mut input, &mut output) {
            Err(Error::Config(ConfigError::MissingInput(name))) => {
                assert_eq!(name, "max_rated_output_current")
            }
            other => panic!("unexpected {:?}", other),
        }
    }
}
