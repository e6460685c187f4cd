// src/widgets/args.rs — Bind declared arguments to a widget's parameter list
//
// Widgets declare their constructor parameters in order. Positional args fill
// them left to right, named args by key, a scalar fills the first parameter.

use serde_json::Value;
use std::collections::HashMap;

use crate::infra::errors::BarError;
use crate::widgets::types::ArgSpec;

/// One constructor parameter.
#[derive(Debug, Clone, Copy)]
pub struct Param {
    pub name: &'static str,
    pub required: bool,
}

impl Param {
    pub const fn required(name: &'static str) -> Self {
        Self {
            name,
            required: true,
        }
    }

    pub const fn optional(name: &'static str) -> Self {
        Self {
            name,
            required: false,
        }
    }
}

/// Arguments bound to parameter names, with typed accessors.
#[derive(Debug)]
pub struct BoundArgs {
    type_id: String,
    values: HashMap<&'static str, Value>,
}

/// Bind `args` against `params`, rejecting arity and name mismatches.
pub fn bind(type_id: &str, params: &[Param], args: &ArgSpec) -> Result<BoundArgs, BarError> {
    let mut values: HashMap<&'static str, Value> = HashMap::new();

    match args {
        ArgSpec::None => {}
        ArgSpec::Scalar(v) => {
            let first = params
                .first()
                .ok_or_else(|| BarError::args(type_id, "takes no arguments but 1 was given"))?;
            values.insert(first.name, v.clone());
        }
        ArgSpec::Positional(items) => {
            if items.len() > params.len() {
                return Err(BarError::args(
                    type_id,
                    format!(
                        "takes at most {} positional argument(s) but {} were given",
                        params.len(),
                        items.len()
                    ),
                ));
            }
            for (param, v) in params.iter().zip(items) {
                values.insert(param.name, v.clone());
            }
        }
        ArgSpec::Named(map) => {
            for (key, v) in map {
                let param = params
                    .iter()
                    .find(|p| p.name == key.as_str())
                    .ok_or_else(|| BarError::args(type_id, format!("unexpected argument '{key}'")))?;
                values.insert(param.name, v.clone());
            }
        }
    }

    if let Some(missing) = params
        .iter()
        .find(|p| p.required && !values.contains_key(p.name))
    {
        return Err(BarError::args(
            type_id,
            format!("missing required argument '{}'", missing.name),
        ));
    }

    Ok(BoundArgs {
        type_id: type_id.to_string(),
        values,
    })
}

impl BoundArgs {
    fn type_error(&self, name: &str, expected: &str) -> BarError {
        BarError::args(&self.type_id, format!("argument '{name}' must be {expected}"))
    }

    /// String argument. Numbers and booleans are accepted and stringified,
    /// since the shorthand form only produces strings and YAML may not.
    pub fn str_opt(&self, name: &str) -> Result<Option<String>, BarError> {
        match self.values.get(name) {
            None | Some(Value::Null) => Ok(None),
            Some(Value::String(s)) => Ok(Some(s.clone())),
            Some(Value::Number(n)) => Ok(Some(n.to_string())),
            Some(Value::Bool(b)) => Ok(Some(b.to_string())),
            Some(_) => Err(self.type_error(name, "a string")),
        }
    }

    pub fn str_or(&self, name: &str, default: &str) -> Result<String, BarError> {
        Ok(self.str_opt(name)?.unwrap_or_else(|| default.to_string()))
    }

    /// Numeric argument; numeric strings are parsed.
    pub fn f64_opt(&self, name: &str) -> Result<Option<f64>, BarError> {
        match self.values.get(name) {
            None | Some(Value::Null) => Ok(None),
            Some(Value::Number(n)) => n
                .as_f64()
                .map(Some)
                .ok_or_else(|| self.type_error(name, "a number")),
            Some(Value::String(s)) => s
                .trim()
                .parse::<f64>()
                .map(Some)
                .map_err(|_| self.type_error(name, "a number")),
            Some(_) => Err(self.type_error(name, "a number")),
        }
    }

    pub fn f64_or(&self, name: &str, default: f64) -> Result<f64, BarError> {
        Ok(self.f64_opt(name)?.unwrap_or(default))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const PARAMS: &[Param] = &[Param::required("text"), Param::optional("name")];

    #[test]
    fn test_positional_binds_in_order() {
        let a = bind(
            "t.T",
            PARAMS,
            &ArgSpec::Positional(vec![json!("hi"), json!("greet")]),
        )
        .unwrap();
        assert_eq!(a.str_opt("text").unwrap().as_deref(), Some("hi"));
        assert_eq!(a.str_opt("name").unwrap().as_deref(), Some("greet"));
    }

    #[test]
    fn test_scalar_binds_first_param() {
        let a = bind("t.T", PARAMS, &ArgSpec::Scalar(json!("hi"))).unwrap();
        assert_eq!(a.str_opt("text").unwrap().as_deref(), Some("hi"));
        assert_eq!(a.str_or("name", "text").unwrap(), "text");
    }

    #[test]
    fn test_named_binds_by_key() {
        let mut m = serde_json::Map::new();
        m.insert("name".into(), json!("n"));
        m.insert("text".into(), json!("t"));
        let a = bind("t.T", PARAMS, &ArgSpec::Named(m)).unwrap();
        assert_eq!(a.str_opt("name").unwrap().as_deref(), Some("n"));
        assert_eq!(a.str_opt("text").unwrap().as_deref(), Some("t"));
    }

    #[test]
    fn test_too_many_positional() {
        let err = bind(
            "t.T",
            PARAMS,
            &ArgSpec::Positional(vec![json!(1), json!(2), json!(3)]),
        )
        .unwrap_err();
        assert!(matches!(err, BarError::WidgetArgs { .. }));
    }

    #[test]
    fn test_unknown_named() {
        let mut m = serde_json::Map::new();
        m.insert("text".into(), json!("t"));
        m.insert("bogus".into(), json!(1));
        let err = bind("t.T", PARAMS, &ArgSpec::Named(m)).unwrap_err();
        assert!(err.to_string().contains("bogus"));
    }

    #[test]
    fn test_missing_required() {
        let err = bind("t.T", PARAMS, &ArgSpec::None).unwrap_err();
        assert!(err.to_string().contains("missing required argument 'text'"));
    }

    #[test]
    fn test_scalar_into_no_params() {
        assert!(bind("t.T", &[], &ArgSpec::Scalar(json!(1))).is_err());
    }

    #[test]
    fn test_numeric_accessors() {
        let a = bind(
            "t.T",
            &[Param::optional("warn")],
            &ArgSpec::Positional(vec![json!("2.5")]),
        )
        .unwrap();
        assert_eq!(a.f64_opt("warn").unwrap(), Some(2.5));

        let bad = bind(
            "t.T",
            &[Param::optional("warn")],
            &ArgSpec::Scalar(json!("high")),
        )
        .unwrap();
        assert!(bad.f64_opt("warn").is_err());
    }
}
