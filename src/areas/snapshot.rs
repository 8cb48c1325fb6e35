//! Snapshot loading
//!
//! Materializes evaluated value trees from JSON snapshot files. Field
//! order is preserved from the source document. Object keys carry the
//! field classification markers (`#name` definition, `_name` hidden,
//! trailing `?` optional); string values starting with `=~` denote
//! pattern constraints, and with `interpret_types` enabled the bare type
//! keywords (`int`, `string`, `number`, ...) denote type constraints.
//!
//! Constraints the JSON surface cannot express (bounds, disjunctions,
//! bottom) are constructed through the value API directly.

use crate::artifacts::value::field::Field;
use crate::artifacts::value::kind::TYPE_KEYWORDS;
use crate::artifacts::value::path::Selector;
use crate::artifacts::value::value::Value;
use anyhow::Context;
use chrono::{DateTime, Local};
use regex::Regex;
use std::path::{Path, PathBuf};

/// Loader behavior toggles.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoadOptions {
    /// Interpret bare type-keyword strings as type constraints instead of
    /// string scalars
    pub interpret_types: bool,
}

/// An evaluated configuration snapshot loaded from disk.
#[derive(Debug)]
pub struct Snapshot {
    pub source: PathBuf,
    pub modified: Option<DateTime<Local>>,
    pub root: Value,
}

impl Snapshot {
    pub fn load(path: &Path, options: &LoadOptions) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read snapshot {}", path.display()))?;
        let document: serde_json::Value = serde_json::from_str(&text)
            .with_context(|| format!("failed to parse snapshot {}", path.display()))?;
        let root = evaluate(&document, options)
            .with_context(|| format!("failed to evaluate snapshot {}", path.display()))?;

        let modified = std::fs::metadata(path)
            .and_then(|metadata| metadata.modified())
            .ok()
            .map(DateTime::<Local>::from);

        Ok(Snapshot {
            source: path.to_path_buf(),
            modified,
            root,
        })
    }
}

fn evaluate(document: &serde_json::Value, options: &LoadOptions) -> anyhow::Result<Value> {
    match document {
        serde_json::Value::Null => Ok(Value::null()),
        serde_json::Value::Bool(b) => Ok(Value::bool(*b)),
        serde_json::Value::Number(number) => match number.as_i64() {
            Some(i) => Ok(Value::int(i)),
            None => Ok(Value::float(number.as_f64().unwrap_or(f64::NAN))),
        },
        serde_json::Value::String(s) => evaluate_string(s, options),
        serde_json::Value::Array(elements) => {
            let elements = elements
                .iter()
                .map(|element| evaluate(element, options))
                .collect::<anyhow::Result<Vec<_>>>()?;
            Ok(Value::list_of(elements))
        }
        serde_json::Value::Object(entries) => {
            let mut fields: Vec<Field> = Vec::with_capacity(entries.len());
            for (key, entry) in entries {
                let (selector, optional) = parse_selector(key)?;
                if fields.iter().any(|field| field.selector == selector) {
                    anyhow::bail!("duplicate field '{}'", selector);
                }
                fields.push(Field::new(selector, evaluate(entry, options)?, optional));
            }
            Ok(Value::Struct(fields))
        }
    }
}

fn evaluate_string(s: &str, options: &LoadOptions) -> anyhow::Result<Value> {
    if let Some(pattern) = s.strip_prefix("=~") {
        Regex::new(pattern)
            .with_context(|| format!("invalid pattern constraint {:?}", pattern))?;
        return Ok(Value::pattern(pattern));
    }

    if options.interpret_types
        && let Some(class) = TYPE_KEYWORDS.get(s)
    {
        return Ok(Value::type_constraint(*class));
    }

    Ok(Value::string(s))
}

fn parse_selector(key: &str) -> anyhow::Result<(Selector, bool)> {
    let (key, optional) = match key.strip_suffix('?') {
        Some(stripped) => (stripped, true),
        None => (key, false),
    };

    let selector = if let Some(name) = key.strip_prefix('#') {
        Selector::definition(name)
    } else if let Some(name) = key.strip_prefix('_') {
        Selector::hidden(name)
    } else {
        Selector::field(key)
    };

    let name_empty = match &selector {
        Selector::Field(name) | Selector::Definition(name) | Selector::Hidden(name) => {
            name.is_empty()
        }
        Selector::Index(_) => false,
    };
    if name_empty {
        anyhow::bail!("empty field name in selector '{}'", key);
    }

    Ok((selector, optional))
}
