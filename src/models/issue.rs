use core::fmt;
use serde::de::{self, Deserializer};
use serde::Deserialize;
use serde_json::{Map, Number, Value};

#[derive(Deserialize, Debug)]
pub struct Issue {
    #[serde(deserialize_with = "integer")]
    pub number: Number,
    pub title: String,
    #[serde(default, deserialize_with = "label_objects")]
    pub labels: Vec<Label>,
    #[serde(rename = "type", default, deserialize_with = "resolve_type_name")]
    pub type_name: String,
    pub body: Option<String>,
}

#[derive(Deserialize, Debug)]
pub struct Label {
    pub name: String,
}

fn integer<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Number, D::Error> {
    let number = Number::deserialize(deserializer)?;
    if number.is_i64() || number.is_u64() {
        Ok(number)
    } else {
        Err(de::Error::custom(format!("expected an integer, found {number}")))
    }
}

/// Each label must be a JSON object with a string `name`.
fn label_objects<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<Label>, D::Error> {
    Vec::<Map<String, Value>>::deserialize(deserializer)?
        .into_iter()
        .map(|fields| {
            Label::deserialize(Value::Object(fields)).map_err(<D::Error as de::Error>::custom)
        })
        .collect()
}

/// Resolves the `type` value to its display name.
///
/// Empty values (`null`, `false`, `0`, `""`, `[]`, `{}`) and objects without a
/// `name` give the empty string. A `name` of null renders as `None`, booleans
/// as `True`/`False`, integers as digits.
fn resolve_type_name<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    let fields = match Value::deserialize(deserializer)? {
        Value::Object(fields) => fields,
        other if is_empty(&other) => return Ok(String::new()),
        other => {
            return Err(de::Error::custom(format!(
                "expected `type` to be an object, found {other}"
            )))
        }
    };

    match fields.get("name") {
        None => Ok(String::new()),
        Some(Value::Null) => Ok(String::from("None")),
        Some(Value::Bool(true)) => Ok(String::from("True")),
        Some(Value::Bool(false)) => Ok(String::from("False")),
        Some(Value::String(name)) => Ok(name.clone()),
        Some(Value::Number(n)) if n.is_i64() || n.is_u64() => Ok(n.to_string()),
        Some(other) => Err(de::Error::custom(format!(
            "unsupported `type.name` value {other}"
        ))),
    }
}

fn is_empty(value: &Value) -> bool {
    match value {
        Value::Null | Value::Bool(false) => true,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(fields) => fields.is_empty(),
        _ => false,
    }
}

impl Issue {
    /// Decodes a single record from the raw array element.
    pub fn from_value(value: Value) -> Result<Self, serde_json::Error> {
        serde_json::from_value(value)
    }

    pub fn label_names(&self) -> Vec<&str> {
        self.labels.iter().map(|label| label.name.as_str()).collect()
    }

    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// Body on a single line: every `\r` and `\n` becomes a space.
    pub fn flat_body(&self) -> String {
        self.body
            .as_deref()
            .unwrap_or("")
            .replace('\r', " ")
            .replace('\n', " ")
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{} [{}] {}", self.number, self.type_name, self.title)
    }
}
