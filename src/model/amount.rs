use std::fmt;

use serde::de::{self, Deserialize, Deserializer, IgnoredAny, MapAccess, SeqAccess, Visitor};

/// A loosely typed amount as it arrives from a caller or a data file.
///
/// Every variant resolves to a number through [`AmountInput::to_number`],
/// which never fails.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum AmountInput {
    #[default]
    Missing,
    Number(f64),
    Text(String),
    Malformed,
}

impl AmountInput {
    pub fn to_number(&self) -> f64 {
        match self {
            AmountInput::Missing | AmountInput::Malformed => 0.0,
            AmountInput::Number(n) => finite_or_zero(*n),
            AmountInput::Text(text) => parse_number(text),
        }
    }
}

/// Parses trimmed text as a decimal number, yielding 0 for empty,
/// unparsable, or non-finite input.
pub fn parse_number(text: &str) -> f64 {
    let text = text.trim();
    if text.is_empty() {
        return 0.0;
    }
    text.parse::<f64>().map(finite_or_zero).unwrap_or(0.0)
}

fn finite_or_zero(n: f64) -> f64 {
    if n.is_finite() {
        n
    } else {
        0.0
    }
}

macro_rules! number_input {
    ($($t:ty),*) => {
        $(
            impl From<$t> for AmountInput {
                fn from(value: $t) -> AmountInput {
                    AmountInput::Number(value as f64)
                }
            }
        )*
    };
}

number_input!(f64, f32, i32, i64, u32, u64);

impl From<&str> for AmountInput {
    fn from(value: &str) -> AmountInput {
        AmountInput::Text(value.to_string())
    }
}

impl From<String> for AmountInput {
    fn from(value: String) -> AmountInput {
        AmountInput::Text(value)
    }
}

impl From<&AmountInput> for AmountInput {
    fn from(value: &AmountInput) -> AmountInput {
        value.clone()
    }
}

impl<T: Into<AmountInput>> From<Option<T>> for AmountInput {
    fn from(value: Option<T>) -> AmountInput {
        value.map(Into::into).unwrap_or(AmountInput::Missing)
    }
}

struct AmountInputVisitor;

impl<'de> Visitor<'de> for AmountInputVisitor {
    type Value = AmountInput;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a number, a string, or null")
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<AmountInput, E> {
        Ok(AmountInput::from(v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<AmountInput, E> {
        Ok(AmountInput::from(v))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<AmountInput, E> {
        Ok(AmountInput::Number(v))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<AmountInput, E> {
        Ok(AmountInput::from(v))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<AmountInput, E> {
        Ok(AmountInput::Text(v))
    }

    fn visit_bool<E: de::Error>(self, _v: bool) -> Result<AmountInput, E> {
        Ok(AmountInput::Malformed)
    }

    fn visit_none<E: de::Error>(self) -> Result<AmountInput, E> {
        Ok(AmountInput::Missing)
    }

    fn visit_unit<E: de::Error>(self) -> Result<AmountInput, E> {
        Ok(AmountInput::Missing)
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<AmountInput, D::Error> {
        AmountInput::deserialize(deserializer)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<AmountInput, A::Error> {
        while seq.next_element::<IgnoredAny>()?.is_some() {}
        Ok(AmountInput::Malformed)
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<AmountInput, A::Error> {
        while map.next_entry::<IgnoredAny, IgnoredAny>()?.is_some() {}
        Ok(AmountInput::Malformed)
    }
}

impl<'de> Deserialize<'de> for AmountInput {
    fn deserialize<D>(deserializer: D) -> Result<AmountInput, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(AmountInputVisitor)
    }
}
