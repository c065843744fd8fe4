use serde::Deserialize;

use super::amount::AmountInput;

/// Anything that carries an optional cent amount, such as a cart line.
pub trait LineAmount {
    fn amount_cents(&self) -> AmountInput;
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub amount_cents: AmountInput,
}

impl LineItem {
    pub fn new<A: Into<AmountInput>>(amount_cents: A) -> LineItem {
        LineItem {
            name: None,
            amount_cents: amount_cents.into(),
        }
    }

    pub fn named<A: Into<AmountInput>>(name: &str, amount_cents: A) -> LineItem {
        LineItem {
            name: Some(name.to_string()),
            amount_cents: amount_cents.into(),
        }
    }
}

impl LineAmount for LineItem {
    fn amount_cents(&self) -> AmountInput {
        self.amount_cents.clone()
    }
}

impl LineAmount for AmountInput {
    fn amount_cents(&self) -> AmountInput {
        self.clone()
    }
}
