use serde::Deserialize;

pub const DEFAULT_LOCALE: &str = "en-NG";

/// Largest number of fraction digits a formatter will render.
pub const MAX_FRACTION_DIGITS: u8 = 20;

/// How [`format_money`](super::format_money) renders a value.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FormatOptions {
    pub locale: String,
    pub minimum_fraction_digits: u8,
    pub maximum_fraction_digits: u8,
}

impl Default for FormatOptions {
    fn default() -> FormatOptions {
        FormatOptions {
            locale: DEFAULT_LOCALE.to_string(),
            minimum_fraction_digits: 0,
            maximum_fraction_digits: 0,
        }
    }
}

impl FormatOptions {
    pub fn with_locale(mut self, locale: &str) -> FormatOptions {
        self.locale = locale.to_string();
        self
    }

    pub fn with_minimum_fraction_digits(mut self, digits: u8) -> FormatOptions {
        self.minimum_fraction_digits = digits;
        self
    }

    pub fn with_maximum_fraction_digits(mut self, digits: u8) -> FormatOptions {
        self.maximum_fraction_digits = digits;
        self
    }

    /// The `(min, max)` fraction digit bounds, clamped and ordered.
    pub fn fraction_digits(&self) -> (u8, u8) {
        let min = self.minimum_fraction_digits.min(MAX_FRACTION_DIGITS);
        let max = self.maximum_fraction_digits.clamp(min, MAX_FRACTION_DIGITS);
        (min, max)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = FormatOptions::default();
        assert_eq!("en-NG", options.locale);
        assert_eq!((0, 0), options.fraction_digits());
    }

    #[test]
    fn test_fraction_digits() {
        let options = FormatOptions::default().with_minimum_fraction_digits(2);
        assert_eq!((2, 2), options.fraction_digits());

        let options = FormatOptions::default()
            .with_minimum_fraction_digits(1)
            .with_maximum_fraction_digits(3);
        assert_eq!((1, 3), options.fraction_digits());

        let options = FormatOptions::default().with_maximum_fraction_digits(50);
        assert_eq!((0, 20), options.fraction_digits());
    }

    #[test]
    fn test_deserialize_partial() {
        let options: FormatOptions = serde_yaml::from_str("maximumFractionDigits: 2").unwrap();
        assert_eq!(
            FormatOptions::default().with_maximum_fraction_digits(2),
            options
        );
    }
}
