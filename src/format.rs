use serde::{Deserialize, Serialize};

fn default_grouping_separator() -> char {
    ','
}

fn default_decimal_separator() -> char {
    '.'
}

/// Separators used when rendering numbers for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumberLocale {
    #[serde(default = "default_grouping_separator")]
    pub grouping_separator: char,
    #[serde(default = "default_decimal_separator")]
    pub decimal_separator: char,
}

impl Default for NumberLocale {
    fn default() -> Self {
        Self {
            grouping_separator: default_grouping_separator(),
            decimal_separator: default_decimal_separator(),
        }
    }
}

impl NumberLocale {
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.grouping_separator == self.decimal_separator {
            anyhow::bail!(
                "grouping and decimal separators must differ (both are '{}')",
                self.grouping_separator
            );
        }
        for sep in [self.grouping_separator, self.decimal_separator] {
            if sep.is_ascii_digit() {
                anyhow::bail!("separator '{sep}' must not be a digit");
            }
        }
        Ok(())
    }

    /// Format `value` with thousands grouping and at most three fraction
    /// digits, e.g. `1250000` becomes `1,250,000`.
    pub fn format_number(&self, value: f64) -> String {
        if value.is_nan() {
            return "NaN".into();
        }
        if value.is_infinite() {
            return if value > 0.0 { "∞".into() } else { "-∞".into() };
        }

        let fixed = format!("{:.3}", value.abs());
        let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
        let frac_part = frac_part.trim_end_matches('0');
        let negative = value < 0.0 && (int_part != "0" || !frac_part.is_empty());

        let mut out = String::with_capacity(fixed.len() + fixed.len() / 3 + 1);
        if negative {
            out.push('-');
        }
        let len = int_part.len();
        for (i, ch) in int_part.chars().enumerate() {
            if i > 0 && (len - i) % 3 == 0 {
                out.push(self.grouping_separator);
            }
            out.push(ch);
        }
        if !frac_part.is_empty() {
            out.push(self.decimal_separator);
            out.push_str(frac_part);
        }
        out
    }
}

/// Shortest plain decimal form: `3` for `3.0`, `3.5` for `3.5`.
pub fn format_plain(value: f64) -> String {
    if value == 0.0 {
        // avoid "-0"
        return "0".into();
    }
    value.to_string()
}

pub fn format_percent(value: f64) -> String {
    format!("{}%", format_plain(value))
}
