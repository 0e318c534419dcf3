//! Common formatting helpers for LXCat text output
//!
//! These are left public for convenience.
//!
//! The LXCat tables are written with fixed precision scientific notation
//! matching the C `%.6e` format, while scalar parameters (mass ratios and
//! thresholds) are written in the shortest form that reads back exactly.

// standard library
use std::fmt::{Display, LowerExp};

// Alias for the format! macro out of laziness
pub use std::format as f;

/// Extends primitives with C-style scientific number formatting
pub trait NumFormat {
    /// Scientific number formatting with a signed, padded exponent
    ///
    /// The default `{:e}` output is not consistent with C, so this allows the
    /// precision and the minimum exponent width to be set explicitly.
    ///
    /// `x.sci(6, 2)` is equivalent to `printf("%.6e", x)`.
    ///
    /// ```rust
    /// # use lxtools_format::NumFormat;
    /// assert_eq!(1.1e-20_f64.sci(6, 2), "1.100000e-20".to_string());
    /// assert_eq!((0.0_f64).sci(6, 2), "0.000000e+00".to_string());
    /// assert_eq!((-2.5_f64).sci(3, 1), "-2.500e+0".to_string());
    /// ```
    fn sci(&self, precision: usize, exp_pad: usize) -> String;
}

impl<T: LowerExp> NumFormat for T {
    fn sci(&self, precision: usize, exp_pad: usize) -> String {
        let num = f!("{:.precision$e}", &self, precision = precision);
        pad_exponent(num, exp_pad)
    }
}

/// Extends floats with round-trip text formatting
pub trait FloatFormat {
    /// Shortest text that parses back to exactly the same value
    ///
    /// Plain decimal notation is used for magnitudes in `[1e-4, 1e16)` and
    /// scientific notation with a signed two digit exponent otherwise.
    ///
    /// ```rust
    /// # use lxtools_format::FloatFormat;
    /// assert_eq!(15.6_f64.shortest(), "15.6");
    /// assert_eq!(1.9e-5_f64.shortest(), "1.9e-05");
    /// assert_eq!((0.0_f64).shortest(), "0");
    /// assert_eq!(1.9e-5_f64.shortest().parse::<f64>().unwrap(), 1.9e-5);
    /// ```
    fn shortest(&self) -> String;
}

impl FloatFormat for f64 {
    fn shortest(&self) -> String {
        let magnitude = self.abs();
        if *self == 0.0 || !self.is_finite() || (1e-4..1e16).contains(&magnitude) {
            f!("{self}")
        } else {
            pad_exponent(f!("{self:e}"), 2)
        }
    }
}

/// Rewrite the exponent of a `{:e}` formatted number as `e<sign><digits>`
fn pad_exponent(mut num: String, exp_pad: usize) -> String {
    let Some(idx) = num.find('e') else {
        return num;
    };
    let exp = num.split_off(idx);
    // Make sure the exponent is signed
    let (sign, exp) = match exp.strip_prefix("e-") {
        Some(exp) => ('-', exp),
        None => ('+', &exp[1..]),
    };
    num.push_str(&f!("e{}{:0>pad$}", sign, exp, pad = exp_pad));
    num
}

/// Extends Option for easy display formatting
pub trait OptionFormat {
    /// Either the value contained within `Some()` or "none" for `None`
    ///
    /// ```rust
    /// # use lxtools_format::OptionFormat;
    /// let database: Option<&str> = Some("Phelps database");
    /// assert_eq!(database.display(), "Phelps database");
    ///
    /// let database: Option<&str> = None;
    /// assert_eq!(database.display(), "none");
    /// ```
    fn display(&self) -> String;
}

impl<T: Display> OptionFormat for Option<T> {
    fn display(&self) -> String {
        match self {
            Some(value) => f!("{value}"),
            None => "none".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sci_matches_printf() {
        assert_eq!(1.0_f64.sci(6, 2), "1.000000e+00");
        assert_eq!(12345.678_f64.sci(6, 2), "1.234568e+04");
        assert_eq!(1.234e-120_f64.sci(6, 2), "1.234000e-120");
        assert_eq!((-3.0e5_f64).sci(6, 2), "-3.000000e+05");
    }

    #[test]
    fn shortest_round_trips() {
        for value in [1.951220e-5_f64, 0.02, 11.5, 15.6, 1.0e-30, 2.5e20, -0.29] {
            assert_eq!(value.shortest().parse::<f64>().unwrap(), value);
        }
    }

    #[test]
    fn shortest_notation() {
        assert_eq!(11.5_f64.shortest(), "11.5");
        assert_eq!(15.0_f64.shortest(), "15");
        assert_eq!(2.5e20_f64.shortest(), "2.5e+20");
        assert_eq!((-1.0e-7_f64).shortest(), "-1e-07");
    }
}
