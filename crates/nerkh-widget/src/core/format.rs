//! Locale-aware number formatting for prices and price changes.
//!
//! Mirrors `Number.prototype.toLocaleString` for the supported locales: at most three
//! fraction digits rounded half away from zero, thousands grouping, and native digits for
//! Persian.

use crate::i18n::LocaleCode;

/// Separators and digits for one locale.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct NumberSymbols {
    zero: char,
    group: char,
    decimal: char,
    minus: &'static str,
    percent: char,
    nan: &'static str,
}

const PERSIAN: NumberSymbols = NumberSymbols {
    zero: '\u{06F0}',
    group: '\u{066C}',
    decimal: '\u{066B}',
    minus: "\u{200E}\u{2212}",
    percent: '\u{066A}',
    nan: "ناعدد",
};

const LATIN: NumberSymbols = NumberSymbols {
    zero: '0',
    group: ',',
    decimal: '.',
    minus: "-",
    percent: '%',
    nan: "NaN",
};

const fn symbols(locale: LocaleCode) -> NumberSymbols {
    match locale {
        LocaleCode::Fa => PERSIAN,
        LocaleCode::En => LATIN,
    }
}

/// Format a toman price for display.
#[must_use]
pub fn format_price(value: f64, locale: LocaleCode) -> String {
    format_with(value, 3, true, locale)
}

/// Format a percent change with two fixed fraction digits and an explicit sign.
#[must_use]
pub fn format_percent(value: f64, locale: LocaleCode) -> String {
    let sym = symbols(locale);
    let mut out = String::new();
    if value > 0.0 {
        out.push('+');
    }
    out.push_str(&format_with(value, 2, false, locale));
    if !value.is_nan() {
        out.push(sym.percent);
    }
    out
}

fn format_with(
    value: f64,
    fraction_digits: usize,
    trim_fraction: bool,
    locale: LocaleCode,
) -> String {
    let sym = symbols(locale);
    if value.is_nan() {
        return sym.nan.to_string();
    }

    let mut out = String::new();
    if value < 0.0 {
        out.push_str(sym.minus);
    }
    if value.is_infinite() {
        out.push('∞');
        return out;
    }

    let (int_part, frac_part) = round_half_away(value.abs(), fraction_digits);
    let frac_part = if trim_fraction {
        frac_part.trim_end_matches('0')
    } else {
        frac_part.as_str()
    };

    let len = int_part.len();
    for (idx, digit) in int_part.chars().enumerate() {
        if idx > 0 && (len - idx) % 3 == 0 {
            out.push(sym.group);
        }
        out.push(localize_digit(digit, sym));
    }
    if !frac_part.is_empty() {
        out.push(sym.decimal);
        out.extend(frac_part.chars().map(|digit| localize_digit(digit, sym)));
    }
    out
}

/// Split `value` into ASCII integer and fraction digits, rounded to `fraction_digits` with
/// ties going away from zero. Rounding works on the shortest round-trip decimal form.
fn round_half_away(value: f64, fraction_digits: usize) -> (String, String) {
    let shortest = value.to_string();
    let (int_part, frac_part) = shortest
        .split_once('.')
        .unwrap_or((shortest.as_str(), ""));
    let mut digits: Vec<u8> = int_part
        .bytes()
        .chain(frac_part.bytes().chain(std::iter::repeat(b'0')).take(fraction_digits))
        .collect();
    let round_up = frac_part
        .as_bytes()
        .get(fraction_digits)
        .is_some_and(|next| *next >= b'5');

    if round_up {
        let mut carry = true;
        for digit in digits.iter_mut().rev() {
            if *digit == b'9' {
                *digit = b'0';
            } else {
                *digit += 1;
                carry = false;
                break;
            }
        }
        if carry {
            digits.insert(0, b'1');
        }
    }

    let split = digits.len() - fraction_digits;
    let frac = digits.split_off(split);
    (
        String::from_utf8_lossy(&digits).into_owned(),
        String::from_utf8_lossy(&frac).into_owned(),
    )
}

fn localize_digit(digit: char, sym: NumberSymbols) -> char {
    digit
        .to_digit(10)
        .and_then(|value| char::from_u32(u32::from(sym.zero) + value))
        .unwrap_or(digit)
}
