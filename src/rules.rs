//! The builtin rule catalog: hook predicates, their cached regexes, and the
//! Luhn checksum behind `creditCard`.
//!
//! Every hook is a pure function of the [`FieldInput`] and the optional rule
//! parameter. Hooks fail closed: a missing or malformed parameter for a
//! parameterized rule yields `false`, never a panic.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::registry::{FieldInput, InputKind, RuleDefinition};

static DECIMAL: Lazy<Regex> = Lazy::new(|| Regex::new(r"^-?[0-9]*\.?[0-9]+$").unwrap());
static URL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(https?|ftp|file)://[-A-Za-z0-9+&@#/%?=~_|!:,.;]*[-A-Za-z0-9+&@#/%=~_|]")
        .unwrap()
});
static EMAIL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"^(([^<>()\[\]\\.,;:\s@"]+(\.[^<>()\[\]\\.,;:\s@"]+)*)|(".+"))@((\[[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\])|(([a-zA-Z0-9-]+\.)+[a-zA-Z]{2,}))$"#,
    )
    .unwrap()
});
static NUMERIC: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]+$").unwrap());
static INTEGER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^-?[0-9]+$").unwrap());
static HAS_NUMBER: Lazy<Regex> = Lazy::new(|| Regex::new(r"[0-9]").unwrap());
static HAS_UPPER: Lazy<Regex> = Lazy::new(|| Regex::new(r"[A-Z]").unwrap());
static HAS_LOWER: Lazy<Regex> = Lazy::new(|| Regex::new(r"[a-z]").unwrap());
static HAS_SPECIAL_CHAR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"[$&+,:;=?@#|'"<>.^*()%!_-]"#).unwrap());
static CREDIT_CARD: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[\d\s-]+$").unwrap());
static PHONE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\(?([0-9]{3})\)?[-. ]?([0-9]{3})[-. ]?([0-9]{4})$").unwrap());
static BASE64: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:[A-Za-z0-9+/]{4})*(?:[A-Za-z0-9+/]{2}==|[A-Za-z0-9+/]{3}=)?$").unwrap()
});
static IP: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^((25[0-5]|2[0-4][0-9]|1[0-9]{2}|[0-9]{1,2})\.){3}(25[0-5]|2[0-4][0-9]|1[0-9]{2}|[0-9]{1,2})$")
        .unwrap()
});
static ALPHA_DASH: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^[a-z0-9_-]+$").unwrap());
static ALPHA_NUMERIC: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^[a-z0-9]+$").unwrap());
static ALPHA: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^[a-z]+$").unwrap());

/// Luhn checksum over the digits of `value`, non-digits stripped.
///
/// Digits are walked right to left; every second digit starting from the
/// second-from-right is doubled, doubled values above 9 have 9 subtracted,
/// and the input is valid iff the total is a multiple of ten. An input with
/// no digits at all is invalid.
pub fn luhn_checksum(value: &str) -> bool {
    let mut sum = 0u32;
    let mut count = 0usize;

    for (position, digit) in value
        .chars()
        .rev()
        .filter_map(|c| c.to_digit(10))
        .enumerate()
    {
        let doubled = if position % 2 == 1 { digit * 2 } else { digit };
        sum += if doubled > 9 { doubled - 9 } else { doubled };
        count += 1;
    }

    count > 0 && sum % 10 == 0
}

fn required(input: &FieldInput<'_>, _param: Option<&str>) -> bool {
    match input.kind {
        InputKind::Checkbox | InputKind::Radio => input.checked,
        InputKind::Text | InputKind::Select => !input.value.is_empty(),
    }
}

fn matches(input: &FieldInput<'_>, param: Option<&str>) -> bool {
    match param.filter(|name| !name.is_empty()) {
        Some(name) => input
            .peers
            .get(name)
            .is_some_and(|peer| peer.as_str() == input.value),
        None => false,
    }
}

fn url(input: &FieldInput<'_>, _param: Option<&str>) -> bool {
    URL.is_match(input.value.trim())
}

fn email(input: &FieldInput<'_>, _param: Option<&str>) -> bool {
    EMAIL.is_match(input.value.trim())
}

fn emails(input: &FieldInput<'_>, _param: Option<&str>) -> bool {
    input
        .value
        .split(',')
        .all(|item| EMAIL.is_match(item.trim()))
}

fn parse_length_param(param: Option<&str>) -> Option<usize> {
    param.and_then(|p| p.parse::<usize>().ok())
}

fn char_count(value: &str) -> usize {
    value.chars().count()
}

fn min_length(input: &FieldInput<'_>, param: Option<&str>) -> bool {
    match parse_length_param(param) {
        Some(min) => char_count(input.value) >= min,
        None => false,
    }
}

fn max_length(input: &FieldInput<'_>, param: Option<&str>) -> bool {
    match parse_length_param(param) {
        Some(max) => char_count(input.value) <= max,
        None => false,
    }
}

fn exact_length(input: &FieldInput<'_>, param: Option<&str>) -> bool {
    match parse_length_param(param) {
        Some(exact) => char_count(input.value) == exact,
        None => false,
    }
}

fn parse_numeric_pair(input: &FieldInput<'_>, param: Option<&str>) -> Option<(f64, f64)> {
    let bound = param?.trim().parse::<f64>().ok()?;
    let value = input.value.trim().parse::<f64>().ok()?;
    Some((value, bound))
}

fn greater_than(input: &FieldInput<'_>, param: Option<&str>) -> bool {
    parse_numeric_pair(input, param).is_some_and(|(value, bound)| value > bound)
}

fn less_than(input: &FieldInput<'_>, param: Option<&str>) -> bool {
    parse_numeric_pair(input, param).is_some_and(|(value, bound)| value < bound)
}

fn equals(input: &FieldInput<'_>, param: Option<&str>) -> bool {
    match param {
        Some(expected) => input.value.trim() == expected.trim(),
        None => false,
    }
}

fn alpha(input: &FieldInput<'_>, _param: Option<&str>) -> bool {
    ALPHA.is_match(input.value)
}

fn alpha_numeric(input: &FieldInput<'_>, _param: Option<&str>) -> bool {
    ALPHA_NUMERIC.is_match(input.value)
}

fn alpha_dash(input: &FieldInput<'_>, _param: Option<&str>) -> bool {
    ALPHA_DASH.is_match(input.value)
}

fn numeric(input: &FieldInput<'_>, _param: Option<&str>) -> bool {
    NUMERIC.is_match(input.value)
}

fn integer(input: &FieldInput<'_>, _param: Option<&str>) -> bool {
    INTEGER.is_match(input.value)
}

fn decimal(input: &FieldInput<'_>, _param: Option<&str>) -> bool {
    DECIMAL.is_match(input.value)
}

fn ip(input: &FieldInput<'_>, _param: Option<&str>) -> bool {
    IP.is_match(input.value)
}

fn base64(input: &FieldInput<'_>, _param: Option<&str>) -> bool {
    BASE64.is_match(input.value)
}

fn phone(input: &FieldInput<'_>, _param: Option<&str>) -> bool {
    PHONE.is_match(input.value)
}

fn cvc(input: &FieldInput<'_>, _param: Option<&str>) -> bool {
    let len = char_count(input.value);
    NUMERIC.is_match(input.value) && (3..=4).contains(&len)
}

fn credit_card(input: &FieldInput<'_>, _param: Option<&str>) -> bool {
    CREDIT_CARD.is_match(input.value) && luhn_checksum(input.value)
}

fn file_type(input: &FieldInput<'_>, param: Option<&str>) -> bool {
    let Some(allowed) = param.filter(|p| !p.is_empty()) else {
        return false;
    };
    // The extension is whatever follows the last dot; a value with no dot is
    // treated as a bare extension, matching the original behavior.
    let extension = match input.value.rsplit('.').next() {
        Some(ext) if !ext.is_empty() => ext.trim(),
        _ => return false,
    };
    allowed.split(',').any(|item| item.trim() == extension)
}

fn has_special_char(input: &FieldInput<'_>, _param: Option<&str>) -> bool {
    HAS_SPECIAL_CHAR.is_match(input.value)
}

fn has_number(input: &FieldInput<'_>, _param: Option<&str>) -> bool {
    HAS_NUMBER.is_match(input.value)
}

fn has_upper(input: &FieldInput<'_>, _param: Option<&str>) -> bool {
    HAS_UPPER.is_match(input.value)
}

fn has_lower(input: &FieldInput<'_>, _param: Option<&str>) -> bool {
    HAS_LOWER.is_match(input.value)
}

/// The full builtin catalog, in its canonical order.
pub(crate) fn builtin_rules() -> Vec<RuleDefinition> {
    vec![
        RuleDefinition::new(
            "required",
            "<em>%l</em> is required.",
            "Must not be empty.",
            false,
            required,
        ),
        RuleDefinition::new(
            "matches",
            "<em>%l</em> must be the same as <em>%p</em>.",
            "Must match another field value.",
            true,
            matches,
        ),
        RuleDefinition::new(
            "url",
            "<em>%l</em> must contain a valid url.",
            "Must be a valid url.",
            false,
            url,
        )
        .with_example("http://www.example.com"),
        RuleDefinition::new(
            "email",
            "<em>%l</em> must contain a valid email address.",
            "Must be a valid email address.",
            false,
            email,
        )
        .with_example("email@example.com"),
        RuleDefinition::new(
            "emails",
            "<em>%l</em> must contain all valid email addresses.",
            "Must be a comma separated list of valid email addresses.",
            false,
            emails,
        )
        .with_example("email1@example.com, email2@example.com"),
        RuleDefinition::new(
            "minLength",
            "<em>%l</em> must be at least <em>%p</em> characters in length.",
            "Must be at least X characters long.",
            true,
            min_length,
        ),
        RuleDefinition::new(
            "maxLength",
            "<em>%l</em> must not exceed <em>%p</em> characters in length.",
            "Must be no longer than X characters.",
            true,
            max_length,
        ),
        RuleDefinition::new(
            "exactLength",
            "<em>%l</em> must be exactly <em>%p</em> characters in length.",
            "Must be exactly X characters long.",
            true,
            exact_length,
        ),
        RuleDefinition::new(
            "greaterThan",
            "<em>%l</em> must contain a number greater than <em>%p</em>.",
            "Must be greater than X.",
            true,
            greater_than,
        ),
        RuleDefinition::new(
            "lessThan",
            "<em>%l</em> must contain a number less than <em>%p</em>.",
            "Must be less than X.",
            true,
            less_than,
        ),
        RuleDefinition::new(
            "equals",
            "<em>%l</em> must be equal to <em>%p</em>.",
            "Must be equal to X.",
            true,
            equals,
        ),
        RuleDefinition::new(
            "alpha",
            "<em>%l</em> must only contain alphabetical characters.",
            "Can only contain alphabetical characters (A-z).",
            false,
            alpha,
        ),
        RuleDefinition::new(
            "alphaNumeric",
            "<em>%l</em> must only contain alpha-numeric characters.",
            "Can only contain alpha-numeric characters (A-z, 0-9).",
            false,
            alpha_numeric,
        ),
        RuleDefinition::new(
            "alphaDash",
            "<em>%l</em> must only contain alpha-numeric characters, underscores and dashes.",
            "Can only contain alpha-numeric characters, underscores, or dashes.",
            false,
            alpha_dash,
        ),
        RuleDefinition::new(
            "numeric",
            "<em>%l</em> must only contain a whole number.",
            "Must be a whole (non-negative) number.",
            false,
            numeric,
        ),
        RuleDefinition::new(
            "integer",
            "<em>%l</em> must be a number.",
            "Must be an integer; either positive or negative.",
            false,
            integer,
        ),
        RuleDefinition::new(
            "decimal",
            "<em>%l</em> must contain a decimal number.",
            "Must be a valid integer or decimal consist of two parts: an integer and a fraction separated by a decimal point.",
            false,
            decimal,
        ),
        RuleDefinition::new(
            "ip",
            "<em>%l</em> must contain a valid IP address.",
            "Must be a valid IP address.",
            false,
            ip,
        ),
        RuleDefinition::new(
            "base64",
            "<em>%l</em> must contain a base64 string.",
            "Must be a base64 string.",
            false,
            base64,
        ),
        RuleDefinition::new(
            "phone",
            "<em>%l</em> must contain a valid phone number.",
            "Must be a valid phone number.",
            false,
            phone,
        ),
        RuleDefinition::new(
            "cvc",
            "<em>%l</em> must contain a valid CVC.",
            "Must be a valid credit card cvc.",
            false,
            cvc,
        ),
        RuleDefinition::new(
            "creditCard",
            "<em>%l</em> must contain a valid credit card number.",
            "Must be a valid credit card number.",
            false,
            credit_card,
        ),
        RuleDefinition::new(
            "fileType",
            "<em>%l</em> must contain only <em>%p</em> files.",
            "Must be a comma separated list of file types e.g.: gif,png,jpg.",
            true,
            file_type,
        ),
        RuleDefinition::new(
            "hasSpecialChar",
            "<em>%l</em> must contain at least one special character e.g.: $&+,:;=?@#|'\"<>.^*()%!_-",
            "Must contain a special character e.g.: $&+,:;=?@#|'\"<>.^*()%!-.",
            false,
            has_special_char,
        ),
        RuleDefinition::new(
            "hasNumber",
            "<em>%l</em> must contain at least one number.",
            "Must contain a number.",
            false,
            has_number,
        ),
        RuleDefinition::new(
            "hasUpper",
            "<em>%l</em> must contain at least one upper case letter.",
            "Must contain an upper case letter.",
            false,
            has_upper,
        ),
        RuleDefinition::new(
            "hasLower",
            "<em>%l</em> must contain at least one lower case letter.",
            "Must contain a lower case letter.",
            false,
            has_lower,
        ),
    ]
}
