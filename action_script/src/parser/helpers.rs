use pest::iterators::{Pair, Pairs};

use super::{AstError, Rule};

/// Store an attribute, refusing a second value for the same key.
pub(super) fn assign<T>(slot: &mut Option<T>, value: T, key: &'static str) -> Result<(), AstError> {
    if slot.is_some() {
        return Err(AstError::DuplicateAttribute(key));
    }
    *slot = Some(value);
    Ok(())
}

/// Inner pairs of a command, past its keyword.
pub(super) fn arguments(pair: Pair<'_, Rule>) -> Pairs<'_, Rule> {
    let mut inner = pair.into_inner();
    inner.next();
    inner
}

/// Value pair of a `key=value` parameter.
pub(super) fn param_value(pair: Pair<'_, Rule>) -> Result<Pair<'_, Rule>, AstError> {
    pair.into_inner().next().ok_or(AstError::Shape("parameter without value"))
}

/// Strip the surrounding double quotes of a quoted text token.
pub(super) fn unquote(s: &str) -> String {
    s.strip_prefix('"').and_then(|t| t.strip_suffix('"')).unwrap_or(s).to_string()
}

pub(super) fn param_text(pair: Pair<'_, Rule>) -> Result<String, AstError> {
    Ok(param_value(pair)?.as_str().to_string())
}

/// Base-10 integer; values past `u32::MAX` saturate.
pub(super) fn parse_integer(pair: &Pair<'_, Rule>) -> u32 {
    let digits = pair.as_str();
    digits.parse::<u32>().unwrap_or(u32::MAX)
}

/// Unsigned `float` pair, in either the fract or the whole form.
pub(super) fn parse_float(pair: Pair<'_, Rule>) -> Result<f64, AstError> {
    let form = pair.into_inner().next().ok_or(AstError::Shape("empty float"))?;
    match form.as_rule() {
        Rule::float_fract => {
            // integral digits may be absent (".5")
            let text = form.as_str();
            let text = if text.starts_with('.') { format!("0{text}") } else { text.to_string() };
            text.parse().map_err(|_| AstError::Shape("invalid fractional number"))
        },
        Rule::float_whole => form.as_str().parse().map_err(|_| AstError::Shape("invalid whole number")),
        _ => Err(AstError::Shape("unexpected float form")),
    }
}

/// `sign? float`; negated when the sign is `-`. Also returns whether a sign was written.
pub(super) fn parse_signed(pair: Pair<'_, Rule>) -> Result<(f64, bool), AstError> {
    let mut negative = false;
    let mut signed = false;
    let mut value = None;
    for part in pair.into_inner() {
        match part.as_rule() {
            Rule::sign => {
                signed = true;
                negative = part.as_str() == "-";
            },
            Rule::float => value = Some(parse_float(part)?),
            _ => return Err(AstError::Shape("unexpected token in signed number")),
        }
    }
    let value = value.ok_or(AstError::Shape("signed number without digits"))?;
    Ok((if negative { -value } else { value }, signed))
}

pub(super) fn parse_signed_float(pair: Pair<'_, Rule>) -> Result<f64, AstError> {
    parse_signed(pair).map(|(value, _)| value)
}

/// Values of a `coordinate_list` in written order.
pub(super) fn parse_coordinate_list(pair: Pair<'_, Rule>) -> Result<Vec<f64>, AstError> {
    pair.into_inner().map(parse_signed_float).collect()
}

pub(super) fn parse_boolean(text: &str) -> Result<bool, AstError> {
    match text {
        "on" | "true" | "yes" => Ok(true),
        "off" | "false" | "no" => Ok(false),
        _ => Err(AstError::Shape("unknown boolean keyword")),
    }
}

/// Keyword pairs such as `loop`/`noloop`: true for the affirmative form.
pub(super) fn parse_status(pair: &Pair<'_, Rule>, affirmative: &str) -> bool {
    pair.as_str() == affirmative
}
