use aw_action_data::{Altitude, AltitudeKind, Coordinates, WorldCoordinates};
use pest::iterators::Pair;

use super::helpers::{parse_float, parse_integer, parse_signed, parse_signed_float};
use super::{AstError, Rule};

/// world_coordinates -> (absolute | relative) altitude? direction?
pub(super) fn parse_world_coordinates(pair: Pair<'_, Rule>) -> Result<WorldCoordinates, AstError> {
    let mut it = pair.into_inner();
    let position = it.next().ok_or(AstError::Shape("coordinates block without position"))?;
    let coordinates = match position.as_rule() {
        Rule::absolute_coordinates => {
            let mut axes = position.into_inner();
            let ns = axes.next().ok_or(AstError::Shape("missing north/south coordinate"))?;
            let ew = axes.next().ok_or(AstError::Shape("missing east/west coordinate"))?;
            Coordinates::Absolute { ns: parse_axis(ns, "n")?, ew: parse_axis(ew, "e")? }
        },
        Rule::relative_coordinates => {
            let mut offsets = position.into_inner();
            let x = offsets.next().ok_or(AstError::Shape("missing relative x"))?;
            let y = offsets.next().ok_or(AstError::Shape("missing relative y"))?;
            Coordinates::Relative { x: parse_signed_float(x)?, y: parse_signed_float(y)? }
        },
        _ => return Err(AstError::Shape("unexpected coordinates form")),
    };

    let mut altitude = None;
    let mut direction = None;
    for part in it {
        match part.as_rule() {
            Rule::altitude => {
                let (value, signed) = parse_signed(part)?;
                let kind = if signed { AltitudeKind::Relative } else { AltitudeKind::Absolute };
                altitude = Some(Altitude { kind, value });
            },
            Rule::direction => {
                let code = part.into_inner().next().ok_or(AstError::Shape("direction without digits"))?;
                direction = Some(parse_integer(&code));
            },
            _ => return Err(AstError::Shape("unexpected coordinates suffix")),
        }
    }

    Ok(WorldCoordinates { coordinates, altitude, direction })
}

/// `<float><axis letter>`; negated unless the letter is `positive` (any case).
fn parse_axis(pair: Pair<'_, Rule>, positive: &str) -> Result<f64, AstError> {
    let mut it = pair.into_inner();
    let value = parse_float(it.next().ok_or(AstError::Shape("axis without value"))?)?;
    let axis = it.next().ok_or(AstError::Shape("axis without letter"))?;
    Ok(if axis.as_str().eq_ignore_ascii_case(positive) { value } else { -value })
}
