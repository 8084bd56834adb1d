//! Field-spec compiler.
//!
//! A field spec names the parts of a record an extractor reads. Components
//! are joined by `:` and each has the shape
//!
//! ```text
//! TAG[|I1I2|][SUBFIELDS | [N] | [N-M]]
//! ```
//!
//! - `TAG` is three characters. `X` in the second position expands the
//!   component over `T00`..`T99`; `X` only in the third position expands it
//!   over `TT0`..`TT9`.
//! - `|I1I2|` constrains the indicators; `*` matches anything.
//! - `SUBFIELDS` is a list of subfield codes for data fields. `_ATOZ_` is
//!   shorthand for every lowercase letter.
//! - `[N]` and `[N-M]` select a character or a closed character range of a
//!   control field payload.
//!
//! ```
//! use mrrc_extract::field_spec::{compile_field_spec, Offset, SubfieldSelection};
//!
//! let components = compile_field_spec("008[35-37]:264|*1|c:90Xab").unwrap();
//! assert_eq!(components.len(), 12);
//! assert_eq!(components[0].offset, Some(Offset::Range(35, 37)));
//! assert_eq!(components[1].subfields, SubfieldSelection::Single('c'));
//! assert_eq!(components[2].tag, "900");
//! ```

use crate::error::{ExtractError, Result};
use crate::record::Field;
use nom::{
    branch::alt,
    bytes::complete::take,
    character::complete::{anychar, char, digit1},
    combinator::{cut, map, map_res, opt, rest},
    sequence::{pair, preceded, separated_pair, terminated},
    IResult,
};

/// Separator between components of a field spec.
pub const COMPONENT_SEPARATOR: char = ':';

/// Tag character that expands into every digit.
pub const TAG_WILDCARD: char = 'X';

/// Indicator character that matches any indicator value.
pub const INDICATOR_WILDCARD: char = '*';

/// Shorthand for all alphabetic subfield codes.
pub const ALL_LETTERS_TOKEN: &str = "_ATOZ_";

const ALL_LETTERS: &str = "abcdefghijklmnopqrstuvwxyz";

/// Indicator constraint of a component.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndicatorMatch {
    /// Any indicator value is accepted
    Any,
    /// Only this exact indicator value is accepted
    Exact(char),
}

impl IndicatorMatch {
    fn from_spec(c: char) -> Self {
        if c == INDICATOR_WILDCARD {
            IndicatorMatch::Any
        } else {
            IndicatorMatch::Exact(c)
        }
    }

    /// Whether the indicator value satisfies this constraint.
    #[must_use]
    pub fn matches(self, indicator: char) -> bool {
        match self {
            IndicatorMatch::Any => true,
            IndicatorMatch::Exact(c) => c == indicator,
        }
    }
}

/// How subfields are selected from a data field occurrence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubfieldSelection {
    /// No codes given: every alphabetic subfield, joined into one value
    All,
    /// One code: every matching subfield becomes its own value
    Single(char),
    /// Several codes: matching subfields joined into one value, ordered by
    /// their code's first position in the list unless storage order is kept
    Multi(String),
}

impl SubfieldSelection {
    fn from_codes(codes: &str) -> Self {
        let mut chars = codes.chars();
        match (chars.next(), chars.next()) {
            (None, _) => SubfieldSelection::All,
            (Some(code), None) => SubfieldSelection::Single(code),
            _ => SubfieldSelection::Multi(codes.to_string()),
        }
    }
}

/// Character selection within a control field payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Offset {
    /// `[N]`: the single character at offset N
    Position(usize),
    /// `[N-M]`: characters N through M inclusive
    Range(usize, usize),
}

/// One compiled component of a field spec.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldComponent {
    /// Field tag (wildcards already expanded)
    pub tag: String,
    /// First indicator constraint
    pub indicator1: IndicatorMatch,
    /// Second indicator constraint
    pub indicator2: IndicatorMatch,
    /// Subfield selection mode (data fields)
    pub subfields: SubfieldSelection,
    /// Character selection (control fields)
    pub offset: Option<Offset>,
}

impl FieldComponent {
    /// Control field tags begin with `00`.
    #[must_use]
    pub fn is_control(&self) -> bool {
        self.tag.starts_with("00")
    }

    /// Whether both indicators of `field` satisfy this component.
    #[must_use]
    pub fn matches_indicators(&self, field: &Field) -> bool {
        self.indicator1.matches(field.indicator1) && self.indicator2.matches(field.indicator2)
    }

    /// Parses a single component, without wildcard expansion.
    ///
    /// # Errors
    ///
    /// Returns [`ExtractError::InvalidSpec`] when the tag is shorter than
    /// three characters, the indicator constraint is truncated, or the offset
    /// is not `[N]` / `[N-M]`.
    pub fn parse(component: &str) -> Result<Self> {
        let expanded = component.replace(ALL_LETTERS_TOKEN, ALL_LETTERS);
        let (_, (tag, indicators, selector)) = component_parts(&expanded).map_err(|e| {
            ExtractError::InvalidSpec(format!("malformed field spec component {component:?}: {e}"))
        })?;
        let (ind1, ind2) = indicators.unwrap_or((INDICATOR_WILDCARD, INDICATOR_WILDCARD));
        let (subfields, offset) = match selector {
            Selector::Offset(offset) => (SubfieldSelection::All, Some(offset)),
            Selector::Codes(codes) => (SubfieldSelection::from_codes(codes), None),
        };
        Ok(FieldComponent {
            tag: tag.to_string(),
            indicator1: IndicatorMatch::from_spec(ind1),
            indicator2: IndicatorMatch::from_spec(ind2),
            subfields,
            offset,
        })
    }

    /// Copies of this component for every tag its wildcard stands for.
    fn expand(self) -> Vec<FieldComponent> {
        let chars: Vec<char> = self.tag.chars().collect();
        let tags: Vec<String> = if chars[1] == TAG_WILDCARD {
            (0..100).map(|i| format!("{}{i:02}", chars[0])).collect()
        } else if chars[2] == TAG_WILDCARD {
            (0..10).map(|i| format!("{}{}{i}", chars[0], chars[1])).collect()
        } else {
            return vec![self];
        };
        tags.into_iter()
            .map(|tag| FieldComponent {
                tag,
                ..self.clone()
            })
            .collect()
    }
}

/// Compiles a field spec into its ordered component list, expanding tag
/// wildcards. Empty components (`"245a::100a"`) are skipped.
///
/// # Errors
///
/// Returns [`ExtractError::InvalidSpec`] if any component is malformed.
pub fn compile_field_spec(spec: &str) -> Result<Vec<FieldComponent>> {
    let mut components = Vec::new();
    for part in spec.split(COMPONENT_SEPARATOR).filter(|p| !p.is_empty()) {
        components.extend(FieldComponent::parse(part)?.expand());
    }
    Ok(components)
}

enum Selector<'a> {
    Offset(Offset),
    Codes(&'a str),
}

fn number(input: &str) -> IResult<&str, usize> {
    map_res(digit1, str::parse::<usize>)(input)
}

fn indicators(input: &str) -> IResult<&str, (char, char)> {
    preceded(
        char('|'),
        cut(terminated(pair(anychar, anychar), opt(char('|')))),
    )(input)
}

// Anything after the closing bracket is ignored.
fn offset(input: &str) -> IResult<&str, Offset> {
    preceded(
        char('['),
        cut(terminated(
            alt((
                map(separated_pair(number, char('-'), number), |(start, end)| {
                    Offset::Range(start, end)
                }),
                map(number, Offset::Position),
            )),
            char(']'),
        )),
    )(input)
}

fn component_parts(input: &str) -> IResult<&str, (&str, Option<(char, char)>, Selector<'_>)> {
    let (input, tag) = take(3usize)(input)?;
    let (input, indicators) = opt(indicators)(input)?;
    let (input, selector) = alt((map(offset, Selector::Offset), map(rest, Selector::Codes)))(input)?;
    Ok((input, (tag, indicators, selector)))
}
