// crate modules
use crate::core::CrossSectionKind;

// nom parser combinators
use nom::bytes::complete::{tag, take_while_m_n};
use nom::character::complete::{alpha1, multispace0, space0};
use nom::combinator::{all_consuming, map_res, rest};
use nom::sequence::{delimited, preceded, terminated};
use nom::IResult;

/// Checks for a delimiter line of three or more `-` characters
pub(crate) fn is_delimiter(i: &str) -> bool {
    delimiter(i).is_ok()
}

/// Checks if the line starts a new cross section record
pub(crate) fn is_new_record(i: &str) -> bool {
    kind_keyword(i).is_ok()
}

/// Run of dashes with nothing else on the line but whitespace
fn delimiter(i: &str) -> IResult<&str, &str> {
    all_consuming(delimited(
        space0,
        take_while_m_n(3, usize::MAX, |c: char| c == '-'),
        multispace0,
    ))(i)
}

/// Collision type keyword alone on its line, i.e. `EXCITATION`
pub(crate) fn kind_keyword(i: &str) -> IResult<&str, CrossSectionKind> {
    all_consuming(map_res(
        terminated(alpha1, multispace0),
        str::parse::<CrossSectionKind>,
    ))(i)
}

/// Name following the `DATABASE:` marker, trimmed
pub(crate) fn database_name(i: &str) -> IResult<&str, &str> {
    let (i, name) = preceded(tag("DATABASE:"), rest)(i.trim_start())?;
    Ok((i, name.trim()))
}
