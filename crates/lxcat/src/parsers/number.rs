// nom parser combinators
use nom::branch::alt;
use nom::character::complete::{space0, space1};
use nom::combinator::{eof, peek};
use nom::multi::separated_list1;
use nom::number::complete::double;
use nom::sequence::{preceded, terminated};
use nom::IResult;

/// List of whitespace separated doubles as a vector of f64 values
///
/// Every value must be a whole token, so `1.0-2.0` is not two numbers.
pub(crate) fn vector_of_f64(i: &str) -> IResult<&str, Vec<f64>> {
    terminated(separated_list1(space1, whole_f64), space0)(i.trim_start())
}

/// Leading double of a line, which must be a whole whitespace-separated token
pub(crate) fn first_f64(i: &str) -> IResult<&str, f64> {
    preceded(space0, whole_f64)(i)
}

/// Double followed by whitespace or the end of the line
fn whole_f64(i: &str) -> IResult<&str, f64> {
    terminated(double, peek(alt((space1, eof))))(i)
}
