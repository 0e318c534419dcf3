// nom parser combinators
use nom::bytes::complete::take_until1;
use nom::character::complete::char;
use nom::combinator::rest;
use nom::sequence::separated_pair;
use nom::IResult;

/// Split a `KEY: value` line at the first colon, trimming both sides
///
/// The value may itself contain colons, e.g. `UPDATED: 2010-03-02 16:19:07`.
pub(crate) fn key_value(i: &str) -> IResult<&str, (&str, &str)> {
    let (i, (key, value)) = separated_pair(take_until1(":"), char(':'), rest)(i)?;
    Ok((i, (key.trim(), value.trim())))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simple_entry() {
        assert_eq!(
            key_value("PROCESS: E + N2 -> E + N2, Elastic"),
            Ok(("", ("PROCESS", "E + N2 -> E + N2, Elastic")))
        );
    }

    #[test]
    fn colons_in_value() {
        assert_eq!(
            key_value("UPDATED: 2010-03-02 16:19:07"),
            Ok(("", ("UPDATED", "2010-03-02 16:19:07")))
        );
    }

    #[test]
    fn padded_and_empty() {
        assert_eq!(key_value("PARAM.:  m/M = 0.0000195"), Ok(("", ("PARAM.", "m/M = 0.0000195"))));
        assert_eq!(key_value("COMMENT:"), Ok(("", ("COMMENT", ""))));
    }

    #[test]
    fn missing_separator() {
        assert!(key_value("no separator here").is_err());
        assert!(key_value(": no key").is_err());
    }
}
