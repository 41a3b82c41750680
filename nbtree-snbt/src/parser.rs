//! Token recognizers shared by the reader and the printer. The printer needs
//! them to decide whether a string can be written without quotes.
use nbtree::Element;
use nom::{
    branch::alt,
    bytes::complete::{tag, take_while1},
    character::complete::{char, digit0, digit1, one_of},
    combinator::{opt, recognize},
    sequence::{pair, tuple},
    IResult,
};

/// Characters allowed in an unquoted string.
pub(crate) fn is_token_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.' | '+')
}

pub(crate) fn unquoted(input: &str) -> IResult<&str, &str> {
    take_while1(is_token_char)(input)
}

/// A signed run of digits, as used by typed array elements.
pub(crate) fn integer(input: &str) -> IResult<&str, &str> {
    recognize(pair(opt(one_of("+-")), digit1))(input)
}

// The body of a number literal: sign, digits with an optional fraction, and an
// optional exponent. NaN and infinities are only numbers with a float suffix.
fn decimal(input: &str) -> IResult<&str, &str> {
    alt((
        recognize(tuple((
            opt(one_of("+-")),
            alt((
                recognize(pair(digit1, opt(pair(char('.'), digit0)))),
                recognize(pair(char('.'), digit1)),
            )),
            opt(tuple((one_of("eE"), opt(one_of("+-")), digit1))),
        ))),
        tag("NaN"),
        recognize(pair(opt(one_of("+-")), tag("inf"))),
    ))(input)
}

/// Try to read a number literal from the start of `input`, returning the
/// element and the number of bytes it used.
///
/// `None` means the text is not a number and should be read as a string. That
/// covers a literal followed by more token characters (`12abc`), a suffix that
/// does not fit the literal (`1.5b`), and values out of range for their type
/// (`300b`).
pub(crate) fn number(input: &str) -> Option<(Element, usize)> {
    let (rest, (body, suffix)) = pair(decimal, opt(one_of("bBsSlLfFdD")))(input).ok()?;
    if rest.starts_with(is_token_char) {
        return None;
    }

    let integral = !body.contains(|c: char| matches!(c, '.' | 'e' | 'E'));
    let el = match (suffix, integral) {
        (None, true) => Element::Int(body.parse().ok()?),
        (None, false) => Element::Double(body.parse().ok()?),
        (Some('b' | 'B'), true) => Element::Byte(body.parse().ok()?),
        (Some('s' | 'S'), true) => Element::Short(body.parse().ok()?),
        (Some('l' | 'L'), true) => Element::Long(body.parse().ok()?),
        (Some('f' | 'F'), _) => Element::Float(body.parse().ok()?),
        (Some('d' | 'D'), _) => Element::Double(body.parse().ok()?),
        _ => return None,
    };
    Some((el, input.len() - rest.len()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_numbers() {
        assert_eq!(number("12"), Some((Element::Int(12), 2)));
        assert_eq!(number("-12"), Some((Element::Int(-12), 3)));
        assert_eq!(number("1.5"), Some((Element::Double(1.5), 3)));
        assert_eq!(number("1e3"), Some((Element::Double(1000.0), 3)));
        assert_eq!(number(".5"), Some((Element::Double(0.5), 2)));
    }

    #[test]
    fn suffixes() {
        assert_eq!(number("1b"), Some((Element::Byte(1), 2)));
        assert_eq!(number("1S"), Some((Element::Short(1), 2)));
        assert_eq!(number("1L"), Some((Element::Long(1), 2)));
        assert_eq!(number("1f"), Some((Element::Float(1.0), 2)));
        assert_eq!(number("2.5d"), Some((Element::Double(2.5), 4)));
        assert_eq!(number("-1.5e-1F"), Some((Element::Float(-0.15), 8)));
    }

    #[test]
    fn stops_at_boundary() {
        assert_eq!(number("1b,2b"), Some((Element::Byte(1), 2)));
        assert_eq!(number("3}"), Some((Element::Int(3), 1)));
        assert_eq!(number("3 "), Some((Element::Int(3), 1)));
    }

    #[test]
    fn not_numbers() {
        for s in ["", "abc", "12abc", "1bb", "1.5b", "1.0L", "300b", "99999999999", "-", "."] {
            assert_eq!(number(s), None, "{:?}", s);
        }
    }

    #[test]
    fn non_finite_needs_suffix() {
        assert_eq!(number("NaN"), None);
        assert_eq!(number("inf"), None);
        assert_eq!(number("-infd"), Some((Element::Double(f64::NEG_INFINITY), 5)));
        assert!(matches!(number("NaNf"), Some((Element::Float(f), 4)) if f.is_nan()));
    }

    #[test]
    fn tokens() {
        assert_eq!(unquoted("a-b_c.d+e:1"), Ok((":1", "a-b_c.d+e")));
        assert!(unquoted(":1").is_err());
        assert_eq!(integer("-12b"), Ok(("b", "-12")));
    }
}
