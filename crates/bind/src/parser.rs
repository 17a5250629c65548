//! A `nom`-based parser for bind paths such as `customer.orders[0].id`.
use crate::ast::PathSegment;
use crate::error::BindError;
use nom::{
    IResult, Parser,
    branch::alt,
    bytes::complete::{tag, take_while},
    character::complete::{alpha1, char, u64 as nom_u64},
    combinator::{map, recognize},
    multi::many0,
    sequence::{delimited, pair, preceded},
};

pub fn parse_path(input: &str) -> Result<Vec<PathSegment>, BindError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(BindError::Empty);
    }
    match full_path(trimmed) {
        Ok(("", segments)) => Ok(segments),
        Ok((rem, _)) => Err(BindError::Parse(
            input.to_string(),
            format!("Parser did not consume all input. Remainder: '{}'", rem),
        )),
        Err(e) => Err(BindError::Parse(input.to_string(), e.to_string())),
    }
}

// --- Combinators ---

fn identifier(input: &str) -> IResult<&str, &str> {
    recognize(pair(
        alt((alpha1, tag("_"))),
        take_while(|c: char| c.is_alphanumeric() || c == '_' || c == '-'),
    ))
    .parse(input)
}

fn key_segment(input: &str) -> IResult<&str, PathSegment> {
    map(preceded(char('.'), identifier), |s| {
        PathSegment::Key(s.to_string())
    })
    .parse(input)
}

fn index_segment(input: &str) -> IResult<&str, PathSegment> {
    map(delimited(char('['), nom_u64, char(']')), |i| {
        PathSegment::Index(i as usize)
    })
    .parse(input)
}

fn path_segment(input: &str) -> IResult<&str, PathSegment> {
    alt((key_segment, index_segment)).parse(input)
}

fn full_path(input: &str) -> IResult<&str, Vec<PathSegment>> {
    map(pair(identifier, many0(path_segment)), |(start, mut rest)| {
        let mut segments = vec![PathSegment::Key(start.to_string())];
        segments.append(&mut rest);
        segments
    })
    .parse(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_nested_path() {
        let segments = parse_path("customer.orders[1].id").unwrap();
        assert_eq!(
            segments,
            vec![
                PathSegment::Key("customer".into()),
                PathSegment::Key("orders".into()),
                PathSegment::Index(1),
                PathSegment::Key("id".into()),
            ]
        );
    }

    #[test]
    fn test_parse_rejects_trailing_garbage() {
        assert!(matches!(parse_path("a..b"), Err(BindError::Parse(..))));
        assert_eq!(parse_path("   "), Err(BindError::Empty));
    }
}
