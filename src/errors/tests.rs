//! Unit tests for error handling.
//!
//! This module contains tests for error types and error reporting.

use crate::errors::errors::{Error, ErrorImpl, ErrorStage, ErrorTip};
use crate::Position;
use std::sync::Arc;

fn position(offset: u32) -> Position {
    Position(offset, Arc::from("test.fax"))
}

#[test]
fn test_error_creation() {
    let error = Error::new(
        ErrorImpl::UnrecognisedToken {
            token: "@".to_string(),
        },
        position(10),
    );

    assert_eq!(error.get_error_name(), "UnrecognisedToken");
    assert_eq!(error.stage(), ErrorStage::Lex);
}

#[test]
fn test_error_position() {
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            expected: ")".to_string(),
            found: "EOF".to_string(),
        },
        position(42),
    );

    assert_eq!(error.get_position().0, 42);
    assert_eq!(&*error.get_position().1, "test.fax");
}

#[test]
fn test_unexpected_token_error() {
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            expected: ")".to_string(),
            found: ",".to_string(),
        },
        position(0),
    );

    assert_eq!(error.get_error_name(), "UnexpectedToken");
    assert_eq!(error.stage(), ErrorStage::Parse);
    assert_eq!(error.get_tip().to_string(), "expected `)`, found `,`");
}

#[test]
fn test_expected_expression_error() {
    let error = Error::new(
        ErrorImpl::ExpectedExpression {
            first: "]".to_string(),
            second: "EOF".to_string(),
        },
        position(3),
    );

    assert_eq!(error.get_error_name(), "ExpectedExpression");
    assert_eq!(
        error.get_tip().to_string(),
        "expected an expression, found `]` followed by `EOF`"
    );
}

#[test]
fn test_number_parse_error() {
    let error = Error::new(
        ErrorImpl::NumberParseError {
            token: "99999999999999999999999".to_string(),
        },
        position(0),
    );

    assert_eq!(error.get_error_name(), "NumberParseError");
    assert_eq!(error.stage(), ErrorStage::Parse);
}

#[test]
fn test_error_tip_none() {
    let error = Error::new(
        ErrorImpl::UnrecognisedToken {
            token: "@".to_string(),
        },
        position(0),
    );

    assert!(matches!(error.get_tip(), ErrorTip::None));
}

#[test]
fn test_error_tip_suggestion() {
    let error = Error::new(
        ErrorImpl::UnexpectedTokenDetailed {
            token: "}".to_string(),
            message: "expected attribute value".to_string(),
        },
        position(0),
    );

    match error.get_tip() {
        ErrorTip::Suggestion(tip) => {
            assert_eq!(tip, "Unexpected token: `}`, expected attribute value")
        }
        _ => panic!("Expected suggestion tip"),
    }
}

#[test]
fn test_error_tip_display() {
    let tip = ErrorTip::Suggestion("Try this instead".to_string());
    assert_eq!(tip.to_string(), "Try this instead");

    let tip = ErrorTip::None;
    assert_eq!(tip.to_string(), "");
}

#[test]
fn test_error_display_includes_position() {
    let error = Error::new(
        ErrorImpl::UnrecognisedToken {
            token: "@".to_string(),
        },
        position(7),
    );

    assert_eq!(error.to_string(), "unrecognised token: \"@\" at test.fax:7");
}

#[test]
fn test_nesting_too_deep() {
    let error = Error::new(ErrorImpl::NestingTooDeep { limit: 256 }, position(3));

    assert_eq!(error.get_error_name(), "NestingTooDeep");
    assert_eq!(error.stage(), ErrorStage::Parse);
    assert_eq!(
        error.to_string(),
        "expression nested deeper than 256 levels at test.fax:3"
    );
}
