//! Tests for the format code parser.

use std::sync::Arc;

use xlnumfmt::{FormatError, Part, ScanOptions, TokenKind, XLNumFmt};

fn kinds(parts: &[Part]) -> Vec<TokenKind> {
    parts.iter().map(Part::kind).collect()
}

#[test]
fn test_parse_one_section_shares_all_roles() {
    let fmt = XLNumFmt::parse("0.00").unwrap();
    assert_eq!(fmt.section_count(), 1);
    assert!(Arc::ptr_eq(fmt.positive(), fmt.negative()));
    assert!(Arc::ptr_eq(fmt.positive(), fmt.zero()));
    assert!(fmt.text().is_none());
    assert_eq!(
        fmt.positive().parts(),
        &[
            Part::new(TokenKind::Zero, "0"),
            Part::new(TokenKind::Period, "."),
            Part::new(TokenKind::Zero, "0"),
            Part::new(TokenKind::Zero, "0"),
        ]
    );
}

#[test]
fn test_parse_two_sections() {
    let fmt = XLNumFmt::parse("#,###.00_);[RED](#,###.00)").unwrap();
    assert_eq!(fmt.section_count(), 2);
    assert!(Arc::ptr_eq(fmt.positive(), fmt.zero()));
    assert!(!Arc::ptr_eq(fmt.positive(), fmt.negative()));
    assert!(fmt.text().is_none());

    assert_eq!(
        fmt.positive().parts().last(),
        Some(&Part::new(TokenKind::Skip, ")"))
    );
    assert_eq!(fmt.negative().color(), Some("RED"));
}

#[test]
fn test_parse_four_sections() {
    let fmt = XLNumFmt::parse("#,###.00_);[RED](#,###.00);0.00;\"sales \"@").unwrap();
    assert_eq!(fmt.section_count(), 4);

    let positive = fmt.positive();
    let negative = fmt.negative();
    let zero = fmt.zero();
    let text = fmt.text().unwrap();
    assert!(!Arc::ptr_eq(positive, negative));
    assert!(!Arc::ptr_eq(positive, zero));
    assert!(!Arc::ptr_eq(negative, zero));

    assert_eq!(
        positive.parts().last(),
        Some(&Part::new(TokenKind::Skip, ")"))
    );
    assert_eq!(
        &negative.parts()[..2],
        &[
            Part::new(TokenKind::Color, "RED"),
            Part::new(TokenKind::Symbol, "("),
        ]
    );
    assert_eq!(
        kinds(zero.parts()),
        vec![
            TokenKind::Zero,
            TokenKind::Period,
            TokenKind::Zero,
            TokenKind::Zero
        ]
    );
    assert_eq!(
        text.parts(),
        &[
            Part::new(TokenKind::String, "sales "),
            Part::new(TokenKind::Placeholder, "@"),
        ]
    );
}

#[test]
fn test_semicolons_are_not_stored() {
    let fmt = XLNumFmt::parse("0;0;0;@").unwrap();
    for section in [fmt.positive(), fmt.negative(), fmt.zero()] {
        assert!(section.iter().all(|p| p.kind() != TokenKind::Semicolon));
    }
}

#[test]
fn test_parse_rejects_three_sections() {
    let result = XLNumFmt::parse("0;-0;\"zero\"");
    assert!(matches!(result, Err(FormatError::SectionCount { found: 3 })));
}

#[test]
fn test_parse_rejects_five_sections() {
    let result = XLNumFmt::parse("0;0;0;0;0");
    assert!(matches!(result, Err(FormatError::SectionCount { found: 5 })));
}

#[test]
fn test_empty_sections_count() {
    let fmt = XLNumFmt::parse(";;;").unwrap();
    assert_eq!(fmt.section_count(), 4);
    assert!(fmt.positive().is_empty());
    assert!(fmt.text().unwrap().is_empty());

    assert!(XLNumFmt::parse(";;").is_err());
}

#[test]
fn test_quoted_semicolon_does_not_split() {
    let fmt = XLNumFmt::parse("\"a;b\"0").unwrap();
    assert_eq!(fmt.section_count(), 1);
    assert_eq!(fmt.positive().parts()[0], Part::new(TokenKind::String, "a;b"));
}

#[test]
fn test_skipped_semicolon_does_not_split() {
    let fmt = XLNumFmt::parse("0_;0").unwrap();
    assert_eq!(fmt.section_count(), 1);
    assert_eq!(fmt.positive().len(), 3);
}

#[test]
fn test_unterminated_tag_swallows_remaining_sections() {
    let fmt = XLNumFmt::parse("[Red;0").unwrap();
    assert_eq!(fmt.section_count(), 1);
    assert_eq!(fmt.positive().color(), Some("Red;0"));
}

#[test]
fn test_bad_tokens_are_kept() {
    let fmt = XLNumFmt::parse("0 kg").unwrap();
    assert!(fmt.positive().has_bad_tokens());
    assert_eq!(
        kinds(fmt.positive().parts()),
        vec![
            TokenKind::Zero,
            TokenKind::Whitespace,
            TokenKind::Bad,
            TokenKind::Bad
        ]
    );
}

#[test]
fn test_parse_with_extended_symbols() {
    let fmt = xlnumfmt::parse_with_options("0/0", ScanOptions::extended()).unwrap();
    assert!(!fmt.positive().has_bad_tokens());
    assert_eq!(fmt.positive().parts()[1], Part::new(TokenKind::Symbol, "/"));
}

#[test]
fn test_parse_reader() {
    let input = std::io::Cursor::new("0.00;[Red]-0.00");
    let fmt = xlnumfmt::parse_reader(input).unwrap();
    assert_eq!(fmt.section_count(), 2);
    assert_eq!(fmt.negative().color(), Some("Red"));
}

#[test]
fn test_parse_reader_keeps_invalid_utf8_as_bad_token() {
    let input = std::io::Cursor::new(vec![b'0', 0xff, b';', b'0']);
    let fmt = xlnumfmt::parse_reader(input).unwrap();
    assert_eq!(fmt.section_count(), 2);
    assert_eq!(
        fmt.positive().parts(),
        &[
            Part::new(TokenKind::Zero, "0"),
            Part::new(TokenKind::Bad, "\u{FFFD}"),
        ]
    );
}

#[test]
fn test_parse_reader_reports_read_failure() {
    struct FailingReader;

    impl std::io::Read for FailingReader {
        fn read(&mut self, _buf: &mut [u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed"))
        }
    }

    let result = xlnumfmt::parse_reader(FailingReader);
    assert!(matches!(result, Err(FormatError::Io(_))));
}

#[test]
fn test_from_str() {
    let fmt: XLNumFmt = "0%".parse().unwrap();
    assert_eq!(
        kinds(fmt.positive().parts()),
        vec![TokenKind::Zero, TokenKind::Percentage]
    );
}

#[test]
fn test_reparse_is_structurally_identical() {
    let code = "#,##0.00_);[Red](#,##0.00);\"-\";@";
    assert_eq!(XLNumFmt::parse(code).unwrap(), XLNumFmt::parse(code).unwrap());
}

#[test]
fn test_display_round_trips_canonical_code() {
    for code in ["0.00", "#,##0_);[Red](#,##0)", "0;-0;\"zero\";\"text: \"@", "0.00E+00"] {
        let fmt = XLNumFmt::parse(code).unwrap();
        assert_eq!(fmt.to_string(), code);
    }
}

#[test]
fn test_parse_cached() {
    let first = xlnumfmt::parse_cached("0.0%").unwrap();
    let second = xlnumfmt::parse_cached("0.0%").unwrap();
    assert!(Arc::ptr_eq(first.positive(), second.positive()));
}
