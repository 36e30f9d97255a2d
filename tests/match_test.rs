/// This file contains table driven tests for the regex and literal operations of the scanner.
/// Each entry positions a fresh scanner, runs one operation and checks the returned text and the
/// resulting position.
use markscan::{Pattern, Scanner};

/// The scanner operation a test entry runs.
#[derive(Debug, Clone, Copy)]
enum Op {
    Match,
    UntilMatch,
    String,
    StringFast,
    UntilString,
}

/// Test data for the match tests.
/// The test data consists of the operation, a pattern or literal with its flags, an input
/// string, the start position, the expected result and the expected position afterwards.
#[derive(Debug)]
struct TestData {
    op: Op,
    pattern: &'static str,
    flags: &'static str,
    input: &'static str,
    start: usize,
    expected: &'static str,
    end: usize,
}

// Sticky regex match.
macro_rules! tm {
    ($pattern:expr, $flags:expr, $input:expr, $start:expr, $expected:expr, $end:expr) => {
        TestData {
            op: Op::Match,
            pattern: $pattern,
            flags: $flags,
            input: $input,
            start: $start,
            expected: $expected,
            end: $end,
        }
    };
}

// Global regex scan-ahead.
macro_rules! tu {
    ($pattern:expr, $flags:expr, $input:expr, $start:expr, $expected:expr, $end:expr) => {
        TestData {
            op: Op::UntilMatch,
            pattern: $pattern,
            flags: $flags,
            input: $input,
            start: $start,
            expected: $expected,
            end: $end,
        }
    };
}

// Literal operations.
macro_rules! tl {
    ($op:expr, $literal:expr, $input:expr, $start:expr, $expected:expr, $end:expr) => {
        TestData {
            op: $op,
            pattern: $literal,
            flags: "",
            input: $input,
            start: $start,
            expected: $expected,
            end: $end,
        }
    };
}

const TEST_DATA: &[TestData] = &[
    // ---------------------------------------------------------------------------------------------
    // Sticky matches
    // ---------------------------------------------------------------------------------------------
    tm!(r"\d+", "y", "  42px", 2, "42", 4),
    tm!(r"\d+", "y", "  42px", 4, "", 4),
    tm!(r"\d+", "y", "  42px", 0, "", 0),
    tm!(r"\d+", "y", "  42px", 6, "", 6),
    tm!(r"[a-z]+", "iy", "<DiV>", 1, "DiV", 4),
    tm!(r"\s*", "y", "abc", 0, "", 0),
    tm!(r"\s+", "y", " \t\nx", 0, " \t\n", 3),
    tm!(r"[^<]+", "y", "\u{1f4a9}\u{1f4a9}<", 0, "\u{1f4a9}\u{1f4a9}", 2),
    tm!(r"\w+", "uy", "a\u{e9}\u{e8}b c", 0, "a\u{e9}\u{e8}b", 4),
    tm!(r"\bid\b", "y", "pid id", 1, "", 1),
    tm!(r"\bid\b", "y", "pid id", 4, "id", 6),
    tm!(r".+", "y", "ab\ncd", 0, "ab", 2),
    tm!(r".+", "sy", "ab\ncd", 0, "ab\ncd", 5),
    tm!(r"^b", "my", "a\nb", 2, "b", 3),
    tm!(r"^b", "y", "a\nb", 2, "", 2),
    tm!(r#""[^"]*""#, "y", "=\"\u{65e5}\u{672c}\"/>", 1, "\"\u{65e5}\u{672c}\"", 5),
    // ---------------------------------------------------------------------------------------------
    // Global scan-ahead
    // ---------------------------------------------------------------------------------------------
    tu!(r"\d+", "g", "abc123def", 0, "abc", 3),
    tu!(r"\d+", "g", "abc123def", 3, "", 3),
    tu!(r"\d+", "g", "abc123def", 6, "", 6),
    tu!(r"\d+", "g", "abc123def", 1, "bc", 3),
    tu!(r"-->", "g", "<!-- \u{1f4a9} -->", 4, " \u{1f4a9} ", 7),
    tu!(r"</\w+>", "g", "\u{e9}t\u{e9}</p>", 0, "\u{e9}t\u{e9}", 3),
    tu!(r"END", "gi", "text end", 0, "text ", 5),
    tu!(r"x*", "g", "abc", 0, "", 0),
    // ---------------------------------------------------------------------------------------------
    // Literals
    // ---------------------------------------------------------------------------------------------
    tl!(Op::StringFast, "<foo", "<foo>", 0, "<foo", 4),
    tl!(Op::StringFast, "<foo", "<fo", 0, "", 0),
    tl!(Op::StringFast, "", "<foo>", 0, "", 0),
    tl!(Op::StringFast, "\u{e9}", "\u{e9}", 0, "\u{e9}", 1),
    tl!(Op::StringFast, "\u{e9}", "\u{e9}x", 0, "", 0),
    tl!(Op::String, "\u{e9}", "\u{e9}x", 0, "\u{e9}", 1),
    tl!(Op::String, "<\u{1f4a9}/>", "a<\u{1f4a9}/>", 1, "<\u{1f4a9}/>", 5),
    tl!(Op::String, "<\u{1f4a9}/>", "a<\u{1f4a9}/", 1, "", 1),
    tl!(Op::String, "</a>", "\u{1f4a9}</a>", 1, "</a>", 5),
    tl!(Op::UntilString, "</a>", "<a>\u{1f4a9}</a>", 0, "<a>\u{1f4a9}", 4),
    tl!(Op::UntilString, "</a>", "<a>\u{1f4a9}</a>", 4, "", 4),
    tl!(Op::UntilString, "</b>", "<a>\u{1f4a9}</a>", 0, "", 0),
    tl!(Op::UntilString, "", "abc", 1, "", 1),
    tl!(Op::UntilString, "c", "abc", 1, "b", 2),
];

fn run(data: &TestData) -> (String, usize) {
    let mut scanner = Scanner::new(data.input);
    scanner.reset(data.start as isize);
    let result = match data.op {
        Op::Match | Op::UntilMatch => {
            let pattern = Pattern::with_flags(data.pattern, data.flags)
                .unwrap_or_else(|e| panic!("{:?}: {}", data, e));
            let result = if matches!(data.op, Op::Match) {
                scanner.consume_match(&pattern)
            } else {
                scanner.consume_until_match(&pattern)
            };
            result.unwrap_or_else(|e| panic!("{:?}: {}", data, e))
        }
        Op::String => scanner.consume_string(data.pattern),
        Op::StringFast => scanner.consume_string_fast(data.pattern),
        Op::UntilString => scanner.consume_until_string(data.pattern),
    };
    (result.to_string(), scanner.position())
}

#[test]
fn match_test() {
    let _ = env_logger::builder().is_test(true).try_init();
    for (index, data) in TEST_DATA.iter().enumerate() {
        let (result, position) = run(data);
        assert_eq!(
            result, data.expected,
            "#{} {:?}: unexpected result",
            index, data
        );
        assert_eq!(
            position, data.end,
            "#{} {:?}: unexpected position",
            index, data
        );
    }
}

#[test]
fn wrong_anchoring_is_rejected() {
    let _ = env_logger::builder().is_test(true).try_init();
    let sticky = Pattern::with_flags(r"\d", "y").unwrap();
    let global = Pattern::with_flags(r"\d", "g").unwrap();
    let mut scanner = Scanner::new("a1");

    let err = scanner.consume_until_match(&sticky).unwrap_err();
    assert_eq!(
        err.to_string(),
        r"consume_until_match requires a global pattern, got sticky pattern '\d'"
    );
    scanner.advance_one();
    assert!(scanner.consume_match(&global).is_err());
    assert_eq!(scanner.position(), 1);
}
