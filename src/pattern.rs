//! Module with the pattern types and their methods.
use log::trace;
use regex_automata::{meta::Regex, util::syntax, Anchored, Input, Match};

use crate::{Result, ScanError, ScanErrorKind};

/// The anchoring mode of a [Pattern].
///
/// The two modes correspond to two different scanner operations:
/// * [Anchoring::Sticky] patterns must match exactly at the search start and are used with
///   [crate::Scanner::consume_match].
/// * [Anchoring::Global] patterns may match anywhere at or after the search start and are used
///   with [crate::Scanner::consume_until_match].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Anchoring {
    /// The match must begin exactly at the search start offset.
    Sticky,
    /// The match is searched forward from the search start offset.
    Global,
}

impl Anchoring {
    /// The flag letter that selects this mode in a flag string.
    #[inline]
    pub fn flag(&self) -> char {
        match self {
            Anchoring::Sticky => 'y',
            Anchoring::Global => 'g',
        }
    }
}

impl std::fmt::Display for Anchoring {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Anchoring::Sticky => write!(f, "sticky"),
            Anchoring::Global => write!(f, "global"),
        }
    }
}

/// A compiled regular expression bundled with its anchoring mode.
///
/// A pattern carries no search state. The search start offset is handed in by the scanner on
/// every call, so one pattern can be shared by any number of scanners, also across threads.
#[derive(Debug, Clone)]
pub struct Pattern {
    regex: Regex,
    anchoring: Anchoring,
    source: String,
    flags: String,
}

impl Pattern {
    /// Create a new sticky pattern with default syntax options.
    pub fn sticky(pattern: &str) -> Result<Self> {
        PatternBuilder::new().build(pattern, Anchoring::Sticky)
    }

    /// Create a new global pattern with default syntax options.
    pub fn global(pattern: &str) -> Result<Self> {
        PatternBuilder::new().build(pattern, Anchoring::Global)
    }

    /// Create a new pattern from a flag string.
    ///
    /// Supported flags:
    /// * `y` - sticky
    /// * `g` - global
    /// * `i` - case insensitive
    /// * `m` - `^` and `$` match at line boundaries
    /// * `s` - `.` matches `\n`
    /// * `u` - accepted for compatibility, matching is always Unicode aware
    ///
    /// Exactly one of `y` and `g` must be given.
    pub fn with_flags(pattern: &str, flags: &str) -> Result<Self> {
        let mut builder = PatternBuilder::new();
        let mut anchoring = None;
        for flag in flags.chars() {
            match flag {
                'y' => anchoring = Self::select_anchoring(anchoring, Anchoring::Sticky, flags)?,
                'g' => anchoring = Self::select_anchoring(anchoring, Anchoring::Global, flags)?,
                'i' => builder = builder.case_insensitive(true),
                'm' => builder = builder.multi_line(true),
                's' => builder = builder.dot_matches_new_line(true),
                'u' => {}
                _ => return Err(ScanError::new(ScanErrorKind::UnknownFlag(flag))),
            }
        }
        let anchoring = anchoring
            .ok_or_else(|| ScanError::new(ScanErrorKind::MissingAnchoring(flags.to_string())))?;
        builder.build(pattern, anchoring)
    }

    // A flag string must not select both anchoring modes.
    fn select_anchoring(
        current: Option<Anchoring>,
        mode: Anchoring,
        flags: &str,
    ) -> Result<Option<Anchoring>> {
        if current.is_some_and(|a| a != mode) {
            Err(ScanError::new(ScanErrorKind::MissingAnchoring(
                flags.to_string(),
            )))
        } else {
            Ok(Some(mode))
        }
    }

    /// Get the regular expression source.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Get the anchoring mode.
    #[inline]
    pub fn anchoring(&self) -> Anchoring {
        self.anchoring
    }

    /// Check if the pattern is sticky.
    #[inline]
    pub fn is_sticky(&self) -> bool {
        self.anchoring == Anchoring::Sticky
    }

    /// Check if the pattern is global.
    #[inline]
    pub fn is_global(&self) -> bool {
        self.anchoring == Anchoring::Global
    }

    /// Runs the pattern against the whole haystack, starting at byte offset `start`.
    ///
    /// The haystack is never cut at `start`, so look-around assertions like `\b` see the text
    /// before the search start. Sticky patterns run an anchored search.
    pub(crate) fn search_at(&self, haystack: &str, start: usize) -> Option<Match> {
        let anchored = match self.anchoring {
            Anchoring::Sticky => Anchored::Yes,
            Anchoring::Global => Anchored::No,
        };
        let input = Input::new(haystack).range(start..).anchored(anchored);
        let found = self.regex.search(&input);
        trace!("Search {} at {} -> {:?}", self, start, found);
        found
    }
}

impl std::fmt::Display for Pattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "/{}/{}", self.source, self.flags)
    }
}

/// A builder for patterns with non-default syntax options.
#[derive(Debug, Clone, Default)]
pub struct PatternBuilder {
    case_insensitive: bool,
    multi_line: bool,
    dot_matches_new_line: bool,
}

impl PatternBuilder {
    /// Creates a new pattern builder with default syntax options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Match letters regardless of case.
    pub fn case_insensitive(mut self, yes: bool) -> Self {
        self.case_insensitive = yes;
        self
    }

    /// Let `^` and `$` match at the start and end of lines.
    pub fn multi_line(mut self, yes: bool) -> Self {
        self.multi_line = yes;
        self
    }

    /// Let `.` match `\n`.
    pub fn dot_matches_new_line(mut self, yes: bool) -> Self {
        self.dot_matches_new_line = yes;
        self
    }

    /// Compiles the pattern with the given anchoring mode.
    pub fn build(self, pattern: &str, anchoring: Anchoring) -> Result<Pattern> {
        let config = syntax::Config::new()
            .case_insensitive(self.case_insensitive)
            .multi_line(self.multi_line)
            .dot_matches_new_line(self.dot_matches_new_line);
        let regex = Regex::builder()
            .syntax(config)
            .build(pattern)
            .map_err(|e| {
                ScanError::new(ScanErrorKind::RegexBuildError(e, pattern.to_string()))
            })?;
        let flags = self.flags(anchoring);
        trace!("Compiled pattern /{}/{}", pattern, flags);
        Ok(Pattern {
            regex,
            anchoring,
            source: pattern.to_string(),
            flags,
        })
    }

    // Renders the options in canonical flag order.
    fn flags(&self, anchoring: Anchoring) -> String {
        let mut flags = String::with_capacity(4);
        if anchoring == Anchoring::Global {
            flags.push(anchoring.flag());
        }
        if self.case_insensitive {
            flags.push('i');
        }
        if self.multi_line {
            flags.push('m');
        }
        if self.dot_matches_new_line {
            flags.push('s');
        }
        if anchoring == Anchoring::Sticky {
            flags.push(anchoring.flag());
        }
        flags
    }
}
