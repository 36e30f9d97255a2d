#![forbid(missing_docs)]
//! # `markscan`
//! The `markscan` crate provides the character scanner underneath a hand written recursive
//! descent parser for markup languages.
//! The grammar layer drives a [Scanner] with peek, consume and match operations and receives
//! plain string slices of the input. Classification of the scanned text is left to the parser.
//!
//! The scanner addresses its input by character index. A translation table from character
//! indices to byte offsets is built once when the scanner is created, so slices are always cut at
//! character boundaries, even if the input contains multi-byte characters. For input that
//! consists only of single-byte characters the table is skipped.
//!
//! Regular expressions are compiled with the `regex-automata` crate into a [Pattern] that is
//! either *sticky* (it must match exactly at the current position) or *global* (it searches
//! forward from the current position). The two anchoring modes are used by two different scanner
//! operations and a pattern with the wrong mode is rejected with an error.
//!
//! # Example
//! ```rust
//! use markscan::{Pattern, ProcessingInstruction, Scanner};
//!
//! fn main() -> markscan::Result<()> {
//!     let name = Pattern::sticky(r"[A-Za-z_][\w.-]*")?;
//!     let mut scanner = Scanner::new(r#"<?xml-stylesheet href="s.css"?>"#);
//!
//!     assert_eq!(scanner.consume_string("<?"), "<?");
//!     let target = scanner.consume_match(&name)?;
//!     scanner.skip_whitespace();
//!     let content = scanner.consume_until_string("?>");
//!     assert_eq!(scanner.consume_string("?>"), "?>");
//!
//!     let pi = ProcessingInstruction::with_content(target, content)?;
//!     assert_eq!(pi.name(), "xml-stylesheet");
//!     assert_eq!(pi.content(), r#"href="s.css""#);
//!     assert!(scanner.is_at_end());
//!     Ok(())
//! }
//! ```
//!
//! # Crate features
//! - `serde`: Enabled by default. Derives `Serialize` and `Deserialize` for [Position] and
//!   [ProcessingInstruction] and provides the JSON export of nodes.

/// Module with error definitions
mod errors;
pub use errors::{Result, ScanError, ScanErrorKind};

/// The module with internal implementation details.
mod internal;

/// Module that provides node types built from scanned text
mod node;
pub use node::ProcessingInstruction;

/// Module that provides a Pattern type and its anchoring modes
mod pattern;
pub use pattern::{Anchoring, Pattern, PatternBuilder};

/// Module that provides a position type
mod position;
pub use position::{Position, PositionProvider};

/// The module with the scanner.
mod scanner;
pub use scanner::Scanner;
