//! Module with the node types a markup parser builds from scanned text.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{Result, ScanError, ScanErrorKind};

/// A processing instruction like `<?xml-stylesheet href="a.css"?>`.
///
/// `name` is the instruction target, `content` the raw instruction body. Both are kept exactly
/// as scanned.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(
        try_from = "RawProcessingInstruction",
        into = "RawProcessingInstruction"
    )
)]
pub struct ProcessingInstruction {
    name: String,
    content: String,
}

/// The discriminant written to the `type` field of exported nodes.
#[cfg(feature = "serde")]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
enum NodeType {
    ProcessingInstruction,
}

// Serialized form of a processing instruction. Deserialization goes through
// `ProcessingInstruction::with_content` so that the name check applies.
#[cfg(feature = "serde")]
#[derive(Debug, Serialize, Deserialize)]
struct RawProcessingInstruction {
    #[serde(rename = "type")]
    node_type: NodeType,
    name: String,
    #[serde(default)]
    content: String,
}

#[cfg(feature = "serde")]
impl TryFrom<RawProcessingInstruction> for ProcessingInstruction {
    type Error = ScanError;

    fn try_from(raw: RawProcessingInstruction) -> Result<Self> {
        Self::with_content(&raw.name, &raw.content)
    }
}

#[cfg(feature = "serde")]
impl From<ProcessingInstruction> for RawProcessingInstruction {
    fn from(pi: ProcessingInstruction) -> Self {
        Self {
            node_type: NodeType::ProcessingInstruction,
            name: pi.name,
            content: pi.content,
        }
    }
}

impl ProcessingInstruction {
    /// Create a new processing instruction with empty content.
    pub fn new(name: &str) -> Result<Self> {
        Self::with_content(name, "")
    }

    /// Create a new processing instruction.
    pub fn with_content(name: &str, content: &str) -> Result<Self> {
        if name.is_empty() {
            return Err(ScanError::new(ScanErrorKind::EmptyName));
        }
        Ok(Self {
            name: name.to_string(),
            content: content.to_string(),
        })
    }

    /// Get the target name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the instruction body.
    #[inline]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Export as a JSON object of the form
    /// `{"type": "processing-instruction", "name": ..., "content": ...}`.
    #[cfg(feature = "serde")]
    pub fn to_value(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "processing-instruction",
            "name": self.name,
            "content": self.content,
        })
    }

    /// Export as a JSON string, see [ProcessingInstruction::to_value].
    #[cfg(feature = "serde")]
    pub fn to_json(&self) -> String {
        self.to_value().to_string()
    }
}

impl std::fmt::Display for ProcessingInstruction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.content.is_empty() {
            write!(f, "<?{}?>", self.name)
        } else {
            write!(f, "<?{} {}?>", self.name, self.content)
        }
    }
}
