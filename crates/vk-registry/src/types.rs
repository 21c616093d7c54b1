// crates/vk-registry/src/types.rs

//! Public, ergonomic data structures for the extracted enumerations.

use alloc::string::{String, ToString};
use alloc::vec::Vec;

/// Groups emitted when the caller does not name any.
pub const DEFAULT_ENUM_NAMES: [&str; 7] = [
    "VkFormat",
    "VkShaderStageFlagBits",
    "VkBufferUsageFlagBits",
    "VkVertexInputRate",
    "VkDescriptorType",
    "VkPrimitiveTopology",
    "VkIndexType",
];

/// API name used for `api` / `supported` filtering by default.
pub const DEFAULT_API: &str = "vulkan";

// --- Extracted data ---

/// One `<enums>` block, restricted to the constants that survived filtering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumGroup {
    /// `@name`, e.g. `VkFormat`.
    pub name: String,
    /// `@type` (`enum`, `bitmask`, ...).
    pub kind: Option<String>,
    /// `@bitwidth`, 32 unless stated otherwise.
    pub bitwidth: u32,
    /// Constants in document order, base values first.
    pub constants: Vec<EnumConstant>,
}

/// A single name/value pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumConstant {
    pub name: String,
    pub value: EnumValue,
}

/// The value of a constant as it is written out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnumValue {
    /// `@value`, kept verbatim (`0`, `0x7FFFFFFF`, `(~0U)`, ...).
    Literal(String),
    /// `@bitpos`.
    Bitpos(u32),
    /// A value computed from `@offset` / `@extnumber` / `@dir`.
    Offset(i64),
}

// --- Configuration ---

/// Which groups to extract and how to treat registry extras.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumSelection {
    /// Names of the `<enums>` blocks to extract.
    pub names: Vec<String>,
    /// API used to filter `@api` and `@supported` lists.
    pub api: String,
    /// Append values contributed by `<feature>` and `<extension>` blocks.
    pub include_extensions: bool,
    /// Emit alias constants with the value of their target.
    pub include_aliases: bool,
}

impl Default for EnumSelection {
    fn default() -> Self {
        Self::with_names(DEFAULT_ENUM_NAMES)
    }
}

impl EnumSelection {
    /// Selects the given groups, leaving every other option at its default.
    pub fn with_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            names: names.into_iter().map(|n| n.as_ref().to_string()).collect(),
            api: DEFAULT_API.to_string(),
            include_extensions: false,
            include_aliases: false,
        }
    }

    /// Returns `true` if the group called `name` was requested.
    pub fn selects(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }
}

/// How `@bitpos` values are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BitposStyle {
    /// The bit number itself, e.g. `4`.
    #[default]
    Position,
    /// The resulting mask in hex, e.g. `0x00000010`.
    Mask,
}
