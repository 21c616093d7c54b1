// crates/vk-registry/src/error.rs

use alloc::fmt;
use alloc::string::String;
use quick_xml::errors::serialize::DeError;

/// Errors that can occur while reading enumerations from the registry.
#[derive(Debug)]
pub enum RegistryError {
    /// An error from the underlying `quick-xml` deserializer.
    XmlParsing(DeError),

    /// An error occurred while rendering the output text.
    FmtError(fmt::Error),

    /// An element lacks every attribute that could give it a value.
    MissingAttribute {
        element: &'static str,
        attribute: &'static str,
        name: String,
    },

    /// An attribute (e.g., @bitpos) had an invalid format.
    InvalidAttributeFormat {
        attribute: &'static str,
        value: String,
    },

    /// Following `alias` attributes inside a group led back to an earlier name.
    AliasCycle { group: String, name: String },
}

impl From<DeError> for RegistryError {
    fn from(e: DeError) -> Self {
        RegistryError::XmlParsing(e)
    }
}

impl From<fmt::Error> for RegistryError {
    fn from(e: fmt::Error) -> Self {
        RegistryError::FmtError(e)
    }
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegistryError::XmlParsing(e) => write!(f, "XML parsing error: {}", e),
            RegistryError::FmtError(e) => write!(f, "Formatting error: {}", e),
            RegistryError::MissingAttribute {
                element,
                attribute,
                name,
            } => write!(
                f,
                "Missing required attribute on <{}> '{}': expected one of {}",
                element, name, attribute
            ),
            RegistryError::InvalidAttributeFormat { attribute, value } => {
                write!(f, "Invalid format for attribute {}: '{}'", attribute, value)
            }
            RegistryError::AliasCycle { group, name } => {
                write!(f, "Alias cycle in {} starting at {}", group, name)
            }
        }
    }
}

impl core::error::Error for RegistryError {}
