// crates/vk-registry/src/parser.rs

use crate::error::RegistryError;
use crate::model;
use crate::resolver::{self, GroupBuilder, PendingValue};
use crate::types::{EnumGroup, EnumSelection, EnumValue};
use alloc::string::String;
use alloc::vec::Vec;
use log::{debug, warn};

/// Parses a `vk.xml` string slice and extracts the `<enums>` groups named
/// in `selection`.
///
/// Groups are returned in document order, not in the order they were
/// requested. Requested names that match no group are logged and skipped.
///
/// # Errors
/// Returns a `RegistryError` if the XML cannot be deserialized, an attribute
/// is malformed, an entry carries no value, or aliases form a cycle.
pub fn load_enums_from_str(
    xml_content: &str,
    selection: &EnumSelection,
) -> Result<Vec<EnumGroup>, RegistryError> {
    // 1. Deserialize the raw XML string into our internal model.
    let registry: model::Registry = quick_xml::de::from_str(xml_content)?;

    // 2. Collect the base values of every selected group.
    let mut builders = Vec::new();
    for enums in &registry.enums {
        if !selection.selects(&enums.name) {
            continue;
        }
        builders.push(parse_group(enums, &selection.api)?);
    }

    for name in &selection.names {
        if !builders.iter().any(|b| &b.name == name) {
            warn!("No <enums> group named {} in the registry", name);
        }
    }

    // 3. Values contributed by core versions and extensions.
    if selection.include_extensions {
        resolver::apply_extensions(&registry, &selection.api, &mut builders)?;
    }

    // 4. Resolve aliases and freeze the groups.
    builders
        .into_iter()
        .map(|b| b.finish(selection.include_aliases))
        .collect()
}

/// Returns the name of every `<enums>` group in document order.
///
/// # Errors
/// Returns a `RegistryError` if the XML cannot be deserialized.
pub fn list_enum_groups(xml_content: &str) -> Result<Vec<String>, RegistryError> {
    let registry: model::Registry = quick_xml::de::from_str(xml_content)?;
    Ok(registry.enums.into_iter().map(|e| e.name).collect())
}

/// Converts a raw `<enums>` block into a builder holding its own values.
fn parse_group(enums: &model::Enums, api: &str) -> Result<GroupBuilder, RegistryError> {
    let bitwidth = enums
        .bitwidth
        .as_deref()
        .map(|w| parse_u32("bitwidth", w))
        .transpose()?
        .unwrap_or(32);

    let mut builder = GroupBuilder::new(enums.name.clone(), enums.kind.clone(), bitwidth);

    for entry in &enums.entries {
        if !resolver::api_matches(entry.api.as_deref(), api) {
            debug!("{}: skipping {} (api={:?})", enums.name, entry.name, entry.api);
            continue;
        }

        let value = if let Some(value) = &entry.value {
            PendingValue::Value(EnumValue::Literal(value.clone()))
        } else if let Some(bitpos) = &entry.bitpos {
            PendingValue::Value(EnumValue::Bitpos(parse_u32("bitpos", bitpos)?))
        } else if let Some(alias) = &entry.alias {
            PendingValue::Alias(alias.clone())
        } else {
            return Err(RegistryError::MissingAttribute {
                element: "enum",
                attribute: "value|bitpos|alias",
                name: entry.name.clone(),
            });
        };

        builder.push(&entry.name, value);
    }

    Ok(builder)
}

// --- Helper Functions (Public for use in resolver.rs) ---

/// Parses a decimal attribute into a u32.
pub(crate) fn parse_u32(attribute: &'static str, s: &str) -> Result<u32, RegistryError> {
    s.trim()
        .parse()
        .map_err(|_| RegistryError::InvalidAttributeFormat {
            attribute,
            value: s.into(),
        })
}

/// Parses a decimal attribute into an i64.
pub(crate) fn parse_i64(attribute: &'static str, s: &str) -> Result<i64, RegistryError> {
    s.trim()
        .parse()
        .map_err(|_| RegistryError::InvalidAttributeFormat {
            attribute,
            value: s.into(),
        })
}
