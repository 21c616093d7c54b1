// crates/vk-registry/src/resolver.rs

//! Merges values contributed by `<feature>` / `<extension>` blocks into the
//! selected groups and resolves `alias` entries.

use crate::error::RegistryError;
use crate::model;
use crate::parser::{parse_i64, parse_u32};
use crate::types::{EnumConstant, EnumGroup, EnumValue};
use alloc::collections::{BTreeMap, BTreeSet};
use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;
use log::{debug, warn};

/// Base of every extension enumerant value.
const EXT_ENUM_BASE: i64 = 1_000_000_000;
/// Number of values reserved per extension.
const EXT_ENUM_BLOCK: i64 = 1_000;

/// A value that may still point at another constant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum PendingValue {
    Value(EnumValue),
    Alias(String),
}

#[derive(Debug)]
struct PendingConstant {
    name: String,
    value: PendingValue,
}

/// Accumulates the constants of one group before aliases are resolved.
#[derive(Debug)]
pub(crate) struct GroupBuilder {
    pub(crate) name: String,
    kind: Option<String>,
    bitwidth: u32,
    entries: Vec<PendingConstant>,
    seen: BTreeSet<String>,
}

impl GroupBuilder {
    pub(crate) fn new(name: String, kind: Option<String>, bitwidth: u32) -> Self {
        Self {
            name,
            kind,
            bitwidth,
            entries: Vec::new(),
            seen: BTreeSet::new(),
        }
    }

    /// Appends a constant. The first definition of a name wins; later ones
    /// are ignored and `false` is returned.
    pub(crate) fn push(&mut self, name: &str, value: PendingValue) -> bool {
        if !self.seen.insert(name.into()) {
            debug!("{}: {} already defined, ignoring duplicate", self.name, name);
            return false;
        }
        self.entries.push(PendingConstant {
            name: name.into(),
            value,
        });
        true
    }

    /// Resolves aliases and produces the final group.
    ///
    /// With `include_aliases == false` every alias entry is dropped.
    /// Aliases whose target is not in the group are dropped with a warning.
    pub(crate) fn finish(self, include_aliases: bool) -> Result<EnumGroup, RegistryError> {
        let index: BTreeMap<&str, &PendingValue> = self
            .entries
            .iter()
            .map(|c| (c.name.as_str(), &c.value))
            .collect();

        let mut constants = Vec::with_capacity(self.entries.len());
        for entry in &self.entries {
            let value = match &entry.value {
                PendingValue::Value(v) => v.clone(),
                PendingValue::Alias(target) => {
                    if !include_aliases {
                        debug!("{}: dropping alias {} -> {}", self.name, entry.name, target);
                        continue;
                    }
                    match follow_alias(&self.name, &entry.name, target, &index)? {
                        Some(v) => v,
                        None => {
                            warn!(
                                "{}: alias {} points at unknown constant {}",
                                self.name, entry.name, target
                            );
                            continue;
                        }
                    }
                }
            };
            constants.push(EnumConstant {
                name: entry.name.clone(),
                value,
            });
        }

        Ok(EnumGroup {
            name: self.name,
            kind: self.kind,
            bitwidth: self.bitwidth,
            constants,
        })
    }
}

/// Walks an alias chain until it reaches a concrete value.
fn follow_alias(
    group: &str,
    start: &str,
    target: &str,
    index: &BTreeMap<&str, &PendingValue>,
) -> Result<Option<EnumValue>, RegistryError> {
    let mut visited = BTreeSet::new();
    visited.insert(start);
    let mut current = target;
    loop {
        if !visited.insert(current) {
            return Err(RegistryError::AliasCycle {
                group: group.into(),
                name: start.into(),
            });
        }
        match index.get(current) {
            None => return Ok(None),
            Some(PendingValue::Value(v)) => return Ok(Some(v.clone())),
            Some(PendingValue::Alias(next)) => current = next.as_str(),
        }
    }
}

/// Returns `true` if a comma separated `api` / `supported` list contains
/// `api`. A missing list matches every API.
pub(crate) fn api_matches(list: Option<&str>, api: &str) -> bool {
    list.is_none_or(|l| l.split(',').any(|a| a.trim() == api))
}

/// Appends the values that core versions and supported extensions add to
/// the groups in `builders`.
pub(crate) fn apply_extensions(
    registry: &model::Registry,
    api: &str,
    builders: &mut [GroupBuilder],
) -> Result<(), RegistryError> {
    for feature in &registry.feature {
        if !api_matches(feature.api.as_deref(), api) {
            debug!("Skipping feature {} (api={:?})", feature.name, feature.api);
            continue;
        }
        apply_requires(&feature.require, None, api, builders)?;
    }

    let Some(extensions) = &registry.extensions else {
        return Ok(());
    };
    for extension in &extensions.extension {
        if !api_matches(extension.supported.as_deref(), api) {
            debug!(
                "Skipping extension {} (supported={:?})",
                extension.name, extension.supported
            );
            continue;
        }
        let number = extension
            .number
            .as_deref()
            .map(|n| parse_i64("number", n))
            .transpose()?;
        apply_requires(&extension.require, number, api, builders)?;
    }

    Ok(())
}

fn apply_requires(
    requires: &[model::Require],
    ext_number: Option<i64>,
    api: &str,
    builders: &mut [GroupBuilder],
) -> Result<(), RegistryError> {
    for require in requires {
        if !api_matches(require.api.as_deref(), api) {
            continue;
        }
        for entry in &require.entries {
            let Some(extends) = entry.extends.as_deref() else {
                continue;
            };
            if !api_matches(entry.api.as_deref(), api) {
                continue;
            }
            let Some(builder) = builders.iter_mut().find(|b| b.name == extends) else {
                continue;
            };
            let value = extension_value(entry, ext_number)?;
            builder.push(&entry.name, value);
        }
    }
    Ok(())
}

/// Computes the value of an `<enum extends=...>` entry.
fn extension_value(
    entry: &model::RequireEnum,
    ext_number: Option<i64>,
) -> Result<PendingValue, RegistryError> {
    if let Some(value) = &entry.value {
        return Ok(PendingValue::Value(EnumValue::Literal(value.clone())));
    }
    if let Some(bitpos) = &entry.bitpos {
        return Ok(PendingValue::Value(EnumValue::Bitpos(parse_u32(
            "bitpos", bitpos,
        )?)));
    }
    if let Some(offset) = &entry.offset {
        let offset = parse_i64("offset", offset)?;
        let number = match &entry.extnumber {
            Some(n) => parse_i64("extnumber", n)?,
            None => ext_number.ok_or_else(|| RegistryError::MissingAttribute {
                element: "enum",
                attribute: "extnumber",
                name: entry.name.clone(),
            })?,
        };
        let negative = entry.dir.as_deref() == Some("-");
        let value = number
            .checked_sub(1)
            .and_then(|n| n.checked_mul(EXT_ENUM_BLOCK))
            .and_then(|n| n.checked_add(EXT_ENUM_BASE))
            .and_then(|n| n.checked_add(offset))
            .and_then(|n| if negative { n.checked_neg() } else { Some(n) })
            .ok_or_else(|| RegistryError::InvalidAttributeFormat {
                attribute: "offset",
                value: format!("{} (extnumber {})", offset, number),
            })?;
        return Ok(PendingValue::Value(EnumValue::Offset(value)));
    }
    if let Some(alias) = &entry.alias {
        return Ok(PendingValue::Alias(alias.clone()));
    }
    Err(RegistryError::MissingAttribute {
        element: "enum",
        attribute: "value|bitpos|offset|alias",
        name: entry.name.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;
    use alloc::vec;

    fn offset_entry(name: &str, offset: &str) -> model::RequireEnum {
        model::RequireEnum {
            name: name.to_string(),
            extends: Some("VkFormat".to_string()),
            offset: Some(offset.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_offset_uses_extension_number() {
        let entry = offset_entry("VK_FORMAT_PVRTC1_2BPP_UNORM_BLOCK_IMG", "0");
        let value = extension_value(&entry, Some(55)).unwrap();
        assert_eq!(value, PendingValue::Value(EnumValue::Offset(1_000_054_000)));
    }

    #[test]
    fn test_extnumber_overrides_extension_number() {
        let mut entry = offset_entry("VK_FORMAT_G8B8G8R8_422_UNORM", "0");
        entry.extnumber = Some("157".to_string());
        let value = extension_value(&entry, Some(1)).unwrap();
        assert_eq!(value, PendingValue::Value(EnumValue::Offset(1_000_156_000)));
    }

    #[test]
    fn test_negative_direction() {
        let mut entry = offset_entry("VK_ERROR_SURFACE_LOST_KHR", "0");
        entry.dir = Some("-".to_string());
        let value = extension_value(&entry, Some(1)).unwrap();
        assert_eq!(value, PendingValue::Value(EnumValue::Offset(-1_000_000_000)));
    }

    #[test]
    fn test_offset_without_any_number_is_an_error() {
        let entry = offset_entry("VK_FORMAT_ORPHAN", "3");
        assert!(matches!(
            extension_value(&entry, None),
            Err(RegistryError::MissingAttribute {
                attribute: "extnumber",
                ..
            })
        ));
    }

    #[test]
    fn test_offset_overflow_is_an_error() {
        let entry = offset_entry("VK_FORMAT_HUGE", "0");
        assert!(matches!(
            extension_value(&entry, Some(i64::MAX)),
            Err(RegistryError::InvalidAttributeFormat {
                attribute: "offset",
                ..
            })
        ));

        let entry = offset_entry("VK_FORMAT_HUGE", &i64::MAX.to_string());
        assert!(extension_value(&entry, Some(2)).is_err());

        let entry = offset_entry("VK_FORMAT_LOW", "0");
        assert!(extension_value(&entry, Some(i64::MIN)).is_err());
    }

    #[test]
    fn test_api_matches() {
        assert!(api_matches(None, "vulkan"));
        assert!(api_matches(Some("vulkan"), "vulkan"));
        assert!(api_matches(Some("vulkan,vulkansc"), "vulkansc"));
        assert!(!api_matches(Some("disabled"), "vulkan"));
        assert!(!api_matches(Some("vulkansc"), "vulkan"));
    }

    #[test]
    fn test_duplicates_keep_first_definition() {
        let mut builder = GroupBuilder::new("VkFormat".to_string(), None, 32);
        assert!(builder.push("A", PendingValue::Value(EnumValue::Offset(1))));
        assert!(!builder.push("A", PendingValue::Value(EnumValue::Offset(2))));
        let group = builder.finish(false).unwrap();
        assert_eq!(group.constants.len(), 1);
        assert_eq!(group.constants[0].value, EnumValue::Offset(1));
    }

    #[test]
    fn test_alias_chain_resolution() {
        let mut builder = GroupBuilder::new("VkFormat".to_string(), None, 32);
        builder.push("A", PendingValue::Value(EnumValue::Literal("7".to_string())));
        builder.push("B", PendingValue::Alias("A".to_string()));
        builder.push("C", PendingValue::Alias("B".to_string()));
        builder.push("D", PendingValue::Alias("MISSING".to_string()));

        let group = builder.finish(true).unwrap();
        let resolved: Vec<(&str, &EnumValue)> = group
            .constants
            .iter()
            .map(|c| (c.name.as_str(), &c.value))
            .collect();
        let seven = EnumValue::Literal("7".to_string());
        assert_eq!(resolved, vec![("A", &seven), ("B", &seven), ("C", &seven)]);
    }

    #[test]
    fn test_aliases_dropped_unless_requested() {
        let mut builder = GroupBuilder::new("VkFormat".to_string(), None, 32);
        builder.push("A", PendingValue::Value(EnumValue::Bitpos(3)));
        builder.push("B", PendingValue::Alias("A".to_string()));
        let group = builder.finish(false).unwrap();
        assert_eq!(group.constants.len(), 1);
        assert_eq!(group.constants[0].name, "A");
    }

    #[test]
    fn test_alias_cycle_is_an_error() {
        let mut builder = GroupBuilder::new("VkFormat".to_string(), None, 32);
        builder.push("A", PendingValue::Alias("B".to_string()));
        builder.push("B", PendingValue::Alias("A".to_string()));
        assert!(matches!(
            builder.finish(true),
            Err(RegistryError::AliasCycle { .. })
        ));
    }
}
