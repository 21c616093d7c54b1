//! Internal `serde` data structures that map directly to the `vk.xml` schema.
//!
//! Only the parts of the registry that carry enumerant values are modelled:
//! the `<enums>` blocks and the `<require>` blocks of `<feature>` and
//! `<extension>` elements. Every other element (`<types>`, `<commands>`,
//! `<comment>`, `<unused>`, ...) is skipped by the deserializer.

#![allow(clippy::pedantic)] // XML schema naming conventions differ from Rust

use alloc::string::String;
use alloc::vec::Vec;
use serde::Deserialize;

/// The root `<registry>` element.
#[derive(Debug, Deserialize, Default)]
#[serde(rename = "registry")]
pub struct Registry {
    #[serde(rename = "enums", default)]
    pub enums: Vec<Enums>,

    /// Core API versions (`VK_VERSION_1_1`, ...).
    #[serde(rename = "feature", default)]
    pub feature: Vec<Feature>,

    #[serde(rename = "extensions", default)]
    pub extensions: Option<Extensions>,
}

/// An `<enums>` block, e.g. `<enums name="VkFormat" type="enum">`.
#[derive(Debug, Deserialize, Default)]
pub struct Enums {
    #[serde(rename = "@name")]
    pub name: String,

    /// `enum`, `bitmask` or `constants`. Absent on "API Constants".
    #[serde(rename = "@type", default)]
    pub kind: Option<String>,

    /// Only present on 64-bit flag groups.
    #[serde(rename = "@bitwidth", default)]
    pub bitwidth: Option<String>,

    #[serde(rename = "enum", default)]
    pub entries: Vec<EnumEntry>,
}

/// An `<enum>` child of an `<enums>` block.
#[derive(Debug, Deserialize, Default)]
pub struct EnumEntry {
    #[serde(rename = "@name")]
    pub name: String,

    #[serde(rename = "@value", default)]
    pub value: Option<String>,

    #[serde(rename = "@bitpos", default)]
    pub bitpos: Option<String>,

    #[serde(rename = "@alias", default)]
    pub alias: Option<String>,

    /// Comma separated list of APIs this entry belongs to.
    #[serde(rename = "@api", default)]
    pub api: Option<String>,
}

/// A `<feature>` element describing one core API version.
#[derive(Debug, Deserialize, Default)]
pub struct Feature {
    #[serde(rename = "@api", default)]
    pub api: Option<String>,

    #[serde(rename = "@name")]
    pub name: String,

    #[serde(rename = "require", default)]
    pub require: Vec<Require>,
}

/// The `<extensions>` container.
#[derive(Debug, Deserialize, Default)]
pub struct Extensions {
    #[serde(rename = "extension", default)]
    pub extension: Vec<Extension>,
}

/// A single `<extension>`.
#[derive(Debug, Deserialize, Default)]
pub struct Extension {
    #[serde(rename = "@name")]
    pub name: String,

    /// Decimal extension number, the default `extnumber` of its enumerants.
    #[serde(rename = "@number", default)]
    pub number: Option<String>,

    /// Comma separated list of APIs, or `disabled`.
    #[serde(rename = "@supported", default)]
    pub supported: Option<String>,

    #[serde(rename = "require", default)]
    pub require: Vec<Require>,
}

/// A `<require>` block inside a feature or extension.
#[derive(Debug, Deserialize, Default)]
pub struct Require {
    #[serde(rename = "@api", default)]
    pub api: Option<String>,

    #[serde(rename = "enum", default)]
    pub entries: Vec<RequireEnum>,
}

/// An `<enum>` inside a `<require>` block.
///
/// Only entries with `@extends` add values to an existing `<enums>` group;
/// the others define standalone constants such as `*_SPEC_VERSION`.
#[derive(Debug, Deserialize, Default)]
pub struct RequireEnum {
    #[serde(rename = "@name")]
    pub name: String,

    #[serde(rename = "@extends", default)]
    pub extends: Option<String>,

    #[serde(rename = "@value", default)]
    pub value: Option<String>,

    #[serde(rename = "@bitpos", default)]
    pub bitpos: Option<String>,

    #[serde(rename = "@offset", default)]
    pub offset: Option<String>,

    #[serde(rename = "@extnumber", default)]
    pub extnumber: Option<String>,

    /// `-` for negative (error code) values.
    #[serde(rename = "@dir", default)]
    pub dir: Option<String>,

    #[serde(rename = "@alias", default)]
    pub alias: Option<String>,

    #[serde(rename = "@api", default)]
    pub api: Option<String>,
}
