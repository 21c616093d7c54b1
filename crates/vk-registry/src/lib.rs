// src/lib.rs

#![no_std]
#![doc = "Reads enumerations out of the Vulkan API registry (`vk.xml`)."]
#![doc = ""]
#![doc = "This `no_std + alloc` library backs the `vk-enumgen` generator:"]
#![doc = "- `load_enums_from_str`: Extracting the selected `<enums>` groups."]
#![doc = "- `list_enum_groups`: Listing every group name in the registry."]
#![doc = "- `render_enums`: Printing groups as `{ \"NAME\", value }` lines."]

extern crate alloc;

// --- Crate Modules ---

mod emitter;
mod error;
mod model;
mod parser;
mod resolver;
mod types;

// --- Public API Re-exports ---

pub use emitter::render_enums;
pub use error::RegistryError;
pub use parser::{list_enum_groups, load_enums_from_str};
pub use types::{
    BitposStyle, DEFAULT_API, DEFAULT_ENUM_NAMES, EnumConstant, EnumGroup, EnumSelection,
    EnumValue,
};
