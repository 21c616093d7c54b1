// crates/vk-registry/src/emitter.rs

use crate::error::RegistryError;
use crate::types::{BitposStyle, EnumGroup, EnumValue};
use alloc::string::String;
use core::fmt::Write;

/// Renders the groups as C/C++ initializer lines.
///
/// Each group starts with a `// <name>` comment line, followed by one
/// `{ "<NAME>", <value> }` line per constant.
///
/// # Errors
/// Returns a `RegistryError` if a bit position does not fit the mask style
/// or formatting fails.
pub fn render_enums(groups: &[EnumGroup], style: BitposStyle) -> Result<String, RegistryError> {
    let mut buffer = String::new();
    for group in groups {
        writeln!(&mut buffer, "// {}", group.name)?;
        for constant in &group.constants {
            write!(&mut buffer, "{{ \"{}\", ", constant.name)?;
            write_value(&mut buffer, &constant.value, group.bitwidth, style)?;
            buffer.push_str(" }\n");
        }
    }
    Ok(buffer)
}

fn write_value(
    buffer: &mut String,
    value: &EnumValue,
    bitwidth: u32,
    style: BitposStyle,
) -> Result<(), RegistryError> {
    match (value, style) {
        (EnumValue::Literal(s), _) => buffer.push_str(s),
        (EnumValue::Offset(v), _) => write!(buffer, "{}", v)?,
        (EnumValue::Bitpos(bit), BitposStyle::Position) => write!(buffer, "{}", bit)?,
        (EnumValue::Bitpos(bit), BitposStyle::Mask) => {
            let mask = 1u64
                .checked_shl(*bit)
                .ok_or_else(|| RegistryError::InvalidAttributeFormat {
                    attribute: "bitpos",
                    value: alloc::format!("{}", bit),
                })?;
            if bitwidth == 64 {
                write!(buffer, "0x{:016X}", mask)?;
            } else {
                write!(buffer, "0x{:08X}", mask)?;
            }
        }
    }
    Ok(())
}
