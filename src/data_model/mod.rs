//! Defines core types in the local data model

use std::fmt;

pub mod node;

pub use node::{BridgedEndpoint, NodeMap, StaticNodeMap};

pub type EndpointId = u16;
pub type ClusterId = u16;
pub type AttributeId = u16;

/// Addresses one attribute instance on one endpoint.
///
/// Identifiers are scoped per cluster and never reused across clusters, so
/// the triple is unique on a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AttributePath {
    pub endpoint: EndpointId,
    pub cluster: ClusterId,
    pub attribute: AttributeId,
}

impl AttributePath {
    pub const fn new(endpoint: EndpointId, cluster: ClusterId, attribute: AttributeId) -> Self {
        Self {
            endpoint,
            cluster,
            attribute,
        }
    }
}

impl fmt::Display for AttributePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{:#06x}/{:#06x}",
            self.endpoint, self.cluster, self.attribute
        )
    }
}

/// A typed local attribute value.
///
/// Enumerations and bitmaps are carried numerically; their string/flag form
/// only exists on the external side and is produced by the codec from the
/// dictionary referenced by the attribute's descriptor.
#[derive(Debug, Clone, PartialEq)]
pub enum AttributeValue {
    Boolean(bool),
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    Enum8(u8),
    Bitmap8(u8),
    Bitmap16(u16),
    Bitmap32(u32),
    Utf8(String),
    Octets(Vec<u8>),
    /// The null sentinel of a nullable attribute.
    Null,
}

impl AttributeValue {
    /// Name of the carried variant, for diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            AttributeValue::Boolean(_) => "Boolean",
            AttributeValue::U8(_) => "U8",
            AttributeValue::U16(_) => "U16",
            AttributeValue::U32(_) => "U32",
            AttributeValue::U64(_) => "U64",
            AttributeValue::I8(_) => "I8",
            AttributeValue::I16(_) => "I16",
            AttributeValue::I32(_) => "I32",
            AttributeValue::I64(_) => "I64",
            AttributeValue::Enum8(_) => "Enum8",
            AttributeValue::Bitmap8(_) => "Bitmap8",
            AttributeValue::Bitmap16(_) => "Bitmap16",
            AttributeValue::Bitmap32(_) => "Bitmap32",
            AttributeValue::Utf8(_) => "Utf8",
            AttributeValue::Octets(_) => "Octets",
            AttributeValue::Null => "Null",
        }
    }
}

/// Emitted after a reported value has been applied to the local store.
#[derive(Debug, Clone, PartialEq)]
pub struct AttributeUpdate {
    pub path: AttributePath,
    pub value: AttributeValue,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_display_uses_hex_ids() {
        let path = AttributePath::new(3, 0x0101, 0x0001);
        assert_eq!(path.to_string(), "3/0x0101/0x0001");
    }
}
