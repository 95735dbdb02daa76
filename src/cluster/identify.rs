//! Identify cluster (0x0003)

use super::{AttributeDescriptor, Cluster, IntWidth, ValueType};
use crate::codec::dictionary::EnumDictionary;

pub const CLUSTER_ID: u16 = 0x0003;

pub const CLUSTER: Cluster = Cluster {
    id: CLUSTER_ID,
    name: "Identify",
    revision: 4,
    features: 0,
    attributes: &[
        AttributeDescriptor::new(
            Attributes::IdentifyTime as u16,
            "IdentifyTime",
            ValueType::Unsigned(IntWidth::W16),
        )
        .writable(),
        AttributeDescriptor::new(
            Attributes::IdentifyType as u16,
            "IdentifyType",
            ValueType::Enum8(&IDENTIFY_TYPE),
        ),
    ],
};

#[repr(u16)]
#[derive(FromPrimitive)]
pub enum Attributes {
    IdentifyTime = 0x0000,
    IdentifyType = 0x0001,
}

#[repr(u8)]
#[derive(FromPrimitive)]
pub enum IdentifyType {
    None = 0,
    LightOutput = 1,
    VisibleIndicator = 2,
    AudibleBeep = 3,
    Display = 4,
    Actuator = 5,
}

pub const IDENTIFY_TYPE: EnumDictionary = EnumDictionary {
    name: "IdentifyType",
    entries: &[
        (IdentifyType::None as u8, "None"),
        (IdentifyType::LightOutput as u8, "LightOutput"),
        (IdentifyType::VisibleIndicator as u8, "VisibleIndicator"),
        (IdentifyType::AudibleBeep as u8, "AudibleBeep"),
        (IdentifyType::Display as u8, "Display"),
        (IdentifyType::Actuator as u8, "Actuator"),
    ],
};
