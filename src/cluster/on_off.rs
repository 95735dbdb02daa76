//! On/Off cluster (0x0006)

use bitflags::bitflags;

use super::{AttributeDescriptor, Cluster, IntWidth, ValueType};
use crate::codec::dictionary::EnumDictionary;

pub const CLUSTER_ID: u16 = 0x0006;

bitflags! {
    #[derive(Copy, Clone, Default, Debug)]
    pub struct Features: u32 {
        const LIGHTING = 0b1;
    }
}

pub const CLUSTER: Cluster = Cluster {
    id: CLUSTER_ID,
    name: "OnOff",
    revision: 4,
    features: Features::LIGHTING.bits(),
    attributes: &[
        AttributeDescriptor::new(Attributes::OnOff as u16, "OnOff", ValueType::Boolean).writable(),
        AttributeDescriptor::new(
            Attributes::GlobalSceneControl as u16,
            "GlobalSceneControl",
            ValueType::Boolean,
        ),
        AttributeDescriptor::new(
            Attributes::OnTime as u16,
            "OnTime",
            ValueType::Unsigned(IntWidth::W16),
        )
        .writable(),
        AttributeDescriptor::new(
            Attributes::OffWaitTime as u16,
            "OffWaitTime",
            ValueType::Unsigned(IntWidth::W16),
        )
        .writable(),
        AttributeDescriptor::new(
            Attributes::StartUpOnOff as u16,
            "StartUpOnOff",
            ValueType::Nullable(&ValueType::Enum8(&START_UP_ON_OFF)),
        )
        .writable(),
    ],
};

#[repr(u16)]
#[derive(FromPrimitive)]
pub enum Attributes {
    OnOff = 0x0000,
    GlobalSceneControl = 0x4000,
    OnTime = 0x4001,
    OffWaitTime = 0x4002,
    StartUpOnOff = 0x4003,
}

#[repr(u8)]
#[derive(FromPrimitive)]
pub enum StartUpOnOff {
    Off = 0,
    On = 1,
    Toggle = 2,
}

pub const START_UP_ON_OFF: EnumDictionary = EnumDictionary {
    name: "StartUpOnOff",
    entries: &[
        (StartUpOnOff::Off as u8, "SetOffWhenStartUp"),
        (StartUpOnOff::On as u8, "SetOnWhenStartUp"),
        (StartUpOnOff::Toggle as u8, "TogglePreviousOnOff"),
    ],
};
