//! Level Control cluster (0x0008)

use bitflags::bitflags;

use super::{AttributeDescriptor, Cluster, IntWidth, ValueType};
use crate::codec::dictionary::{BitmapTable, BitmapWidth};

pub const CLUSTER_ID: u16 = 0x0008;

bitflags! {
    #[derive(Copy, Clone, Default, Debug)]
    pub struct Features: u32 {
        const ON_OFF = 0b1;
        const LIGHTING = 0b10;
        const FREQUENCY = 0b100;
    }
}

pub const CLUSTER: Cluster = Cluster {
    id: CLUSTER_ID,
    name: "Level",
    revision: 5,
    features: Features::ON_OFF.union(Features::LIGHTING).bits(),
    attributes: &[
        AttributeDescriptor::new(
            Attributes::CurrentLevel as u16,
            "CurrentLevel",
            ValueType::Nullable(&ValueType::Unsigned(IntWidth::W8)),
        )
        .writable(),
        AttributeDescriptor::new(
            Attributes::RemainingTime as u16,
            "RemainingTime",
            ValueType::Unsigned(IntWidth::W16),
        ),
        AttributeDescriptor::new(
            Attributes::MinLevel as u16,
            "MinLevel",
            ValueType::Unsigned(IntWidth::W8),
        ),
        AttributeDescriptor::new(
            Attributes::MaxLevel as u16,
            "MaxLevel",
            ValueType::Unsigned(IntWidth::W8),
        ),
        AttributeDescriptor::new(
            Attributes::CurrentFrequency as u16,
            "CurrentFrequency",
            ValueType::Unsigned(IntWidth::W16),
        ),
        AttributeDescriptor::new(
            Attributes::Options as u16,
            "Options",
            ValueType::Bitmap(&OPTIONS),
        )
        .writable(),
        AttributeDescriptor::new(
            Attributes::OnOffTransitionTime as u16,
            "OnOffTransitionTime",
            ValueType::Unsigned(IntWidth::W16),
        )
        .writable(),
        AttributeDescriptor::new(
            Attributes::OnLevel as u16,
            "OnLevel",
            ValueType::Nullable(&ValueType::Unsigned(IntWidth::W8)),
        )
        .writable(),
        AttributeDescriptor::new(
            Attributes::OnTransitionTime as u16,
            "OnTransitionTime",
            ValueType::Nullable(&ValueType::Unsigned(IntWidth::W16)),
        )
        .writable(),
        AttributeDescriptor::new(
            Attributes::OffTransitionTime as u16,
            "OffTransitionTime",
            ValueType::Nullable(&ValueType::Unsigned(IntWidth::W16)),
        )
        .writable(),
        AttributeDescriptor::new(
            Attributes::DefaultMoveRate as u16,
            "DefaultMoveRate",
            ValueType::Nullable(&ValueType::Unsigned(IntWidth::W8)),
        )
        .writable(),
        AttributeDescriptor::new(
            Attributes::StartUpCurrentLevel as u16,
            "StartUpCurrentLevel",
            ValueType::Nullable(&ValueType::Unsigned(IntWidth::W8)),
        )
        .writable(),
    ],
};

#[repr(u16)]
#[derive(FromPrimitive)]
pub enum Attributes {
    CurrentLevel = 0x0000,
    RemainingTime = 0x0001,
    MinLevel = 0x0002,
    MaxLevel = 0x0003,
    CurrentFrequency = 0x0004,
    Options = 0x000F,
    OnOffTransitionTime = 0x0010,
    OnLevel = 0x0011,
    OnTransitionTime = 0x0012,
    OffTransitionTime = 0x0013,
    DefaultMoveRate = 0x0014,
    StartUpCurrentLevel = 0x4000,
}

pub const OPTIONS: BitmapTable = BitmapTable {
    name: "LevelOptions",
    width: BitmapWidth::B8,
    flags: &[(0, "ExecuteIfOff"), (1, "CoupleColorTempToLevel")],
};
