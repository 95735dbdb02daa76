//! Occupancy Sensing cluster (0x0406)

use super::{AttributeDescriptor, Cluster, IntWidth, ValueType};
use crate::codec::dictionary::{BitmapTable, BitmapWidth, EnumDictionary};

pub const CLUSTER_ID: u16 = 0x0406;

pub const CLUSTER: Cluster = Cluster {
    id: CLUSTER_ID,
    name: "OccupancySensing",
    revision: 3,
    features: 0,
    attributes: &[
        AttributeDescriptor::new(
            Attributes::Occupancy as u16,
            "Occupancy",
            ValueType::Bitmap(&OCCUPANCY),
        ),
        AttributeDescriptor::new(
            Attributes::OccupancySensorType as u16,
            "OccupancySensorType",
            ValueType::Enum8(&OCCUPANCY_SENSOR_TYPE),
        ),
        AttributeDescriptor::new(
            Attributes::OccupancySensorTypeBitmap as u16,
            "OccupancySensorTypeBitmap",
            ValueType::Bitmap(&OCCUPANCY_SENSOR_TYPE_BITMAP),
        ),
        AttributeDescriptor::new(
            Attributes::PirOccupiedToUnoccupiedDelay as u16,
            "PIROccupiedToUnoccupiedDelay",
            ValueType::Unsigned(IntWidth::W16),
        )
        .writable(),
        AttributeDescriptor::new(
            Attributes::PirUnoccupiedToOccupiedDelay as u16,
            "PIRUnoccupiedToOccupiedDelay",
            ValueType::Unsigned(IntWidth::W16),
        )
        .writable(),
        AttributeDescriptor::new(
            Attributes::PirUnoccupiedToOccupiedThreshold as u16,
            "PIRUnoccupiedToOccupiedThreshold",
            ValueType::Unsigned(IntWidth::W8),
        )
        .writable(),
    ],
};

#[repr(u16)]
#[derive(FromPrimitive)]
pub enum Attributes {
    Occupancy = 0x0000,
    OccupancySensorType = 0x0001,
    OccupancySensorTypeBitmap = 0x0002,
    PirOccupiedToUnoccupiedDelay = 0x0010,
    PirUnoccupiedToOccupiedDelay = 0x0011,
    PirUnoccupiedToOccupiedThreshold = 0x0012,
}

pub const OCCUPANCY: BitmapTable = BitmapTable {
    name: "Occupancy",
    width: BitmapWidth::B8,
    flags: &[(0, "SensedOccupancy")],
};

#[repr(u8)]
#[derive(FromPrimitive)]
pub enum OccupancySensorType {
    Pir = 0,
    Ultrasonic = 1,
    PirAndUltrasonic = 2,
    PhysicalContact = 3,
}

pub const OCCUPANCY_SENSOR_TYPE: EnumDictionary = EnumDictionary {
    name: "OccupancySensorType",
    entries: &[
        (OccupancySensorType::Pir as u8, "PIR"),
        (OccupancySensorType::Ultrasonic as u8, "Ultrasonic"),
        (OccupancySensorType::PirAndUltrasonic as u8, "PIRAndUltrasonic"),
        (OccupancySensorType::PhysicalContact as u8, "PhysicalContact"),
    ],
};

pub const OCCUPANCY_SENSOR_TYPE_BITMAP: BitmapTable = BitmapTable {
    name: "OccupancySensorTypeBitmap",
    width: BitmapWidth::B8,
    flags: &[(0, "PIR"), (1, "Ultrasonic"), (2, "PhysicalContact")],
};
