//! Temperature Measurement cluster (0x0402)
//!
//! Values are hundredths of a degree Celsius.

use super::{AttributeDescriptor, Cluster, IntWidth, ValueType};

pub const CLUSTER_ID: u16 = 0x0402;

pub const CLUSTER: Cluster = Cluster {
    id: CLUSTER_ID,
    name: "TemperatureMeasurement",
    revision: 4,
    features: 0,
    attributes: &[
        AttributeDescriptor::new(
            Attributes::MeasuredValue as u16,
            "MeasuredValue",
            ValueType::Nullable(&ValueType::Signed(IntWidth::W16)),
        ),
        AttributeDescriptor::new(
            Attributes::MinMeasuredValue as u16,
            "MinMeasuredValue",
            ValueType::Nullable(&ValueType::Signed(IntWidth::W16)),
        ),
        AttributeDescriptor::new(
            Attributes::MaxMeasuredValue as u16,
            "MaxMeasuredValue",
            ValueType::Nullable(&ValueType::Signed(IntWidth::W16)),
        ),
        // The external schema does not carry it.
        AttributeDescriptor::new(
            Attributes::Tolerance as u16,
            "Tolerance",
            ValueType::Unsigned(IntWidth::W16),
        )
        .unsupported(),
    ],
};

#[repr(u16)]
#[derive(FromPrimitive)]
pub enum Attributes {
    MeasuredValue = 0x0000,
    MinMeasuredValue = 0x0001,
    MaxMeasuredValue = 0x0002,
    Tolerance = 0x0003,
}
