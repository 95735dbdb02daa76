//! Door Lock cluster (0x0101)

use bitflags::bitflags;

use super::{AttributeDescriptor, Cluster, IntWidth, ValueType};
use crate::codec::dictionary::{BitmapTable, BitmapWidth, EnumDictionary};

pub const CLUSTER_ID: u16 = 0x0101;

bitflags! {
    #[derive(Copy, Clone, Default, Debug)]
    pub struct Features: u32 {
        const PIN_CREDENTIAL = 0b1;
        const RFID_CREDENTIAL = 0b10;
    }
}

pub const CLUSTER: Cluster = Cluster {
    id: CLUSTER_ID,
    name: "DoorLock",
    revision: 6,
    features: Features::PIN_CREDENTIAL.bits(),
    attributes: &[
        AttributeDescriptor::new(
            Attributes::LockState as u16,
            "LockState",
            ValueType::Nullable(&ValueType::Enum8(&LOCK_STATE)),
        ),
        AttributeDescriptor::new(
            Attributes::LockType as u16,
            "LockType",
            ValueType::Enum8(&LOCK_TYPE),
        ),
        AttributeDescriptor::new(
            Attributes::ActuatorEnabled as u16,
            "ActuatorEnabled",
            ValueType::Boolean,
        ),
        AttributeDescriptor::new(
            Attributes::DoorState as u16,
            "DoorState",
            ValueType::Nullable(&ValueType::Enum8(&DOOR_STATE)),
        ),
        AttributeDescriptor::new(
            Attributes::DoorOpenEvents as u16,
            "DoorOpenEvents",
            ValueType::Unsigned(IntWidth::W32),
        )
        .writable(),
        AttributeDescriptor::new(
            Attributes::DoorClosedEvents as u16,
            "DoorClosedEvents",
            ValueType::Unsigned(IntWidth::W32),
        )
        .writable(),
        AttributeDescriptor::new(
            Attributes::OpenPeriod as u16,
            "OpenPeriod",
            ValueType::Unsigned(IntWidth::W16),
        )
        .writable(),
        // Dropped upstream; the external schema never carried it.
        AttributeDescriptor::new(
            Attributes::SecurityLevel as u16,
            "SecurityLevel",
            ValueType::Unsigned(IntWidth::W8),
        )
        .unsupported(),
        AttributeDescriptor::new(Attributes::Language as u16, "Language", ValueType::Utf8)
            .writable(),
        AttributeDescriptor::new(
            Attributes::AutoRelockTime as u16,
            "AutoRelockTime",
            ValueType::Unsigned(IntWidth::W32),
        )
        .writable(),
        AttributeDescriptor::new(
            Attributes::SoundVolume as u16,
            "SoundVolume",
            ValueType::Enum8(&SOUND_VOLUME),
        )
        .writable(),
        AttributeDescriptor::new(
            Attributes::OperatingMode as u16,
            "OperatingMode",
            ValueType::Enum8(&OPERATING_MODE),
        )
        .writable(),
        AttributeDescriptor::new(
            Attributes::SupportedOperatingModes as u16,
            "SupportedOperatingModes",
            ValueType::Bitmap(&SUPPORTED_OPERATING_MODES),
        ),
        AttributeDescriptor::new(
            Attributes::EnableOneTouchLocking as u16,
            "EnableOneTouchLocking",
            ValueType::Boolean,
        )
        .writable(),
        AttributeDescriptor::new(
            Attributes::EnablePrivacyModeButton as u16,
            "EnablePrivacyModeButton",
            ValueType::Boolean,
        )
        .writable(),
        AttributeDescriptor::new(
            Attributes::WrongCodeEntryLimit as u16,
            "WrongCodeEntryLimit",
            ValueType::Unsigned(IntWidth::W8),
        )
        .writable(),
        AttributeDescriptor::new(
            Attributes::UserCodeTemporaryDisableTime as u16,
            "UserCodeTemporaryDisableTime",
            ValueType::Unsigned(IntWidth::W8),
        )
        .writable(),
    ],
};

#[repr(u16)]
#[derive(FromPrimitive)]
pub enum Attributes {
    LockState = 0x0000,
    LockType = 0x0001,
    ActuatorEnabled = 0x0002,
    DoorState = 0x0003,
    DoorOpenEvents = 0x0004,
    DoorClosedEvents = 0x0005,
    OpenPeriod = 0x0006,
    SecurityLevel = 0x0011,
    Language = 0x0021,
    AutoRelockTime = 0x0023,
    SoundVolume = 0x0024,
    OperatingMode = 0x0025,
    SupportedOperatingModes = 0x0026,
    EnableOneTouchLocking = 0x0029,
    EnablePrivacyModeButton = 0x002B,
    WrongCodeEntryLimit = 0x0030,
    UserCodeTemporaryDisableTime = 0x0031,
}

#[repr(u8)]
#[derive(FromPrimitive)]
pub enum LockState {
    NotFullyLocked = 0,
    Locked = 1,
    Unlocked = 2,
    // Defined locally since cluster revision 6; the external schema has no
    // token for it yet.
    Unlatched = 3,
}

pub const LOCK_STATE: EnumDictionary = EnumDictionary {
    name: "LockState",
    entries: &[
        (LockState::NotFullyLocked as u8, "NotFullyLocked"),
        (LockState::Locked as u8, "Locked"),
        (LockState::Unlocked as u8, "Unlocked"),
    ],
};

#[repr(u8)]
#[derive(FromPrimitive)]
pub enum LockType {
    DeadBolt = 0,
    Magnetic = 1,
    Other = 2,
    Mortise = 3,
    Rim = 4,
    LatchBolt = 5,
    CylindricalLock = 6,
    TubularLock = 7,
    InterconnectedLock = 8,
    DeadLatch = 9,
    DoorFurniture = 10,
}

pub const LOCK_TYPE: EnumDictionary = EnumDictionary {
    name: "LockType",
    entries: &[
        (LockType::DeadBolt as u8, "DeadBolt"),
        (LockType::Magnetic as u8, "Magnetic"),
        (LockType::Other as u8, "Other"),
        (LockType::Mortise as u8, "Mortise"),
        (LockType::Rim as u8, "Rim"),
        (LockType::LatchBolt as u8, "LatchBolt"),
        (LockType::CylindricalLock as u8, "CylindricalLock"),
        (LockType::TubularLock as u8, "TubularLock"),
        (LockType::InterconnectedLock as u8, "InterconnectedLock"),
        (LockType::DeadLatch as u8, "DeadLatch"),
        (LockType::DoorFurniture as u8, "DoorFurniture"),
    ],
};

#[repr(u8)]
#[derive(FromPrimitive)]
pub enum DoorState {
    Open = 0,
    Closed = 1,
    Jammed = 2,
    ForcedOpen = 3,
    UnspecifiedError = 4,
    Ajar = 5,
}

pub const DOOR_STATE: EnumDictionary = EnumDictionary {
    name: "DoorState",
    entries: &[
        (DoorState::Open as u8, "Open"),
        (DoorState::Closed as u8, "Closed"),
        (DoorState::Jammed as u8, "ErrorJammed"),
        (DoorState::ForcedOpen as u8, "ErrorForcedOpen"),
        (DoorState::UnspecifiedError as u8, "ErrorUnspecified"),
        (DoorState::Ajar as u8, "DoorAjar"),
    ],
};

#[repr(u8)]
#[derive(FromPrimitive)]
pub enum SoundVolume {
    Silent = 0,
    Low = 1,
    High = 2,
}

pub const SOUND_VOLUME: EnumDictionary = EnumDictionary {
    name: "SoundVolume",
    entries: &[
        (SoundVolume::Silent as u8, "Silent"),
        (SoundVolume::Low as u8, "Low"),
        (SoundVolume::High as u8, "High"),
    ],
};

#[repr(u8)]
#[derive(FromPrimitive)]
pub enum OperatingMode {
    Normal = 0,
    Vacation = 1,
    Privacy = 2,
    NoRemoteLockUnlock = 3,
    Passage = 4,
}

pub const OPERATING_MODE: EnumDictionary = EnumDictionary {
    name: "OperatingMode",
    entries: &[
        (OperatingMode::Normal as u8, "Normal"),
        (OperatingMode::Vacation as u8, "Vacation"),
        (OperatingMode::Privacy as u8, "Privacy"),
        (OperatingMode::NoRemoteLockUnlock as u8, "NoRemoteLockUnlock"),
        (OperatingMode::Passage as u8, "Passage"),
    ],
};

pub const SUPPORTED_OPERATING_MODES: BitmapTable = BitmapTable {
    name: "SupportedOperatingModes",
    width: BitmapWidth::B16,
    flags: &[
        (0, "Normal"),
        (1, "Vacation"),
        (2, "Privacy"),
        (3, "NoRemoteLockUnlock"),
        (4, "Passage"),
    ],
};
