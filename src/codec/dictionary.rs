//! Static dictionaries between local numeric values and external tokens.
//!
//! One dictionary exists per enumerated/bitmask type and is shared by every
//! attribute of that type; descriptors reference them, call sites never
//! define their own. The mapping is allowed to be lossy: local values
//! without an entry have no external representation.

/// Bidirectional table between the members of one enumerated type and
/// their external string tokens.
#[derive(Debug, PartialEq, Eq)]
pub struct EnumDictionary {
    pub name: &'static str,
    pub entries: &'static [(u8, &'static str)],
}

impl EnumDictionary {
    pub fn token(&self, value: u8) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|(entry, _)| *entry == value)
            .map(|(_, token)| *token)
    }

    pub fn value(&self, token: &str) -> Option<u8> {
        self.entries
            .iter()
            .find(|(_, entry)| *entry == token)
            .map(|(value, _)| *value)
    }
}

/// Storage width of a bitmask type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BitmapWidth {
    B8,
    B16,
    B32,
}

/// Flag-name table for one bitmask type: bit position to external flag
/// name. Bits outside the table have no external representation.
#[derive(Debug, PartialEq, Eq)]
pub struct BitmapTable {
    pub name: &'static str,
    pub width: BitmapWidth,
    pub flags: &'static [(u8, &'static str)],
}

impl BitmapTable {
    pub fn position(&self, flag: &str) -> Option<u8> {
        self.flags
            .iter()
            .find(|(_, entry)| *entry == flag)
            .map(|(position, _)| *position)
    }

    /// Union of every defined bit.
    pub fn mask(&self) -> u64 {
        self.flags
            .iter()
            .fold(0, |mask, (position, _)| mask | 1u64 << position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WEEKDAYS: EnumDictionary = EnumDictionary {
        name: "Weekday",
        entries: &[(0, "Monday"), (1, "Tuesday")],
    };

    const ALARMS: BitmapTable = BitmapTable {
        name: "AlarmMask",
        width: BitmapWidth::B8,
        flags: &[(0, "Deadbolt"), (2, "Tamper")],
    };

    #[test]
    fn enum_lookup_is_bidirectional() {
        assert_eq!(WEEKDAYS.token(1), Some("Tuesday"));
        assert_eq!(WEEKDAYS.value("Monday"), Some(0));
        assert_eq!(WEEKDAYS.token(7), None);
        assert_eq!(WEEKDAYS.value("Caturday"), None);
    }

    #[test]
    fn bitmap_mask_covers_defined_bits_only() {
        assert_eq!(ALARMS.mask(), 0b101);
        assert_eq!(ALARMS.position("Tamper"), Some(2));
        assert_eq!(ALARMS.position("Unknown"), None);
    }
}
