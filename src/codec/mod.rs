//! Conversion between local typed values and external JSON values.
//!
//! Both directions are driven by the attribute's [`ValueType`]; neither side
//! ever guesses from the shape of the data. Encoding is total for every
//! value a dictionary covers and fails deterministically for the rest,
//! decoding validates shape, range and tokens before anything reaches the
//! store.

pub mod dictionary;

use serde_json::{json, Map, Value};

use crate::cluster::{AttributeDescriptor, IntWidth, ValueType};
use crate::data_model::AttributeValue;
use crate::error::{DecodeError, EncodeError};
use dictionary::{BitmapTable, BitmapWidth, EnumDictionary};

/// Encodes a local value as the external JSON value for `descriptor`.
pub fn encode(value: &AttributeValue, descriptor: &AttributeDescriptor) -> Result<Value, EncodeError> {
    encode_as(value, descriptor.value_type)
}

/// Decodes an external JSON value into the local value for `descriptor`.
pub fn decode(value: &Value, descriptor: &AttributeDescriptor) -> Result<AttributeValue, DecodeError> {
    decode_as(value, descriptor.value_type)
}

fn encode_as(value: &AttributeValue, ty: ValueType) -> Result<Value, EncodeError> {
    match ty {
        ValueType::Boolean => match value {
            AttributeValue::Boolean(flag) => Ok(json!(flag)),
            other => Err(type_error("Boolean", other)),
        },
        ValueType::Unsigned(width) => encode_unsigned(value, width),
        ValueType::Signed(width) => encode_signed(value, width),
        ValueType::Enum8(dictionary) => encode_enum(value, dictionary),
        ValueType::Bitmap(table) => encode_bitmap(value, table),
        ValueType::Utf8 => match value {
            AttributeValue::Utf8(text) => Ok(Value::String(text.clone())),
            other => Err(type_error("Utf8", other)),
        },
        ValueType::Octets => match value {
            AttributeValue::Octets(bytes) => Ok(Value::String(hex::encode(bytes))),
            other => Err(type_error("Octets", other)),
        },
        ValueType::Nullable(inner) => match value {
            AttributeValue::Null => Ok(Value::Null),
            other => encode_as(other, *inner),
        },
    }
}

fn encode_unsigned(value: &AttributeValue, width: IntWidth) -> Result<Value, EncodeError> {
    match (value, width) {
        (AttributeValue::U8(v), IntWidth::W8) => Ok(json!(v)),
        (AttributeValue::U16(v), IntWidth::W16) => Ok(json!(v)),
        (AttributeValue::U32(v), IntWidth::W32) => Ok(json!(v)),
        (AttributeValue::U64(v), IntWidth::W64) => Ok(json!(v)),
        (other, _) => Err(type_error(unsigned_name(width), other)),
    }
}

fn encode_signed(value: &AttributeValue, width: IntWidth) -> Result<Value, EncodeError> {
    match (value, width) {
        (AttributeValue::I8(v), IntWidth::W8) => Ok(json!(v)),
        (AttributeValue::I16(v), IntWidth::W16) => Ok(json!(v)),
        (AttributeValue::I32(v), IntWidth::W32) => Ok(json!(v)),
        (AttributeValue::I64(v), IntWidth::W64) => Ok(json!(v)),
        (other, _) => Err(type_error(signed_name(width), other)),
    }
}

fn encode_enum(value: &AttributeValue, dictionary: &'static EnumDictionary) -> Result<Value, EncodeError> {
    let AttributeValue::Enum8(member) = value else {
        return Err(type_error("Enum8", value));
    };
    match dictionary.token(*member) {
        Some(token) => Ok(Value::String(token.to_owned())),
        None => Err(EncodeError::UnmappedValue {
            dictionary: dictionary.name,
            value: u64::from(*member),
        }),
    }
}

fn encode_bitmap(value: &AttributeValue, table: &'static BitmapTable) -> Result<Value, EncodeError> {
    let raw: u64 = match (value, table.width) {
        (AttributeValue::Bitmap8(v), BitmapWidth::B8) => u64::from(*v),
        (AttributeValue::Bitmap16(v), BitmapWidth::B16) => u64::from(*v),
        (AttributeValue::Bitmap32(v), BitmapWidth::B32) => u64::from(*v),
        (other, _) => return Err(type_error(bitmap_name(table.width), other)),
    };
    let stray = raw & !table.mask();
    if stray != 0 {
        return Err(EncodeError::UnmappedValue {
            dictionary: table.name,
            value: stray,
        });
    }
    // Every defined flag appears explicitly; absence of a key is never used
    // to mean false.
    let mut flags = Map::new();
    for (position, name) in table.flags {
        flags.insert((*name).to_owned(), Value::Bool(raw & (1 << position) != 0));
    }
    Ok(Value::Object(flags))
}

fn decode_as(value: &Value, ty: ValueType) -> Result<AttributeValue, DecodeError> {
    match ty {
        ValueType::Boolean => value
            .as_bool()
            .map(AttributeValue::Boolean)
            .ok_or_else(|| DecodeError::mismatch("boolean", json_kind(value))),
        ValueType::Unsigned(width) => decode_unsigned(value, width),
        ValueType::Signed(width) => decode_signed(value, width),
        ValueType::Enum8(dictionary) => decode_enum(value, dictionary),
        ValueType::Bitmap(table) => decode_bitmap(value, table),
        ValueType::Utf8 => value
            .as_str()
            .map(|text| AttributeValue::Utf8(text.to_owned()))
            .ok_or_else(|| DecodeError::mismatch("string", json_kind(value))),
        ValueType::Octets => {
            let text = value
                .as_str()
                .ok_or_else(|| DecodeError::mismatch("hex string", json_kind(value)))?;
            hex::decode(text)
                .map(AttributeValue::Octets)
                .map_err(|_| DecodeError::mismatch("hex string", text))
        }
        ValueType::Nullable(inner) => {
            if value.is_null() {
                Ok(AttributeValue::Null)
            } else {
                decode_as(value, *inner)
            }
        }
    }
}

fn decode_unsigned(value: &Value, width: IntWidth) -> Result<AttributeValue, DecodeError> {
    let raw = value
        .as_u64()
        .ok_or_else(|| DecodeError::mismatch(unsigned_kind(width), json_kind(value)))?;
    match width {
        IntWidth::W8 => u8::try_from(raw)
            .map(AttributeValue::U8)
            .map_err(|_| DecodeError::mismatch(unsigned_kind(width), raw.to_string())),
        IntWidth::W16 => u16::try_from(raw)
            .map(AttributeValue::U16)
            .map_err(|_| DecodeError::mismatch(unsigned_kind(width), raw.to_string())),
        IntWidth::W32 => u32::try_from(raw)
            .map(AttributeValue::U32)
            .map_err(|_| DecodeError::mismatch(unsigned_kind(width), raw.to_string())),
        IntWidth::W64 => Ok(AttributeValue::U64(raw)),
    }
}

fn decode_signed(value: &Value, width: IntWidth) -> Result<AttributeValue, DecodeError> {
    let raw = value
        .as_i64()
        .ok_or_else(|| DecodeError::mismatch(signed_kind(width), json_kind(value)))?;
    match width {
        IntWidth::W8 => i8::try_from(raw)
            .map(AttributeValue::I8)
            .map_err(|_| DecodeError::mismatch(signed_kind(width), raw.to_string())),
        IntWidth::W16 => i16::try_from(raw)
            .map(AttributeValue::I16)
            .map_err(|_| DecodeError::mismatch(signed_kind(width), raw.to_string())),
        IntWidth::W32 => i32::try_from(raw)
            .map(AttributeValue::I32)
            .map_err(|_| DecodeError::mismatch(signed_kind(width), raw.to_string())),
        IntWidth::W64 => Ok(AttributeValue::I64(raw)),
    }
}

fn decode_enum(value: &Value, dictionary: &'static EnumDictionary) -> Result<AttributeValue, DecodeError> {
    let token = value
        .as_str()
        .ok_or_else(|| DecodeError::mismatch("enum token", json_kind(value)))?;
    dictionary
        .value(token)
        .map(AttributeValue::Enum8)
        .ok_or_else(|| DecodeError::UnmappedToken {
            dictionary: dictionary.name,
            token: token.to_owned(),
        })
}

fn decode_bitmap(value: &Value, table: &'static BitmapTable) -> Result<AttributeValue, DecodeError> {
    let object = value
        .as_object()
        .ok_or_else(|| DecodeError::mismatch("flag object", json_kind(value)))?;
    let mut raw: u64 = 0;
    // Field-wise: a flag is set when its key is present and truthy; keys
    // outside the table make the whole payload unusable.
    for (name, flag) in object {
        let position = table.position(name).ok_or_else(|| DecodeError::UnmappedToken {
            dictionary: table.name,
            token: name.clone(),
        })?;
        if truthy(flag)? {
            raw |= 1 << position;
        }
    }
    Ok(match table.width {
        BitmapWidth::B8 => AttributeValue::Bitmap8(raw as u8),
        BitmapWidth::B16 => AttributeValue::Bitmap16(raw as u16),
        BitmapWidth::B32 => AttributeValue::Bitmap32(raw as u32),
    })
}

fn truthy(flag: &Value) -> Result<bool, DecodeError> {
    match flag {
        Value::Bool(set) => Ok(*set),
        Value::Number(number) => number
            .as_u64()
            .map(|n| n != 0)
            .or_else(|| number.as_i64().map(|n| n != 0))
            .ok_or_else(|| DecodeError::mismatch("flag", json_kind(flag))),
        other => Err(DecodeError::mismatch("flag", json_kind(other))),
    }
}

fn type_error(expected: &'static str, found: &AttributeValue) -> EncodeError {
    EncodeError::TypeMismatch {
        expected,
        found: found.type_name(),
    }
}

pub(crate) fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn unsigned_name(width: IntWidth) -> &'static str {
    match width {
        IntWidth::W8 => "U8",
        IntWidth::W16 => "U16",
        IntWidth::W32 => "U32",
        IntWidth::W64 => "U64",
    }
}

fn signed_name(width: IntWidth) -> &'static str {
    match width {
        IntWidth::W8 => "I8",
        IntWidth::W16 => "I16",
        IntWidth::W32 => "I32",
        IntWidth::W64 => "I64",
    }
}

fn bitmap_name(width: BitmapWidth) -> &'static str {
    match width {
        BitmapWidth::B8 => "Bitmap8",
        BitmapWidth::B16 => "Bitmap16",
        BitmapWidth::B32 => "Bitmap32",
    }
}

fn unsigned_kind(width: IntWidth) -> &'static str {
    match width {
        IntWidth::W8 => "u8",
        IntWidth::W16 => "u16",
        IntWidth::W32 => "u32",
        IntWidth::W64 => "u64",
    }
}

fn signed_kind(width: IntWidth) -> &'static str {
    match width {
        IntWidth::W8 => "i8",
        IntWidth::W16 => "i16",
        IntWidth::W32 => "i32",
        IntWidth::W64 => "i64",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cluster::{self, door_lock, level, occupancy_sensing, on_off, temperature_measurement};

    fn descriptor(ty: ValueType) -> AttributeDescriptor {
        AttributeDescriptor::new(0x0000, "Test", ty)
    }

    #[test]
    fn booleans_round_trip() {
        let d = descriptor(ValueType::Boolean);
        let encoded = encode(&AttributeValue::Boolean(true), &d).unwrap();
        assert_eq!(encoded, json!(true));
        assert_eq!(decode(&encoded, &d).unwrap(), AttributeValue::Boolean(true));
    }

    #[test]
    fn unsigned_decoding_checks_range() {
        let d = descriptor(ValueType::Unsigned(IntWidth::W8));
        assert_eq!(decode(&json!(255), &d).unwrap(), AttributeValue::U8(255));
        assert!(matches!(
            decode(&json!(256), &d),
            Err(DecodeError::TypeMismatch { expected: "u8", .. })
        ));
        assert!(matches!(
            decode(&json!(-1), &d),
            Err(DecodeError::TypeMismatch { .. })
        ));
    }

    #[test]
    fn signed_decoding_accepts_negative_values() {
        let d = descriptor(ValueType::Signed(IntWidth::W16));
        assert_eq!(decode(&json!(-2754), &d).unwrap(), AttributeValue::I16(-2754));
        assert!(decode(&json!(40_000), &d).is_err());
    }

    #[test]
    fn strings_and_octets_round_trip() {
        let text = descriptor(ValueType::Utf8);
        assert_eq!(
            decode(&encode(&AttributeValue::Utf8("en".into()), &text).unwrap(), &text).unwrap(),
            AttributeValue::Utf8("en".into())
        );

        let octets = descriptor(ValueType::Octets);
        let encoded = encode(&AttributeValue::Octets(vec![0xDE, 0xAD]), &octets).unwrap();
        assert_eq!(encoded, json!("dead"));
        assert_eq!(
            decode(&encoded, &octets).unwrap(),
            AttributeValue::Octets(vec![0xDE, 0xAD])
        );
        assert!(decode(&json!("not hex"), &octets).is_err());
    }

    #[test]
    fn nullable_maps_null_and_defers_the_rest() {
        let d = descriptor(ValueType::Nullable(&ValueType::Unsigned(IntWidth::W8)));
        assert_eq!(encode(&AttributeValue::Null, &d).unwrap(), Value::Null);
        assert_eq!(decode(&Value::Null, &d).unwrap(), AttributeValue::Null);
        assert_eq!(decode(&json!(7), &d).unwrap(), AttributeValue::U8(7));
    }

    #[test]
    fn enum_tokens_round_trip() {
        let d = descriptor(ValueType::Enum8(&on_off::START_UP_ON_OFF));
        let encoded = encode(&AttributeValue::Enum8(on_off::StartUpOnOff::Toggle as u8), &d).unwrap();
        assert_eq!(encoded, json!("TogglePreviousOnOff"));
        assert_eq!(
            decode(&encoded, &d).unwrap(),
            AttributeValue::Enum8(on_off::StartUpOnOff::Toggle as u8)
        );
    }

    #[test]
    fn unknown_enum_token_is_rejected_with_the_dictionary_name() {
        let d = descriptor(ValueType::Enum8(&door_lock::LOCK_TYPE));
        assert_eq!(
            decode(&json!("DeadBolt"), &d).unwrap(),
            AttributeValue::Enum8(door_lock::LockType::DeadBolt as u8)
        );
        assert_eq!(
            decode(&json!("Unrecognized"), &d),
            Err(DecodeError::UnmappedToken {
                dictionary: "LockType",
                token: "Unrecognized".into(),
            })
        );
    }

    #[test]
    fn unmapped_enum_member_fails_encoding_deterministically() {
        // Unlatched has no external token.
        let d = descriptor(ValueType::Enum8(&door_lock::LOCK_STATE));
        let unlatched = AttributeValue::Enum8(door_lock::LockState::Unlatched as u8);
        for _ in 0..3 {
            assert_eq!(
                encode(&unlatched, &d),
                Err(EncodeError::UnmappedValue {
                    dictionary: "LockState",
                    value: door_lock::LockState::Unlatched as u64,
                })
            );
        }
    }

    #[test]
    fn bitmap_encoding_lists_every_flag_explicitly() {
        let d = descriptor(ValueType::Bitmap(&occupancy_sensing::OCCUPANCY));
        let encoded = encode(&AttributeValue::Bitmap8(0b1), &d).unwrap();
        assert_eq!(encoded, json!({ "SensedOccupancy": true }));
        let cleared = encode(&AttributeValue::Bitmap8(0), &d).unwrap();
        assert_eq!(cleared, json!({ "SensedOccupancy": false }));
    }

    #[test]
    fn bitmap_encoding_rejects_bits_outside_the_table() {
        let d = descriptor(ValueType::Bitmap(&occupancy_sensing::OCCUPANCY));
        assert_eq!(
            encode(&AttributeValue::Bitmap8(0b10), &d),
            Err(EncodeError::UnmappedValue {
                dictionary: "Occupancy",
                value: 0b10,
            })
        );
    }

    #[test]
    fn bitmap_decoding_is_field_wise() {
        let d = descriptor(ValueType::Bitmap(&level::OPTIONS));
        let decoded = decode(&json!({ "ExecuteIfOff": true }), &d).unwrap();
        assert_eq!(decoded, AttributeValue::Bitmap8(0b1));
        // Numeric truthiness: nonzero sets, zero clears.
        let decoded = decode(&json!({ "ExecuteIfOff": 0, "CoupleColorTempToLevel": 1 }), &d).unwrap();
        assert_eq!(decoded, AttributeValue::Bitmap8(0b10));
    }

    #[test]
    fn bitmap_decoding_rejects_unknown_flags() {
        let d = descriptor(ValueType::Bitmap(&level::OPTIONS));
        assert_eq!(
            decode(&json!({ "ExecuteIfOff": true, "Mystery": true }), &d),
            Err(DecodeError::UnmappedToken {
                dictionary: "LevelOptions",
                token: "Mystery".into(),
            })
        );
        assert!(decode(&json!({ "ExecuteIfOff": "yes" }), &d).is_err());
    }

    #[test]
    fn shape_mismatches_name_both_sides() {
        let d = descriptor(ValueType::Unsigned(IntWidth::W16));
        assert_eq!(
            decode(&json!("fast"), &d),
            Err(DecodeError::TypeMismatch {
                expected: "u16",
                found: "string".into(),
            })
        );
        assert_eq!(
            encode(&AttributeValue::Boolean(true), &d),
            Err(EncodeError::TypeMismatch {
                expected: "U16",
                found: "Boolean",
            })
        );
    }

    fn dictionary_types(ty: ValueType) -> Option<ValueType> {
        match ty {
            ValueType::Nullable(inner) => dictionary_types(*inner),
            ValueType::Enum8(_) | ValueType::Bitmap(_) => Some(ty),
            _ => None,
        }
    }

    // Every mapped member of every registered dictionary encodes to a token
    // that decodes back to the same member.
    #[test]
    fn registered_dictionaries_round_trip() {
        for cluster in cluster::default_registry().clusters() {
            for attribute in cluster.attributes {
                let Some(ty) = dictionary_types(attribute.value_type) else {
                    continue;
                };
                let d = descriptor(ty);
                match ty {
                    ValueType::Enum8(dictionary) => {
                        for (member, _) in dictionary.entries {
                            let local = AttributeValue::Enum8(*member);
                            let encoded = encode(&local, &d).unwrap();
                            assert_eq!(decode(&encoded, &d).unwrap(), local, "{}", dictionary.name);
                        }
                    }
                    ValueType::Bitmap(table) => {
                        for (position, _) in table.flags {
                            let local = match table.width {
                                BitmapWidth::B8 => AttributeValue::Bitmap8(1 << position),
                                BitmapWidth::B16 => AttributeValue::Bitmap16(1 << position),
                                BitmapWidth::B32 => AttributeValue::Bitmap32(1 << position),
                            };
                            let encoded = encode(&local, &d).unwrap();
                            assert_eq!(decode(&encoded, &d).unwrap(), local, "{}", table.name);
                        }
                    }
                    _ => {}
                }
            }
        }
        // Keep the walk honest: the registry is not empty.
        assert!(cluster::default_registry().cluster(temperature_measurement::CLUSTER_ID).is_some());
    }
}
