use serde_json::Value;
use tracing::debug;

use crate::domain::{Item, ItemType};
use crate::error::{CargoError, Result};

const UNKNOWN_NAME: &str = "Unknown";

/// Normalize a loosely structured cargo payload into typed records.
///
/// The payload is whatever JSON the upstream source handed over; `types` and
/// `items` are each treated as empty unless present as arrays. Every raw
/// entry maps to exactly one output record, in input order. `source` is an
/// opaque tag carried along for bookkeeping and never branched on.
pub fn normalize_raw(source: &str, raw: &Value) -> Result<(Vec<ItemType>, Vec<Item>)> {
    let types_raw = raw
        .get("types")
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or(&[]);
    let items_raw = raw
        .get("items")
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or(&[]);

    let mut item_types = Vec::with_capacity(types_raw.len());
    for entry in types_raw {
        item_types.push(item_type_from_entry(entry)?);
    }

    let mut items = Vec::with_capacity(items_raw.len());
    for entry in items_raw {
        items.push(item_from_entry(entry)?);
    }

    debug!(
        source,
        types = item_types.len(),
        items = items.len(),
        "normalized payload"
    );
    Ok((item_types, items))
}

fn item_type_from_entry(entry: &Value) -> Result<ItemType> {
    Ok(ItemType {
        name: match resolve_field(entry, &["name", "id"]) {
            Some((_, value)) => coerce_string(value),
            None => UNKNOWN_NAME.to_string(),
        },
        unit_weight_kg: match resolve_field(entry, &["unitWeightKg", "w"]) {
            Some((key, value)) => coerce_f64(key, value)?,
            None => 0.0,
        },
        unit_volume_m3: match resolve_field(entry, &["unitVolumeM3", "v"]) {
            Some((key, value)) => coerce_f64(key, value)?,
            None => 0.0,
        },
        length_m: resolve_dimension(entry, "lengthM")?,
        width_m: resolve_dimension(entry, "widthM")?,
        height_m: resolve_dimension(entry, "heightM")?,
    })
}

fn item_from_entry(entry: &Value) -> Result<Item> {
    Ok(Item {
        item_type_name: match resolve_field(entry, &["itemTypeName", "type"]) {
            Some((_, value)) => coerce_string(value),
            None => UNKNOWN_NAME.to_string(),
        },
        quantity: match resolve_field(entry, &["quantity", "q"]) {
            Some((key, value)) => coerce_i64(key, value)?,
            None => 0,
        },
    })
}

/// First key whose value is present and truthy, together with the key that
/// matched. Falsy values (null, false, 0, "", [], {}) are skipped so the
/// fallback key gets a chance; a falsy 0 is indistinguishable from missing
/// for these fields.
fn resolve_field<'a>(
    entry: &'a Value,
    keys: &[&'static str],
) -> Option<(&'static str, &'a Value)> {
    keys.iter()
        .find_map(|key| entry.get(key).filter(|v| is_truthy(v)).map(|v| (*key, v)))
}

/// Dimensions keep an explicit 0; only a missing key or JSON null counts as
/// absent.
fn resolve_dimension(entry: &Value, key: &'static str) -> Result<Option<f64>> {
    match entry.get(key) {
        Some(value) if !value.is_null() => coerce_f64(key, value).map(Some),
        _ => Ok(None),
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}

fn coerce_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn coerce_f64(field: &'static str, value: &Value) -> Result<f64> {
    match value {
        Value::Number(n) => n
            .as_f64()
            .ok_or_else(|| coercion_error(field, "float", value)),
        Value::String(s) => s
            .trim()
            .parse::<f64>()
            .map_err(|_| coercion_error(field, "float", value)),
        Value::Bool(b) => Ok(if *b { 1.0 } else { 0.0 }),
        _ => Err(coercion_error(field, "float", value)),
    }
}

fn coerce_i64(field: &'static str, value: &Value) -> Result<i64> {
    match value {
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Ok(i)
            } else if let Some(f) = n.as_f64() {
                // fractional quantities truncate toward zero
                Ok(f.trunc() as i64)
            } else {
                Err(coercion_error(field, "integer", value))
            }
        }
        Value::String(s) => s
            .trim()
            .parse::<i64>()
            .map_err(|_| coercion_error(field, "integer", value)),
        Value::Bool(b) => Ok(*b as i64),
        _ => Err(coercion_error(field, "integer", value)),
    }
}

fn coercion_error(field: &'static str, target: &'static str, value: &Value) -> CargoError {
    CargoError::Coercion {
        field,
        target,
        value: value.clone(),
    }
}
