use super::Value;

/// Structural equality over the native value model.
///
/// Kinds must match exactly (a `Number` never equals a `BigInt`). Dates
/// compare by instant. Arrays compare element-wise in order; objects compare
/// by key set, ignoring key order.
///
/// # Examples
///
/// ```
/// use search_params_type::{deep_equal, record, Value};
///
/// let a = Value::from(record! { "x" => 1, "y" => vec!["a"] });
/// let b = Value::from(record! { "y" => vec!["a"], "x" => 1 });
/// assert!(deep_equal(&a, &b));
/// ```
pub fn deep_equal(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Null, Value::Null) => true,
        (Value::Bool(a), Value::Bool(b)) => a == b,
        (Value::Number(a), Value::Number(b)) => a == b,
        (Value::BigInt(a), Value::BigInt(b)) => a == b,
        (Value::Date(a), Value::Date(b)) => a == b,
        (Value::String(a), Value::String(b)) => a == b,

        (Value::Array(arr_a), Value::Array(arr_b)) => {
            if arr_a.len() != arr_b.len() {
                return false;
            }
            arr_a.iter().zip(arr_b).all(|(a, b)| deep_equal(a, b))
        }

        (Value::Object(obj_a), Value::Object(obj_b)) => {
            if obj_a.len() != obj_b.len() {
                return false;
            }
            for (key, val_a) in obj_a {
                match obj_b.get(key) {
                    Some(val_b) => {
                        if !deep_equal(val_a, val_b) {
                            return false;
                        }
                    }
                    None => return false,
                }
            }
            true
        }

        _ => false,
    }
}
