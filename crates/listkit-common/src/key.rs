//! # Key Coercion
//!
//! Records are keyed by strings, but the values used as keys (a user's id, a
//! status flag, a score) are often not strings. [`ToKey`] spells out how each
//! value becomes a key, following the usual property-key rules of dynamic
//! record languages:
//!
//! | value | key |
//! |---|---|
//! | `"abc"` | `abc` |
//! | `42`, `1.0`, `1.5` | `42`, `1`, `1.5` |
//! | `f64::NAN`, `f64::INFINITY` | `NaN`, `Infinity` |
//! | `true` | `true` |
//! | `None` | `null` |
//! | `[1, 2]` | `1,2` |
//! | `[1, None]` | `1,` |
//!
//! Two different values can share a key (`1` and `"1"`, or `[1, 2]` and
//! `"1,2"`). Code that relies on keys for equality inherits that behavior.

use std::rc::Rc;
use std::sync::Arc;

/// Converts a value into the string key it is stored under.
pub trait ToKey {
    fn to_key(&self) -> String;

    /// The key this value contributes when it sits inside a list.
    ///
    /// Missing values join as empty strings, so `[1, None, 3]` becomes
    /// `"1,,3"` rather than `"1,null,3"`.
    fn join_key(&self) -> String {
        self.to_key()
    }
}

impl ToKey for str {
    fn to_key(&self) -> String {
        self.to_owned()
    }
}

impl ToKey for String {
    fn to_key(&self) -> String {
        self.clone()
    }
}

impl ToKey for char {
    fn to_key(&self) -> String {
        self.to_string()
    }
}

impl ToKey for bool {
    fn to_key(&self) -> String {
        self.to_string()
    }
}

macro_rules! int_to_key {
    ($($t:ty),*) => {
        $(
            impl ToKey for $t {
                fn to_key(&self) -> String {
                    self.to_string()
                }
            }
        )*
    };
}

int_to_key!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

/// Formats a float the way a record key would spell it.
///
/// Integral values lose their fractional part (`1.0` → `"1"`), and the
/// non-finite values use their long names. Magnitudes of at least `1e21` or
/// below `1e-6` switch to exponent form with a signed exponent (`"1e+21"`,
/// `"1.5e-7"`).
pub fn float_key(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value.is_infinite() {
        let name = if value > 0.0 { "Infinity" } else { "-Infinity" };
        name.to_string()
    } else if value == 0.0 {
        // -0.0 and 0.0 share a key
        "0".to_string()
    } else if value.abs() >= 1e21 || value.abs() < 1e-6 {
        let spelled = format!("{value:e}");
        match spelled.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                format!("{mantissa}e+{exponent}")
            }
            _ => spelled,
        }
    } else {
        value.to_string()
    }
}

impl ToKey for f64 {
    fn to_key(&self) -> String {
        float_key(*self)
    }
}

impl ToKey for f32 {
    fn to_key(&self) -> String {
        float_key(f64::from(*self))
    }
}

impl ToKey for () {
    fn to_key(&self) -> String {
        "null".to_string()
    }

    fn join_key(&self) -> String {
        String::new()
    }
}

impl<T: ToKey> ToKey for Option<T> {
    fn to_key(&self) -> String {
        match self {
            Some(value) => value.to_key(),
            None => "null".to_string(),
        }
    }

    fn join_key(&self) -> String {
        match self {
            Some(value) => value.join_key(),
            None => String::new(),
        }
    }
}

impl<T: ToKey> ToKey for [T] {
    fn to_key(&self) -> String {
        self.iter().map(ToKey::join_key).collect::<Vec<_>>().join(",")
    }
}

impl<T: ToKey> ToKey for Vec<T> {
    fn to_key(&self) -> String {
        self.as_slice().to_key()
    }
}

impl<T: ToKey + ?Sized> ToKey for &T {
    fn to_key(&self) -> String {
        (**self).to_key()
    }

    fn join_key(&self) -> String {
        (**self).join_key()
    }
}

impl<T: ToKey + ?Sized> ToKey for Box<T> {
    fn to_key(&self) -> String {
        (**self).to_key()
    }

    fn join_key(&self) -> String {
        (**self).join_key()
    }
}

impl<T: ToKey + ?Sized> ToKey for Rc<T> {
    fn to_key(&self) -> String {
        (**self).to_key()
    }

    fn join_key(&self) -> String {
        (**self).join_key()
    }
}

impl<T: ToKey + ?Sized> ToKey for Arc<T> {
    fn to_key(&self) -> String {
        (**self).to_key()
    }

    fn join_key(&self) -> String {
        (**self).join_key()
    }
}

#[cfg(feature = "json")]
impl ToKey for serde_json::Value {
    fn to_key(&self) -> String {
        use serde_json::Value;

        match self {
            Value::Null => "null".to_string(),
            Value::Bool(b) => b.to_key(),
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    i.to_key()
                } else if let Some(u) = n.as_u64() {
                    u.to_key()
                } else {
                    n.as_f64().map_or_else(|| n.to_string(), float_key)
                }
            }
            Value::String(s) => s.clone(),
            Value::Array(items) => items.as_slice().to_key(),
            Value::Object(_) => "[object Object]".to_string(),
        }
    }

    fn join_key(&self) -> String {
        match self {
            serde_json::Value::Null => String::new(),
            other => other.to_key(),
        }
    }
}
