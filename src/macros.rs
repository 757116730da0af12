/// Builds a [`Value`](crate::Value) from JSON-like syntax.
///
/// Nested values that are not literals (negative numbers, expressions,
/// [`NdArray`](crate::NdArray)s) go through [`to_value`](crate::to_value);
/// inside arrays and objects wrap them in parentheses.
///
/// A value that cannot be converted becomes [`Value::Null`](crate::Value::Null)
/// in the built tree. This includes NaN and infinities. The macro never fails,
/// so use [`to_value`](crate::to_value) directly when a non-finite float must
/// surface as [`Error::NonFiniteFloat`](crate::Error::NonFiniteFloat).
///
/// ```rust
/// use numeric_json::{value, IntRange, Value};
///
/// let v = value!({"name": "span", "range": (IntRange::new(0, 3)), "offset": (-1)});
/// let obj = v.as_object().unwrap();
/// assert_eq!(obj.get("range"), Some(&Value::Range(IntRange::new(0, 3))));
/// ```
#[macro_export]
macro_rules! value {
    (null) => {
        $crate::Value::Null
    };

    (true) => {
        $crate::Value::Bool(true)
    };

    (false) => {
        $crate::Value::Bool(false)
    };

    ([]) => {
        $crate::Value::Array(vec![])
    };

    ([ $($elem:tt),* $(,)? ]) => {
        $crate::Value::Array(vec![$($crate::value!($elem)),*])
    };

    ({}) => {
        $crate::Value::Object($crate::Map::new())
    };

    ({ $($key:literal : $value:tt),* $(,)? }) => {{
        let mut object = $crate::Map::new();
        $(
            object.insert($key.to_string(), $crate::value!($value));
        )*
        $crate::Value::Object(object)
    }};

    // Anything else is converted through serde; conversion errors become null.
    ($s:expr) => {{
        $crate::to_value(&$s).unwrap_or($crate::Value::Null)
    }};
}
