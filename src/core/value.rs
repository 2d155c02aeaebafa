//! Structural values decoded from YAML
//!
//! A [`Value`] is the frozen, type-tagged form of one YAML document. It is
//! built once from the YAML library's generic value and never mutated
//! afterwards. Equality lives in [`crate::core::equality`] because mappings
//! must compare independent of key order.

use std::fmt;

/// One decoded YAML node
#[derive(Debug, Clone)]
pub enum Value {
    Null,
    Bool(bool),
    /// Integers are widened so that both signed and unsigned 64-bit values fit
    Integer(i128),
    Float(f64),
    String(String),
    Sequence(Vec<Value>),
    Mapping(Mapping),
}

impl Value {
    pub fn as_mapping(&self) -> Option<&Mapping> {
        match self {
            Value::Mapping(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_sequence(&self) -> Option<&[Value]> {
        match self {
            Value::Sequence(seq) => Some(seq),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// First mapping key that occurs twice in one mapping, searched depth-first
    pub fn find_duplicate_key(&self) -> Option<&Value> {
        match self {
            Value::Sequence(seq) => seq.iter().find_map(Value::find_duplicate_key),
            Value::Mapping(map) => map.find_duplicate_key(),
            _ => None,
        }
    }
}

/// Renders the value in compact YAML flow style
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Integer(i) => write!(f, "{}", i),
            Value::Float(x) if x.is_nan() => write!(f, ".nan"),
            Value::Float(x) if x.is_infinite() => {
                write!(f, "{}", if *x > 0.0 { ".inf" } else { "-.inf" })
            }
            // Keep a decimal point so floats never render like integers
            Value::Float(x) if x.fract() == 0.0 && x.abs() < 1e16 => write!(f, "{:.1}", x),
            Value::Float(x) => write!(f, "{}", x),
            Value::String(s) => write!(f, "{:?}", s),
            Value::Sequence(seq) => {
                write!(f, "[")?;
                for (i, item) in seq.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, "]")
            }
            Value::Mapping(map) => write!(f, "{}", map),
        }
    }
}

impl From<serde_yml::Value> for Value {
    fn from(value: serde_yml::Value) -> Self {
        match value {
            serde_yml::Value::Null => Value::Null,
            serde_yml::Value::Bool(b) => Value::Bool(b),
            serde_yml::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Value::Integer(i128::from(i))
                } else if let Some(u) = n.as_u64() {
                    Value::Integer(i128::from(u))
                } else {
                    Value::Float(n.as_f64().unwrap_or(f64::NAN))
                }
            }
            serde_yml::Value::String(s) => Value::String(s),
            serde_yml::Value::Sequence(seq) => {
                Value::Sequence(seq.into_iter().map(Value::from).collect())
            }
            serde_yml::Value::Mapping(map) => Value::Mapping(
                map.into_iter()
                    .map(|(k, v)| (Value::from(k), Value::from(v)))
                    .collect(),
            ),
            // Tags carry no structural meaning for comparison
            serde_yml::Value::Tagged(tagged) => Value::from(tagged.value),
        }
    }
}

/// Mapping entries in declaration order
///
/// Keys are unique once decoded: tags are dropped on conversion, so `!a x`
/// and `!b x` would collide, and the decoder rejects such mappings. Lookups
/// match keys by structural equality, so non-string keys (`1: one`,
/// `[a, b]: pair`) work the same way as string keys.
#[derive(Debug, Clone, Default)]
pub struct Mapping {
    entries: Vec<(Value, Value)>,
}

impl Mapping {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up the value stored under a structurally equal key
    pub fn get(&self, key: &Value) -> Option<&Value> {
        self.entries
            .iter()
            .find(|(k, _)| crate::core::equality::values_equal(k, key))
            .map(|(_, v)| v)
    }

    pub fn contains_key(&self, key: &Value) -> bool {
        self.get(key).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Value, &Value)> {
        self.entries.iter().map(|(k, v)| (k, v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &Value> {
        self.entries.iter().map(|(k, _)| k)
    }

    /// First key that occurs twice in this mapping or any nested one
    pub fn find_duplicate_key(&self) -> Option<&Value> {
        let duplicate = self.entries.iter().enumerate().find_map(|(i, (key, _))| {
            self.entries[i + 1..]
                .iter()
                .any(|(other, _)| crate::core::equality::values_equal(key, other))
                .then_some(key)
        });
        duplicate.or_else(|| {
            self.entries
                .iter()
                .find_map(|(k, v)| k.find_duplicate_key().or_else(|| v.find_duplicate_key()))
        })
    }
}

impl FromIterator<(Value, Value)> for Mapping {
    fn from_iter<I: IntoIterator<Item = (Value, Value)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for Mapping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (k, v)) in self.entries.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}: {}", k, v)?;
        }
        write!(f, "}}")
    }
}

/// Ordered values of a (possibly multi-document) YAML stream
#[derive(Debug, Clone, Default)]
pub struct Documents(Vec<Value>);

impl Documents {
    pub fn new(documents: Vec<Value>) -> Self {
        Self(documents)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Value> {
        self.0.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[Value] {
        &self.0
    }
}

impl From<Vec<Value>> for Documents {
    fn from(documents: Vec<Value>) -> Self {
        Self(documents)
    }
}

impl<'a> IntoIterator for &'a Documents {
    type Item = &'a Value;
    type IntoIter = std::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn yaml(s: &str) -> Value {
        Value::from(serde_yml::from_str::<serde_yml::Value>(s).unwrap())
    }

    #[test]
    fn test_integers_and_floats_stay_distinct() {
        assert!(matches!(yaml("1"), Value::Integer(1)));
        assert!(matches!(yaml("-7"), Value::Integer(-7)));
        assert!(matches!(yaml("1.0"), Value::Float(x) if x == 1.0));
    }

    #[test]
    fn test_large_unsigned_integer_fits() {
        let value = yaml("18446744073709551615");
        assert!(matches!(value, Value::Integer(i) if i == i128::from(u64::MAX)));
    }

    #[test]
    fn test_mapping_preserves_declaration_order() {
        let value = yaml("b: 1\na: 2\n");
        let keys: Vec<_> = value
            .as_mapping()
            .unwrap()
            .keys()
            .map(|k| k.as_str().unwrap().to_string())
            .collect();
        assert_eq!(keys, vec!["b", "a"]);
    }

    #[test]
    fn test_mapping_get_with_non_string_key() {
        let value = yaml("1: one\ntwo: 2\n");
        let map = value.as_mapping().unwrap();
        assert_eq!(map.get(&Value::Integer(1)).and_then(Value::as_str), Some("one"));
        assert!(map.contains_key(&Value::String("two".into())));
        assert!(!map.contains_key(&Value::String("1".into())));
    }

    #[test]
    fn test_keys_colliding_after_tags_are_found() {
        let value = yaml("outer:\n  - !a x: 1\n    !b x: 2\n");
        assert_eq!(
            value.find_duplicate_key().and_then(Value::as_str),
            Some("x")
        );
        assert!(yaml("!a x: 1\n!b y: 2\n").find_duplicate_key().is_none());
    }

    #[test]
    fn test_tag_is_dropped() {
        assert_eq!(yaml("!custom hello").as_str(), Some("hello"));
    }

    #[test]
    fn test_display_flow_style() {
        let value = yaml("name: demo\nitems: [1, 2.0, null, true]\n");
        assert_eq!(
            value.to_string(),
            r#"{"name": "demo", "items": [1, 2.0, null, true]}"#
        );
    }

    #[test]
    fn test_display_special_floats() {
        assert_eq!(Value::Float(f64::NAN).to_string(), ".nan");
        assert_eq!(Value::Float(f64::NEG_INFINITY).to_string(), "-.inf");
        assert_eq!(Value::Float(2.5).to_string(), "2.5");
    }
}
