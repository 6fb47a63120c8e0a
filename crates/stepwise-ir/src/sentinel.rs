//! `-1` sentinels on the wire, `Option` in memory.
//!
//! Clients mark "absent" indices (not found, uncolored, empty row) with
//! `-1`. These helpers keep that convention at the serde boundary so the
//! generators never see a negative index.

use serde::{Deserialize, Deserializer, Serializer};

fn to_wire(value: Option<usize>) -> i64 {
    value.map(|v| v as i64).unwrap_or(-1)
}

fn from_wire(raw: Option<i64>) -> Option<usize> {
    raw.and_then(|v| usize::try_from(v).ok())
}

/// `Option<usize>` <-> `-1 | n`.
pub mod option {
    use super::*;

    pub fn serialize<S: Serializer>(value: &Option<usize>, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_i64(to_wire(*value))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<usize>, D::Error> {
        let raw = Option::<i64>::deserialize(d)?;
        Ok(from_wire(raw))
    }
}

/// `Vec<Option<usize>>` <-> `[-1 | n, ...]`.
pub mod vec {
    use super::*;
    use serde::ser::SerializeSeq;

    pub fn serialize<S: Serializer>(values: &[Option<usize>], s: S) -> Result<S::Ok, S::Error> {
        let mut seq = s.serialize_seq(Some(values.len()))?;
        for value in values {
            seq.serialize_element(&to_wire(*value))?;
        }
        seq.end()
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Vec<Option<usize>>, D::Error> {
        let raw = Vec::<Option<i64>>::deserialize(d)?;
        Ok(raw.into_iter().map(from_wire).collect())
    }
}

#[cfg(test)]
mod tests {
    use serde::{Deserialize, Serialize};

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Probe {
        #[serde(default, with = "super::option")]
        index: Option<usize>,
        #[serde(default, with = "super::vec")]
        board: Vec<Option<usize>>,
    }

    #[test]
    fn test_none_serializes_as_minus_one() {
        let probe = Probe {
            index: None,
            board: vec![Some(1), None],
        };
        let json = serde_json::to_value(&probe).unwrap();
        assert_eq!(json["index"], -1);
        assert_eq!(json["board"], serde_json::json!([1, -1]));
    }

    #[test]
    fn test_negative_and_null_read_as_none() {
        let probe: Probe = serde_json::from_str(r#"{"index": -7, "board": [-1, 3, null]}"#).unwrap();
        assert_eq!(probe.index, None);
        assert_eq!(probe.board, vec![None, Some(3), None]);
    }

    #[test]
    fn test_missing_field_defaults() {
        let probe: Probe = serde_json::from_str("{}").unwrap();
        assert_eq!(probe.index, None);
        assert!(probe.board.is_empty());
    }
}
