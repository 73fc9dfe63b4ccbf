//! Capability contracts connecting application types to the tree.
//!
//! A type opts in by implementing either trait, both, or neither. The
//! bridge calls ([`JsonObject::serialized`], [`JsonObject::fill_object`],
//! the `*_object_list` accessors) are what invoke them.

use crate::error::Result;
use crate::object::JsonObject;

/// Writes `self` into an object, usually a fresh empty one.
pub trait JsonSerialize {
    fn write_json(&self, object: &mut JsonObject);
}

/// Populates `self` from an object.
///
/// Must be the exact inverse of the type's [`JsonSerialize`] impl for
/// round-trips to reproduce an equal value.
pub trait JsonDeserialize {
    fn read_json(&mut self, object: &JsonObject) -> Result<()>;
}

impl<T: JsonSerialize + ?Sized> JsonSerialize for &T {
    fn write_json(&self, object: &mut JsonObject) {
        (**self).write_json(object);
    }
}

impl<T: JsonSerialize + ?Sized> JsonSerialize for Box<T> {
    fn write_json(&self, object: &mut JsonObject) {
        (**self).write_json(object);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Default, PartialEq)]
    struct Point {
        x: i32,
        y: i32,
    }

    impl JsonSerialize for Point {
        fn write_json(&self, object: &mut JsonObject) {
            object.set_int("x", self.x);
            object.set_int("y", self.y);
        }
    }

    impl JsonDeserialize for Point {
        fn read_json(&mut self, object: &JsonObject) -> Result<()> {
            self.x = object.get_int("x", 0)?;
            self.y = object.get_int("y", 0)?;
            Ok(())
        }
    }

    #[test]
    fn serialized_uses_writer() {
        let object = JsonObject::serialized(&Point { x: 1, y: 2 });
        assert_eq!(object.to_value().unwrap(), json!({"x": 1, "y": 2}));
    }

    #[test]
    fn absent_writer_yields_no_object() {
        assert!(JsonObject::get_serialized_object::<Point>(None).is_none());
        assert!(JsonObject::get_serialized_object(Some(&Point::default())).is_some());
    }

    #[test]
    fn absent_reader_skips_parsing() {
        JsonObject::fill_object::<Point>("not json", None).unwrap();
    }

    #[test]
    fn boxed_writers_list() {
        let points: Vec<Box<dyn JsonSerialize>> = vec![Box::new(Point { x: 1, y: 0 })];
        let mut object = JsonObject::new();
        object.set_object_list("points", &points);
        assert_eq!(object.to_value().unwrap(), json!({"points": [{"x": 1, "y": 0}]}));
    }

    #[test]
    fn partial_state_after_failed_read() {
        let mut point = Point::default();
        let err = JsonObject::fill_object(r#"{"x": 5, "y": "no"}"#, Some(&mut point));
        assert!(err.is_err());
        assert_eq!(point, Point { x: 5, y: 0 });
    }
}
