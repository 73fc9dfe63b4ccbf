//! JsonObject — string-keyed map view with typed accessors.

use std::cell::RefCell;
use std::rc::Rc;

use indexmap::IndexMap;
use serde_json::{Map, Value};

use crate::array::JsonArray;
use crate::contract::{JsonDeserialize, JsonSerialize};
use crate::error::{JsonError, Result};
use crate::node::{addr, enter, Node};
use crate::primitive::JsonPrimitive;

/// A view over one shared, insertion-ordered map of [`Node`]s.
///
/// Getters never insert or remove keys. A missing key yields the caller's
/// default for primitives and `None` for containers. A present key whose
/// value has the wrong kind is a [`JsonError::TypeMismatch`]. The only
/// implicit conversions are the numeric ones on [`get_int`](Self::get_int),
/// [`get_float`](Self::get_float) and [`get_double`](Self::get_double).
///
/// Cloning the view aliases the same map.
#[derive(Debug, Clone, Default)]
pub struct JsonObject {
    map: Rc<RefCell<IndexMap<String, Node>>>,
}

impl JsonObject {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses `text`, which must hold a JSON object at the top level.
    pub fn parse(text: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(text)?;
        let object = Self::from_value(value)?;
        tracing::debug!(bytes = text.len(), keys = object.len(), "parsed json object");
        Ok(object)
    }

    /// Builds a fresh view from a codec value, which must be an object.
    pub fn from_value(value: Value) -> Result<Self> {
        match Node::from_value(value) {
            Node::Object(object) => Ok(object),
            other => Err(JsonError::NotAnObject {
                found: other.kind_name(),
            }),
        }
    }

    pub(crate) fn from_entries(entries: impl IntoIterator<Item = (String, Node)>) -> Self {
        Self {
            map: Rc::new(RefCell::new(entries.into_iter().collect())),
        }
    }

    /// Empty object populated by `writer`.
    pub fn serialized<W: JsonSerialize + ?Sized>(writer: &W) -> Self {
        let mut object = Self::new();
        writer.write_json(&mut object);
        object
    }

    /// Like [`serialized`](Self::serialized); no writer means no object.
    pub fn get_serialized_object<W: JsonSerialize + ?Sized>(writer: Option<&W>) -> Option<Self> {
        writer.map(Self::serialized)
    }

    /// Parses `text` and lets `reader` populate itself from it.
    ///
    /// Without a reader nothing happens, not even parsing. If `read_json`
    /// fails part-way, the reader keeps whatever it had already assigned.
    pub fn fill_object<R: JsonDeserialize + ?Sized>(
        text: &str,
        reader: Option<&mut R>,
    ) -> Result<()> {
        let Some(reader) = reader else {
            return Ok(());
        };
        let object = Self::parse(text)?;
        reader.read_json(&object)
    }

    pub fn has_key(&self, key: &str) -> bool {
        self.map.borrow().contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.map.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.borrow().is_empty()
    }

    pub fn keys(&self) -> Vec<String> {
        self.map.borrow().keys().cloned().collect()
    }

    pub fn clear(&mut self) {
        self.map.borrow_mut().clear();
    }

    /// Raw node stored under `key`. Containers come back shared.
    pub fn get(&self, key: &str) -> Option<Node> {
        self.map.borrow().get(key).cloned()
    }

    /// Insert-or-replace.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Node>) {
        self.map.borrow_mut().insert(key.into(), value.into());
    }

    fn read<T>(
        &self,
        key: &str,
        default: T,
        expected: &'static str,
        convert: impl FnOnce(&Node) -> Option<T>,
    ) -> Result<T> {
        match self.map.borrow().get(key) {
            None => Ok(default),
            Some(node) => {
                convert(node).ok_or_else(|| JsonError::type_mismatch(key, expected, node))
            }
        }
    }

    pub fn get_bool(&self, key: &str, default: bool) -> Result<bool> {
        self.read(key, default, "bool", |node| match node {
            Node::Bool(v) => Some(*v),
            _ => None,
        })
    }

    pub fn set_bool(&mut self, key: impl Into<String>, value: bool) {
        self.set(key, value);
    }

    /// Accepts an `int`, or a parsed `long` truncated to 32 bits.
    #[allow(clippy::cast_possible_truncation)]
    pub fn get_int(&self, key: &str, default: i32) -> Result<i32> {
        self.read(key, default, "int", |node| match node {
            Node::Int(v) => Some(*v),
            Node::Long(v) => Some(*v as i32),
            _ => None,
        })
    }

    pub fn set_int(&mut self, key: impl Into<String>, value: i32) {
        self.set(key, value);
    }

    pub fn get_long(&self, key: &str, default: i64) -> Result<i64> {
        self.read(key, default, "long", |node| match node {
            Node::Long(v) => Some(*v),
            _ => None,
        })
    }

    pub fn set_long(&mut self, key: impl Into<String>, value: i64) {
        self.set(key, value);
    }

    /// Accepts any numeric kind, so `3` and `3.0` both read as `3.0`.
    #[allow(clippy::cast_possible_truncation)]
    pub fn get_float(&self, key: &str, default: f32) -> Result<f32> {
        self.read(key, default, "float", |node| match node {
            Node::Float(v) => Some(*v),
            other => other.as_f64_lossy().map(|v| v as f32),
        })
    }

    pub fn set_float(&mut self, key: impl Into<String>, value: f32) {
        self.set(key, value);
    }

    /// Accepts any numeric kind.
    pub fn get_double(&self, key: &str, default: f64) -> Result<f64> {
        self.read(key, default, "double", Node::as_f64_lossy)
    }

    pub fn set_double(&mut self, key: impl Into<String>, value: f64) {
        self.set(key, value);
    }

    pub fn get_string(&self, key: &str, default: &str) -> Result<String> {
        match self.map.borrow().get(key) {
            None => Ok(default.to_owned()),
            Some(Node::String(s)) => Ok(s.clone()),
            Some(other) => Err(JsonError::type_mismatch(key, "string", other)),
        }
    }

    pub fn set_string(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.set(key, value.into());
    }

    /// Shared view of the array under `key`, or `None` if the key is missing.
    ///
    /// An explicit `null` is a type mismatch here, unlike
    /// [`get_object`](Self::get_object).
    pub fn get_array(&self, key: &str) -> Result<Option<JsonArray>> {
        match self.get(key) {
            None => Ok(None),
            Some(Node::Array(array)) => Ok(Some(array)),
            Some(other) => Err(JsonError::type_mismatch(key, "array", &other)),
        }
    }

    fn require_array(&self, key: &str) -> Result<JsonArray> {
        self.get_array(key)?.ok_or_else(|| JsonError::MissingArray {
            key: key.to_owned(),
        })
    }

    /// See [`JsonArray::build_list`]. A missing key is
    /// [`JsonError::MissingArray`], never an empty list.
    pub fn get_list<T: JsonPrimitive>(&self, key: &str) -> Result<Vec<T>> {
        Ok(self.require_array(key)?.build_list())
    }

    pub fn get_string_list(&self, key: &str) -> Result<Vec<String>> {
        Ok(self.require_array(key)?.build_string_list())
    }

    pub fn get_object_list<T>(&self, key: &str) -> Result<Vec<T>>
    where
        T: JsonDeserialize + Default,
    {
        self.require_array(key)?.build_object_list()
    }

    /// Stores `array`'s list itself, not a copy.
    pub fn set_array(&mut self, key: impl Into<String>, array: &JsonArray) {
        self.set(key, array.clone());
    }

    pub fn set_list<T: JsonPrimitive>(&mut self, key: impl Into<String>, list: &[T]) {
        self.set(key, list.iter().copied().collect::<JsonArray>());
    }

    pub fn set_string_list<S: AsRef<str>>(&mut self, key: impl Into<String>, list: &[S]) {
        let array: JsonArray = list.iter().map(|s| AsRef::<str>::as_ref(s)).collect();
        self.set(key, array);
    }

    pub fn set_object_list<T: JsonSerialize>(&mut self, key: impl Into<String>, list: &[T]) {
        self.set(key, list.iter().map(Self::serialized).collect::<JsonArray>());
    }

    /// Shared view of the object under `key`; `None` when missing or null.
    pub fn get_object(&self, key: &str) -> Result<Option<JsonObject>> {
        match self.get(key) {
            None | Some(Node::Null) => Ok(None),
            Some(Node::Object(object)) => Ok(Some(object)),
            Some(other) => Err(JsonError::type_mismatch(key, "object", &other)),
        }
    }

    /// Stores `object`'s map itself, or `null`.
    pub fn set_object(&mut self, key: impl Into<String>, object: Option<&JsonObject>) {
        match object {
            Some(object) => self.set(key, object.clone()),
            None => self.set(key, Node::Null),
        }
    }

    pub fn to_value(&self) -> Result<Value> {
        self.lower(&mut Vec::new())
    }

    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.to_value()?)?)
    }

    pub(crate) fn lower(&self, ancestors: &mut Vec<usize>) -> Result<Value> {
        enter(ancestors, addr(&self.map))?;
        let mut out = Map::new();
        for (key, node) in self.map.borrow().iter() {
            out.insert(key.clone(), node.lower(ancestors)?);
        }
        ancestors.pop();
        Ok(Value::Object(out))
    }

    /// Whether both views share one map.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.map, &other.map)
    }

    pub(crate) fn eq_within(&self, other: &Self, visiting: &mut Vec<(usize, usize)>) -> bool {
        if self.ptr_eq(other) {
            return true;
        }
        let pair = (addr(&self.map), addr(&other.map));
        if visiting.contains(&pair) {
            return true;
        }
        let (a, b) = (self.map.borrow(), other.map.borrow());
        if a.len() != b.len() {
            return false;
        }
        visiting.push(pair);
        let equal = a
            .iter()
            .all(|(key, x)| b.get(key).is_some_and(|y| x.eq_within(y, visiting)));
        visiting.pop();
        equal
    }
}

/// Key-wise structural equality; key order is ignored.
impl PartialEq for JsonObject {
    fn eq(&self, other: &Self) -> bool {
        self.eq_within(other, &mut Vec::new())
    }
}
