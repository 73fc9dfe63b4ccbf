//! JsonArray — ordered list view with typed list builders.

use std::cell::RefCell;
use std::rc::Rc;

use serde_json::Value;

use crate::contract::JsonDeserialize;
use crate::error::{JsonError, Result};
use crate::node::{addr, enter, Node};
use crate::object::JsonObject;
use crate::primitive::JsonPrimitive;

/// A view over one shared, ordered list of [`Node`]s.
///
/// Cloning the view (or reading it back with
/// [`JsonObject::get_array`]) aliases the same list, so an element added
/// through any handle is visible through all of them.
#[derive(Debug, Clone, Default)]
pub struct JsonArray {
    list: Rc<RefCell<Vec<Node>>>,
}

impl JsonArray {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_nodes(nodes: Vec<Node>) -> Self {
        Self {
            list: Rc::new(RefCell::new(nodes)),
        }
    }

    /// Builds a fresh array from a codec value, which must be an array.
    pub fn from_value(value: Value) -> Result<Self> {
        match Node::from_value(value) {
            Node::Array(array) => Ok(array),
            other => Err(JsonError::type_mismatch("", "array", &other)),
        }
    }

    pub fn add(&mut self, value: impl Into<Node>) {
        self.list.borrow_mut().push(value.into());
    }

    /// Removes the first element structurally equal to `value`.
    ///
    /// Returns whether anything was removed.
    pub fn remove(&mut self, value: impl Into<Node>) -> bool {
        let value = value.into();
        let position = self.list.borrow().iter().position(|node| *node == value);
        match position {
            Some(index) => {
                self.list.borrow_mut().remove(index);
                true
            }
            None => false,
        }
    }

    pub fn get(&self, index: usize) -> Option<Node> {
        self.list.borrow().get(index).cloned()
    }

    /// Snapshot of the elements. Nested containers stay shared.
    pub fn nodes(&self) -> Vec<Node> {
        self.list.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.list.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.list.borrow().is_empty()
    }

    pub fn clear(&mut self) {
        self.list.borrow_mut().clear();
    }

    /// Collects the elements of kind `T`.
    ///
    /// Besides exact matches, a wide integer that fits is narrowed into an
    /// `i32` list and a wide float into an `f32` list. Elements of any other kind are
    /// skipped without error; callers that need a homogeneous array must
    /// compare lengths themselves.
    pub fn build_list<T: JsonPrimitive>(&self) -> Vec<T> {
        let list = self.list.borrow();
        let out: Vec<T> = list.iter().filter_map(T::from_element).collect();
        if out.len() != list.len() {
            tracing::trace!(
                kept = out.len(),
                skipped = list.len() - out.len(),
                "build_list skipped elements of another kind"
            );
        }
        out
    }

    /// Collects the string elements, skipping everything else.
    pub fn build_string_list(&self) -> Vec<String> {
        self.list
            .borrow()
            .iter()
            .filter_map(|node| match node {
                Node::String(s) => Some(s.clone()),
                _ => None,
            })
            .collect()
    }

    /// Reads every element into a fresh `T`.
    ///
    /// Each element must be an object; the first one that is not stops the
    /// build with [`JsonError::TypeMismatch`] keyed by its index.
    pub fn build_object_list<T>(&self) -> Result<Vec<T>>
    where
        T: JsonDeserialize + Default,
    {
        let objects = self.build_json_object_list()?;
        let mut out = Vec::with_capacity(objects.len());
        for object in &objects {
            let mut item = T::default();
            item.read_json(object)?;
            out.push(item);
        }
        Ok(out)
    }

    /// Wraps every element as a [`JsonObject`] view sharing its map.
    pub fn build_json_object_list(&self) -> Result<Vec<JsonObject>> {
        // Snapshot first: readers may reach this list again through a parent.
        let nodes = self.nodes();
        nodes
            .into_iter()
            .enumerate()
            .map(|(index, node)| match node {
                Node::Object(object) => Ok(object),
                other => Err(JsonError::type_mismatch(format!("[{index}]"), "object", &other)),
            })
            .collect()
    }

    pub fn to_value(&self) -> Result<Value> {
        self.lower(&mut Vec::new())
    }

    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.to_value()?)?)
    }

    pub(crate) fn lower(&self, ancestors: &mut Vec<usize>) -> Result<Value> {
        enter(ancestors, addr(&self.list))?;
        let items = self
            .list
            .borrow()
            .iter()
            .map(|node| node.lower(ancestors))
            .collect::<Result<Vec<_>>>()?;
        ancestors.pop();
        Ok(Value::Array(items))
    }

    /// Whether both views share one list.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.list, &other.list)
    }

    pub(crate) fn eq_within(&self, other: &Self, visiting: &mut Vec<(usize, usize)>) -> bool {
        if self.ptr_eq(other) {
            return true;
        }
        let pair = (addr(&self.list), addr(&other.list));
        if visiting.contains(&pair) {
            return true;
        }
        let (a, b) = (self.list.borrow(), other.list.borrow());
        if a.len() != b.len() {
            return false;
        }
        visiting.push(pair);
        let equal = a.iter().zip(b.iter()).all(|(x, y)| x.eq_within(y, visiting));
        visiting.pop();
        equal
    }
}

impl PartialEq for JsonArray {
    fn eq(&self, other: &Self) -> bool {
        self.eq_within(other, &mut Vec::new())
    }
}

impl<T: Into<Node>> FromIterator<T> for JsonArray {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_nodes(iter.into_iter().map(Into::into).collect())
    }
}
