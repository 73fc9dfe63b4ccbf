//! node — the tagged value tree underneath every view.
//!
//! Parsed text is lowered from [`serde_json::Value`] into [`Node`]s. Containers
//! are shared handles, so cloning a node that holds an array or an object
//! aliases the same backing storage instead of copying it.

use std::rc::Rc;

use serde_json::{Number, Value};

use crate::array::JsonArray;
use crate::error::Result;
use crate::object::JsonObject;

/// A single JSON value.
///
/// Whole numbers coming out of the parser are always [`Node::Long`] and every
/// other number is a [`Node::Double`]. The narrow kinds [`Node::Int`] and
/// [`Node::Float`] only appear when a value is stored through a narrow setter,
/// and they keep that kind until the tree is written back to text.
///
/// A container stored inside itself forms an `Rc` cycle and its storage is
/// never freed. Encoding such a tree fails with `CyclicStructure` and
/// equality treats the revisited pair as equal, but `Debug` output does not
/// terminate.
#[derive(Debug, Clone)]
pub enum Node {
    Null,
    Bool(bool),
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    String(String),
    Array(JsonArray),
    Object(JsonObject),
}

impl Node {
    /// Lowers a codec value into a fresh tree. Nothing is shared with `value`.
    pub fn from_value(value: Value) -> Node {
        match value {
            Value::Null => Node::Null,
            Value::Bool(b) => Node::Bool(b),
            Value::Number(n) => match n.as_i64() {
                Some(i) => Node::Long(i),
                None => n.as_f64().map_or(Node::Null, Node::Double),
            },
            Value::String(s) => Node::String(s),
            Value::Array(items) => Node::Array(JsonArray::from_nodes(
                items.into_iter().map(Node::from_value).collect(),
            )),
            Value::Object(map) => Node::Object(JsonObject::from_entries(
                map.into_iter().map(|(key, value)| (key, Node::from_value(value))),
            )),
        }
    }

    /// Raises the tree back into a codec value.
    ///
    /// Fails with [`JsonError::CyclicStructure`](crate::JsonError::CyclicStructure)
    /// when a container has been stored inside itself.
    pub fn to_value(&self) -> Result<Value> {
        self.lower(&mut Vec::new())
    }

    pub(crate) fn lower(&self, ancestors: &mut Vec<usize>) -> Result<Value> {
        Ok(match self {
            Node::Null => Value::Null,
            Node::Bool(b) => Value::Bool(*b),
            Node::Int(v) => Value::from(*v),
            Node::Long(v) => Value::from(*v),
            Node::Float(v) => float_value(widen_f32(*v)),
            Node::Double(v) => float_value(*v),
            Node::String(s) => Value::String(s.clone()),
            Node::Array(array) => array.lower(ancestors)?,
            Node::Object(object) => object.lower(ancestors)?,
        })
    }

    /// Short name of the runtime kind, used in mismatch errors.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Node::Null => "null",
            Node::Bool(_) => "bool",
            Node::Int(_) => "int",
            Node::Long(_) => "long",
            Node::Float(_) => "float",
            Node::Double(_) => "double",
            Node::String(_) => "string",
            Node::Array(_) => "array",
            Node::Object(_) => "object",
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Node::Null)
    }

    /// Any numeric kind converted to `f64`; `None` for everything else.
    #[allow(clippy::cast_precision_loss)]
    pub(crate) fn as_f64_lossy(&self) -> Option<f64> {
        match self {
            Node::Int(v) => Some(f64::from(*v)),
            Node::Long(v) => Some(*v as f64),
            Node::Float(v) => Some(widen_f32(*v)),
            Node::Double(v) => Some(*v),
            _ => None,
        }
    }
}

/// Widens through the shortest decimal form so `3.1f32` becomes `3.1`, not
/// `3.0999999046325684`.
fn widen_f32(v: f32) -> f64 {
    v.to_string().parse::<f64>().unwrap_or(f64::from(v))
}

/// Non-finite floats have no JSON spelling and are written as `null`.
fn float_value(v: f64) -> Value {
    Number::from_f64(v).map_or(Value::Null, Value::Number)
}

/// Pushes a container address onto the ancestor chain, refusing re-entry.
pub(crate) fn enter(ancestors: &mut Vec<usize>, addr: usize) -> Result<()> {
    if ancestors.contains(&addr) {
        return Err(crate::JsonError::CyclicStructure);
    }
    ancestors.push(addr);
    Ok(())
}

/// Address of a container's shared storage, used to track revisits.
pub(crate) fn addr<T: ?Sized>(rc: &Rc<T>) -> usize {
    Rc::as_ptr(rc) as *const () as usize
}

/// Structural equality. Numbers compare by kind and value, so `Long(1)` and
/// `Int(1)` are different elements.
impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.eq_within(other, &mut Vec::new())
    }
}

impl Node {
    /// `visiting` holds the container pairs currently being compared; meeting
    /// one again means both sides recurse the same way from here on.
    pub(crate) fn eq_within(&self, other: &Node, visiting: &mut Vec<(usize, usize)>) -> bool {
        match (self, other) {
            (Node::Null, Node::Null) => true,
            (Node::Bool(a), Node::Bool(b)) => a == b,
            (Node::Int(a), Node::Int(b)) => a == b,
            (Node::Long(a), Node::Long(b)) => a == b,
            (Node::Float(a), Node::Float(b)) => a == b,
            (Node::Double(a), Node::Double(b)) => a == b,
            (Node::String(a), Node::String(b)) => a == b,
            (Node::Array(a), Node::Array(b)) => a.eq_within(b, visiting),
            (Node::Object(a), Node::Object(b)) => a.eq_within(b, visiting),
            _ => false,
        }
    }
}

impl From<bool> for Node {
    fn from(v: bool) -> Self {
        Node::Bool(v)
    }
}

impl From<i32> for Node {
    fn from(v: i32) -> Self {
        Node::Int(v)
    }
}

impl From<i64> for Node {
    fn from(v: i64) -> Self {
        Node::Long(v)
    }
}

impl From<f32> for Node {
    fn from(v: f32) -> Self {
        Node::Float(v)
    }
}

impl From<f64> for Node {
    fn from(v: f64) -> Self {
        Node::Double(v)
    }
}

impl From<String> for Node {
    fn from(v: String) -> Self {
        Node::String(v)
    }
}

impl From<&str> for Node {
    fn from(v: &str) -> Self {
        Node::String(v.to_owned())
    }
}

impl From<JsonArray> for Node {
    fn from(v: JsonArray) -> Self {
        Node::Array(v)
    }
}

impl From<JsonObject> for Node {
    fn from(v: JsonObject) -> Self {
        Node::Object(v)
    }
}
