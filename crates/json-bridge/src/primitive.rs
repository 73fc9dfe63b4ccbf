//! primitive — element kinds accepted by the generic list builders.

use crate::node::Node;

/// A primitive value kind that can be collected out of an array.
///
/// [`from_element`](JsonPrimitive::from_element) keeps elements of exactly
/// this kind, plus the two numeric coercions the parser makes necessary:
/// a wide integer that fits narrows to `i32` and a wide float narrows to
/// `f32`. Any other element yields `None` and is skipped by the caller.
pub trait JsonPrimitive: Copy + Into<Node> {
    fn from_element(node: &Node) -> Option<Self>;
}

impl JsonPrimitive for bool {
    fn from_element(node: &Node) -> Option<Self> {
        match node {
            Node::Bool(v) => Some(*v),
            _ => None,
        }
    }
}

impl JsonPrimitive for i32 {
    fn from_element(node: &Node) -> Option<Self> {
        match node {
            Node::Int(v) => Some(*v),
            Node::Long(v) => i32::try_from(*v).ok(),
            _ => None,
        }
    }
}

impl JsonPrimitive for i64 {
    fn from_element(node: &Node) -> Option<Self> {
        match node {
            Node::Long(v) => Some(*v),
            _ => None,
        }
    }
}

impl JsonPrimitive for f32 {
    #[allow(clippy::cast_possible_truncation)]
    fn from_element(node: &Node) -> Option<Self> {
        match node {
            Node::Float(v) => Some(*v),
            Node::Double(v) => Some(*v as f32),
            _ => None,
        }
    }
}

impl JsonPrimitive for f64 {
    fn from_element(node: &Node) -> Option<Self> {
        match node {
            Node::Double(v) => Some(*v),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn narrow_int_from_long() {
        assert_eq!(i32::from_element(&Node::Long(7)), Some(7));
        assert_eq!(i32::from_element(&Node::Int(-2)), Some(-2));
        assert_eq!(i32::from_element(&Node::Double(7.0)), None);
    }

    #[test]
    fn long_outside_int_range_is_not_an_int() {
        assert_eq!(i32::from_element(&Node::Long(1 << 40)), None);
        assert_eq!(i32::from_element(&Node::Long(i64::from(i32::MIN))), Some(i32::MIN));
    }

    #[test]
    fn narrow_float_from_double() {
        assert_eq!(f32::from_element(&Node::Double(2.5)), Some(2.5));
        // whole numbers parse as long and are not a float-list member
        assert_eq!(f32::from_element(&Node::Long(3)), None);
    }

    #[test]
    fn wide_kinds_match_exactly() {
        assert_eq!(i64::from_element(&Node::Long(9)), Some(9));
        assert_eq!(i64::from_element(&Node::Int(9)), None);
        assert_eq!(f64::from_element(&Node::Float(1.5)), None);
        assert_eq!(bool::from_element(&Node::Long(1)), None);
    }
}
