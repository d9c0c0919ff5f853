//! Array Interchange
//!
//! A value of order n converts to a nested list of depth n mirroring its pair
//! structure, and from a flat list of `2^n` scalars split recursively at the
//! midpoint.

use crate::algebra::value::{Hypercomplex, Node, MAX_ORDER};
use crate::error::{Error, Result};
use crate::foundation::scalar::Scalar;

/// Nested list of scalars
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NestedArray {
    Scalar(Scalar),
    List(Vec<NestedArray>),
}

impl NestedArray {
    /// Leaves in left-to-right order; every call starts a fresh walk
    pub fn flatten(&self) -> Flatten<'_> {
        Flatten { stack: vec![self] }
    }

    /// Flat copy of the leaves
    pub fn to_flat(&self) -> Vec<Scalar> {
        self.flatten().cloned().collect()
    }
}

/// Depth-first leaf iterator over a [`NestedArray`]
pub struct Flatten<'a> {
    stack: Vec<&'a NestedArray>,
}

impl<'a> Iterator for Flatten<'a> {
    type Item = &'a Scalar;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(item) = self.stack.pop() {
            match item {
                NestedArray::Scalar(s) => return Some(s),
                NestedArray::List(items) => self.stack.extend(items.iter().rev()),
            }
        }
        None
    }
}

/// Leaves of `nested` in left-to-right order
pub fn flatten(nested: &NestedArray) -> Flatten<'_> {
    nested.flatten()
}

impl From<Scalar> for NestedArray {
    fn from(s: Scalar) -> Self {
        NestedArray::Scalar(s)
    }
}

macro_rules! nested_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for NestedArray {
                fn from(n: $t) -> Self {
                    NestedArray::Scalar(Scalar::from(n))
                }
            }
        )*
    };
}

nested_from_int!(i32, i64);

impl<T: Into<NestedArray>> From<Vec<T>> for NestedArray {
    fn from(items: Vec<T>) -> Self {
        NestedArray::List(items.into_iter().map(Into::into).collect())
    }
}

fn node_to_array(node: &Node) -> NestedArray {
    match node {
        Node::Leaf(s) => NestedArray::Scalar(s.clone()),
        Node::Pair(re, im) => NestedArray::List(vec![node_to_array(re), node_to_array(im)]),
    }
}

impl Hypercomplex {
    /// Nested list mirroring the pair structure
    pub fn to_array(&self) -> NestedArray {
        node_to_array(&self.root)
    }

    /// Build from any nesting of scalars; the leaves are flattened first
    pub fn from_array(array: &NestedArray) -> Result<Self> {
        Self::from_flat(&array.to_flat())
    }

    /// Build from a flat run of `2^n` scalars
    ///
    /// A single scalar becomes the order 1 value `(s, 0)`.
    pub fn from_flat(flat: &[Scalar]) -> Result<Self> {
        let len = flat.len();
        if len == 0 || !len.is_power_of_two() || len.trailing_zeros() > MAX_ORDER {
            return Err(Error::ArrayShape(len));
        }
        match flat {
            [s] => Ok(Self::from_scalar(s.clone(), Scalar::zero())),
            _ => Ok(Self::from_node(Node::from_leaves(flat))),
        }
    }
}
