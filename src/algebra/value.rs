//! Hypercomplex Values
//!
//! A value of order n is a pair of order n-1 values; an order 1 value pairs two
//! scalars. The tree is strict (no cycles) and immutable, so subtrees are shared
//! through `Arc` and cloning is cheap.
//!
//! ```text
//! order 1:   (s0, s1)                          complex
//! order 2:   ((s0, s1), (s2, s3))              quaternion
//! order 3:   (((s0,s1),(s2,s3)),((s4,s5),(s6,s7)))   octonion
//! ```
//!
//! Equality is structural: values of different order never compare equal, even
//! when both are zero.

use crate::error::{Error, Result};
use crate::foundation::scalar::Scalar;
use rand::Rng;
use std::fmt;
use std::sync::Arc;

/// Largest supported order (dimension 2^30)
pub const MAX_ORDER: u32 = 30;

/// Internal tree node; `Leaf` only ever appears below a `Pair`
#[derive(Clone, PartialEq, Eq, Hash)]
pub(crate) enum Node {
    Leaf(Scalar),
    Pair(Arc<Node>, Arc<Node>),
}

impl Node {
    pub(crate) fn pair(re: Node, im: Node) -> Node {
        Node::Pair(Arc::new(re), Arc::new(im))
    }

    /// Depth to the leftmost leaf
    pub(crate) fn order(&self) -> u32 {
        let mut depth = 0;
        let mut node = self;
        while let Node::Pair(re, _) = node {
            depth += 1;
            node = re;
        }
        depth
    }

    pub(crate) fn first(&self) -> &Scalar {
        match self {
            Node::Leaf(s) => s,
            Node::Pair(re, _) => re.first(),
        }
    }

    /// Zero of the given depth, subtrees shared
    pub(crate) fn zero(order: u32) -> Node {
        let mut node = Node::Leaf(Scalar::zero());
        for _ in 0..order {
            let half = Arc::new(node);
            node = Node::Pair(half.clone(), half);
        }
        node
    }

    pub(crate) fn one(order: u32) -> Node {
        match order {
            0 => Node::Leaf(Scalar::one()),
            _ => Node::pair(Node::one(order - 1), Node::zero(order - 1)),
        }
    }

    /// Build from a power-of-two run of leaves
    pub(crate) fn from_leaves(leaves: &[Scalar]) -> Node {
        if leaves.len() == 1 {
            return Node::Leaf(leaves[0].clone());
        }
        let (lo, hi) = leaves.split_at(leaves.len() / 2);
        Node::pair(Node::from_leaves(lo), Node::from_leaves(hi))
    }

    pub(crate) fn map(&self, f: &impl Fn(&Scalar) -> Scalar) -> Node {
        match self {
            Node::Leaf(s) => Node::Leaf(f(s)),
            Node::Pair(re, im) => Node::pair(re.map(f), im.map(f)),
        }
    }

    pub(crate) fn leaves(&self) -> Leaves<'_> {
        Leaves { stack: vec![self] }
    }
}

/// Left-to-right iterator over the scalar leaves of a value
pub struct Leaves<'a> {
    stack: Vec<&'a Node>,
}

impl<'a> Iterator for Leaves<'a> {
    type Item = &'a Scalar;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(node) = self.stack.pop() {
            match node {
                Node::Leaf(s) => return Some(s),
                Node::Pair(re, im) => {
                    self.stack.push(im);
                    self.stack.push(re);
                }
            }
        }
        None
    }
}

/// Real or imaginary half of a value
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Component {
    /// Half of an order 1 value
    Scalar(Scalar),
    /// Half of a value of order 2 or more
    Value(Hypercomplex),
}

/// Element of the Cayley-Dickson algebra of some order n >= 1
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Hypercomplex {
    pub(crate) root: Node,
}

impl Hypercomplex {
    /// Wrap a node known to be a homogeneous `Pair`
    pub(crate) fn from_node(root: Node) -> Self {
        debug_assert!(matches!(root, Node::Pair(..)));
        Self { root }
    }

    pub(crate) fn check_order(order: u32) -> Result<()> {
        if order == 0 || order > MAX_ORDER {
            return Err(Error::InvalidOrder(order));
        }
        Ok(())
    }

    /// Order 1 value `re + im·i`
    pub fn from_scalar(re: impl Into<Scalar>, im: impl Into<Scalar>) -> Self {
        Self::from_node(Node::pair(Node::Leaf(re.into()), Node::Leaf(im.into())))
    }

    /// Order 1 value with zero imaginary part
    pub fn real(re: impl Into<Scalar>) -> Self {
        Self::from_scalar(re, Scalar::zero())
    }

    /// Order 1 value from floats, converted exactly to rationals
    pub fn try_from_f64(re: f64, im: f64) -> Result<Self> {
        Ok(Self::from_scalar(
            Scalar::try_from_f64(re)?,
            Scalar::try_from_f64(im)?,
        ))
    }

    /// Order k+1 value from two order k values
    pub fn from_pair(real: Hypercomplex, imag: Hypercomplex) -> Result<Self> {
        let (re_order, im_order) = (real.order(), imag.order());
        if re_order != im_order {
            return Err(Error::ComponentOrderMismatch {
                real: re_order,
                imag: im_order,
            });
        }
        Self::check_order(re_order + 1)?;
        Ok(Self::from_node(Node::pair(real.root, imag.root)))
    }

    /// Additive identity of the given order
    pub fn zero(order: u32) -> Result<Self> {
        Self::check_order(order)?;
        Ok(Self::from_node(Node::zero(order)))
    }

    /// Multiplicative identity of the given order
    pub fn one(order: u32) -> Result<Self> {
        Self::check_order(order)?;
        Ok(Self::from_node(Node::one(order)))
    }

    /// Basis element `e_index` (index 0 is the real unit)
    pub fn unit(order: u32, index: usize) -> Result<Self> {
        Self::check_order(order)?;
        let dim = 1usize << order;
        if index >= dim {
            return Err(Error::UnitOutOfRange { index, order });
        }
        let mut leaves = vec![Scalar::zero(); dim];
        leaves[index] = Scalar::one();
        Ok(Self::from_node(Node::from_leaves(&leaves)))
    }

    /// The imaginary unit `i` of order 1
    pub fn eye() -> Self {
        Self::from_scalar(0, 1)
    }

    /// `1 + i`, the Gaussian prime above 2
    pub fn two() -> Self {
        Self::from_scalar(1, 1)
    }

    /// Random integer-valued element with leaves uniform in `[-bound, bound]`
    pub fn random<R: Rng + ?Sized>(order: u32, bound: u32, rng: &mut R) -> Result<Self> {
        Self::check_order(order)?;
        let bound = i64::from(bound);
        let leaves: Vec<Scalar> = (0..1usize << order)
            .map(|_| Scalar::from(rng.gen_range(-bound..=bound)))
            .collect();
        Ok(Self::from_node(Node::from_leaves(&leaves)))
    }

    /// Nesting depth down to the scalar leaves
    pub fn order(&self) -> u32 {
        self.root.order()
    }

    /// Number of scalar leaves, `2^order`
    pub fn dim(&self) -> usize {
        1usize << self.order()
    }

    /// Outermost-left scalar leaf (the real coefficient)
    pub fn first(&self) -> &Scalar {
        self.root.first()
    }

    pub fn real_part(&self) -> Component {
        self.component(true)
    }

    pub fn imag_part(&self) -> Component {
        self.component(false)
    }

    fn component(&self, real: bool) -> Component {
        let node = match &self.root {
            Node::Pair(re, _) if real => re.as_ref(),
            Node::Pair(_, im) => im.as_ref(),
            leaf => leaf,
        };
        match node {
            Node::Leaf(s) => Component::Scalar(s.clone()),
            pair => Component::Value(Self::from_node(pair.clone())),
        }
    }

    pub fn is_complex(&self) -> bool {
        self.order() == 1
    }

    pub fn is_quaternion(&self) -> bool {
        self.order() == 2
    }

    pub fn is_octonion(&self) -> bool {
        self.order() == 3
    }

    /// True when every coefficient is zero
    pub fn is_zero(&self) -> bool {
        self.leaves().all(Scalar::is_zero)
    }

    /// True when every leaf lives in the integer domain
    pub fn is_integer_domain(&self) -> bool {
        self.leaves().all(Scalar::is_integer_domain)
    }

    /// True when every leaf is a whole number
    pub fn is_integral(&self) -> bool {
        self.leaves().all(Scalar::is_integral)
    }

    /// Same value with every leaf moved into the rational domain
    pub fn to_rational(&self) -> Self {
        Self::from_node(self.root.map(&Scalar::to_rational))
    }

    /// Scalar leaves in left-to-right order
    pub fn leaves(&self) -> Leaves<'_> {
        self.root.leaves()
    }

    /// Flat coefficient vector of length `dim`
    pub fn coefficients(&self) -> Vec<Scalar> {
        self.leaves().cloned().collect()
    }
}

impl fmt::Debug for Hypercomplex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Hypercomplex")
            .field("order", &self.order())
            .field("coefficients", &self.coefficients())
            .finish()
    }
}
