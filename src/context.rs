//! Layer 2: Algebra Context
//!
//! Policy choices travel with the caller as an immutable value instead of
//! living in shared state. Two callers holding different contexts never
//! observe each other's settings.
//!
//! Temporary overrides are scoped: [`AlgebraContext::override_policy`] returns
//! a guard that puts the previous policy back when it is dropped, whether the
//! scope ends normally, through `?`, or by unwinding.

use crate::algebra::promotion::MulPolicy;
use crate::algebra::value::Hypercomplex;
use crate::codec::format::{format, FormatOptions};
use crate::codec::parse::parse;
use crate::error::Result;
use std::ops::{Deref, DerefMut};

/// Settings for mixed-order arithmetic and printing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct AlgebraContext {
    policy: MulPolicy,
    format: FormatOptions,
}

impl AlgebraContext {
    pub fn new(policy: MulPolicy, format: FormatOptions) -> Self {
        Self { policy, format }
    }

    /// Same context with another multiplication policy
    pub fn with_mul_policy(mut self, policy: MulPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Same context with other printer settings
    pub fn with_format_options(mut self, format: FormatOptions) -> Self {
        self.format = format;
        self
    }

    pub fn policy(&self) -> MulPolicy {
        self.policy
    }

    pub fn format_options(&self) -> FormatOptions {
        self.format
    }

    /// Product of operands of any order under this context's policy
    pub fn mul(&self, x: &Hypercomplex, y: &Hypercomplex) -> Result<Hypercomplex> {
        x.mul_with(y, self.policy)
    }

    /// Sum with zero-padding promotion
    pub fn add(&self, x: &Hypercomplex, y: &Hypercomplex) -> Result<Hypercomplex> {
        x.add_promoted(y)
    }

    /// Difference with zero-padding promotion
    pub fn sub(&self, x: &Hypercomplex, y: &Hypercomplex) -> Result<Hypercomplex> {
        x.sub_promoted(y)
    }

    /// Quotient with zero-padding promotion
    pub fn div(&self, x: &Hypercomplex, y: &Hypercomplex) -> Result<Hypercomplex> {
        let target = x.order().max(y.order());
        x.cast(target)?.div(&y.cast(target)?)
    }

    /// Canonical notation under this context's printer settings
    pub fn format(&self, x: &Hypercomplex) -> String {
        format(x, &self.format)
    }

    /// Parse canonical notation
    pub fn parse(&self, text: &str) -> Result<Hypercomplex> {
        parse(text)
    }

    /// Run `f` with a derived context using `policy`; `self` is untouched
    pub fn with_policy<T>(&self, policy: MulPolicy, f: impl FnOnce(&AlgebraContext) -> T) -> T {
        f(&self.with_mul_policy(policy))
    }

    /// Switch to `policy` until the returned guard is dropped
    pub fn override_policy(&mut self, policy: MulPolicy) -> PolicyOverride<'_> {
        let previous = std::mem::replace(&mut self.policy, policy);
        tracing::trace!(?previous, ?policy, "policy override acquired");
        PolicyOverride {
            context: self,
            previous,
        }
    }
}

/// Scoped policy override; restores the previous policy on drop
pub struct PolicyOverride<'a> {
    context: &'a mut AlgebraContext,
    previous: MulPolicy,
}

impl Deref for PolicyOverride<'_> {
    type Target = AlgebraContext;

    fn deref(&self) -> &AlgebraContext {
        self.context
    }
}

impl DerefMut for PolicyOverride<'_> {
    fn deref_mut(&mut self) -> &mut AlgebraContext {
        self.context
    }
}

impl Drop for PolicyOverride<'_> {
    fn drop(&mut self) {
        tracing::trace!(restored = ?self.previous, "policy override released");
        self.context.policy = self.previous;
    }
}
