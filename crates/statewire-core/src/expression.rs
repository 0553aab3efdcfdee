//! Guard expressions: boolean trees over sensor readings.

use serde::{Deserialize, Serialize};

use crate::brick::BrickRef;
use crate::signal::Signal;

/// A boolean guard over sensor readings.
///
/// The tree is closed: a leaf [`Condition`](Expression::Condition) tests one
/// sensor against an expected level, and the two binary connectives combine
/// exactly two sub-expressions. There is no negation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "lowercase")]
pub enum Expression {
    /// Leaf: a sensor reads the expected level.
    Condition {
        /// The sensor being read.
        sensor: BrickRef,
        /// The level the sensor must report.
        value: Signal,
    },
    /// Both children must hold.
    And {
        /// Left operand.
        left: Box<Expression>,
        /// Right operand.
        right: Box<Expression>,
    },
    /// Either child must hold.
    Or {
        /// Left operand.
        left: Box<Expression>,
        /// Right operand.
        right: Box<Expression>,
    },
}

impl Expression {
    /// Build a condition leaf.
    pub fn condition(sensor: BrickRef, value: Signal) -> Self {
        Self::Condition { sensor, value }
    }

    /// Combine two expressions with a conjunction.
    pub fn and(left: Expression, right: Expression) -> Self {
        Self::And {
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    /// Combine two expressions with a disjunction.
    pub fn or(left: Expression, right: Expression) -> Self {
        Self::Or {
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    /// Visit every condition leaf in pre-order, left to right.
    ///
    /// This is the single traversal order shared by predicate rendering,
    /// bounce-guard recomputation, and debounce timestamp resets, so the
    /// three always agree on sensor order.
    pub fn each_condition<'a>(&'a self, f: &mut impl FnMut(&'a BrickRef, Signal)) {
        match self {
            Self::Condition { sensor, value } => f(sensor, *value),
            Self::And { left, right } | Self::Or { left, right } => {
                left.each_condition(f);
                right.each_condition(f);
            }
        }
    }

    /// The sensor reference of every leaf, in evaluation order.
    ///
    /// A sensor referenced by several leaves appears once per leaf.
    pub fn sensors(&self) -> Vec<&BrickRef> {
        let mut out = Vec::new();
        self.each_condition(&mut |sensor, _| out.push(sensor));
        out
    }

    /// Number of condition leaves in the tree.
    pub fn leaf_count(&self) -> usize {
        let mut count = 0;
        self.each_condition(&mut |_, _| count += 1);
        count
    }
}
