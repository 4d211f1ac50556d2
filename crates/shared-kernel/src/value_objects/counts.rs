// crates/shared-kernel/src/value_objects/counts.rs
use std::{
    iter::Sum,
    ops::{Add, AddAssign},
};

use serde::{Deserialize, Serialize};

/// 検証済みワードリストの行数
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LineCount(usize);

impl LineCount {
    #[inline]
    pub const fn new(value: usize) -> Self {
        Self(value)
    }

    #[inline]
    pub const fn zero() -> Self {
        Self(0)
    }

    #[inline]
    pub const fn value(self) -> usize {
        self.0
    }
}

impl Default for LineCount {
    fn default() -> Self {
        Self::zero()
    }
}

impl Add for LineCount {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0.saturating_add(rhs.0))
    }
}

impl AddAssign for LineCount {
    fn add_assign(&mut self, rhs: Self) {
        self.0 = self.0.saturating_add(rhs.0);
    }
}

impl Sum for LineCount {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), Add::add)
    }
}

impl From<usize> for LineCount {
    fn from(value: usize) -> Self {
        Self::new(value)
    }
}

impl PartialEq<usize> for LineCount {
    fn eq(&self, other: &usize) -> bool {
        self.0 == *other
    }
}

impl PartialEq<LineCount> for usize {
    fn eq(&self, other: &LineCount) -> bool {
        *self == other.0
    }
}

mod display {
    use std::fmt;

    use super::LineCount;

    impl fmt::Display for LineCount {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            fmt::Display::fmt(&self.value(), f)
        }
    }
}
