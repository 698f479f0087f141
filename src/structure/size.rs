// Tue Jan 13 2026 - Alex

use serde::Serialize;
use std::fmt;
use std::iter::Sum;
use std::ops::Add;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Size {
    value: usize,
}

impl Size {
    pub fn new(value: usize) -> Self {
        Self { value }
    }

    pub fn zero() -> Self {
        Self { value: 0 }
    }

    pub fn of<T>() -> Self {
        Self::new(std::mem::size_of::<T>())
    }

    pub fn of_val<T: ?Sized>(value: &T) -> Self {
        Self::new(std::mem::size_of_val(value))
    }

    pub fn as_usize(&self) -> usize {
        self.value
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl From<usize> for Size {
    fn from(value: usize) -> Self {
        Self::new(value)
    }
}

impl Add for Size {
    type Output = Size;

    fn add(self, rhs: Size) -> Size {
        Size::new(self.value + rhs.value)
    }
}

impl Sum for Size {
    fn sum<I: Iterator<Item = Size>>(iter: I) -> Size {
        iter.fold(Size::zero(), Add::add)
    }
}
