//! Variable and literal representations

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use static_assertions::const_assert;
use std::{fmt, fmt::Display, mem::size_of, ops};

/// A propositional variable, identified by a positive index.
#[derive(Debug, PartialEq, Eq, Clone, Copy, PartialOrd, Ord, Hash, Default)]
pub struct Variable(pub u32);

impl Variable {
    pub fn new(value: u32) -> Variable {
        Variable(value)
    }
    pub fn as_index(self) -> usize {
        self.0 as usize
    }
}

impl Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A literal, stored in the usual signed DIMACS representation.
///
/// The magnitude is the variable, the sign selects the polarity. Magnitude
/// zero is reserved for the DIMACS clause terminator and never occurs inside
/// a clause.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, PartialOrd, Ord)]
pub struct Literal {
    encoding: i32,
}

impl Literal {
    /// Construct a literal from its signed representation.
    pub fn new(value: i32) -> Literal {
        Literal { encoding: value }
    }
    /// The signed representation.
    pub fn decode(self) -> i32 {
        self.encoding
    }
    /// The variable this literal ranges over.
    pub fn variable(self) -> Variable {
        Variable(self.encoding.abs() as u32)
    }
    /// Whether this is the reserved terminator value.
    pub fn is_zero(self) -> bool {
        self.encoding == 0
    }
}

impl ops::Neg for Literal {
    type Output = Literal;
    fn neg(self) -> Literal {
        Literal {
            encoding: -self.encoding,
        }
    }
}

impl Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.encoding)
    }
}

// Certificates store literals as plain signed integers.
impl Serialize for Literal {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i32(self.encoding)
    }
}

impl<'de> Deserialize<'de> for Literal {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Literal, D::Error> {
        i32::deserialize(deserializer).map(Literal::new)
    }
}

const_assert!(size_of::<Literal>() == 4);
