//! Type descriptors.
//!
//! A `TType` describes a scalar, vector or matrix (or opaque scalar) type
//! together with its precision and qualifier. Descriptors handed out by the
//! static type registry are canonical: two `&'static TType` from the registry
//! are the same type exactly when they are the same address, see
//! [`TType::ptr_eq`].
//!
//! `TType` is deliberately not `Clone`; it is only ever reached by reference.

use std::fmt;

use crate::{BasicType, MangledName, Precision, Qualifier, ShapeKey};

/// An immutable type descriptor.
#[derive(Debug, Eq, PartialEq, Hash)]
pub struct TType {
    basic_type: BasicType,
    precision: Precision,
    qualifier: Qualifier,
    /// Vector length, or column count of a matrix.
    primary_size: u8,
    /// Row count of a matrix, 1 otherwise.
    secondary_size: u8,
    mangled_name: MangledName,
}

impl TType {
    /// Build a descriptor. The name must be the one built for this shape.
    pub const fn new(
        basic_type: BasicType,
        precision: Precision,
        qualifier: Qualifier,
        primary_size: u8,
        secondary_size: u8,
        mangled_name: MangledName,
    ) -> Self {
        Self {
            basic_type,
            precision,
            qualifier,
            primary_size,
            secondary_size,
            mangled_name,
        }
    }

    #[inline]
    pub const fn basic_type(&self) -> BasicType {
        self.basic_type
    }

    #[inline]
    pub const fn precision(&self) -> Precision {
        self.precision
    }

    #[inline]
    pub const fn qualifier(&self) -> Qualifier {
        self.qualifier
    }

    #[inline]
    pub const fn primary_size(&self) -> u8 {
        self.primary_size
    }

    #[inline]
    pub const fn secondary_size(&self) -> u8 {
        self.secondary_size
    }

    /// Vector length or matrix column count.
    #[inline]
    pub const fn nominal_size(&self) -> u8 {
        self.primary_size
    }

    /// Matrix column count (same as [`TType::primary_size`]).
    #[inline]
    pub const fn cols(&self) -> u8 {
        self.primary_size
    }

    /// Matrix row count (same as [`TType::secondary_size`]).
    #[inline]
    pub const fn rows(&self) -> u8 {
        self.secondary_size
    }

    #[inline]
    pub const fn is_scalar(&self) -> bool {
        self.primary_size == 1 && self.secondary_size == 1
    }

    #[inline]
    pub const fn is_vector(&self) -> bool {
        self.primary_size > 1 && self.secondary_size == 1
    }

    #[inline]
    pub const fn is_matrix(&self) -> bool {
        self.primary_size > 1 && self.secondary_size > 1
    }

    #[inline]
    pub const fn mangled_name(&self) -> &MangledName {
        &self.mangled_name
    }

    /// The key this descriptor is stored under.
    #[inline]
    pub const fn shape_key(&self) -> ShapeKey {
        ShapeKey::of_entry(self)
    }

    /// Identity comparison of two descriptors.
    #[inline]
    pub fn ptr_eq(a: &Self, b: &Self) -> bool {
        std::ptr::eq(a, b)
    }
}

impl fmt::Display for TType {
    /// GLSL spelling, e.g. `highp vec3`, `out mat2x4`, `uint`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(qualifier) = self.qualifier.keyword() {
            write!(f, "{qualifier} ")?;
        }
        if let Some(precision) = self.precision.keyword() {
            write!(f, "{precision} ")?;
        }

        if !self.is_vector() && !self.is_matrix() {
            return f.write_str(self.basic_type.as_str());
        }

        let prefix = match self.basic_type {
            BasicType::Int => "i",
            BasicType::UInt => "u",
            BasicType::Bool => "b",
            _ => "",
        };
        if self.is_vector() {
            write!(f, "{prefix}vec{}", self.primary_size)
        } else if self.primary_size == self.secondary_size {
            write!(f, "{prefix}mat{}", self.primary_size)
        } else {
            write!(f, "{prefix}mat{}x{}", self.primary_size, self.secondary_size)
        }
    }
}

#[cfg(test)]
mod tests;
