//! Validated shape keys for callers that only know a type at run time.

use crate::static_type::{instance, slot};
use crate::{BasicType, Precision, Qualifier, TType};

/// A `(basic type, precision, qualifier, primary size, secondary size)` key
/// that names exactly one canonical descriptor.
///
/// Only constructible through [`ShapeKey::new`], which enforces the shape
/// domain, so [`ShapeKey::lookup`] cannot fail.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct ShapeKey {
    basic_type: BasicType,
    precision: Precision,
    qualifier: Qualifier,
    primary_size: u8,
    secondary_size: u8,
}

/// Error when a shape key is outside the registry's domain.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ShapeError {
    #[error("primary size {0} is outside 1..=4")]
    PrimarySizeOutOfRange(u8),
    #[error("secondary size {0} is outside 1..=4")]
    SecondarySizeOutOfRange(u8),
    #[error("a secondary size of {0} requires a primary size above 1")]
    SecondaryWithoutPrimary(u8),
    #[error("`{basic_type}` has no {primary_size}x{secondary_size} form")]
    ScalarOnly {
        basic_type: BasicType,
        primary_size: u8,
        secondary_size: u8,
    },
}

impl ShapeKey {
    pub fn new(
        basic_type: BasicType,
        precision: Precision,
        qualifier: Qualifier,
        primary_size: u8,
        secondary_size: u8,
    ) -> Result<Self, ShapeError> {
        Self::validate(basic_type, primary_size, secondary_size).inspect_err(|error| {
            tracing::debug!(%basic_type, primary_size, secondary_size, %error, "rejected shape key");
        })?;

        Ok(Self {
            basic_type,
            precision,
            qualifier,
            primary_size,
            secondary_size,
        })
    }

    fn validate(basic_type: BasicType, primary_size: u8, secondary_size: u8) -> Result<(), ShapeError> {
        if !matches!(primary_size, 1..=4) {
            return Err(ShapeError::PrimarySizeOutOfRange(primary_size));
        }
        if !matches!(secondary_size, 1..=4) {
            return Err(ShapeError::SecondarySizeOutOfRange(secondary_size));
        }
        if primary_size == 1 && secondary_size > 1 {
            return Err(ShapeError::SecondaryWithoutPrimary(secondary_size));
        }
        if !basic_type.is_shaped() && (primary_size, secondary_size) != (1, 1) {
            return Err(ShapeError::ScalarOnly {
                basic_type,
                primary_size,
                secondary_size,
            });
        }
        Ok(())
    }

    /// Key of an existing table entry, including the `1xN` entries that
    /// [`ShapeKey::new`] rejects.
    pub(crate) const fn of_entry(ty: &TType) -> Self {
        Self {
            basic_type: ty.basic_type(),
            precision: ty.precision(),
            qualifier: ty.qualifier(),
            primary_size: ty.primary_size(),
            secondary_size: ty.secondary_size(),
        }
    }

    /// Scalar key with undefined precision and global qualifier.
    pub fn scalar(basic_type: BasicType) -> Self {
        Self {
            basic_type,
            precision: Precision::Undefined,
            qualifier: Qualifier::Global,
            primary_size: 1,
            secondary_size: 1,
        }
    }

    #[must_use]
    pub fn with_precision(self, precision: Precision) -> Self {
        Self { precision, ..self }
    }

    #[must_use]
    pub fn with_qualifier(self, qualifier: Qualifier) -> Self {
        Self { qualifier, ..self }
    }

    /// The canonical descriptor for this key.
    ///
    /// Returns the same address as the static lookup for the same key.
    #[inline]
    pub fn lookup(self) -> &'static TType {
        instance(slot(
            self.basic_type,
            self.precision,
            self.qualifier,
            self.primary_size,
            self.secondary_size,
        ))
    }

    #[inline]
    pub fn basic_type(self) -> BasicType {
        self.basic_type
    }

    #[inline]
    pub fn precision(self) -> Precision {
        self.precision
    }

    #[inline]
    pub fn qualifier(self) -> Qualifier {
        self.qualifier
    }

    #[inline]
    pub fn primary_size(self) -> u8 {
        self.primary_size
    }

    #[inline]
    pub fn secondary_size(self) -> u8 {
        self.secondary_size
    }
}
