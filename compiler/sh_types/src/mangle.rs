//! Fixed-format mangled names for statically known types.
//!
//! A mangled name encodes the shape and basic type of a type, and nothing
//! else: precision and qualifier are deliberately left out so that types
//! differing only in those group under one overload signature.
//!
//! # Format
//!
//! ```text
//! [m|v] <basic code> <primary digit> [x <secondary digit>] ;
//! ```
//!
//! - `m` prefixes matrices, `v` prefixes vectors, scalars have no prefix
//! - the `x<digit>` suffix only appears on matrices
//!
//! So `float` is `f1;`, `vec3` is `vf3;` and `mat4` is `mf4x4;`.

use std::fmt;
use std::str::FromStr;

use crate::basic::MAX_MANGLED_CODE_LEN;
use crate::BasicType;

/// Maximum length of a mangled name, excluding the NUL terminator.
pub const MANGLED_NAME_MAX_LEN: usize = 10;

// Longest encoding: prefix + code + "4x4" + ';'.
const _: () = assert!(
    1 + MAX_MANGLED_CODE_LEN + 3 + 1 <= MANGLED_NAME_MAX_LEN,
    "a basic type mangled code is too long for MANGLED_NAME_MAX_LEN; shorten it"
);

/// A NUL-terminated mangled name in a fixed-size inline buffer.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct MangledName {
    buf: [u8; MANGLED_NAME_MAX_LEN + 1],
    len: u8,
}

impl MangledName {
    /// Build the mangled name of a basic type in the given shape.
    ///
    /// Evaluated at compile time for every entry of the static type table, where
    /// an encoding that does not fit the buffer is a build error.
    ///
    /// # Panics
    ///
    /// Panics if either size is outside `1..=4`.
    pub const fn build(basic_type: BasicType, primary_size: u8, secondary_size: u8) -> Self {
        assert!(
            matches!(primary_size, 1..=4) && matches!(secondary_size, 1..=4),
            "shape size out of bounds"
        );

        let mut buf = [0; MANGLED_NAME_MAX_LEN + 1];
        let mut at = 0;

        let is_matrix = primary_size > 1 && secondary_size > 1;
        let is_vector = primary_size > 1 && secondary_size == 1;

        if is_matrix {
            buf[at] = b'm';
            at += 1;
        } else if is_vector {
            buf[at] = b'v';
            at += 1;
        }

        let code = basic_type.mangled_code().as_bytes();
        let mut i = 0;
        while i < code.len() {
            buf[at] = code[i];
            at += 1;
            i += 1;
        }

        buf[at] = b'0' + primary_size;
        at += 1;
        if is_matrix {
            buf[at] = b'x';
            buf[at + 1] = b'0' + secondary_size;
            at += 2;
        }

        buf[at] = b';';
        at += 1;

        buf[at] = 0;

        #[expect(
            clippy::cast_possible_truncation,
            reason = "at <= MANGLED_NAME_MAX_LEN"
        )]
        let len = at as u8;
        Self { buf, len }
    }

    /// The name without its NUL terminator.
    pub fn as_str(&self) -> &str {
        std::str::from_utf8(self.as_bytes()).unwrap_or_default()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.len()]
    }

    /// The name including its NUL terminator.
    pub fn as_bytes_with_nul(&self) -> &[u8] {
        &self.buf[..=self.len()]
    }

    #[inline]
    pub const fn len(&self) -> usize {
        self.len as usize
    }

    /// Never true for a built name.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Recover the basic type and shape this name was built from.
    pub fn decode(&self) -> Result<ParsedMangledName, MangledNameError> {
        self.as_str().parse()
    }
}

impl fmt::Debug for MangledName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MangledName({:?})", self.as_str())
    }
}

impl fmt::Display for MangledName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Shape class encoded by a mangled name prefix.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ShapeClass {
    Scalar,
    Vector,
    Matrix,
}

/// The components of a mangled name.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct ParsedMangledName {
    pub basic_type: BasicType,
    pub shape: ShapeClass,
    pub primary_size: u8,
    pub secondary_size: u8,
}

/// Error when decoding a mangled name.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum MangledNameError {
    #[error("mangled name is empty")]
    Empty,
    #[error("mangled name `{0}` is longer than {max} characters", max = MANGLED_NAME_MAX_LEN)]
    TooLong(String),
    #[error("mangled name `{0}` is missing its `;` terminator")]
    MissingTerminator(String),
    #[error("mangled name `{0}` has a malformed size suffix")]
    InvalidSize(String),
    #[error("mangled name `{name}` has unknown basic type code `{code}`")]
    UnknownBasicCode { name: String, code: String },
}

impl FromStr for ParsedMangledName {
    type Err = MangledNameError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        if name.is_empty() {
            return Err(MangledNameError::Empty);
        }
        if name.len() > MANGLED_NAME_MAX_LEN {
            return Err(MangledNameError::TooLong(name.to_owned()));
        }

        let body = name
            .strip_suffix(';')
            .ok_or_else(|| MangledNameError::MissingTerminator(name.to_owned()))?;
        let invalid_size = || MangledNameError::InvalidSize(name.to_owned());

        let (shape, rest) = if let Some(rest) = body.strip_prefix('m') {
            (ShapeClass::Matrix, rest)
        } else if let Some(rest) = body.strip_prefix('v') {
            (ShapeClass::Vector, rest)
        } else {
            (ShapeClass::Scalar, body)
        };

        // Sizes are read from the end; basic codes may themselves end in digits.
        let suffix_len = if shape == ShapeClass::Matrix { 3 } else { 1 };
        let split = rest.len().checked_sub(suffix_len).ok_or_else(invalid_size)?;
        let (code, suffix) = (
            rest.get(..split).ok_or_else(invalid_size)?,
            rest.get(split..).ok_or_else(invalid_size)?.as_bytes(),
        );

        let (primary_size, secondary_size) = match (shape, suffix) {
            (ShapeClass::Matrix, &[primary, b'x', secondary]) => {
                (size_digit(primary), size_digit(secondary))
            }
            (ShapeClass::Vector | ShapeClass::Scalar, &[primary]) => (size_digit(primary), Some(1)),
            _ => (None, None),
        };
        let (primary_size, secondary_size) = primary_size
            .zip(secondary_size)
            .ok_or_else(invalid_size)?;

        let canonical = match shape {
            ShapeClass::Scalar => primary_size == 1,
            ShapeClass::Vector => primary_size > 1,
            ShapeClass::Matrix => primary_size > 1 && secondary_size > 1,
        };
        if !canonical {
            return Err(invalid_size());
        }

        let basic_type = BasicType::from_mangled_code(code).ok_or_else(|| {
            MangledNameError::UnknownBasicCode {
                name: name.to_owned(),
                code: code.to_owned(),
            }
        })?;

        Ok(Self {
            basic_type,
            shape,
            primary_size,
            secondary_size,
        })
    }
}

fn size_digit(byte: u8) -> Option<u8> {
    matches!(byte, b'1'..=b'4').then(|| byte - b'0')
}

#[cfg(test)]
mod tests;
