//! Basic (scalar kind) types of the shading language.
//!
//! # Layout
//!
//! Discriminants are dense and start at zero so that a `BasicType` doubles as
//! an index into the static type table:
//! - 0-3: shaped types (scalar, vector and matrix forms exist)
//! - 4+: everything else (void and the opaque sampler/image types), which only
//!   ever appear as scalars

use std::fmt;

/// The scalar kind of a shader value.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, PartialOrd, Ord)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum BasicType {
    // === Shaped (0-3) ===
    /// 32-bit floating point.
    Float = 0,
    /// 32-bit signed integer.
    Int = 1,
    /// 32-bit unsigned integer.
    UInt = 2,
    /// Boolean.
    Bool = 3,

    // === Scalar only (4+) ===
    /// No value (function return type).
    Void = 4,

    // Samplers
    Sampler2D = 5,
    Sampler3D = 6,
    SamplerCube = 7,
    Sampler2DArray = 8,
    Sampler2DShadow = 9,
    ISampler2D = 10,
    USampler2D = 11,

    // Images
    Image2D = 12,
    IImage2D = 13,
    UImage2D = 14,
    Image3D = 15,
    IImage3D = 16,
    UImage3D = 17,
    Image2DArray = 18,
    IImage2DArray = 19,
    UImage2DArray = 20,
    ImageCube = 21,
    IImageCube = 22,
    UImageCube = 23,

    // Generic images: placeholders in built-in signatures, resolved to the
    // float, int or uint variant.
    GImage2D = 24,
    GImage3D = 25,
    GImage2DArray = 26,
    GImageCube = 27,

    /// `atomic_uint`.
    AtomicCounter = 28,
}

impl BasicType {
    /// Number of basic types.
    pub const COUNT: usize = 29;

    /// Number of basic types with vector and matrix forms.
    pub const SHAPED_COUNT: usize = 4;

    /// Every basic type, in discriminant order.
    pub const ALL: [Self; Self::COUNT] = [
        Self::Float,
        Self::Int,
        Self::UInt,
        Self::Bool,
        Self::Void,
        Self::Sampler2D,
        Self::Sampler3D,
        Self::SamplerCube,
        Self::Sampler2DArray,
        Self::Sampler2DShadow,
        Self::ISampler2D,
        Self::USampler2D,
        Self::Image2D,
        Self::IImage2D,
        Self::UImage2D,
        Self::Image3D,
        Self::IImage3D,
        Self::UImage3D,
        Self::Image2DArray,
        Self::IImage2DArray,
        Self::UImage2DArray,
        Self::ImageCube,
        Self::IImageCube,
        Self::UImageCube,
        Self::GImage2D,
        Self::GImage3D,
        Self::GImage2DArray,
        Self::GImageCube,
        Self::AtomicCounter,
    ];

    /// Dense index of this type (its discriminant).
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Whether vector and matrix forms of this type exist.
    #[inline]
    pub const fn is_shaped(self) -> bool {
        self.index() < Self::SHAPED_COUNT
    }

    /// Sampler types, shadow sampler included.
    #[inline]
    pub const fn is_sampler(self) -> bool {
        matches!(
            self,
            Self::Sampler2D
                | Self::Sampler3D
                | Self::SamplerCube
                | Self::Sampler2DArray
                | Self::Sampler2DShadow
                | Self::ISampler2D
                | Self::USampler2D
        )
    }

    /// Concrete (float, int or uint) image types.
    #[inline]
    pub const fn is_image(self) -> bool {
        let index = self.index();
        index >= Self::Image2D.index() && index <= Self::UImageCube.index()
    }

    /// Component-agnostic image types used in built-in signatures.
    #[inline]
    pub const fn is_generic_image(self) -> bool {
        matches!(
            self,
            Self::GImage2D | Self::GImage3D | Self::GImage2DArray | Self::GImageCube
        )
    }

    /// Short code used inside mangled names.
    ///
    /// Codes are never empty and never start with `m` or `v`, so the shape
    /// prefix of a mangled name stays unambiguous.
    pub const fn mangled_code(self) -> &'static str {
        match self {
            Self::Float => "f",
            Self::Int => "i",
            Self::UInt => "u",
            Self::Bool => "b",
            Self::Void => "z",
            Self::Sampler2D => "s2",
            Self::Sampler3D => "s3",
            Self::SamplerCube => "sC",
            Self::Sampler2DArray => "sA",
            Self::Sampler2DShadow => "sS",
            Self::ISampler2D => "is2",
            Self::USampler2D => "us2",
            Self::Image2D => "I2",
            Self::IImage2D => "iI2",
            Self::UImage2D => "uI2",
            Self::Image3D => "I3",
            Self::IImage3D => "iI3",
            Self::UImage3D => "uI3",
            Self::Image2DArray => "IA",
            Self::IImage2DArray => "iIA",
            Self::UImage2DArray => "uIA",
            Self::ImageCube => "IC",
            Self::IImageCube => "iIC",
            Self::UImageCube => "uIC",
            Self::GImage2D => "gI2",
            Self::GImage3D => "gI3",
            Self::GImage2DArray => "gIA",
            Self::GImageCube => "gIC",
            Self::AtomicCounter => "ac",
        }
    }

    /// Inverse of [`BasicType::mangled_code`].
    pub fn from_mangled_code(code: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|basic| basic.mangled_code() == code)
    }

    /// GLSL spelling of the scalar form.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Float => "float",
            Self::Int => "int",
            Self::UInt => "uint",
            Self::Bool => "bool",
            Self::Void => "void",
            Self::Sampler2D => "sampler2D",
            Self::Sampler3D => "sampler3D",
            Self::SamplerCube => "samplerCube",
            Self::Sampler2DArray => "sampler2DArray",
            Self::Sampler2DShadow => "sampler2DShadow",
            Self::ISampler2D => "isampler2D",
            Self::USampler2D => "usampler2D",
            Self::Image2D => "image2D",
            Self::IImage2D => "iimage2D",
            Self::UImage2D => "uimage2D",
            Self::Image3D => "image3D",
            Self::IImage3D => "iimage3D",
            Self::UImage3D => "uimage3D",
            Self::Image2DArray => "image2DArray",
            Self::IImage2DArray => "iimage2DArray",
            Self::UImage2DArray => "uimage2DArray",
            Self::ImageCube => "imageCube",
            Self::IImageCube => "iimageCube",
            Self::UImageCube => "uimageCube",
            Self::GImage2D => "gimage2D",
            Self::GImage3D => "gimage3D",
            Self::GImage2DArray => "gimage2DArray",
            Self::GImageCube => "gimageCube",
            Self::AtomicCounter => "atomic_uint",
        }
    }
}

impl fmt::Display for BasicType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Length of the longest [`BasicType::mangled_code`].
pub const MAX_MANGLED_CODE_LEN: usize = {
    let mut max = 0;
    let mut i = 0;
    while i < BasicType::COUNT {
        let len = BasicType::ALL[i].mangled_code().len();
        if len > max {
            max = len;
        }
        i += 1;
    }
    max
};

// Every code must be usable inside a mangled name without shadowing the shape prefix.
const _: () = {
    let mut i = 0;
    while i < BasicType::COUNT {
        let code = BasicType::ALL[i].mangled_code().as_bytes();
        assert!(!code.is_empty(), "empty basic type mangled code");
        assert!(
            code[0] != b'm' && code[0] != b'v',
            "basic type mangled code collides with a shape prefix"
        );
        assert!(
            BasicType::ALL[i].index() == i,
            "BasicType::ALL is out of discriminant order"
        );
        i += 1;
    }
};

#[cfg(test)]
mod tests;
