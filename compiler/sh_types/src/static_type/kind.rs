//! Type-level basic types, precisions and qualifiers.
//!
//! The fully static lookups take their shape key as generic parameters, so
//! each enum value gets an uninhabited marker type carrying it as an
//! associated constant: `get::<basic::Float, precision::High, qualifier::Out, 3, 1>()`.

use crate::{BasicType, Precision, Qualifier};

/// A basic type known at compile time.
pub trait StaticBasic {
    const BASIC_TYPE: BasicType;
}

/// Basic types with vector and matrix forms: float, int, uint and bool.
///
/// The dynamic size lookups are bounded on this trait, so asking for a
/// vector of, say, `sampler2D` fails to compile.
pub trait VecMatBasic: StaticBasic {}

/// A precision known at compile time.
pub trait StaticPrecision {
    const PRECISION: Precision;
}

/// A qualifier known at compile time.
pub trait StaticQualifier {
    const QUALIFIER: Qualifier;
}

macro_rules! markers {
    ($trait:ident :: $assoc:ident = $enum:ident { $($name:ident),* $(,)? }) => {
        $(
            #[doc = concat!("Type-level [`", stringify!($enum), "::", stringify!($name), "`].")]
            #[derive(Copy, Clone, Debug)]
            pub enum $name {}

            impl $trait for $name {
                const $assoc: $enum = $enum::$name;
            }
        )*
    };
}

pub mod basic {
    use super::{StaticBasic, VecMatBasic};
    use crate::BasicType;

    markers!(StaticBasic::BASIC_TYPE = BasicType {
        Float,
        Int,
        UInt,
        Bool,
        Void,
        Sampler2D,
        Sampler3D,
        SamplerCube,
        Sampler2DArray,
        Sampler2DShadow,
        ISampler2D,
        USampler2D,
        Image2D,
        IImage2D,
        UImage2D,
        Image3D,
        IImage3D,
        UImage3D,
        Image2DArray,
        IImage2DArray,
        UImage2DArray,
        ImageCube,
        IImageCube,
        UImageCube,
        GImage2D,
        GImage3D,
        GImage2DArray,
        GImageCube,
        AtomicCounter,
    });

    impl VecMatBasic for Float {}
    impl VecMatBasic for Int {}
    impl VecMatBasic for UInt {}
    impl VecMatBasic for Bool {}
}

pub mod precision {
    use super::StaticPrecision;
    use crate::Precision;

    markers!(StaticPrecision::PRECISION = Precision {
        Undefined,
        Low,
        Medium,
        High,
    });
}

pub mod qualifier {
    use super::StaticQualifier;
    use crate::Qualifier;

    markers!(StaticQualifier::QUALIFIER = Qualifier {
        Temporary,
        Global,
        Const,
        In,
        Out,
        InOut,
        ConstReadOnly,
        Uniform,
    });
}
