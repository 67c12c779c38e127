//! Canonical descriptors for built-in scalar, vector and matrix types.
//!
//! This is the only way the rest of the translator obtains a `TType` for a
//! built-in shape. Every descriptor is built at compile time into a single
//! table (see [`instances`]); lookups only compute an index into it, so they
//! never lock, allocate or fail.
//!
//! # Static lookups
//!
//! The whole key is a compile-time parameter:
//!
//! ```text
//! get::<basic::Float, precision::High, qualifier::Global, 3, 1>()   // highp vec3
//! get_basic::<basic::Int>()                                         // int
//! get_qualified_shaped::<basic::Float, qualifier::Out, 4, 4>()      // out mat4
//! ```
//!
//! Sizes outside `1..=4`, or a non-scalar shape for an opaque type, fail to
//! compile.
//!
//! # Dynamic lookups
//!
//! [`get_for_vec_mat`], [`get_for_vec_mat_helper`] and [`get_for_vec`] take
//! sizes (and for `get_for_vec`, the qualifier) at run time and dispatch to
//! the matching static lookup. Values outside their domain are a bug in the
//! caller and go through [`unreachable_lookup`].

mod image;
mod kind;
mod store;

pub use image::{get_for_float_image, get_for_int_image, get_for_uint_image};
pub use kind::{
    basic, precision, qualifier, StaticBasic, StaticPrecision, StaticQualifier, VecMatBasic,
};
pub use store::{instances, LEN};

pub(crate) use store::{instance, slot};

use crate::{Qualifier, TType};

/// Fully static lookup.
#[inline]
pub fn get<B, P, Q, const PRIMARY: u8, const SECONDARY: u8>() -> &'static TType
where
    B: StaticBasic,
    P: StaticPrecision,
    Q: StaticQualifier,
{
    let index = const {
        assert!(matches!(PRIMARY, 1..=4), "primary size out of bounds");
        assert!(matches!(SECONDARY, 1..=4), "secondary size out of bounds");
        assert!(
            B::BASIC_TYPE.is_shaped() || (PRIMARY == 1 && SECONDARY == 1),
            "basic type only exists as a scalar"
        );
        slot(
            B::BASIC_TYPE,
            P::PRECISION,
            Q::QUALIFIER,
            PRIMARY,
            SECONDARY,
        )
    };
    instance(index)
}

/// Scalar with undefined precision and global qualifier.
#[inline]
pub fn get_basic<B: StaticBasic>() -> &'static TType {
    get::<B, precision::Undefined, qualifier::Global, 1, 1>()
}

#[inline]
pub fn get_basic_shaped<B: StaticBasic, const PRIMARY: u8, const SECONDARY: u8>() -> &'static TType
{
    get::<B, precision::Undefined, qualifier::Global, PRIMARY, SECONDARY>()
}

/// Scalar with undefined precision.
#[inline]
pub fn get_qualified<B: StaticBasic, Q: StaticQualifier>() -> &'static TType {
    get::<B, precision::Undefined, Q, 1, 1>()
}

#[inline]
pub fn get_qualified_shaped<B, Q, const PRIMARY: u8, const SECONDARY: u8>() -> &'static TType
where
    B: StaticBasic,
    Q: StaticQualifier,
{
    get::<B, precision::Undefined, Q, PRIMARY, SECONDARY>()
}

/// Lookup with a static secondary size and a run-time primary size.
#[track_caller]
pub fn get_for_vec_mat_helper<B, P, Q, const SECONDARY: u8>(primary_size: u8) -> &'static TType
where
    B: VecMatBasic,
    P: StaticPrecision,
    Q: StaticQualifier,
{
    match primary_size {
        1 => get::<B, P, Q, 1, SECONDARY>(),
        2 => get::<B, P, Q, 2, SECONDARY>(),
        3 => get::<B, P, Q, 3, SECONDARY>(),
        4 => get::<B, P, Q, 4, SECONDARY>(),
        _ => unreachable_lookup(format_args!("primary size {primary_size} is outside 1..=4")),
    }
}

/// Vector or matrix with run-time sizes, undefined precision and global qualifier.
#[track_caller]
pub fn get_for_vec_mat<B: VecMatBasic>(primary_size: u8, secondary_size: u8) -> &'static TType {
    get_for_vec_mat_with::<B, precision::Undefined, qualifier::Global>(primary_size, secondary_size)
}

/// Vector or matrix with run-time sizes.
#[track_caller]
pub fn get_for_vec_mat_with<B, P, Q>(primary_size: u8, secondary_size: u8) -> &'static TType
where
    B: VecMatBasic,
    P: StaticPrecision,
    Q: StaticQualifier,
{
    match secondary_size {
        1 => get_for_vec_mat_helper::<B, P, Q, 1>(primary_size),
        2 => get_for_vec_mat_helper::<B, P, Q, 2>(primary_size),
        3 => get_for_vec_mat_helper::<B, P, Q, 3>(primary_size),
        4 => get_for_vec_mat_helper::<B, P, Q, 4>(primary_size),
        _ => unreachable_lookup(format_args!(
            "secondary size {secondary_size} is outside 1..=4"
        )),
    }
}

/// Vector with a run-time size and qualifier.
///
/// Only [`Qualifier::Global`] and [`Qualifier::Out`] are supported.
#[track_caller]
pub fn get_for_vec<B, P>(qualifier: Qualifier, size: u8) -> &'static TType
where
    B: VecMatBasic,
    P: StaticPrecision,
{
    match qualifier {
        Qualifier::Global => get_for_vec_mat_helper::<B, P, self::qualifier::Global, 1>(size),
        Qualifier::Out => get_for_vec_mat_helper::<B, P, self::qualifier::Out, 1>(size),
        _ => unreachable_lookup(format_args!(
            "qualifier `{qualifier}` has no dynamic vector lookup"
        )),
    }
}

/// Called when a dynamic lookup receives a value outside its domain.
///
/// With the `fatal-unreachable` feature (the default) this panics. Without
/// it, the scalar `void` descriptor is returned so that release builds
/// degrade to a well-defined, if wrong, type.
#[cold]
#[track_caller]
pub fn unreachable_lookup(reason: std::fmt::Arguments<'_>) -> &'static TType {
    let location = std::panic::Location::caller();
    tracing::error!(%location, "unreachable type lookup: {reason}");

    if cfg!(feature = "fatal-unreachable") {
        panic!("unreachable type lookup: {reason}");
    }
    get_basic::<basic::Void>()
}
