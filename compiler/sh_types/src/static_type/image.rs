//! Concrete image types for the generic image placeholders.
//!
//! Built-in function signatures are written against `gimage*` types; these
//! resolve a placeholder to its float, int or uint image.

use super::{basic, get_basic, unreachable_lookup};
use crate::{BasicType, TType};

#[track_caller]
pub fn get_for_float_image(basic_type: BasicType) -> &'static TType {
    match basic_type {
        BasicType::GImage2D => get_basic::<basic::Image2D>(),
        BasicType::GImage3D => get_basic::<basic::Image3D>(),
        BasicType::GImage2DArray => get_basic::<basic::Image2DArray>(),
        BasicType::GImageCube => get_basic::<basic::ImageCube>(),
        _ => not_generic_image(basic_type),
    }
}

#[track_caller]
pub fn get_for_int_image(basic_type: BasicType) -> &'static TType {
    match basic_type {
        BasicType::GImage2D => get_basic::<basic::IImage2D>(),
        BasicType::GImage3D => get_basic::<basic::IImage3D>(),
        BasicType::GImage2DArray => get_basic::<basic::IImage2DArray>(),
        BasicType::GImageCube => get_basic::<basic::IImageCube>(),
        _ => not_generic_image(basic_type),
    }
}

#[track_caller]
pub fn get_for_uint_image(basic_type: BasicType) -> &'static TType {
    match basic_type {
        BasicType::GImage2D => get_basic::<basic::UImage2D>(),
        BasicType::GImage3D => get_basic::<basic::UImage3D>(),
        BasicType::GImage2DArray => get_basic::<basic::UImage2DArray>(),
        BasicType::GImageCube => get_basic::<basic::UImageCube>(),
        _ => not_generic_image(basic_type),
    }
}

#[track_caller]
fn not_generic_image(basic_type: BasicType) -> &'static TType {
    unreachable_lookup(format_args!("`{basic_type}` is not a generic image type"))
}
