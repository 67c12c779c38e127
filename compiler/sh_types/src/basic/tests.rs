use super::*;
use pretty_assertions::assert_eq;

#[test]
fn shaped_types_are_exactly_the_numeric_and_bool_types() {
    let shaped: Vec<_> = BasicType::ALL
        .into_iter()
        .filter(|basic| basic.is_shaped())
        .collect();
    assert_eq!(
        shaped,
        vec![
            BasicType::Float,
            BasicType::Int,
            BasicType::UInt,
            BasicType::Bool
        ]
    );
}

#[test]
fn mangled_codes_are_unique() {
    for (i, a) in BasicType::ALL.into_iter().enumerate() {
        for b in BasicType::ALL.into_iter().skip(i + 1) {
            assert_ne!(a.mangled_code(), b.mangled_code(), "{a} and {b}");
        }
    }
}

#[test]
fn mangled_code_inverse() {
    for basic in BasicType::ALL {
        assert_eq!(BasicType::from_mangled_code(basic.mangled_code()), Some(basic));
    }
    assert_eq!(BasicType::from_mangled_code(""), None);
    assert_eq!(BasicType::from_mangled_code("q"), None);
}

#[test]
fn max_code_len_matches_longest_code() {
    let longest = BasicType::ALL
        .into_iter()
        .map(|basic| basic.mangled_code().len())
        .max();
    assert_eq!(longest, Some(MAX_MANGLED_CODE_LEN));
}

#[test]
fn opaque_categories_do_not_overlap() {
    for basic in BasicType::ALL {
        let categories = [
            basic.is_shaped(),
            basic.is_sampler(),
            basic.is_image(),
            basic.is_generic_image(),
        ];
        assert!(
            categories.into_iter().filter(|&c| c).count() <= 1,
            "{basic} is in more than one category"
        );
    }
    assert!(BasicType::Image2D.is_image());
    assert!(BasicType::UImageCube.is_image());
    assert!(!BasicType::GImage2D.is_image());
    assert!(!BasicType::Void.is_shaped());
}

#[test]
fn display_uses_glsl_spelling() {
    assert_eq!(BasicType::UInt.to_string(), "uint");
    assert_eq!(BasicType::IImage2DArray.to_string(), "iimage2DArray");
    assert_eq!(BasicType::AtomicCounter.to_string(), "atomic_uint");
}
