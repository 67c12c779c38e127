use super::*;
use pretty_assertions::assert_eq;

fn ty(basic: BasicType, precision: Precision, qualifier: Qualifier, p: u8, s: u8) -> TType {
    TType::new(basic, precision, qualifier, p, s, MangledName::build(basic, p, s))
}

#[test]
fn shape_predicates() {
    let scalar = ty(BasicType::Float, Precision::Undefined, Qualifier::Global, 1, 1);
    assert!(scalar.is_scalar() && !scalar.is_vector() && !scalar.is_matrix());

    let vector = ty(BasicType::Int, Precision::Undefined, Qualifier::Global, 3, 1);
    assert!(!vector.is_scalar() && vector.is_vector() && !vector.is_matrix());
    assert_eq!(vector.nominal_size(), 3);

    let matrix = ty(BasicType::Float, Precision::High, Qualifier::Global, 2, 4);
    assert!(!matrix.is_scalar() && !matrix.is_vector() && matrix.is_matrix());
    assert_eq!((matrix.cols(), matrix.rows()), (2, 4));
}

#[test]
fn display_renders_glsl_spelling() {
    let cases = [
        (ty(BasicType::Float, Precision::Undefined, Qualifier::Global, 1, 1), "float"),
        (ty(BasicType::Float, Precision::High, Qualifier::Global, 4, 1), "highp vec4"),
        (ty(BasicType::Int, Precision::Undefined, Qualifier::Temporary, 2, 1), "ivec2"),
        (ty(BasicType::Bool, Precision::Undefined, Qualifier::Out, 3, 1), "out bvec3"),
        (ty(BasicType::Float, Precision::Medium, Qualifier::In, 3, 3), "in mediump mat3"),
        (ty(BasicType::Float, Precision::Undefined, Qualifier::Global, 2, 4), "mat2x4"),
        (ty(BasicType::UInt, Precision::Low, Qualifier::Uniform, 1, 1), "uniform lowp uint"),
        (ty(BasicType::Image2D, Precision::Undefined, Qualifier::Global, 1, 1), "image2D"),
    ];
    for (ty, expected) in cases {
        assert_eq!(ty.to_string(), expected);
    }
}

#[test]
fn ptr_eq_is_identity_not_structure() {
    let a = ty(BasicType::Float, Precision::Undefined, Qualifier::Global, 1, 1);
    let b = ty(BasicType::Float, Precision::Undefined, Qualifier::Global, 1, 1);
    assert_eq!(a, b);
    assert!(TType::ptr_eq(&a, &a));
    assert!(!TType::ptr_eq(&a, &b));
}
