use super::*;
use pretty_assertions::assert_eq;

#[test]
fn scalar_vector_and_matrix_names() {
    assert_eq!(MangledName::build(BasicType::Float, 1, 1).as_str(), "f1;");
    assert_eq!(MangledName::build(BasicType::Float, 3, 1).as_str(), "vf3;");
    assert_eq!(MangledName::build(BasicType::Float, 4, 4).as_str(), "mf4x4;");
    assert_eq!(MangledName::build(BasicType::Float, 2, 3).as_str(), "mf2x3;");
    assert_eq!(MangledName::build(BasicType::Bool, 2, 1).as_str(), "vb2;");
    assert_eq!(MangledName::build(BasicType::IImage2D, 1, 1).as_str(), "iI21;");
}

#[test]
fn name_is_nul_terminated() {
    let name = MangledName::build(BasicType::UInt, 4, 1);
    assert_eq!(name.as_bytes_with_nul(), b"vu4;\0");
    assert_eq!(name.len(), 4);
    assert!(!name.is_empty());
}

#[test]
fn names_fit_the_buffer_for_every_shape() {
    for basic in BasicType::ALL {
        for primary in 1..=4 {
            for secondary in 1..=4 {
                let name = MangledName::build(basic, primary, secondary);
                let text = name.as_str();
                assert!(!text.is_empty());
                assert!(text.len() <= MANGLED_NAME_MAX_LEN, "{text}");
                assert!(text.ends_with(';'), "{text}");

                let is_matrix = primary > 1 && secondary > 1;
                let is_vector = primary > 1 && secondary == 1;
                assert_eq!(text.starts_with('m'), is_matrix, "{text}");
                assert_eq!(text.starts_with('v'), is_vector, "{text}");
                if !is_matrix && !is_vector {
                    assert!(text.starts_with(basic.mangled_code()), "{text}");
                }
            }
        }
    }
}

#[test]
fn decode_recovers_shape() {
    let parsed = MangledName::build(BasicType::Int, 3, 2).decode();
    assert_eq!(
        parsed,
        Ok(ParsedMangledName {
            basic_type: BasicType::Int,
            shape: ShapeClass::Matrix,
            primary_size: 3,
            secondary_size: 2,
        })
    );

    let parsed: Result<ParsedMangledName, _> = "vb4;".parse();
    assert_eq!(
        parsed,
        Ok(ParsedMangledName {
            basic_type: BasicType::Bool,
            shape: ShapeClass::Vector,
            primary_size: 4,
            secondary_size: 1,
        })
    );
}

#[test]
fn decode_handles_codes_ending_in_digits() {
    let parsed: Result<ParsedMangledName, _> = "is21;".parse();
    assert_eq!(
        parsed,
        Ok(ParsedMangledName {
            basic_type: BasicType::ISampler2D,
            shape: ShapeClass::Scalar,
            primary_size: 1,
            secondary_size: 1,
        })
    );
}

#[test]
fn decode_rejects_malformed_names() {
    let parse = |s: &str| s.parse::<ParsedMangledName>();

    assert_eq!(parse(""), Err(MangledNameError::Empty));
    assert_eq!(
        parse("mgIA4x4;;;"),
        Err(MangledNameError::InvalidSize("mgIA4x4;;;".to_owned()))
    );
    assert_eq!(
        parse("vf3"),
        Err(MangledNameError::MissingTerminator("vf3".to_owned()))
    );
    assert_eq!(
        parse("abcdefghijk;"),
        Err(MangledNameError::TooLong("abcdefghijk;".to_owned()))
    );
    assert_eq!(parse("vf5;"), Err(MangledNameError::InvalidSize("vf5;".to_owned())));
    assert_eq!(parse("vf1;"), Err(MangledNameError::InvalidSize("vf1;".to_owned())));
    assert_eq!(parse("f3;"), Err(MangledNameError::InvalidSize("f3;".to_owned())));
    assert_eq!(parse("mf4;"), Err(MangledNameError::InvalidSize("mf4;".to_owned())));
    assert_eq!(parse(";"), Err(MangledNameError::InvalidSize(";".to_owned())));
    assert_eq!(
        parse("mq2x2;"),
        Err(MangledNameError::UnknownBasicCode {
            name: "mq2x2;".to_owned(),
            code: "q".to_owned(),
        })
    );
}

#[test]
fn error_messages_name_the_input() {
    let err = "vf3".parse::<ParsedMangledName>().unwrap_err();
    assert_eq!(err.to_string(), "mangled name `vf3` is missing its `;` terminator");
    assert_eq!(
        MangledNameError::TooLong("x".to_owned()).to_string(),
        "mangled name `x` is longer than 10 characters"
    );
}
