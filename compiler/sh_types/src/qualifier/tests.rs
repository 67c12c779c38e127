use super::*;
use pretty_assertions::assert_eq;

#[test]
fn undefined_precision_has_no_keyword() {
    assert_eq!(Precision::Undefined.keyword(), None);
    assert_eq!(Precision::Undefined.as_str(), "");
    assert_eq!(Precision::Undefined.to_string(), "");
    assert_eq!(Precision::Medium.as_str(), "mediump");
    assert_eq!(Precision::High.keyword(), Some("highp"));
}

#[test]
fn implicit_qualifiers_have_no_keyword() {
    let implicit: Vec<_> = Qualifier::ALL
        .into_iter()
        .filter(|q| q.keyword().is_none())
        .collect();
    assert_eq!(implicit, vec![Qualifier::Temporary, Qualifier::Global]);
    assert_eq!(Qualifier::Out.to_string(), "out");
}
