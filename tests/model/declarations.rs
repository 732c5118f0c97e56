//! Integration tests for declaration identities and descriptions

use apidelta_model::{
    Declaration, ElementKind, EnumCase, Function, Initializer, Parameter, Property, TypeDecl,
    TypeKeyword,
};

fn func(name: &str, labels: &[&str]) -> Declaration {
    Declaration::Function(Function::new(
        name,
        labels.iter().map(|l| Parameter::new(*l, "Int")).collect(),
    ))
}

// =============================================================================
// Identity
// =============================================================================

#[test]
fn overloads_have_distinct_signatures() {
    let one = func("f", &["x"]);
    let two = func("f", &["x", "y"]);
    assert_eq!(one.diffable_signature(), "f(x:)");
    assert_eq!(two.diffable_signature(), "f(x:y:)");
    assert_eq!(one.consolidatable_name(), two.consolidatable_name());
}

#[test]
fn unlabeled_parameters_use_underscore() {
    let decl = Declaration::Function(Function::new(
        "apply",
        vec![Parameter::unlabeled("Int"), Parameter::new("to", "String")],
    ));
    assert_eq!(decl.diffable_signature(), "apply(_:to:)");
}

#[test]
fn initializers_consolidate_by_keyword() {
    let a = Declaration::Initializer(Initializer::new(vec![Parameter::new("a", "Int")]));
    let b = Declaration::Initializer(Initializer::new(vec![Parameter::new("b", "Int")]));
    assert_ne!(a.diffable_signature(), b.diffable_signature());
    assert_eq!(a.consolidatable_name(), "init");
    assert_eq!(b.consolidatable_name(), "init");
}

#[test]
fn type_keyword_is_part_of_the_kind() {
    let s = Declaration::Type(TypeDecl::new(TypeKeyword::Struct, "Point"));
    let c = Declaration::Type(TypeDecl::new(TypeKeyword::Class, "Point"));
    assert_eq!(s.kind(), ElementKind::Struct);
    assert_eq!(c.kind(), ElementKind::Class);
    assert!(s.differences(&c).is_empty());
}

// =============================================================================
// Descriptions and differences
// =============================================================================

#[test]
fn function_description() {
    let decl = Declaration::Function(
        Function::new("f", vec![Parameter::new("x", "Int")]).returning("Int"),
    );
    assert_eq!(decl.description(), "func f(x: Int) -> Int");
}

#[test]
fn property_type_change() {
    let old = Declaration::Property(Property::var("count", "Int"));
    let new = Declaration::Property(Property::var("count", "Int64"));
    assert_eq!(
        old.differences(&new),
        vec!["Changed type from `Int` to `Int64`".to_string()]
    );
}

#[test]
fn enum_case_associated_values() {
    let old = Declaration::EnumCase(EnumCase::new("value"));
    let new = Declaration::EnumCase(
        EnumCase::new("value").with_parameters(vec![Parameter::unlabeled("Int")]),
    );
    assert_eq!(old.diffable_signature(), new.diffable_signature());
    assert_eq!(new.description(), "case value(Int)");
    assert_eq!(
        old.differences(&new),
        vec!["Added associated values `(Int)`".to_string()]
    );
}

#[test]
fn differences_across_kinds_are_empty() {
    let prop = Declaration::Property(Property::var("f", "Int"));
    assert!(prop.differences(&func("f", &[])).is_empty());
}
