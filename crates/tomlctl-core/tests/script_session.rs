//! End-to-end engine flow: the sequence of operations a shell script would
//! drive through the CLI, minus the file layer.

use tomlctl_core::{delete, infer, lookup, parse, set, Value};

#[test]
fn build_query_and_trim_a_document() {
    let mut tree = Value::table();

    set(&mut tree, &parse("personal.name").unwrap(), infer("alice")).unwrap();
    set(&mut tree, &parse("personal.age").unwrap(), infer("30")).unwrap();
    set(
        &mut tree,
        &parse("personal.skills").unwrap(),
        infer("[bash, rust, toml]"),
    )
    .unwrap();

    assert_eq!(
        lookup(&tree, &parse("personal.skills[1]").unwrap()),
        Some(&Value::String("rust".to_string())),
    );
    assert_eq!(
        lookup(&tree, &parse("personal.age").unwrap()),
        Some(&Value::Integer(30)),
    );

    // Sparse write past the end of the array.
    set(&mut tree, &parse("personal.skills[5]").unwrap(), infer("jq")).unwrap();
    assert_eq!(
        lookup(&tree, &parse("personal.skills[4]").unwrap()),
        Some(&Value::Absent),
    );

    // Trim the first skill; everything shifts left, through the parent slot.
    delete(&mut tree, &parse("personal.skills[0]").unwrap());
    let skills = lookup(&tree, &parse("personal.skills").unwrap())
        .and_then(Value::as_array)
        .unwrap();
    assert_eq!(skills.len(), 5);
    assert_eq!(skills[0], Value::String("rust".to_string()));
    assert_eq!(skills[4], Value::String("jq".to_string()));

    // Deleting what is already gone changes nothing.
    let before = tree.clone();
    delete(&mut tree, &parse("personal.nickname").unwrap());
    assert_eq!(tree, before);
}

#[test]
fn redundant_dots_address_the_same_node() {
    let mut tree = Value::table();
    set(&mut tree, &parse("a.b").unwrap(), infer("1")).unwrap();
    assert_eq!(
        lookup(&tree, &parse("a..b").unwrap()),
        Some(&Value::Integer(1)),
    );
}
