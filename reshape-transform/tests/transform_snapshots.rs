//! Snapshot tests for transformed record rendering.
//!
//! These run a record through a standard rule and snapshot the rendered
//! interface text, covering the rule/engine/renderer path end to end.

use reshape_ir::{Field, RecordType, TypeRef, render_interface};
use reshape_transform::rules::{MakeAllOptional, MakeAllReadonly, RenameWithPrefix};
use reshape_transform::transform;

fn person() -> RecordType {
    RecordType::new(vec![
        Field::new("name", TypeRef::named("string")),
        Field::new("age", TypeRef::named("number")),
        Field::new("location", TypeRef::named("string")),
    ])
}

#[test]
fn test_lazy_person_getters() {
    let lazy = transform(&person(), &RenameWithPrefix::new("get", true)).unwrap();
    let rendered = render_interface("LazyPerson", &lazy);
    insta::assert_snapshot!(rendered.trim_end(), @r#"
    interface LazyPerson {
      getName: () => string;
      getAge: () => number;
      getLocation: () => string;
    }
    "#);
}

#[test]
fn test_partial_person() {
    let partial = transform(&person(), &MakeAllOptional).unwrap();
    let rendered = render_interface("PartialPerson", &partial);
    insta::assert_snapshot!(rendered.trim_end(), @r#"
    interface PartialPerson {
      name?: string;
      age?: number;
      location?: string;
    }
    "#);
}

#[test]
fn test_readonly_person() {
    let frozen = transform(&person(), &MakeAllReadonly).unwrap();
    let rendered = render_interface("ReadonlyPerson", &frozen);
    insta::assert_snapshot!(rendered.trim_end(), @r#"
    interface ReadonlyPerson {
      readonly name: string;
      readonly age: number;
      readonly location: string;
    }
    "#);
}
