//! The struct walker: drives a field-descriptor table into an encoder sink.
//!
//! [`walk`] visits each descriptor field exactly once, in declaration order,
//! applying the tag decisions from [`FieldTag`]: `-` and zero-valued
//! `omitempty` fields are skipped, `squash` flattens a nested struct into
//! the same sink, and `recursive` encodes a nested struct into a fresh sink
//! emitted as a single value.

use crate::{Error, Field, FieldTag, Result, Value};

/// A declarative field-descriptor table for an encodable struct.
///
/// This is the compile-time-checked replacement for runtime field
/// enumeration: each implementation lists its fields, their tag metadata,
/// and their values, in declaration order. Usually generated with
/// `#[derive(Params)]`, but hand-written implementations work the same way.
///
/// # Example
///
/// ```
/// use courier_core::{Field, Params, ToValue};
///
/// struct Search {
///     query: String,
///     page: u32,
/// }
///
/// impl Params for Search {
///     fn fields(&self) -> Vec<Field> {
///         vec![
///             Field::new("q", "query", self.query.to_value()),
///             Field::new(",omitempty", "page", self.page.to_value()),
///         ]
///     }
/// }
/// ```
pub trait Params {
    /// The struct's fields in declaration order.
    fn fields(&self) -> Vec<Field>;
}

/// Receives encoded key/value pairs from [`walk`].
pub trait Sink: Default {
    /// Record a single key/value pair.
    fn emit(&mut self, key: &str, value: &Value);

    /// Record a nested sink produced by a `recursive` field.
    fn emit_nested(&mut self, key: &str, nested: Self);
}

/// Walk a descriptor-backed struct into `sink`.
///
/// # Errors
///
/// Returns [`Error::TypeMismatch`] when a `squash` or `recursive` field
/// holds anything other than a nested struct.
pub fn walk<P, S>(params: &P, sink: &mut S) -> Result<()>
where
    P: Params + ?Sized,
    S: Sink,
{
    walk_fields(&params.fields(), sink)
}

fn walk_fields<S: Sink>(fields: &[Field], sink: &mut S) -> Result<()> {
    for field in fields {
        let tag = FieldTag::parse(field.tag, field.name);
        if tag.is_skipped() {
            continue;
        }

        let flags = tag.flags();
        if flags.omitempty && field.value.is_zero() {
            continue;
        }

        if flags.squash {
            walk_fields(expect_struct(&field.value)?, sink)?;
            continue;
        }

        if flags.recursive {
            let mut fresh = S::default();
            walk_fields(expect_struct(&field.value)?, &mut fresh)?;
            sink.emit_nested(tag.name(), fresh);
            continue;
        }

        sink.emit(tag.name(), &field.value);
    }
    Ok(())
}

fn expect_struct(value: &Value) -> Result<&[Field]> {
    match value {
        Value::Struct(fields) => Ok(fields),
        other => Err(Error::type_mismatch("struct", other.kind())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ToValue;

    #[derive(Default)]
    struct PairSink(Vec<(String, String)>);

    impl Sink for PairSink {
        fn emit(&mut self, key: &str, value: &Value) {
            self.0.push((key.to_string(), value.to_string()));
        }

        fn emit_nested(&mut self, key: &str, nested: Self) {
            let joined = nested
                .0
                .iter()
                .map(|(k, v)| format!("{k}={v}"))
                .collect::<Vec<_>>()
                .join("&");
            self.0.push((key.to_string(), joined));
        }
    }

    struct Credentials {
        user: String,
        pass: String,
    }

    impl Params for Credentials {
        fn fields(&self) -> Vec<Field> {
            vec![
                Field::new("", "user", self.user.to_value()),
                Field::new("", "pass", self.pass.to_value()),
            ]
        }
    }

    impl ToValue for Credentials {
        fn to_value(&self) -> Value {
            Value::Struct(self.fields())
        }
    }

    fn credentials() -> Credentials {
        Credentials {
            user: "alice".to_string(),
            pass: "secret".to_string(),
        }
    }

    #[test]
    fn plain_fields_in_declaration_order() {
        let mut sink = PairSink::default();
        walk(&credentials(), &mut sink).expect("walk");
        assert_eq!(
            sink.0,
            vec![
                ("user".to_string(), "alice".to_string()),
                ("pass".to_string(), "secret".to_string()),
            ]
        );
    }

    #[test]
    fn omitempty_zero_is_skipped() {
        struct Search {
            q: String,
            page: u32,
        }

        impl Params for Search {
            fn fields(&self) -> Vec<Field> {
                vec![
                    Field::new("", "q", self.q.to_value()),
                    Field::new(",omitempty", "page", self.page.to_value()),
                ]
            }
        }

        let mut sink = PairSink::default();
        let search = Search {
            q: "rust".to_string(),
            page: 0,
        };
        walk(&search, &mut sink).expect("walk");
        assert_eq!(sink.0, vec![("q".to_string(), "rust".to_string())]);

        let mut sink = PairSink::default();
        let search = Search {
            q: "rust".to_string(),
            page: 2,
        };
        walk(&search, &mut sink).expect("walk");
        assert_eq!(
            sink.0,
            vec![
                ("q".to_string(), "rust".to_string()),
                ("page".to_string(), "2".to_string()),
            ]
        );
    }

    #[test]
    fn skip_sentinel_excludes_field() {
        struct WithSecret {
            visible: String,
            hidden: String,
        }

        impl Params for WithSecret {
            fn fields(&self) -> Vec<Field> {
                vec![
                    Field::new("", "visible", self.visible.to_value()),
                    Field::new("-", "hidden", self.hidden.to_value()),
                ]
            }
        }

        let mut sink = PairSink::default();
        let input = WithSecret {
            visible: "yes".to_string(),
            hidden: "no".to_string(),
        };
        walk(&input, &mut sink).expect("walk");
        assert_eq!(sink.0, vec![("visible".to_string(), "yes".to_string())]);
    }

    #[test]
    fn squash_flattens_without_prefix() {
        struct Login {
            kind: String,
            auth: Credentials,
        }

        impl Params for Login {
            fn fields(&self) -> Vec<Field> {
                vec![
                    Field::new("", "kind", self.kind.to_value()),
                    Field::new(",squash", "auth", self.auth.to_value()),
                ]
            }
        }

        let mut sink = PairSink::default();
        let login = Login {
            kind: "basic".to_string(),
            auth: credentials(),
        };
        walk(&login, &mut sink).expect("walk");
        assert_eq!(
            sink.0,
            vec![
                ("kind".to_string(), "basic".to_string()),
                ("user".to_string(), "alice".to_string()),
                ("pass".to_string(), "secret".to_string()),
            ]
        );
    }

    #[test]
    fn recursive_emits_nested_sink() {
        struct Login {
            kind: String,
            auth: Credentials,
        }

        impl Params for Login {
            fn fields(&self) -> Vec<Field> {
                vec![
                    Field::new("", "kind", self.kind.to_value()),
                    Field::new(",recursive", "auth", self.auth.to_value()),
                ]
            }
        }

        let mut sink = PairSink::default();
        let login = Login {
            kind: "basic".to_string(),
            auth: credentials(),
        };
        walk(&login, &mut sink).expect("walk");
        assert_eq!(
            sink.0,
            vec![
                ("kind".to_string(), "basic".to_string()),
                ("auth".to_string(), "user=alice&pass=secret".to_string()),
            ]
        );
    }

    #[test]
    fn squash_on_non_struct_is_type_mismatch() {
        struct Broken {
            flat: String,
        }

        impl Params for Broken {
            fn fields(&self) -> Vec<Field> {
                vec![Field::new(",squash", "flat", self.flat.to_value())]
            }
        }

        let mut sink = PairSink::default();
        let err = walk(
            &Broken {
                flat: "x".to_string(),
            },
            &mut sink,
        )
        .expect_err("should fail");
        assert!(matches!(
            err,
            Error::TypeMismatch {
                expected: "struct",
                found: "string"
            }
        ));
    }

    #[test]
    fn recursive_on_null_is_type_mismatch() {
        struct Broken {
            auth: Option<Credentials>,
        }

        impl Params for Broken {
            fn fields(&self) -> Vec<Field> {
                vec![Field::new(",recursive", "auth", self.auth.to_value())]
            }
        }

        let mut sink = PairSink::default();
        let err = walk(&Broken { auth: None }, &mut sink).expect_err("should fail");
        assert!(matches!(
            err,
            Error::TypeMismatch {
                expected: "struct",
                found: "null"
            }
        ));
    }

    #[test]
    fn omitempty_null_nested_is_skipped() {
        struct MaybeAuth {
            auth: Option<Credentials>,
        }

        impl Params for MaybeAuth {
            fn fields(&self) -> Vec<Field> {
                vec![Field::new(",omitempty,recursive", "auth", self.auth.to_value())]
            }
        }

        let mut sink = PairSink::default();
        walk(&MaybeAuth { auth: None }, &mut sink).expect("walk");
        assert!(sink.0.is_empty());
    }
}
