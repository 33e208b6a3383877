//! Object schemas and composition

use std::borrow::Cow;

use indexmap::IndexMap;

use super::error::SchemaDefinitionError;
use super::field::FieldSchema;

/// An immutable, named set of field schemas.
///
/// Field order is declaration order; the executor checks and reports
/// fields in that order. A schema is `Clone + Send + Sync` and holds no
/// per-call state, so one instance can serve every thread.
///
/// # Examples
///
/// ```
/// use shortlink_validator::prelude::*;
///
/// let base = Schema::builder("create_link")
///     .field("long_url", FieldSchema::string().required().check(url().json()))
///     .build()
///     .unwrap();
///
/// let form = base
///     .extend("link_creation", [("custom_code", FieldSchema::string())])
///     .unwrap();
///
/// assert_eq!(form.field_names().collect::<Vec<_>>(), ["long_url", "custom_code"]);
/// assert_eq!(base.len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct Schema {
    name: Cow<'static, str>,
    fields: IndexMap<String, FieldSchema>,
}

impl Schema {
    #[must_use]
    pub fn builder(name: impl Into<Cow<'static, str>>) -> SchemaBuilder {
        SchemaBuilder {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    /// Builds a schema from `(name, field)` pairs.
    pub fn object<I, K>(
        name: impl Into<Cow<'static, str>>,
        fields: I,
    ) -> Result<Self, SchemaDefinitionError>
    where
        I: IntoIterator<Item = (K, FieldSchema)>,
        K: Into<String>,
    {
        fields
            .into_iter()
            .fold(Self::builder(name), |builder, (key, field)| {
                builder.field(key, field)
            })
            .build()
    }

    /// Returns a new schema with `overrides` merged over this one.
    ///
    /// An override replaces the same-named field entirely and keeps its
    /// position; new fields are appended. `self` is unchanged.
    pub fn extend<I, K>(
        &self,
        name: impl Into<Cow<'static, str>>,
        overrides: I,
    ) -> Result<Schema, SchemaDefinitionError>
    where
        I: IntoIterator<Item = (K, FieldSchema)>,
        K: Into<String>,
    {
        let name = name.into();
        let overrides = collect_fields(&name, overrides.into_iter().map(|(k, f)| (k.into(), f)))?;
        let mut fields = self.fields.clone();
        for (key, field) in overrides {
            fields.insert(key, field);
        }
        Ok(Schema { name, fields })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn field(&self, name: &str) -> Option<&FieldSchema> {
        self.fields.get(name)
    }

    pub fn fields(&self) -> impl Iterator<Item = (&str, &FieldSchema)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Collects fields for a [`Schema`].
#[derive(Debug)]
#[must_use = "builder methods must be chained or built"]
pub struct SchemaBuilder {
    name: Cow<'static, str>,
    fields: Vec<(String, FieldSchema)>,
}

impl SchemaBuilder {
    pub fn field(mut self, name: impl Into<String>, field: FieldSchema) -> Self {
        self.fields.push((name.into(), field));
        self
    }

    /// Checks field names and freezes the schema.
    pub fn build(self) -> Result<Schema, SchemaDefinitionError> {
        let fields = collect_fields(&self.name, self.fields)?;
        Ok(Schema {
            name: self.name,
            fields,
        })
    }
}

fn collect_fields(
    schema: &str,
    fields: impl IntoIterator<Item = (String, FieldSchema)>,
) -> Result<IndexMap<String, FieldSchema>, SchemaDefinitionError> {
    let mut out = IndexMap::new();
    for (key, field) in fields {
        if key.is_empty() {
            return Err(SchemaDefinitionError::EmptyFieldName {
                schema: schema.to_owned(),
            });
        }
        if key.contains('.') {
            return Err(SchemaDefinitionError::DottedFieldName {
                schema: schema.to_owned(),
                field: key,
            });
        }
        if out.contains_key(&key) {
            return Err(SchemaDefinitionError::DuplicateField {
                schema: schema.to_owned(),
                field: key,
            });
        }
        out.insert(key, field);
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::FieldKind;
    use pretty_assertions::assert_eq;

    fn base() -> Schema {
        Schema::builder("base")
            .field("a", FieldSchema::string().required())
            .field("b", FieldSchema::string())
            .build()
            .unwrap()
    }

    #[test]
    fn builder_preserves_order() {
        let schema = base();
        assert_eq!(schema.name(), "base");
        assert_eq!(schema.field_names().collect::<Vec<_>>(), vec!["a", "b"]);
    }

    #[test]
    fn rejects_duplicate_empty_and_dotted_names() {
        let dup = Schema::object(
            "s",
            [("a", FieldSchema::string()), ("a", FieldSchema::number())],
        );
        assert_eq!(
            dup.unwrap_err(),
            SchemaDefinitionError::DuplicateField {
                schema: "s".into(),
                field: "a".into()
            }
        );

        let empty = Schema::builder("s").field("", FieldSchema::any()).build();
        assert!(matches!(empty, Err(SchemaDefinitionError::EmptyFieldName { .. })));

        let dotted = Schema::builder("s").field("meta.title", FieldSchema::any()).build();
        assert!(matches!(dotted, Err(SchemaDefinitionError::DottedFieldName { .. })));
    }

    #[test]
    fn extend_overrides_in_place_and_appends() {
        let base = base();
        let extended = base
            .extend(
                "extended",
                [("c", FieldSchema::number()), ("a", FieldSchema::boolean())],
            )
            .unwrap();

        assert_eq!(extended.field_names().collect::<Vec<_>>(), vec!["a", "b", "c"]);
        assert!(matches!(extended.field("a").unwrap().kind(), FieldKind::Boolean));
        assert!(!extended.field("a").unwrap().is_required());
        // base untouched
        assert!(base.field("a").unwrap().is_required());
        assert_eq!(base.len(), 2);
    }

    #[test]
    fn disjoint_extensions_commute() {
        let base = base();
        let x = ("x", FieldSchema::string());
        let y = ("y", FieldSchema::number());

        let xy = base
            .extend("1", [x.clone()])
            .unwrap()
            .extend("2", [y.clone()])
            .unwrap();
        let yx = base.extend("1", [y]).unwrap().extend("2", [x]).unwrap();

        let mut left: Vec<_> = xy.field_names().collect();
        let mut right: Vec<_> = yx.field_names().collect();
        left.sort_unstable();
        right.sort_unstable();
        assert_eq!(left, right);
    }

    #[test]
    fn overlapping_extensions_last_wins() {
        let base = base();
        let schema = base
            .extend("1", [("b", FieldSchema::number())])
            .unwrap()
            .extend("2", [("b", FieldSchema::boolean())])
            .unwrap();
        assert!(matches!(
            schema.field("b").unwrap().kind(),
            FieldKind::Boolean
        ));
    }

    #[test]
    fn schema_is_send_sync() {
        fn assert_send_sync<T: Send + Sync + Clone>() {}
        assert_send_sync::<Schema>();
    }
}
