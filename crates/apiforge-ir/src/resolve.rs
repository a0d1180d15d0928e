//! Per-target type resolution.
//!
//! Each generation target supplies a [`TargetResolver`]: a small strategy
//! object mapping the closed scalar set to target type names and wrapping
//! element types in the target's array syntax. Everything structural
//! (context naming, recursion into array items) is shared.

use apiforge_spec::{Field, FieldType, ParamType};

use crate::error::BuildError;

/// The scalar tags shared by fields and params.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scalar {
    String,
    Number,
    Boolean,
}

impl From<ParamType> for Scalar {
    fn from(kind: ParamType) -> Self {
        match kind {
            ParamType::String => Scalar::String,
            ParamType::Number => Scalar::Number,
            ParamType::Boolean => Scalar::Boolean,
        }
    }
}

/// Type-name strategy for one generation target.
pub trait TargetResolver {
    /// Short target identifier used in logs and the IR dump.
    fn target(&self) -> &'static str;

    /// Target type name for a scalar tag.
    fn scalar(&self, scalar: Scalar) -> &'static str;

    /// Wrap an element type in the target's array syntax.
    fn array_of(&self, elem: &str) -> String;
}

/// Go type mapping: `string` / `float64` / `bool`, arrays as `[]T`.
pub struct GoResolver;

impl TargetResolver for GoResolver {
    fn target(&self) -> &'static str {
        "go"
    }

    fn scalar(&self, scalar: Scalar) -> &'static str {
        match scalar {
            Scalar::String => "string",
            Scalar::Number => "float64",
            Scalar::Boolean => "bool",
        }
    }

    fn array_of(&self, elem: &str) -> String {
        format!("[]{elem}")
    }
}

/// TypeScript type mapping: `string` / `number` / `boolean`, arrays as `T[]`.
pub struct TsResolver;

impl TargetResolver for TsResolver {
    fn target(&self) -> &'static str {
        "typescript"
    }

    fn scalar(&self, scalar: Scalar) -> &'static str {
        match scalar {
            Scalar::String => "string",
            Scalar::Number => "number",
            Scalar::Boolean => "boolean",
        }
    }

    fn array_of(&self, elem: &str) -> String {
        format!("{elem}[]")
    }
}

/// Resolve a field's target type plus whether generated validation must
/// recurse into it.
///
/// `context` is the synthesized type name an object at this position gets;
/// arrays recurse on their items with `context + "Item"`.
pub fn resolve_field_type(
    resolver: &dyn TargetResolver,
    field: &Field,
    context: &str,
) -> Result<(String, bool), BuildError> {
    match field.kind {
        FieldType::String => Ok((resolver.scalar(Scalar::String).to_string(), false)),
        FieldType::Number => Ok((resolver.scalar(Scalar::Number).to_string(), false)),
        FieldType::Boolean => Ok((resolver.scalar(Scalar::Boolean).to_string(), false)),
        FieldType::Object => Ok((context.to_string(), true)),
        FieldType::Array => {
            let items = field
                .items
                .as_deref()
                .ok_or_else(|| BuildError::MissingArrayItems(context.to_string()))?;
            let (elem, recurse) = resolve_field_type(resolver, items, &format!("{context}Item"))?;
            Ok((resolver.array_of(&elem), recurse))
        }
    }
}
