//! Struct flattening: nested object/array field trees become a flat list
//! of uniquely named type definitions.
//!
//! Names concatenate the full ancestor path with a capitalize-first export
//! transform, so two distinct paths can never collide (sibling labels are
//! unique map keys). Output is post-order — nested types precede their
//! container — and callers sort the final list by name so the result is
//! independent of traversal details.

use apiforge_spec::{Field, FieldType, HttpBody};

use crate::defs::{FieldDef, TypeDef};
use crate::error::BuildError;
use crate::resolve::{resolve_field_type, TargetResolver};

/// Capitalize the first character, leaving the rest untouched.
pub fn exported(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Flatten an object field into type definitions.
///
/// Only `object`-typed fields produce a [`TypeDef`], named
/// `parent + Exported(label)`. Properties are walked in sorted order;
/// object properties recurse with the new type name as parent, and arrays
/// whose items are objects recurse with the label `{property}Item`.
pub fn flatten(
    resolver: &dyn TargetResolver,
    parent: &str,
    label: &str,
    field: &Field,
) -> Result<Vec<TypeDef>, BuildError> {
    if field.kind != FieldType::Object {
        return Ok(Vec::new());
    }

    let type_name = format!("{parent}{}", exported(label));
    let mut out = Vec::new();
    let mut fields = Vec::new();

    // BTreeMap iteration gives the sorted property order the naming scheme
    // relies on.
    for (prop_name, prop) in &field.properties {
        let context = format!("{type_name}{}", exported(prop_name));

        let (target_type, elem_type, recurse_validate) = match prop.kind {
            FieldType::Array => {
                let items = prop
                    .items
                    .as_deref()
                    .ok_or_else(|| BuildError::MissingArrayItems(prop_name.clone()))?;
                let (elem, recurse) =
                    resolve_field_type(resolver, items, &format!("{context}Item"))?;
                (resolver.array_of(&elem), Some(elem), recurse)
            }
            _ => {
                let (target_type, recurse) = resolve_field_type(resolver, prop, &context)?;
                (target_type, None, recurse)
            }
        };

        fields.push(FieldDef {
            name: exported(prop_name),
            description: prop.description.clone(),
            target_type,
            is_array: prop.kind == FieldType::Array,
            elem_type,
            required: prop.required,
            non_empty: prop.non_empty,
            recurse_validate,
        });

        match prop.kind {
            FieldType::Object => {
                out.extend(flatten(resolver, &type_name, prop_name, prop)?);
            }
            FieldType::Array => {
                if let Some(items) = prop.items.as_deref() {
                    if items.kind == FieldType::Object {
                        out.extend(flatten(
                            resolver,
                            &type_name,
                            &format!("{prop_name}Item"),
                            items,
                        )?);
                    }
                }
            }
            _ => {}
        }
    }

    out.push(TypeDef {
        name: type_name,
        fields,
    });
    Ok(out)
}

/// Flatten a request/response body by treating it as a required object
/// field labeled `label` under `parent`.
pub fn flatten_body(
    resolver: &dyn TargetResolver,
    parent: &str,
    label: &str,
    body: &HttpBody,
) -> Result<Vec<TypeDef>, BuildError> {
    let root = Field {
        kind: FieldType::Object,
        description: body.description.clone(),
        properties: body.properties.clone(),
        items: None,
        required: true,
        non_empty: false,
    };
    flatten(resolver, parent, label, &root)
}
