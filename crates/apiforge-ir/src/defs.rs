//! IR entities: the fully-resolved, target-annotated output of one
//! compilation pass. Transient by design — rebuilt per endpoint per
//! target, consumed by an emitter, then dropped.

use std::collections::BTreeMap;

use serde::Serialize;

use apiforge_spec::{AuthMethodType, EndpointMethod};

/// A flattened, uniquely named type definition.
///
/// Names are the concatenation of the full ancestor path
/// ("CreateUserRequestBodyUserAddress"), which makes them collision-free
/// within an endpoint's namespace by construction.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeDef {
    pub name: String,
    pub fields: Vec<FieldDef>,
}

/// One field of a [`TypeDef`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldDef {
    /// Exported field name ("User", "IsActive").
    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Resolved target-language type. For arrays this is the full array
    /// type; for objects, the synthesized nested type name.
    pub target_type: String,

    pub is_array: bool,

    /// Resolved element type when `is_array` is set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub elem_type: Option<String>,

    /// Presence check in generated validation.
    pub required: bool,

    /// Non-emptiness check in generated validation (strings and arrays
    /// only; for string arrays it applies to the elements too).
    pub non_empty: bool,

    /// Whether generated validation must recurse into this field's type
    /// (or the element type, for arrays of objects).
    pub recurse_validate: bool,
}

/// A canonical header/query/path parameter descriptor.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParamDef {
    /// Exported name for generated code.
    pub name: String,

    /// Exact wire name, echoed verbatim from the spec.
    pub transport_name: String,

    /// Resolved target-language scalar type.
    pub target_type: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// For strings, required also means non-empty.
    pub required: bool,
}

/// A classified copy of a global auth method, resolved for one endpoint.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthMethodDef {
    pub id: String,
    pub name: String,
    pub transport_name: String,
    #[serde(rename = "type")]
    pub kind: AuthMethodType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
}

/// Everything an emitter needs to render one endpoint's request side.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestIr {
    /// "{Endpoint}Request".
    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    pub content_type: String,
    pub method: EndpointMethod,
    pub path: String,

    /// Absent means the generated code applies its default limit (256 KiB).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_body_bytes: Option<u64>,

    pub header_params: Vec<ParamDef>,
    pub query_params: Vec<ParamDef>,
    pub path_params: Vec<ParamDef>,

    /// Flattened request-body types, sorted by name.
    pub supporting_types: Vec<TypeDef>,

    /// Name of the request-body type within `supporting_types`, if the
    /// endpoint has a JSON request body.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_type: Option<String>,

    /// Auth methods that must all be satisfied.
    pub auth_all: Vec<AuthMethodDef>,

    /// Auth methods of which at least one must be satisfied.
    pub auth_any: Vec<AuthMethodDef>,
}

/// One declared response of an endpoint.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseIr {
    pub status: u16,

    /// "{Endpoint}{Status}Response".
    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    pub content_type: String,
    pub headers: Vec<ParamDef>,

    /// Flattened response-body types, sorted by name.
    pub supporting_types: Vec<TypeDef>,

    /// Name of the response-body type within `supporting_types`, if the
    /// response has a JSON body.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_type: Option<String>,
}

/// The full IR for one endpoint.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EndpointIr {
    pub request: RequestIr,
    pub responses: BTreeMap<u16, ResponseIr>,
}

/// The assembled IR for a whole specification under one target resolver.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiIr {
    pub api_name: String,
    pub version: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
    /// Target identifier of the resolver this IR was built with.
    pub target: String,
    pub endpoints: BTreeMap<String, EndpointIr>,
}
