use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Content type applied wherever the spec leaves one out.
pub const DEFAULT_CONTENT_TYPE: &str = "application/json";

/// Top-level config file: generation targets plus the API specification.
///
/// At least one target block must be present.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Go server generation target.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub go_server: Option<GoServerTarget>,

    /// Go SDK generation target.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub go_sdk: Option<GoSdkTarget>,

    /// TypeScript SDK generation target.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ts_sdk: Option<TsSdkTarget>,

    /// The API to generate for.
    pub spec: Specification,
}

/// Output settings for generated Go server helpers.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoServerTarget {
    /// Directory the generated server code is written to. Destroyed and
    /// recreated on every run.
    pub output_dir: String,

    /// Go package name for the generated code, usually the last segment of
    /// the output directory path.
    pub package_name: String,
}

/// Output settings for a generated Go SDK.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoSdkTarget {
    /// Directory the generated SDK is written to. Destroyed and recreated
    /// on every run.
    pub output_dir: String,

    /// Go module name for the generated SDK,
    /// e.g. "github.com/username/project/sdk".
    pub module_name: String,
}

/// Output settings for a generated TypeScript SDK.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TsSdkTarget {
    /// Directory the generated SDK is written to. Destroyed and recreated
    /// on every run.
    pub output_dir: String,

    /// npm package name (package.json `name`).
    pub package_name: String,

    /// package.json `description`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// package.json `author`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,

    /// package.json `license`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub license: Option<String>,

    /// package.json `repository.url`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repository: Option<String>,

    /// package.json `homepage`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,

    /// package.json `keywords`.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub keywords: Vec<String>,
}

/// Root of the API specification tree.
///
/// Immutable once validated; each generation run owns exactly one.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Specification {
    pub api_name: String,
    pub version: String,

    #[serde(default)]
    pub description: String,

    /// Website or documentation URL for the API.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,

    /// Contact email for the API.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact: Option<String>,

    /// Freeform license name, e.g. "MIT", "Apache-2.0".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub license: Option<String>,

    /// All authentication methods endpoints may reference, in declared order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub auth: Vec<AuthMethod>,

    /// Endpoint name -> endpoint. The name ("GetUser", "CreatePost") seeds
    /// every generated type name for that endpoint.
    #[serde(default)]
    pub endpoints: BTreeMap<String, Endpoint>,
}

/// HTTP methods the generator supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EndpointMethod {
    #[serde(rename = "GET")]
    Get,
    #[serde(rename = "POST")]
    Post,
    #[serde(rename = "PUT")]
    Put,
    #[serde(rename = "DELETE")]
    Delete,
}

impl fmt::Display for EndpointMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            EndpointMethod::Get => "GET",
            EndpointMethod::Post => "POST",
            EndpointMethod::Put => "PUT",
            EndpointMethod::Delete => "DELETE",
        };
        f.write_str(s)
    }
}

/// A single API endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Endpoint {
    pub method: EndpointMethod,

    /// URL path template, e.g. "/users/{id}".
    pub path: String,

    /// Request content type. Defaulted to `application/json` during
    /// validation if absent or empty.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub path_params: Vec<Param>,

    /// Request headers. Authentication headers are declared via `auth`
    /// instead, not here.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub headers: Vec<Param>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub query_params: Vec<Param>,

    /// Authentication requirements. Absent means the endpoint is public.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth: Option<EndpointAuth>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_body: Option<HttpBody>,

    /// Maximum allowed request body size in bytes. When absent, generated
    /// code applies a 256 KiB default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_body_bytes: Option<u64>,

    /// HTTP status code -> response.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub responses: BTreeMap<u16, Response>,
}

/// Authentication requirements for one endpoint.
///
/// Every id in `all` must be satisfied, plus at least one id in `any`.
/// Both lists reference [`AuthMethod::id`]s from the global registry.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EndpointAuth {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub all: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub any: Vec<String>,
}

/// Transport an authentication method travels over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthMethodType {
    Header,
}

/// A globally declared authentication method.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthMethod {
    /// Unique id endpoints reference from their `all`/`any` lists.
    pub id: String,

    /// Display name.
    pub name: String,

    /// Exact wire name, e.g. the HTTP header name.
    pub transport_name: String,

    #[serde(rename = "type")]
    pub kind: AuthMethodType,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Freeform value format hint, e.g. "Bearer {token}". Documentation
    /// only, never enforced.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
}

/// A response for one HTTP status code.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Response {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub headers: Vec<Param>,

    /// Defaulted to `application/json` during validation if absent or empty.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<HttpBody>,
}

/// Type tag of a [`Field`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    String,
    Number,
    Boolean,
    Object,
    Array,
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            FieldType::String => "string",
            FieldType::Number => "number",
            FieldType::Boolean => "boolean",
            FieldType::Object => "object",
            FieldType::Array => "array",
        };
        f.write_str(s)
    }
}

/// A node in a request/response body tree.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Field {
    #[serde(rename = "type")]
    pub kind: FieldType,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// For `object`: property name -> field. Must be non-empty.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub properties: BTreeMap<String, Field>,

    /// For `array`: the element field. Required.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<Field>>,

    /// Whether the field must be present.
    #[serde(default)]
    pub required: bool,

    /// For `string` and `array`: whether the value must be non-empty.
    /// For an array of strings this also means the elements must be
    /// non-empty strings. Implies `required`.
    #[serde(default)]
    pub non_empty: bool,
}

/// A request or response body: a non-empty set of top-level fields.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HttpBody {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub properties: BTreeMap<String, Field>,
}

/// Scalar type tag of a [`Param`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParamType {
    String,
    Number,
    Boolean,
}

/// A header, query, or path parameter declaration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Param {
    /// Name used for the generated field.
    pub name: String,

    /// Exact wire name as it appears in the HTTP request.
    pub transport_name: String,

    #[serde(rename = "type")]
    pub kind: ParamType,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Whether the parameter must be present. For strings this also means
    /// non-empty.
    #[serde(default)]
    pub required: bool,
}
