//! Declarative API specification model and validator.
//!
//! Loads the YAML config (generation targets + spec), checks the structural
//! invariants of the spec tree, and hands the validated tree to the IR
//! compiler. Validation is fail-fast and path-qualified: the first violation
//! aborts with an error naming the offending endpoint/field.

pub mod error;
pub mod loader;
pub mod model;
pub mod validate;

pub use error::SpecError;
pub use loader::load_config;
pub use model::{
    AuthMethod, AuthMethodType, Config, Endpoint, EndpointAuth, EndpointMethod, Field, FieldType,
    GoSdkTarget, GoServerTarget, HttpBody, Param, ParamType, Response, Specification, TsSdkTarget,
    DEFAULT_CONTENT_TYPE,
};
