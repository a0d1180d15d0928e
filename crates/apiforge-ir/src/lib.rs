//! Compiles a validated API specification into language-neutral IR.
//!
//! The IR is a flat, deterministically named description of every request
//! and response shape an endpoint needs: flattened type definitions, bound
//! parameters, and classified authentication sets. Per-target type syntax
//! comes from a pluggable [`TargetResolver`]; everything else is
//! target-independent. IR is rebuilt from scratch on every run and handed
//! to emitters through the [`Emitter`] contract.

pub mod assemble;
pub mod auth;
pub mod defs;
pub mod emit;
pub mod error;
pub mod flatten;
pub mod params;
pub mod resolve;

pub use assemble::{build_api, build_request, build_responses};
pub use auth::classify;
pub use defs::{
    ApiIr, AuthMethodDef, EndpointIr, FieldDef, ParamDef, RequestIr, ResponseIr, TypeDef,
};
pub use emit::{Emitter, IrDumpEmitter};
pub use error::{BuildError, EmitError};
pub use flatten::{exported, flatten, flatten_body};
pub use params::{bind, bind_all};
pub use resolve::{resolve_field_type, GoResolver, Scalar, TargetResolver, TsResolver};
