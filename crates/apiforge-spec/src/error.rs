use thiserror::Error;

use crate::model::FieldType;

/// A structural or semantic violation in the input spec.
///
/// Recoverable: reported to the caller with a path-qualified message
/// ("endpoint CreateUser: request: property name: ...") and the generation
/// run aborts. Validation stops at the first violation.
#[derive(Debug, Error)]
pub enum SpecError {
    /// Wraps an error with the spec path it occurred at. Contexts nest as
    /// the error propagates up the recursive validation.
    #[error("{0}: {1}")]
    Context(String, Box<SpecError>),

    #[error("at least one of goServer, goSdk, or tsSdk generation must be specified")]
    NoTargets,

    #[error("outputDir is required for {0} generation")]
    MissingOutputDir(&'static str),

    #[error("packageName is required for {0} generation")]
    MissingPackageName(&'static str),

    #[error("moduleName is required for {0} generation")]
    MissingModuleName(&'static str),

    #[error("apiName is required")]
    MissingApiName,

    #[error("version is required")]
    MissingVersion,

    #[error("path is required")]
    MissingPath,

    #[error("invalid HTTP status code")]
    InvalidStatusCode,

    #[error("nonEmpty is only applicable for string and array types, not for type {0}")]
    NonEmptyNotApplicable(FieldType),

    #[error("nonEmpty requires the field to be required")]
    NonEmptyWithoutRequired,

    #[error("properties and items are not applicable for type {0}")]
    ScalarWithChildren(FieldType),

    #[error("properties is required for object type")]
    ObjectWithoutProperties,

    #[error("items is required for array type")]
    ArrayWithoutItems,

    #[error("properties is required for http body")]
    EmptyBody,

    #[error("name is required")]
    MissingName,

    #[error("transportName is required")]
    MissingTransportName,

    #[error("all: unknown auth method: {0}")]
    UnknownAuthAll(String),

    #[error("any: unknown auth method: {0}")]
    UnknownAuthAny(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("parse error: {0}")]
    Parse(#[from] serde_yaml::Error),
}

impl SpecError {
    /// Qualify this error with the spec path segment it occurred under.
    pub fn at(self, context: impl Into<String>) -> Self {
        SpecError::Context(context.into(), Box::new(self))
    }
}
