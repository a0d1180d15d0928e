//! Structural validation of the spec tree.
//!
//! Depth-first and fail-fast: the first violation is returned, qualified
//! with the path it occurred at. The only mutation performed here is
//! defaulting missing content types in place, which makes re-validating an
//! already-validated spec a no-op.

use crate::error::SpecError;
use crate::model::{
    AuthMethod, Config, Endpoint, EndpointAuth, Field, FieldType, GoSdkTarget, GoServerTarget,
    HttpBody, Param, Response, Specification, TsSdkTarget, DEFAULT_CONTENT_TYPE,
};

impl Config {
    /// Validate the generation targets and the spec. At least one target
    /// block must be present.
    pub fn validate(&mut self) -> Result<(), SpecError> {
        if self.go_server.is_none() && self.go_sdk.is_none() && self.ts_sdk.is_none() {
            return Err(SpecError::NoTargets);
        }
        if let Some(target) = &self.go_server {
            target
                .validate()
                .map_err(|e| e.at("invalid goServer configuration"))?;
        }
        if let Some(target) = &self.go_sdk {
            target
                .validate()
                .map_err(|e| e.at("invalid goSdk configuration"))?;
        }
        if let Some(target) = &self.ts_sdk {
            target
                .validate()
                .map_err(|e| e.at("invalid tsSdk configuration"))?;
        }
        self.spec.validate().map_err(|e| e.at("invalid spec"))
    }
}

impl GoServerTarget {
    fn validate(&self) -> Result<(), SpecError> {
        if self.output_dir.is_empty() {
            return Err(SpecError::MissingOutputDir("goServer"));
        }
        if self.package_name.is_empty() {
            return Err(SpecError::MissingPackageName("goServer"));
        }
        Ok(())
    }
}

impl GoSdkTarget {
    fn validate(&self) -> Result<(), SpecError> {
        if self.output_dir.is_empty() {
            return Err(SpecError::MissingOutputDir("goSdk"));
        }
        if self.module_name.is_empty() {
            return Err(SpecError::MissingModuleName("goSdk"));
        }
        Ok(())
    }
}

impl TsSdkTarget {
    fn validate(&self) -> Result<(), SpecError> {
        if self.output_dir.is_empty() {
            return Err(SpecError::MissingOutputDir("tsSdk"));
        }
        if self.package_name.is_empty() {
            return Err(SpecError::MissingPackageName("tsSdk"));
        }
        Ok(())
    }
}

impl Specification {
    /// Validate every endpoint against the global auth registry, then the
    /// registry itself.
    pub fn validate(&mut self) -> Result<(), SpecError> {
        if self.api_name.is_empty() {
            return Err(SpecError::MissingApiName);
        }
        if self.version.is_empty() {
            return Err(SpecError::MissingVersion);
        }
        let auth = &self.auth;
        for (name, endpoint) in &mut self.endpoints {
            endpoint
                .validate(auth)
                .map_err(|e| e.at(format!("endpoint {name}")))?;
        }
        for (i, method) in self.auth.iter().enumerate() {
            method
                .validate()
                .map_err(|e| e.at(format!("auth method {i}")))?;
        }
        Ok(())
    }
}

impl Endpoint {
    fn validate(&mut self, auth_methods: &[AuthMethod]) -> Result<(), SpecError> {
        if self.path.is_empty() {
            return Err(SpecError::MissingPath);
        }
        if self.content_type.as_deref().is_none_or(str::is_empty) {
            self.content_type = Some(DEFAULT_CONTENT_TYPE.to_string());
        }
        if let Some(body) = &self.request_body {
            body.validate().map_err(|e| e.at("request"))?;
        }
        for (&code, response) in &mut self.responses {
            if !(100..=599).contains(&code) {
                return Err(SpecError::InvalidStatusCode.at(format!("response {code}")));
            }
            response
                .validate()
                .map_err(|e| e.at(format!("response {code}")))?;
        }
        for (i, param) in self.path_params.iter().enumerate() {
            param
                .validate()
                .map_err(|e| e.at(format!("pathParam {i}")))?;
        }
        for (i, param) in self.headers.iter().enumerate() {
            param.validate().map_err(|e| e.at(format!("header {i}")))?;
        }
        for (i, param) in self.query_params.iter().enumerate() {
            param
                .validate()
                .map_err(|e| e.at(format!("queryParam {i}")))?;
        }
        if let Some(auth) = &self.auth {
            auth.validate(auth_methods).map_err(|e| e.at("auth"))?;
        }
        Ok(())
    }
}

impl Response {
    fn validate(&mut self) -> Result<(), SpecError> {
        if self.content_type.as_deref().is_none_or(str::is_empty) {
            self.content_type = Some(DEFAULT_CONTENT_TYPE.to_string());
        }
        if let Some(body) = &self.body {
            body.validate().map_err(|e| e.at("body"))?;
        }
        for (i, header) in self.headers.iter().enumerate() {
            header.validate().map_err(|e| e.at(format!("header {i}")))?;
        }
        Ok(())
    }
}

impl HttpBody {
    fn validate(&self) -> Result<(), SpecError> {
        if self.properties.is_empty() {
            return Err(SpecError::EmptyBody);
        }
        for (name, prop) in &self.properties {
            prop.validate()
                .map_err(|e| e.at(format!("property {name}")))?;
        }
        Ok(())
    }
}

impl Field {
    fn validate(&self) -> Result<(), SpecError> {
        if self.non_empty {
            match self.kind {
                FieldType::String | FieldType::Array => {}
                other => return Err(SpecError::NonEmptyNotApplicable(other)),
            }
            if !self.required {
                return Err(SpecError::NonEmptyWithoutRequired);
            }
        }

        match self.kind {
            FieldType::String | FieldType::Number | FieldType::Boolean => {
                if !self.properties.is_empty() || self.items.is_some() {
                    return Err(SpecError::ScalarWithChildren(self.kind));
                }
            }
            FieldType::Object => {
                if self.properties.is_empty() {
                    return Err(SpecError::ObjectWithoutProperties);
                }
                for (name, prop) in &self.properties {
                    prop.validate()
                        .map_err(|e| e.at(format!("property {name}")))?;
                }
            }
            FieldType::Array => match &self.items {
                Some(items) => items.validate().map_err(|e| e.at("items"))?,
                None => return Err(SpecError::ArrayWithoutItems),
            },
        }
        Ok(())
    }
}

impl Param {
    fn validate(&self) -> Result<(), SpecError> {
        if self.name.is_empty() {
            return Err(SpecError::MissingName);
        }
        if self.transport_name.is_empty() {
            return Err(SpecError::MissingTransportName);
        }
        Ok(())
    }
}

impl AuthMethod {
    fn validate(&self) -> Result<(), SpecError> {
        if self.name.is_empty() {
            return Err(SpecError::MissingName);
        }
        // `kind` is a closed enum; an unsupported transport never survives
        // deserialization.
        Ok(())
    }
}

impl EndpointAuth {
    fn validate(&self, global: &[AuthMethod]) -> Result<(), SpecError> {
        for id in &self.all {
            if !global.iter().any(|m| &m.id == id) {
                return Err(SpecError::UnknownAuthAll(id.clone()));
            }
        }
        for id in &self.any {
            if !global.iter().any(|m| &m.id == id) {
                return Err(SpecError::UnknownAuthAny(id.clone()));
            }
        }
        Ok(())
    }
}
