//! IR assembly: composes flattened types, bound params, and classified
//! auth sets into per-endpoint request/response IR.

use std::collections::BTreeMap;

use apiforge_spec::{Endpoint, Specification, DEFAULT_CONTENT_TYPE};

use crate::auth::classify;
use crate::defs::{ApiIr, EndpointIr, RequestIr, ResponseIr};
use crate::error::BuildError;
use crate::flatten::{exported, flatten_body};
use crate::params::bind_all;
use crate::resolve::TargetResolver;

/// Build the full IR for a validated specification under one resolver.
///
/// Each endpoint's IR is independent of every other endpoint's; the
/// BTreeMap keeps the assembled output in name order either way.
pub fn build_api(resolver: &dyn TargetResolver, spec: &Specification) -> Result<ApiIr, BuildError> {
    let mut endpoints = BTreeMap::new();
    for (name, endpoint) in &spec.endpoints {
        let ir = EndpointIr {
            request: build_request(resolver, name, endpoint, &spec.auth)?,
            responses: build_responses(resolver, name, endpoint)?,
        };
        endpoints.insert(name.clone(), ir);
    }
    tracing::debug!(
        target_lang = resolver.target(),
        endpoints = endpoints.len(),
        "assembled IR"
    );
    Ok(ApiIr {
        api_name: spec.api_name.clone(),
        version: spec.version.clone(),
        description: spec.description.clone(),
        target: resolver.target().to_string(),
        endpoints,
    })
}

/// Build the request IR for one endpoint.
///
/// The request-body type is synthesized only for `application/json`
/// endpoints; other content types pass through without supporting types.
pub fn build_request(
    resolver: &dyn TargetResolver,
    endpoint_name: &str,
    endpoint: &Endpoint,
    global_auth: &[apiforge_spec::AuthMethod],
) -> Result<RequestIr, BuildError> {
    let (auth_all, auth_any) = classify(endpoint.auth.as_ref(), global_auth);

    let content_type = endpoint
        .content_type
        .clone()
        .unwrap_or_else(|| DEFAULT_CONTENT_TYPE.to_string());

    let mut supporting_types = Vec::new();
    let mut body_type = None;
    if let Some(body) = &endpoint.request_body {
        if content_type == DEFAULT_CONTENT_TYPE {
            let parent = exported(endpoint_name);
            body_type = Some(format!("{parent}RequestBody"));
            supporting_types = flatten_body(resolver, &parent, "RequestBody", body)?;
        }
    }
    supporting_types.sort_by(|a, b| a.name.cmp(&b.name));

    Ok(RequestIr {
        name: format!("{}Request", exported(endpoint_name)),
        description: endpoint.description.clone(),
        content_type,
        method: endpoint.method,
        path: endpoint.path.clone(),
        max_body_bytes: endpoint.max_body_bytes,
        header_params: bind_all(resolver, &endpoint.headers),
        query_params: bind_all(resolver, &endpoint.query_params),
        path_params: bind_all(resolver, &endpoint.path_params),
        supporting_types,
        body_type,
        auth_all,
        auth_any,
    })
}

/// Build one response IR per declared status code.
pub fn build_responses(
    resolver: &dyn TargetResolver,
    endpoint_name: &str,
    endpoint: &Endpoint,
) -> Result<BTreeMap<u16, ResponseIr>, BuildError> {
    let mut out = BTreeMap::new();
    for (&status, response) in &endpoint.responses {
        let name = format!("{}{}Response", exported(endpoint_name), status);

        let content_type = response
            .content_type
            .clone()
            .unwrap_or_else(|| DEFAULT_CONTENT_TYPE.to_string());

        let mut supporting_types = Vec::new();
        let mut body_type = None;
        if let Some(body) = &response.body {
            if content_type == DEFAULT_CONTENT_TYPE {
                body_type = Some(format!("{name}Body"));
                supporting_types = flatten_body(resolver, &name, "Body", body)?;
            }
        }
        supporting_types.sort_by(|a, b| a.name.cmp(&b.name));

        out.insert(
            status,
            ResponseIr {
                status,
                name,
                description: response.description.clone(),
                content_type,
                headers: bind_all(resolver, &response.headers),
                supporting_types,
                body_type,
            },
        );
    }
    Ok(out)
}
