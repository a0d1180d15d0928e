//! Auth classification: partitions an endpoint's authentication
//! requirements into the set that must all be satisfied (ALL) and the set
//! where at least one suffices (ANY).

use apiforge_spec::{AuthMethod, EndpointAuth};

use crate::defs::AuthMethodDef;

impl From<&AuthMethod> for AuthMethodDef {
    fn from(method: &AuthMethod) -> Self {
        AuthMethodDef {
            id: method.id.clone(),
            name: method.name.clone(),
            transport_name: method.transport_name.clone(),
            kind: method.kind,
            description: method.description.clone(),
            format: method.format.clone(),
        }
    }
}

/// Classify an endpoint's auth references against the global registry.
///
/// Iterates the global list in its declared order, not the order of ids in
/// the endpoint's lists. ALL membership wins: an id claimed by the ALL set
/// is never also classified into ANY, even when listed in both. Generated
/// validation code depends on this exact precedence.
pub fn classify(
    endpoint_auth: Option<&EndpointAuth>,
    global: &[AuthMethod],
) -> (Vec<AuthMethodDef>, Vec<AuthMethodDef>) {
    let mut all = Vec::new();
    let mut any = Vec::new();

    let Some(auth) = endpoint_auth else {
        return (all, any);
    };

    for method in global {
        if auth.all.contains(&method.id) {
            all.push(AuthMethodDef::from(method));
            continue;
        }
        if auth.any.contains(&method.id) {
            any.push(AuthMethodDef::from(method));
        }
    }

    (all, any)
}

#[cfg(test)]
mod tests {
    use super::*;
    use apiforge_spec::AuthMethodType;

    fn method(id: &str) -> AuthMethod {
        AuthMethod {
            id: id.to_string(),
            name: format!("{id} auth"),
            transport_name: format!("X-{id}"),
            kind: AuthMethodType::Header,
            description: None,
            format: None,
        }
    }

    #[test]
    fn no_auth_means_empty_sets() {
        let global = vec![method("session")];
        let (all, any) = classify(None, &global);
        assert!(all.is_empty());
        assert!(any.is_empty());
    }

    #[test]
    fn any_only_classifies_both_into_any() {
        let global = vec![method("session"), method("refresh")];
        let auth = EndpointAuth {
            all: vec![],
            any: vec!["session".into(), "refresh".into()],
        };
        let (all, any) = classify(Some(&auth), &global);
        assert!(all.is_empty());
        let ids: Vec<&str> = any.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, ["session", "refresh"]);
    }

    #[test]
    fn all_membership_suppresses_any_for_same_id() {
        let global = vec![method("apiKey")];
        let auth = EndpointAuth {
            all: vec!["apiKey".into()],
            any: vec!["apiKey".into()],
        };
        let (all, any) = classify(Some(&auth), &global);
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].id, "apiKey");
        assert!(any.is_empty());
    }

    #[test]
    fn output_follows_global_declaration_order() {
        let global = vec![method("b"), method("a"), method("c")];
        let auth = EndpointAuth {
            all: vec!["c".into(), "b".into()],
            any: vec!["a".into()],
        };
        let (all, any) = classify(Some(&auth), &global);
        let all_ids: Vec<&str> = all.iter().map(|m| m.id.as_str()).collect();
        // Global order, not the endpoint's listing order.
        assert_eq!(all_ids, ["b", "c"]);
        assert_eq!(any[0].id, "a");
    }

    #[test]
    fn classified_copy_carries_metadata() {
        let mut m = method("session");
        m.description = Some("session cookie".into());
        m.format = Some("Bearer {token}".into());
        let auth = EndpointAuth {
            all: vec!["session".into()],
            any: vec![],
        };
        let (all, _) = classify(Some(&auth), &[m]);
        assert_eq!(all[0].transport_name, "X-session");
        assert_eq!(all[0].description.as_deref(), Some("session cookie"));
        assert_eq!(all[0].format.as_deref(), Some("Bearer {token}"));
        assert_eq!(all[0].kind, AuthMethodType::Header);
    }
}
