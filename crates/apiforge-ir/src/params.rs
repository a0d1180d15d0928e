//! Parameter binding: header/query/path declarations become canonical
//! [`ParamDef`]s with resolved scalar types and verbatim transport names.

use apiforge_spec::Param;

use crate::defs::ParamDef;
use crate::flatten::exported;
use crate::resolve::TargetResolver;

/// Bind one parameter declaration.
pub fn bind(resolver: &dyn TargetResolver, param: &Param) -> ParamDef {
    ParamDef {
        name: exported(&param.name),
        transport_name: param.transport_name.clone(),
        target_type: resolver.scalar(param.kind.into()).to_string(),
        description: param.description.clone(),
        required: param.required,
    }
}

/// Bind a parameter list, preserving declaration order.
pub fn bind_all(resolver: &dyn TargetResolver, params: &[Param]) -> Vec<ParamDef> {
    params.iter().map(|p| bind(resolver, p)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolve::{GoResolver, TsResolver};
    use apiforge_spec::ParamType;

    fn param(name: &str, transport: &str, kind: ParamType, required: bool) -> Param {
        Param {
            name: name.to_string(),
            transport_name: transport.to_string(),
            kind,
            description: None,
            required,
        }
    }

    #[test]
    fn binds_exported_name_and_verbatim_transport() {
        let p = param("requestId", "X-Request-Id", ParamType::String, true);
        let def = bind(&GoResolver, &p);
        assert_eq!(def.name, "RequestId");
        assert_eq!(def.transport_name, "X-Request-Id");
        assert_eq!(def.target_type, "string");
        assert!(def.required);
    }

    #[test]
    fn scalar_types_follow_the_resolver() {
        let p = param("limit", "limit", ParamType::Number, false);
        assert_eq!(bind(&GoResolver, &p).target_type, "float64");
        assert_eq!(bind(&TsResolver, &p).target_type, "number");
    }

    #[test]
    fn bind_all_preserves_declaration_order() {
        let params = vec![
            param("zed", "zed", ParamType::Boolean, false),
            param("alpha", "alpha", ParamType::String, true),
        ];
        let defs = bind_all(&GoResolver, &params);
        let names: Vec<&str> = defs.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, ["Zed", "Alpha"]);
    }
}
