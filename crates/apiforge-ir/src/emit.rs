//! The emitter contract downstream code generators implement, plus the
//! built-in target-neutral IR dump.

use std::path::Path;

use crate::defs::ApiIr;
use crate::error::EmitError;

/// Renders assembled IR into a target's output directory.
///
/// The caller owns the directory lifecycle: it is cleared and recreated
/// before `emit` runs, and never concurrently with itself.
pub trait Emitter {
    /// Short name used in logs ("go-server", "ts-sdk", ...).
    fn name(&self) -> &'static str;

    fn emit(&self, ir: &ApiIr, out_dir: &Path) -> Result<(), EmitError>;
}

/// Writes the assembled IR as pretty-printed JSON to `ir.json`.
///
/// This is the built-in rendering: deterministic (all IR collections are
/// name- or status-ordered), so re-running generation over an unchanged
/// spec produces byte-identical output. It also serves as a golden-file
/// surface for language emitters developed out of tree.
pub struct IrDumpEmitter;

impl Emitter for IrDumpEmitter {
    fn name(&self) -> &'static str {
        "ir-dump"
    }

    fn emit(&self, ir: &ApiIr, out_dir: &Path) -> Result<(), EmitError> {
        let mut json = serde_json::to_vec_pretty(ir)?;
        json.push(b'\n');
        std::fs::write(out_dir.join("ir.json"), json)?;
        tracing::info!(
            emitter = self.name(),
            target_lang = %ir.target,
            out_dir = %out_dir.display(),
            "IR written"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assemble::build_api;
    use crate::resolve::GoResolver;
    use apiforge_spec::Specification;

    fn small_spec() -> Specification {
        let mut spec: Specification = serde_yaml::from_str(
            r#"
apiName: Ping
version: "1"
endpoints:
  Ping:
    method: GET
    path: /ping
    responses:
      200: {}
"#,
        )
        .expect("parse");
        spec.validate().expect("validate");
        spec
    }

    #[test]
    fn dump_writes_ir_json() {
        let ir = build_api(&GoResolver, &small_spec()).expect("build");
        let dir = tempfile::tempdir().expect("tempdir");

        IrDumpEmitter.emit(&ir, dir.path()).expect("emit");

        let content = std::fs::read_to_string(dir.path().join("ir.json")).expect("read");
        let value: serde_json::Value = serde_json::from_str(&content).expect("valid JSON");
        assert_eq!(value["apiName"], "Ping");
        assert_eq!(value["endpoints"]["Ping"]["request"]["name"], "PingRequest");
    }

    #[test]
    fn dump_is_byte_identical_across_runs() {
        let ir = build_api(&GoResolver, &small_spec()).expect("build");
        let dir = tempfile::tempdir().expect("tempdir");

        IrDumpEmitter.emit(&ir, dir.path()).expect("emit");
        let first = std::fs::read(dir.path().join("ir.json")).expect("read");
        IrDumpEmitter.emit(&ir, dir.path()).expect("emit again");
        let second = std::fs::read(dir.path().join("ir.json")).expect("read");
        assert_eq!(first, second);
    }
}
