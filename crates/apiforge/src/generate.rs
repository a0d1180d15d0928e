//! The generation run: load config, validate, build IR per target, and
//! populate each target's output directory.
//!
//! Output directories are cleared only after validation succeeds, so a
//! rejected spec never disturbs previous output.

use std::fs;
use std::io;
use std::path::Path;

use thiserror::Error;
use tracing::info;

use apiforge_ir::{
    build_api, BuildError, EmitError, Emitter, GoResolver, IrDumpEmitter, TargetResolver,
    TsResolver,
};
use apiforge_spec::{load_config, SpecError, Specification};

/// A failed generation run.
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error(transparent)]
    Spec(#[from] SpecError),

    #[error(transparent)]
    Build(#[from] BuildError),

    #[error(transparent)]
    Emit(#[from] EmitError),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Run generation for every target configured in the config file.
///
/// Target output directories are resolved relative to the config file's
/// directory, matching how specs are usually checked in next to their
/// generated trees.
pub fn run(config_path: &Path) -> Result<(), GenerateError> {
    let mut config = load_config(config_path)?;
    config.validate()?;

    let base = config_path.parent().unwrap_or_else(|| Path::new("."));

    if let Some(target) = &config.go_server {
        generate_target(
            &GoResolver,
            &IrDumpEmitter,
            &config.spec,
            &base.join(&target.output_dir),
        )?;
        info!(generator = "goServer", output_dir = %target.output_dir, "target generated");
    }

    if let Some(target) = &config.go_sdk {
        generate_target(
            &GoResolver,
            &IrDumpEmitter,
            &config.spec,
            &base.join(&target.output_dir),
        )?;
        info!(generator = "goSdk", output_dir = %target.output_dir, "target generated");
    }

    if let Some(target) = &config.ts_sdk {
        generate_target(
            &TsResolver,
            &IrDumpEmitter,
            &config.spec,
            &base.join(&target.output_dir),
        )?;
        info!(generator = "tsSdk", output_dir = %target.output_dir, "target generated");
    }

    Ok(())
}

/// Build the IR for one target and emit it into a fresh output directory.
fn generate_target(
    resolver: &dyn TargetResolver,
    emitter: &dyn Emitter,
    spec: &Specification,
    out_dir: &Path,
) -> Result<(), GenerateError> {
    let ir = build_api(resolver, spec)?;
    clear_output_dir(out_dir)?;
    emitter.emit(&ir, out_dir)?;
    Ok(())
}

/// Destroy and recreate an output directory.
///
/// Not safe to run concurrently with itself for the same directory; the
/// driver sequences targets for exactly that reason.
pub fn clear_output_dir(dir: &Path) -> io::Result<()> {
    match fs::remove_dir_all(dir) {
        Ok(()) => {}
        Err(e) if e.kind() == io::ErrorKind::NotFound => {}
        Err(e) => return Err(e),
    }
    fs::create_dir_all(dir)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(dir: &Path, yaml: &str) -> std::path::PathBuf {
        let path = dir.join("apiforge.yaml");
        let mut file = fs::File::create(&path).expect("create config");
        file.write_all(yaml.as_bytes()).expect("write config");
        path
    }

    #[test]
    fn clear_output_dir_removes_stale_files() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let out = tmp.path().join("out");
        fs::create_dir_all(&out).expect("mkdir");
        fs::write(out.join("stale.txt"), b"old").expect("write");

        clear_output_dir(&out).expect("clear");
        assert!(out.exists());
        assert!(!out.join("stale.txt").exists());
    }

    #[test]
    fn clear_output_dir_creates_missing_dir() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let out = tmp.path().join("never/existed");
        clear_output_dir(&out).expect("clear");
        assert!(out.is_dir());
    }

    #[test]
    fn run_generates_every_configured_target() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let config = write_config(
            tmp.path(),
            r#"
goServer:
  outputDir: out/server
  packageName: api
tsSdk:
  outputDir: out/ts-sdk
  packageName: "@test/sdk"
spec:
  apiName: Ping Service
  version: "1.0.0"
  endpoints:
    Ping:
      method: GET
      path: /ping
      responses:
        200:
          body:
            properties:
              ok:
                type: boolean
                required: true
"#,
        );

        run(&config).expect("run");

        let server_ir = tmp.path().join("out/server/ir.json");
        let ts_ir = tmp.path().join("out/ts-sdk/ir.json");
        assert!(server_ir.exists());
        assert!(ts_ir.exists());

        let server: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(server_ir).expect("read")).expect("json");
        assert_eq!(server["target"], "go");
        assert_eq!(
            server["endpoints"]["Ping"]["responses"]["200"]["supportingTypes"][0]["fields"][0]
                ["targetType"],
            "bool"
        );

        let ts: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(ts_ir).expect("read")).expect("json");
        assert_eq!(ts["target"], "typescript");
    }

    #[test]
    fn run_rejects_invalid_spec_before_touching_output() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let out = tmp.path().join("out/server");
        fs::create_dir_all(&out).expect("mkdir");
        fs::write(out.join("previous.json"), b"{}").expect("write");

        let config = write_config(
            tmp.path(),
            r#"
goServer:
  outputDir: out/server
  packageName: api
spec:
  apiName: Broken
  version: "1"
  endpoints:
    Bad:
      method: GET
      path: /bad
      auth:
        all: [missing]
"#,
        );

        let err = run(&config).unwrap_err();
        assert!(err.to_string().contains("unknown auth method: missing"));
        // Previous output untouched.
        assert!(out.join("previous.json").exists());
    }
}
