//! Shared integration-test harness for running the `elmdocs` binary.

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

/// Helpers for spawning `elmdocs` against fixture inputs.
pub struct ElmDocsProcess;

impl ElmDocsProcess {
    /// Returns the path to a fixture file.
    pub fn fixture_path(name: &str) -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("tests/fixtures")
            .join(name)
    }

    /// Runs `elmdocs` with `args` inside `dir` and waits for it to exit.
    #[allow(clippy::missing_panics_doc)]
    pub fn run_in(dir: &Path, args: &[&str]) -> Output {
        Command::new(env!("CARGO_BIN_EXE_elmdocs"))
            .args(args)
            .current_dir(dir)
            .output()
            .expect("failed to spawn elmdocs")
    }

    /// Renders a fixture with `--input` into `dir`, returning the process
    /// output and the path the document is written to.
    pub fn render_fixture(dir: &Path, fixture: &str, extra: &[&str]) -> (Output, PathBuf) {
        let input = Self::fixture_path(fixture);
        let mut args = vec!["--quiet", "-i", input.to_str().expect("non-UTF-8 path")];
        args.extend_from_slice(extra);
        let output = Self::run_in(dir, &args);
        (output, dir.join("DOCS.md"))
    }

    /// Writes an executable shell script standing in for the compiler.
    ///
    /// The script writes `docs_json` to the path given by `--docs=`.
    #[cfg(unix)]
    #[allow(clippy::missing_panics_doc)]
    pub fn fake_compiler(dir: &Path, docs_json: &str, exit_code: i32) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;

        let payload = dir.join("payload.json");
        std::fs::write(&payload, docs_json).expect("write payload");

        let script = dir.join("fake-elm-make");
        let body = format!(
            "#!/bin/sh\n\
             for arg in \"$@\"; do\n\
             \x20 case \"$arg\" in\n\
             \x20   --docs=*) cp \"{}\" \"${{arg#--docs=}}\" ;;\n\
             \x20 esac\n\
             done\n\
             echo 'compiler says hi' >&2\n\
             exit {exit_code}\n",
            payload.display()
        );
        std::fs::write(&script, body).expect("write script");
        let mut perms = std::fs::metadata(&script).expect("stat script").permissions();
        perms.set_mode(0o755);
        std::fs::set_permissions(&script, perms).expect("chmod script");
        script
    }
}
