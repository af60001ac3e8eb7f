//! Binary tests
//!
//! Runs the built `primescan` executable end to end.

use std::process::Command;

fn primescan() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_primescan"));
    cmd.env_remove("RUST_LOG");
    cmd
}

// =============================================================================
// Full Run
// =============================================================================

mod full_run_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_prints_every_prime_below_two_million() {
        let output = primescan().output().unwrap();
        assert!(output.status.success());
        assert!(output.stderr.is_empty());

        let stdout = String::from_utf8(output.stdout).unwrap();
        let primes: Vec<u64> = stdout.lines().map(|l| l.parse().unwrap()).collect();

        // pi(2000000) = 148933, minus the prime 2
        assert_eq!(primes.len(), 148_932);
        assert_eq!(primes.first(), Some(&3));
        assert_eq!(primes.last(), Some(&1_999_993));
        assert!(primes.windows(2).all(|w| w[0] < w[1]));
        assert!(stdout.ends_with('\n'));
    }

    #[test]
    fn test_verbose_summary_goes_to_stderr() {
        let output = primescan().arg("--verbose").output().unwrap();
        assert!(output.status.success());

        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("148932 primes"), "stderr: {stderr}");

        let stdout = String::from_utf8(output.stdout).unwrap();
        assert_eq!(stdout.lines().next(), Some("3"));
    }

    #[test]
    fn test_captured_logs_have_no_color_codes() {
        let output = primescan().arg("-v").output().unwrap();
        assert!(output.status.success());

        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("Scan finished"), "stderr: {stderr}");
        assert!(!stderr.contains('\x1b'), "stderr: {stderr:?}");
    }
}

// =============================================================================
// Arguments
// =============================================================================

mod argument_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_version() {
        let output = primescan().arg("--version").output().unwrap();
        assert!(output.status.success());
        assert_eq!(
            String::from_utf8(output.stdout).unwrap().trim(),
            format!("primescan {}", env!("CARGO_PKG_VERSION"))
        );
    }

    #[test]
    fn test_bound_is_not_configurable() {
        let output = primescan().args(["--bound", "10"]).output().unwrap();
        assert!(!output.status.success());
        assert!(output.stdout.is_empty());
    }
}

// =============================================================================
// Packaging
// =============================================================================

mod packaging_tests {
    use std::path::Path;

    #[test]
    fn test_manifest_includes_exist() {
        let root = Path::new(env!("CARGO_MANIFEST_DIR"));
        let manifest = std::fs::read_to_string(root.join("Cargo.toml")).unwrap();

        let include = manifest
            .split("include = [")
            .nth(1)
            .and_then(|rest| rest.split(']').next())
            .unwrap();

        for entry in include.split(',').map(|e| e.trim().trim_matches('"')) {
            if entry.is_empty() {
                continue;
            }
            // Globs: check the directory they start from
            let literal = entry.split("/**").next().unwrap();
            assert!(root.join(literal).exists(), "missing include: {entry}");
        }
    }
}
