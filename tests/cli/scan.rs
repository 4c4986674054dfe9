use anyhow::Result;
use insta::assert_snapshot;

use crate::{CliTest, run};

const UNLOCALIZED: &str = r#"
final class LoginViewController: UIViewController {
    let titleText = "Welcome back"
}
"#;

const LOCALIZED: &str = r#"
final class ProfileViewController: UIViewController {
    let titleText = NSLocalizedString("profile.title", comment: "")
}
"#;

#[test]
fn test_flags_unlocalized_file() -> Result<()> {
    let test = CliTest::with_file("Sources/Login.swift", UNLOCALIZED)?;
    test.write_file("Sources/Profile.swift", LOCALIZED)?;

    let output = run(test.scan_command())?;

    assert_eq!(output.code, Some(0));
    assert_eq!(
        output.stdout,
        "Scanning .\n✘ Found 1 unlocalized file in .\nScanned 2 files\n✓ Results saved to output.txt\n"
    );
    assert_snapshot!(test.read_file("output.txt")?, @"./Sources/Login.swift");

    Ok(())
}

#[test]
fn test_clean_project() -> Result<()> {
    let test = CliTest::with_file("Sources/Profile.swift", LOCALIZED)?;

    let output = run(test.scan_command())?;

    assert_eq!(output.code, Some(0));
    assert!(output.stdout.contains("✓ No unlocalized files found in ."));
    assert_eq!(test.read_file("output.txt")?, "");

    Ok(())
}

#[test]
fn test_flagged_files_in_traversal_order() -> Result<()> {
    let test = CliTest::with_file("Sources/b/Second.swift", UNLOCALIZED)?;
    test.write_file("Sources/a/First.m", r#"label.text = @"Hello";"#)?;
    test.write_file("Sources/c/Third.swift", "return \"Bye\"")?;

    run(test.scan_command())?;

    assert_eq!(
        test.read_file("output.txt")?,
        "./Sources/a/First.m\n./Sources/b/Second.swift\n./Sources/c/Third.swift"
    );

    Ok(())
}

#[test]
fn test_suppressed_region_is_clean() -> Result<()> {
    let test = CliTest::with_file(
        "Sources/Debug.swift",
        r#"
// locscanner:disable
let debugTitle = "Debug menu"
// locscanner:enable
let count = 3
"#,
    )?;

    let output = run(test.scan_command())?;

    assert!(output.stdout.contains("No unlocalized files found"));

    Ok(())
}

#[test]
fn test_literal_after_region_is_flagged() -> Result<()> {
    let test = CliTest::with_file(
        "Sources/Debug.swift",
        r#"
// locscanner:disable
let debugTitle = "Debug menu"
// locscanner:enable
let title = "Release menu"
"#,
    )?;

    let output = run(test.scan_command())?;

    assert!(output.stdout.contains("Found 1 unlocalized file"));

    Ok(())
}

#[test]
fn test_ignore_marker_exempts_file() -> Result<()> {
    let test = CliTest::with_file(
        "Sources/Fixtures.swift",
        "// locscanner:ignore\nlet a = \"One\"\nlet b = \"Two\"\n",
    )?;

    let output = run(test.scan_command())?;

    assert!(output.stdout.contains("No unlocalized files found"));

    Ok(())
}

#[test]
fn test_default_excluded_directories() -> Result<()> {
    let test = CliTest::with_file("Pods/Library/Strings.swift", UNLOCALIZED)?;
    test.write_file("AppTests/LoginTests.swift", UNLOCALIZED)?;
    test.write_file("Sources/Profile.swift", LOCALIZED)?;

    let output = run(test.scan_command())?;

    assert!(output.stdout.contains("Scanned 1 file\n"));
    assert!(output.stdout.contains("No unlocalized files found"));

    Ok(())
}

#[test]
fn test_cli_overrides_extensions_and_exclusions() -> Result<()> {
    let test = CliTest::with_file("Pods/Library/Strings.swift", UNLOCALIZED)?;
    test.write_file("Sources/Legacy.m", r#"NSString *s = @"Hello";"#)?;

    let mut cmd = test.scan_command();
    cmd.args(["-f", "swift", "-e", "Vendor"]);
    let output = run(cmd)?;

    assert!(output.stdout.contains("Scanned 1 file\n"));
    assert_snapshot!(test.read_file("output.txt")?, @"./Pods/Library/Strings.swift");

    Ok(())
}

#[test]
fn test_teplovisor_markers() -> Result<()> {
    let test = CliTest::with_file(
        "Sources/Closed.swift",
        "let a = \"Hi\"\n// teplovisor:disable\n// teplovisor:enable\n",
    )?;
    test.write_file(
        "Sources/Open.swift",
        "// teplovisor:disable\nlet a = \"Hi\"\n",
    )?;
    test.write_file(
        "Sources/Skipped.swift",
        "// teplovisor:disable all\nlet a = \"Hi\"\n",
    )?;

    let mut cmd = test.scan_command();
    cmd.args(["--markers", "teplovisor"]);
    let output = run(cmd)?;

    assert!(output.stdout.contains("Found 1 unlocalized file"));
    assert_snapshot!(test.read_file("output.txt")?, @"./Sources/Open.swift");

    Ok(())
}

#[test]
fn test_teplovisor_markers_with_region_policy() -> Result<()> {
    let test = CliTest::with_file(
        "Sources/Closed.swift",
        "let a = \"Hi\"\n// teplovisor:disable\n// teplovisor:enable\n",
    )?;
    test.write_file(
        "Sources/Open.swift",
        "// teplovisor:disable\nlet a = \"Hi\"\n",
    )?;

    let mut cmd = test.scan_command();
    cmd.args(["--markers", "teplovisor", "--policy", "region-exclusion"]);
    run(cmd)?;

    assert_snapshot!(test.read_file("output.txt")?, @"./Sources/Closed.swift");

    Ok(())
}

#[test]
fn test_config_file() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        ".locscanrc.json",
        r#"{
         "outputFileName": "unlocalized.txt",
         "ignores": ["Generated/**"],
         "markers": { "disable": "i18n:off", "enable": "i18n:on", "ignoreFile": "i18n:skip" }
     }"#,
    )?;
    test.write_file("Generated/Strings.swift", UNLOCALIZED)?;
    test.write_file("Sources/Debug.swift", "// i18n:off\nlet a = \"Hi\"\n// i18n:on\n")?;
    test.write_file("Sources/Login.swift", UNLOCALIZED)?;

    let output = run(test.scan_command())?;

    assert!(output.stdout.contains("Scanned 2 files\n"));
    assert!(output.stdout.contains("Results saved to unlocalized.txt"));
    assert_snapshot!(test.read_file("unlocalized.txt")?, @"./Sources/Login.swift");
    assert!(!test.root().join("output.txt").exists());

    Ok(())
}

#[test]
fn test_invalid_config_is_error() -> Result<()> {
    let test = CliTest::with_file(".locscanrc.json", r#"{ "ignores": ["[invalid"] }"#)?;

    let output = run(test.scan_command())?;

    assert_eq!(output.code, Some(2));
    assert!(output.stderr.contains("Invalid glob pattern in 'ignores'"));

    Ok(())
}

#[test]
fn test_cli_output_overrides_invalid_config_value() -> Result<()> {
    let test = CliTest::with_file(".locscanrc.json", r#"{ "outputFileName": "" }"#)?;
    test.write_file("Sources/Login.swift", UNLOCALIZED)?;

    let mut cmd = test.scan_command();
    cmd.args(["-o", "report.txt"]);
    let output = run(cmd)?;

    assert_eq!(output.code, Some(0));
    assert_snapshot!(test.read_file("report.txt")?, @"./Sources/Login.swift");

    Ok(())
}

#[test]
fn test_skips_playground_contents() -> Result<()> {
    let test = CliTest::with_file("Demo.playground/Contents.swift", UNLOCALIZED)?;
    test.write_file("Sources/Profile.swift", LOCALIZED)?;

    let output = run(test.scan_command())?;

    assert_eq!(output.code, Some(0));
    assert!(output.stdout.contains("Scanned 1 file\n"));
    assert_eq!(test.read_file("output.txt")?, "");

    Ok(())
}

#[test]
fn test_fail_on_flagged() -> Result<()> {
    let test = CliTest::with_file("Sources/Login.swift", UNLOCALIZED)?;

    let mut cmd = test.scan_command();
    cmd.arg("--fail-on-flagged");
    let output = run(cmd)?;

    assert_eq!(output.code, Some(1));
    assert!(test.root().join("output.txt").exists());

    Ok(())
}

#[test]
fn test_no_files_found() -> Result<()> {
    let test = CliTest::with_file("README.md", "# Project")?;

    let output = run(test.scan_command())?;

    assert_eq!(output.code, Some(0));
    assert_eq!(
        output.stdout,
        "Scanning .\n✘ Could not find any files in .\n"
    );
    assert!(!test.root().join("output.txt").exists());

    Ok(())
}

#[test]
fn test_missing_scan_path() -> Result<()> {
    let test = CliTest::new()?;

    let mut cmd = test.scan_command();
    cmd.arg("DoesNotExist");
    let output = run(cmd)?;

    assert_eq!(output.code, Some(2));
    assert_eq!(output.stdout, "Scanning DoesNotExist\n");
    assert!(output.stderr.contains("Scan path does not exist"));

    Ok(())
}

#[test]
fn test_output_write_failure_is_not_fatal() -> Result<()> {
    let test = CliTest::with_file("Sources/Login.swift", UNLOCALIZED)?;

    let mut cmd = test.scan_command();
    cmd.args(["-o", "missing/output.txt"]);
    let output = run(cmd)?;

    assert_eq!(output.code, Some(0));
    assert!(output.stdout.contains("Found 1 unlocalized file"));
    assert!(
        output
            .stderr
            .contains("✘ Failed to save results to missing/output.txt:")
    );

    Ok(())
}

#[test]
fn test_scan_subdirectory() -> Result<()> {
    let test = CliTest::with_file("App/Sources/Login.swift", UNLOCALIZED)?;
    test.write_file("Other/Login.swift", UNLOCALIZED)?;

    let mut cmd = test.scan_command();
    cmd.arg("App");
    let output = run(cmd)?;

    assert!(output.stdout.starts_with("Scanning App\n"));
    assert_snapshot!(test.read_file("output.txt")?, @"App/Sources/Login.swift");

    Ok(())
}

#[test]
fn test_verbose_lists_flagged_files() -> Result<()> {
    let test = CliTest::with_file("Sources/Login.swift", UNLOCALIZED)?;

    let mut cmd = test.scan_command();
    cmd.arg("-v");
    let output = run(cmd)?;

    assert!(
        output
            .stdout
            .contains("note: markers: locscanner, policy: region-exclusion\n")
    );
    assert!(output.stdout.contains("  --> ./Sources/Login.swift\n"));

    Ok(())
}

#[test]
fn test_unreadable_file_warning() -> Result<()> {
    let test = CliTest::with_file("Sources/Login.swift", UNLOCALIZED)?;
    std::fs::write(test.root().join("Sources/Binary.swift"), [0xff, 0xfe, 0x80])?;

    let output = run(test.scan_command())?;

    assert_eq!(output.code, Some(0));
    assert!(output.stdout.contains("Scanned 2 files\n"));
    assert!(
        output
            .stderr
            .contains("warning: 1 file(s) could not be read (use -v for details)")
    );
    assert_snapshot!(test.read_file("output.txt")?, @"./Sources/Login.swift");

    Ok(())
}

#[test]
fn test_no_command_prints_help() -> Result<()> {
    let test = CliTest::new()?;

    let output = run(test.command())?;

    assert_eq!(output.code, Some(0));
    assert!(output.stdout.contains("Usage: locscan"));

    Ok(())
}
