use super::helpers::TestSitePackages;

const REQUESTS_METADATA: &str = "Name: requests\n\
                                 Version: 2.1\n\
                                 Home-page: http://python-requests.org\n\
                                 Author: Kenneth Reitz\n\
                                 License: Apache 2.0\n";

const PIP_METADATA: &str = "Name: pip\n\
                            Version: 9.0\n\
                            License: MIT\n";

#[test]
fn test_default_dump_excludes_system_packages() {
    let env = TestSitePackages::new();
    env.add_dist("requests", "2.1", "METADATA", REQUESTS_METADATA);
    env.add_dist("pip", "9.0", "METADATA", PIP_METADATA);

    let output = env.run(&[]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("requests-2.1"));
    assert!(stdout.contains("Apache 2.0"));
    assert!(!stdout.contains("pip-9.0"));
    assert!(!stdout.contains("MIT"));
}

#[test]
fn test_with_system_includes_reserved_packages() {
    let env = TestSitePackages::new();
    env.add_dist("requests", "2.1", "METADATA", REQUESTS_METADATA);
    env.add_dist("pip", "9.0", "METADATA", PIP_METADATA);

    let output = env.run(&["--with-system"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("requests-2.1"));
    assert!(stdout.contains("pip-9.0"));
    assert!(stdout.contains("MIT"));
}

#[test]
fn test_version_flag_prints_name_and_version() {
    let env = TestSitePackages::new();

    let output = env.run_bare(&["--version"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.trim(), "pip-licenses 0.1.0");
    // No table is produced.
    assert!(!stdout.contains('+'));
}

#[test]
fn test_short_version_flag() {
    let env = TestSitePackages::new();

    let output = env.run_bare(&["-v"]);
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout).trim(),
        "pip-licenses 0.1.0"
    );
}

#[test]
fn test_missing_metadata_shows_unknown() {
    let env = TestSitePackages::new();
    env.add_bare_dist("mystery", "0.1");

    let output = env.run(&[]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("mystery-0.1"));
    assert!(stdout.contains("UNKNOWN"));
}

#[test]
fn test_pkg_info_overrides_metadata_record() {
    let env = TestSitePackages::new();
    env.add_dist("demo", "1.0", "METADATA", "License: MIT\n");
    env.add_dist("demo", "1.0", "PKG-INFO", "License: BSD\n");

    let output = env.run(&[]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("BSD"));
    assert!(!stdout.contains("MIT"));
}

#[test]
fn test_author_and_url_flags_are_accepted_but_inert() {
    let env = TestSitePackages::new();
    env.add_dist("requests", "2.1", "METADATA", REQUESTS_METADATA);

    let output = env.run(&["--with-authors", "--with-urls"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("requests-2.1"));
    assert!(!stdout.contains("Kenneth Reitz"));
    assert!(!stdout.contains("python-requests.org"));
}

#[test]
fn test_unknown_flag_fails_with_usage() {
    let env = TestSitePackages::new();

    let output = env.run_bare(&["--bogus"]);
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.to_lowercase().contains("usage"));
}
