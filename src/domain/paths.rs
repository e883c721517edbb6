//! Catalog of well-known paths the command touches.

/// Built unit-test bundle produced by `dojo build app --mode unit`.
pub const UNIT_TEST_BUNDLE: &str = "output/tests/unit.js";

/// Built functional-test bundle produced by `dojo build app --mode functional`.
pub const FUNCTIONAL_TEST_BUNDLE: &str = "output/tests/functional.js";

/// Runner configuration file shipped with the command and listed by `eject`.
pub const RUNNER_CONFIG_FILE: &str = "intern.json";

/// The command's own npm manifest, read during ejection.
pub const PACKAGE_MANIFEST_FILE: &str = "package.json";
