//! Environment overrides for property-test runs.
//!
//! CI jobs raise case counts or enable forking without touching the suites;
//! every suite reads the same two variables through [`ProptestRunProfile`].

use std::env;
use std::num::NonZeroU32;

/// Overrides the number of cases each property runs.
pub const CASES_ENV_KEY: &str = "PROPTEST_CASES";
/// Runs each property case in a forked subprocess when truthy.
pub const FORK_ENV_KEY: &str = "KOPELMAN_PBT_FORK";

/// Case count and fork flag for one property suite.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProptestRunProfile {
    cases: u32,
    fork: bool,
}

impl ProptestRunProfile {
    /// Reads the profile from the environment, falling back to the given
    /// defaults for unset or malformed values.
    ///
    /// # Examples
    ///
    /// ```
    /// use kopelman_test_support::ci::property_test_profile::ProptestRunProfile;
    ///
    /// let profile = ProptestRunProfile::load(128, false);
    /// assert!(profile.cases() > 0);
    /// ```
    #[must_use]
    pub fn load(default_cases: u32, default_fork: bool) -> Self {
        Self {
            cases: override_or(CASES_ENV_KEY, default_cases, parse_cases),
            fork: override_or(FORK_ENV_KEY, default_fork, parse_flag),
        }
    }

    /// Cases to run per property.
    #[rustfmt::skip]
    #[must_use]
    pub fn cases(&self) -> u32 { self.cases }

    /// Whether cases run in forked subprocesses.
    #[rustfmt::skip]
    #[must_use]
    pub fn fork(&self) -> bool { self.fork }
}

fn override_or<T>(key: &'static str, default: T, parse: fn(&str) -> Result<T, &'static str>) -> T {
    let Ok(raw) = env::var(key) else {
        return default;
    };
    parse(raw.trim()).unwrap_or_else(|reason| {
        tracing::warn!(
            env = key,
            raw = %raw,
            reason,
            "ignoring malformed property-test override",
        );
        default
    })
}

fn parse_cases(raw: &str) -> Result<u32, &'static str> {
    raw.parse::<NonZeroU32>()
        .map(NonZeroU32::get)
        .map_err(|_| "expected a positive integer")
}

fn parse_flag(raw: &str) -> Result<bool, &'static str> {
    match raw.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err("expected one of 1/0, true/false, yes/no, on/off"),
    }
}
