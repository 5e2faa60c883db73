//! Roster normalization.
//!
//! Turns raw boundary records (free-form availability text, raw department
//! labels) into normalized [`Person`] values the schedulers consume.
//!
//! Two availability matchers exist, and the difference is deliberate:
//!
//! - [`parse_day_tokens`] (exact): splits on commas, strips leading
//!   `weekday`/`week` locale markers, then requires each remaining token to
//!   be exactly one of the five day symbols. `"MonWed"` yields nothing.
//!   This is what balanced scheduling historically used.
//! - [`scan_day_symbols`] (scan): collects every day-symbol occurrence
//!   anywhere in the raw string, regardless of separators or markers.
//!   `"MonWed"` yields {Mon, Wed}. This is what departmental scheduling
//!   historically used.
//!
//! Unrecognized input is dropped, not rejected: a garbage token simply
//! means "not available that day". [`ParsePolicy::Strict`] opts out of that
//! leniency and reports every drop as a [`RosterIssue`].

use std::collections::{BTreeSet, HashSet};

use crate::models::{DepartmentQuotas, Person, RosterRecord, Weekday};

/// How normalization treats unparseable input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ParsePolicy {
    /// Drop unrecognized tokens and records silently (legacy behavior).
    /// Drops are still reported through `log`.
    #[default]
    Lenient,
    /// Collect every drop as a [`RosterIssue`] and fail normalization if
    /// any occurred.
    Strict,
}

/// Which availability matcher to apply.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TokenMatching {
    /// Exact comma-separated tokens ([`parse_day_tokens`]).
    #[default]
    Exact,
    /// Every day-symbol occurrence ([`scan_day_symbols`]).
    Scan,
}

/// A problem found while normalizing a roster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterIssue {
    /// Issue category.
    pub kind: RosterIssueKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of roster issues.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RosterIssueKind {
    /// An availability token matched no workday.
    UnknownDayToken,
    /// A record's department label is not in the quota table.
    UnknownDepartment,
    /// A record yielded no recognized workdays at all.
    EmptyAvailability,
    /// Two records share a name.
    DuplicateName,
}

impl RosterIssue {
    fn new(kind: RosterIssueKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Strips a leading `weekday`/`week` locale marker from a token.
fn strip_day_marker(token: &str) -> &str {
    let token = token.trim();
    for marker in ["weekday", "week"] {
        // get() keeps slicing safe on non-ASCII input
        if let Some(prefix) = token.get(..marker.len()) {
            if prefix.eq_ignore_ascii_case(marker) {
                return token[marker.len()..].trim_start();
            }
        }
    }
    token
}

/// Parses comma-separated availability text into a set of workdays.
///
/// Each token is trimmed and stripped of a leading `weekday`/`week` marker,
/// then must match a day symbol exactly. Unrecognized tokens are dropped.
///
/// ```
/// use duty_roster::models::Weekday;
/// use duty_roster::roster::parse_day_tokens;
///
/// let days = parse_day_tokens("weekMon, Wed, Funday");
/// assert_eq!(days, [Weekday::Mon, Weekday::Wed].into_iter().collect());
/// ```
pub fn parse_day_tokens(raw: &str) -> BTreeSet<Weekday> {
    raw.split(',')
        .map(strip_day_marker)
        .filter_map(Weekday::from_token)
        .collect()
}

/// Collects every day-symbol occurrence in the raw text.
///
/// Separators and markers are irrelevant: `"MonWed"` yields {Mon, Wed}.
/// More permissive than [`parse_day_tokens`]; the two are intentionally
/// not unified (see the module doc).
pub fn scan_day_symbols(raw: &str) -> BTreeSet<Weekday> {
    let lowered = raw.to_ascii_lowercase();
    Weekday::ALL
        .into_iter()
        .filter(|day| lowered.contains(&day.token().to_ascii_lowercase()))
        .collect()
}

/// Converts raw roster records into normalized people.
///
/// Configured with a parse policy, a token matcher, and (for departmental
/// scheduling) a quota table that defines the recognized departments.
///
/// # Example
///
/// ```
/// use duty_roster::models::RosterRecord;
/// use duty_roster::roster::RosterNormalizer;
///
/// let records = vec![
///     RosterRecord::new("Alice", "Mon,Wed,Fri"),
///     RosterRecord::new("Bob", "Tue,Funday"),
/// ];
/// let people = RosterNormalizer::new().normalize(&records).unwrap();
/// assert_eq!(people.len(), 2);
/// assert_eq!(people[0].available.len(), 3);
/// assert_eq!(people[1].available.len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct RosterNormalizer {
    policy: ParsePolicy,
    matching: TokenMatching,
    departments: Option<DepartmentQuotas>,
}

impl RosterNormalizer {
    /// Creates a lenient, exact-matching normalizer (the balanced-engine
    /// configuration).
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a normalizer for departmental scheduling: scan matching plus
    /// department validation against the quota table.
    pub fn departmental(quotas: DepartmentQuotas) -> Self {
        Self {
            policy: ParsePolicy::Lenient,
            matching: TokenMatching::Scan,
            departments: Some(quotas),
        }
    }

    /// Sets the parse policy.
    pub fn with_policy(mut self, policy: ParsePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Sets the availability matcher.
    pub fn with_matching(mut self, matching: TokenMatching) -> Self {
        self.matching = matching;
        self
    }

    /// Enables department validation against a quota table.
    pub fn with_departments(mut self, quotas: DepartmentQuotas) -> Self {
        self.departments = Some(quotas);
        self
    }

    /// Normalizes a roster.
    ///
    /// Lenient policy always returns `Ok`; records with unrecognized
    /// departments are skipped and garbage availability tokens dropped, as
    /// the legacy behavior dictates. Strict policy returns `Err` with every
    /// issue found (unknown tokens, unknown departments, empty availability,
    /// duplicate names).
    pub fn normalize(&self, records: &[RosterRecord]) -> Result<Vec<Person>, Vec<RosterIssue>> {
        let mut people = Vec::with_capacity(records.len());
        let mut issues = Vec::new();
        let mut seen_names: HashSet<&str> = HashSet::new();
        let strict = self.policy == ParsePolicy::Strict;

        for record in records {
            if !seen_names.insert(record.name.as_str()) && strict {
                issues.push(RosterIssue::new(
                    RosterIssueKind::DuplicateName,
                    format!("duplicate roster name: {}", record.name),
                ));
            }

            let department = match self.validated_department(record, strict, &mut issues) {
                Ok(department) => department,
                Err(()) => continue, // record skipped entirely
            };

            let available = match self.matching {
                TokenMatching::Exact => {
                    if strict {
                        self.collect_token_issues(record, &mut issues);
                    }
                    parse_day_tokens(&record.availability)
                }
                TokenMatching::Scan => scan_day_symbols(&record.availability),
            };

            if available.is_empty() {
                log::warn!(
                    "roster record '{}' has no recognized workdays in {:?}",
                    record.name,
                    record.availability
                );
                if strict {
                    issues.push(RosterIssue::new(
                        RosterIssueKind::EmptyAvailability,
                        format!("'{}' has no recognized workdays", record.name),
                    ));
                }
            }

            let mut person = Person::new(record.name.clone()).with_available_days(available);
            if let Some(department) = department {
                person = person.with_department(department);
            }
            people.push(person);
        }

        if strict && !issues.is_empty() {
            Err(issues)
        } else {
            Ok(people)
        }
    }

    /// Validates a record's department against the quota table, when one is
    /// configured. `Err(())` means the record is skipped.
    fn validated_department(
        &self,
        record: &RosterRecord,
        strict: bool,
        issues: &mut Vec<RosterIssue>,
    ) -> Result<Option<String>, ()> {
        let Some(quotas) = &self.departments else {
            return Ok(record.department.clone());
        };

        match record.department.as_deref() {
            Some(label) if quotas.is_recognized(label) => Ok(Some(label.to_string())),
            other => {
                log::warn!(
                    "skipping roster record '{}': unrecognized department {:?}",
                    record.name,
                    other
                );
                if strict {
                    issues.push(RosterIssue::new(
                        RosterIssueKind::UnknownDepartment,
                        format!(
                            "'{}' has unrecognized department {:?}",
                            record.name,
                            other.unwrap_or("<none>")
                        ),
                    ));
                }
                Err(())
            }
        }
    }

    /// Reports every exact-match token that names no workday.
    fn collect_token_issues(&self, record: &RosterRecord, issues: &mut Vec<RosterIssue>) {
        for token in record.availability.split(',') {
            let stripped = strip_day_marker(token);
            if !stripped.is_empty() && Weekday::from_token(stripped).is_none() {
                issues.push(RosterIssue::new(
                    RosterIssueKind::UnknownDayToken,
                    format!("'{}': unrecognized day token '{stripped}'", record.name),
                ));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_exact_basic() {
        let days = parse_day_tokens("Mon,Wed,Fri");
        assert_eq!(
            days,
            [Weekday::Mon, Weekday::Wed, Weekday::Fri].into_iter().collect()
        );
    }

    #[test]
    fn test_parse_exact_strips_markers_and_whitespace() {
        let days = parse_day_tokens(" weekMon , WeekdayWed, week Fri ");
        assert_eq!(
            days,
            [Weekday::Mon, Weekday::Wed, Weekday::Fri].into_iter().collect()
        );
    }

    #[test]
    fn test_parse_exact_drops_garbage() {
        let days = parse_day_tokens("Mon,Funday");
        assert_eq!(days, [Weekday::Mon].into_iter().collect());
        assert!(parse_day_tokens("nonsense").is_empty());
        assert!(parse_day_tokens("").is_empty());
    }

    #[test]
    fn test_parse_exact_rejects_joined_symbols() {
        // The exact matcher does not split "MonWed"; only the scanner does.
        assert!(parse_day_tokens("MonWed").is_empty());
    }

    #[test]
    fn test_scan_finds_joined_symbols() {
        let days = scan_day_symbols("MonWed");
        assert_eq!(days, [Weekday::Mon, Weekday::Wed].into_iter().collect());
    }

    #[test]
    fn test_scan_ignores_separators_and_markers() {
        let days = scan_day_symbols("weekday: mon / TUE;wed");
        assert_eq!(
            days,
            [Weekday::Mon, Weekday::Tue, Weekday::Wed].into_iter().collect()
        );
    }

    #[test]
    fn test_scan_duplicates_collapse() {
        let days = scan_day_symbols("Mon,Mon,Mon");
        assert_eq!(days.len(), 1);
    }

    #[test]
    fn test_normalize_lenient_never_fails() {
        let records = vec![
            RosterRecord::new("Alice", "Mon,Wed,Fri"),
            RosterRecord::new("Bob", "garbage"),
        ];
        let people = RosterNormalizer::new().normalize(&records).unwrap();
        assert_eq!(people.len(), 2);
        assert_eq!(people[0].available.len(), 3);
        assert!(people[1].available.is_empty());
    }

    #[test]
    fn test_normalize_strict_collects_token_issues() {
        let records = vec![RosterRecord::new("Alice", "Mon,Funday")];
        let issues = RosterNormalizer::new()
            .with_policy(ParsePolicy::Strict)
            .normalize(&records)
            .unwrap_err();
        assert!(issues
            .iter()
            .any(|i| i.kind == RosterIssueKind::UnknownDayToken && i.message.contains("Funday")));
    }

    #[test]
    fn test_normalize_strict_duplicate_names() {
        let records = vec![
            RosterRecord::new("Alice", "Mon"),
            RosterRecord::new("Alice", "Tue"),
        ];
        let issues = RosterNormalizer::new()
            .with_policy(ParsePolicy::Strict)
            .normalize(&records)
            .unwrap_err();
        assert!(issues
            .iter()
            .any(|i| i.kind == RosterIssueKind::DuplicateName));
    }

    #[test]
    fn test_normalize_strict_empty_availability() {
        let records = vec![RosterRecord::new("Alice", "Saturday")];
        let issues = RosterNormalizer::new()
            .with_policy(ParsePolicy::Strict)
            .normalize(&records)
            .unwrap_err();
        assert!(issues
            .iter()
            .any(|i| i.kind == RosterIssueKind::EmptyAvailability));
    }

    fn sample_quotas() -> DepartmentQuotas {
        DepartmentQuotas::new()
            .with_department("Ops", 3)
            .with_department("Support", 4)
    }

    #[test]
    fn test_departmental_skips_unrecognized_department() {
        let records = vec![
            RosterRecord::new("Alice", "MonWed").with_department("Ops"),
            RosterRecord::new("Bob", "Tue").with_department("Finance"),
            RosterRecord::new("Cara", "Tue"), // no department at all
        ];
        let people = RosterNormalizer::departmental(sample_quotas())
            .normalize(&records)
            .unwrap();

        // Legacy behavior: Bob and Cara silently dropped, no error.
        assert_eq!(people.len(), 1);
        assert_eq!(people[0].name, "Alice");
        assert_eq!(people[0].department.as_deref(), Some("Ops"));
        assert_eq!(
            people[0].available,
            [Weekday::Mon, Weekday::Wed].into_iter().collect()
        );
    }

    #[test]
    fn test_departmental_strict_reports_department_skips() {
        let records = vec![RosterRecord::new("Bob", "Tue").with_department("Finance")];
        let issues = RosterNormalizer::departmental(sample_quotas())
            .with_policy(ParsePolicy::Strict)
            .normalize(&records)
            .unwrap_err();
        assert!(issues
            .iter()
            .any(|i| i.kind == RosterIssueKind::UnknownDepartment && i.message.contains("Bob")));
    }

    #[test]
    fn test_departmental_uses_scan_matching() {
        let records = vec![RosterRecord::new("Alice", "MonTueWed").with_department("Ops")];
        let people = RosterNormalizer::departmental(sample_quotas())
            .normalize(&records)
            .unwrap();
        assert_eq!(people[0].available.len(), 3);
    }
}
