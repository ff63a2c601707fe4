//! Create-path mapping policy.
//!
//! Every create endpoint turns a wire payload into an insertable row. The
//! server, not the client, decides a handful of lifecycle columns: the row id
//! is generated by the database, `active` starts true, audit timestamps are
//! stamped on insert. Instead of a reflective copy-mapper, each row
//! constructor is written out field by field and consults a [`CreatePolicy`]
//! for the lifecycle columns it does not copy from the client.
//!
//! A policy that fails to cover a server-owned column is a bug in the code,
//! surfaced as [`Error::Mapping`] rather than a request-level failure.

use crate::errors::{Error, Result};

/// How a server-owned column is populated during payload-to-row mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldRule {
    /// Ignore whatever the client sent and use this server constant.
    Force(bool),
    /// Leave the column unset; the database fills it on insert.
    Skip,
}

/// Mapping policy for a create operation.
///
/// Enumerates the server-owned columns of the target row together with their
/// rules. Columns not listed here are copied verbatim from the payload by the
/// row constructor.
#[derive(Debug, Clone)]
pub struct CreatePolicy {
    rules: &'static [(&'static str, FieldRule)],
    /// When set, a forced lookup for an uncovered column resolves to `false`
    /// instead of failing.
    default_missing: bool,
}

impl CreatePolicy {
    pub const fn new(rules: &'static [(&'static str, FieldRule)], default_missing: bool) -> Self {
        Self {
            rules,
            default_missing,
        }
    }

    /// Looks up the rule for a server-owned column.
    pub fn rule(&self, field: &str) -> Option<FieldRule> {
        self.rules
            .iter()
            .find(|(name, _)| *name == field)
            .map(|(_, rule)| *rule)
    }

    /// Resolves the server constant for a forced boolean column.
    pub fn forced_bool(&self, field: &str) -> Result<bool> {
        match self.rule(field) {
            Some(FieldRule::Force(value)) => Ok(value),
            None if self.default_missing => Ok(false),
            other => Err(Error::Mapping(format!(
                "column '{field}' expects a force rule, policy has {other:?}"
            ))),
        }
    }

    /// Asserts that the policy skips a column the row constructor leaves unset.
    pub fn require_skip(&self, field: &str) -> Result<()> {
        match self.rule(field) {
            Some(FieldRule::Skip) => Ok(()),
            other => Err(Error::Mapping(format!(
                "column '{field}' is left unset by the mapper, policy has {other:?}"
            ))),
        }
    }
}

/// Default create policy: drop client ids, activate the row, leave audit
/// timestamps to the database.
pub const CREATE_POLICY: CreatePolicy = CreatePolicy::new(
    &[
        ("id", FieldRule::Skip),
        ("active", FieldRule::Force(true)),
        ("created_at", FieldRule::Skip),
        ("modified_at", FieldRule::Skip),
    ],
    false,
);

/// Create policy for mutual fund buy transactions. The table has no `active`
/// column; a newly recorded purchase is by definition unsold, so the client
/// value for `is_sold_out` is discarded.
pub const BUY_TRANSACTION_CREATE_POLICY: CreatePolicy = CreatePolicy::new(
    &[
        ("id", FieldRule::Skip),
        ("is_sold_out", FieldRule::Force(false)),
        ("created_at", FieldRule::Skip),
        ("modified_at", FieldRule::Skip),
    ],
    false,
);

/// Create policy for mutual fund sell transactions. The table has neither an
/// `active` nor a sold-out column, so there is nothing to force.
pub const SELL_TRANSACTION_CREATE_POLICY: CreatePolicy = CreatePolicy::new(
    &[
        ("id", FieldRule::Skip),
        ("created_at", FieldRule::Skip),
        ("modified_at", FieldRule::Skip),
    ],
    false,
);
