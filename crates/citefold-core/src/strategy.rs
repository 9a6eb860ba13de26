use std::fmt;
use std::str::FromStr;

use crate::error::{CitefoldError, Result};

/// Default primary title-similarity cutoff, used unless the caller supplies
/// one or the strategy fixes its own.
pub const DEFAULT_TITLE_THRESHOLD: f64 = 0.85;

/// Fixed threshold under [`MatchStrategy::Strict`].
pub const STRICT_TITLE_THRESHOLD: f64 = 0.95;

/// Fixed threshold under [`MatchStrategy::Loose`].
pub const LOOSE_TITLE_THRESHOLD: f64 = 0.75;

/// Named matching configuration selecting which decision-ladder rules apply
/// and at what title threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchStrategy {
    /// Full multi-level ladder: DOI, title+authors, tertiary author overlap.
    #[default]
    Auto,
    /// DOI comparison only.
    DoiOnly,
    /// Title similarity only, ignoring DOIs and authors.
    TitleOnly,
    /// Auto ladder with the threshold fixed at 0.95.
    Strict,
    /// Auto ladder with the threshold fixed at 0.75.
    Loose,
}

impl MatchStrategy {
    /// Resolve the active title threshold for this strategy.
    ///
    /// A caller-supplied threshold outside [0, 1] is rejected before the
    /// strategy gets a say, even where a fixed strategy threshold would
    /// override it, so caller mistakes stay visible.
    pub fn resolve_threshold(self, requested: Option<f64>) -> Result<f64> {
        if let Some(value) = requested
            && !(0.0..=1.0).contains(&value)
        {
            return Err(CitefoldError::ThresholdOutOfRange(value));
        }

        Ok(match self {
            Self::Strict => STRICT_TITLE_THRESHOLD,
            Self::Loose => LOOSE_TITLE_THRESHOLD,
            Self::Auto | Self::DoiOnly | Self::TitleOnly => {
                requested.unwrap_or(DEFAULT_TITLE_THRESHOLD)
            }
        })
    }

    /// Whether the tertiary author-confirmed rule participates.
    pub fn uses_tertiary_rule(self) -> bool {
        matches!(self, Self::Auto | Self::Strict | Self::Loose)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::DoiOnly => "doi_only",
            Self::TitleOnly => "title_only",
            Self::Strict => "strict",
            Self::Loose => "loose",
        }
    }
}

impl FromStr for MatchStrategy {
    type Err = CitefoldError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "auto" => Ok(Self::Auto),
            "doi_only" => Ok(Self::DoiOnly),
            "title_only" => Ok(Self::TitleOnly),
            "strict" => Ok(Self::Strict),
            "loose" => Ok(Self::Loose),
            other => Err(CitefoldError::UnknownStrategy(other.to_string())),
        }
    }
}

impl fmt::Display for MatchStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Policy for choosing which record represents a duplicate group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KeepPreference {
    /// The earliest-encountered record is kept unconditionally.
    #[default]
    First,
    /// The record with the most non-empty fields wins; the existing
    /// representative wins ties.
    MostComplete,
    /// A record carrying a DOI is preferred; both-or-neither falls back to
    /// completeness.
    PreferDoi,
}

impl KeepPreference {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::First => "first",
            Self::MostComplete => "most_complete",
            Self::PreferDoi => "prefer_doi",
        }
    }
}

impl FromStr for KeepPreference {
    type Err = CitefoldError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "first" => Ok(Self::First),
            "most_complete" => Ok(Self::MostComplete),
            "prefer_doi" => Ok(Self::PreferDoi),
            other => Err(CitefoldError::UnknownKeepPreference(other.to_string())),
        }
    }
}

impl fmt::Display for KeepPreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A strategy with its threshold already resolved and validated; the form
/// consumed by the matcher and consolidator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchParams {
    pub strategy: MatchStrategy,
    pub threshold: f64,
}

impl MatchParams {
    pub fn new(strategy: MatchStrategy, requested_threshold: Option<f64>) -> Result<Self> {
        Ok(Self {
            strategy,
            threshold: strategy.resolve_threshold(requested_threshold)?,
        })
    }
}
