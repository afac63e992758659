use regex::{NoExpand, Regex, RegexBuilder};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{RenameError, Result};
use crate::name::{is_forbidden_char, split_extension};

/// The renaming transforms a batch can apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TransformKind {
    /// Insert a prefix and/or suffix around the stem
    AddAffix,
    /// Replace every occurrence of a search text
    ReplaceText,
    /// Replace the whole name with `prefix + zero-padded number`
    SequentialNumber,
    /// `ReplaceText` with an empty replacement
    RemoveText,
    /// Change the case of the stem
    ChangeCase,
    /// Remove characters other than letters, digits, `_`, whitespace, `.` and `-`
    StripSpecialChars,
}

impl TransformKind {
    pub const ALL: [Self; 6] = [
        Self::AddAffix,
        Self::ReplaceText,
        Self::SequentialNumber,
        Self::RemoveText,
        Self::ChangeCase,
        Self::StripSpecialChars,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::AddAffix => "add-affix",
            Self::ReplaceText => "replace-text",
            Self::SequentialNumber => "sequential-number",
            Self::RemoveText => "remove-text",
            Self::ChangeCase => "change-case",
            Self::StripSpecialChars => "strip-special-chars",
        }
    }

    /// Whether proposed names go through collision resolution.
    ///
    /// Sequential numbering trusts the generated sequence to be unique; a
    /// clash with an existing file surfaces as a failed rename.
    pub fn resolves_collisions(self) -> bool {
        !matches!(self, Self::SequentialNumber)
    }
}

impl fmt::Display for TransformKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaseMode {
    Lower,
    Upper,
    Title,
}

impl FromStr for CaseMode {
    type Err = RenameError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "lower" => Ok(Self::Lower),
            "upper" => Ok(Self::Upper),
            "title" => Ok(Self::Title),
            _ => Err(RenameError::invalid(format!(
                "unknown case mode '{s}' (expected lower, upper or title)"
            ))),
        }
    }
}

impl fmt::Display for CaseMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Lower => "lower",
            Self::Upper => "upper",
            Self::Title => "title",
        })
    }
}

/// Options recognized by the transforms. Each transform reads only the
/// fields that apply to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransformParams {
    pub prefix: String,
    pub suffix: String,
    pub keep_extension: bool,
    pub search_text: String,
    pub replace_text: String,
    pub case_sensitive: bool,
    pub start_number: u64,
    pub digit_width: usize,
    pub case_mode: Option<CaseMode>,
    pub replacement_char: String,
}

impl Default for TransformParams {
    fn default() -> Self {
        Self {
            prefix: String::new(),
            suffix: String::new(),
            keep_extension: true,
            search_text: String::new(),
            replace_text: String::new(),
            case_sensitive: false,
            start_number: 1,
            digit_width: 3,
            case_mode: None,
            replacement_char: String::new(),
        }
    }
}

impl TransformParams {
    /// Check that the parameters a transform needs are present and usable.
    pub fn validate(&self, kind: TransformKind) -> Result<()> {
        match kind {
            TransformKind::AddAffix | TransformKind::SequentialNumber => {
                check_insertable("prefix", &self.prefix)?;
                check_insertable("suffix", &self.suffix)?;
            },
            TransformKind::ReplaceText | TransformKind::RemoveText => {
                if self.search_text.is_empty() {
                    return Err(RenameError::invalid("search text must not be empty"));
                }
                if kind == TransformKind::ReplaceText {
                    check_insertable("replacement text", &self.replace_text)?;
                }
            },
            TransformKind::ChangeCase => {
                if self.case_mode.is_none() {
                    return Err(RenameError::invalid(
                        "case mode is required (lower, upper or title)",
                    ));
                }
            },
            TransformKind::StripSpecialChars => {
                check_insertable("replacement character", &self.replacement_char)?;
            },
        }
        Ok(())
    }
}

fn check_insertable(field: &str, value: &str) -> Result<()> {
    if value.chars().any(is_forbidden_char) {
        return Err(RenameError::invalid(format!(
            "{field} '{}' contains a path separator",
            value.escape_default()
        )));
    }
    Ok(())
}

#[derive(Debug, Clone)]
enum Matcher {
    Exact(String),
    IgnoreCase(Regex),
}

#[derive(Debug, Clone)]
enum Op {
    Affix,
    Replace { matcher: Matcher, replacement: String },
    Sequence,
    Case(CaseMode),
    Strip,
}

/// A validated transform, ready to compute names.
#[derive(Debug, Clone)]
pub struct Transform {
    kind: TransformKind,
    params: TransformParams,
    op: Op,
}

impl Transform {
    pub fn new(kind: TransformKind, params: TransformParams) -> Result<Self> {
        params.validate(kind)?;

        let op = match kind {
            TransformKind::AddAffix => Op::Affix,
            TransformKind::ReplaceText | TransformKind::RemoveText => {
                let matcher = if params.case_sensitive {
                    Matcher::Exact(params.search_text.clone())
                } else {
                    let regex = RegexBuilder::new(&regex::escape(&params.search_text))
                        .case_insensitive(true)
                        .build()
                        .map_err(|e| RenameError::invalid(format!("invalid search text: {e}")))?;
                    Matcher::IgnoreCase(regex)
                };
                let replacement = if kind == TransformKind::RemoveText {
                    String::new()
                } else {
                    params.replace_text.clone()
                };
                Op::Replace {
                    matcher,
                    replacement,
                }
            },
            TransformKind::SequentialNumber => Op::Sequence,
            TransformKind::ChangeCase => match params.case_mode {
                Some(mode) => Op::Case(mode),
                None => return Err(RenameError::invalid("case mode is required")),
            },
            TransformKind::StripSpecialChars => Op::Strip,
        };

        Ok(Self { kind, params, op })
    }

    pub fn kind(&self) -> TransformKind {
        self.kind
    }

    pub fn params(&self) -> &TransformParams {
        &self.params
    }

    /// Split a proposed name at the point where a disambiguation counter goes.
    ///
    /// Affixing without keeping the extension treats the whole name as the
    /// stem, so the counter lands at the very end.
    pub fn split_candidate<'a>(&self, candidate: &'a str) -> (&'a str, &'a str) {
        match self.op {
            Op::Affix if !self.params.keep_extension => (candidate, ""),
            _ => split_extension(candidate),
        }
    }

    /// Compute the proposed name for `name`.
    ///
    /// `sequence_number` is only read by sequential numbering.
    pub fn apply(&self, name: &str, sequence_number: u64) -> String {
        let p = &self.params;
        match &self.op {
            Op::Affix => {
                if p.keep_extension {
                    let (stem, ext) = split_extension(name);
                    format!("{}{}{}{}", p.prefix, stem, p.suffix, ext)
                } else {
                    format!("{}{}{}", p.prefix, name, p.suffix)
                }
            },
            Op::Replace {
                matcher,
                replacement,
            } => match matcher {
                Matcher::Exact(search) => name.replace(search.as_str(), replacement),
                Matcher::IgnoreCase(regex) => regex
                    .replace_all(name, NoExpand(replacement.as_str()))
                    .into_owned(),
            },
            Op::Sequence => {
                let ext = if p.keep_extension {
                    split_extension(name).1
                } else {
                    ""
                };
                format!(
                    "{}{:0width$}{}{}",
                    p.prefix,
                    sequence_number,
                    p.suffix,
                    ext,
                    width = p.digit_width
                )
            },
            Op::Case(mode) => {
                let (stem, ext) = split_extension(name);
                let converted = match mode {
                    CaseMode::Lower => stem.to_lowercase(),
                    CaseMode::Upper => stem.to_uppercase(),
                    CaseMode::Title => title_case(stem),
                };
                converted + ext
            },
            Op::Strip => {
                let (stem, ext) = split_extension(name);
                strip_special_chars(stem, &p.replacement_char) + ext
            },
        }
    }
}

/// Compute a single proposed name without keeping the compiled transform.
pub fn apply_transform(
    name: &str,
    kind: TransformKind,
    params: &TransformParams,
    sequence_number: u64,
) -> Result<String> {
    Ok(Transform::new(kind, params.clone())?.apply(name, sequence_number))
}

/// Uppercase the first letter of every whitespace-delimited word and
/// lowercase the rest. Digits and punctuation before that letter are kept.
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    // Set until the first letter of the current word has been seen
    let mut before_letter = true;
    for c in s.chars() {
        if c.is_whitespace() {
            out.push(c);
            before_letter = true;
        } else if !c.is_alphabetic() {
            out.extend(c.to_lowercase());
        } else if before_letter {
            out.extend(c.to_uppercase());
            before_letter = false;
        } else {
            out.extend(c.to_lowercase());
        }
    }
    out
}

fn is_kept_char(c: char) -> bool {
    c.is_alphanumeric() || c.is_whitespace() || matches!(c, '_' | '.' | '-')
}

/// Replace every special character with `replacement`, collapse whitespace
/// runs to one space and trim the ends.
pub fn strip_special_chars(stem: &str, replacement: &str) -> String {
    let mut cleaned = String::with_capacity(stem.len());
    for c in stem.chars() {
        if is_kept_char(c) {
            cleaned.push(c);
        } else {
            cleaned.push_str(replacement);
        }
    }
    cleaned.split_whitespace().collect::<Vec<_>>().join(" ")
}
