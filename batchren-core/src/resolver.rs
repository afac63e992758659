use std::collections::HashSet;

use crate::name::with_counter;

/// Result of resolving a proposed name against the taken set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// The file keeps its name; no rename is needed.
    Unchanged,
    /// The file can be renamed to this name.
    Available(String),
}

/// Names already in use during a batch: the directory snapshot plus every
/// name assigned so far. Names vacated by earlier renames stay taken.
#[derive(Debug, Clone, Default)]
pub struct TakenNames {
    names: HashSet<String>,
}

impl TakenNames {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    /// Record a name assigned by a confirmed rename.
    pub fn claim(&mut self, name: impl Into<String>) {
        self.names.insert(name.into());
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// Pick a unique name for the candidate `stem + extension`.
///
/// A candidate equal to the original is left alone. A free candidate is used
/// as is. Otherwise `_1`, `_2`, ... is appended to the stem until the name is
/// free; landing back on the original name also ends the search.
pub fn resolve_collision(
    stem: &str,
    extension: &str,
    original: &str,
    taken: &TakenNames,
) -> Resolution {
    let candidate = format!("{stem}{extension}");
    if candidate == original {
        return Resolution::Unchanged;
    }
    if !taken.contains(&candidate) {
        return Resolution::Available(candidate);
    }

    let mut counter: u64 = 1;
    loop {
        let disambiguated = with_counter(stem, extension, counter);
        if disambiguated == original {
            return Resolution::Unchanged;
        }
        if !taken.contains(&disambiguated) {
            return Resolution::Available(disambiguated);
        }
        counter += 1;
    }
}
