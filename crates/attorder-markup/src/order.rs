//! Attribute reordering.
//!
//! The user supplies an ordered list of regular expressions. Each attribute
//! name is ranked by the first pattern that matches the whole name; ranked
//! names come first in pattern order, and everything else follows sorted
//! lexicographically.

use std::collections::HashMap;

use attorder_common::warning::warn_once;
use regex::Regex;

use crate::error::{Error, Result};
use crate::tree::Attribute;

/// One compiled order pattern.
#[derive(Debug, Clone)]
struct OrderPattern {
    source: String,
    regex: Regex,
}

/// The compiled, immutable list of order patterns.
///
/// Patterns are compiled once here and shared by every tag of every document
/// processed with these settings.
#[derive(Debug, Clone, Default)]
pub struct OrderSettings {
    patterns: Vec<OrderPattern>,
}

impl OrderSettings {
    /// Compile the given patterns, in precedence order.
    ///
    /// Each pattern must match an attribute name completely: `id` matches
    /// `id` but not `idref`, and `id|class` matches either name.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Pattern`] for the first pattern that is not a valid
    /// regular expression.
    pub fn new<I, S>(patterns: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let patterns = patterns
            .into_iter()
            .map(|pattern| {
                let source = pattern.as_ref().to_string();
                match Regex::new(&format!("^(?:{source})$")) {
                    Ok(regex) => Ok(OrderPattern { source, regex }),
                    Err(error) => Err(Error::Pattern {
                        pattern: source,
                        source: error,
                    }),
                }
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { patterns })
    }

    /// The patterns as the user wrote them.
    pub fn patterns(&self) -> impl Iterator<Item = &str> {
        self.patterns.iter().map(|pattern| pattern.source.as_str())
    }

    /// Whether no patterns were given. Every tag is then sorted
    /// lexicographically.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// The index of the first pattern matching `name`, if any.
    #[must_use]
    pub fn rank(&self, name: &str) -> Option<usize> {
        self.patterns
            .iter()
            .position(|pattern| pattern.regex.is_match(name))
    }

    /// Compute the final order of a tag's attribute names.
    ///
    /// Names matched by a pattern come first, ordered by the pattern that
    /// matched them. Names matched by the same pattern keep their source
    /// order. Unmatched names follow in ordinal string order.
    #[must_use]
    pub fn order_names<'a>(&self, names: &[&'a str]) -> Vec<&'a str> {
        let mut matched = Vec::with_capacity(names.len());
        let mut unmatched = Vec::new();
        for &name in names {
            match self.rank(name) {
                Some(rank) => matched.push((rank, name)),
                None => unmatched.push(name),
            }
        }

        // Stable: equal ranks stay in source order
        matched.sort_by_key(|&(rank, _)| rank);
        unmatched.sort_unstable();

        matched
            .into_iter()
            .map(|(_, name)| name)
            .chain(unmatched)
            .collect()
    }

    /// Permute a tag's attributes into their final order.
    ///
    /// When a name occurs more than once, the last occurrence wins: every
    /// slot that ends up holding that name renders the last attribute written
    /// with it.
    pub fn reorder(&self, attributes: &mut [Attribute]) {
        let mut last_by_name: HashMap<&str, usize> = HashMap::with_capacity(attributes.len());
        for (index, attribute) in attributes.iter().enumerate() {
            if last_by_name.insert(attribute.name(), index).is_some() {
                warn_once(
                    "Reorder",
                    &format!(
                        "duplicate attribute '{}' keeps only its last value",
                        attribute.name()
                    ),
                );
            }
        }

        let names: Vec<&str> = attributes.iter().map(Attribute::name).collect();
        let reordered: Vec<Attribute> = self
            .order_names(&names)
            .into_iter()
            .map(|name| attributes[last_by_name[name]].clone())
            .collect();

        for (slot, attribute) in attributes.iter_mut().zip(reordered) {
            *slot = attribute;
        }
    }
}
