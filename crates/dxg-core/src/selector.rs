//! Child-combinator element selectors (`section > div > *`).
//!
//! Only tag names, the universal `*`, and the `>` combinator are supported.
//! That is the whole vocabulary the animator needs to pick its targets.

use std::fmt;
use std::str::FromStr;

use crate::errors::CoreError;

/// One compound in a selector chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagMatch {
    Any,
    Tag(String),
}

impl TagMatch {
    #[must_use]
    pub fn matches(&self, tag: &str) -> bool {
        match self {
            Self::Any => true,
            Self::Tag(name) => name.eq_ignore_ascii_case(tag),
        }
    }
}

/// A chain of compounds joined by `>`.
///
/// An element matches when its own tag matches the last compound and each
/// successive ancestor matches the preceding compounds, one level at a time.
/// The first compound may sit at any depth.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChildSelector {
    chain: Vec<TagMatch>,
}

impl ChildSelector {
    /// Compounds from outermost to innermost.
    #[must_use]
    pub fn chain(&self) -> &[TagMatch] {
        &self.chain
    }

    /// Test an element given its tag followed by its ancestors' tags,
    /// nearest ancestor first.
    #[must_use]
    pub fn matches_path<'a>(&self, mut tags: impl Iterator<Item = &'a str>) -> bool {
        self.chain
            .iter()
            .rev()
            .all(|compound| tags.next().is_some_and(|tag| compound.matches(tag)))
    }
}

impl Default for ChildSelector {
    /// `section > div > *`: the children of each section's wrapper div.
    fn default() -> Self {
        Self {
            chain: vec![
                TagMatch::Tag("section".to_string()),
                TagMatch::Tag("div".to_string()),
                TagMatch::Any,
            ],
        }
    }
}

impl FromStr for ChildSelector {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chain = Vec::new();
        for part in s.split('>') {
            let part = part.trim();
            if part.is_empty() {
                let message = format!("selector '{s}' has an empty compound");
                return Err(CoreError::Validation(message));
            }
            if part == "*" {
                chain.push(TagMatch::Any);
            } else if part.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
                chain.push(TagMatch::Tag(part.to_ascii_lowercase()));
            } else {
                let message = format!("selector '{s}': unsupported compound '{part}'");
                return Err(CoreError::Validation(message));
            }
        }
        Ok(Self { chain })
    }
}

impl fmt::Display for ChildSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, compound) in self.chain.iter().enumerate() {
            if i > 0 {
                f.write_str(" > ")?;
            }
            match compound {
                TagMatch::Any => f.write_str("*")?,
                TagMatch::Tag(name) => f.write_str(name)?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_default_animation_selector() {
        let selector: ChildSelector = "section > div > *".parse().unwrap();
        assert_eq!(
            selector.chain(),
            &[
                TagMatch::Tag("section".to_string()),
                TagMatch::Tag("div".to_string()),
                TagMatch::Any,
            ]
        );
        assert_eq!(selector.to_string(), "section > div > *");
        assert_eq!(selector, ChildSelector::default());
    }

    #[test]
    fn rejects_empty_and_unsupported_compounds() {
        assert!("section >> div".parse::<ChildSelector>().is_err());
        assert!("".parse::<ChildSelector>().is_err());
        assert!("div.card".parse::<ChildSelector>().is_err());
        assert!("section div".parse::<ChildSelector>().is_err());
    }

    #[test]
    fn matches_exact_ancestor_chain() {
        let selector: ChildSelector = "section > div > *".parse().unwrap();
        let nested = ["h3", "div", "section", "body"];
        assert!(selector.matches_path(nested.into_iter()));
        assert!(selector.matches_path(["p", "div", "section"].into_iter()));
        assert!(!selector.matches_path(["p", "section", "div"].into_iter()));
        assert!(!selector.matches_path(["div", "section"].into_iter()));
    }

    #[test]
    fn tag_match_is_case_insensitive() {
        let selector: ChildSelector = "SECTION > Div".parse().unwrap();
        assert!(selector.matches_path(["div", "section"].into_iter()));
    }
}
