//! Structured property paths.
//!
//! Policies name properties with strings such as `"Order.Lines[].Sku"`.
//! Those strings are parsed once into a [`PropertyPath`] so that matching
//! during traversal is segment-wise rather than textual. A concrete index
//! (`[3]`) and the wildcard (`[]`) always match each other.

use crate::errors::{LikenessError, Result};
use std::fmt;

/// One step of a property path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Segment {
    /// A named property
    Field(String),
    /// A concrete collection position
    Index(usize),
    /// `[]`, any collection position
    AnyIndex,
}

impl Segment {
    fn matches(&self, other: &Segment) -> bool {
        match (self, other) {
            (Segment::Field(a), Segment::Field(b)) => a == b,
            (Segment::Index(_) | Segment::AnyIndex, Segment::Index(_) | Segment::AnyIndex) => true,
            _ => false,
        }
    }
}

/// A parsed property chain. The root path has no segments.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct PropertyPath {
    segments: Vec<Segment>,
}

impl PropertyPath {
    /// The empty path addressing the compared value itself
    pub fn root() -> Self {
        Self::default()
    }

    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Path of the named property below this one
    pub fn child(&self, name: &str) -> Self {
        let mut segments = self.segments.clone();
        segments.push(Segment::Field(name.to_string()));
        Self { segments }
    }

    /// Path of the element at `index` of the sequence addressed by this path
    pub fn index(&self, index: usize) -> Self {
        let mut segments = self.segments.clone();
        segments.push(Segment::Index(index));
        Self { segments }
    }

    /// This path followed by all segments of `tail`
    pub fn join(&self, tail: &PropertyPath) -> Self {
        let mut segments = self.segments.clone();
        segments.extend(tail.segments.iter().cloned());
        Self { segments }
    }

    /// Copy with every concrete index replaced by `[]`
    pub fn normalized(&self) -> Self {
        let segments = self
            .segments
            .iter()
            .map(|s| match s {
                Segment::Index(_) => Segment::AnyIndex,
                other => other.clone(),
            })
            .collect();
        Self { segments }
    }

    /// Segment-wise equality with indices normalized on both sides
    pub fn matches(&self, pattern: &PropertyPath) -> bool {
        self.segments.len() == pattern.segments.len() && self.starts_with(pattern)
    }

    /// True if `prefix` matches the leading segments of this path
    pub fn starts_with(&self, prefix: &PropertyPath) -> bool {
        prefix.segments.len() <= self.segments.len()
            && prefix
                .segments
                .iter()
                .zip(&self.segments)
                .all(|(p, s)| p.matches(s))
    }

    /// True if either path is a prefix of the other
    pub fn overlaps(&self, other: &PropertyPath) -> bool {
        self.starts_with(other) || other.starts_with(self)
    }

    /// Parse a policy path string.
    ///
    /// # Errors
    ///
    /// Returns a path error when the string is empty, contains an empty
    /// segment, or has a malformed `[...]` suffix.
    pub fn parse(text: &str) -> Result<Self> {
        if text.is_empty() {
            return Err(LikenessError::EmptyPath);
        }

        let mut segments = Vec::new();
        let mut chars = text.char_indices().peekable();
        let mut name = String::new();
        // position where the current dot-separated segment began
        let mut segment_start = 0;
        let mut segment_has_content = false;

        while let Some((pos, c)) = chars.next() {
            match c {
                '.' => {
                    if !name.is_empty() {
                        segments.push(Segment::Field(std::mem::take(&mut name)));
                    } else if !segment_has_content {
                        return Err(LikenessError::EmptySegment {
                            path: text.to_string(),
                            position: segment_start,
                        });
                    }
                    segment_start = pos + 1;
                    segment_has_content = false;
                }
                '[' => {
                    if !name.is_empty() {
                        segments.push(Segment::Field(std::mem::take(&mut name)));
                    }
                    let mut digits = String::new();
                    let mut closed = false;
                    for (_, d) in chars.by_ref() {
                        if d == ']' {
                            closed = true;
                            break;
                        }
                        digits.push(d);
                    }
                    if !closed {
                        return Err(LikenessError::UnclosedIndex {
                            path: text.to_string(),
                        });
                    }
                    if digits.is_empty() {
                        segments.push(Segment::AnyIndex);
                    } else {
                        let index = digits
                            .parse::<usize>()
                            .map_err(|_| LikenessError::InvalidIndex {
                                path: text.to_string(),
                                index: digits.clone(),
                            })?;
                        segments.push(Segment::Index(index));
                    }
                    segment_has_content = true;
                    // an index suffix ends a name; only '.', '[' or the end may follow
                    if let Some(&(next_pos, next)) = chars.peek() {
                        if next != '.' && next != '[' {
                            return Err(LikenessError::UnexpectedCharacter {
                                path: text.to_string(),
                                found: next,
                                position: next_pos,
                            });
                        }
                    }
                }
                ']' => {
                    return Err(LikenessError::UnexpectedCharacter {
                        path: text.to_string(),
                        found: c,
                        position: pos,
                    });
                }
                _ => {
                    name.push(c);
                    segment_has_content = true;
                }
            }
        }

        if !name.is_empty() {
            segments.push(Segment::Field(name));
        } else if !segment_has_content {
            return Err(LikenessError::EmptySegment {
                path: text.to_string(),
                position: segment_start,
            });
        }

        Ok(Self { segments })
    }
}

impl fmt::Display for PropertyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            match segment {
                Segment::Field(name) => {
                    if i > 0 {
                        f.write_str(".")?;
                    }
                    f.write_str(name)?;
                }
                Segment::Index(index) => write!(f, "[{}]", index)?,
                Segment::AnyIndex => f.write_str("[]")?,
            }
        }
        Ok(())
    }
}

impl std::str::FromStr for PropertyPath {
    type Err = LikenessError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(text: &str) -> PropertyPath {
        PropertyPath::parse(text).unwrap()
    }

    #[test]
    fn test_parse_dotted_and_indexed() {
        let path = p("Parent.ChildList[].Name");
        assert_eq!(
            path.segments(),
            &[
                Segment::Field("Parent".to_string()),
                Segment::Field("ChildList".to_string()),
                Segment::AnyIndex,
                Segment::Field("Name".to_string()),
            ]
        );
    }

    #[test]
    fn test_parse_leading_index() {
        let path = p("[3].Id");
        assert_eq!(
            path.segments(),
            &[Segment::Index(3), Segment::Field("Id".to_string())]
        );
    }

    #[test]
    fn test_display_round_trips_concrete_indices() {
        let path = PropertyPath::root().child("Lines").index(2).child("Sku");
        assert_eq!(path.to_string(), "Lines[2].Sku");
        assert_eq!(path.normalized().to_string(), "Lines[].Sku");
        assert_eq!(PropertyPath::root().index(1).child("Id").to_string(), "[1].Id");
    }

    #[test]
    fn test_root_is_empty() {
        assert!(PropertyPath::root().is_root());
        assert_eq!(PropertyPath::root().to_string(), "");
        assert!(!PropertyPath::root().index(0).is_root());
        let joined = PropertyPath::root().join(&p("A.B"));
        assert_eq!(joined, p("A.B"));
    }

    #[test]
    fn test_join_prefixes_item_paths() {
        let item = PropertyPath::root().index(1);
        let relative = PropertyPath::root().child("Id");
        assert_eq!(item.join(&relative).to_string(), "[1].Id");
        assert_eq!(item.join(&PropertyPath::root()), item);
    }

    #[test]
    fn test_concrete_index_matches_wildcard() {
        let concrete = PropertyPath::root().child("Lines").index(7).child("Sku");
        assert!(concrete.matches(&p("Lines[].Sku")));
        assert!(concrete.matches(&p("Lines[7].Sku")));
        assert!(!concrete.matches(&p("Lines[].Qty")));
        assert!(!concrete.matches(&p("Lines[]")));
    }

    #[test]
    fn test_overlaps_in_both_directions() {
        let include = p("Parent.ChildList[].Name");
        assert!(p("Parent").overlaps(&include));
        assert!(p("Parent.ChildList").overlaps(&include));
        assert!(p("Parent.ChildList[2].Name.First").overlaps(&include));
        assert!(!p("Parent.Child").overlaps(&include));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(PropertyPath::parse(""), Err(LikenessError::EmptyPath));
        assert!(matches!(
            PropertyPath::parse("A..B"),
            Err(LikenessError::EmptySegment { position: 2, .. })
        ));
        assert!(matches!(
            PropertyPath::parse("A."),
            Err(LikenessError::EmptySegment { .. })
        ));
        assert!(matches!(
            PropertyPath::parse("A[1"),
            Err(LikenessError::UnclosedIndex { .. })
        ));
        assert!(matches!(
            PropertyPath::parse("A[x]"),
            Err(LikenessError::InvalidIndex { .. })
        ));
        assert!(matches!(
            PropertyPath::parse("A[]B"),
            Err(LikenessError::UnexpectedCharacter { found: 'B', .. })
        ));
        assert!(matches!(
            PropertyPath::parse("A]"),
            Err(LikenessError::UnexpectedCharacter { found: ']', .. })
        ));
    }
}
