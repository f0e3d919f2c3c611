//! Line classification for OBJ geometry records
//!
//! Every line of an OBJ file is either a comment, blank, or a record made of
//! a tag followed by whitespace-separated fields. Only vertex records (`v`)
//! carry data this crate cares about.

use crate::error::{ObjError, Result};

/// Tag of a geometric vertex record
pub const VERTEX_TAG: &str = "v";

/// Leading character of a comment line
pub const COMMENT_PREFIX: char = '#';

/// A single classified line of an OBJ file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Record<'a> {
    /// Comment line (first non-whitespace character is `#`)
    Comment,
    /// Line without any tokens
    Blank,
    /// Geometric vertex record; `fields` is everything after the tag
    Vertex {
        /// Unparsed fields following the `v` tag
        fields: &'a str,
    },
    /// Any other record type (faces, normals, groups, materials, ...)
    Other {
        /// The record tag
        tag: &'a str,
    },
}

impl<'a> Record<'a> {
    /// Classifies a raw line
    ///
    /// # Examples
    ///
    /// ```
    /// use obj_stat::record::Record;
    ///
    /// assert_eq!(Record::classify("  # exported"), Record::Comment);
    /// assert_eq!(Record::classify("\t "), Record::Blank);
    /// assert_eq!(Record::classify("f 1 2 3"), Record::Other { tag: "f" });
    /// assert!(matches!(Record::classify("v 0 0 0"), Record::Vertex { .. }));
    /// ```
    pub fn classify(line: &'a str) -> Self {
        let trimmed = line.trim_start();

        if trimmed.starts_with(COMMENT_PREFIX) {
            return Self::Comment;
        }

        let Some(tag) = trimmed.split_whitespace().next() else {
            return Self::Blank;
        };

        if tag == VERTEX_TAG {
            Self::Vertex {
                fields: &trimmed[tag.len()..],
            }
        } else {
            Self::Other { tag }
        }
    }
}

/// A point parsed from a vertex record
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VertexPoint {
    /// X coordinate
    pub x: f64,
    /// Y coordinate
    pub y: f64,
    /// Z coordinate
    pub z: f64,
}

impl VertexPoint {
    /// Creates a new point
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Parses the first three fields of a vertex record
    ///
    /// Fields beyond the third (a `w` weight or vertex colours) are ignored.
    /// `line` and `raw` only feed the error report.
    pub fn parse(fields: &str, line: usize, raw: &str) -> Result<Self> {
        let mut tokens = fields.split_whitespace();
        let mut coords = [0.0_f64; 3];

        for (axis, slot) in ["x", "y", "z"].into_iter().zip(coords.iter_mut()) {
            let token = tokens
                .next()
                .ok_or_else(|| ObjError::parse(line, raw, format!("missing {axis} coordinate")))?;

            *slot = token.parse::<f64>().map_err(|e| {
                ObjError::parse(line, raw, format!("invalid {axis} coordinate '{token}': {e}"))
            })?;
        }

        let [x, y, z] = coords;
        Ok(Self { x, y, z })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_comments() {
        assert_eq!(Record::classify("# Blender 4.1"), Record::Comment);
        assert_eq!(Record::classify("   #indented"), Record::Comment);
        assert_eq!(Record::classify("#"), Record::Comment);
    }

    #[test]
    fn test_classify_blank() {
        assert_eq!(Record::classify(""), Record::Blank);
        assert_eq!(Record::classify("   \t  "), Record::Blank);
    }

    #[test]
    fn test_classify_vertex() {
        assert_eq!(
            Record::classify("v 1.0 2.0 3.0"),
            Record::Vertex {
                fields: " 1.0 2.0 3.0"
            }
        );
        assert_eq!(
            Record::classify("  v\t1 2 3"),
            Record::Vertex { fields: "\t1 2 3" }
        );
    }

    #[test]
    fn test_classify_other_tags() {
        // Vertex-like tags are distinct record types
        assert_eq!(Record::classify("vn 0 1 0"), Record::Other { tag: "vn" });
        assert_eq!(Record::classify("vt 0.5 0.5"), Record::Other { tag: "vt" });
        assert_eq!(Record::classify("f 1 2 3"), Record::Other { tag: "f" });
        assert_eq!(
            Record::classify("mtllib cube.mtl"),
            Record::Other { tag: "mtllib" }
        );
        // Tag comparison is exact
        assert_eq!(Record::classify("V 1 2 3"), Record::Other { tag: "V" });
    }

    #[test]
    fn test_parse_vertex() {
        let point = VertexPoint::parse(" 1.5 -2 3e2", 1, "v 1.5 -2 3e2").unwrap();
        assert_eq!(point, VertexPoint::new(1.5, -2.0, 300.0));
    }

    #[test]
    fn test_parse_vertex_ignores_extra_fields() {
        let point = VertexPoint::parse(" 1 2 3 1.0 0.5 0.5 0.5", 1, "").unwrap();
        assert_eq!(point, VertexPoint::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_parse_vertex_missing_field() {
        let err = VertexPoint::parse(" 1.0 2.0", 7, "v 1.0 2.0").unwrap_err();
        match err {
            ObjError::Parse {
                line,
                content,
                reason,
            } => {
                assert_eq!(line, 7);
                assert_eq!(content, "v 1.0 2.0");
                assert_eq!(reason, "missing z coordinate");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_parse_vertex_non_numeric() {
        let err = VertexPoint::parse(" 1.0 abc 2.0", 3, "v 1.0 abc 2.0").unwrap_err();
        assert!(matches!(err, ObjError::Parse { line: 3, .. }));
        assert!(err.to_string().contains("invalid y coordinate 'abc'"));
    }
}
