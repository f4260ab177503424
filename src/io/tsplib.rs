//! TSPLIB instance parser.
//!
//! Supports the subset of the TSPLIB exchange format the solver consumes:
//! `EXPLICIT` upper-row weight sections and `EUC_2D`/`ATT` coordinate
//! sections. Header keywords are located by scanning the whole file, so
//! their order does not matter. A line equal to `EOF` ends the data but is
//! not required.

use crate::distance::DistanceMatrix;
use crate::models::Point;
use std::error::Error;
use std::fmt;
use std::fs;
use std::io;
use std::path::Path;
use std::str::FromStr;

/// Supported `EDGE_WEIGHT_TYPE` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeWeightType {
    /// Upper-triangular weights listed in an `EDGE_WEIGHT_SECTION`.
    Explicit,
    /// Rounded Euclidean distances from a `NODE_COORD_SECTION`.
    Euc2d,
    /// Pseudo-Euclidean distances from a `NODE_COORD_SECTION`.
    Att,
}

impl FromStr for EdgeWeightType {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, ParseError> {
        match s {
            "EXPLICIT" => Ok(Self::Explicit),
            "EUC_2D" => Ok(Self::Euc2d),
            "ATT" => Ok(Self::Att),
            other => Err(ParseError::UnsupportedWeightType(other.to_string())),
        }
    }
}

impl fmt::Display for EdgeWeightType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let token = match self {
            Self::Explicit => "EXPLICIT",
            Self::Euc2d => "EUC_2D",
            Self::Att => "ATT",
        };
        f.write_str(token)
    }
}

/// Errors produced while decoding an instance file.
///
/// No partially populated instance ever escapes the parser: every error
/// path returns before a [`TsplibInstance`] is built.
#[derive(Debug)]
pub enum ParseError {
    /// The file could not be read.
    Io(io::Error),
    /// A required header keyword was not found.
    MissingKeyword(&'static str),
    /// `DIMENSION` was not a positive integer.
    InvalidDimension(String),
    /// `EDGE_WEIGHT_TYPE` is not one of EXPLICIT, EUC_2D, ATT.
    UnsupportedWeightType(String),
    /// A required data section was not found.
    MissingSection(&'static str),
    /// A `NODE_COORD_SECTION` line did not parse as `<id> <x> <y>`.
    MalformedCoord(String),
    /// The node id on a coordinate line is not in `1..=dimension`.
    InvalidNodeId(usize),
    /// An `EDGE_WEIGHT_SECTION` token did not parse as an integer.
    MalformedWeight(String),
    /// A data section ended before enough values were read.
    UnexpectedEof(&'static str),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "cannot read instance file: {err}"),
            Self::MissingKeyword(keyword) => write!(f, "keyword {keyword} not found"),
            Self::InvalidDimension(value) => {
                write!(f, "DIMENSION must be a positive integer, got '{value}'")
            }
            Self::UnsupportedWeightType(value) => write!(
                f,
                "unsupported EDGE_WEIGHT_TYPE '{value}' (supported: EXPLICIT, EUC_2D, ATT)"
            ),
            Self::MissingSection(section) => write!(f, "section {section} not found"),
            Self::MalformedCoord(line) => write!(f, "malformed coordinate line '{line}'"),
            Self::InvalidNodeId(id) => write!(f, "node id {id} out of range"),
            Self::MalformedWeight(token) => write!(f, "malformed edge weight '{token}'"),
            Self::UnexpectedEof(section) => {
                write!(f, "unexpected end of data in {section}")
            }
        }
    }
}

impl Error for ParseError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for ParseError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

/// A decoded TSPLIB instance: a dimension plus a fully populated symmetric
/// distance matrix, ready for the solver.
#[derive(Debug)]
pub struct TsplibInstance {
    /// Optional `NAME` header value.
    pub name: Option<String>,
    /// Number of nodes, always `> 0`.
    pub dimension: usize,
    /// The weight type the matrix was built from.
    pub weight_type: EdgeWeightType,
    /// The distance matrix, symmetric with zero diagonal.
    pub matrix: DistanceMatrix,
}

/// Reads and decodes an instance file.
pub fn load_instance(path: impl AsRef<Path>) -> Result<TsplibInstance, ParseError> {
    let text = fs::read_to_string(path)?;
    parse_instance(&text)
}

/// Decodes an instance from its full text.
///
/// # Examples
///
/// ```
/// use tsp_approx::io::tsplib::parse_instance;
///
/// let text = "\
/// DIMENSION : 3
/// EDGE_WEIGHT_TYPE : EXPLICIT
/// EDGE_WEIGHT_SECTION
/// 10 15
/// 20
/// EOF
/// ";
/// let instance = parse_instance(text).unwrap();
/// assert_eq!(instance.dimension, 3);
/// assert_eq!(instance.matrix.get(1, 2), Some(20));
/// ```
pub fn parse_instance(text: &str) -> Result<TsplibInstance, ParseError> {
    let dimension_raw =
        keyword_value(text, "DIMENSION").ok_or(ParseError::MissingKeyword("DIMENSION"))?;
    let dimension: usize = dimension_raw
        .parse()
        .map_err(|_| ParseError::InvalidDimension(dimension_raw.clone()))?;
    if dimension == 0 {
        return Err(ParseError::InvalidDimension(dimension_raw));
    }

    let weight_raw = keyword_value(text, "EDGE_WEIGHT_TYPE")
        .ok_or(ParseError::MissingKeyword("EDGE_WEIGHT_TYPE"))?;
    let weight_type: EdgeWeightType = weight_raw.parse()?;

    let name = keyword_value(text, "NAME").filter(|value| !value.is_empty());

    let matrix = match weight_type {
        EdgeWeightType::Explicit => parse_weight_section(text, dimension)?,
        EdgeWeightType::Euc2d => {
            let points = parse_coord_section(text, dimension)?;
            DistanceMatrix::from_points(&points, Point::euc_2d)
        }
        EdgeWeightType::Att => {
            let points = parse_coord_section(text, dimension)?;
            DistanceMatrix::from_points(&points, Point::att)
        }
    };

    Ok(TsplibInstance {
        name,
        dimension,
        weight_type,
        matrix,
    })
}

/// Finds the first line starting with `keyword` and returns the value after
/// the `:` separator (or after the keyword itself when no `:` is present).
fn keyword_value(text: &str, keyword: &str) -> Option<String> {
    for line in text.lines() {
        let trimmed = line.trim();
        if let Some(rest) = trimmed.strip_prefix(keyword) {
            let value = match rest.find(':') {
                Some(pos) => &rest[pos + 1..],
                None => rest,
            };
            return Some(value.trim().to_string());
        }
    }
    None
}

/// Parses `NODE_COORD_SECTION`: `dimension` lines of `<id> <x> <y>` with
/// 1-indexed ids mapped to 0-indexed slots.
fn parse_coord_section(text: &str, dimension: usize) -> Result<Vec<Point>, ParseError> {
    let mut lines = text.lines();
    if !lines.any(|line| line.trim() == "NODE_COORD_SECTION") {
        return Err(ParseError::MissingSection("NODE_COORD_SECTION"));
    }

    let mut points = vec![Point::new(0.0, 0.0); dimension];
    for _ in 0..dimension {
        let line = lines
            .next()
            .ok_or(ParseError::UnexpectedEof("NODE_COORD_SECTION"))?;
        let mut fields = line.split_whitespace();
        let (id, x, y) = match (fields.next(), fields.next(), fields.next()) {
            (Some(id), Some(x), Some(y)) => {
                let id: usize = id
                    .parse()
                    .map_err(|_| ParseError::MalformedCoord(line.to_string()))?;
                let x: f64 = x
                    .parse()
                    .map_err(|_| ParseError::MalformedCoord(line.to_string()))?;
                let y: f64 = y
                    .parse()
                    .map_err(|_| ParseError::MalformedCoord(line.to_string()))?;
                (id, x, y)
            }
            _ => return Err(ParseError::MalformedCoord(line.to_string())),
        };
        if id == 0 || id > dimension {
            return Err(ParseError::InvalidNodeId(id));
        }
        points[id - 1] = Point::new(x, y);
    }

    Ok(points)
}

/// Parses `EDGE_WEIGHT_SECTION` in upper-row format: `n(n-1)/2` integers,
/// whitespace/newline delimited, mirrored into both triangles.
fn parse_weight_section(text: &str, dimension: usize) -> Result<DistanceMatrix, ParseError> {
    let mut lines = text.lines();
    if !lines.any(|line| line.trim() == "EDGE_WEIGHT_SECTION") {
        return Err(ParseError::MissingSection("EDGE_WEIGHT_SECTION"));
    }

    let mut matrix = DistanceMatrix::new(dimension);
    let mut tokens = lines
        .flat_map(str::split_whitespace)
        .take_while(|token| *token != "EOF");

    for i in 0..dimension {
        for j in (i + 1)..dimension {
            let token = tokens
                .next()
                .ok_or(ParseError::UnexpectedEof("EDGE_WEIGHT_SECTION"))?;
            let value: i64 = token
                .parse()
                .map_err(|_| ParseError::MalformedWeight(token.to_string()))?;
            matrix.set(i, j, value);
            matrix.set(j, i, value);
        }
    }

    Ok(matrix)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_explicit() {
        let text = "\
NAME : tiny3
DIMENSION : 3
EDGE_WEIGHT_TYPE : EXPLICIT
EDGE_WEIGHT_SECTION
10 15
20
EOF
";
        let instance = parse_instance(text).expect("valid instance");
        assert_eq!(instance.name.as_deref(), Some("tiny3"));
        assert_eq!(instance.dimension, 3);
        assert_eq!(instance.weight_type, EdgeWeightType::Explicit);
        assert_eq!(instance.matrix.get(0, 1), Some(10));
        assert_eq!(instance.matrix.get(0, 2), Some(15));
        assert_eq!(instance.matrix.get(1, 2), Some(20));
        assert_eq!(instance.matrix.get(2, 1), Some(20));
        assert_eq!(instance.matrix.get(1, 1), Some(0));
        assert!(instance.matrix.is_symmetric());
    }

    #[test]
    fn test_parse_euc_2d() {
        let text = "\
DIMENSION : 4
EDGE_WEIGHT_TYPE : EUC_2D
NODE_COORD_SECTION
1 0.0 0.0
2 10.0 0.0
3 10.0 10.0
4 0.0 10.0
EOF
";
        let instance = parse_instance(text).expect("valid instance");
        assert_eq!(instance.dimension, 4);
        assert_eq!(instance.matrix.get(0, 1), Some(10));
        // Diagonal of the square: round(sqrt(200)) = 14.
        assert_eq!(instance.matrix.get(0, 2), Some(14));
        assert!(instance.matrix.is_symmetric());
    }

    #[test]
    fn test_parse_att_fills_matrix() {
        let text = "\
DIMENSION : 3
EDGE_WEIGHT_TYPE : ATT
NODE_COORD_SECTION
1 0.0 0.0
2 10.0 0.0
3 0.0 30.0
EOF
";
        let instance = parse_instance(text).expect("valid instance");
        // Every off-diagonal entry must be populated, both triangles.
        assert_eq!(instance.matrix.get(0, 1), Some(3));
        assert_eq!(instance.matrix.get(1, 0), Some(3));
        assert_eq!(instance.matrix.get(0, 2), instance.matrix.get(2, 0));
        assert!(instance.matrix.is_symmetric());
    }

    #[test]
    fn test_parse_coords_out_of_order() {
        let text = "\
DIMENSION : 2
EDGE_WEIGHT_TYPE : EUC_2D
NODE_COORD_SECTION
2 3.0 4.0
1 0.0 0.0
EOF
";
        let instance = parse_instance(text).expect("valid instance");
        assert_eq!(instance.matrix.get(0, 1), Some(5));
    }

    #[test]
    fn test_missing_dimension() {
        let text = "EDGE_WEIGHT_TYPE : EXPLICIT\n";
        assert!(matches!(
            parse_instance(text),
            Err(ParseError::MissingKeyword("DIMENSION"))
        ));
    }

    #[test]
    fn test_missing_weight_type() {
        let text = "DIMENSION : 3\n";
        assert!(matches!(
            parse_instance(text),
            Err(ParseError::MissingKeyword("EDGE_WEIGHT_TYPE"))
        ));
    }

    #[test]
    fn test_invalid_dimension() {
        for text in ["DIMENSION : abc\nEDGE_WEIGHT_TYPE : EXPLICIT\n",
                     "DIMENSION : 0\nEDGE_WEIGHT_TYPE : EXPLICIT\n"] {
            assert!(matches!(
                parse_instance(text),
                Err(ParseError::InvalidDimension(_))
            ));
        }
    }

    #[test]
    fn test_unsupported_weight_type() {
        let text = "DIMENSION : 3\nEDGE_WEIGHT_TYPE : CEIL_2D\n";
        match parse_instance(text) {
            Err(ParseError::UnsupportedWeightType(value)) => assert_eq!(value, "CEIL_2D"),
            other => panic!("expected UnsupportedWeightType, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_section() {
        let text = "DIMENSION : 3\nEDGE_WEIGHT_TYPE : EXPLICIT\n";
        assert!(matches!(
            parse_instance(text),
            Err(ParseError::MissingSection("EDGE_WEIGHT_SECTION"))
        ));
    }

    #[test]
    fn test_truncated_weight_section() {
        let text = "\
DIMENSION : 3
EDGE_WEIGHT_TYPE : EXPLICIT
EDGE_WEIGHT_SECTION
10 15
EOF
";
        assert!(matches!(
            parse_instance(text),
            Err(ParseError::UnexpectedEof("EDGE_WEIGHT_SECTION"))
        ));
    }

    #[test]
    fn test_truncated_coord_section() {
        let text = "\
DIMENSION : 3
EDGE_WEIGHT_TYPE : EUC_2D
NODE_COORD_SECTION
1 0.0 0.0
";
        assert!(matches!(
            parse_instance(text),
            Err(ParseError::UnexpectedEof("NODE_COORD_SECTION"))
        ));
    }

    #[test]
    fn test_malformed_coord_line() {
        let text = "\
DIMENSION : 2
EDGE_WEIGHT_TYPE : EUC_2D
NODE_COORD_SECTION
1 0.0 0.0
2 oops 1.0
";
        assert!(matches!(
            parse_instance(text),
            Err(ParseError::MalformedCoord(_))
        ));
    }

    #[test]
    fn test_coord_node_id_out_of_range() {
        let text = "\
DIMENSION : 2
EDGE_WEIGHT_TYPE : EUC_2D
NODE_COORD_SECTION
1 0.0 0.0
5 1.0 1.0
";
        assert!(matches!(
            parse_instance(text),
            Err(ParseError::InvalidNodeId(5))
        ));
    }

    #[test]
    fn test_eof_line_not_required() {
        let text = "\
DIMENSION : 2
EDGE_WEIGHT_TYPE : EXPLICIT
EDGE_WEIGHT_SECTION
7
";
        let instance = parse_instance(text).expect("valid instance");
        assert_eq!(instance.matrix.get(0, 1), Some(7));
    }

    #[test]
    fn test_headers_in_any_order() {
        let text = "\
EDGE_WEIGHT_TYPE : EXPLICIT
DIMENSION : 2
EDGE_WEIGHT_SECTION
4
EOF
";
        let instance = parse_instance(text).expect("valid instance");
        assert_eq!(instance.dimension, 2);
    }

    #[test]
    fn test_weight_type_display_round_trips() {
        for wt in [
            EdgeWeightType::Explicit,
            EdgeWeightType::Euc2d,
            EdgeWeightType::Att,
        ] {
            let parsed: EdgeWeightType = wt.to_string().parse().expect("round trip");
            assert_eq!(parsed, wt);
        }
    }
}
