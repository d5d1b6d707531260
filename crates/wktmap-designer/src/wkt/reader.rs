//! WKT tokenizer and recursive-descent reader.

use wktmap_core::{Coordinate, Geometry, Polygon, WktError};

/// Geometry keywords defined by the WKT grammar that cannot be drawn here.
const UNSUPPORTED_KEYWORDS: &[&str] = &[
    "LINESTRING",
    "MULTIPOINT",
    "MULTILINESTRING",
    "MULTIPOLYGON",
    "GEOMETRYCOLLECTION",
    "CIRCULARSTRING",
    "COMPOUNDCURVE",
    "CURVEPOLYGON",
    "MULTICURVE",
    "MULTISURFACE",
    "CURVE",
    "SURFACE",
    "POLYHEDRALSURFACE",
    "TIN",
    "TRIANGLE",
];

/// Dimension qualifiers that may follow a geometry keyword.
const DIMENSION_TAGS: &[&str] = &["Z", "M", "ZM"];

#[derive(Debug, Clone, PartialEq)]
enum Token {
    Word(String),
    Number(f64),
    LeftParen,
    RightParen,
    Comma,
}

impl Token {
    fn describe(&self) -> String {
        match self {
            Token::Word(w) => format!("'{}'", w),
            Token::Number(n) => format!("number {}", n),
            Token::LeftParen => "'('".to_string(),
            Token::RightParen => "')'".to_string(),
            Token::Comma => "','".to_string(),
        }
    }
}

fn tokenize(input: &str) -> Result<Vec<(usize, Token)>, WktError> {
    let mut tokens = Vec::new();
    let mut chars = input.char_indices().peekable();

    while let Some(&(start, c)) = chars.peek() {
        match c {
            c if c.is_whitespace() => {
                chars.next();
            }
            '(' => {
                chars.next();
                tokens.push((start, Token::LeftParen));
            }
            ')' => {
                chars.next();
                tokens.push((start, Token::RightParen));
            }
            ',' => {
                chars.next();
                tokens.push((start, Token::Comma));
            }
            c if c.is_ascii_alphabetic() => {
                let mut end = start;
                while let Some(&(i, c)) = chars.peek() {
                    if !c.is_ascii_alphanumeric() && c != '_' {
                        break;
                    }
                    end = i + c.len_utf8();
                    chars.next();
                }
                tokens.push((start, Token::Word(input[start..end].to_string())));
            }
            c if c.is_ascii_digit() || matches!(c, '-' | '+' | '.') => {
                let mut end = start;
                while let Some(&(i, c)) = chars.peek() {
                    if !(c.is_ascii_digit() || matches!(c, '-' | '+' | '.' | 'e' | 'E')) {
                        break;
                    }
                    end = i + c.len_utf8();
                    chars.next();
                }
                let text = &input[start..end];
                let value = text
                    .parse::<f64>()
                    .map_err(|_| WktError::parse(start, format!("invalid number '{}'", text)))?;
                if !value.is_finite() {
                    return Err(WktError::parse(
                        start,
                        format!("number '{}' is out of range", text),
                    ));
                }
                tokens.push((start, Token::Number(value)));
            }
            other => {
                return Err(WktError::parse(
                    start,
                    format!("unexpected character '{}'", other),
                ));
            }
        }
    }

    Ok(tokens)
}

struct Reader {
    tokens: Vec<(usize, Token)>,
    index: usize,
    end: usize,
}

impl Reader {
    fn new(tokens: Vec<(usize, Token)>, end: usize) -> Self {
        Self {
            tokens,
            index: 0,
            end,
        }
    }

    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.index).map(|(_, t)| t)
    }

    fn position(&self) -> usize {
        self.tokens
            .get(self.index)
            .map(|(pos, _)| *pos)
            .unwrap_or(self.end)
    }

    fn advance(&mut self) -> Option<(usize, Token)> {
        let token = self.tokens.get(self.index).cloned();
        if token.is_some() {
            self.index += 1;
        }
        token
    }

    fn expect(&mut self, expected: Token) -> Result<(), WktError> {
        let position = self.position();
        match self.advance() {
            Some((_, token)) if token == expected => Ok(()),
            Some((_, token)) => Err(WktError::parse(
                position,
                format!("expected {}, found {}", expected.describe(), token.describe()),
            )),
            None => Err(WktError::parse(
                position,
                format!("expected {}, found end of input", expected.describe()),
            )),
        }
    }

    fn number(&mut self) -> Result<f64, WktError> {
        let position = self.position();
        match self.advance() {
            Some((_, Token::Number(n))) => Ok(n),
            Some((_, token)) => Err(WktError::parse(
                position,
                format!("expected number, found {}", token.describe()),
            )),
            None => Err(WktError::parse(
                position,
                "expected number, found end of input",
            )),
        }
    }

    /// Reads an `x y` pair and rejects any further ordinate.
    fn coordinate(&mut self) -> Result<Coordinate, WktError> {
        let x = self.number()?;
        let y = match self.peek() {
            Some(Token::Number(_)) => self.number()?,
            _ => {
                return Err(WktError::parse(
                    self.position(),
                    "expected 2 ordinates per coordinate, found 1",
                ))
            }
        };
        if let Some(Token::Number(_)) = self.peek() {
            return Err(WktError::parse(
                self.position(),
                "expected 2 ordinates per coordinate, found more",
            ));
        }
        Ok(Coordinate::new(x, y))
    }

    /// Reads `( coord, coord, ... )`.
    fn coordinate_list(&mut self) -> Result<Vec<Coordinate>, WktError> {
        self.expect(Token::LeftParen)?;
        let mut coords = vec![self.coordinate()?];
        while let Some(Token::Comma) = self.peek() {
            self.advance();
            coords.push(self.coordinate()?);
        }
        self.expect(Token::RightParen)?;
        Ok(coords)
    }

    fn point(&mut self) -> Result<Geometry, WktError> {
        self.expect(Token::LeftParen)?;
        let coord = self.coordinate()?;
        self.expect(Token::RightParen)?;
        Ok(Geometry::Point(coord))
    }

    fn polygon(&mut self) -> Result<Geometry, WktError> {
        self.expect(Token::LeftParen)?;
        let mut rings = vec![self.coordinate_list()?];
        while let Some(Token::Comma) = self.peek() {
            self.advance();
            rings.push(self.coordinate_list()?);
        }
        self.expect(Token::RightParen)?;

        if rings.len() > 1 {
            return Err(WktError::unsupported("POLYGON with interior rings"));
        }
        let outer = rings.remove(0);
        Polygon::new(outer)
            .map(Geometry::Polygon)
            .ok_or_else(|| WktError::parse(self.position(), "polygon ring has no coordinates"))
    }

    /// Rejects a `Z`/`M`/`ZM` qualifier or `EMPTY` following `keyword`.
    fn reject_qualifiers(&self, keyword: &str) -> Result<(), WktError> {
        if let Some(Token::Word(word)) = self.peek() {
            let upper = word.to_ascii_uppercase();
            if DIMENSION_TAGS.contains(&upper.as_str()) || upper == "EMPTY" {
                return Err(WktError::unsupported(format!("{} {}", keyword, upper)));
            }
            return Err(WktError::parse(
                self.position(),
                format!("unexpected '{}' after {}", word, keyword),
            ));
        }
        Ok(())
    }

    fn geometry(&mut self) -> Result<Geometry, WktError> {
        let position = self.position();
        let keyword = match self.advance() {
            Some((_, Token::Word(word))) => word.to_ascii_uppercase(),
            Some((_, token)) => {
                return Err(WktError::parse(
                    position,
                    format!("expected geometry type, found {}", token.describe()),
                ))
            }
            None => return Err(WktError::parse(position, "empty input")),
        };

        let geometry = match keyword.as_str() {
            "POINT" => {
                self.reject_qualifiers(&keyword)?;
                self.point()?
            }
            "POLYGON" => {
                self.reject_qualifiers(&keyword)?;
                self.polygon()?
            }
            k if UNSUPPORTED_KEYWORDS.contains(&k) => {
                return Err(WktError::unsupported(keyword.clone()));
            }
            _ => {
                return Err(WktError::parse(
                    position,
                    format!("unknown geometry type '{}'", keyword),
                ))
            }
        };

        if let Some(token) = self.peek() {
            return Err(WktError::parse(
                self.position(),
                format!("unexpected trailing {}", token.describe()),
            ));
        }
        Ok(geometry)
    }
}

/// Parses a WKT string into a [`Geometry`].
///
/// Keywords are case-insensitive. A polygon ring that is not closed in the
/// text is closed implicitly.
///
/// # Errors
///
/// [`WktError::Parse`] for text that does not follow the grammar,
/// [`WktError::UnsupportedGeometry`] for valid geometry types other than
/// `POINT` and `POLYGON`, and for `EMPTY`, `Z`/`M` and interior rings.
pub fn decode(text: &str) -> Result<Geometry, WktError> {
    tracing::trace!(wkt = text, "decoding WKT");
    let tokens = tokenize(text)?;
    Reader::new(tokens, text.len()).geometry()
}
