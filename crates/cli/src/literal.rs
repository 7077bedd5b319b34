//! Safe structured-literal parser.
//!
//! Accepts a small, data-only literal syntax and produces a JSON value:
//!
//! - objects `{key: value, ...}` with quoted string keys
//! - arrays `[...]` and tuples `(...)`, both read as arrays
//! - strings in single or double quotes, escapes `\\ \' \" \n \t \r`
//! - integers and floats with an optional sign and exponent
//! - `True`/`False`/`None` and `true`/`false`/`null`
//!
//! Trailing commas are allowed. Nothing is ever evaluated.

use serde_json::{Map, Number, Value};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LiteralError {
    #[error("unexpected end of input at offset {offset}")]
    UnexpectedEnd { offset: usize },

    #[error("unexpected character {found:?} at offset {offset}")]
    Unexpected { found: char, offset: usize },

    #[error("invalid number {text:?} at offset {offset}")]
    InvalidNumber { text: String, offset: usize },

    #[error("invalid escape '\\{found}' at offset {offset}")]
    InvalidEscape { found: char, offset: usize },

    #[error("object keys must be strings (offset {offset})")]
    NonStringKey { offset: usize },

    #[error("unknown name {name:?} at offset {offset}")]
    UnknownName { name: String, offset: usize },
}

/// Parse a complete literal. Anything after the value other than whitespace
/// is an error.
pub fn parse(input: &str) -> Result<Value, LiteralError> {
    let mut parser = Parser { src: input, pos: 0 };
    let value = parser.value()?;
    parser.skip_ws();
    match parser.peek() {
        None => Ok(value),
        Some(found) => Err(LiteralError::Unexpected {
            found,
            offset: parser.pos,
        }),
    }
}

struct Parser<'a> {
    src: &'a str,
    pos: usize,
}

impl Parser<'_> {
    fn peek(&self) -> Option<char> {
        self.src[self.pos..].chars().next()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    fn skip_ws(&mut self) {
        while self.peek().is_some_and(char::is_whitespace) {
            self.bump();
        }
    }

    fn expect(&mut self, want: char) -> Result<(), LiteralError> {
        match self.bump() {
            Some(c) if c == want => Ok(()),
            Some(found) => Err(LiteralError::Unexpected {
                found,
                offset: self.pos - found.len_utf8(),
            }),
            None => Err(self.end()),
        }
    }

    fn end(&self) -> LiteralError {
        LiteralError::UnexpectedEnd { offset: self.pos }
    }

    fn value(&mut self) -> Result<Value, LiteralError> {
        self.skip_ws();
        match self.peek() {
            None => Err(self.end()),
            Some('{') => self.object(),
            Some('[') => self.sequence('[', ']'),
            Some('(') => self.sequence('(', ')'),
            Some(q @ ('\'' | '"')) => self.string(q).map(Value::String),
            Some(c) if c == '-' || c == '+' || c == '.' || c.is_ascii_digit() => self.number(),
            Some(c) if c.is_alphabetic() || c == '_' => self.name(),
            Some(found) => Err(LiteralError::Unexpected {
                found,
                offset: self.pos,
            }),
        }
    }

    fn object(&mut self) -> Result<Value, LiteralError> {
        self.expect('{')?;
        let mut map = Map::new();
        loop {
            self.skip_ws();
            match self.peek() {
                Some('}') => {
                    self.bump();
                    return Ok(Value::Object(map));
                }
                Some(q @ ('\'' | '"')) => {
                    let key = self.string(q)?;
                    self.skip_ws();
                    self.expect(':')?;
                    let value = self.value()?;
                    map.insert(key, value);
                }
                Some(_) => return Err(LiteralError::NonStringKey { offset: self.pos }),
                None => return Err(self.end()),
            }

            self.skip_ws();
            match self.bump() {
                Some(',') => {}
                Some('}') => return Ok(Value::Object(map)),
                Some(found) => {
                    return Err(LiteralError::Unexpected {
                        found,
                        offset: self.pos - found.len_utf8(),
                    });
                }
                None => return Err(self.end()),
            }
        }
    }

    fn sequence(&mut self, open: char, close: char) -> Result<Value, LiteralError> {
        self.expect(open)?;
        let mut items = Vec::new();
        loop {
            self.skip_ws();
            if self.peek() == Some(close) {
                self.bump();
                return Ok(Value::Array(items));
            }
            items.push(self.value()?);

            self.skip_ws();
            match self.bump() {
                Some(',') => {}
                Some(c) if c == close => return Ok(Value::Array(items)),
                Some(found) => {
                    return Err(LiteralError::Unexpected {
                        found,
                        offset: self.pos - found.len_utf8(),
                    });
                }
                None => return Err(self.end()),
            }
        }
    }

    fn string(&mut self, quote: char) -> Result<String, LiteralError> {
        self.expect(quote)?;
        let mut out = String::new();
        loop {
            match self.bump() {
                None => return Err(self.end()),
                Some(c) if c == quote => return Ok(out),
                Some('\\') => {
                    let offset = self.pos - 1;
                    match self.bump() {
                        Some('n') => out.push('\n'),
                        Some('t') => out.push('\t'),
                        Some('r') => out.push('\r'),
                        Some(c @ ('\\' | '\'' | '"')) => out.push(c),
                        Some(found) => return Err(LiteralError::InvalidEscape { found, offset }),
                        None => return Err(self.end()),
                    }
                }
                Some(c) => out.push(c),
            }
        }
    }

    fn number(&mut self) -> Result<Value, LiteralError> {
        let start = self.pos;
        if matches!(self.peek(), Some('-' | '+')) {
            self.bump();
        }
        let mut is_float = false;
        while let Some(c) = self.peek() {
            match c {
                '0'..='9' => {}
                '.' => is_float = true,
                'e' | 'E' => {
                    is_float = true;
                    self.bump();
                    if matches!(self.peek(), Some('-' | '+')) {
                        self.bump();
                    }
                    continue;
                }
                _ => break,
            }
            self.bump();
        }

        let text = &self.src[start..self.pos];
        let digits = text.strip_prefix('+').unwrap_or(text);
        let invalid = || LiteralError::InvalidNumber {
            text: text.to_string(),
            offset: start,
        };

        let number = if is_float {
            digits
                .parse::<f64>()
                .ok()
                .and_then(Number::from_f64)
                .ok_or_else(invalid)?
        } else if let Ok(n) = digits.parse::<i64>() {
            Number::from(n)
        } else {
            digits.parse::<u64>().map(Number::from).map_err(|_| invalid())?
        };
        Ok(Value::Number(number))
    }

    fn name(&mut self) -> Result<Value, LiteralError> {
        let start = self.pos;
        while self
            .peek()
            .is_some_and(|c| c.is_alphanumeric() || c == '_')
        {
            self.bump();
        }
        match &self.src[start..self.pos] {
            "True" | "true" => Ok(Value::Bool(true)),
            "False" | "false" => Ok(Value::Bool(false)),
            "None" | "null" => Ok(Value::Null),
            name => Err(LiteralError::UnknownName {
                name: name.to_string(),
                offset: start,
            }),
        }
    }
}
