//! Restricted Arithmetic
//!
//! Numeric expression evaluator shared by `calc` and `node -e`. Input is
//! checked against a strict character allow-list before any parsing
//! happens; anything outside digits, operators, parentheses, dots and
//! whitespace is rejected.
//!
//! Supported:
//! - `+`, `-`, `*`, `/`, `%`
//! - `^` and `**` (right-associative power)
//! - unary minus and plus, parentheses
//!
//! All arithmetic is `f64`. Division or modulo by zero is an error rather
//! than an infinity.

use regex_lite::Regex;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ArithmeticError {
    #[error("empty expression")]
    Empty,

    #[error("disallowed characters")]
    DisallowedCharacters,

    #[error("{0}")]
    Syntax(String),

    #[error("division by zero")]
    DivisionByZero,

    #[error("result is not a finite number")]
    NotFinite,
}

lazy_static::lazy_static! {
    static ref ALLOWED: Option<Regex> = Regex::new(r"^[0-9+\-*/%().\s^]+$").ok();
}

/// True if `input` only uses characters the evaluator accepts.
pub fn is_allowed(input: &str) -> bool {
    ALLOWED.as_ref().is_some_and(|re| re.is_match(input))
}

/// Validate then evaluate `input`.
pub fn evaluate(input: &str) -> Result<f64, ArithmeticError> {
    if input.trim().is_empty() {
        return Err(ArithmeticError::Empty);
    }
    if !is_allowed(input) {
        return Err(ArithmeticError::DisallowedCharacters);
    }

    let tokens = tokenize(input)?;
    let mut parser = Parser { tokens, pos: 0, depth: 0 };
    let value = parser.expr()?;
    if let Some(token) = parser.peek() {
        return Err(ArithmeticError::Syntax(format!("unexpected '{}'", token)));
    }
    if !value.is_finite() {
        return Err(ArithmeticError::NotFinite);
    }
    Ok(value)
}

/// Render a result: integral values without a fraction, others rounded to
/// ten decimal places with trailing zeros dropped.
pub fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        return format!("{}", value as i64);
    }
    let rounded = (value * 1e10).round() / 1e10;
    format!("{}", rounded)
}

// ============================================================================
// Tokens
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq)]
enum Token {
    Number(f64),
    Plus,
    Minus,
    Star,
    Slash,
    Percent,
    Pow,
    LParen,
    RParen,
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Token::Number(n) => write!(f, "{}", n),
            Token::Plus => write!(f, "+"),
            Token::Minus => write!(f, "-"),
            Token::Star => write!(f, "*"),
            Token::Slash => write!(f, "/"),
            Token::Percent => write!(f, "%"),
            Token::Pow => write!(f, "^"),
            Token::LParen => write!(f, "("),
            Token::RParen => write!(f, ")"),
        }
    }
}

fn tokenize(input: &str) -> Result<Vec<Token>, ArithmeticError> {
    let chars: Vec<char> = input.chars().collect();
    let mut tokens = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        match c {
            _ if c.is_whitespace() => {}
            '0'..='9' | '.' => {
                let start = i;
                while i + 1 < chars.len() && (chars[i + 1].is_ascii_digit() || chars[i + 1] == '.') {
                    i += 1;
                }
                let literal: String = chars[start..=i].iter().collect();
                let number = literal
                    .parse::<f64>()
                    .map_err(|_| ArithmeticError::Syntax(format!("invalid number '{}'", literal)))?;
                tokens.push(Token::Number(number));
            }
            '+' => tokens.push(Token::Plus),
            '-' => tokens.push(Token::Minus),
            '*' if chars.get(i + 1) == Some(&'*') => {
                i += 1;
                tokens.push(Token::Pow);
            }
            '*' => tokens.push(Token::Star),
            '/' => tokens.push(Token::Slash),
            '%' => tokens.push(Token::Percent),
            '^' => tokens.push(Token::Pow),
            '(' => tokens.push(Token::LParen),
            ')' => tokens.push(Token::RParen),
            other => return Err(ArithmeticError::Syntax(format!("unexpected '{}'", other))),
        }
        i += 1;
    }

    Ok(tokens)
}

// ============================================================================
// Recursive descent
// ============================================================================

/// Deepest nesting of parentheses, unary signs and exponents accepted.
const MAX_DEPTH: usize = 256;

struct Parser {
    tokens: Vec<Token>,
    pos: usize,
    depth: usize,
}

impl Parser {
    fn nested<F>(&mut self, parse: F) -> Result<f64, ArithmeticError>
    where
        F: FnOnce(&mut Self) -> Result<f64, ArithmeticError>,
    {
        if self.depth >= MAX_DEPTH {
            return Err(ArithmeticError::Syntax("expression nested too deeply".to_string()));
        }
        self.depth += 1;
        let value = parse(self);
        self.depth -= 1;
        value
    }

    fn peek(&self) -> Option<Token> {
        self.tokens.get(self.pos).copied()
    }

    fn next(&mut self) -> Option<Token> {
        let token = self.peek();
        self.pos += 1;
        token
    }

    fn expr(&mut self) -> Result<f64, ArithmeticError> {
        let mut value = self.term()?;
        while let Some(op @ (Token::Plus | Token::Minus)) = self.peek() {
            self.pos += 1;
            let rhs = self.term()?;
            value = if op == Token::Plus { value + rhs } else { value - rhs };
        }
        Ok(value)
    }

    fn term(&mut self) -> Result<f64, ArithmeticError> {
        let mut value = self.unary()?;
        while let Some(op @ (Token::Star | Token::Slash | Token::Percent)) = self.peek() {
            self.pos += 1;
            let rhs = self.unary()?;
            value = match op {
                Token::Star => value * rhs,
                _ if rhs == 0.0 => return Err(ArithmeticError::DivisionByZero),
                Token::Slash => value / rhs,
                _ => value % rhs,
            };
        }
        Ok(value)
    }

    fn unary(&mut self) -> Result<f64, ArithmeticError> {
        match self.peek() {
            Some(Token::Minus) => {
                self.pos += 1;
                Ok(-self.nested(Self::unary)?)
            }
            Some(Token::Plus) => {
                self.pos += 1;
                self.nested(Self::unary)
            }
            _ => self.power(),
        }
    }

    fn power(&mut self) -> Result<f64, ArithmeticError> {
        let base = self.primary()?;
        if self.peek() == Some(Token::Pow) {
            self.pos += 1;
            let exponent = self.nested(Self::unary)?;
            return Ok(base.powf(exponent));
        }
        Ok(base)
    }

    fn primary(&mut self) -> Result<f64, ArithmeticError> {
        match self.next() {
            Some(Token::Number(n)) => Ok(n),
            Some(Token::LParen) => {
                let value = self.nested(Self::expr)?;
                match self.next() {
                    Some(Token::RParen) => Ok(value),
                    _ => Err(ArithmeticError::Syntax("missing ')'".to_string())),
                }
            }
            Some(token) => Err(ArithmeticError::Syntax(format!("unexpected '{}'", token))),
            None => Err(ArithmeticError::Syntax("unexpected end of expression".to_string())),
        }
    }
}
