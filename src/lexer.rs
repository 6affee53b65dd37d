use crate::error::{CalcError, Result};
use std::iter::Peekable;
use std::str::Chars;

/// Two-operand operators, spelled as their literal symbol on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Modulo,
    Power,
}

impl BinaryOperator {
    pub const ALL: [BinaryOperator; 6] = [
        BinaryOperator::Add,
        BinaryOperator::Subtract,
        BinaryOperator::Multiply,
        BinaryOperator::Divide,
        BinaryOperator::Modulo,
        BinaryOperator::Power,
    ];

    pub fn symbol(self) -> &'static str {
        match self {
            BinaryOperator::Add => "+",
            BinaryOperator::Subtract => "-",
            BinaryOperator::Multiply => "*",
            BinaryOperator::Divide => "/",
            BinaryOperator::Modulo => "%",
            BinaryOperator::Power => "**",
        }
    }

    pub fn lookup(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.symbol() == token)
    }
}

/// Single-operand operations, spelled by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOperation {
    Sqrt,
    Log,
    Ln,
    Abs,
    Cos,
    Sin,
    Tan,
    Exp,
}

impl UnaryOperation {
    pub const ALL: [UnaryOperation; 8] = [
        UnaryOperation::Sqrt,
        UnaryOperation::Log,
        UnaryOperation::Ln,
        UnaryOperation::Abs,
        UnaryOperation::Cos,
        UnaryOperation::Sin,
        UnaryOperation::Tan,
        UnaryOperation::Exp,
    ];

    pub fn name(self) -> &'static str {
        match self {
            UnaryOperation::Sqrt => "sqrt",
            UnaryOperation::Log => "log",
            UnaryOperation::Ln => "ln",
            UnaryOperation::Abs => "abs",
            UnaryOperation::Cos => "cos",
            UnaryOperation::Sin => "sin",
            UnaryOperation::Tan => "tan",
            UnaryOperation::Exp => "exp",
        }
    }

    pub fn lookup(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.name() == token)
    }
}

/// Parses a whole command-line token as one floating-point number.
///
/// Follows `strtod` prefix rules: leading whitespace and an optional sign,
/// then a decimal or `0x` hexadecimal literal, `inf`/`infinity`, or `nan`.
/// Anything left over after the longest numeric prefix rejects the token.
pub fn scan_operand(token: &str) -> Result<f64> {
    let mut lexer = Lexer::new(token);
    lexer.skip_whitespace();

    match lexer.scan_number() {
        Some(value) if lexer.is_at_end() => Ok(value),
        _ => Err(CalcError::Parse(token.to_string())),
    }
}

struct Lexer<'a> {
    chars: Peekable<Chars<'a>>,
    text: String,
}

impl<'a> Lexer<'a> {
    fn new(source: &'a str) -> Self {
        Self {
            chars: source.chars().peekable(),
            text: String::new(),
        }
    }

    fn is_at_end(&mut self) -> bool {
        self.chars.peek().is_none()
    }

    fn skip_whitespace(&mut self) {
        while matches!(
            self.chars.peek(),
            Some(' ' | '\t' | '\n' | '\x0b' | '\x0c' | '\r')
        ) {
            self.chars.next();
        }
    }

    fn advance(&mut self) -> Option<char> {
        let ch = self.chars.next()?;
        self.text.push(ch);
        Some(ch)
    }

    fn scan_digits(&mut self, radix: u32) -> Vec<u32> {
        let mut digits = Vec::new();
        while let Some(digit) = self.chars.peek().and_then(|ch| ch.to_digit(radix)) {
            self.advance();
            digits.push(digit);
        }
        digits
    }

    /// Consumes `word` case-insensitively, or nothing at all.
    fn match_word(&mut self, word: &str) -> bool {
        let mut lookahead = self.chars.clone();
        for expected in word.chars() {
            match lookahead.next() {
                Some(ch) if ch.eq_ignore_ascii_case(&expected) => {}
                _ => return false,
            }
        }
        self.chars = lookahead;
        true
    }

    fn scan_number(&mut self) -> Option<f64> {
        let negative = match self.chars.peek().copied() {
            Some('-') => {
                self.advance();
                true
            }
            Some('+') => {
                self.advance();
                false
            }
            _ => false,
        };

        if self.match_word("infinity") || self.match_word("inf") {
            return Some(if negative {
                f64::NEG_INFINITY
            } else {
                f64::INFINITY
            });
        }
        if self.match_word("nan") {
            self.scan_nan_payload();
            return Some(f64::NAN);
        }
        if self.match_hex_prefix() {
            let magnitude = self.scan_hex();
            return Some(if negative { -magnitude } else { magnitude });
        }
        self.scan_decimal()
    }

    /// `nan(...)` carries an optional payload of letters, digits and underscores.
    fn scan_nan_payload(&mut self) {
        let mut lookahead = self.chars.clone();
        if lookahead.next() != Some('(') {
            return;
        }
        while let Some(ch) = lookahead.next() {
            match ch {
                ')' => {
                    self.chars = lookahead;
                    return;
                }
                ch if ch.is_ascii_alphanumeric() || ch == '_' => {}
                _ => return,
            }
        }
    }

    /// `0x` only counts as a prefix when a hex digit follows it.
    fn match_hex_prefix(&mut self) -> bool {
        let mut lookahead = self.chars.clone();
        if lookahead.next() != Some('0') || !matches!(lookahead.next(), Some('x' | 'X')) {
            return false;
        }
        let has_digit = match lookahead.peek().copied() {
            Some('.') => {
                lookahead.next();
                lookahead.peek().is_some_and(|ch| ch.is_ascii_hexdigit())
            }
            Some(ch) => ch.is_ascii_hexdigit(),
            None => false,
        };
        if has_digit {
            self.chars.next();
            self.chars.next();
        }
        has_digit
    }

    fn scan_hex(&mut self) -> f64 {
        let mut mantissa = 0.0_f64;
        for digit in self.scan_digits(16) {
            mantissa = mantissa * 16.0 + f64::from(digit);
        }

        let mut fraction_digits: i32 = 0;
        if self.chars.peek() == Some(&'.') {
            self.advance();
            for digit in self.scan_digits(16) {
                mantissa = mantissa * 16.0 + f64::from(digit);
                fraction_digits = fraction_digits.saturating_add(1);
            }
        }

        let exponent = self
            .scan_exponent('p')
            .map(|text| parse_exponent(&text))
            .unwrap_or(0);

        scale_by_power_of_two(
            mantissa,
            exponent.saturating_sub(fraction_digits.saturating_mul(4)),
        )
    }

    fn scan_decimal(&mut self) -> Option<f64> {
        let mut digit_count = self.scan_digits(10).len();
        if self.chars.peek() == Some(&'.') {
            self.advance();
            digit_count += self.scan_digits(10).len();
        }
        if digit_count == 0 {
            return None;
        }

        if let Some(exponent) = self.scan_exponent('e') {
            self.text.push('e');
            self.text.push_str(&exponent);
        }

        self.text.parse::<f64>().ok()
    }

    /// Consumes `<marker>[sign]digits` and returns the signed digits, or
    /// consumes nothing when no digit follows the marker.
    fn scan_exponent(&mut self, marker: char) -> Option<String> {
        let mut lookahead = self.chars.clone();
        if !lookahead
            .next()
            .is_some_and(|ch| ch.eq_ignore_ascii_case(&marker))
        {
            return None;
        }

        let mut exponent = String::new();
        if let Some(sign @ ('+' | '-')) = lookahead.peek().copied() {
            lookahead.next();
            exponent.push(sign);
        }
        while let Some(ch) = lookahead.peek().copied().filter(char::is_ascii_digit) {
            lookahead.next();
            exponent.push(ch);
        }

        if !exponent.ends_with(|ch: char| ch.is_ascii_digit()) {
            return None;
        }
        self.chars = lookahead;
        Some(exponent)
    }
}

/// `value * 2^exponent` in bounded steps, so a single out-of-range factor
/// neither overflows against a zero mantissa nor flushes a subnormal result.
fn scale_by_power_of_two(mut value: f64, mut exponent: i32) -> f64 {
    const STEP: i32 = 1000;

    if value == 0.0 {
        return value;
    }
    while exponent != 0 && value != 0.0 && value.is_finite() {
        let step = exponent.clamp(-STEP, STEP);
        value *= 2f64.powi(step);
        exponent -= step;
    }
    value
}

fn parse_exponent(text: &str) -> i32 {
    text.parse::<i32>().unwrap_or(if text.starts_with('-') {
        i32::MIN
    } else {
        i32::MAX
    })
}
