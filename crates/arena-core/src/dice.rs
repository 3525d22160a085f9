//! Dice expressions
//!
//! Parses and rolls dice notation like "3d6", "2d8+3", "1d20*2", "4d6/2".
//! Every expression goes through the same pipeline: sum the dice, apply the
//! multiply or divide step, add the addend, clamp at zero.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DiceParseError;
use crate::rng::GameRng;

/// Multiply or divide step applied to the dice sum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Scale {
    /// Multiply by a positive factor
    Multiply(u32),
    /// Truncating division by a non-zero divisor
    Divide(u32),
}

impl Scale {
    fn apply(self, raw: i64) -> i64 {
        match self {
            Scale::Multiply(m) => raw.saturating_mul(m as i64),
            Scale::Divide(d) => raw / d.max(1) as i64,
        }
    }
}

impl Default for Scale {
    fn default() -> Self {
        Scale::Multiply(1)
    }
}

/// A parsed dice expression
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Dice {
    count: u32,
    sides: u32,
    scale: Scale,
    addend: i32,
}

impl Dice {
    /// Plain `count`d`sides`. A zero side count is raised to one.
    pub const fn new(count: u32, sides: u32) -> Self {
        Self {
            count,
            sides: if sides == 0 { 1 } else { sides },
            scale: Scale::Multiply(1),
            addend: 0,
        }
    }

    /// Build from the signed multiplier encoding: positive multiplies,
    /// negative divides by its magnitude, zero is rejected.
    pub fn with_multiplier(
        count: u32,
        sides: u32,
        multiplier: i32,
        addend: i32,
    ) -> Result<Self, DiceParseError> {
        let label = || format!("{count}d{sides}");
        if sides == 0 {
            return Err(DiceParseError::ZeroSides(label()));
        }
        let scale = match multiplier {
            0 => return Err(DiceParseError::ZeroScale(label())),
            m if m > 0 => Scale::Multiply(m as u32),
            m => Scale::Divide(m.unsigned_abs()),
        };
        Ok(Self {
            count,
            sides,
            scale,
            addend,
        })
    }

    /// Parse dice notation `[count]d<sides>[(*|/)<n>][(+|-)<n>]`
    pub fn parse(text: &str) -> Result<Self, DiceParseError> {
        let s = text.trim();
        if s.is_empty() {
            return Err(DiceParseError::Empty);
        }

        let d_pos = s
            .find(['d', 'D'])
            .ok_or_else(|| DiceParseError::MissingDie(s.to_string()))?;

        let count_str = &s[..d_pos];
        let count = if count_str.is_empty() {
            1 // "d6" means "1d6"
        } else if count_str.bytes().all(|b| b.is_ascii_digit()) {
            count_str
                .parse()
                .map_err(|_| DiceParseError::InvalidNumber(s.to_string()))?
        } else {
            return Err(DiceParseError::InvalidNumber(s.to_string()));
        };

        let (sides, mut rest) = take_number(&s[d_pos + 1..], s)?;
        if sides == 0 {
            return Err(DiceParseError::ZeroSides(s.to_string()));
        }

        let mut scale = Scale::Multiply(1);
        if let Some(op @ ('*' | '/')) = rest.chars().next() {
            let (n, after) = take_number(&rest[1..], s)?;
            if n == 0 {
                return Err(DiceParseError::ZeroScale(s.to_string()));
            }
            scale = if op == '*' {
                Scale::Multiply(n)
            } else {
                Scale::Divide(n)
            };
            rest = after;
        }

        let mut addend = 0i32;
        if let Some(op @ ('+' | '-')) = rest.chars().next() {
            let (n, after) = take_number(&rest[1..], s)?;
            let n = i32::try_from(n).map_err(|_| DiceParseError::InvalidNumber(s.to_string()))?;
            addend = if op == '+' { n } else { -n };
            rest = after;
        }

        if !rest.is_empty() {
            return Err(DiceParseError::TrailingInput {
                text: s.to_string(),
                rest: rest.to_string(),
            });
        }

        Ok(Self {
            count,
            sides,
            scale,
            addend,
        })
    }

    /// Multiply the sum by `factor` (zero is treated as one)
    pub const fn times(mut self, factor: u32) -> Self {
        self.scale = Scale::Multiply(if factor == 0 { 1 } else { factor });
        self
    }

    /// Divide the sum by `divisor`, truncating (zero is treated as one)
    pub const fn divided_by(mut self, divisor: u32) -> Self {
        self.scale = Scale::Divide(if divisor == 0 { 1 } else { divisor });
        self
    }

    /// Add `addend` after scaling (negative subtracts)
    pub const fn plus(mut self, addend: i32) -> Self {
        self.addend = addend;
        self
    }

    pub const fn count(&self) -> u32 {
        self.count
    }

    pub const fn sides(&self) -> u32 {
        self.sides
    }

    pub const fn scale(&self) -> Scale {
        self.scale
    }

    /// Signed multiplier encoding (negative means divide by the magnitude)
    pub fn multiplier(&self) -> i32 {
        match self.scale {
            Scale::Multiply(m) => i32::try_from(m).unwrap_or(i32::MAX),
            Scale::Divide(d) => i32::try_from(d).map(|d| -d).unwrap_or(i32::MIN),
        }
    }

    pub const fn addend(&self) -> i32 {
        self.addend
    }

    /// Roll the dice and return the clamped total
    pub fn roll(&self, rng: &mut GameRng) -> i32 {
        let raw: i64 = (0..self.count).map(|_| rng.rnd(self.sides) as i64).sum();
        self.finish(raw)
    }

    /// Highest possible result
    pub fn max_roll(&self) -> i32 {
        self.finish((self.count as i64).saturating_mul(self.sides as i64))
    }

    /// Lowest possible result
    pub fn min_roll(&self) -> i32 {
        self.finish(self.count as i64)
    }

    /// Midpoint of the possible results (rounded down)
    pub fn average(&self) -> i32 {
        ((self.min_roll() as i64 + self.max_roll() as i64) / 2) as i32
    }

    fn finish(&self, raw: i64) -> i32 {
        let total = self.scale.apply(raw).saturating_add(self.addend as i64);
        total.clamp(0, i32::MAX as i64) as i32
    }
}

/// Split a leading run of ASCII digits off `input`
fn take_number<'a>(input: &'a str, whole: &str) -> Result<(u32, &'a str), DiceParseError> {
    let end = input
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(input.len());
    if end == 0 {
        return Err(DiceParseError::InvalidNumber(whole.to_string()));
    }
    let n = input[..end]
        .parse()
        .map_err(|_| DiceParseError::InvalidNumber(whole.to_string()))?;
    Ok((n, &input[end..]))
}

impl FromStr for Dice {
    type Err = DiceParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Dice {
    type Error = DiceParseError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl From<Dice> for String {
    fn from(dice: Dice) -> Self {
        dice.to_string()
    }
}

impl fmt::Display for Dice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}d{}", self.count, self.sides)?;
        match self.scale {
            Scale::Multiply(1) => {}
            Scale::Multiply(m) => write!(f, "*{m}")?,
            Scale::Divide(d) => write!(f, "/{d}")?,
        }
        match self.addend {
            0 => Ok(()),
            a if a > 0 => write!(f, "+{a}"),
            a => write!(f, "{a}"),
        }
    }
}
