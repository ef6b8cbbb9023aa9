//! Parsing of the sum-of-powers form back into a `Polynomial`

use std::str::FromStr;

use bitvec::prelude::*;

use super::Polynomial;
use crate::CrcGenError;

impl FromStr for Polynomial {
    type Err = CrcGenError;

    /// Accepts `x^N + ... + x + 1` with terms in strictly descending order.
    /// The first term fixes the degree N; `x^1` and `x^0` are accepted
    /// alongside the bare `x` and `1`.
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let fail = |reason: &str| CrcGenError::ParsePolynomial {
            input: input.to_string(),
            reason: reason.to_string(),
        };

        let mut terms = input.split('+').map(str::trim);
        let degree = match terms.next() {
            Some(term) if !term.is_empty() => parse_power(term).ok_or_else(|| fail("bad leading term"))?,
            _ => return Err(fail("empty expression")),
        };
        if degree == 0 || degree > Polynomial::MAX_DEGREE {
            return Err(fail("degree out of range"));
        }

        let mut taps = bitvec![0; degree];
        let mut previous = degree;
        for term in terms {
            let power = parse_power(term).ok_or_else(|| fail("bad term"))?;
            if power >= previous {
                return Err(fail("terms must be in strictly descending order"));
            }
            taps.set(power, true);
            previous = power;
        }

        Ok(Self { taps })
    }
}

fn parse_power(term: &str) -> Option<usize> {
    match term {
        "1" => Some(0),
        "x" => Some(1),
        _ => term.strip_prefix("x^")?.trim().parse().ok(),
    }
}
