//! Operator precedence of arena expressions.
//!
//! SWC's code generator prints the tree as given and never inserts
//! parentheses, so the converter wraps an operand whenever its precedence is
//! below what its position requires.

use cb_ast::{Kind, LitValue};

pub(crate) const ASSIGN: u8 = 1;
pub(crate) const CONDITIONAL: u8 = 2;
pub(crate) const EXPONENT: u8 = 14;
pub(crate) const PREFIX: u8 = 15;
pub(crate) const POSTFIX: u8 = 16;
/// Calls, member accesses and `new` with arguments.
pub(crate) const ACCESS: u8 = 17;
pub(crate) const PRIMARY: u8 = 18;

/// Precedence of a binary or logical operator, if it is one.
pub(crate) fn binary(operator: &str) -> Option<u8> {
    let level = match operator {
        "??" => 3,
        "||" => 4,
        "&&" => 5,
        "|" => 6,
        "^" => 7,
        "&" => 8,
        "==" | "!=" | "===" | "!==" => 9,
        "<" | ">" | "<=" | ">=" | "in" | "instanceof" => 10,
        "<<" | ">>" | ">>>" => 11,
        "+" | "-" => 12,
        "*" | "/" | "%" => 13,
        "**" => EXPONENT,
        _ => return None,
    };
    Some(level)
}

pub(crate) fn of(kind: &Kind) -> u8 {
    match kind {
        Kind::Assignment { .. } | Kind::ArrowFunction { .. } => ASSIGN,
        Kind::Conditional { .. } => CONDITIONAL,
        Kind::Binary { operator, .. } | Kind::Logical { operator, .. } => {
            binary(operator).unwrap_or(PRIMARY)
        }
        Kind::Unary { .. } | Kind::Update { prefix: true, .. } => PREFIX,
        Kind::Update { prefix: false, .. } => POSTFIX,
        Kind::Call { .. } | Kind::Member { .. } | Kind::New { .. } => ACCESS,
        // `-1` prints as a unary minus.
        Kind::Literal {
            value: LitValue::Number(n),
        } if n.is_sign_negative() => PREFIX,
        _ => PRIMARY,
    }
}

/// `??` cannot share an unparenthesised chain with `||` or `&&`.
pub(crate) fn mixes_nullish(outer: &str, inner: &Kind) -> bool {
    let Kind::Logical { operator, .. } = inner else {
        return false;
    };
    match outer {
        "??" => operator == "||" || operator == "&&",
        "||" | "&&" => operator == "??",
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn multiplicative_binds_tighter_than_additive() {
        assert!(binary("*") > binary("+"));
        assert!(binary("+") > binary("<"));
        assert!(binary("&&") > binary("||"));
        assert_eq!(binary("=>"), None);
    }

    #[test]
    fn negative_numbers_rank_as_prefix_operators() {
        let neg = Kind::Literal {
            value: LitValue::Number(-2.0),
        };
        let pos = Kind::Literal {
            value: LitValue::Number(2.0),
        };
        assert_eq!(of(&neg), PREFIX);
        assert_eq!(of(&pos), PRIMARY);
    }
}
