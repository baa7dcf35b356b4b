use thiserror::Error;

/// Why an expression failed to evaluate. Any variant is treated as an
/// invalid submission by the round engine; none of them abort the round.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EvalError {
    #[error("malformed expression: {0}")]
    Parse(String),
    #[error("invalid operator '{0}'")]
    InvalidOperator(String),
    #[error("division by zero")]
    DivisionByZero,
    #[error("arithmetic overflow")]
    Overflow,
}

/// Evaluate a whitespace-separated infix expression strictly left to right.
///
/// Tokens must alternate number, operator, number, ... starting with a
/// number. There is NO operator precedence: `100 + 25 * 2` is 250, not 150.
/// Division is integer division truncating toward zero.
pub fn evaluate(expression: &str) -> Result<i64, EvalError> {
    let tokens: Vec<&str> = expression.split_whitespace().collect();

    let first = tokens
        .first()
        .ok_or_else(|| EvalError::Parse("empty expression".to_string()))?;
    let mut result = parse_number(first)?;

    let mut rest = tokens[1..].chunks_exact(2);
    for pair in &mut rest {
        let operand = parse_number(pair[1])?;
        result = match pair[0] {
            "+" => result.checked_add(operand).ok_or(EvalError::Overflow)?,
            "-" => result.checked_sub(operand).ok_or(EvalError::Overflow)?,
            "*" => result.checked_mul(operand).ok_or(EvalError::Overflow)?,
            "/" => {
                if operand == 0 {
                    return Err(EvalError::DivisionByZero);
                }
                // i64::MIN / -1 overflows even though the divisor is nonzero.
                result.checked_div(operand).ok_or(EvalError::Overflow)?
            }
            other => return Err(EvalError::InvalidOperator(other.to_string())),
        };
    }

    if !rest.remainder().is_empty() {
        return Err(EvalError::Parse(
            "operator with no right-hand number".to_string(),
        ));
    }

    Ok(result)
}

/// True iff the expression evaluates cleanly and hits the target exactly.
pub fn is_valid_calculation(expression: &str, target: i64) -> bool {
    matches!(evaluate(expression), Ok(result) if result == target)
}

fn parse_number(token: &str) -> Result<i64, EvalError> {
    token
        .parse::<i64>()
        .map_err(|_| EvalError::Parse(format!("'{token}' is not a number")))
}
