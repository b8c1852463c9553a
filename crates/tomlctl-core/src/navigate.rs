//! Tree navigation: point reads, point writes, and point deletions.
//!
//! All three operations walk a parsed token sequence from an explicit root.
//! `set` creates missing intermediate containers and grows arrays; `delete`
//! is idempotent and never fails. Mutations recurse with a `&mut` borrow of
//! the exact child slot, so a grown or shrunk array is observed by its
//! parent without any re-attachment step.

use crate::path::Token;
use crate::value::Value;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NavigateError {
    #[error("empty path")]
    EmptyPath,
    #[error("cannot address key '{0}' in a non-table value")]
    NotATable(String),
    #[error("cannot index [{0}] into a non-array value")]
    NotAnArray(i64),
    #[error("negative array index [{0}]")]
    NegativeIndex(i64),
}

/// Bounds-check a signed index against an array length.
fn in_bounds(index: i64, len: usize) -> Option<usize> {
    let idx = usize::try_from(index).ok()?;
    (idx < len).then_some(idx)
}

/// Walk `tokens` from `tree` and return the addressed node.
///
/// Returns `None` when a key is missing, an index is out of range, a token
/// meets the wrong container shape, or the token sequence is empty. A node
/// holding [`Value::Absent`] is still a successful lookup; callers that want
/// "present" semantics check [`Value::is_absent`] on the result.
pub fn lookup<'a>(tree: &'a Value, tokens: &[Token]) -> Option<&'a Value> {
    if tokens.is_empty() {
        return None;
    }
    let mut current = tree;
    for token in tokens {
        current = match token {
            Token::Key(key) => current.as_table()?.get(key)?,
            Token::Index(index) => {
                let items = current.as_array()?;
                &items[in_bounds(*index, items.len())?]
            }
        };
    }
    Some(current)
}

/// Write `value` at the path described by `tokens`, creating missing
/// intermediate containers and growing arrays as needed.
///
/// New intermediate slots become an empty array when the following token is
/// an index, otherwise an empty table. Array growth fills new slots with
/// [`Value::Absent`]. A failed call may leave behind containers it already
/// created; it never rolls back.
pub fn set(tree: &mut Value, tokens: &[Token], value: Value) -> Result<(), NavigateError> {
    let Some((first, rest)) = tokens.split_first() else {
        return Err(NavigateError::EmptyPath);
    };
    set_step(tree, first, rest, value)
}

fn set_step(
    node: &mut Value,
    token: &Token,
    rest: &[Token],
    value: Value,
) -> Result<(), NavigateError> {
    match token {
        Token::Key(key) => {
            let Value::Table(table) = node else {
                return Err(NavigateError::NotATable(key.clone()));
            };
            match rest.split_first() {
                None => {
                    table.insert(key.clone(), value);
                    Ok(())
                }
                Some((next, tail)) => {
                    let slot = table.entry(key.clone()).or_insert(Value::Absent);
                    if slot.is_absent() {
                        *slot = fresh_container(next);
                    }
                    set_step(slot, next, tail, value)
                }
            }
        }
        Token::Index(index) => {
            let Value::Array(items) = node else {
                return Err(NavigateError::NotAnArray(*index));
            };
            let idx =
                usize::try_from(*index).map_err(|_| NavigateError::NegativeIndex(*index))?;
            if idx >= items.len() {
                // Grown in place: the parent slot owns this Vec, so every
                // outer reference already sees the longer array.
                items.resize(idx + 1, Value::Absent);
            }
            match rest.split_first() {
                None => {
                    items[idx] = value;
                    Ok(())
                }
                Some((next, tail)) => {
                    let slot = &mut items[idx];
                    if slot.is_absent() {
                        *slot = fresh_container(next);
                    }
                    set_step(slot, next, tail, value)
                }
            }
        }
    }
}

/// Intermediate containers take their shape from the token that will address
/// into them.
fn fresh_container(next: &Token) -> Value {
    match next {
        Token::Key(_) => Value::table(),
        Token::Index(_) => Value::array(),
    }
}

/// Remove the node addressed by `tokens`, if it exists.
///
/// Deleting something that is not there is a success: an empty token
/// sequence, a structural mismatch mid-traversal, a missing key, or an
/// out-of-range index all leave the tree untouched. Removing an array
/// element shifts the later elements left; removing a table entry keeps the
/// order of the remaining entries.
pub fn delete(tree: &mut Value, tokens: &[Token]) {
    let Some((first, rest)) = tokens.split_first() else {
        return;
    };
    delete_step(tree, first, rest);
}

fn delete_step(node: &mut Value, token: &Token, rest: &[Token]) {
    let Some((next, tail)) = rest.split_first() else {
        match (node, token) {
            (Value::Table(table), Token::Key(key)) => {
                table.shift_remove(key);
            }
            (Value::Array(items), Token::Index(index)) => {
                if let Some(idx) = in_bounds(*index, items.len()) {
                    items.remove(idx);
                }
            }
            _ => {}
        }
        return;
    };
    let child = match (node, token) {
        (Value::Table(table), Token::Key(key)) => table.get_mut(key),
        (Value::Array(items), Token::Index(index)) => {
            in_bounds(*index, items.len()).map(|idx| &mut items[idx])
        }
        _ => None,
    };
    if let Some(child) = child {
        delete_step(child, next, tail);
    }
}
