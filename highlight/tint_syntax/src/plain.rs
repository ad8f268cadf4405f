//! Plain-text classifier — the universal fallback.
//!
//! Nothing is ever classified; every call consumes one whitespace run or one
//! character.

use crate::token_kind::TokenKind;
use tint_stream::LineStream;

pub(crate) fn token(stream: &mut LineStream<'_>) -> Option<TokenKind> {
    if stream.eat_space() {
        return None;
    }
    stream.next();
    None
}
