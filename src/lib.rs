pub mod chars;
pub mod cursor;
pub mod cycle;
pub mod err;
pub mod seq;
pub mod text;

pub use crate::chars::CharIter;
pub use crate::cursor::{Cursor, ReadOnlyCursor, VecCursor};
pub use crate::cycle::{CycleIter, VecCycle};
pub use crate::err::WrapErr;
pub use crate::seq::{BoxedSeq, IterSeq, SeqIter, Sequence};
pub use crate::text::{StrictText, Text, TextFrom, TextOf};

/// 统一结果类型
pub type WrapRes<T> = Result<T, WrapErr>;
