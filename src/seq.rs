use crate::WrapRes;
use crate::err::WrapErr;
use std::iter::Peekable;

/// 拉取式序列，非线程安全。
///
/// `has_next`不推进读取位置；`take_next`仅在`has_next`为true时可调用，
/// 越界调用以[`WrapErr::Exhausted`]失败，且每次失败的方式一致。
pub trait Sequence {
    type Item;

    fn has_next(&mut self) -> bool;

    fn take_next(&mut self) -> WrapRes<Self::Item>;

    /// 转为标准迭代器，耗尽即停止。
    fn into_iter(self) -> SeqIter<Self>
    where
        Self: Sized,
    {
        SeqIter { seq: self }
    }
}

/// 将标准迭代器适配为序列。
pub struct IterSeq<I: Iterator> {
    iter: Peekable<I>,
}

impl<I: Iterator> IterSeq<I> {
    pub fn new(iter: I) -> IterSeq<I> {
        IterSeq { iter: iter.peekable() }
    }
}

impl<I: Iterator> Sequence for IterSeq<I> {
    type Item = I::Item;

    fn has_next(&mut self) -> bool {
        // peek只预读缓存一个元素，读取位置对外不变
        self.iter.peek().is_some()
    }

    fn take_next(&mut self) -> WrapRes<Self::Item> {
        self.iter.next().ok_or(WrapErr::Exhausted)
    }
}

/// 将序列适配为标准迭代器。
pub struct SeqIter<S: Sequence> {
    seq: S,
}

impl<S: Sequence> Iterator for SeqIter<S> {
    type Item = S::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if self.seq.has_next() { self.seq.take_next().ok() } else { None }
    }
}

/// 类型擦除的序列，持有最外层包装。
pub struct BoxedSeq<T> {
    seq: Box<dyn Sequence<Item = T>>,
}

impl<T> BoxedSeq<T> {
    pub fn new(seq: impl Sequence<Item = T> + 'static) -> BoxedSeq<T> {
        BoxedSeq { seq: Box::new(seq) }
    }
}

impl<T> Sequence for BoxedSeq<T> {
    type Item = T;

    fn has_next(&mut self) -> bool {
        self.seq.has_next()
    }

    fn take_next(&mut self) -> WrapRes<T> {
        self.seq.take_next()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;

    #[test]
    fn test_iter_seq_has_next_does_not_advance() {
        let mut seq = IterSeq::new(vec![1, 2, 3].into_iter());
        assert!(seq.has_next());
        assert!(seq.has_next());
        assert!(seq.has_next());
        assert_eq!(seq.take_next(), Ok(1));
        assert_eq!(seq.take_next(), Ok(2));
        assert_eq!(seq.take_next(), Ok(3));
        assert!(!seq.has_next());
    }

    #[test]
    fn test_iter_seq_take_next_past_end() {
        let mut seq = IterSeq::new(std::iter::empty::<i32>());
        assert!(!seq.has_next());
        assert_eq!(seq.take_next(), Err(WrapErr::Exhausted));
        assert_eq!(seq.take_next(), Err(WrapErr::Exhausted));
    }

    #[test]
    fn test_seq_iter_round_trip() {
        let seq = IterSeq::new(vec!["a", "b", "c"].into_iter());
        assert_eq!(seq.into_iter().collect_vec(), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_boxed_seq_delegates() {
        let mut seq = BoxedSeq::new(IterSeq::new(vec![1, 2].into_iter()));
        assert!(seq.has_next());
        assert_eq!(seq.take_next(), Ok(1));
        assert_eq!(seq.take_next(), Ok(2));
        assert!(!seq.has_next());
        assert_eq!(seq.take_next(), Err(WrapErr::Exhausted));
    }
}
