use crate::WrapRes;
use crate::err::WrapErr;
use crate::seq::Sequence;

/// 有限字符序列，读取位置单调推进，耗尽后不可重读。
#[derive(Debug, Eq, PartialEq)]
pub struct CharIter {
    chars: Vec<char>,
    pos: usize,
}

impl CharIter {
    pub fn new(text: &str) -> CharIter {
        CharIter { chars: text.chars().collect(), pos: 0 }
    }

    pub fn of(chars: Vec<char>) -> CharIter {
        CharIter { chars, pos: 0 }
    }

    pub fn empty() -> CharIter {
        CharIter { chars: Vec::new(), pos: 0 }
    }
}

impl Sequence for CharIter {
    type Item = char;

    fn has_next(&mut self) -> bool {
        self.pos < self.chars.len()
    }

    fn take_next(&mut self) -> WrapRes<char> {
        if self.pos < self.chars.len() {
            let c = self.chars[self.pos];
            self.pos += 1;
            Ok(c)
        } else {
            Err(WrapErr::Exhausted)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;

    #[test]
    fn test_empty_has_no_next() {
        assert!(!CharIter::empty().has_next());
        assert!(!CharIter::new("").has_next());
    }

    #[test]
    fn test_empty_take_next_fails() {
        let mut iter = CharIter::empty();
        assert_eq!(iter.take_next(), Err(WrapErr::Exhausted));
        // 重复越界调用失败方式一致
        assert_eq!(iter.take_next(), Err(WrapErr::Exhausted));
    }

    #[test]
    fn test_exhaustion_monotonicity() {
        let mut iter = CharIter::new("abc");
        for expected in ['a', 'b', 'c'] {
            assert!(iter.has_next());
            assert_eq!(iter.take_next(), Ok(expected));
        }
        assert!(!iter.has_next());
        assert_eq!(iter.take_next(), Err(WrapErr::Exhausted));
        assert_eq!(iter.take_next(), Err(WrapErr::Exhausted));
    }

    #[test]
    fn test_has_next_does_not_advance() {
        let mut iter = CharIter::of(vec!['x']);
        for _ in 0..10 {
            assert!(iter.has_next());
        }
        assert_eq!(iter.take_next(), Ok('x'));
        assert!(!iter.has_next());
    }

    #[test]
    fn test_consumed_iter_has_no_next() {
        let mut iter = CharIter::of(vec!['a', 'b', 'c']);
        iter.take_next().unwrap();
        iter.take_next().unwrap();
        iter.take_next().unwrap();
        assert!(!iter.has_next());
        assert_eq!(iter.take_next(), Err(WrapErr::Exhausted));
    }

    #[test]
    fn test_into_std_iter() {
        assert_eq!(CharIter::new("你好ab").into_iter().collect_vec(), vec!['你', '好', 'a', 'b']);
    }
}
