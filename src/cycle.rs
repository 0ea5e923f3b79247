use crate::WrapRes;
use crate::err::WrapErr;
use crate::seq::{IterSeq, Sequence};

/// 循环序列：按需重复播放源序列，每一轮重新调用一次源工厂。
///
/// 源工厂在构造时不会被调用，仅在每轮开始时调用一次；要求工厂每次
/// 重启产生相同的元素序列，非幂等的源不在契约内。非线程安全。
pub struct CycleIter<S, F> {
    fresh: F,
    lap: Option<S>,
}

impl<S: Sequence, F: Fn() -> S> CycleIter<S, F> {
    pub fn new(fresh: F) -> CycleIter<S, F> {
        CycleIter { fresh, lap: None }
    }
}

/// 基于字面值列表的循环序列，每轮克隆一份元素。
pub type VecCycle<T> = CycleIter<IterSeq<std::vec::IntoIter<T>>, Box<dyn Fn() -> IterSeq<std::vec::IntoIter<T>>>>;

impl<T: Clone + 'static> VecCycle<T> {
    pub fn of(values: Vec<T>) -> VecCycle<T> {
        CycleIter::new(Box::new(move || IterSeq::new(values.clone().into_iter())))
    }
}

impl<S: Sequence, F: Fn() -> S> Sequence for CycleIter<S, F> {
    type Item = S::Item;

    fn has_next(&mut self) -> bool {
        if let Some(lap) = &mut self.lap {
            if lap.has_next() {
                return true;
            }
        }
        // 当前轮耗尽或尚未开始，开启新一轮；新一轮为空说明源为空
        let mut lap = (self.fresh)();
        let more = lap.has_next();
        self.lap = Some(lap);
        more
    }

    fn take_next(&mut self) -> WrapRes<S::Item> {
        if self.has_next() {
            match &mut self.lap {
                Some(lap) => lap.take_next(),
                None => Err(WrapErr::Exhausted),
            }
        } else {
            Err(WrapErr::Exhausted)
        }
    }
}
