use crate::WrapRes;
use crate::err::WrapErr;

/// 双向游标，非线程安全。
///
/// 位置语义与元素下标分离：`next_index`指向`next`将返回的元素，
/// 到达末尾时等于长度；`previous_index`在起始位置为`None`。
pub trait Cursor {
    type Item;

    fn has_next(&self) -> bool;

    fn next(&mut self) -> WrapRes<Self::Item>;

    fn has_previous(&self) -> bool;

    fn previous(&mut self) -> WrapRes<Self::Item>;

    fn next_index(&self) -> usize;

    fn previous_index(&self) -> Option<usize>;

    /// 删除最近一次`next`或`previous`返回的元素。
    fn remove(&mut self) -> WrapRes<()>;

    /// 改写最近一次`next`或`previous`返回的元素。
    fn set(&mut self, item: Self::Item) -> WrapRes<()>;

    /// 在当前位置之前插入元素。
    fn add(&mut self, item: Self::Item) -> WrapRes<()>;
}

/// 基于`Vec`的可变双向游标。
#[derive(Debug, Eq, PartialEq)]
pub struct VecCursor<T> {
    items: Vec<T>,
    pos: usize,
    // 最近一次next/previous返回的元素下标，remove/set的作用对象
    last: Option<usize>,
}

impl<T> VecCursor<T> {
    pub fn new(items: Vec<T>) -> VecCursor<T> {
        VecCursor { items, pos: 0, last: None }
    }

    pub fn into_items(self) -> Vec<T> {
        self.items
    }
}

impl<T: Clone> Cursor for VecCursor<T> {
    type Item = T;

    fn has_next(&self) -> bool {
        self.pos < self.items.len()
    }

    fn next(&mut self) -> WrapRes<T> {
        if self.pos < self.items.len() {
            let i = self.pos;
            self.pos += 1;
            self.last = Some(i);
            Ok(self.items[i].clone())
        } else {
            Err(WrapErr::Exhausted)
        }
    }

    fn has_previous(&self) -> bool {
        self.pos > 0
    }

    fn previous(&mut self) -> WrapRes<T> {
        if self.pos > 0 {
            self.pos -= 1;
            self.last = Some(self.pos);
            Ok(self.items[self.pos].clone())
        } else {
            Err(WrapErr::Exhausted)
        }
    }

    fn next_index(&self) -> usize {
        self.pos
    }

    fn previous_index(&self) -> Option<usize> {
        self.pos.checked_sub(1)
    }

    fn remove(&mut self) -> WrapRes<()> {
        match self.last.take() {
            Some(i) => {
                self.items.remove(i);
                if self.pos > i {
                    self.pos -= 1;
                }
                Ok(())
            }
            None => Err(WrapErr::StaleCursor { op: "remove" }),
        }
    }

    fn set(&mut self, item: T) -> WrapRes<()> {
        match self.last {
            Some(i) => {
                self.items[i] = item;
                Ok(())
            }
            None => Err(WrapErr::StaleCursor { op: "rewrite" }),
        }
    }

    fn add(&mut self, item: T) -> WrapRes<()> {
        self.items.insert(self.pos, item);
        self.pos += 1;
        self.last = None;
        Ok(())
    }
}

/// 只读游标视图：查询操作逐一转发，变更操作一律拒绝。
///
/// 构造为O(1)，不复制底层序列，仅收窄能力；视图存续期间独占内部游标。
pub struct ReadOnlyCursor<C: Cursor> {
    origin: C,
}

impl<C: Cursor> ReadOnlyCursor<C> {
    pub fn new(origin: C) -> ReadOnlyCursor<C> {
        ReadOnlyCursor { origin }
    }
}

impl<C: Cursor> Cursor for ReadOnlyCursor<C> {
    type Item = C::Item;

    fn has_next(&self) -> bool {
        self.origin.has_next()
    }

    fn next(&mut self) -> WrapRes<C::Item> {
        self.origin.next()
    }

    fn has_previous(&self) -> bool {
        self.origin.has_previous()
    }

    fn previous(&mut self) -> WrapRes<C::Item> {
        self.origin.previous()
    }

    fn next_index(&self) -> usize {
        self.origin.next_index()
    }

    fn previous_index(&self) -> Option<usize> {
        self.origin.previous_index()
    }

    fn remove(&mut self) -> WrapRes<()> {
        Err(WrapErr::UnsupportedMutation { op: "removing" })
    }

    fn set(&mut self, _item: C::Item) -> WrapRes<()> {
        Err(WrapErr::UnsupportedMutation { op: "rewriting" })
    }

    fn add(&mut self, _item: C::Item) -> WrapRes<()> {
        Err(WrapErr::UnsupportedMutation { op: "adding" })
    }
}
