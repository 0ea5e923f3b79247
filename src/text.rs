use crate::WrapRes;
use crate::err::WrapErr;
use regex::Regex;
use std::cell::RefCell;

/// 可实现文本：按需产出字符串形式，可能失败。
pub trait Text {
    fn as_string(&self) -> WrapRes<String>;
}

/// 字面值文本
#[derive(Debug, Eq, PartialEq)]
pub struct TextOf {
    origin: String,
}

impl TextOf {
    pub fn new(origin: impl Into<String>) -> TextOf {
        TextOf { origin: origin.into() }
    }
}

impl Text for TextOf {
    fn as_string(&self) -> WrapRes<String> {
        Ok(self.origin.clone())
    }
}

/// 闭包文本：每次实现时调用一次闭包。
pub struct TextFrom<F: Fn() -> WrapRes<String>> {
    fresh: F,
}

impl<F: Fn() -> WrapRes<String>> TextFrom<F> {
    pub fn new(fresh: F) -> TextFrom<F> {
        TextFrom { fresh }
    }
}

impl<F: Fn() -> WrapRes<String>> Text for TextFrom<F> {
    fn as_string(&self) -> WrapRes<String> {
        (self.fresh)()
    }
}

// 一次性校验的显式状态
enum Realize {
    Unrealized,
    Realized(String),
    Failed(String),
}

/// 严格文本：首次实现时校验一次谓词，之后复用缓存结果。
///
/// 校验通过则缓存文本，不通过则缓存违例文本并在每次读取时返回
/// 相同的校验错误；源本身的实现失败原样上抛且不缓存。非线程安全。
pub struct StrictText<T: Text> {
    origin: T,
    predicate: Box<dyn Fn(&str) -> bool>,
    state: RefCell<Realize>,
}

impl<T: Text> StrictText<T> {
    pub fn new(predicate: impl Fn(&str) -> bool + 'static, origin: T) -> StrictText<T> {
        StrictText { origin, predicate: Box::new(predicate), state: RefCell::new(Realize::Unrealized) }
    }

    /// 以全量匹配模式作为谓词：整个文本匹配才算通过。
    pub fn from_pattern(pattern: &str, origin: T) -> WrapRes<StrictText<T>> {
        let reg = format!(r"\A(?:{})\z", pattern);
        let regex = Regex::new(&reg)
            .map_err(|err| WrapErr::BadPattern { pattern: pattern.to_owned(), err: err.to_string() })?;
        Ok(StrictText::new(move |text| regex.is_match(text), origin))
    }
}

impl<T: Text> std::fmt::Debug for StrictText<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StrictText").finish_non_exhaustive()
    }
}

impl<T: Text> Text for StrictText<T> {
    fn as_string(&self) -> WrapRes<String> {
        let mut state = self.state.borrow_mut();
        match &*state {
            Realize::Realized(text) => return Ok(text.clone()),
            Realize::Failed(text) => return Err(WrapErr::ValidationFailed { text: text.clone() }),
            Realize::Unrealized => {}
        }
        let text = self.origin.as_string()?;
        if (self.predicate)(&text) {
            *state = Realize::Realized(text.clone());
            Ok(text)
        } else {
            *state = Realize::Failed(text.clone());
            Err(WrapErr::ValidationFailed { text })
        }
    }
}
