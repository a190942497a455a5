//! 回调句柄
//!
//! `Callback` 的相等性是身份相等：克隆保留身份，每次 `Callback::new` 都产生新身份。

use std::fmt;
use std::rc::Rc;

/// 引用计数的事件回调
pub struct Callback<T = ()> {
    inner: Rc<dyn Fn(T)>,
}

impl<T: 'static> Callback<T> {
    pub fn new(f: impl Fn(T) + 'static) -> Self {
        Self { inner: Rc::new(f) }
    }
}

impl<T> Callback<T> {
    /// 调用回调
    pub fn call(&self, arg: T) {
        (self.inner)(arg)
    }

    /// 两个句柄是否指向同一个闭包
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl<T> Clone for Callback<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T> PartialEq for Callback<T> {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl<T> fmt::Debug for Callback<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Callback({:p})", Rc::as_ptr(&self.inner) as *const ())
    }
}
