//! 组件内部状态与记忆缓存

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use super::Runtime;

/// 组件私有的状态单元
pub struct State<T> {
    cell: Rc<RefCell<T>>,
    setter: Setter<T>,
}

impl<T: Clone> State<T> {
    pub fn new(initial: T, rt: &Rc<Runtime>) -> Self {
        let cell = Rc::new(RefCell::new(initial));
        let setter = Setter {
            inner: Rc::new(SetterInner {
                cell: Rc::clone(&cell),
                runtime: Rc::clone(rt),
            }),
        };
        Self { cell, setter }
    }

    pub fn get(&self) -> T {
        self.cell.borrow().clone()
    }

    /// 返回设置函数；在状态的整个生命周期内身份不变
    pub fn setter(&self) -> Setter<T> {
        self.setter.clone()
    }
}

struct SetterInner<T> {
    cell: Rc<RefCell<T>>,
    runtime: Rc<Runtime>,
}

pub struct Setter<T> {
    inner: Rc<SetterInner<T>>,
}

impl<T> Setter<T> {
    /// 写入新值并安排一次重渲染，即使新值与旧值相同
    pub fn set(&self, value: T) {
        *self.inner.cell.borrow_mut() = value;
        self.inner.runtime.schedule();
    }
}

impl<T> Clone for Setter<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T> PartialEq for Setter<T> {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl<T> fmt::Debug for Setter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Setter({:p})", Rc::as_ptr(&self.inner))
    }
}

/// 以依赖为键的记忆缓存，依赖不变时返回上次的结果
pub struct Memo<D, V> {
    cached: Option<(D, V)>,
}

impl<D: PartialEq, V: Clone> Memo<D, V> {
    pub fn new() -> Self {
        Self { cached: None }
    }

    pub fn get_or_compute(&mut self, deps: D, compute: impl FnOnce(&D) -> V) -> V {
        if let Some((prev, value)) = &self.cached {
            if *prev == deps {
                return value.clone();
            }
        }

        let value = compute(&deps);
        self.cached = Some((deps, value.clone()));
        value
    }
}

impl<D: PartialEq, V: Clone> Default for Memo<D, V> {
    fn default() -> Self {
        Self::new()
    }
}
