//! 两种按钮列表组件
//!
//! 外部行为完全一致：显示当前选中值，下面每个项目一个按钮，点击按钮把选中值设为该项目的值。
//! 区别只在于父组件重渲染时子按钮是否跟着重渲染。

pub mod optimised;
pub mod unoptimised;

use std::rc::Rc;

use crate::models::Item;
use crate::runtime::{PropChange, Props};

pub use optimised::{OptimisedButton, OptimisedList};
pub use unoptimised::{UnoptimisedButton, UnoptimisedList};

/// 列表组件的 props
#[derive(Debug, Clone)]
pub struct ListProps {
    pub items: Rc<[Item]>,
}

impl ListProps {
    pub fn new(items: Rc<[Item]>) -> Self {
        Self { items }
    }
}

// 浅比较：同一份项目序列才算相等
impl PartialEq for ListProps {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.items, &other.items)
    }
}

impl Props for ListProps {
    fn changes_from(&self, prev: &Self) -> Vec<PropChange> {
        if Rc::ptr_eq(&self.items, &prev.items) {
            Vec::new()
        } else if self.items == prev.items {
            vec![PropChange::identity("items")]
        } else {
            vec![PropChange::value("items")]
        }
    }
}
