//! 优化后的按钮列表
//!
//! 父组件只派生一个分发回调，它只依赖状态的设置函数，而设置函数的身份永远不变；
//! 子按钮由 `Memoized` 托管，props 浅比较相等时跳过渲染。

use std::rc::Rc;

use crate::runtime::{
    Callback, Component, Element, Memo, Memoized, PropChange, Props, Runtime, Setter, State,
};

use super::ListProps;

#[derive(Debug, Clone, PartialEq)]
pub struct OptimisedButtonProps {
    pub value: i64,
    /// 所有按钮共享的分发回调
    pub on_click: Callback<i64>,
}

impl Props for OptimisedButtonProps {
    fn changes_from(&self, prev: &Self) -> Vec<PropChange> {
        let mut changes = Vec::new();
        if self.value != prev.value {
            changes.push(PropChange::value("value"));
        }
        if self.on_click != prev.on_click {
            changes.push(PropChange::identity("on_click"));
        }
        changes
    }

    fn value(&self) -> Option<i64> {
        Some(self.value)
    }
}

#[derive(Default)]
pub struct OptimisedButton {
    on_click: Memo<(Callback<i64>, i64), Callback>,
}

impl Component for OptimisedButton {
    type Props = OptimisedButtonProps;

    const NAME: &'static str = "OptimisedButton";

    fn render(&mut self, props: &OptimisedButtonProps, rt: &Runtime) -> Element {
        rt.log().emit(Self::NAME, props.value);
        let on_click = self
            .on_click
            .get_or_compute((props.on_click.clone(), props.value), |(dispatch, value)| {
                let dispatch = dispatch.clone();
                let value = *value;
                Callback::new(move |_: ()| dispatch.call(value))
            });
        Element::button(props.value.to_string(), on_click)
    }
}

pub struct OptimisedList {
    selected: State<i64>,
    dispatch: Memo<Setter<i64>, Callback<i64>>,
    children: Vec<Memoized<OptimisedButton>>,
}

impl OptimisedList {
    pub fn new(rt: &Rc<Runtime>) -> Self {
        Self {
            selected: State::new(0, rt),
            dispatch: Memo::new(),
            children: Vec::new(),
        }
    }
}

impl Component for OptimisedList {
    type Props = ListProps;

    const NAME: &'static str = "OptimisedList";

    fn render(&mut self, props: &ListProps, rt: &Runtime) -> Element {
        let selected = self.selected.get();
        let dispatch = self.dispatch.get_or_compute(self.selected.setter(), |set| {
            let set = set.clone();
            Callback::new(move |value: i64| set.set(value))
        });
        self.children.resize_with(props.items.len(), || {
            Memoized::new(OptimisedButton::default())
        });

        let mut children = vec![Element::text(selected.to_string())];
        for (item, child) in props.items.iter().zip(self.children.iter_mut()) {
            let props = OptimisedButtonProps {
                value: item.value,
                on_click: dispatch.clone(),
            };
            children.push(child.render(props, rt));
        }
        Element::container(children)
    }
}
