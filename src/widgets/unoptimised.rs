//! 未优化的按钮列表
//!
//! 父组件每次渲染都为每个按钮新建一个点击回调，所以每个按钮都会跟着重渲染。

use std::rc::Rc;

use crate::runtime::{Callback, Component, Element, Plain, PropChange, Props, Runtime, State};

use super::ListProps;

#[derive(Debug, Clone, PartialEq)]
pub struct ButtonProps {
    pub value: i64,
    pub on_click: Callback,
}

impl Props for ButtonProps {
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

pub struct UnoptimisedButton;

impl Component for UnoptimisedButton {
    type Props = ButtonProps;

    const NAME: &'static str = "UnoptimisedButton";

    fn render(&mut self, props: &ButtonProps, rt: &Runtime) -> Element {
        rt.log().emit(Self::NAME, props.value);
        Element::button(props.value.to_string(), props.on_click.clone())
    }
}

pub struct UnoptimisedList {
    selected: State<i64>,
    children: Vec<Plain<UnoptimisedButton>>,
}

impl UnoptimisedList {
    pub fn new(rt: &Rc<Runtime>) -> Self {
        Self {
            selected: State::new(0, rt),
            children: Vec::new(),
        }
    }
}

impl Component for UnoptimisedList {
    type Props = ListProps;

    const NAME: &'static str = "UnoptimisedList";

    fn render(&mut self, props: &ListProps, rt: &Runtime) -> Element {
        let selected = self.selected.get();
        self.children
            .resize_with(props.items.len(), || Plain::new(UnoptimisedButton));

        let mut children = vec![Element::text(selected.to_string())];
        for (item, child) in props.items.iter().zip(self.children.iter_mut()) {
            let set = self.selected.setter();
            let value = item.value;
            // 每次渲染都是新的闭包
            let on_click = Callback::new(move |_: ()| set.set(value));
            children.push(child.render(ButtonProps { value, on_click }, rt));
        }
        Element::container(children)
    }
}
