//! 组件与宿主
//!
//! `Plain` 每次父组件渲染都会重新运行子组件；`Memoized` 记住上一次的 props 和输出，
//! 浅比较相等时直接复用输出。

use super::Runtime;
use super::element::Element;

/// 单个 prop 的变化方式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeKind {
    /// 值变了
    Value,
    /// 值没变，只是引用身份变了（例如每次渲染新建的闭包）
    Identity,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropChange {
    pub name: &'static str,
    pub kind: ChangeKind,
}

impl PropChange {
    pub fn value(name: &'static str) -> Self {
        Self {
            name,
            kind: ChangeKind::Value,
        }
    }

    pub fn identity(name: &'static str) -> Self {
        Self {
            name,
            kind: ChangeKind::Identity,
        }
    }
}

/// 组件的输入
///
/// `PartialEq` 即浅比较：基本类型按值，回调按身份。
pub trait Props: Clone + PartialEq + 'static {
    /// 与上一次 props 相比发生了哪些变化
    fn changes_from(&self, prev: &Self) -> Vec<PropChange>;

    /// 组件展示的项目值，用于渲染追踪报告
    fn value(&self) -> Option<i64> {
        None
    }
}

pub trait Component: 'static {
    type Props: Props;

    const NAME: &'static str;

    fn render(&mut self, props: &Self::Props, rt: &Runtime) -> Element;
}

fn run<C: Component>(
    component: &mut C,
    prev: Option<&C::Props>,
    props: &C::Props,
    rt: &Runtime,
) -> Element {
    rt.tracker().observe(C::NAME, prev, props);
    component.render(props, rt)
}

/// 无记忆的宿主：每次都渲染
pub struct Plain<C: Component> {
    component: C,
    last_props: Option<C::Props>,
}

impl<C: Component> Plain<C> {
    pub fn new(component: C) -> Self {
        Self {
            component,
            last_props: None,
        }
    }

    pub fn render(&mut self, props: C::Props, rt: &Runtime) -> Element {
        let output = run(&mut self.component, self.last_props.as_ref(), &props, rt);
        self.last_props = Some(props);
        output
    }
}

/// 浅比较跳过渲染的宿主
pub struct Memoized<C: Component> {
    component: C,
    last: Option<(C::Props, Element)>,
}

impl<C: Component> Memoized<C> {
    pub fn new(component: C) -> Self {
        Self {
            component,
            last: None,
        }
    }

    pub fn render(&mut self, props: C::Props, rt: &Runtime) -> Element {
        if let Some((prev, output)) = &self.last {
            if *prev == props {
                tracing::trace!(component = C::NAME, "memoized props, skipping render");
                return output.clone();
            }
        }

        let prev = self.last.take().map(|(prev, _)| prev);
        let output = run(&mut self.component, prev.as_ref(), &props, rt);
        self.last = Some((props, output.clone()));
        output
    }
}
