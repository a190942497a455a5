//! 根组件挂载与事件分发

use std::rc::Rc;

use super::Runtime;
use super::component::Component;
use super::element::Element;

/// 渲染期间不断触发更新时的上限，防止死循环
const MAX_FLUSH_PASSES: usize = 32;

/// 已挂载的根组件
pub struct Root<C: Component> {
    runtime: Rc<Runtime>,
    component: C,
    props: C::Props,
    tree: Element,
}

impl<C: Component> Root<C> {
    /// 挂载并完成首次渲染
    pub fn mount(mut component: C, props: C::Props, runtime: Rc<Runtime>) -> Self {
        let tree = component.render(&props, &runtime);
        let mut root = Self {
            runtime,
            component,
            props,
            tree,
        };
        // 首次渲染中触发的更新也要在挂载时处理掉
        let passes = root.flush();
        tracing::debug!(component = C::NAME, passes, "mounted");
        root
    }

    /// 点击第 index 个按钮，并在同一个分发周期内完成重渲染
    ///
    /// 下标越界时返回 false，不做任何事。
    pub fn click(&mut self, index: usize) -> bool {
        let Some(on_click) = self.tree.button_handler(index).cloned() else {
            return false;
        };
        on_click.call(());
        self.flush();
        true
    }

    /// 处理所有待定更新，返回根组件重渲染的次数
    pub fn flush(&mut self) -> usize {
        let mut passes = 0;
        while self.runtime.take_pending() {
            if passes == MAX_FLUSH_PASSES {
                tracing::warn!(component = C::NAME, passes, "too many re-renders, giving up");
                break;
            }
            self.tree = self.component.render(&self.props, &self.runtime);
            passes += 1;
        }
        passes
    }

    pub fn tree(&self) -> &Element {
        &self.tree
    }

    pub fn runtime(&self) -> &Rc<Runtime> {
        &self.runtime
    }
}
