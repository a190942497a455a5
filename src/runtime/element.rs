//! 渲染输出树

use super::callback::Callback;

#[derive(Debug, Clone)]
pub enum Element {
    Container(Vec<Element>),
    Text(String),
    Button {
        label: String,
        on_click: Callback,
    },
}

impl Element {
    pub fn container(children: Vec<Element>) -> Self {
        Element::Container(children)
    }

    pub fn text(text: impl Into<String>) -> Self {
        Element::Text(text.into())
    }

    pub fn button(label: impl Into<String>, on_click: Callback) -> Self {
        Element::Button {
            label: label.into(),
            on_click,
        }
    }

    /// 深度优先收集所有文本
    pub fn texts(&self) -> Vec<&str> {
        let mut out = Vec::new();
        self.walk(&mut |el| {
            if let Element::Text(text) = el {
                out.push(text.as_str());
            }
        });
        out
    }

    /// 深度优先收集所有按钮 (label, on_click)
    pub fn buttons(&self) -> Vec<(&str, &Callback)> {
        let mut out = Vec::new();
        self.walk(&mut |el| {
            if let Element::Button { label, on_click } = el {
                out.push((label.as_str(), on_click));
            }
        });
        out
    }

    /// 第 index 个按钮的回调
    pub fn button_handler(&self, index: usize) -> Option<&Callback> {
        self.buttons()
            .into_iter()
            .nth(index)
            .map(|(_, on_click)| on_click)
    }

    fn walk<'a>(&'a self, visit: &mut impl FnMut(&'a Element)) {
        visit(self);
        if let Element::Container(children) = self {
            for child in children {
                child.walk(visit);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Element {
        Element::container(vec![
            Element::text("0"),
            Element::button("a", Callback::new(|_: ()| {})),
            Element::container(vec![Element::button("b", Callback::new(|_: ()| {}))]),
        ])
    }

    #[test]
    fn test_queries_walk_depth_first() {
        let tree = sample();
        assert_eq!(tree.texts(), vec!["0"]);

        let labels: Vec<&str> = tree.buttons().iter().map(|(label, _)| *label).collect();
        assert_eq!(labels, vec!["a", "b"]);
    }

    #[test]
    fn test_button_handler_out_of_range() {
        let tree = sample();
        assert!(tree.button_handler(1).is_some());
        assert!(tree.button_handler(2).is_none());
    }
}
