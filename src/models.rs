use std::rc::Rc;

/// 按钮列表的一项
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Item {
    pub value: i64,
}

impl Item {
    pub fn new(value: i64) -> Self {
        Self { value }
    }
}

/// 固定的六个项目，值依次为 0..=5
pub fn default_items() -> Rc<[Item]> {
    (0..6).map(Item::new).collect()
}
