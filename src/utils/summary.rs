use crate::target::{TargetCollection, TargetItem};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, Color, Table};

/// 转换结果统计
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CollectionSummary {
    pub folders: usize,
    pub requests: usize,
    pub events: usize,
    pub examples: usize,
    pub variables: usize,
}

impl CollectionSummary {
    pub fn from_collection(collection: &TargetCollection) -> Self {
        let mut summary = Self {
            variables: collection.variable.len(),
            ..Default::default()
        };
        summary.count(&collection.item);
        summary
    }

    fn count(&mut self, items: &[TargetItem]) {
        for item in items {
            match item {
                TargetItem::Folder(folder) => {
                    self.folders += 1;
                    self.count(&folder.item);
                }
                TargetItem::Request(request) => {
                    self.requests += 1;
                    self.events += request.event.len();
                    self.examples += request.response.len();
                }
            }
        }
    }

    /// 渲染为表格
    pub fn to_table(&self) -> Table {
        let mut table = Table::new();
        table.load_preset(UTF8_FULL).set_header(vec![
            "Folders",
            "Requests",
            "Scripts",
            "Examples",
            "Variables",
        ]);

        table.add_row(vec![
            Cell::new(self.folders),
            Cell::new(self.requests).fg(Color::Green),
            Cell::new(self.events),
            Cell::new(self.examples),
            Cell::new(self.variables).fg(Color::Cyan),
        ]);

        table
    }
}

/// 变量列表表格
pub fn variables_table<'a>(names: impl IntoIterator<Item = &'a str>) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_header(vec!["#", "Hoppscotch", "Postman"]);

    for (index, name) in names.into_iter().enumerate() {
        table.add_row(vec![
            Cell::new(index + 1).add_attribute(Attribute::Dim),
            Cell::new(format!("<<{}>>", name)),
            Cell::new(format!("{{{{{}}}}}", name)).fg(Color::Green),
        ]);
    }

    table
}
