use crate::Result;
use crate::config::ConvertSettings;
use crate::convert::id::IdGenerator;
use crate::convert::request::RequestConverter;
use crate::convert::walker::CollectionWalker;
use crate::source::{SourceDocument, SourceNode, SourceRoot};
use crate::target::{CollectionInfo, CollectionVariable, TargetCollection, TargetItem};
use crate::variable::VariableRewriter;

/// 集合转换器（入口）
#[derive(Debug, Clone, Default)]
pub struct Converter {
    settings: ConvertSettings,
    requests: RequestConverter,
}

impl Converter {
    pub fn new(settings: ConvertSettings) -> Self {
        let requests = RequestConverter::new(&settings);
        Self { settings, requests }
    }

    /// 把整个 Hoppscotch 文档转换为 Postman 集合
    pub fn convert(&self, document: &SourceDocument) -> TargetCollection {
        let name = document
            .name()
            .unwrap_or(&self.settings.collection_name)
            .to_string();

        let item = self.convert_root(&document.root);

        let variable: Vec<CollectionVariable> =
            VariableRewriter::extract_from_value(document.raw())
                .into_iter()
                .map(CollectionVariable::empty)
                .collect();

        tracing::info!(
            collection = %name,
            items = item.len(),
            variables = variable.len(),
            "converted collection"
        );

        TargetCollection {
            info: CollectionInfo::new(name, IdGenerator::generate()),
            item,
            variable,
        }
    }

    /// 解析文本并转换
    pub fn convert_str(&self, content: &str) -> Result<(SourceDocument, TargetCollection)> {
        let document = SourceDocument::parse(content)?;
        let collection = self.convert(&document);
        Ok((document, collection))
    }

    fn convert_root(&self, root: &SourceRoot) -> Vec<TargetItem> {
        let walker = CollectionWalker::new(&self.requests);
        match root {
            SourceRoot::Collection { requests, folders } => {
                let mut items = walker.walk_requests(requests);
                items.extend(walker.walk(folders));
                items
            }
            SourceRoot::Node(node) => walker.walk(std::slice::from_ref::<SourceNode>(node)),
        }
    }
}

/// 便捷函数：使用默认设置转换文档
pub fn convert(document: &SourceDocument) -> TargetCollection {
    Converter::default().convert(document)
}

/// 便捷函数：解析文本并使用默认设置转换
pub fn convert_str(content: &str) -> Result<TargetCollection> {
    Converter::default()
        .convert_str(content)
        .map(|(_, collection)| collection)
}
