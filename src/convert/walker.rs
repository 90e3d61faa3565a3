use crate::convert::request::RequestConverter;
use crate::source::{SourceFolder, SourceNode, SourceRequest};
use crate::target::{TargetFolder, TargetItem};

/// 目录树遍历器：递归地把 Hoppscotch 节点映射为 Postman 条目
pub struct CollectionWalker<'a> {
    requests: &'a RequestConverter,
}

impl<'a> CollectionWalker<'a> {
    pub fn new(requests: &'a RequestConverter) -> Self {
        Self { requests }
    }

    /// 按顺序转换一组节点
    pub fn walk(&self, nodes: &[SourceNode]) -> Vec<TargetItem> {
        nodes.iter().map(|node| self.walk_node(node)).collect()
    }

    /// 转换一组请求
    pub fn walk_requests(&self, requests: &[SourceRequest]) -> Vec<TargetItem> {
        requests
            .iter()
            .map(|request| TargetItem::from(self.requests.convert(request)))
            .collect()
    }

    pub fn walk_node(&self, node: &SourceNode) -> TargetItem {
        match node {
            SourceNode::Folder(folder) => TargetItem::from(self.walk_folder(folder)),
            SourceNode::Request(request) => TargetItem::from(self.requests.convert(request)),
        }
    }

    /// 目录的子条目：先放直接请求，再放子目录
    pub fn walk_folder(&self, folder: &SourceFolder) -> TargetFolder {
        let mut item = match &folder.requests {
            Some(requests) => self.walk_requests(requests),
            None => Vec::new(),
        };

        if let Some(children) = folder.folders.as_deref() {
            item.extend(self.walk(children));
        }

        tracing::debug!(name = %folder.name, items = item.len(), "converted folder");

        TargetFolder {
            name: folder.name.clone(),
            item,
        }
    }
}
