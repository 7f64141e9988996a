use crate::error::{Result, SkeletonError};

/// Text given to every leaf node of a skeleton.
pub const PLACEHOLDER_TEXT: &str = " ";

/// A node of the synthesized skeleton document.
///
/// A node holds either child nodes or placeholder text, never both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentNode {
    pub(crate) tag_name: String,
    pub(crate) attributes: Vec<(String, String)>,
    pub(crate) children: Vec<DocumentNode>,
    pub(crate) text: Option<String>,
}

impl DocumentNode {
    pub fn new(tag_name: &str) -> Self {
        DocumentNode {
            tag_name: tag_name.to_string(),
            attributes: vec![],
            children: vec![],
            text: None,
        }
    }

    pub fn tag_name(&self) -> &str {
        &self.tag_name
    }

    /// Attributes in the order they were set
    pub fn attributes(&self) -> &[(String, String)] {
        &self.attributes
    }

    pub fn children(&self) -> &[DocumentNode] {
        &self.children
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// First child with the given tag name
    pub fn child(&self, tag_name: &str) -> Option<&DocumentNode> {
        self.children.iter().find(|child| child.tag_name == tag_name)
    }

    /// Number of nodes in this subtree, including this one
    pub fn count_nodes(&self) -> usize {
        1 + self
            .children
            .iter()
            .map(DocumentNode::count_nodes)
            .sum::<usize>()
    }

    pub(crate) fn set_attribute(&mut self, name: &str, value: &str) {
        match self.attributes.iter_mut().find(|(key, _)| key == name) {
            Some((_, existing)) => *existing = value.to_string(),
            None => self.attributes.push((name.to_string(), value.to_string())),
        }
    }

    /// Append a child, returning a handle to it.
    pub(crate) fn add_child(&mut self, child: DocumentNode) -> Result<&mut DocumentNode> {
        if self.text.is_some() {
            return Err(SkeletonError::XMLBuilderError(format!(
                "Cannot add child '{}' to text element '{}'",
                child.tag_name, self.tag_name
            )));
        }

        self.children.push(child);
        let last = self.children.len() - 1;
        Ok(&mut self.children[last])
    }

    /// Mark this node as a leaf carrying the placeholder text.
    pub(crate) fn make_leaf(&mut self) -> Result<()> {
        if !self.children.is_empty() {
            return Err(SkeletonError::XMLBuilderError(format!(
                "Cannot add text to element '{}' which has children",
                self.tag_name
            )));
        }

        self.text = Some(PLACEHOLDER_TEXT.to_string());
        Ok(())
    }
}
