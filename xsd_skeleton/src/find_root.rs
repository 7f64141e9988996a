use crate::config::SkeletonConfig;
use crate::document::DocumentNode;
use crate::error::{Result, SkeletonError};
use crate::schema_model::{SchemaElement, SchemaModel};
use tracing::debug;

/// The first top-level element is the document root. Later top-level
/// elements are only reachable through references.
pub(crate) fn find_root_element<'a>(model: &SchemaModel<'a>) -> Result<SchemaElement<'a>> {
    let mut elements = model.top_level_elements().into_iter();
    let Some(root) = elements.next() else {
        return Err(SkeletonError::NoRootElement);
    };

    for element in elements {
        debug!(
            root = root.name(),
            "Top-level element '{}' is not used as root",
            element.name()
        );
    }

    Ok(root)
}

pub(crate) fn create_root_node(element: &SchemaElement<'_>, config: &SkeletonConfig) -> DocumentNode {
    let mut root = DocumentNode::new(element.name());
    for (name, value) in config.root_attributes.iter() {
        root.set_attribute(name, value);
    }

    root
}
