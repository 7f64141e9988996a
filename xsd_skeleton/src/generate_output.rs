use crate::document::{DocumentNode, PLACEHOLDER_TEXT};
use crate::error::{Result, SkeletonError};
use xml_builder::{XMLBuilder, XMLElement, XMLVersion};

fn generate_element(node: &DocumentNode) -> Result<XMLElement> {
    let mut element = XMLElement::new(node.tag_name());
    for (name, value) in node.attributes() {
        element.add_attribute(name, value);
    }

    // Leaves always carry text so they are never written as `<tag />`
    if node.is_leaf() {
        let text = node.text().unwrap_or(PLACEHOLDER_TEXT);
        element
            .add_text(text.to_string())
            .map_err(|err| SkeletonError::XMLBuilderError(err.to_string()))?;
        return Ok(element);
    }

    for child in node.children() {
        let child_element = generate_element(child)?;
        element.add_child(child_element).map_err(|err| {
            SkeletonError::XMLBuilderError(format!(
                "Unable to add child to element {}: {}",
                node.tag_name(),
                err
            ))
        })?;
    }

    Ok(element)
}

/// Render the skeleton as an indented XML 1.0 document.
pub(crate) fn generate_output(root: &DocumentNode) -> Result<String> {
    let mut xml = XMLBuilder::new()
        .version(XMLVersion::XML1_0)
        .encoding("UTF-8".into())
        .build();

    xml.set_root_element(generate_element(root)?);

    let mut writer: Vec<u8> = Vec::new();
    xml.generate(&mut writer)
        .map_err(|err| SkeletonError::XMLBuilderError(err.to_string()))?;

    String::from_utf8(writer).map_err(|err| SkeletonError::XMLBuilderError(err.to_string()))
}
