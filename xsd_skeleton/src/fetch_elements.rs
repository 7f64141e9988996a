use crate::error::{Result, SkeletonError};
use std::collections::HashMap;
use tracing::{debug, warn};
use xsd_parser::Schemas;
use xsd_parser::models::schema::xs::{ElementType, GroupType, SchemaContent};

/// Top-level element declarations, in declaration order.
pub(crate) fn fetch_elements(schemas: &Schemas) -> Result<Vec<(String, &ElementType)>> {
    let mut elements = vec![];
    for (_schema_id, schema) in schemas.schemas() {
        for content in &schema.content {
            match content {
                SchemaContent::Element(x) => {
                    let element: &ElementType = x;
                    let Some(name) = &element.name else {
                        return Err(SkeletonError::XSDParserError(
                            "Top-level element does not have a name".to_string(),
                        ));
                    };
                    elements.push((name.clone(), element));
                }
                SchemaContent::Include(_) => warn!("Ignoring xs:include"),
                SchemaContent::Import(_) => warn!("Ignoring xs:import"),
                SchemaContent::Redefine(_) => warn!("Ignoring xs:redefine"),
                SchemaContent::Override(_) => warn!("Ignoring xs:override"),
                SchemaContent::Annotation(_)
                | SchemaContent::DefaultOpenContent(_)
                | SchemaContent::SimpleType(_)
                | SchemaContent::ComplexType(_)
                | SchemaContent::Group(_)
                | SchemaContent::AttributeGroup(_)
                | SchemaContent::Attribute(_)
                | SchemaContent::Notation(_) => {}
            }
        }
    }

    Ok(elements)
}

/// Named model groups (`xs:group name=".."`) declared at the top level.
pub(crate) fn fetch_groups(schemas: &Schemas) -> HashMap<String, &GroupType> {
    let mut groups = HashMap::new();
    for (_schema_id, schema) in schemas.schemas() {
        for content in &schema.content {
            if let SchemaContent::Group(x) = content {
                let group: &GroupType = x;
                match &group.name {
                    Some(name) => {
                        groups.insert(name.clone(), group);
                    }
                    None => debug!("Skipping unnamed top-level group"),
                }
            }
        }
    }

    groups
}
