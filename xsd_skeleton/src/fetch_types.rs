use std::collections::{HashMap, HashSet};
use tracing::debug;
use xsd_parser::Schemas;
use xsd_parser::models::schema::QName;
use xsd_parser::models::schema::xs::{ComplexBaseType, SchemaContent};

/// Datatypes built into XML Schema. Elements declared with any of these have
/// simple content.
const BUILTIN_TYPES: [&str; 50] = [
    // Unconstrained content has no children to enumerate; it renders as a
    // placeholder leaf.
    "anyType",
    "anySimpleType",
    "anyAtomicType",
    "string",
    "normalizedString",
    "token",
    "language",
    "Name",
    "NCName",
    "ID",
    "IDREF",
    "IDREFS",
    "ENTITY",
    "ENTITIES",
    "NMTOKEN",
    "NMTOKENS",
    "QName",
    "NOTATION",
    "anyURI",
    "base64Binary",
    "hexBinary",
    "boolean",
    "decimal",
    "integer",
    "nonPositiveInteger",
    "negativeInteger",
    "nonNegativeInteger",
    "positiveInteger",
    "long",
    "int",
    "short",
    "byte",
    "unsignedLong",
    "unsignedInt",
    "unsignedShort",
    "unsignedByte",
    "float",
    "double",
    "duration",
    "dayTimeDuration",
    "yearMonthDuration",
    "dateTime",
    "dateTimeStamp",
    "time",
    "date",
    "gYearMonth",
    "gYear",
    "gMonthDay",
    "gDay",
    "gMonth",
];

pub(crate) fn get_qname(qname: &QName) -> String {
    String::from_utf8_lossy(qname.local_name()).into_owned()
}

pub(crate) fn is_builtin_type(name: &str) -> bool {
    BUILTIN_TYPES.contains(&name)
}

/// Named complex and simple types declared at the top level of the schemas
pub(crate) struct NamedTypes<'a> {
    pub(crate) complex_types: HashMap<String, &'a ComplexBaseType>,
    pub(crate) simple_types: HashSet<String>,
}

pub(crate) fn fetch_types(schemas: &Schemas) -> NamedTypes<'_> {
    let mut types = NamedTypes {
        complex_types: HashMap::new(),
        simple_types: HashSet::new(),
    };

    for (_schema_id, schema) in schemas.schemas() {
        for content in &schema.content {
            match content {
                SchemaContent::ComplexType(x) => {
                    let complex: &ComplexBaseType = x;
                    match &complex.name {
                        Some(name) => {
                            types.complex_types.insert(name.clone(), complex);
                        }
                        None => debug!("Skipping anonymous top-level complex type"),
                    }
                }
                SchemaContent::SimpleType(x) => {
                    if let Some(name) = &x.name {
                        types.simple_types.insert(name.clone());
                    }
                }
                SchemaContent::Include(_)
                | SchemaContent::Import(_)
                | SchemaContent::Redefine(_)
                | SchemaContent::Override(_)
                | SchemaContent::Annotation(_)
                | SchemaContent::DefaultOpenContent(_)
                | SchemaContent::Group(_)
                | SchemaContent::AttributeGroup(_)
                | SchemaContent::Element(_)
                | SchemaContent::Attribute(_)
                | SchemaContent::Notation(_) => {}
            }
        }
    }

    types
}
