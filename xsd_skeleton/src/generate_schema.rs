use crate::error::{Result, SkeletonError};
use std::fs;
use std::path::Path;
use xsd_parser::pipeline::parser::resolver::FileResolver;
use xsd_parser::{Parser, Schemas};

/// Parse XSD text into `xsd_parser` schemas.
pub fn generate_schema(string: &str) -> Result<Schemas> {
    let parser = Parser::new()
        .with_resolver(FileResolver::new())
        .with_default_namespaces()
        .add_schema_from_str(string)
        .map_err(|err| SkeletonError::XSDParserError(err.to_string()))?;

    Ok(parser.finish())
}

pub(crate) fn read_schema_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| SkeletonError::InputError {
        path: path.to_path_buf(),
        source,
    })
}
