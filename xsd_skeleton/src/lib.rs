//! Skeleton XML generation from XSD schemas.
//!
//! A skeleton mirrors the structure of a schema's root element: every element
//! reachable through its content model is present, and every leaf holds a
//! single space as placeholder text.

pub mod config;
pub mod document;
mod element_generator;
pub mod error;
mod fetch_elements;
mod fetch_types;
mod find_root;
mod generate_output;
mod generate_schema;
mod group_generator;
pub mod schema_model;
mod write_output;

use crate::element_generator::Synthesizer;
use crate::find_root::{create_root_node, find_root_element};
use crate::generate_output::generate_output;
use crate::generate_schema::read_schema_file;
use crate::schema_model::SchemaModel;
use crate::write_output::{output_path, write_atomically};
use std::io;
use std::panic;
use std::path::{Path, PathBuf};
use std::thread;
use tracing::{debug, info};

pub use crate::config::{
    ChoicePolicy, DEFAULT_MAX_DEPTH, MAX_SUPPORTED_DEPTH, RootWrapper, SkeletonConfig,
};
pub use crate::document::{DocumentNode, PLACEHOLDER_TEXT};
pub use crate::error::{Result, SkeletonError};
pub use crate::generate_schema::generate_schema;

/// Build the skeleton document tree for an XSD given as a string.
///
/// The schema is parsed with the `xsd_parser` crate; parser failures are
/// returned as `SkeletonError::XSDParserError`. The first top-level element
/// becomes the document root, and an unresolvable type, element or group
/// reference gives a `SkeletonError::DataTypeError`. Schemas whose types
/// refer back to themselves stop with `SkeletonError::RecursionLimitExceeded`
/// once `config.max_depth` is reached. A `max_depth` above
/// [`MAX_SUPPORTED_DEPTH`] is a `SkeletonError::ConfigError`.
pub fn build_skeleton(xsd_string: &str, config: &SkeletonConfig) -> Result<DocumentNode> {
    with_synthesis_stack(config, || synthesize_document(xsd_string, config))
}

/// Generate a skeleton XML string from an XSD string.
///
/// See [`build_skeleton`] for the errors produced while reading the schema.
/// If the `xml_builder` crate fails to render the tree, an
/// `SkeletonError::XMLBuilderError` is returned.
pub fn generate_skeleton(xsd_string: &str, config: &SkeletonConfig) -> Result<String> {
    with_synthesis_stack(config, || {
        let root = synthesize_document(xsd_string, config)?;
        generate_output(&root)
    })
}

fn synthesize_document(xsd_string: &str, config: &SkeletonConfig) -> Result<DocumentNode> {
    let schemas = generate_schema(xsd_string)?;
    let model = SchemaModel::new(&schemas)?;

    let root_element = find_root_element(&model)?;
    info!(root = root_element.name(), "Generating skeleton");

    let mut root = create_root_node(&root_element, config);
    Synthesizer::new(&model, config, root_element.name()).populate_root(&root_element, &mut root)?;

    info!(nodes = root.count_nodes(), "Skeleton complete");
    Ok(root)
}

/// Run `task` on a thread whose stack fits `config.max_depth` levels of
/// synthesis and rendering.
fn with_synthesis_stack<T, F>(config: &SkeletonConfig, task: F) -> Result<T>
where
    T: Send,
    F: FnOnce() -> Result<T> + Send,
{
    config.validate()?;
    let stack_size = config.stack_size();
    debug!(stack_size, max_depth = config.max_depth, "Starting synthesis thread");

    thread::scope(|scope| {
        let handle = thread::Builder::new()
            .name("xsd-skeleton".to_string())
            .stack_size(stack_size)
            .spawn_scoped(scope, task)
            .map_err(|err| {
                SkeletonError::ConfigError(format!(
                    "cannot start synthesis with a {} byte stack: {}",
                    stack_size, err
                ))
            })?;

        match handle.join() {
            Ok(result) => result,
            Err(payload) => panic::resume_unwind(payload),
        }
    })
}

/// Generate the skeleton for an XSD file next to it, replacing the file
/// extension with `config.output_extension`. Returns the written path.
pub fn generate_skeleton_file(input: &Path, config: &SkeletonConfig) -> Result<PathBuf> {
    generate_skeleton_file_to(input, &output_path(input, config), config)
}

/// Generate the skeleton for an XSD file into `output`.
///
/// The output is only created once the whole document has been generated and
/// written; on any error an existing file at `output` is left as it was.
pub fn generate_skeleton_file_to(
    input: &Path,
    output: &Path,
    config: &SkeletonConfig,
) -> Result<PathBuf> {
    if input == output {
        return Err(SkeletonError::OutputError {
            path: output.to_path_buf(),
            source: io::Error::new(
                io::ErrorKind::InvalidInput,
                "output path is the same as the input path",
            ),
        });
    }

    info!(input = %input.display(), "Reading schema");
    let xsd_string = read_schema_file(input)?;
    let xml = generate_skeleton(&xsd_string, config)?;

    write_atomically(output, &xml)?;
    info!(output = %output.display(), "Wrote skeleton");

    Ok(output.to_path_buf())
}
