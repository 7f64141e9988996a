use pyo3::exceptions::PyRuntimeError;
use pyo3::prelude::*;
use xsdskeleton::{RootWrapper, SkeletonConfig, SkeletonError, generate_skeleton};

fn get_error(error: SkeletonError) -> PyErr {
    let detail = match &error {
        SkeletonError::XSDParserError(x)
        | SkeletonError::DataTypeError(x)
        | SkeletonError::XMLBuilderError(x)
        | SkeletonError::ConfigError(x) => x.clone(),
        _ => error.to_string(),
    };
    PyRuntimeError::new_err(format!("{}: {}", error.kind(), detail))
}

/// Generate a skeleton XML document from the contents of an XSD file.
#[pyfunction]
#[pyo3(signature = (xsd_string, max_depth=None, root_wrapper=None))]
fn generate(
    xsd_string: String,
    max_depth: Option<usize>,
    root_wrapper: Option<String>,
) -> PyResult<String> {
    let mut config = SkeletonConfig::default();
    if let Some(max_depth) = max_depth {
        config = config.with_max_depth(max_depth);
    }
    if let Some(name) = root_wrapper {
        config = config.with_root_wrapper(RootWrapper::Named(name));
    }

    generate_skeleton(&xsd_string, &config).map_err(get_error)
}

/// A Python module implemented in Rust.
#[pymodule]
fn pyxsdskeleton(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(generate, m)?)?;
    Ok(())
}
