use crate::error::{Result, SkeletonError};

/// Default limit on how deep synthesis may descend before giving up.
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Largest accepted `max_depth`. Synthesis runs on a thread whose stack is
/// sized from the depth limit, and this bounds that reservation.
pub const MAX_SUPPORTED_DEPTH: usize = 8192;

const BASE_STACK_BYTES: usize = 1024 * 1024;
const STACK_BYTES_PER_LEVEL: usize = 16 * 1024;

/// Default extension given to generated documents.
pub const DEFAULT_OUTPUT_EXTENSION: &str = "xml";

/// How an `xs:choice` is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChoicePolicy {
    /// Emit every alternative, nested groups included, so the skeleton
    /// shows all children that may legally appear.
    #[default]
    AllBranches,
    /// Emit only the first alternative.
    FirstBranch,
}

/// Name of the element that is collapsed into the document root when it is
/// declared directly inside it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RootWrapper {
    /// Use the root element's own name.
    #[default]
    RootName,
    /// Use a fixed element name. Only collapses when the root element
    /// itself carries that name.
    Named(String),
    /// Never collapse.
    Disabled,
}

impl RootWrapper {
    pub(crate) fn matches(&self, root_name: &str, element_name: &str) -> bool {
        match self {
            RootWrapper::RootName => root_name == element_name,
            RootWrapper::Named(name) => name == root_name && name == element_name,
            RootWrapper::Disabled => false,
        }
    }
}

/// Options controlling skeleton generation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkeletonConfig {
    /// Limit on nested elements and model groups combined
    pub max_depth: usize,
    pub root_wrapper: RootWrapper,
    pub root_attributes: Vec<(String, String)>,
    pub choice_policy: ChoicePolicy,
    pub output_extension: String,
}

impl Default for SkeletonConfig {
    fn default() -> Self {
        SkeletonConfig {
            max_depth: DEFAULT_MAX_DEPTH,
            root_wrapper: RootWrapper::default(),
            root_attributes: vec![],
            choice_policy: ChoicePolicy::default(),
            output_extension: DEFAULT_OUTPUT_EXTENSION.to_string(),
        }
    }
}

impl SkeletonConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_root_wrapper(mut self, root_wrapper: RootWrapper) -> Self {
        self.root_wrapper = root_wrapper;
        self
    }

    /// Append a metadata attribute to be stamped on the root node.
    pub fn with_root_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.root_attributes.push((name.into(), value.into()));
        self
    }

    pub fn with_choice_policy(mut self, choice_policy: ChoicePolicy) -> Self {
        self.choice_policy = choice_policy;
        self
    }

    pub fn with_output_extension(mut self, extension: impl Into<String>) -> Self {
        self.output_extension = extension.into();
        self
    }

    /// Reject settings synthesis cannot honor.
    pub fn validate(&self) -> Result<()> {
        if self.max_depth == 0 || self.max_depth > MAX_SUPPORTED_DEPTH {
            return Err(SkeletonError::ConfigError(format!(
                "max depth must be between 1 and {}, got {}",
                MAX_SUPPORTED_DEPTH, self.max_depth
            )));
        }
        Ok(())
    }

    /// Stack size for the synthesis thread.
    pub(crate) fn stack_size(&self) -> usize {
        BASE_STACK_BYTES + self.max_depth.min(MAX_SUPPORTED_DEPTH) * STACK_BYTES_PER_LEVEL
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SkeletonConfig::default();
        assert_eq!(config.max_depth, DEFAULT_MAX_DEPTH);
        assert_eq!(config.root_wrapper, RootWrapper::RootName);
        assert_eq!(config.choice_policy, ChoicePolicy::AllBranches);
        assert_eq!(config.output_extension, "xml");
        assert!(config.root_attributes.is_empty());
    }

    #[test]
    fn test_root_attributes_keep_order() {
        let config = SkeletonConfig::new()
            .with_root_attribute("version", "1.0")
            .with_root_attribute("author", "");
        assert_eq!(
            config.root_attributes,
            vec![
                ("version".to_string(), "1.0".to_string()),
                ("author".to_string(), String::new()),
            ]
        );
    }

    #[test]
    fn test_root_wrapper_matches() {
        assert!(RootWrapper::RootName.matches("Root", "Root"));
        assert!(!RootWrapper::RootName.matches("Root", "Other"));
        assert!(RootWrapper::Named("Declaration".into()).matches("Declaration", "Declaration"));
        assert!(!RootWrapper::Named("Declaration".into()).matches("Root", "Declaration"));
        assert!(!RootWrapper::Named("Declaration".into()).matches("Root", "Root"));
        assert!(!RootWrapper::Disabled.matches("Root", "Root"));
    }

    #[test]
    fn test_validate_depth_bounds() {
        assert!(SkeletonConfig::default().validate().is_ok());
        assert!(SkeletonConfig::new().with_max_depth(MAX_SUPPORTED_DEPTH).validate().is_ok());

        for depth in [0, MAX_SUPPORTED_DEPTH + 1, usize::MAX] {
            let err = SkeletonConfig::new().with_max_depth(depth).validate().unwrap_err();
            assert!(matches!(err, SkeletonError::ConfigError(_)), "{depth}: {err:?}");
        }
    }

    #[test]
    fn test_stack_size_grows_with_depth() {
        let shallow = SkeletonConfig::new().with_max_depth(16).stack_size();
        let deep = SkeletonConfig::new().with_max_depth(MAX_SUPPORTED_DEPTH).stack_size();
        assert!(shallow < deep);
        assert_eq!(
            SkeletonConfig::new().with_max_depth(usize::MAX).stack_size(),
            deep
        );
    }
}
