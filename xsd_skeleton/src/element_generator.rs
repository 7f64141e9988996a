use crate::config::SkeletonConfig;
use crate::document::DocumentNode;
use crate::error::{Result, SkeletonError};
use crate::schema_model::{SchemaElement, SchemaModel};
use tracing::debug;

/// Walks the schema model and builds the matching skeleton nodes.
///
/// Synthesis is a recursion between [`Synthesizer::synthesize`] (one element)
/// and [`Synthesizer::walk_particle`] (one model group). Both take the current
/// depth and fail with [`SkeletonError::RecursionLimitExceeded`] once it passes
/// `config.max_depth`, so self-referential types end in an error.
pub(crate) struct Synthesizer<'m, 'a> {
    pub(crate) model: &'m SchemaModel<'a>,
    pub(crate) config: &'m SkeletonConfig,
    root_name: String,
}

impl<'m, 'a> Synthesizer<'m, 'a> {
    pub(crate) fn new(model: &'m SchemaModel<'a>, config: &'m SkeletonConfig, root_name: &str) -> Self {
        Synthesizer {
            model,
            config,
            root_name: root_name.to_string(),
        }
    }

    /// Fill the already created document root with the content of `element`.
    pub(crate) fn populate_root(
        &self,
        element: &SchemaElement<'a>,
        root: &mut DocumentNode,
    ) -> Result<()> {
        self.fill(element, root, true, 0)
    }

    pub(crate) fn synthesize(
        &self,
        element: &SchemaElement<'a>,
        parent: &mut DocumentNode,
        is_document_root: bool,
        depth: usize,
    ) -> Result<()> {
        let depth = self.descend(element.name(), depth)?;

        if is_document_root
            && self
                .config
                .root_wrapper
                .matches(&self.root_name, element.name())
        {
            debug!(element = element.name(), "Collapsing wrapper into document root");
            if let Some(particle) = self.model.complex_type_of(element)? {
                self.walk_particle(&particle, parent, true, depth)?;
            }
            return Ok(());
        }

        debug!(element = element.name(), depth, "Synthesizing element");
        let node = parent.add_child(DocumentNode::new(element.name()))?;
        self.fill(element, node, false, depth)
    }

    fn fill(
        &self,
        element: &SchemaElement<'a>,
        node: &mut DocumentNode,
        is_document_root: bool,
        depth: usize,
    ) -> Result<()> {
        match self.model.complex_type_of(element)? {
            Some(particle) => {
                self.walk_particle(&particle, node, is_document_root, depth)?;
                // an empty model group still yields a leaf
                if node.is_leaf() {
                    node.make_leaf()?;
                }
            }
            None => node.make_leaf()?,
        }

        Ok(())
    }

    pub(crate) fn descend(&self, location: &str, depth: usize) -> Result<usize> {
        let depth = depth + 1;
        if depth > self.config.max_depth {
            return Err(SkeletonError::RecursionLimitExceeded {
                element: location.to_string(),
                limit: self.config.max_depth,
            });
        }

        Ok(depth)
    }
}
