use crate::config::ChoicePolicy;
use crate::document::DocumentNode;
use crate::element_generator::Synthesizer;
use crate::error::Result;
use crate::schema_model::{Compositor, Particle, Term};

impl<'a> Synthesizer<'_, 'a> {
    /// Emit the contents of a model group into `target`.
    ///
    /// Nested groups add no node of their own; their elements land directly
    /// in `target`. Children are always emitted in declaration order.
    pub(crate) fn walk_particle(
        &self,
        particle: &Particle<'a>,
        target: &mut DocumentNode,
        target_is_root: bool,
        depth: usize,
    ) -> Result<()> {
        let depth = self.descend(target.tag_name(), depth)?;
        let mut terms = self.model.particle_children(particle)?;

        match (particle.compositor(), self.config.choice_policy) {
            (Compositor::Choice, ChoicePolicy::FirstBranch) => terms.truncate(1),
            (Compositor::Choice, ChoicePolicy::AllBranches)
            | (Compositor::Sequence, _)
            | (Compositor::All, _) => {}
        }

        for term in terms.iter() {
            match term {
                Term::Element(element) => self.synthesize(element, target, target_is_root, depth)?,
                Term::Group(group) => self.walk_particle(group, target, target_is_root, depth)?,
            }
        }

        Ok(())
    }
}
