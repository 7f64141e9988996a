//! Read-only view over a parsed XSD.
//!
//! The `xsd-parser` object model mirrors the XSD syntax closely. This module
//! narrows it to the shape synthesis needs: named elements, their types, and
//! the content model (particle) of each complex type.

use crate::error::{Result, SkeletonError};
use crate::fetch_elements::{fetch_elements, fetch_groups};
use crate::fetch_types::{NamedTypes, fetch_types, get_qname, is_builtin_type};
use std::collections::HashMap;
use std::fmt;
use tracing::debug;
use xsd_parser::Schemas;
use xsd_parser::models::schema::xs::{
    ComplexBaseType, ComplexBaseTypeContent, ComplexContent, ComplexContentContent, ElementType,
    ElementTypeContent, ExtensionType, ExtensionTypeContent, GroupType, GroupTypeContent,
    RestrictionType, RestrictionTypeContent,
};

/// Composition operator of a model group
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Compositor {
    /// `xs:sequence`: every child, in declaration order
    Sequence,
    /// `xs:choice`: one child out of the alternatives
    Choice,
    /// `xs:all`: every child, in any order
    All,
}

/// A model group in a complex type's content model.
#[derive(Clone, Copy)]
pub struct Particle<'a> {
    compositor: Compositor,
    source: ParticleSource<'a>,
}

#[derive(Clone, Copy)]
enum ParticleSource<'a> {
    Group(&'a GroupType),
    /// `xs:extension`: the base type's content followed by the extension's own
    Extension {
        base: Option<&'a ComplexBaseType>,
        extension: &'a ExtensionType,
    },
}

impl<'a> Particle<'a> {
    fn new(compositor: Compositor, group: &'a GroupType) -> Self {
        Particle {
            compositor,
            source: ParticleSource::Group(group),
        }
    }

    fn extension(base: Option<&'a ComplexBaseType>, extension: &'a ExtensionType) -> Self {
        Particle {
            compositor: Compositor::Sequence,
            source: ParticleSource::Extension { base, extension },
        }
    }

    pub fn compositor(&self) -> Compositor {
        self.compositor
    }
}

impl fmt::Debug for Particle<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut debug = f.debug_struct("Particle");
        debug.field("compositor", &self.compositor);
        match self.source {
            ParticleSource::Group(group) => debug.field("children", &group.content.len()),
            ParticleSource::Extension { extension, .. } => {
                debug.field("extends", &get_qname(&extension.base))
            }
        };
        debug.finish()
    }
}

/// An element declaration, with references already followed.
#[derive(Clone)]
pub struct SchemaElement<'a> {
    name: String,
    declaration: &'a ElementType,
}

impl SchemaElement<'_> {
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Debug for SchemaElement<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SchemaElement")
            .field("name", &self.name)
            .finish()
    }
}

/// The type of an element
#[derive(Debug, Clone, Copy)]
pub enum ElementKind<'a> {
    /// Complex type. `None` when it declares no model group (empty,
    /// simple content, or restricted to nothing).
    Complex(Option<Particle<'a>>),
    Simple,
    /// No declared type
    Untyped,
}

/// A child of a model group
#[derive(Debug, Clone)]
pub enum Term<'a> {
    Element(SchemaElement<'a>),
    Group(Particle<'a>),
}

pub struct SchemaModel<'a> {
    elements: Vec<(String, &'a ElementType)>,
    element_index: HashMap<String, &'a ElementType>,
    types: NamedTypes<'a>,
    groups: HashMap<String, &'a GroupType>,
}

impl<'a> SchemaModel<'a> {
    pub fn new(schemas: &'a Schemas) -> Result<Self> {
        let elements = fetch_elements(schemas)?;

        let mut element_index = HashMap::new();
        for (name, element) in elements.iter() {
            if element_index.insert(name.clone(), *element).is_some() {
                return Err(SkeletonError::XSDParserError(format!(
                    "Duplicate top-level element: {}",
                    name
                )));
            }
        }

        Ok(SchemaModel {
            elements,
            element_index,
            types: fetch_types(schemas),
            groups: fetch_groups(schemas),
        })
    }

    /// Top-level elements in declaration order; empty if there are none.
    pub fn top_level_elements(&self) -> Vec<SchemaElement<'a>> {
        self.elements
            .iter()
            .map(|(name, declaration)| SchemaElement {
                name: name.clone(),
                declaration: *declaration,
            })
            .collect()
    }

    pub fn type_of(&self, element: &SchemaElement<'a>) -> Result<ElementKind<'a>> {
        let declaration = element.declaration;
        for content in &declaration.content {
            match content {
                ElementTypeContent::ComplexType(x) => {
                    return Ok(ElementKind::Complex(self.complex_particle(x)?));
                }
                ElementTypeContent::SimpleType(_) => return Ok(ElementKind::Simple),
                ElementTypeContent::Annotation(_)
                | ElementTypeContent::Alternative(_)
                | ElementTypeContent::Unique(_)
                | ElementTypeContent::Key(_)
                | ElementTypeContent::Keyref(_) => {}
            }
        }

        match &declaration.type_ {
            Some(type_name) => self.named_type(&get_qname(type_name)),
            None => Ok(ElementKind::Untyped),
        }
    }

    /// Particle of the element's complex type. `None` for simple, untyped
    /// and empty complex types.
    pub fn complex_type_of(&self, element: &SchemaElement<'a>) -> Result<Option<Particle<'a>>> {
        match self.type_of(element)? {
            ElementKind::Complex(particle) => Ok(particle),
            ElementKind::Simple | ElementKind::Untyped => Ok(None),
        }
    }

    /// Children of a model group, in declaration order.
    ///
    /// A particle derived by extension yields the base type's particle and
    /// the extension's particle as two nested groups.
    pub fn particle_children(&self, particle: &Particle<'a>) -> Result<Vec<Term<'a>>> {
        let group = match particle.source {
            ParticleSource::Group(group) => group,
            ParticleSource::Extension { base, extension } => {
                let mut terms = vec![];
                if let Some(base) = base {
                    if let Some(base_particle) = self.complex_particle(base)? {
                        terms.push(Term::Group(base_particle));
                    }
                }
                if let Some(own_particle) = self.extension_particle(extension)? {
                    terms.push(Term::Group(own_particle));
                }
                return Ok(terms);
            }
        };

        let mut terms = vec![];
        for content in &group.content {
            match content {
                GroupTypeContent::Element(x) => terms.push(Term::Element(self.element(x)?)),
                GroupTypeContent::Sequence(x) => {
                    terms.push(Term::Group(Particle::new(Compositor::Sequence, x)))
                }
                GroupTypeContent::Choice(x) => {
                    terms.push(Term::Group(Particle::new(Compositor::Choice, x)))
                }
                GroupTypeContent::All(x) => {
                    terms.push(Term::Group(Particle::new(Compositor::All, x)))
                }
                GroupTypeContent::Group(x) => terms.push(Term::Group(self.group_reference(x)?)),
                GroupTypeContent::Any(_) => debug!("Skipping xs:any wildcard"),
                GroupTypeContent::Annotation(_) => {}
            }
        }

        Ok(terms)
    }

    fn element(&self, declaration: &'a ElementType) -> Result<SchemaElement<'a>> {
        if let Some(reference) = &declaration.ref_ {
            if declaration.name.is_some() {
                return Err(SkeletonError::DataTypeError(
                    "Element has both a name and a reference".to_string(),
                ));
            }

            let name = get_qname(reference);
            return match self.element_index.get(&name).copied() {
                Some(target) => Ok(SchemaElement {
                    name,
                    declaration: target,
                }),
                None => Err(SkeletonError::DataTypeError(format!(
                    "Cannot find referenced element: {}",
                    name
                ))),
            };
        }

        match &declaration.name {
            Some(name) => Ok(SchemaElement {
                name: name.clone(),
                declaration,
            }),
            None => Err(SkeletonError::DataTypeError(
                "Element does not have a name or a reference".to_string(),
            )),
        }
    }

    fn named_type(&self, type_name: &str) -> Result<ElementKind<'a>> {
        if let Some(complex) = self.types.complex_types.get(type_name).copied() {
            return Ok(ElementKind::Complex(self.complex_particle(complex)?));
        }

        if self.types.simple_types.contains(type_name) || is_builtin_type(type_name) {
            return Ok(ElementKind::Simple);
        }

        Err(SkeletonError::DataTypeError(format!(
            "Cannot find data type: {}",
            type_name
        )))
    }

    fn complex_particle(&self, complex: &'a ComplexBaseType) -> Result<Option<Particle<'a>>> {
        for content in &complex.content {
            match content {
                ComplexBaseTypeContent::Sequence(x) => {
                    return Ok(Some(Particle::new(Compositor::Sequence, x)));
                }
                ComplexBaseTypeContent::Choice(x) => {
                    return Ok(Some(Particle::new(Compositor::Choice, x)));
                }
                ComplexBaseTypeContent::All(x) => {
                    return Ok(Some(Particle::new(Compositor::All, x)));
                }
                ComplexBaseTypeContent::Group(x) => return self.group_reference(x).map(Some),
                ComplexBaseTypeContent::SimpleContent(_) => return Ok(None),
                ComplexBaseTypeContent::ComplexContent(x) => return self.derived_particle(x),
                ComplexBaseTypeContent::Annotation(_)
                | ComplexBaseTypeContent::OpenContent(_)
                | ComplexBaseTypeContent::Attribute(_)
                | ComplexBaseTypeContent::AttributeGroup(_)
                | ComplexBaseTypeContent::AnyAttribute(_)
                | ComplexBaseTypeContent::Assert(_) => {}
            }
        }

        Ok(None)
    }

    fn derived_particle(&self, content: &'a ComplexContent) -> Result<Option<Particle<'a>>> {
        for derivation in &content.content {
            match derivation {
                ComplexContentContent::Extension(x) => {
                    let base = self.base_type(x)?;
                    return Ok(Some(Particle::extension(base, x)));
                }
                ComplexContentContent::Restriction(x) => return self.restriction_particle(x),
                ComplexContentContent::Annotation(_) => {}
            }
        }

        Ok(None)
    }

    /// Complex base of an extension. Built-in and simple bases have no
    /// particle to inherit.
    fn base_type(&self, extension: &'a ExtensionType) -> Result<Option<&'a ComplexBaseType>> {
        let base_name = get_qname(&extension.base);
        if let Some(base) = self.types.complex_types.get(&base_name).copied() {
            return Ok(Some(base));
        }

        if self.types.simple_types.contains(&base_name) || is_builtin_type(&base_name) {
            return Ok(None);
        }

        Err(SkeletonError::DataTypeError(format!(
            "Cannot find base type: {}",
            base_name
        )))
    }

    fn extension_particle(&self, extension: &'a ExtensionType) -> Result<Option<Particle<'a>>> {
        for content in &extension.content {
            match content {
                ExtensionTypeContent::Sequence(x) => {
                    return Ok(Some(Particle::new(Compositor::Sequence, x)));
                }
                ExtensionTypeContent::Choice(x) => {
                    return Ok(Some(Particle::new(Compositor::Choice, x)));
                }
                ExtensionTypeContent::All(x) => {
                    return Ok(Some(Particle::new(Compositor::All, x)));
                }
                ExtensionTypeContent::Group(x) => return self.group_reference(x).map(Some),
                ExtensionTypeContent::Annotation(_)
                | ExtensionTypeContent::OpenContent(_)
                | ExtensionTypeContent::Attribute(_)
                | ExtensionTypeContent::AttributeGroup(_)
                | ExtensionTypeContent::AnyAttribute(_)
                | ExtensionTypeContent::Assert(_) => {}
            }
        }

        Ok(None)
    }

    /// A restriction restates the content it keeps, so only its own particle
    /// counts.
    fn restriction_particle(
        &self,
        restriction: &'a RestrictionType,
    ) -> Result<Option<Particle<'a>>> {
        for content in &restriction.content {
            match content {
                RestrictionTypeContent::Sequence(x) => {
                    return Ok(Some(Particle::new(Compositor::Sequence, x)));
                }
                RestrictionTypeContent::Choice(x) => {
                    return Ok(Some(Particle::new(Compositor::Choice, x)));
                }
                RestrictionTypeContent::All(x) => {
                    return Ok(Some(Particle::new(Compositor::All, x)));
                }
                RestrictionTypeContent::Group(x) => return self.group_reference(x).map(Some),
                RestrictionTypeContent::Annotation(_)
                | RestrictionTypeContent::OpenContent(_)
                | RestrictionTypeContent::SimpleType(_)
                | RestrictionTypeContent::Facet(_)
                | RestrictionTypeContent::Attribute(_)
                | RestrictionTypeContent::AttributeGroup(_)
                | RestrictionTypeContent::AnyAttribute(_)
                | RestrictionTypeContent::Assert(_) => {}
            }
        }

        Ok(None)
    }

    /// Follow `xs:group ref=".."` to the model group it names.
    fn group_reference(&self, group: &'a GroupType) -> Result<Particle<'a>> {
        let Some(reference) = &group.ref_ else {
            return Err(SkeletonError::DataTypeError(
                "Group does not have a reference".to_string(),
            ));
        };

        let name = get_qname(reference);
        let Some(definition) = self.groups.get(&name).copied() else {
            return Err(SkeletonError::DataTypeError(format!(
                "Cannot find group: {}",
                name
            )));
        };

        for content in &definition.content {
            match content {
                GroupTypeContent::Sequence(x) => {
                    return Ok(Particle::new(Compositor::Sequence, x));
                }
                GroupTypeContent::Choice(x) => return Ok(Particle::new(Compositor::Choice, x)),
                GroupTypeContent::All(x) => return Ok(Particle::new(Compositor::All, x)),
                GroupTypeContent::Annotation(_)
                | GroupTypeContent::Element(_)
                | GroupTypeContent::Group(_)
                | GroupTypeContent::Any(_) => {}
            }
        }

        Err(SkeletonError::DataTypeError(format!(
            "Group {} does not contain a sequence, choice or all",
            name
        )))
    }
}
