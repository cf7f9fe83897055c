//! Rule-based reasoner for [`MemOntology`](super::MemOntology).
//!
//! Computes a forward-chained closure over the asserted axioms:
//!
//! - sub-class and sub-property hierarchies are closed transitively, with
//!   equivalence treated as mutual subsumption and subsumption cycles reported
//!   as equivalences;
//! - class membership propagates to every super class;
//! - object property assertions propagate through inverse properties and
//!   super properties, data property assertions through super properties;
//! - `SameIndividual` is closed under transitivity, and individuals known to
//!   be the same share their class memberships.
//!
//! The closure is inconsistent when an individual belongs to two disjoint
//! classes, or when two individuals are both the same and different.

use indexmap::{IndexMap, IndexSet};
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::unionfind::UnionFind;
use petgraph::visit::Dfs;

use super::axiom::Axiom;
use super::entity::Entity;
use crate::error::{OntologyError, OntologyResult};

/// Subsumption graph: an edge `a -> b` means `a ⊑ b`.
#[derive(Default)]
struct Hierarchy {
    graph: DiGraph<Entity, ()>,
    nodes: IndexMap<Entity, NodeIndex>,
}

impl Hierarchy {
    fn node(&mut self, entity: &Entity) -> NodeIndex {
        if let Some(&idx) = self.nodes.get(entity) {
            return idx;
        }
        let idx = self.graph.add_node(entity.clone());
        self.nodes.insert(entity.clone(), idx);
        idx
    }

    fn subsume(&mut self, sub: &Entity, sup: &Entity) {
        let a = self.node(sub);
        let b = self.node(sup);
        if a != b {
            self.graph.update_edge(a, b, ());
        }
    }

    /// Strict ancestors of `entity`, nearest first in DFS order.
    fn ancestors(&self, entity: &Entity) -> Vec<Entity> {
        let Some(&start) = self.nodes.get(entity) else {
            return Vec::new();
        };
        let mut dfs = Dfs::new(&self.graph, start);
        let mut out = Vec::new();
        while let Some(idx) = dfs.next(&self.graph) {
            if idx != start {
                out.push(self.graph[idx].clone());
            }
        }
        out
    }
}

/// Compute the closure of `asserted`. The result starts with the asserted
/// axioms in their original order, followed by the derived ones.
pub fn infer(asserted: &IndexSet<Axiom>) -> OntologyResult<IndexSet<Axiom>> {
    let mut classes = Hierarchy::default();
    let mut properties = Hierarchy::default();
    let mut inverses: IndexMap<Entity, Vec<Entity>> = IndexMap::new();

    for axiom in asserted {
        match axiom {
            Axiom::SubClassOf { sub, sup } => classes.subsume(sub, sup),
            Axiom::EquivalentClasses { left, right } => {
                classes.subsume(left, right);
                classes.subsume(right, left);
            }
            Axiom::SubPropertyOf { sub, sup } => properties.subsume(sub, sup),
            Axiom::EquivalentProperties { left, right } => {
                properties.subsume(left, right);
                properties.subsume(right, left);
            }
            Axiom::InverseProperties { left, right } => {
                inverses.entry(left.clone()).or_default().push(right.clone());
                if left != right {
                    inverses.entry(right.clone()).or_default().push(left.clone());
                }
            }
            _ => {}
        }
    }

    let mut closure = asserted.clone();
    close_hierarchy(
        &classes,
        &mut closure,
        |sub, sup| Axiom::SubClassOf { sub, sup },
        Axiom::equivalent_classes,
    );
    close_hierarchy(
        &properties,
        &mut closure,
        |sub, sup| Axiom::SubPropertyOf { sub, sup },
        Axiom::equivalent_properties,
    );

    // Class membership and property assertions.
    let mut derived = Vec::new();
    for axiom in asserted {
        match axiom {
            Axiom::ClassAssertion { individual, class } => {
                for sup in classes.ancestors(class) {
                    derived.push(Axiom::ClassAssertion {
                        individual: individual.clone(),
                        class: sup,
                    });
                }
            }
            Axiom::ObjectPropertyAssertion {
                subject,
                property,
                object,
            } => {
                let mut links = vec![(subject, property.clone(), object)];
                for inverse in inverses.get(property).into_iter().flatten() {
                    links.push((object, inverse.clone(), subject));
                }
                for (s, p, o) in links {
                    for sup in properties.ancestors(&p) {
                        derived.push(Axiom::ObjectPropertyAssertion {
                            subject: s.clone(),
                            property: sup,
                            object: o.clone(),
                        });
                    }
                    derived.push(Axiom::ObjectPropertyAssertion {
                        subject: s.clone(),
                        property: p,
                        object: o.clone(),
                    });
                }
            }
            Axiom::DataPropertyAssertion {
                subject,
                property,
                value,
            } => {
                for sup in properties.ancestors(property) {
                    derived.push(Axiom::DataPropertyAssertion {
                        subject: subject.clone(),
                        property: sup,
                        value: value.clone(),
                    });
                }
            }
            _ => {}
        }
    }
    closure.extend(derived);

    close_same_individuals(asserted, &mut closure)?;
    check_disjoint_classes(asserted, &closure)?;
    Ok(closure)
}

fn close_hierarchy(
    hierarchy: &Hierarchy,
    closure: &mut IndexSet<Axiom>,
    subsumption: impl Fn(Entity, Entity) -> Axiom,
    equivalence: impl Fn(Entity, Entity) -> Axiom,
) {
    for entity in hierarchy.nodes.keys() {
        let ancestors = hierarchy.ancestors(entity);
        for ancestor in ancestors {
            if hierarchy.ancestors(&ancestor).contains(entity) {
                closure.insert(equivalence(entity.clone(), ancestor.clone()));
            }
            closure.insert(subsumption(entity.clone(), ancestor));
        }
    }
}

fn close_same_individuals(
    asserted: &IndexSet<Axiom>,
    closure: &mut IndexSet<Axiom>,
) -> OntologyResult<()> {
    let mut index: IndexMap<&Entity, usize> = IndexMap::new();
    for axiom in asserted {
        if let Axiom::SameIndividual { left, right } | Axiom::DifferentIndividuals { left, right } =
            axiom
        {
            for individual in [left, right] {
                let next = index.len();
                index.entry(individual).or_insert(next);
            }
        }
    }
    if index.is_empty() {
        return Ok(());
    }

    let mut same = UnionFind::<usize>::new(index.len());
    for axiom in asserted {
        if let Axiom::SameIndividual { left, right } = axiom {
            same.union(index[left], index[right]);
        }
    }

    for axiom in asserted {
        if let Axiom::DifferentIndividuals { left, right } = axiom {
            if left == right || same.equiv(index[left], index[right]) {
                return Err(OntologyError::AxiomConflict {
                    axiom: axiom.to_string(),
                    reason: format!("{left} and {right} are also asserted to be the same individual"),
                });
            }
        }
    }

    let individuals: Vec<&Entity> = index.keys().copied().collect();
    for (i, a) in individuals.iter().enumerate() {
        for b in &individuals[i + 1..] {
            if same.equiv(index[*a], index[*b]) {
                closure.insert(Axiom::same_individual((*a).clone(), (*b).clone()));
            }
        }
    }

    let memberships: Vec<(usize, Entity)> = closure
        .iter()
        .filter_map(|axiom| match axiom {
            Axiom::ClassAssertion { individual, class } => index
                .get(individual)
                .map(|&i| (same.find(i), class.clone())),
            _ => None,
        })
        .collect();
    for (root, class) in memberships {
        for (individual, &i) in &index {
            if same.find(i) == root {
                closure.insert(Axiom::ClassAssertion {
                    individual: (*individual).clone(),
                    class: class.clone(),
                });
            }
        }
    }
    Ok(())
}

fn check_disjoint_classes(asserted: &IndexSet<Axiom>, closure: &IndexSet<Axiom>) -> OntologyResult<()> {
    let mut types: IndexMap<&Entity, IndexSet<&Entity>> = IndexMap::new();
    for axiom in closure {
        if let Axiom::ClassAssertion { individual, class } = axiom {
            types.entry(individual).or_default().insert(class);
        }
    }
    for axiom in asserted {
        let Axiom::DisjointClasses { left, right } = axiom else {
            continue;
        };
        for (individual, classes) in &types {
            if classes.contains(left) && classes.contains(right) {
                return Err(OntologyError::AxiomConflict {
                    axiom: axiom.to_string(),
                    reason: format!("{individual} is an instance of both {left} and {right}"),
                });
            }
        }
    }
    Ok(())
}
