//! # Módulo Pattern — Meta-Padrões e Vértices
//!
//! Um [`MetaPattern`] é uma árvore-molde usada de dois jeitos:
//!
//! - como **filtro de entrada** — "que forma cada premissa de uma regra precisa ter"
//! - como **alvo de geração** — "que forma tem a conclusão desejada" ou
//!   "que forma a premissa precisa ter para chegar lá"
//!
//! Cada nó da árvore é um de três casos:
//!
//! | Caso | Significado | Exemplo |
//! |------|-------------|---------|
//! | `Atom(id)` | referência concreta a um átomo existente | `Gato` |
//! | `Any(T)` | curinga tipado — qualquer átomo que é-um `T` | `?ConceptNode`, `?Atom` |
//! | `Link { T, filhos }` | nó tipado com filhos ordenados | `Inheritance(?Atom, ?Atom)` |
//!
//! ## Invariante de Aridade
//!
//! Um `Link` cujo tipo exige aridade fixa deve ter exatamente esse número
//! de filhos. O construtor [`MetaPattern::link`] garante isso.
//!
//! ## Vértices
//!
//! As premissas entregues a uma regra são [`Vertex`]: ou uma referência a
//! átomo, ou um literal. Regras só aceitam átomos; um literal onde se espera
//! um átomo é violação de contrato.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::{AtomId, AtomType, FactStore};

/// Padrão com aridade incompatível com o tipo.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PatternError {
    #[error("padrão {atom_type} exige {expected} filhos, recebeu {found}")]
    Arity {
        atom_type: AtomType,
        expected: usize,
        found: usize,
    },

    #[error("{0} não é um tipo de link")]
    NotALinkType(AtomType),
}

/// Árvore-molde de átomos concretos, curingas tipados e sub-árvores tipadas.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MetaPattern {
    /// Referência a um átomo existente.
    Atom(AtomId),
    /// Qualquer átomo cujo tipo é-um o tipo dado (`Any(Atom)` = sem restrição).
    Any(AtomType),
    /// Nó tipado com filhos ordenados.
    Link {
        atom_type: AtomType,
        outgoing: Vec<MetaPattern>,
    },
}

impl MetaPattern {
    /// Curinga sem restrição de tipo.
    pub fn any() -> Self {
        MetaPattern::Any(AtomType::Atom)
    }

    /// Constrói um nó tipado, respeitando a aridade fixa do tipo.
    pub fn link(atom_type: AtomType, outgoing: Vec<MetaPattern>) -> Result<Self, PatternError> {
        if !atom_type.is_link() {
            return Err(PatternError::NotALinkType(atom_type));
        }
        if let Some(expected) = atom_type.fixed_arity() {
            if outgoing.len() != expected {
                return Err(PatternError::Arity {
                    atom_type,
                    expected,
                    found: outgoing.len(),
                });
            }
        }
        Ok(MetaPattern::Link { atom_type, outgoing })
    }

    /// Tipo da raiz. Para referências concretas, consulta a base.
    pub fn root_type(&self, store: &dyn FactStore) -> Option<AtomType> {
        match self {
            MetaPattern::Atom(id) => store.type_of(*id),
            MetaPattern::Any(t) => Some(*t),
            MetaPattern::Link { atom_type, .. } => Some(*atom_type),
        }
    }

    /// Filhos da raiz como padrões.
    ///
    /// Uma referência concreta é expandida nos seus filhos reais; um curinga
    /// não tem forma conhecida e devolve `None`.
    pub fn children(&self, store: &dyn FactStore) -> Option<Vec<MetaPattern>> {
        match self {
            MetaPattern::Atom(id) => store
                .outgoing(*id)
                .map(|out| out.iter().copied().map(MetaPattern::Atom).collect()),
            MetaPattern::Any(_) => None,
            MetaPattern::Link { outgoing, .. } => Some(outgoing.clone()),
        }
    }

    /// O átomo casa com este padrão?
    ///
    /// Curingas usam o teste de subsunção da base; nós tipados exigem o mesmo
    /// número de filhos e casamento posição a posição.
    pub fn matches(&self, atom: AtomId, store: &dyn FactStore) -> bool {
        match self {
            MetaPattern::Atom(id) => *id == atom,
            MetaPattern::Any(t) => store
                .type_of(atom)
                .is_some_and(|actual| store.inherits_type(actual, *t)),
            MetaPattern::Link { atom_type, outgoing } => {
                let Some(actual) = store.type_of(atom) else {
                    return false;
                };
                if !store.inherits_type(actual, *atom_type) {
                    return false;
                }
                let Some(children) = store.outgoing(atom) else {
                    return false;
                };
                children.len() == outgoing.len()
                    && outgoing
                        .iter()
                        .zip(children)
                        .all(|(pattern, child)| pattern.matches(*child, store))
            }
        }
    }

    /// Descrição legível usando os nomes da base: `Inheritance(Mamífero, Gato)`.
    pub fn describe(&self, store: &dyn FactStore) -> String {
        match self {
            MetaPattern::Atom(id) => describe_atom(*id, store),
            MetaPattern::Any(t) => format!("?{}", t.short_name()),
            MetaPattern::Link { atom_type, outgoing } => {
                let children: Vec<String> = outgoing.iter().map(|c| c.describe(store)).collect();
                format!("{}({})", atom_type.short_name(), children.join(", "))
            }
        }
    }
}

fn describe_atom(id: AtomId, store: &dyn FactStore) -> String {
    if let Some(name) = store.name_of(id) {
        return name.to_string();
    }
    match (store.type_of(id), store.outgoing(id)) {
        (Some(t), Some(out)) if !out.is_empty() => {
            let children: Vec<String> = out.iter().map(|c| describe_atom(*c, store)).collect();
            format!("{}({})", t.short_name(), children.join(", "))
        }
        (Some(t), _) => t.short_name().to_string(),
        (None, _) => format!("<{}>", id),
    }
}

/// Premissa entregue a uma regra: referência a átomo ou literal.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Vertex {
    Atom(AtomId),
    Literal(String),
}

impl Vertex {
    pub fn as_atom(&self) -> Option<AtomId> {
        match self {
            Vertex::Atom(id) => Some(*id),
            Vertex::Literal(_) => None,
        }
    }
}

impl From<AtomId> for Vertex {
    fn from(id: AtomId) -> Self {
        Vertex::Atom(id)
    }
}

impl fmt::Display for Vertex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Vertex::Atom(id) => write!(f, "#{}", id),
            Vertex::Literal(s) => write!(f, "{:?}", s),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{KnowledgeBase, TruthValue};

    fn kb() -> (KnowledgeBase, AtomId, AtomId, AtomId) {
        let mut kb = KnowledgeBase::new();
        let cat = kb.add_node(AtomType::ConceptNode, "Gato", TruthValue::new(0.1, 0.9));
        let mammal = kb.add_node(AtomType::ConceptNode, "Mamífero", TruthValue::new(0.3, 0.9));
        let link = kb
            .add_link(AtomType::SubsetLink, vec![cat, mammal], TruthValue::new(0.9, 0.8))
            .unwrap();
        (kb, cat, mammal, link)
    }

    /// O construtor rejeita aridade errada para tipos binários
    #[test]
    fn test_link_constructor_checks_arity() {
        let err = MetaPattern::link(AtomType::InheritanceLink, vec![MetaPattern::any()]).unwrap_err();
        assert_eq!(
            err,
            PatternError::Arity { atom_type: AtomType::InheritanceLink, expected: 2, found: 1 }
        );
        assert!(MetaPattern::link(AtomType::ListLink, vec![MetaPattern::any(); 3]).is_ok());
        assert!(MetaPattern::link(AtomType::ConceptNode, vec![]).is_err());
    }

    /// Curingas casam por subsunção de tipo
    #[test]
    fn test_wildcard_matches_subtypes() {
        let (kb, cat, _, link) = kb();
        assert!(MetaPattern::any().matches(link, &kb));
        assert!(MetaPattern::Any(AtomType::InheritanceLink).matches(link, &kb));
        assert!(!MetaPattern::Any(AtomType::ImplicationLink).matches(link, &kb));
        assert!(MetaPattern::Any(AtomType::Node).matches(cat, &kb));
        assert!(!MetaPattern::any().matches(uuid::Uuid::new_v4(), &kb));
    }

    /// Casamento estrutural posição a posição
    #[test]
    fn test_structural_match() {
        let (kb, cat, mammal, link) = kb();
        let filter = MetaPattern::link(
            AtomType::InheritanceLink,
            vec![MetaPattern::any(), MetaPattern::any()],
        )
        .unwrap();
        assert!(filter.matches(link, &kb));
        assert!(!filter.matches(cat, &kb));

        let exact = MetaPattern::link(
            AtomType::InheritanceLink,
            vec![MetaPattern::Atom(cat), MetaPattern::Atom(mammal)],
        )
        .unwrap();
        assert!(exact.matches(link, &kb));

        let swapped = MetaPattern::link(
            AtomType::InheritanceLink,
            vec![MetaPattern::Atom(mammal), MetaPattern::Atom(cat)],
        )
        .unwrap();
        assert!(!swapped.matches(link, &kb));
    }

    /// Referência concreta expande para os filhos reais
    #[test]
    fn test_root_type_and_children() {
        let (kb, cat, mammal, link) = kb();
        let pattern = MetaPattern::Atom(link);
        assert_eq!(pattern.root_type(&kb), Some(AtomType::SubsetLink));
        assert_eq!(
            pattern.children(&kb),
            Some(vec![MetaPattern::Atom(cat), MetaPattern::Atom(mammal)])
        );
        assert_eq!(MetaPattern::any().children(&kb), None);
    }

    /// Descrição usa os nomes dos nós
    #[test]
    fn test_describe() {
        let (kb, cat, mammal, link) = kb();
        let pattern = MetaPattern::link(
            AtomType::InheritanceLink,
            vec![MetaPattern::Atom(mammal), MetaPattern::Atom(cat)],
        )
        .unwrap();
        assert_eq!(pattern.describe(&kb), "Inheritance(Mamífero, Gato)");
        assert_eq!(MetaPattern::Atom(link).describe(&kb), "Subset(Gato, Mamífero)");
        assert_eq!(MetaPattern::any().describe(&kb), "?Atom");
    }

    /// Literais não são átomos
    #[test]
    fn test_vertex_as_atom() {
        let (_, cat, _, _) = kb();
        assert_eq!(Vertex::from(cat).as_atom(), Some(cat));
        assert_eq!(Vertex::Literal("42".into()).as_atom(), None);
    }
}
