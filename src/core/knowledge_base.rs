//! # KnowledgeBase — Base de Fatos em Memória
//!
//! A [`KnowledgeBase`] armazena todos os átomos (nós e links) em memória,
//! com um índice reverso para busca rápida, e implementa [`FactStore`]
//! para que as regras possam consultá-la.
//!
//! ## Armazenamento
//!
//! - **Átomos**: `HashMap<AtomId, Atom>` — busca O(1) por ID
//! - **Índice reverso**: `HashMap<AtomId, Vec<AtomId>>` — "quais links contêm este átomo?"
//!
//! O índice reverso **não é serializado** (`#[serde(skip)]`).
//! Após desserialização, deve ser reconstruído via [`rebuild_index()`](KnowledgeBase::rebuild_index).
//!
//! ## Exemplo de Uso
//!
//! ```rust
//! use pln_rules::core::{AtomType, KnowledgeBase, TruthValue};
//!
//! let mut kb = KnowledgeBase::new();
//! let cat = kb.add_node(AtomType::ConceptNode, "Gato", TruthValue::new(0.1, 0.9));
//! let mammal = kb.add_node(AtomType::ConceptNode, "Mamífero", TruthValue::new(0.3, 0.9));
//! let link = kb
//!     .add_link(AtomType::InheritanceLink, vec![cat, mammal], TruthValue::new(0.9, 0.8))
//!     .unwrap();
//! assert_eq!(kb.describe(link), "Inheritance(Gato, Mamífero) ⟨0.90, 0.80⟩");
//! ```

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::atom::{Atom, AtomId};
use super::store::FactStore;
use super::{AtomType, TruthValue};

/// Falhas ao inserir ou alterar átomos.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StoreError {
    #[error("átomo desconhecido: {0}")]
    UnknownAtom(AtomId),

    #[error("{atom_type} exige {expected} filhos, recebeu {found}")]
    Arity {
        atom_type: AtomType,
        expected: usize,
        found: usize,
    },

    #[error("{0} não é um tipo de link")]
    NotALinkType(AtomType),

    #[error("{0} precisa de pelo menos um filho")]
    EmptyLink(AtomType),
}

#[derive(Default, Serialize, Deserialize)]
pub struct KnowledgeBase {
    pub atoms: HashMap<AtomId, Atom>,

    #[serde(skip, default)]
    incoming: HashMap<AtomId, Vec<AtomId>>,
}

impl KnowledgeBase {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reconstrói o índice reverso a partir dos links armazenados.
    pub fn rebuild_index(&mut self) {
        self.incoming.clear();
        for (link_id, atom) in &self.atoms {
            for child in &atom.outgoing {
                self.incoming.entry(*child).or_default().push(*link_id);
            }
        }
    }

    /// Insere um nó, ou devolve o ID do nó existente com mesmo tipo e nome.
    ///
    /// Quando o nó já existe, o valor de verdade novo é combinado por revisão.
    pub fn add_node(&mut self, atom_type: AtomType, name: &str, truth: TruthValue) -> AtomId {
        if let Some(id) = self.find_node(atom_type, name) {
            if let Some(atom) = self.atoms.get_mut(&id) {
                atom.truth = atom.truth.revision(&truth);
                tracing::debug!(id = %id, name, "KB: nó revisado");
            }
            return id;
        }
        let atom = Atom::node(atom_type, name, truth);
        let id = atom.id;
        tracing::debug!(id = %id, atom_type = %atom_type, name, "KB: nó armazenado");
        self.atoms.insert(id, atom);
        id
    }

    /// Insere um link sobre átomos existentes.
    ///
    /// Rejeita links sem filhos, filhos desconhecidos e violações de aridade
    /// fixa. Se já existe
    /// um link com o mesmo tipo e os mesmos filhos (na mesma ordem), os
    /// valores de verdade são revisados e o ID existente é devolvido.
    pub fn add_link(
        &mut self,
        atom_type: AtomType,
        outgoing: Vec<AtomId>,
        truth: TruthValue,
    ) -> Result<AtomId, StoreError> {
        if !atom_type.is_link() {
            return Err(StoreError::NotALinkType(atom_type));
        }
        if outgoing.is_empty() {
            return Err(StoreError::EmptyLink(atom_type));
        }
        if let Some(expected) = atom_type.fixed_arity() {
            if outgoing.len() != expected {
                return Err(StoreError::Arity {
                    atom_type,
                    expected,
                    found: outgoing.len(),
                });
            }
        }
        if let Some(missing) = outgoing.iter().find(|c| !self.atoms.contains_key(*c)) {
            return Err(StoreError::UnknownAtom(*missing));
        }

        if let Some(id) = self.find_link(atom_type, &outgoing) {
            if let Some(atom) = self.atoms.get_mut(&id) {
                atom.truth = atom.truth.revision(&truth);
                tracing::debug!(id = %id, atom_type = %atom_type, "KB: link revisado");
            }
            return Ok(id);
        }

        let atom = Atom::link(atom_type, outgoing, truth);
        let id = atom.id;
        tracing::debug!(id = %id, atom_type = %atom_type, "KB: link armazenado");
        for child in &atom.outgoing {
            self.incoming.entry(*child).or_default().push(id);
        }
        self.atoms.insert(id, atom);
        Ok(id)
    }

    /// Substitui o valor de verdade de um átomo existente.
    pub fn set_truth_value(&mut self, id: AtomId, truth: TruthValue) -> Result<(), StoreError> {
        let atom = self.atoms.get_mut(&id).ok_or(StoreError::UnknownAtom(id))?;
        atom.truth = truth;
        Ok(())
    }

    pub fn get(&self, id: AtomId) -> Option<&Atom> {
        self.atoms.get(&id)
    }

    /// Busca um nó por tipo e nome (case-insensitive).
    pub fn find_node(&self, atom_type: AtomType, name: &str) -> Option<AtomId> {
        let name_lower = name.to_lowercase();
        self.atoms
            .values()
            .find(|a| {
                a.atom_type == atom_type
                    && a.name.as_deref().map(str::to_lowercase).as_deref() == Some(name_lower.as_str())
            })
            .map(|a| a.id)
    }

    /// Busca um link com exatamente este tipo e estes filhos, na mesma ordem.
    pub fn find_link(&self, atom_type: AtomType, outgoing: &[AtomId]) -> Option<AtomId> {
        // Todo link que contém o primeiro filho está no índice reverso dele.
        let first = outgoing.first()?;
        self.incoming.get(first)?.iter().copied().find(|id| {
            self.atoms
                .get(id)
                .is_some_and(|a| a.atom_type == atom_type && a.outgoing == outgoing)
        })
    }

    /// Links que contêm o átomo como filho.
    pub fn incoming(&self, id: AtomId) -> Vec<&Atom> {
        self.incoming
            .get(&id)
            .map(|ids| ids.iter().filter_map(|l| self.atoms.get(l)).collect())
            .unwrap_or_default()
    }

    /// Links cujo tipo é-um `family`.
    pub fn links_of_type(&self, family: AtomType) -> Vec<&Atom> {
        self.atoms
            .values()
            .filter(|a| a.is_link() && a.atom_type.inherits(family))
            .collect()
    }

    /// Descrição legível: `Inheritance(Gato, Mamífero) ⟨0.90, 0.80⟩`.
    pub fn describe(&self, id: AtomId) -> String {
        match self.atoms.get(&id) {
            Some(atom) => format!("{} {}", self.describe_shape(id), atom.truth),
            None => format!("<{}>", id),
        }
    }

    /// Como [`describe`](Self::describe), sem o valor de verdade.
    pub fn describe_shape(&self, id: AtomId) -> String {
        match self.atoms.get(&id) {
            Some(atom) if atom.is_link() => {
                let children: Vec<String> =
                    atom.outgoing.iter().map(|c| self.describe_shape(*c)).collect();
                format!("{}({})", atom.atom_type.short_name(), children.join(", "))
            }
            Some(atom) => atom.name.clone().unwrap_or_else(|| atom.atom_type.to_string()),
            None => format!("<{}>", id),
        }
    }

    pub fn atom_count(&self) -> usize {
        self.atoms.len()
    }

    pub fn link_count(&self) -> usize {
        self.atoms.values().filter(|a| a.is_link()).count()
    }
}

impl FactStore for KnowledgeBase {
    fn type_of(&self, atom: AtomId) -> Option<AtomType> {
        self.atoms.get(&atom).map(|a| a.atom_type)
    }

    fn outgoing(&self, atom: AtomId) -> Option<&[AtomId]> {
        self.atoms.get(&atom).map(|a| a.outgoing.as_slice())
    }

    fn truth_value_of(&self, atom: AtomId) -> Option<&TruthValue> {
        self.atoms.get(&atom).map(|a| &a.truth)
    }

    fn name_of(&self, atom: AtomId) -> Option<&str> {
        self.atoms.get(&atom).and_then(|a| a.name.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cat_mammal() -> (KnowledgeBase, AtomId, AtomId, AtomId) {
        let mut kb = KnowledgeBase::new();
        let cat = kb.add_node(AtomType::ConceptNode, "Gato", TruthValue::new(0.1, 0.9));
        let mammal = kb.add_node(AtomType::ConceptNode, "Mamífero", TruthValue::new(0.3, 0.9));
        let link = kb
            .add_link(AtomType::InheritanceLink, vec![cat, mammal], TruthValue::new(0.9, 0.8))
            .unwrap();
        (kb, cat, mammal, link)
    }

    /// Consultas do FactStore refletem o que foi inserido
    #[test]
    fn test_fact_store_queries() {
        let (kb, cat, mammal, link) = cat_mammal();
        assert_eq!(kb.type_of(link), Some(AtomType::InheritanceLink));
        assert_eq!(kb.outgoing(link), Some(&[cat, mammal][..]));
        assert_eq!(kb.outgoing_at(link, 1), Some(mammal));
        assert_eq!(kb.outgoing_at(link, 2), None);
        assert_eq!(kb.outgoing(cat), Some(&[][..]));
        assert_eq!(kb.truth_value_of(cat), Some(&TruthValue::new(0.1, 0.9)));
        assert!(kb.type_of(uuid::Uuid::new_v4()).is_none());
    }

    /// Links de aridade fixa rejeitam número errado de filhos
    #[test]
    fn test_add_link_rejects_bad_arity() {
        let (mut kb, cat, _, _) = cat_mammal();
        let err = kb
            .add_link(AtomType::InheritanceLink, vec![cat], TruthValue::unknown())
            .unwrap_err();
        assert_eq!(
            err,
            StoreError::Arity { atom_type: AtomType::InheritanceLink, expected: 2, found: 1 }
        );
        assert!(kb
            .add_link(AtomType::ConceptNode, vec![cat], TruthValue::unknown())
            .is_err());
    }

    /// Filhos precisam existir na base
    #[test]
    fn test_add_link_rejects_unknown_child() {
        let (mut kb, cat, _, _) = cat_mammal();
        let ghost = uuid::Uuid::new_v4();
        let err = kb
            .add_link(AtomType::InheritanceLink, vec![cat, ghost], TruthValue::unknown())
            .unwrap_err();
        assert_eq!(err, StoreError::UnknownAtom(ghost));
    }

    /// Inserir o mesmo link duas vezes revisa em vez de duplicar
    #[test]
    fn test_duplicate_link_is_revised() {
        let (mut kb, cat, mammal, link) = cat_mammal();
        let again = kb
            .add_link(AtomType::InheritanceLink, vec![cat, mammal], TruthValue::new(0.9, 0.8))
            .unwrap();
        assert_eq!(again, link);
        assert_eq!(kb.link_count(), 1);
        assert!(kb.get(link).unwrap().truth.confidence() > 0.8);

        // Ordem inversa é outro link
        let reversed = kb
            .add_link(AtomType::InheritanceLink, vec![mammal, cat], TruthValue::unknown())
            .unwrap();
        assert_ne!(reversed, link);
        assert_eq!(kb.link_count(), 2);
    }

    /// O índice reverso é reconstruído após desserialização
    #[test]
    fn test_rebuild_index_after_roundtrip() {
        let (kb, cat, mammal, link) = cat_mammal();
        let json = serde_json::to_string(&kb).unwrap();
        let mut loaded: KnowledgeBase = serde_json::from_str(&json).unwrap();
        assert!(loaded.find_link(AtomType::InheritanceLink, &[cat, mammal]).is_none());
        loaded.rebuild_index();
        assert_eq!(loaded.find_link(AtomType::InheritanceLink, &[cat, mammal]), Some(link));
        assert_eq!(loaded.incoming(mammal).len(), 1);
    }

    /// Filtragem por família usa a taxonomia
    #[test]
    fn test_links_of_type_uses_taxonomy() {
        let (mut kb, cat, mammal, _) = cat_mammal();
        kb.add_link(AtomType::SubsetLink, vec![mammal, cat], TruthValue::unknown())
            .unwrap();
        kb.add_link(AtomType::SimilarityLink, vec![mammal, cat], TruthValue::unknown())
            .unwrap();
        assert_eq!(kb.links_of_type(AtomType::InheritanceLink).len(), 2);
        assert_eq!(kb.links_of_type(AtomType::SubsetLink).len(), 1);
        assert_eq!(kb.links_of_type(AtomType::Link).len(), 3);
    }

    /// Links sem filhos são rejeitados, mesmo sem aridade fixa
    #[test]
    fn test_add_link_rejects_empty_outgoing() {
        let (mut kb, cat, mammal, _) = cat_mammal();
        let err = kb
            .add_link(AtomType::ListLink, vec![], TruthValue::unknown())
            .unwrap_err();
        assert_eq!(err, StoreError::EmptyLink(AtomType::ListLink));
        assert_eq!(kb.atom_count(), 3);

        // Com filhos, ListLink de qualquer tamanho é revisado como os demais
        let list = kb
            .add_link(AtomType::ListLink, vec![cat, mammal, cat], TruthValue::new(0.5, 0.5))
            .unwrap();
        let again = kb
            .add_link(AtomType::ListLink, vec![cat, mammal, cat], TruthValue::new(0.5, 0.5))
            .unwrap();
        assert_eq!(again, list);
        assert_eq!(kb.link_count(), 2);
        assert_eq!(kb.links_of_type(AtomType::ListLink).len(), 1);
    }

    /// Nós com mesmo nome são reaproveitados
    #[test]
    fn test_find_node_case_insensitive() {
        let (mut kb, cat, _, _) = cat_mammal();
        assert_eq!(kb.find_node(AtomType::ConceptNode, "gato"), Some(cat));
        let again = kb.add_node(AtomType::ConceptNode, "GATO", TruthValue::unknown());
        assert_eq!(again, cat);
        assert_eq!(kb.find_node(AtomType::PredicateNode, "gato"), None);
    }
}
