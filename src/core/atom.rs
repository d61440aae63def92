//! # Atom — Fato Tipado em Forma de Árvore
//!
//! Um [`Atom`] é a unidade de conhecimento da base. Ele pode ser:
//!
//! - um **nó** — tem nome e nenhum filho (ex: `ConceptNode "Gato"`)
//! - um **link** — tem um conjunto **ordenado** de filhos, o *outgoing set*
//!   (ex: `InheritanceLink(Gato, Mamífero)`)
//!
//! Todo átomo carrega um [`TruthValue`]. Átomos são criados e destruídos
//! apenas pela [`KnowledgeBase`](super::KnowledgeBase); as regras só leem.
//!
//! ```text
//! InheritanceLink ⟨0.90, 0.80⟩
//! ├── ConceptNode "Gato"     ⟨0.10, 0.90⟩   (antecedente, posição 0)
//! └── ConceptNode "Mamífero" ⟨0.30, 0.90⟩   (consequente, posição 1)
//! ```

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{AtomType, TruthValue};

/// Identificador de um [Atom] — UUID v4.
pub type AtomId = Uuid;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Atom {
    /// Identificador único (UUID v4).
    pub id: AtomId,

    /// Tipo na taxonomia fechada.
    pub atom_type: AtomType,

    /// Nome — só para nós.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Filhos ordenados — só para links.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub outgoing: Vec<AtomId>,

    /// Valor de verdade atual.
    pub truth: TruthValue,
}

impl Atom {
    /// Cria um nó nomeado.
    pub fn node(atom_type: AtomType, name: impl Into<String>, truth: TruthValue) -> Self {
        Self {
            id: Uuid::new_v4(),
            atom_type,
            name: Some(name.into()),
            outgoing: Vec::new(),
            truth,
        }
    }

    /// Cria um link. A validação de aridade e de filhos é feita pela
    /// [`KnowledgeBase`](super::KnowledgeBase) na inserção.
    pub fn link(atom_type: AtomType, outgoing: Vec<AtomId>, truth: TruthValue) -> Self {
        Self {
            id: Uuid::new_v4(),
            atom_type,
            name: None,
            outgoing,
            truth,
        }
    }

    pub fn is_link(&self) -> bool {
        self.atom_type.is_link()
    }
}
