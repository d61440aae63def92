//! # Módulo Core — Tipos Fundamentais da Base de Fatos
//!
//! Este módulo agrupa os tipos sobre os quais as regras de inferência operam:
//!
//! - [`AtomType`] — Taxonomia fechada e hierárquica de tipos
//! - [`TruthValue`] — Valor de verdade (strength, confidence)
//! - [`Atom`] — Nó nomeado ou link com filhos ordenados
//! - [`KnowledgeBase`] — Contêiner em memória de todos os átomos
//! - [`FactStore`] — Interface de leitura que as regras recebem por parâmetro
//!
//! ## Exemplo de Uso
//!
//! ```rust
//! use pln_rules::core::{AtomType, FactStore, KnowledgeBase, TruthValue};
//!
//! let mut kb = KnowledgeBase::new();
//! let rust = kb.add_node(AtomType::ConceptNode, "Rust", TruthValue::new(0.2, 0.9));
//! let lang = kb.add_node(AtomType::ConceptNode, "Linguagem", TruthValue::new(0.4, 0.9));
//! let link = kb
//!     .add_link(AtomType::InheritanceLink, vec![rust, lang], TruthValue::new(0.95, 0.85))
//!     .unwrap();
//!
//! assert!(kb.inherits_type(kb.type_of(link).unwrap(), AtomType::InheritanceLink));
//! ```

/// Sub-módulo com a taxonomia [`AtomType`].
pub mod atom_type;

/// Sub-módulo com a implementação de [`TruthValue`].
pub mod truth_value;

/// Sub-módulo com a implementação de [`Atom`].
pub mod atom;

/// Sub-módulo com a interface [`FactStore`].
pub mod store;

/// Sub-módulo com a implementação de [`KnowledgeBase`] — contêiner central.
pub mod knowledge_base;

pub use atom::{Atom, AtomId};
pub use atom_type::{AtomType, UnknownAtomType};
pub use knowledge_base::{KnowledgeBase, StoreError};
pub use store::FactStore;
pub use truth_value::TruthValue;
