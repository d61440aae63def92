#![allow(rustdoc::broken_intra_doc_links)]
//! # PLN Rules — Regras de Inferência sobre uma Base de Fatos Tipados
//!
//! Biblioteca com o **contrato de regra** usado por um motor de raciocínio
//! probabilístico e com uma regra concreta, a **inversão** de links de
//! inclusão (`T(A, B)` ⊢ `T(B, A)`).
//!
//! ## Camadas
//!
//! ```text
//! core        — AtomType, TruthValue, Atom, KnowledgeBase, FactStore
//!   ▲
//! pattern     — MetaPattern (filtro/alvo), Vertex (premissa)
//!   ▲
//! rules       — Rule, Formula, InversionRule, InversionFormula
//!   ▲
//! inference   — varredura única das regras sobre a KB
//! config, persistence — parâmetros e KB em JSON
//! ```
//!
//! ## Exemplo de Uso
//!
//! ```rust
//! use pln_rules::core::{AtomType, KnowledgeBase, TruthValue};
//! use pln_rules::pattern::{MetaPattern, Vertex};
//! use pln_rules::rules::{InversionRule, Rule};
//!
//! let mut kb = KnowledgeBase::new();
//! let cat = kb.add_node(AtomType::ConceptNode, "Gato", TruthValue::new(0.1, 0.9));
//! let mammal = kb.add_node(AtomType::ConceptNode, "Mamífero", TruthValue::new(0.3, 0.9));
//! let link = kb
//!     .add_link(AtomType::InheritanceLink, vec![cat, mammal], TruthValue::new(0.9, 0.8))
//!     .unwrap();
//!
//! let rule = InversionRule::new(AtomType::InheritanceLink).unwrap();
//! let conclusion = rule.conclusion_shape(&[Vertex::Atom(link)], &kb).unwrap();
//! assert_eq!(conclusion.describe(&kb), "Inheritance(Mamífero, Gato)");
//!
//! let tvs = rule.extract_truth_values(&[Vertex::Atom(link)], &kb).unwrap();
//! assert_eq!(tvs.len(), 3);
//! ```

/// Módulo `core` — tipos fundamentais: AtomType, TruthValue, Atom, KnowledgeBase.
pub mod core;

/// Módulo `pattern` — meta-padrões e vértices.
pub mod pattern;

/// Módulo `rules` — contrato de regra, fórmulas e regra de inversão.
pub mod rules;

/// Módulo `inference` — varredura das regras sobre a KB.
pub mod inference;

/// Módulo `config` — parâmetros do binário e da varredura.
pub mod config;

/// Módulo `persistence` — serialização/desserialização da KB em JSON.
pub mod persistence;
