//! # Módulo Inference — Aplicação das Regras sobre a Base
//!
//! Este módulo aplica regras que seguem o contrato [`Rule`](crate::rules::Rule)
//! sobre uma [`KnowledgeBase`](crate::core::KnowledgeBase) inteira, numa única
//! passada, e grava as conclusões novas.
//!
//! ```text
//! KB contém: Inheritance(Gato, Mamífero) ⟨0.90, 0.80⟩
//! Varredura com InversionRule(InheritanceLink) deriva:
//!            Inheritance(Mamífero, Gato) ⟨0.30, 0.80⟩
//! ```
//!
//! A escolha de *quais* regras tentar e em que ordem fica com quem chama;
//! veja [`InferenceEngine`] para detalhes.

/// Sub-módulo com o motor de varredura.
pub mod engine;

pub use engine::{InferenceEngine, InferenceResult};
