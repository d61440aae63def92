//! # PLN Rules — Binário de Demonstração
//!
//! Carrega a KB do disco, instancia uma regra de inversão por tipo
//! configurado, roda uma varredura, grava as conclusões e salva.
//!
//! ```text
//! main()
//!   ├── Configura tracing/logging
//!   ├── Lê InferenceConfig (padrões + variáveis PLN_*)
//!   ├── Carrega KB do disco (ou semeia um exemplo se estiver vazia)
//!   ├── InferenceEngine::run_cycle
//!   └── Salva KB
//! ```
//!
//! ```bash
//! # Executar com logs padrão (info)
//! cargo run
//!
//! # Executar com logs detalhados
//! RUST_LOG=debug cargo run
//! ```

use std::sync::Arc;

use anyhow::{Context, Result};
use parking_lot::RwLock;
use tracing_subscriber::EnvFilter;

use pln_rules::config::InferenceConfig;
use pln_rules::core::{AtomType, KnowledgeBase, TruthValue};
use pln_rules::inference::InferenceEngine;
use pln_rules::persistence;

fn main() -> Result<()> {
    // Aceita RUST_LOG para configurar o nível. Exemplo: RUST_LOG=debug cargo run
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = InferenceConfig::from_env()?;
    tracing::info!(
        kb_path = %config.kb_path.display(),
        link_types = ?config.link_types,
        min_confidence = config.min_confidence,
        "🌱 PLN Rules — iniciando"
    );

    let mut kb = persistence::load_kb(&config.kb_path)?;
    if kb.atom_count() == 0 {
        tracing::info!("KB vazia, semeando exemplo Gato/Mamífero");
        seed_example(&mut kb)?;
    }
    tracing::info!(atoms = kb.atom_count(), links = kb.link_count(), "KB carregada");
    let kb = Arc::new(RwLock::new(kb));

    let rules = config
        .build_rules()
        .context("Falha ao instanciar regras")?;

    let results = InferenceEngine::run_cycle(&kb, &rules, &config)
        .context("Falha ao gravar conclusões")?;
    for result in &results {
        tracing::info!(rule = result.rule, "🧪 {}", result.explanation);
    }

    persistence::save_kb(&kb, &config.kb_path)?;
    tracing::info!(derived = results.len(), "✅ Concluído");
    Ok(())
}

/// Exemplo mínimo: Inheritance(Gato, Mamífero).
fn seed_example(kb: &mut KnowledgeBase) -> Result<()> {
    let cat = kb.add_node(AtomType::ConceptNode, "Gato", TruthValue::new(0.1, 0.9));
    let mammal = kb.add_node(AtomType::ConceptNode, "Mamífero", TruthValue::new(0.3, 0.9));
    kb.add_link(AtomType::InheritanceLink, vec![cat, mammal], TruthValue::new(0.9, 0.8))?;
    Ok(())
}
