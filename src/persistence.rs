//! # Persistência — Salvamento e Carregamento da KB em Disco
//!
//! Serializa/desserializa a [`KnowledgeBase`] como JSON "pretty-printed".
//! O índice reverso é marcado `#[serde(skip)]` e reconstruído
//! após carregamento via [`KnowledgeBase::rebuild_index()`].
//!
//! ## ⚠️ Atomicidade
//!
//! A escrita **não é atômica** — crash durante escrita pode corromper
//! o arquivo.

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use parking_lot::RwLock;

use crate::core::KnowledgeBase;

/// Salva a KnowledgeBase em disco como JSON pretty-printed.
///
/// Cria o diretório pai se não existir. Adquire um read lock
/// na KB — múltiplas leituras simultâneas são permitidas.
pub fn save_kb(kb: &Arc<RwLock<KnowledgeBase>>, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Falha ao criar diretório {}", parent.display()))?;
    }
    let kb_read = kb.read();
    let json = serde_json::to_string_pretty(&*kb_read)
        .context("Falha ao serializar KnowledgeBase")?;
    std::fs::write(path, json)
        .with_context(|| format!("Falha ao escrever {}", path.display()))?;
    tracing::debug!(path = %path.display(), atoms = kb_read.atom_count(), "KB salva");
    Ok(())
}

/// Carrega a KnowledgeBase do disco, ou cria uma vazia se não existir.
pub fn load_kb(path: &Path) -> Result<KnowledgeBase> {
    if !path.exists() {
        tracing::info!("Nenhum {} encontrado, iniciando KB vazia", path.display());
        return Ok(KnowledgeBase::new());
    }
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Falha ao ler {}", path.display()))?;
    let mut kb: KnowledgeBase = serde_json::from_str(&json)
        .with_context(|| format!("Falha ao desserializar {}", path.display()))?;
    kb.rebuild_index();
    Ok(kb)
}
