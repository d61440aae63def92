//! # Configuração
//!
//! [`InferenceConfig`] reúne os parâmetros do binário e da varredura:
//!
//! | Campo | Padrão | Variável de ambiente |
//! |-------|--------|----------------------|
//! | `kb_path` | `data/kb.json` | `PLN_KB_PATH` |
//! | `link_types` | Inheritance, Implication, Subset | `PLN_LINK_TYPES` (separados por vírgula) |
//! | `min_confidence` | 0.05 | `PLN_MIN_CONFIDENCE` |
//!
//! ```bash
//! PLN_LINK_TYPES=Inheritance,IntensionalInheritance PLN_MIN_CONFIDENCE=0.2 cargo run
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::core::AtomType;
use crate::rules::{InversionRule, Rule, RuleError};

/// Caminho padrão do arquivo de persistência da KB.
pub const DEFAULT_KB_PATH: &str = "data/kb.json";

/// Confiança mínima padrão para uma conclusão ser gravada.
pub const DEFAULT_MIN_CONFIDENCE: f64 = 0.05;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InferenceConfig {
    pub kb_path: PathBuf,
    /// Um [`InversionRule`] é instanciado para cada tipo.
    pub link_types: Vec<AtomType>,
    pub min_confidence: f64,
}

impl Default for InferenceConfig {
    fn default() -> Self {
        Self {
            kb_path: PathBuf::from(DEFAULT_KB_PATH),
            link_types: vec![
                AtomType::InheritanceLink,
                AtomType::ImplicationLink,
                AtomType::SubsetLink,
            ],
            min_confidence: DEFAULT_MIN_CONFIDENCE,
        }
    }
}

impl InferenceConfig {
    /// Padrões sobrescritos pelas variáveis de ambiente presentes.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key: &str| std::env::var(key).ok())
    }

    /// Como [`from_env`](Self::from_env), com a fonte das variáveis injetada.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(path) = lookup("PLN_KB_PATH") {
            config.kb_path = PathBuf::from(path);
        }
        if let Some(raw) = lookup("PLN_MIN_CONFIDENCE") {
            config.min_confidence = raw
                .trim()
                .parse()
                .with_context(|| format!("PLN_MIN_CONFIDENCE inválido: {:?}", raw))?;
            anyhow::ensure!(
                (0.0..=1.0).contains(&config.min_confidence),
                "PLN_MIN_CONFIDENCE fora de [0, 1]: {:?}",
                raw
            );
        }
        if let Some(raw) = lookup("PLN_LINK_TYPES") {
            config.link_types = raw
                .split(',')
                .filter(|s| !s.trim().is_empty())
                .map(|s| s.parse::<AtomType>())
                .collect::<Result<_, _>>()
                .context("PLN_LINK_TYPES inválido")?;
        }

        Ok(config)
    }

    /// Uma regra de inversão por tipo configurado.
    pub fn build_rules(&self) -> Result<Vec<Arc<dyn Rule>>, RuleError> {
        self.link_types
            .iter()
            .map(|t| InversionRule::new(*t).map(|r| Arc::new(r) as Arc<dyn Rule>))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    /// Sem variáveis, valem os padrões
    #[test]
    fn test_defaults() {
        let config = InferenceConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, InferenceConfig::default());
        assert_eq!(config.kb_path, PathBuf::from("data/kb.json"));
        assert_eq!(config.build_rules().unwrap().len(), 3);
    }

    /// Variáveis sobrescrevem os padrões
    #[test]
    fn test_overrides() {
        let config = InferenceConfig::from_lookup(lookup(&[
            ("PLN_KB_PATH", "/tmp/kb.json"),
            ("PLN_MIN_CONFIDENCE", "0.2"),
            ("PLN_LINK_TYPES", "Inheritance, IntensionalInheritanceLink"),
        ]))
        .unwrap();
        assert_eq!(config.kb_path, PathBuf::from("/tmp/kb.json"));
        assert_eq!(config.min_confidence, 0.2);
        assert_eq!(
            config.link_types,
            vec![AtomType::InheritanceLink, AtomType::IntensionalInheritanceLink]
        );
    }

    /// Valores inválidos são erro, não silêncio
    #[test]
    fn test_invalid_values() {
        assert!(InferenceConfig::from_lookup(lookup(&[("PLN_MIN_CONFIDENCE", "alto")])).is_err());
        assert!(InferenceConfig::from_lookup(lookup(&[("PLN_LINK_TYPES", "Banana")])).is_err());
    }

    /// Confiança mínima só vale dentro de [0, 1]; NaN desligaria o filtro
    #[test]
    fn test_min_confidence_out_of_range() {
        for raw in ["NaN", "-0.1", "1.5", "inf"] {
            assert!(
                InferenceConfig::from_lookup(lookup(&[("PLN_MIN_CONFIDENCE", raw)])).is_err(),
                "{raw} deveria ser rejeitado"
            );
        }
        for raw in ["0", "1", "0.5"] {
            assert!(InferenceConfig::from_lookup(lookup(&[("PLN_MIN_CONFIDENCE", raw)])).is_ok());
        }
    }

    /// Tipos não binários não viram regra
    #[test]
    fn test_build_rules_rejects_list_link() {
        let config = InferenceConfig {
            link_types: vec![AtomType::ListLink],
            ..InferenceConfig::default()
        };
        assert!(config.build_rules().is_err());
    }

    /// Campos ausentes no JSON assumem o padrão
    #[test]
    fn test_deserialize_partial() {
        let config: InferenceConfig = serde_json::from_str(r#"{"min_confidence": 0.5}"#).unwrap();
        assert_eq!(config.min_confidence, 0.5);
        assert_eq!(config.link_types.len(), 3);
    }
}
