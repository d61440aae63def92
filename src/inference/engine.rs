//! # Varredura de Inferência
//!
//! O [`InferenceEngine`] aplica um conjunto de regras **uma vez** sobre a base:
//! para cada regra, encontra as combinações de átomos que passam no filtro de
//! entrada, calcula a derivação e devolve as conclusões novas.
//!
//! ## Como Funciona
//!
//! ```text
//! para cada regra:
//!   candidatos[i] = átomos que casam com input_filter[i]
//!   para cada combinação de candidatos (em paralelo, só leitura):
//!     se regra.accepts(combinação):
//!       derivação = regra.compute(combinação)
//!       descarta se a conclusão já existe, não é concreta,
//!       ou tem confiança abaixo do mínimo
//! ```
//!
//! Não há busca nem encadeamento: a ordem de aplicação é a ordem das regras,
//! e conclusões repetidas ficam só com a primeira.
//!
//! ## Filtros de Qualidade
//!
//! - Só cria links que **não existem** ainda na KB (evita duplicação)
//! - Só cria links com **confiança ≥ `min_confidence`** (evita ruído)

use std::collections::HashSet;
use std::sync::Arc;

use parking_lot::RwLock;
use rayon::prelude::*;

use crate::config::InferenceConfig;
use crate::core::{AtomId, AtomType, KnowledgeBase, StoreError, TruthValue};
use crate::pattern::{MetaPattern, Vertex};
use crate::rules::Rule;

/// Conclusão nova, pronta para ser adicionada à KB, com explicação legível.
///
/// ## Exemplo de Explicação
///
/// ```text
/// Inversão: Inheritance(Gato, Mamífero) ⟨0.90, 0.80⟩ ⊢ Inheritance(Mamífero, Gato) ⟨0.30, 0.80⟩
/// ```
#[derive(Clone, Debug)]
pub struct InferenceResult {
    pub rule: &'static str,
    pub premises: Vec<AtomId>,
    pub atom_type: AtomType,
    pub outgoing: Vec<AtomId>,
    pub truth: TruthValue,
    pub explanation: String,
}

/// Motor de varredura — sem estado, recebe a KB e as regras por parâmetro.
pub struct InferenceEngine;

impl InferenceEngine {
    /// Roda uma varredura sobre a KB e devolve as conclusões novas.
    pub fn infer(
        kb: &KnowledgeBase,
        rules: &[Arc<dyn Rule>],
        config: &InferenceConfig,
    ) -> Vec<InferenceResult> {
        let mut results = Vec::new();
        let mut seen: HashSet<(AtomType, Vec<AtomId>)> = HashSet::new();

        for rule in rules {
            let combinations = premise_combinations(kb, rule.input_filter());
            tracing::debug!(
                rule = rule.name(),
                candidates = combinations.len(),
                "Inferência: candidatos encontrados"
            );

            let derived: Vec<InferenceResult> = combinations
                .par_iter()
                .filter_map(|premises| apply(kb, &**rule, premises, config))
                .collect();

            for result in derived {
                if seen.insert((result.atom_type, result.outgoing.clone())) {
                    results.push(result);
                }
            }
        }

        tracing::info!(derived = results.len(), "Inferência: varredura concluída");
        results
    }

    /// Grava as conclusões na KB. Devolve os IDs dos links criados.
    pub fn commit(
        kb: &mut KnowledgeBase,
        results: &[InferenceResult],
    ) -> Result<Vec<AtomId>, StoreError> {
        results
            .iter()
            .map(|r| kb.add_link(r.atom_type, r.outgoing.clone(), r.truth.clone()))
            .collect()
    }

    /// Varredura + gravação sobre uma KB compartilhada.
    ///
    /// A varredura roda sob lock de leitura; a gravação sob lock de escrita.
    pub fn run_cycle(
        kb: &Arc<RwLock<KnowledgeBase>>,
        rules: &[Arc<dyn Rule>],
        config: &InferenceConfig,
    ) -> Result<Vec<InferenceResult>, StoreError> {
        let results = {
            let kb_read = kb.read();
            Self::infer(&kb_read, rules, config)
        };
        let mut kb_write = kb.write();
        Self::commit(&mut kb_write, &results)?;
        Ok(results)
    }
}

/// Aplica uma regra a uma combinação de premissas, com os filtros de qualidade.
fn apply(
    kb: &KnowledgeBase,
    rule: &dyn Rule,
    premises: &[Vertex],
    config: &InferenceConfig,
) -> Option<InferenceResult> {
    if !rule.accepts(premises, kb) {
        return None;
    }
    let derivation = match rule.compute(premises, kb) {
        Ok(d) => d,
        Err(e) => {
            tracing::warn!(rule = rule.name(), error = %e, "Inferência: premissa rejeitada");
            return None;
        }
    };

    let (atom_type, outgoing) = concrete_link(&derivation.conclusion)?;
    if kb.find_link(atom_type, &outgoing).is_some() {
        return None;
    }
    if derivation.truth.confidence() < config.min_confidence {
        tracing::debug!(
            rule = rule.name(),
            confidence = %format!("{:.3}", derivation.truth.confidence()),
            "Inferência: confiança abaixo do mínimo"
        );
        return None;
    }

    let premise_ids: Vec<AtomId> = premises.iter().filter_map(Vertex::as_atom).collect();
    let premise_text: Vec<String> = premise_ids.iter().map(|id| kb.describe(*id)).collect();
    let explanation = format!(
        "{}: {} ⊢ {} {}",
        rule_label(rule.name()),
        premise_text.join(", "),
        derivation.conclusion.describe(kb),
        derivation.truth
    );

    Some(InferenceResult {
        rule: derivation.rule,
        premises: premise_ids,
        atom_type,
        outgoing,
        truth: derivation.truth,
        explanation,
    })
}

fn rule_label(name: &str) -> &str {
    match name {
        "InversionRule" => "Inversão",
        other => other,
    }
}

/// Um link com todos os filhos concretos, ou nada.
fn concrete_link(pattern: &MetaPattern) -> Option<(AtomType, Vec<AtomId>)> {
    let MetaPattern::Link { atom_type, outgoing } = pattern else {
        return None;
    };
    let ids = outgoing
        .iter()
        .map(|child| match child {
            MetaPattern::Atom(id) => Some(*id),
            _ => None,
        })
        .collect::<Option<Vec<_>>>()?;
    Some((*atom_type, ids))
}

/// Produto cartesiano dos átomos que casam com cada posição do filtro.
fn premise_combinations(kb: &KnowledgeBase, filter: &[MetaPattern]) -> Vec<Vec<Vertex>> {
    let mut combinations: Vec<Vec<Vertex>> = vec![Vec::new()];
    for pattern in filter {
        let candidates: Vec<AtomId> = kb
            .atoms
            .keys()
            .copied()
            .filter(|id| pattern.matches(*id, kb))
            .collect();
        combinations = combinations
            .into_iter()
            .flat_map(|prefix| {
                candidates.iter().map(move |id| {
                    let mut next = prefix.clone();
                    next.push(Vertex::Atom(*id));
                    next
                })
            })
            .collect();
    }
    if filter.is_empty() {
        combinations.clear();
    }
    combinations
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::InversionRule;

    fn rules(types: &[AtomType]) -> Vec<Arc<dyn Rule>> {
        types
            .iter()
            .map(|t| Arc::new(InversionRule::new(*t).unwrap()) as Arc<dyn Rule>)
            .collect()
    }

    fn kb() -> (KnowledgeBase, AtomId, AtomId) {
        let mut kb = KnowledgeBase::new();
        let cat = kb.add_node(AtomType::ConceptNode, "Gato", TruthValue::new(0.1, 0.9));
        let mammal = kb.add_node(AtomType::ConceptNode, "Mamífero", TruthValue::new(0.3, 0.9));
        kb.add_link(AtomType::InheritanceLink, vec![cat, mammal], TruthValue::new(0.9, 0.8))
            .unwrap();
        (kb, cat, mammal)
    }

    /// Uma varredura deriva o link invertido com explicação legível
    #[test]
    fn test_infer_inversion() {
        let (kb, cat, mammal) = kb();
        let results = InferenceEngine::infer(
            &kb,
            &rules(&[AtomType::InheritanceLink]),
            &InferenceConfig::default(),
        );
        assert_eq!(results.len(), 1);
        let r = &results[0];
        assert_eq!(r.rule, "InversionRule");
        assert_eq!(r.atom_type, AtomType::InheritanceLink);
        assert_eq!(r.outgoing, vec![mammal, cat]);
        assert!((r.truth.strength() - 0.3).abs() < 1e-6);
        assert_eq!(
            r.explanation,
            "Inversão: Inheritance(Gato, Mamífero) ⟨0.90, 0.80⟩ ⊢ Inheritance(Mamífero, Gato) ⟨0.30, 0.80⟩"
        );
    }

    /// Depois de gravada, a mesma conclusão não é derivada de novo
    #[test]
    fn test_commit_then_no_duplicates() {
        let (mut kb, _, _) = kb();
        let rules = rules(&[AtomType::InheritanceLink]);
        let config = InferenceConfig::default();
        let results = InferenceEngine::infer(&kb, &rules, &config);
        let ids = InferenceEngine::commit(&mut kb, &results).unwrap();
        assert_eq!(ids.len(), 1);
        assert_eq!(kb.link_count(), 2);
        assert!(InferenceEngine::infer(&kb, &rules, &config).is_empty());
    }

    /// Regras sobrepostas (Subset é-um Inheritance) não duplicam conclusões
    #[test]
    fn test_overlapping_rules_deduplicated() {
        let (mut kb, cat, mammal) = kb();
        let dog = kb.add_node(AtomType::ConceptNode, "Cão", TruthValue::new(0.1, 0.9));
        kb.add_link(AtomType::SubsetLink, vec![dog, mammal], TruthValue::new(0.95, 0.8))
            .unwrap();
        let results = InferenceEngine::infer(
            &kb,
            &rules(&[AtomType::InheritanceLink, AtomType::SubsetLink]),
            &InferenceConfig::default(),
        );
        assert_eq!(results.len(), 2);
        assert!(results
            .iter()
            .any(|r| r.atom_type == AtomType::SubsetLink && r.outgoing == vec![mammal, dog]));
        assert!(results.iter().any(|r| r.outgoing == vec![mammal, cat]));
    }

    /// Conclusões com pouca confiança são descartadas
    #[test]
    fn test_min_confidence_filter() {
        let (kb, _, _) = kb();
        let config = InferenceConfig {
            min_confidence: 0.95,
            ..InferenceConfig::default()
        };
        let results = InferenceEngine::infer(&kb, &rules(&[AtomType::InheritanceLink]), &config);
        assert!(results.is_empty());
    }

    /// Links fora da família configurada são ignorados
    #[test]
    fn test_other_families_ignored() {
        let (kb, _, _) = kb();
        let results = InferenceEngine::infer(
            &kb,
            &rules(&[AtomType::ImplicationLink]),
            &InferenceConfig::default(),
        );
        assert!(results.is_empty());
    }

    /// Ciclo completo sobre KB compartilhada
    #[test]
    fn test_run_cycle_shared_kb() {
        let (kb, cat, mammal) = kb();
        let shared = Arc::new(RwLock::new(kb));
        let results = InferenceEngine::run_cycle(
            &shared,
            &rules(&[AtomType::InheritanceLink]),
            &InferenceConfig::default(),
        )
        .unwrap();
        assert_eq!(results.len(), 1);
        assert!(shared
            .read()
            .find_link(AtomType::InheritanceLink, &[mammal, cat])
            .is_some());
    }
}
