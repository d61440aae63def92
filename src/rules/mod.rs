//! # Módulo Rules — Contrato das Regras de Inferência
//!
//! Toda regra de inferência expõe o mesmo contrato ([`Rule`]), para que um
//! motor de encadeamento possa tratá-las de forma uniforme:
//!
//! | Operação | Direção | Resultado |
//! |----------|---------|-----------|
//! | [`conclusion_shape`](Rule::conclusion_shape) | premissas → conclusão | forma da conclusão |
//! | [`required_premises`](Rule::required_premises) | conclusão → premissas | alternativas de premissas |
//! | [`extract_truth_values`](Rule::extract_truth_values) | premissas → fórmula | valores de verdade ordenados |
//! | [`compute`](Rule::compute) | premissas → derivação | forma + valor de verdade novo |
//!
//! ## Fluxo de Dados
//!
//! ```text
//! Encadeador ── required_premises(alvo) ──▶ padrão de premissa
//!     │                                          │
//!     │                              consulta na base de fatos
//!     │                                          ▼
//!     ├── conclusion_shape(premissa) ──▶ forma derivada
//!     └── extract_truth_values(premissa) ──▶ [TV…] ──▶ Formula ──▶ TV novo
//! ```
//!
//! Regras são **imutáveis** depois de construídas e só fazem leituras na
//! base, que recebem explicitamente como `&dyn FactStore`. Uma mesma
//! instância pode ser compartilhada (`Arc<dyn Rule>`) entre várias buscas
//! concorrentes. Criar o átomo derivado e gravar o valor de verdade é
//! responsabilidade de quem chama.

/// Sub-módulo com [`RuleError`].
pub mod error;

/// Sub-módulo com [`Formula`] e [`InversionFormula`].
pub mod formula;

/// Sub-módulo com a regra de inversão.
pub mod inversion;

pub use error::RuleError;
pub use formula::{Formula, InversionFormula};
pub use inversion::InversionRule;

use crate::core::{FactStore, TruthValue};
use crate::pattern::{MetaPattern, Vertex};

/// Resultado do caminho reverso.
///
/// `alternatives` é o conjunto de maneiras de satisfazer o alvo; cada
/// alternativa é a sequência posicional de premissas exigidas. Vazio quer
/// dizer que a regra não se aplica ao alvo.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BackwardResult {
    pub alternatives: Vec<Vec<MetaPattern>>,
    /// Os padrões de premissa são exatos: o `input_filter` genérico da regra
    /// não deve ser aplicado de novo nesta invocação.
    pub override_input_filter: bool,
}

impl BackwardResult {
    pub fn inapplicable() -> Self {
        Self::default()
    }

    pub fn is_inapplicable(&self) -> bool {
        self.alternatives.is_empty()
    }
}

/// Derivação produzida por [`Rule::compute`] — ainda não gravada na base.
#[derive(Clone, Debug, PartialEq)]
pub struct Derivation {
    pub rule: &'static str,
    pub conclusion: MetaPattern,
    pub truth: TruthValue,
}

/// Contrato comum a todas as regras.
pub trait Rule: Send + Sync {
    fn name(&self) -> &'static str;

    /// A regra pode produzir resultados copiando um valor de verdade existente
    /// sem passar pela fórmula?
    fn allows_direct_production(&self) -> bool;

    /// Forma exigida de cada premissa, por posição.
    fn input_filter(&self) -> &[MetaPattern];

    /// Fórmula que combina os valores extraídos.
    fn formula(&self) -> &dyn Formula;

    /// Verificação sintática extra além do filtro de entrada.
    fn validate(&self, _premises: &[MetaPattern]) -> bool {
        true
    }

    /// Número de premissas exigidas.
    fn premise_count(&self) -> usize {
        self.input_filter().len()
    }

    /// Pré-filtro para quem chama: as premissas casam com o `input_filter`
    /// posição a posição e passam em [`validate`](Rule::validate)?
    fn accepts(&self, premises: &[Vertex], store: &dyn FactStore) -> bool {
        let filter = self.input_filter();
        if premises.len() != filter.len() {
            return false;
        }
        let mut patterns = Vec::with_capacity(premises.len());
        for (vertex, pattern) in premises.iter().zip(filter) {
            match vertex.as_atom() {
                Some(atom) if pattern.matches(atom, store) => patterns.push(MetaPattern::Atom(atom)),
                _ => return false,
            }
        }
        self.validate(&patterns)
    }

    /// Caminho direto: forma da conclusão a partir das premissas casadas.
    fn conclusion_shape(
        &self,
        premises: &[Vertex],
        store: &dyn FactStore,
    ) -> Result<MetaPattern, RuleError>;

    /// Caminho reverso: premissas necessárias para chegar ao alvo.
    fn required_premises(
        &self,
        target: &MetaPattern,
        store: &dyn FactStore,
    ) -> Result<BackwardResult, RuleError>;

    /// Valores de verdade, emprestados da base, na ordem que a fórmula espera.
    fn extract_truth_values<'s>(
        &self,
        premises: &[Vertex],
        store: &'s dyn FactStore,
    ) -> Result<Vec<&'s TruthValue>, RuleError>;

    /// Forma da conclusão mais o valor de verdade calculado pela fórmula.
    fn compute(&self, premises: &[Vertex], store: &dyn FactStore) -> Result<Derivation, RuleError> {
        let conclusion = self.conclusion_shape(premises, store)?;
        let args = self.extract_truth_values(premises, store)?;
        let truth = self.formula().combine(&args)?;
        tracing::debug!(
            rule = self.name(),
            conclusion = %conclusion.describe(store),
            truth = %truth,
            "Regra: derivação calculada"
        );
        Ok(Derivation {
            rule: self.name(),
            conclusion,
            truth,
        })
    }
}
