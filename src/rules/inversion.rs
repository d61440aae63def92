//! # InversionRule — Inversão de Links de Inclusão
//!
//! Dado um link de inclusão `T(A, B)` ("A está contido em B"), a regra de
//! inversão deriva `T(B, A)`, com valor de verdade dado pela regra de Bayes.
//!
//! ```text
//! Premissa:  Inheritance(Gato, Mamífero)   ⟨0.90, 0.80⟩
//! ──────────────────────────────────────────
//! Conclusão: Inheritance(Mamífero, Gato)   ⟨0.30, 0.80⟩
//! ```
//!
//! Cada instância é configurada com **um** tipo da família de inclusão
//! (`InheritanceLink`, `SubsetLink`, `ImplicationLink`, ...). Todo link cujo
//! tipo é-um esse tipo tem exatamente dois filhos: (antecedente, consequente).
//!
//! ## As Três Operações
//!
//! - **Direta** — troca a ordem dos dois filhos da premissa, mantendo o tipo dela.
//! - **Reversa** — se o tipo do alvo é-um o tipo configurado, pede uma premissa
//!   do tipo configurado com os filhos do alvo trocados; senão, nada.
//! - **Extração** — `[TV(p), TV(c0), TV(c1)]`, cada um consultado na base.

use crate::core::{AtomId, AtomType, FactStore, TruthValue};
use crate::pattern::{MetaPattern, Vertex};

use super::{BackwardResult, Formula, InversionFormula, Rule, RuleError};

const RULE_NAME: &str = "InversionRule";

/// `[TV(p), TV(c0), TV(c1)]`
const TRUTH_VALUE_COUNT: usize = 3;

/// Premissa já verificada: um link binário e seus dois filhos.
struct BinaryPremise {
    link: AtomId,
    atom_type: AtomType,
    antecedent: AtomId,
    consequent: AtomId,
}

fn truth_value_of(store: &dyn FactStore, atom: AtomId) -> Result<&TruthValue, RuleError> {
    store
        .truth_value_of(atom)
        .ok_or(RuleError::UnknownAtom { rule: RULE_NAME, atom })
}

/// Regra de inversão para um tipo de inclusão, parametrizada pela fórmula.
pub struct InversionRule<F: Formula = InversionFormula> {
    link_type: AtomType,
    formula: F,
    input_filter: Vec<MetaPattern>,
}

impl InversionRule {
    /// Regra de inversão com a fórmula de Bayes.
    pub fn new(link_type: AtomType) -> Result<Self, RuleError> {
        Self::with_formula(link_type, InversionFormula)
    }
}

impl<F: Formula> InversionRule<F> {
    /// Regra de inversão com uma fórmula arbitrária de aridade 3.
    ///
    /// `link_type` precisa ser um tipo de link binário, e a fórmula precisa
    /// aceitar os três valores de [`truth_value_array`](Self::truth_value_array).
    pub fn with_formula(link_type: AtomType, formula: F) -> Result<Self, RuleError> {
        if !link_type.is_link() || link_type.fixed_arity() != Some(2) {
            return Err(RuleError::NotInclusionFamily {
                rule: RULE_NAME,
                link_type,
            });
        }
        if formula.arity() != TRUTH_VALUE_COUNT {
            return Err(RuleError::FormulaArity {
                formula: formula.name(),
                expected: TRUTH_VALUE_COUNT,
                found: formula.arity(),
            });
        }
        let filter = MetaPattern::link(link_type, vec![MetaPattern::any(), MetaPattern::any()])?;
        Ok(Self {
            link_type,
            formula,
            input_filter: vec![filter],
        })
    }

    pub fn link_type(&self) -> AtomType {
        self.link_type
    }

    /// Valores de verdade em vetor de tamanho fixo: `[TV(p), TV(c0), TV(c1)]`.
    ///
    /// Cada valor é consultado na base de forma independente.
    pub fn truth_value_array<'s>(
        &self,
        premises: &[Vertex],
        store: &'s dyn FactStore,
    ) -> Result<[&'s TruthValue; TRUTH_VALUE_COUNT], RuleError> {
        let premise = self.binary_premise(premises, store)?;
        Ok([
            truth_value_of(store, premise.link)?,
            truth_value_of(store, premise.antecedent)?,
            truth_value_of(store, premise.consequent)?,
        ])
    }

    /// Verifica as pré-condições comuns ao caminho direto e à extração:
    /// uma única premissa, que é um átomo conhecido com exatamente dois filhos.
    fn binary_premise(
        &self,
        premises: &[Vertex],
        store: &dyn FactStore,
    ) -> Result<BinaryPremise, RuleError> {
        let [premise] = premises else {
            return Err(RuleError::PremiseCount {
                rule: RULE_NAME,
                expected: 1,
                found: premises.len(),
            });
        };
        let link = premise.as_atom().ok_or_else(|| RuleError::NotAnAtom {
            rule: RULE_NAME,
            vertex: premise.clone(),
        })?;
        let unknown = RuleError::UnknownAtom {
            rule: RULE_NAME,
            atom: link,
        };
        let atom_type = store.type_of(link).ok_or_else(|| unknown.clone())?;
        let outgoing = store.outgoing(link).ok_or(unknown)?;
        let [antecedent, consequent] = outgoing else {
            return Err(RuleError::Arity {
                rule: RULE_NAME,
                atom: link,
                expected: 2,
                found: outgoing.len(),
            });
        };
        Ok(BinaryPremise {
            link,
            atom_type,
            antecedent: *antecedent,
            consequent: *consequent,
        })
    }
}

impl<F: Formula> Rule for InversionRule<F> {
    fn name(&self) -> &'static str {
        RULE_NAME
    }

    fn allows_direct_production(&self) -> bool {
        false
    }

    fn input_filter(&self) -> &[MetaPattern] {
        &self.input_filter
    }

    fn formula(&self) -> &dyn Formula {
        &self.formula
    }

    /// `[T(c0, c1)]` ⊢ `T(c1, c0)`, com `T` o tipo da própria premissa.
    fn conclusion_shape(
        &self,
        premises: &[Vertex],
        store: &dyn FactStore,
    ) -> Result<MetaPattern, RuleError> {
        let premise = self.binary_premise(premises, store)?;
        let conclusion = MetaPattern::link(
            premise.atom_type,
            vec![
                MetaPattern::Atom(premise.consequent),
                MetaPattern::Atom(premise.antecedent),
            ],
        )?;
        Ok(conclusion)
    }

    /// Alvo `S(y, x)` com `S` é-um `T` ⊢ premissa única `T(x, y)`.
    ///
    /// Um alvo curinga `?S` não fixa os filhos; a premissa pedida é
    /// `T(?Atom, ?Atom)`.
    fn required_premises(
        &self,
        target: &MetaPattern,
        store: &dyn FactStore,
    ) -> Result<BackwardResult, RuleError> {
        let target_type = match (target, target.root_type(store)) {
            (_, Some(t)) => t,
            (MetaPattern::Atom(atom), None) => {
                return Err(RuleError::UnknownAtom {
                    rule: RULE_NAME,
                    atom: *atom,
                })
            }
            // root_type só falha para referências concretas
            (_, None) => return Ok(BackwardResult::inapplicable()),
        };

        if !store.inherits_type(target_type, self.link_type) {
            tracing::debug!(
                rule = RULE_NAME,
                target_type = %target_type,
                link_type = %self.link_type,
                "Regra: alvo fora da família, regra não se aplica"
            );
            return Ok(BackwardResult::inapplicable());
        }

        let children = target
            .children(store)
            .unwrap_or_else(|| vec![MetaPattern::any(), MetaPattern::any()]);
        let [left, right] = <[MetaPattern; 2]>::try_from(children).map_err(|children| {
            RuleError::TargetArity {
                rule: RULE_NAME,
                atom_type: target_type,
                expected: 2,
                found: children.len(),
            }
        })?;

        let premise = MetaPattern::link(self.link_type, vec![right, left])?;
        Ok(BackwardResult {
            alternatives: vec![vec![premise]],
            override_input_filter: true,
        })
    }

    fn extract_truth_values<'s>(
        &self,
        premises: &[Vertex],
        store: &'s dyn FactStore,
    ) -> Result<Vec<&'s TruthValue>, RuleError> {
        Ok(self.truth_value_array(premises, store)?.to_vec())
    }
}
