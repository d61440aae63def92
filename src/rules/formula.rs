//! # Fórmulas de Valor de Verdade
//!
//! Uma [`Formula`] é uma função **pura** que combina um vetor ordenado de
//! valores de verdade num valor novo. A regra decide *quais* valores e em
//! *que ordem*; a fórmula só faz a aritmética.
//!
//! ## InversionFormula — Regra de Bayes
//!
//! Entrada `[TV(A→B), TV(A), TV(B)]`, saída `TV(B→A)`:
//!
//! ```text
//! s(B→A) = s(A→B) × s(A) / s(B)          limitado a [0, 1]
//! n(B→A) = n(A→B) × n(B) / n(A)          limitado a n(A→B)
//! ```
//!
//! A contagem nunca cresce além da evidência da premissa: inverter um link
//! não cria evidência nova.
//!
//! ```text
//! Inheritance(Gato, Mamífero) ⟨0.90, 0.80⟩, Gato ⟨0.10, 0.90⟩, Mamífero ⟨0.30, 0.90⟩
//! ⊢ Inheritance(Mamífero, Gato) ⟨0.30, 0.80⟩
//! ```

use crate::core::TruthValue;

use super::RuleError;

/// Denominadores são limitados por baixo para evitar divisão por zero.
const MIN_DENOMINATOR: f64 = 1e-5;

/// Combinação numérica de valores de verdade.
pub trait Formula: Send + Sync {
    fn name(&self) -> &'static str;

    /// Quantos valores a fórmula espera.
    fn arity(&self) -> usize;

    /// Aritmética propriamente dita, **sem** verificar o número de argumentos.
    ///
    /// Chamadores devem passar por [`combine`](Formula::combine).
    ///
    /// # Panics
    ///
    /// Pode entrar em pânico se `args.len() != self.arity()`.
    fn compute(&self, args: &[&TruthValue]) -> TruthValue;

    /// Verifica o número de argumentos e combina.
    fn combine(&self, args: &[&TruthValue]) -> Result<TruthValue, RuleError> {
        if args.len() != self.arity() {
            return Err(RuleError::FormulaArity {
                formula: self.name(),
                expected: self.arity(),
                found: args.len(),
            });
        }
        Ok(self.compute(args))
    }
}

/// Inversão de Bayes: de `A→B` para `B→A`.
#[derive(Clone, Copy, Debug, Default)]
pub struct InversionFormula;

impl Formula for InversionFormula {
    fn name(&self) -> &'static str {
        "InversionFormula"
    }

    fn arity(&self) -> usize {
        3
    }

    fn compute(&self, args: &[&TruthValue]) -> TruthValue {
        let (ab, a, b) = (args[0], args[1], args[2]);

        let strength = (ab.strength() * a.strength() / b.strength().max(MIN_DENOMINATOR)).min(1.0);
        let count = (ab.count() * b.count() / a.count().max(MIN_DENOMINATOR)).min(ab.count());

        TruthValue::from_count(strength, count)
    }
}
