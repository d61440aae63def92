//! # TruthValue — Valor de Verdade Probabilístico
//!
//! Cada átomo da base carrega um [`TruthValue`] simples com duas dimensões:
//!
//! - **Strength (s)**: "Qual proporção da evidência é positiva?"
//!   - `s = w⁺ / (w⁺ + w⁻)` — varia de 0.0 a 1.0
//!   - Exemplo: Se 9 de 10 gatos observados são mamíferos, `s = 0.9`
//!
//! - **Confidence (c)**: "Quanta evidência sustenta essa proporção?"
//!   - `c = n / (n + k)` com `n = w⁺ + w⁻`
//!   - `k` é o "horizonte evidencial" (padrão = 1.0)
//!
//! ## Representação Interna
//!
//! Internamente, o [`TruthValue`] armazena **evidência** (w⁺, w⁻) em vez de (s, c).
//! Isso facilita a **revisão** (merge de evidências), que é simplesmente somar evidências,
//! e dá às fórmulas acesso direto à contagem `n` ([`TruthValue::count`]).
//!
//! O valor é **imutável**: regras e fórmulas só leem valores emprestados
//! da base e produzem valores novos.
//!
//! ## Exemplo
//!
//! ```rust
//! use pln_rules::core::TruthValue;
//!
//! let tv = TruthValue::new(0.9, 0.8);
//! assert!((tv.strength() - 0.9).abs() < 1e-9);
//! assert!((tv.confidence() - 0.8).abs() < 1e-9);
//! println!("{}", tv); // ⟨0.90, 0.80⟩
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// Parâmetro de horizonte evidencial.
///
/// Controla quão rápido a confiança cresce com nova evidência.
pub const EVIDENTIAL_HORIZON: f64 = 1.0;

/// Confiança máxima representável (c = 1.0 exigiria evidência infinita).
const MAX_CONFIDENCE: f64 = 0.9999;

/// Valor de verdade (strength, confidence) armazenado como evidência.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TruthValue {
    /// Evidência positiva (w⁺).
    positive_evidence: f64,
    /// Evidência negativa (w⁻).
    negative_evidence: f64,
}

impl TruthValue {
    /// Cria um novo TruthValue a partir de **strength** e **confidence**.
    ///
    /// Os valores são limitados (clamped):
    /// - `strength`: entre 0.0 e 1.0
    /// - `confidence`: entre 0.0 e 0.9999
    ///
    /// Internamente, converte (s, c) para (w⁺, w⁻) usando:
    /// - `n = k × c / (1 - c)`
    /// - `w⁺ = n × s`
    /// - `w⁻ = n × (1 - s)`
    pub fn new(strength: f64, confidence: f64) -> Self {
        let confidence = confidence.clamp(0.0, MAX_CONFIDENCE);
        let count = EVIDENTIAL_HORIZON * confidence / (1.0 - confidence);
        Self::from_count(strength, count)
    }

    /// Cria um TruthValue a partir de **strength** e da contagem total de evidência `n`.
    pub fn from_count(strength: f64, count: f64) -> Self {
        let strength = strength.clamp(0.0, 1.0);
        let count = count.max(0.0);
        Self {
            positive_evidence: count * strength,
            negative_evidence: count * (1.0 - strength),
        }
    }

    /// Valor "nada se sabe": strength neutra, sem evidência.
    pub fn unknown() -> Self {
        Self {
            positive_evidence: 0.0,
            negative_evidence: 0.0,
        }
    }

    /// Retorna a **strength** — proporção de evidência positiva.
    ///
    /// Sem evidência, retorna 0.5 (neutro).
    pub fn strength(&self) -> f64 {
        let total = self.count();
        if total == 0.0 {
            0.5
        } else {
            self.positive_evidence / total
        }
    }

    /// Retorna a **confidence** — `n / (n + k)`.
    pub fn confidence(&self) -> f64 {
        let total = self.count();
        total / (total + EVIDENTIAL_HORIZON)
    }

    /// Contagem total de evidência `n = w⁺ + w⁻`.
    pub fn count(&self) -> f64 {
        self.positive_evidence + self.negative_evidence
    }

    /// Fórmula: `e = c × (s − 0.5) + 0.5`
    pub fn expectation(&self) -> f64 {
        self.confidence() * (self.strength() - 0.5) + 0.5
    }

    /// **Revisão** — soma evidências independentes sobre o mesmo átomo.
    ///
    /// Usada quando uma derivação chega a um átomo que já existe na base.
    pub fn revision(&self, other: &TruthValue) -> TruthValue {
        TruthValue {
            positive_evidence: self.positive_evidence + other.positive_evidence,
            negative_evidence: self.negative_evidence + other.negative_evidence,
        }
    }
}

/// Formato `⟨strength, confidence⟩`, por exemplo `⟨0.90, 0.80⟩`.
impl fmt::Display for TruthValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "⟨{:.2}, {:.2}⟩", self.strength(), self.confidence())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// (s, c) sobrevive à conversão para evidência
    #[test]
    fn test_new_preserves_strength_and_confidence() {
        let tv = TruthValue::new(0.9, 0.8);
        assert!((tv.strength() - 0.9).abs() < 1e-9);
        assert!((tv.confidence() - 0.8).abs() < 1e-9);
        assert!((tv.count() - 4.0).abs() < 1e-9);
    }

    /// Sem evidência: strength neutra e confiança zero
    #[test]
    fn test_unknown() {
        let tv = TruthValue::unknown();
        assert_eq!(tv.strength(), 0.5);
        assert_eq!(tv.confidence(), 0.0);
    }

    /// Verifica que a revisão sempre aumenta a confiança
    #[test]
    fn test_revision_increases_confidence() {
        let a = TruthValue::new(0.8, 0.3);
        let b = TruthValue::new(0.7, 0.4);
        let r = a.revision(&b);
        assert!(r.confidence() > a.confidence());
        assert!(r.confidence() > b.confidence());
    }

    /// Confiança 1.0 é limitada, strength fora de [0,1] também
    #[test]
    fn test_clamping() {
        let tv = TruthValue::new(1.5, 1.0);
        assert_eq!(tv.strength(), 1.0);
        assert!(tv.confidence() < 1.0);
        assert_eq!(format!("{}", TruthValue::new(0.9, 0.8)), "⟨0.90, 0.80⟩");
    }
}
