//! Erros de contrato das regras.
//!
//! Toda variante de [`RuleError`] é uma **violação de contrato**: quem chamou
//! não pré-filtrou as premissas pelo `input_filter` da regra, ou entregou um
//! padrão malformado. A falha encerra só a chamada; não há recuperação nem
//! nova tentativa.
//!
//! "A regra não se aplica a este alvo" **não** é erro: o caminho reverso
//! devolve um conjunto vazio de alternativas.

use crate::core::{AtomId, AtomType};
use crate::pattern::{PatternError, Vertex};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RuleError {
    #[error("{rule}: esperava {expected} premissa(s), recebeu {found}")]
    PremiseCount {
        rule: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("{rule}: link {atom} tem {found} filho(s), esperava {expected}")]
    Arity {
        rule: &'static str,
        atom: AtomId,
        expected: usize,
        found: usize,
    },

    #[error("{rule}: alvo {atom_type} tem {found} filho(s), esperava {expected}")]
    TargetArity {
        rule: &'static str,
        atom_type: AtomType,
        expected: usize,
        found: usize,
    },

    #[error("{rule}: premissa não é um átomo: {vertex}")]
    NotAnAtom { rule: &'static str, vertex: Vertex },

    #[error("{rule}: átomo desconhecido na base: {atom}")]
    UnknownAtom { rule: &'static str, atom: AtomId },

    #[error("{rule}: {link_type} não é um tipo de inclusão binário")]
    NotInclusionFamily {
        rule: &'static str,
        link_type: AtomType,
    },

    #[error("fórmula {formula}: esperava {expected} valores de verdade, recebeu {found}")]
    FormulaArity {
        formula: &'static str,
        expected: usize,
        found: usize,
    },

    #[error(transparent)]
    Pattern(#[from] PatternError),
}
