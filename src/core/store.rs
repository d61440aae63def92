//! # FactStore — Interface de Leitura da Base
//!
//! As regras de inferência nunca acessam a [`KnowledgeBase`](super::KnowledgeBase)
//! diretamente: recebem um `&dyn FactStore` como parâmetro em cada operação.
//! Não existe "base global corrente" — quem chama decide qual base usar.
//!
//! Todas as consultas são de **leitura**. Cada consulta individual deve ver
//! um estado consistente; nenhuma atomicidade entre consultas é exigida.
//! Átomos desconhecidos resultam em `None`.

use super::{AtomId, AtomType, TruthValue};

/// Consultas que uma regra pode fazer à base de fatos.
pub trait FactStore: Send + Sync {
    /// Tipo do átomo.
    fn type_of(&self, atom: AtomId) -> Option<AtomType>;

    /// Filhos ordenados do átomo (vazio para nós).
    fn outgoing(&self, atom: AtomId) -> Option<&[AtomId]>;

    /// Valor de verdade do átomo, emprestado — a base continua dona do valor.
    fn truth_value_of(&self, atom: AtomId) -> Option<&TruthValue>;

    /// Teste de subsunção da taxonomia: `candidate` é-um `family`?
    fn inherits_type(&self, candidate: AtomType, family: AtomType) -> bool {
        candidate.inherits(family)
    }

    /// Filho na posição `index`.
    fn outgoing_at(&self, atom: AtomId, index: usize) -> Option<AtomId> {
        self.outgoing(atom).and_then(|out| out.get(index).copied())
    }

    /// Nome do átomo, se for um nó. Usado apenas para descrições legíveis.
    fn name_of(&self, _atom: AtomId) -> Option<&str> {
        None
    }
}
