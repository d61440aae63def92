//! # AtomType — Taxonomia Fechada de Tipos
//!
//! Todo [`Atom`](super::Atom) da base de conhecimento tem um tipo tirado de
//! uma **hierarquia fechada**. A hierarquia é uma árvore: cada tipo tem no
//! máximo um pai, e o teste de subsunção ([`AtomType::inherits`]) sobe a
//! árvore até encontrar a família pedida ou chegar à raiz `Atom`.
//!
//! ```text
//! Atom
//! ├── Node
//! │   ├── ConceptNode
//! │   └── PredicateNode
//! └── Link
//!     ├── OrderedLink
//!     │   ├── ListLink
//!     │   ├── EvaluationLink
//!     │   ├── InheritanceLink
//!     │   │   ├── SubsetLink
//!     │   │   └── IntensionalInheritanceLink
//!     │   └── ImplicationLink
//!     │       ├── ExtensionalImplicationLink
//!     │       └── IntensionalImplicationLink
//!     └── UnorderedLink
//!         ├── SimilarityLink
//!         ├── AndLink
//!         └── OrLink
//! ```
//!
//! ## Famílias de Inclusão
//!
//! As famílias `InheritanceLink` e `ImplicationLink` representam relações
//! dirigidas "A está contido em B" / "A implica B". Todo link dessas famílias
//! tem **exatamente dois filhos**: (antecedente, consequente).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Tipo de um átomo na taxonomia fechada.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AtomType {
    /// Raiz da taxonomia — "qualquer átomo".
    Atom,

    /// Átomo sem filhos, identificado por nome.
    Node,
    /// Conceito nomeado. Exemplo: "Gato"
    ConceptNode,
    /// Predicado nomeado. Exemplo: "come"
    PredicateNode,

    /// Átomo com conjunto ordenado de filhos.
    Link,
    /// Link em que a ordem dos filhos importa.
    OrderedLink,
    /// Lista simples de argumentos.
    ListLink,
    /// Aplicação de predicado: `Evaluation(pred, List(args))`.
    EvaluationLink,
    /// "é um" — herança genérica. Exemplo: "Gato é um Mamífero"
    InheritanceLink,
    /// Herança extensional (subconjunto de membros).
    SubsetLink,
    /// Herança intensional (subconjunto de propriedades).
    IntensionalInheritanceLink,
    /// "⇒" — implicação. Exemplo: "Chuva ⇒ Solo Molhado"
    ImplicationLink,
    /// Implicação extensional.
    ExtensionalImplicationLink,
    /// Implicação intensional.
    IntensionalImplicationLink,
    /// Link em que a ordem dos filhos não importa.
    UnorderedLink,
    /// "≈" — similaridade simétrica.
    SimilarityLink,
    /// Conjunção.
    AndLink,
    /// Disjunção.
    OrLink,
}

/// Todos os tipos, na ordem da árvore (pais antes dos filhos).
pub const ALL_TYPES: [AtomType; 18] = [
    AtomType::Atom,
    AtomType::Node,
    AtomType::ConceptNode,
    AtomType::PredicateNode,
    AtomType::Link,
    AtomType::OrderedLink,
    AtomType::ListLink,
    AtomType::EvaluationLink,
    AtomType::InheritanceLink,
    AtomType::SubsetLink,
    AtomType::IntensionalInheritanceLink,
    AtomType::ImplicationLink,
    AtomType::ExtensionalImplicationLink,
    AtomType::IntensionalImplicationLink,
    AtomType::UnorderedLink,
    AtomType::SimilarityLink,
    AtomType::AndLink,
    AtomType::OrLink,
];

impl AtomType {
    /// Pai imediato na taxonomia. Só a raiz `Atom` não tem pai.
    pub fn parent(self) -> Option<AtomType> {
        use AtomType::*;
        match self {
            Atom => None,
            Node | Link => Some(Atom),
            ConceptNode | PredicateNode => Some(Node),
            OrderedLink | UnorderedLink => Some(Link),
            ListLink | EvaluationLink | InheritanceLink | ImplicationLink => Some(OrderedLink),
            SubsetLink | IntensionalInheritanceLink => Some(InheritanceLink),
            ExtensionalImplicationLink | IntensionalImplicationLink => Some(ImplicationLink),
            SimilarityLink | AndLink | OrLink => Some(UnorderedLink),
        }
    }

    /// Teste de subsunção: `self` é-um `family`?
    ///
    /// Reflexivo (`T.inherits(T)` é sempre verdadeiro) e transitivo.
    pub fn inherits(self, family: AtomType) -> bool {
        let mut current = Some(self);
        while let Some(t) = current {
            if t == family {
                return true;
            }
            current = t.parent();
        }
        false
    }

    /// Aridade fixa exigida pelo tipo, se houver.
    ///
    /// As famílias de herança, implicação e similaridade são binárias;
    /// os demais links aceitam qualquer número de filhos e nós não têm filhos.
    pub fn fixed_arity(self) -> Option<usize> {
        if self.inherits(AtomType::InheritanceLink)
            || self.inherits(AtomType::ImplicationLink)
            || self.inherits(AtomType::SimilarityLink)
        {
            Some(2)
        } else if self.inherits(AtomType::Node) {
            Some(0)
        } else {
            None
        }
    }

    pub fn is_link(self) -> bool {
        self.inherits(AtomType::Link)
    }

    pub fn is_node(self) -> bool {
        self.inherits(AtomType::Node)
    }

    /// Nome canônico do tipo (o mesmo aceito por [`FromStr`]).
    pub fn name(self) -> &'static str {
        use AtomType::*;
        match self {
            Atom => "Atom",
            Node => "Node",
            ConceptNode => "ConceptNode",
            PredicateNode => "PredicateNode",
            Link => "Link",
            OrderedLink => "OrderedLink",
            ListLink => "ListLink",
            EvaluationLink => "EvaluationLink",
            InheritanceLink => "InheritanceLink",
            SubsetLink => "SubsetLink",
            IntensionalInheritanceLink => "IntensionalInheritanceLink",
            ImplicationLink => "ImplicationLink",
            ExtensionalImplicationLink => "ExtensionalImplicationLink",
            IntensionalImplicationLink => "IntensionalImplicationLink",
            UnorderedLink => "UnorderedLink",
            SimilarityLink => "SimilarityLink",
            AndLink => "AndLink",
            OrLink => "OrLink",
        }
    }

    /// Rótulo curto usado nas descrições: `InheritanceLink` → `Inheritance`.
    pub fn short_name(self) -> &'static str {
        let name = self.name();
        name.strip_suffix("Link")
            .or_else(|| name.strip_suffix("Node"))
            .filter(|s| !s.is_empty())
            .unwrap_or(name)
    }
}

impl fmt::Display for AtomType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Nome de tipo desconhecido ao converter de string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("tipo de átomo desconhecido: {0}")]
pub struct UnknownAtomType(pub String);

impl FromStr for AtomType {
    type Err = UnknownAtomType;

    /// Aceita o nome canônico (`InheritanceLink`) ou o rótulo curto
    /// (`Inheritance`), sem diferenciar maiúsculas.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        ALL_TYPES
            .iter()
            .copied()
            .find(|t| {
                t.name().eq_ignore_ascii_case(wanted) || t.short_name().eq_ignore_ascii_case(wanted)
            })
            .ok_or_else(|| UnknownAtomType(wanted.to_string()))
    }
}
