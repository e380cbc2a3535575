//! `/fact`: one entry from a fixed list of football facts.

use async_trait::async_trait;
use rand::seq::SliceRandom;

use crate::core::{CommandError, CommandHandler, Invocation};

pub const FOOTBALL_FACTS: [&str; 4] = [
    "The first official international football match was played between Scotland and England in 1872 and ended 0-0.",
    "Brazil is the only country to have played in every FIFA World Cup tournament.",
    "The Premier League was founded in 1992, replacing the old First Division as England's top tier.",
    "An outfield player in a professional match typically runs 10 to 13 kilometres.",
];

pub const NO_FACTS: &str = "No facts available right now.";

/// How `/fact` picks from the list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FactSelection {
    /// Always the first fact.
    #[default]
    First,
    /// Uniformly random fact per invocation.
    Random,
}

pub struct FactHandler {
    facts: Vec<String>,
    selection: FactSelection,
}

impl FactHandler {
    /// Uses [`FOOTBALL_FACTS`].
    pub fn new(selection: FactSelection) -> Self {
        Self::with_facts(FOOTBALL_FACTS.iter().map(|f| f.to_string()).collect(), selection)
    }

    pub fn with_facts(facts: Vec<String>, selection: FactSelection) -> Self {
        Self { facts, selection }
    }

    pub fn selection(&self) -> FactSelection {
        self.selection
    }

    fn pick(&self) -> Option<&String> {
        match self.selection {
            FactSelection::First => self.facts.first(),
            FactSelection::Random => self.facts.choose(&mut rand::thread_rng()),
        }
    }
}

#[async_trait]
impl CommandHandler for FactHandler {
    async fn handle(&self, _invocation: &Invocation) -> Result<String, CommandError> {
        self.pick()
            .cloned()
            .ok_or(CommandError::NoData { reply: NO_FACTS })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Chat;

    fn invocation() -> Invocation {
        Invocation::parse("/fact", Chat::private(1)).unwrap()
    }

    #[tokio::test]
    async fn test_first_selection_is_deterministic() {
        let handler = FactHandler::new(FactSelection::default());
        for _ in 0..10 {
            assert_eq!(handler.handle(&invocation()).await.unwrap(), FOOTBALL_FACTS[0]);
        }
    }

    #[tokio::test]
    async fn test_random_selection_stays_in_list() {
        let handler = FactHandler::new(FactSelection::Random);
        for _ in 0..50 {
            let fact = handler.handle(&invocation()).await.unwrap();
            assert!(FOOTBALL_FACTS.contains(&fact.as_str()), "unexpected fact: {}", fact);
        }
    }

    #[tokio::test]
    async fn test_empty_list_replies_no_data() {
        let handler = FactHandler::with_facts(Vec::new(), FactSelection::Random);
        let err = handler.handle(&invocation()).await.unwrap_err();
        assert_eq!(err.user_message(), NO_FACTS);
    }
}
