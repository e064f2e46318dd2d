//! Levels and the level registry.
//!
//! A level is an ordered chain of rules plus a set of conditional traps. When
//! flattened for evaluation, ordered rules take orders `1..=N` and conditional
//! rules continue at `N+1..=N+M`.

use thiserror::Error;

use crate::providers::RandomSource;
use crate::rules;
use crate::{OrderedRule, Rule};

pub type LevelId = u32;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LevelError {
    #[error("unknown level {0} (available: {:?})", level_ids())]
    Unknown(LevelId),
}

#[derive(Debug)]
pub struct Level {
    id: LevelId,
    title: &'static str,
    description: &'static str,
    rules: Vec<Rule>,
    conditional_rules: Vec<Rule>,
    protected_item: Option<&'static str>,
}

impl Level {
    pub fn new(id: LevelId, rules: Vec<Rule>, conditional_rules: Vec<Rule>) -> Self {
        Level { id, title: "", description: "", rules, conditional_rules, protected_item: None }
    }

    pub fn titled(mut self, title: &'static str, description: &'static str) -> Self {
        self.title = title;
        self.description = description;
        self
    }

    /// Losing every copy of `item` from the candidate fails the session.
    pub fn protecting(mut self, item: &'static str) -> Self {
        self.protected_item = Some(item);
        self
    }

    pub fn id(&self) -> LevelId {
        self.id
    }

    pub fn title(&self) -> &'static str {
        self.title
    }

    pub fn description(&self) -> &'static str {
        self.description
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn conditional_rules(&self) -> &[Rule] {
        &self.conditional_rules
    }

    pub fn protected_item(&self) -> Option<&'static str> {
        self.protected_item
    }

    pub fn len(&self) -> usize {
        self.rules.len() + self.conditional_rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Flatten into the evaluation list: ordered rules first, then conditional.
    pub fn ordered_rules(&self) -> Vec<OrderedRule<'_>> {
        let ordered = self.rules.iter().map(|rule| (false, rule));
        let conditional = self.conditional_rules.iter().map(|rule| (true, rule));

        ordered
            .chain(conditional)
            .enumerate()
            .map(|(index, (conditional, rule))| OrderedRule { order: index + 1, conditional, rule })
            .collect()
    }

    pub fn rule_at(&self, order: usize) -> Option<OrderedRule<'_>> {
        self.ordered_rules().into_iter().find(|slot| slot.order == order)
    }
}

/// Ids of the shipped levels, in play order.
pub fn level_ids() -> &'static [LevelId] {
    &[1, 2]
}

/// Build a shipped level. Random puzzle variants are resolved here, once.
pub fn build_level(id: LevelId, random: &mut dyn RandomSource) -> Result<Level, LevelError> {
    let level = match id {
        1 => everything_at_once(random),
        2 => paul(random),
        other => return Err(LevelError::Unknown(other)),
    };
    tracing::debug!(level = level.id, rules = level.len(), "level built");
    Ok(level)
}

fn everything_at_once(random: &mut dyn RandomSource) -> Level {
    Level::new(
        1,
        vec![
            rules::min_length(5),
            rules::has_number(),
            rules::has_uppercase(),
            rules::has_special_char(),
            rules::random_captcha(random),
            rules::contains_infinity_symbol(),
            rules::contains_absolute_zero(),
            rules::protect_hamster(),
            rules::contains_eiffel_city(),
            rules::hamster_between_numbers(),
            rules::count_the_triangles(),
            rules::numbers_must_be_sorted(),
            rules::product_of_numbers_max(9999),
            rules::must_contain_current_hour(),
            rules::contains_planet(),
            rules::planet_starts_with_uppercase(),
            rules::contains_alkali_metal(),
            rules::contains_roman_numeral(),
        ],
        vec![
            rules::not_start_with_number(),
            rules::no_uppercase_at_edges(),
            rules::max_two_carets(),
            rules::no_four_char_palindrome_hidden(),
            rules::only_one_hamster(),
            rules::max_one_dot(),
        ],
    )
    .titled(
        "Everything at once",
        "Rules pile up on top of each other. Some of them break others. All of them hold at the same time.",
    )
}

fn paul(random: &mut dyn RandomSource) -> Level {
    Level::new(
        2,
        vec![
            rules::min_length(8),
            rules::has_special_char(),
            rules::protect_egg(),
            rules::random_shape_puzzle(random),
            rules::has_uppercase(),
            rules::sum_of_numbers_equals_target(),
            rules::must_contain_locked_minute(),
            rules::contains_alkali_metal(),
            rules::max_length(40),
        ],
        vec![
            rules::not_start_with_number(),
            rules::no_four_char_palindrome_hidden(),
            rules::max_two_carets(),
            rules::max_one_dot(),
        ],
    )
    .titled("Paul", "Paul is an egg. Paul is in your password now. Do not lose Paul.")
    .protecting(rules::EGG)
}
