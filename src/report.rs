//! Plain-text rendering of a resolution trace.
//!
//! ```text
//! STACK RESOLUTION
//!
//! STEP 1: Shock deals 2 damage to Grizzly Bears. Grizzly Bears is destroyed by lethal damage.
//!   >> TRIGGERS DETECTED (APNAP order):
//!      - Blood Artist [Alice, Active Player]
//!        "Whenever a creature dies, target player loses 1 life."
//!
//! FINAL STATE
//!   Alice: 20 life
//!   Bob: 19 life
//!   Destroyed: b1
//! ```

use std::fmt;

use crate::stack::{ResolutionStep, ResolutionTrace};

/// `Display` adapter over a trace.
pub struct Report<'a>(pub &'a ResolutionTrace);

impl Report<'_> {
    fn errors(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.errors.is_empty() {
            return Ok(());
        }
        writeln!(f, "ERRORS:")?;
        for error in &self.0.errors {
            writeln!(f, "  ! {error}")?;
        }
        writeln!(f)
    }

    fn step(f: &mut fmt::Formatter<'_>, number: usize, step: &ResolutionStep) -> fmt::Result {
        writeln!(f, "STEP {number}: {}", step.description)?;
        if !step.new_triggers.is_empty() {
            writeln!(f, "  >> TRIGGERS DETECTED (APNAP order):")?;
            for trigger in &step.new_triggers {
                let seat = if trigger.is_active_player {
                    "Active Player"
                } else {
                    "Non-Active Player"
                };
                writeln!(f, "     - {} [{}, {seat}]", trigger.source_name, trigger.controller)?;
                writeln!(f, "       \"{}\"", trigger.text)?;
            }
        }
        writeln!(f)
    }

    fn final_state(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "FINAL STATE")?;
        for (player, life) in self.0.final_life.iter() {
            writeln!(f, "  {player}: {life} life")?;
        }
        for (player, cards) in self.0.cards_drawn.iter().filter(|(_, n)| **n > 0) {
            writeln!(f, "  {player} drew {cards} card(s)")?;
        }
        if !self.0.destroyed.is_empty() {
            let ids: Vec<&str> = self.0.destroyed.iter().map(|id| id.as_str()).collect();
            writeln!(f, "  Destroyed: {}", ids.join(", "))?;
        }
        Ok(())
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "STACK RESOLUTION")?;
        writeln!(f)?;
        self.errors(f)?;

        if self.0.steps.is_empty() {
            writeln!(f, "Stack was empty, nothing to resolve.")?;
        }
        for (i, step) in self.0.steps.iter().enumerate() {
            Self::step(f, i + 1, step)?;
        }

        self.final_state(f)
    }
}

/// Render a trace as text.
#[must_use]
pub fn render(trace: &ResolutionTrace) -> String {
    Report(trace).to_string()
}
