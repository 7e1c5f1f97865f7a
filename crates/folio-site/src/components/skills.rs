//! Skills section with proficiency bars.

use dioxus::prelude::*;

use crate::content::{SectionId, Skill, SKILLS};
use crate::icons::IconGlyph;

use super::reveal::{
    reveal_class, stagger_delay_ms, stagger_style, transition_style, use_reveal, RevealOptions,
};

/// How long a proficiency bar takes to fill.
const BAR_FILL_MS: u32 = 1000;

#[component]
pub fn Skills() -> Element {
    let anchor = SectionId::Skills.anchor();
    let revealed = use_reveal(anchor.to_string(), RevealOptions::SECTION);
    let is_revealed = revealed();

    rsx! {
        section {
            id: "{anchor}",
            class: "skills-section",

            div {
                class: "skills-container {reveal_class(is_revealed)}",
                style: "{transition_style(RevealOptions::SECTION.duration_ms, 0)}",

                h2 { class: "section-title", "My Skills" }

                div {
                    class: "skills-grid",
                    for (index, skill) in SKILLS.iter().copied().enumerate() {
                        SkillCard {
                            key: "{skill.name}",
                            skill,
                            index,
                            revealed: is_revealed,
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn SkillCard(skill: Skill, index: usize, revealed: bool) -> Element {
    rsx! {
        div {
            class: "skill-card {reveal_class(revealed)}",
            style: "{stagger_style(index)}",

            IconGlyph { icon: skill.icon, class: "skill-icon" }
            h3 { class: "skill-name", "{skill.name}" }

            div {
                class: "skill-level",
                div {
                    class: "skill-level-bar",
                    style: "{bar_style(skill.level, revealed, index)}",
                }
            }
        }
    }
}

/// Width and timing of a proficiency bar; empty until revealed.
fn bar_style(level: u8, revealed: bool, index: usize) -> String {
    let width = if revealed { level.min(100) } else { 0 };
    format!(
        "width: {width}%; transition: width {BAR_FILL_MS}ms ease {}ms;",
        stagger_delay_ms(index)
    )
}
