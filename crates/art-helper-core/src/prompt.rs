//! The one prompt template of the program: materials advice for a medium.
//!
//! [`MaterialsPrompt`] ties a [`Medium`] to the instruction text sent to the
//! model.  Rendering is a pure function of the medium: same input, same
//! string, no side effects.  Both front-ends build their requests through
//! this type, so the wording lives in exactly one place.
//!
//! ```rust
//! use art_helper_core::medium::Medium;
//! use art_helper_core::prompt::MaterialsPrompt;
//!
//! let text = MaterialsPrompt::new(Medium::Watercolor).render();
//! assert!(text.contains("the medium 'watercolor'"));
//! assert!(text.contains("Essential Materials:"));
//! ```

use crate::builder::PromptBuilder;
use crate::medium::Medium;

/// Per-request value object describing one suggestion prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaterialsPrompt {
    medium: Medium,
}

impl MaterialsPrompt {
    /// Create a prompt for the given medium.
    pub fn new(medium: Medium) -> Self {
        Self { medium }
    }

    /// Assemble the instruction text.
    ///
    /// The four section headings are part of the contract with the model and
    /// must appear verbatim: `Essential Materials:`, `Practical Tips:`,
    /// `Budget Upgrades:`, `Nice-to-Have Upgrades:`.
    pub fn render(&self) -> String {
        PromptBuilder::new()
            .add_line(format!(
                "You are an expert art instructor. The user selected the medium '{}'.",
                self.medium
            ))
            .add_line("Provide four clear sections with headings:")
            .add_numbered_item(1, "Essential Materials: a concise bullet list of must-have items.")
            .add_numbered_item(
                2,
                "Practical Tips: a short section with actionable tips for using those materials effectively.",
            )
            .add_numbered_item(3, "Budget Upgrades: list inexpensive/budget-friendly alternatives.")
            .add_numbered_item(4, "Nice-to-Have Upgrades: premium upgrades worth considering.")
            .add_line(
                "Keep responses short and practical. Use plain text headings exactly as: \
                 'Essential Materials:', 'Practical Tips:', 'Budget Upgrades:', 'Nice-to-Have Upgrades:'.",
            )
            .finalize()
    }
}

impl From<Medium> for MaterialsPrompt {
    fn from(medium: Medium) -> Self {
        Self::new(medium)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_names_the_selected_medium() {
        let text = MaterialsPrompt::new(Medium::ColoredPencils).render();
        assert!(text.contains("the medium 'colored pencils'"));
    }

    #[test]
    fn render_contains_all_four_headings_for_every_medium() {
        for medium in Medium::ALL {
            let text = MaterialsPrompt::new(medium).render();
            for heading in [
                "Essential Materials:",
                "Practical Tips:",
                "Budget Upgrades:",
                "Nice-to-Have Upgrades:",
            ] {
                assert!(text.contains(heading), "{medium}: missing heading {heading:?}");
            }
        }
    }

    #[test]
    fn render_is_deterministic() {
        let a = MaterialsPrompt::new(Medium::Acrylic).render();
        let b = MaterialsPrompt::from(Medium::Acrylic).render();
        assert_eq!(a, b);
    }

    #[test]
    fn render_lists_sections_in_numbered_order() {
        let text = MaterialsPrompt::new(Medium::Markers).render();
        let one = text.find("1) Essential Materials").unwrap();
        let two = text.find("2) Practical Tips").unwrap();
        let three = text.find("3) Budget Upgrades").unwrap();
        let four = text.find("4) Nice-to-Have Upgrades").unwrap();
        assert!(one < two && two < three && three < four);
    }
}
