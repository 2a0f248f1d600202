//! Draft input for not-yet-created records.
//!
//! DESIGN
//! ======
//! A draft is a plain bag of strings. `set_field` merges one value and never
//! validates: the service is the authority on well-formed input and reports
//! field-level problems that the controller surfaces verbatim. A draft is
//! only ever cleared as a whole, by `FormState::reset`.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use std::fmt::Debug;

use serde::{Serialize, Serializer};

/// Role level a fresh icebreaker draft starts with.
pub const DEFAULT_ROLE_LEVEL: &str = "Mid-level";

/// Editable input for one resource kind. Serializes to the create body.
pub trait Draft: Clone + Debug + Default + PartialEq + Serialize + Send + Sync + 'static {
    type Field: Copy + Debug + Eq + Send;

    fn set(&mut self, field: Self::Field, value: String);
}

// =============================================================================
// TRANSCRIPT DRAFT
// =============================================================================

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct TranscriptDraft {
    pub company_name: String,
    pub attendees: String,
    /// Call date as typed; the service parses it.
    pub date: String,
    pub transcript: String,
    #[serde(serialize_with = "blank_as_null")]
    pub custom_prompt: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TranscriptField {
    CompanyName,
    Attendees,
    Date,
    Transcript,
    CustomPrompt,
}

impl Draft for TranscriptDraft {
    type Field = TranscriptField;

    fn set(&mut self, field: TranscriptField, value: String) {
        match field {
            TranscriptField::CompanyName => self.company_name = value,
            TranscriptField::Attendees => self.attendees = value,
            TranscriptField::Date => self.date = value,
            TranscriptField::Transcript => self.transcript = value,
            TranscriptField::CustomPrompt => self.custom_prompt = value,
        }
    }
}

// =============================================================================
// ICEBREAKER DRAFT
// =============================================================================

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct IcebreakerDraft {
    pub prospect_name: String,
    pub company_name: String,
    pub linkedin_bio: String,
    pub pitch_deck: String,
    pub role_level: String,
    #[serde(serialize_with = "blank_as_null")]
    pub custom_prompt: String,
}

impl Default for IcebreakerDraft {
    fn default() -> Self {
        Self {
            prospect_name: String::new(),
            company_name: String::new(),
            linkedin_bio: String::new(),
            pitch_deck: String::new(),
            role_level: DEFAULT_ROLE_LEVEL.to_owned(),
            custom_prompt: String::new(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IcebreakerField {
    ProspectName,
    CompanyName,
    LinkedinBio,
    PitchDeck,
    RoleLevel,
    CustomPrompt,
}

impl Draft for IcebreakerDraft {
    type Field = IcebreakerField;

    fn set(&mut self, field: IcebreakerField, value: String) {
        match field {
            IcebreakerField::ProspectName => self.prospect_name = value,
            IcebreakerField::CompanyName => self.company_name = value,
            IcebreakerField::LinkedinBio => self.linkedin_bio = value,
            IcebreakerField::PitchDeck => self.pitch_deck = value,
            IcebreakerField::RoleLevel => self.role_level = value,
            IcebreakerField::CustomPrompt => self.custom_prompt = value,
        }
    }
}

/// Prompt template offered as a starting point for an icebreaker's custom prompt.
#[must_use]
pub fn suggested_prompt(company: &str, role: &str) -> String {
    format!(
        "Paste a [LinkedIn - about section], give me the company LinkedIn, and website. \
         I'll give you buying signals for [deck] list them, why they matter, what's the source \
         of information, discovery triggers, and smart questions to ask in your next call. \
         At the level of [{company}] & at the level of [{role}], also share what is his \
         preferred style of buying and how did you infer that. At the end give me a short \
         summary and ask me 3 reflection questions to prepare better for the meet. Also give \
         me top 5 things he would like from our deck. What parts may not be clear, relevant or \
         valuable and why + what to do instead."
    )
}

#[allow(clippy::ptr_arg)]
fn blank_as_null<S>(value: &String, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    if value.is_empty() {
        serializer.serialize_none()
    } else {
        serializer.serialize_str(value)
    }
}

// =============================================================================
// FORM STATE
// =============================================================================

/// Holds the current draft for one resource kind.
#[derive(Clone, Debug, Default)]
pub struct FormState<D: Draft> {
    draft: D,
}

impl<D: Draft> FormState<D> {
    /// Merge one field into the draft. No validation.
    pub fn set_field(&mut self, field: D::Field, value: impl Into<String>) {
        self.draft.set(field, value.into());
    }

    /// Replace the whole draft with its empty state.
    pub fn reset(&mut self) {
        self.draft = D::default();
    }

    #[must_use]
    pub fn draft(&self) -> &D {
        &self.draft
    }
}
