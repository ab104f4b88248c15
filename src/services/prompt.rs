//! Structured system prompt for the guest assistant.
//!
//! Each policy lives in its own named field so wording can change (or be
//! overridden from config) without touching the assembly logic. Sections may
//! use the placeholders `{assistant}`, `{day}`, `{room}` and `{location}`.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PromptTemplate {
    pub assistant_name: String,

    pub personality: String,

    /// How to use the retrieved room context.
    pub retrieval: String,

    /// What may and may not be disclosed about other guests.
    pub privacy: String,

    pub room_scope: String,

    pub response_style: String,

    pub language_policy: String,

    pub device_control_policy: String,

    /// Free-form additions appended after the named sections.
    pub extras: Vec<String>,
}

impl Default for PromptTemplate {
    fn default() -> Self {
        Self {
            assistant_name: "Tavv".to_string(),
            personality: "You are {assistant}, a friendly but efficient hotel assistant focused on authentic conversation. Today is {day}.".to_string(),
            retrieval: "Answer questions using only the hotel information provided in the context.".to_string(),
            privacy: "Only answer what the guest asked. Never reveal information about other rooms or residents. Hotel services such as the restaurant, pools and amenities may be shared freely.".to_string(),
            room_scope: "The guest is staying in room {room}. Limit room-specific answers to that room.".to_string(),
            response_style: "Keep replies short. Do not add steps or instructions unless the guest asks to explain, asks how, or asks for steps.".to_string(),
            language_policy: "Reply in the guest's language and switch whenever they do.".to_string(),
            device_control_policy: "The room has connected devices such as the TV and air conditioning. Only change a device when the guest explicitly asks, never show technical details or code, and state clearly what was changed.".to_string(),
            extras: vec![
                "If the guest seems bored, suggest pools or water sports.".to_string(),
                "Every hotel service, including food and housekeeping, is included in the stay.".to_string(),
                "The hotel is located in {location}; recommend local attractions accordingly.".to_string(),
            ],
        }
    }
}

/// Values substituted into the template at render time.
#[derive(Debug, Clone, Copy)]
pub struct PromptVars<'a> {
    pub day: &'a str,
    pub room: &'a str,
    pub location: Option<&'a str>,
}

impl PromptTemplate {
    /// Named sections in render order.
    #[must_use]
    pub fn sections(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("personality", self.personality.as_str()),
            ("retrieval", self.retrieval.as_str()),
            ("privacy", self.privacy.as_str()),
            ("room_scope", self.room_scope.as_str()),
            ("response_style", self.response_style.as_str()),
            ("language_policy", self.language_policy.as_str()),
            ("device_control_policy", self.device_control_policy.as_str()),
        ]
    }

    /// Renders the system instruction. Empty sections are skipped.
    #[must_use]
    pub fn render(&self, vars: PromptVars<'_>) -> String {
        let location = vars.location.unwrap_or("the hotel's city");

        self.sections()
            .into_iter()
            .map(|(_, text)| text)
            .chain(self.extras.iter().map(String::as_str))
            .filter(|text| !text.trim().is_empty())
            .map(|text| {
                text.replace("{assistant}", &self.assistant_name)
                    .replace("{day}", vars.day)
                    .replace("{room}", vars.room)
                    .replace("{location}", location)
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars() -> PromptVars<'static> {
        PromptVars {
            day: "Tuesday",
            room: "0212",
            location: Some("Nasugbu, Batangas"),
        }
    }

    #[test]
    fn default_render_includes_every_section() {
        let template = PromptTemplate::default();
        let rendered = template.render(vars());

        assert_eq!(
            rendered.lines().count(),
            template.sections().len() + template.extras.len()
        );
        assert!(rendered.contains("Today is Tuesday."));
        assert!(rendered.contains("room 0212"));
        assert!(rendered.contains("You are Tavv"));
        assert!(rendered.contains("Nasugbu, Batangas"));
        assert!(!rendered.contains('{'));
    }

    #[test]
    fn sections_are_line_separated_and_blank_ones_skipped() {
        let template = PromptTemplate {
            personality: "P {assistant}".to_string(),
            retrieval: String::new(),
            privacy: "   ".to_string(),
            room_scope: "R {room}".to_string(),
            response_style: String::new(),
            language_policy: "L".to_string(),
            device_control_policy: String::new(),
            extras: vec!["X {location}".to_string()],
            assistant_name: "Bot".to_string(),
        };

        let rendered = template.render(PromptVars {
            day: "Monday",
            room: "111",
            location: None,
        });

        assert_eq!(rendered, "P Bot\nR 111\nL\nX the hotel's city");
    }

    #[test]
    fn partial_config_keeps_defaults() {
        let template: PromptTemplate = toml::from_str(r#"assistant_name = "Cove""#).unwrap();
        assert_eq!(template.assistant_name, "Cove");
        assert_eq!(template.language_policy, PromptTemplate::default().language_policy);
    }
}
