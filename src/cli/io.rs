use dialoguer::{theme::ColorfulTheme, Input, Select};

use crate::cli::forms::{FieldId, PromptResponse, WizardInteraction};
use crate::cli::CommandError;

const CANCEL_TOKEN: &str = ":cancel";

/// Terminal-backed prompts for the entry wizard.
pub struct DialoguerInteraction {
    theme: ColorfulTheme,
}

impl DialoguerInteraction {
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }
}

impl Default for DialoguerInteraction {
    fn default() -> Self {
        Self::new()
    }
}

impl WizardInteraction for DialoguerInteraction {
    fn prompt(&mut self, field: FieldId, current: &str) -> Result<PromptResponse, CommandError> {
        match field {
            FieldId::Kind => {
                let options = ["income", "expense"];
                let default = options.iter().position(|o| *o == current).unwrap_or(0);
                let choice = Select::with_theme(&self.theme)
                    .with_prompt(field.label())
                    .items(&options)
                    .default(default)
                    .interact_opt()?;
                Ok(match choice {
                    Some(index) => PromptResponse::Value(options[index].to_string()),
                    None => PromptResponse::Cancel,
                })
            }
            FieldId::Description | FieldId::Date | FieldId::Amount => {
                let prompt = if current.is_empty() {
                    format!("{} ({} to abort)", field.label(), CANCEL_TOKEN)
                } else {
                    format!("{} [{}]", field.label(), current)
                };
                let value: String = Input::with_theme(&self.theme)
                    .with_prompt(prompt)
                    .allow_empty(true)
                    .interact_text()?;
                let trimmed = value.trim();
                Ok(if trimmed == CANCEL_TOKEN {
                    PromptResponse::Cancel
                } else if trimmed.is_empty() {
                    PromptResponse::Keep
                } else {
                    PromptResponse::Value(trimmed.to_string())
                })
            }
        }
    }
}
