//! Resolution of the assistant and script flavor for an init run.

use crate::domain::{
    AppError, Assistant, DEFAULT_ASSISTANT, OptionDisplay, OptionSet, ScriptFlavor,
};
use crate::ports::{AssistantCatalog, ChoicePrompt};

pub const ASSISTANT_PROMPT: &str = "Choose your AI assistant";
pub const SCRIPT_PROMPT: &str = "Choose the script format";

/// Values supplied on the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InitOptions {
    pub assistant: Option<String>,
    pub script: Option<String>,
}

/// A value filled in without asking because no terminal was attached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AutoSelected {
    Assistant(String),
    ScriptFlavor(ScriptFlavor),
}

impl AutoSelected {
    /// The identifier that was chosen.
    pub fn value(&self) -> &str {
        match self {
            AutoSelected::Assistant(key) => key,
            AutoSelected::ScriptFlavor(flavor) => flavor.key(),
        }
    }
}

/// Fully resolved configuration for an init run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InitConfig {
    pub assistant: Assistant,
    pub flavor: ScriptFlavor,
    pub auto_selected: Vec<AutoSelected>,
}

/// Selector options for the assistant catalog.
pub fn assistant_options<C: AssistantCatalog>(catalog: &C) -> Result<OptionSet, AppError> {
    let mut options = OptionSet::new();
    for assistant in catalog.list_all() {
        options.push(
            assistant.key.clone(),
            OptionDisplay::Record {
                name: assistant.name.clone(),
                path: assistant.prompt_dir.clone(),
            },
        )?;
    }
    Ok(options)
}

/// Selector options for the script flavors.
pub fn flavor_options() -> Result<OptionSet, AppError> {
    let mut options = OptionSet::new();
    for flavor in ScriptFlavor::ALL {
        options.push(flavor.key(), OptionDisplay::Label(flavor.description().to_string()))?;
    }
    Ok(options)
}

fn lookup_assistant<C: AssistantCatalog>(catalog: &C, key: &str) -> Result<Assistant, AppError> {
    catalog.get(key).cloned().ok_or_else(|| AppError::InvalidAssistant {
        name: key.to_string(),
        available: catalog.keys().join(", "),
    })
}

fn lookup_flavor(key: &str) -> Result<ScriptFlavor, AppError> {
    ScriptFlavor::from_key(key).ok_or_else(|| AppError::InvalidScriptFlavor {
        name: key.to_string(),
        available: ScriptFlavor::available(),
    })
}

// An empty flag value counts as not supplied.
fn supplied(value: Option<&str>) -> Option<&str> {
    value.filter(|value| !value.is_empty())
}

/// Resolve the run configuration.
///
/// Supplied values are validated before anything else happens. Missing values
/// fall back to fixed defaults when `interactive` is false and are asked for
/// through `prompt` otherwise.
pub fn resolve<C, P>(
    options: &InitOptions,
    catalog: &C,
    interactive: bool,
    prompt: &mut P,
) -> Result<InitConfig, AppError>
where
    C: AssistantCatalog,
    P: ChoicePrompt + ?Sized,
{
    let supplied_assistant = supplied(options.assistant.as_deref())
        .map(|key| lookup_assistant(catalog, key))
        .transpose()?;
    let supplied_flavor = supplied(options.script.as_deref()).map(lookup_flavor).transpose()?;

    let mut auto_selected = Vec::new();

    let assistant = match supplied_assistant {
        Some(assistant) => assistant,
        None if !interactive => {
            tracing::info!(assistant = DEFAULT_ASSISTANT, "non-interactive run; using default assistant");
            auto_selected.push(AutoSelected::Assistant(DEFAULT_ASSISTANT.to_string()));
            lookup_assistant(catalog, DEFAULT_ASSISTANT)?
        }
        None => {
            let key =
                prompt.select(&assistant_options(catalog)?, ASSISTANT_PROMPT, Some(DEFAULT_ASSISTANT))?;
            lookup_assistant(catalog, &key)?
        }
    };

    let flavor = match supplied_flavor {
        Some(flavor) => flavor,
        None if !interactive => {
            let flavor = ScriptFlavor::host_default();
            tracing::info!(script = flavor.key(), "non-interactive run; using default script type");
            auto_selected.push(AutoSelected::ScriptFlavor(flavor));
            flavor
        }
        None => {
            let default = ScriptFlavor::host_default();
            let key = prompt.select(&flavor_options()?, SCRIPT_PROMPT, Some(default.key()))?;
            lookup_flavor(&key)?
        }
    };

    Ok(InitConfig { assistant, flavor, auto_selected })
}
