//! Interactive session: a prompt loop over a single [`WeatherLookup`].

use std::fmt;

use anyhow::Result;
use chrono::Utc;
use inquire::{InquireError, Select, Text};
use weather_lookup_core::{RecordId, WeatherLookup, WeatherRecord};

use crate::render;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    TypeCity,
    PickCity,
    GetWeather,
    EditDescription,
    Delete,
    Quit,
}

impl Action {
    const ALL: [Action; 6] = [
        Action::TypeCity,
        Action::PickCity,
        Action::GetWeather,
        Action::EditDescription,
        Action::Delete,
        Action::Quit,
    ];
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Action::TypeCity => "Type a city name",
            Action::PickCity => "Pick a city",
            Action::GetWeather => "Get weather",
            Action::EditDescription => "Edit a description",
            Action::Delete => "Delete a row",
            Action::Quit => "Quit",
        })
    }
}

/// A row offered in the edit/delete pickers.
struct RowChoice {
    id: RecordId,
    label: String,
}

impl RowChoice {
    fn from_record(record: &WeatherRecord) -> Self {
        Self {
            id: record.id,
            label: format!("{} ({})", record.city, record.description),
        }
    }
}

impl fmt::Display for RowChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

pub async fn run(mut lookup: WeatherLookup) -> Result<()> {
    loop {
        print_screen(&lookup);

        let menu = Select::new("What next?", Action::ALL.to_vec()).prompt_skippable();
        let Some(action) = optional(menu)? else {
            return Ok(());
        };

        match action {
            Action::TypeCity => {
                let typed = Text::new("City name:")
                    .with_initial_value(lookup.input())
                    .prompt_skippable();
                if let Some(city) = optional(typed)? {
                    lookup.set_input(city);
                }
            }
            Action::PickCity => {
                let picks = WeatherLookup::quick_picks().to_vec();
                if let Some(city) = optional(Select::new("City:", picks).prompt_skippable())? {
                    lookup.pick(city);
                }
            }
            Action::GetWeather => {
                let outcome = lookup.search().await;
                tracing::debug!(?outcome, "search finished");
            }
            Action::EditDescription => {
                let Some(choice) = choose_row(&lookup, "Edit which row?")? else {
                    continue;
                };
                let current = lookup
                    .records()
                    .iter()
                    .find(|r| r.id == choice.id)
                    .map(|r| r.description.clone())
                    .unwrap_or_default();
                let edited = Text::new("Description:")
                    .with_initial_value(&current)
                    .prompt_skippable();
                if let Some(text) = optional(edited)? {
                    lookup.edit_description(choice.id, text);
                }
            }
            Action::Delete => {
                if let Some(choice) = choose_row(&lookup, "Delete which row?")? {
                    lookup.delete(choice.id);
                }
            }
            Action::Quit => return Ok(()),
        }
    }
}

fn print_screen(lookup: &WeatherLookup) {
    println!();
    println!("Weather Lookup");
    println!();
    println!("Quick picks:");
    print!("{}", render::quick_picks(WeatherLookup::quick_picks()));
    println!();
    println!("City: {}", lookup.input());
    println!();
    print!("{}", render::table(&lookup.view(Utc::now())));
    println!();
}

fn choose_row(lookup: &WeatherLookup, prompt: &str) -> Result<Option<RowChoice>> {
    if lookup.records().is_empty() {
        println!("There are no rows yet.");
        return Ok(None);
    }

    let choices = lookup.records().iter().map(RowChoice::from_record).collect();
    optional(Select::new(prompt, choices).prompt_skippable())
}

/// Esc and Ctrl-C both mean "never mind".
fn optional<T>(answer: Result<Option<T>, InquireError>) -> Result<Option<T>> {
    match answer {
        Ok(value) => Ok(value),
        Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => Ok(None),
        Err(err) => Err(err.into()),
    }
}
