use console::style;
use weather_lookup_core::TableView;

const HEADERS: [&str; 5] = [
    "City",
    "Description",
    "Temperature (°C)",
    "Pressure (hPa)",
    "Data age (hrs)",
];

/// Render the results table as plain text, one line per row.
pub fn table(view: &TableView<'_>) -> String {
    let rows: Vec<([String; 5], bool)> = match view {
        TableView::Rows(rows) => rows
            .iter()
            .map(|r| {
                (
                    [
                        r.city.to_string(),
                        r.description.to_string(),
                        r.temperature.to_string(),
                        r.pressure.to_string(),
                        r.age_hours.to_string(),
                    ],
                    r.highlighted,
                )
            })
            .collect(),
        TableView::Empty(_) => Vec::new(),
    };

    let mut widths = HEADERS.map(|h| h.chars().count());
    for (cells, _) in &rows {
        for (width, cell) in widths.iter_mut().zip(cells) {
            *width = (*width).max(cell.chars().count());
        }
    }
    let total = widths.iter().sum::<usize>() + 3 * (widths.len() - 1);

    let mut out = String::new();
    out.push_str(&line(&HEADERS.map(String::from), &widths));
    out.push('\n');
    out.push_str(&"-".repeat(total));
    out.push('\n');

    match view {
        TableView::Empty(message) => {
            out.push_str(&format!("{message:^total$}"));
            out.push('\n');
        }
        TableView::Rows(_) => {
            for (cells, highlighted) in &rows {
                let text = line(cells, &widths);
                if *highlighted {
                    out.push_str(&style(text).black().on_yellow().to_string());
                } else {
                    out.push_str(&text);
                }
                out.push('\n');
            }
        }
    }

    out
}

/// Numbered quick-pick list shown above the table.
pub fn quick_picks(cities: &[&str]) -> String {
    cities
        .iter()
        .enumerate()
        .map(|(i, city)| format!("  {}. {city}\n", i + 1))
        .collect()
}

fn line(cells: &[String; 5], widths: &[usize; 5]) -> String {
    cells
        .iter()
        .zip(widths)
        .map(|(cell, &width)| format!("{cell:<width$}"))
        .collect::<Vec<_>>()
        .join(" | ")
        .trim_end()
        .to_string()
}
