use anyhow::Context;
use serde::Deserialize;

/// Population panel fed to the pairwise Fst runs, in the order the pairs
/// are expected downstream.
pub const DEFAULT_POPULATIONS: [&str; 11] = [
    "pop_Amhara",
    "pop_Chabu",
    "pop_Dizi",
    "pop_Hadza",
    "pop_Herero",
    "pop_Fulani",
    "pop_Mursi",
    "pop_RHG",
    "pop_Sandawe",
    "pop_Tikari",
    "pop_San",
];

/// Owned copy of the built-in panel.
pub fn default_populations() -> Vec<String> {
    DEFAULT_POPULATIONS.iter().map(|p| p.to_string()).collect()
}

#[derive(Debug, Deserialize)]
struct PopRow {
    population: String,
}

/// Load population labels from a CSV file with a `population` column.
/// Returns the labels in file order; no deduplication is applied.
pub fn load_population_csv(path: impl AsRef<std::path::Path>) -> anyhow::Result<Vec<String>> {
    let mut rdr = csv::Reader::from_path(path.as_ref())
        .with_context(|| format!("Failed to open population CSV: {:?}", path.as_ref()))?;
    let mut labels = Vec::new();
    for result in rdr.deserialize::<PopRow>() {
        let row = result?;
        labels.push(row.population);
    }
    Ok(labels)
}
