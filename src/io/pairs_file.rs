use anyhow::Context;

use crate::pairs::population_pairs;

/// Write every unordered population pair to `path`, one `first,second` line
/// per pair, newline-terminated, in enumeration order.
///
/// The file is created if absent and truncated if present. Returns the
/// number of pairs written, N*(N-1)/2. A panel of fewer than two labels
/// leaves an empty (but existing) file.
pub fn write_pairs_file(
    path: impl AsRef<std::path::Path>,
    populations: &[String],
) -> anyhow::Result<usize> {
    use std::io::Write;

    let file = std::fs::File::create(path.as_ref())
        .with_context(|| format!("create pairs file failed (path={:?})", path.as_ref()))?;
    // Line count is quadratic in the panel size; stream instead of materializing.
    let mut f = std::io::BufWriter::new(file);

    let mut written = 0usize;
    for (first, second) in population_pairs(populations) {
        writeln!(f, "{},{}", first, second)?;
        written += 1;
    }
    f.flush()
        .with_context(|| format!("flush pairs file failed (path={:?})", path.as_ref()))?;

    Ok(written)
}
